//! Static copy shown on the dashboard.

pub const DASHBOARD_TITLE: &str = "Camarilla Scanner";
pub const DASHBOARD_SUBTITLE: &str = "Identifying Tight CPR & Doji Setups";
pub const LAST_UPDATED_PREFIX: &str = "Last Updated: ";
pub const UNAVAILABLE_MESSAGE: &str =
    "No Data Available yet. Please wait for the daily scan to run.";
pub const NO_MATCHES_MESSAGE: &str = "No stocks matched the criteria today.";
pub const FOOTER_NOTE: &str = "Automated by GitHub Actions | Updates daily at 6 PM IST";

pub const READY_BADGE: &str = "Buy Ready";
pub const CPR_WIDTH_LABEL: &str = "CPR Width";
pub const CAMARILLA_CENTER_LABEL: &str = "Camarilla Center";
pub const PIVOT_LABEL: &str = "Monthly Pivot";
pub const SIGNAL_LABEL: &str = "Daily Signal";

/// Accent applied to a value on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Plain,
    Blue,
    Green,
}

pub fn tone_class(tone: Tone) -> &'static str {
    match tone {
        Tone::Plain => "",
        Tone::Blue => "text-blue",
        Tone::Green => "text-green",
    }
}

pub fn scanned_label(total: u64) -> String {
    if total == 1 {
        "1 stock scanned".to_string()
    } else {
        format!("{total} stocks scanned")
    }
}
