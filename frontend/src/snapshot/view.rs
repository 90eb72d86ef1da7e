use crate::constants::{NEVER_UPDATED, PLACEHOLDER};

use super::{
    format::{
        CAMARILLA_CENTER_LABEL, CPR_WIDTH_LABEL, PIVOT_LABEL, READY_BADGE, SIGNAL_LABEL, Tone,
        scanned_label,
    },
    state::LoadState,
    types::{DisplayValue, Entry, Snapshot},
};

/// Everything the dashboard shows for one [`LoadState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Unavailable { header: HeaderView },
    Empty { header: HeaderView },
    Populated { header: HeaderView, cards: Vec<CardView> },
}

impl DashboardView {
    pub fn header(&self) -> Option<&HeaderView> {
        match self {
            DashboardView::Loading => None,
            DashboardView::Unavailable { header }
            | DashboardView::Empty { header }
            | DashboardView::Populated { header, .. } => Some(header),
        }
    }

    pub fn cards(&self) -> &[CardView] {
        match self {
            DashboardView::Populated { cards, .. } => cards,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub last_updated: String,
    pub scanned: Option<String>,
}

/// Rendering key of a card. Position keeps duplicate tickers apart.
pub type CardKey = (usize, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub slot: usize,
    pub title: String,
    pub badge: &'static str,
    pub price: String,
    pub tiles: [LabeledValue; 2],
    pub details: [LabeledValue; 2],
}

impl CardView {
    pub fn key(&self) -> CardKey {
        (self.slot, self.title.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledValue {
    pub label: &'static str,
    pub value: String,
    pub tone: Tone,
}

/// Project the session state into the view. Pure: the same state always
/// yields the same view.
pub fn project(state: &LoadState) -> DashboardView {
    match state {
        LoadState::Pending => DashboardView::Loading,
        LoadState::Failed(_) => DashboardView::Unavailable {
            header: HeaderView {
                last_updated: NEVER_UPDATED.to_string(),
                scanned: None,
            },
        },
        LoadState::Succeeded(snapshot) if snapshot.is_empty() => DashboardView::Empty {
            header: project_header(snapshot),
        },
        LoadState::Succeeded(snapshot) => DashboardView::Populated {
            header: project_header(snapshot),
            cards: snapshot
                .results
                .iter()
                .enumerate()
                .map(|(slot, entry)| project_card(slot, entry))
                .collect(),
        },
    }
}

fn project_header(snapshot: &Snapshot) -> HeaderView {
    HeaderView {
        last_updated: or_placeholder(snapshot.last_updated.as_ref()),
        scanned: snapshot.total_scanned.map(scanned_label),
    }
}

/// Card template for a single entry. Values pass through untouched; the
/// width only gains a `%` suffix.
pub fn project_card(slot: usize, entry: &Entry) -> CardView {
    let width = entry
        .width_pct()
        .map(|width| format!("{width}%"))
        .unwrap_or_else(|| PLACEHOLDER.to_string());

    CardView {
        slot,
        title: or_placeholder(entry.ticker.as_ref()),
        badge: READY_BADGE,
        price: or_placeholder(entry.price.as_ref()),
        tiles: [
            LabeledValue {
                label: CPR_WIDTH_LABEL,
                value: width,
                tone: Tone::Blue,
            },
            LabeledValue {
                label: CAMARILLA_CENTER_LABEL,
                value: or_placeholder(entry.center()),
                tone: Tone::Green,
            },
        ],
        details: [
            LabeledValue {
                label: PIVOT_LABEL,
                value: or_placeholder(entry.pivot()),
                tone: Tone::Plain,
            },
            LabeledValue {
                label: SIGNAL_LABEL,
                value: or_placeholder(entry.signal().as_ref()),
                tone: Tone::Green,
            },
        ],
    }
}

fn or_placeholder(value: Option<&DisplayValue>) -> String {
    value
        .map(|value| value.as_str().to_string())
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snapshot::{loader::LoadError, types::PivotRange};

    fn entry(ticker: &str) -> Entry {
        Entry {
            ticker: Some(ticker.into()),
            price: Some("123.45".into()),
            range: Some(PivotRange {
                width_pct: Some("0.8".into()),
                pivot: Some("100.0".into()),
            }),
            center: Some("101.0".into()),
            signal: Some("Buy".into()),
            ..Entry::default()
        }
    }

    fn succeeded(results: Vec<Entry>) -> LoadState {
        LoadState::Succeeded(Snapshot {
            last_updated: Some("2024-05-22 18:00:04".into()),
            total_scanned: None,
            results,
        })
    }

    fn values(items: &[LabeledValue]) -> Vec<&str> {
        items.iter().map(|item| item.value.as_str()).collect()
    }

    #[test]
    fn pending_shows_only_loading() {
        let view = project(&LoadState::Pending);
        assert_eq!(view, DashboardView::Loading);
        assert!(view.header().is_none());
        assert!(view.cards().is_empty());
    }

    #[test]
    fn failure_shows_never_and_no_cards() {
        let reasons = [
            LoadError::Transport("offline".into()),
            LoadError::Status {
                status: 404,
                status_text: "Not Found".into(),
            },
            LoadError::Parse("trailing characters".into()),
        ];

        for reason in reasons {
            let view = project(&LoadState::Failed(reason));
            assert!(matches!(view, DashboardView::Unavailable { .. }));
            assert_eq!(view.header().map(|h| h.last_updated.as_str()), Some("Never"));
            assert!(view.cards().is_empty());
        }
    }

    #[test]
    fn failure_reason_is_not_rendered() {
        let view = project(&LoadState::Failed(LoadError::Parse("secret detail".into())));
        assert!(!format!("{view:?}").contains("secret detail"));
    }

    #[test]
    fn empty_results_show_no_matches() {
        let view = project(&succeeded(Vec::new()));
        match view {
            DashboardView::Empty { header } => {
                assert_eq!(header.last_updated, "2024-05-22 18:00:04");
            }
            other => panic!("expected empty view, got {other:?}"),
        }
    }

    #[test]
    fn single_entry_renders_one_card() {
        let view = project(&succeeded(vec![entry("AAA")]));
        let cards = view.cards();
        assert_eq!(cards.len(), 1);

        let card = &cards[0];
        assert_eq!(card.title, "AAA");
        assert_eq!(card.badge, "Buy Ready");
        assert_eq!(card.price, "123.45");
        assert_eq!(values(&card.tiles), vec!["0.8%", "101.0"]);
        assert_eq!(values(&card.details), vec!["100.0", "Buy"]);
    }

    #[test]
    fn cards_follow_snapshot_order() {
        let view = project(&succeeded(vec![entry("ZZZ"), entry("AAA"), entry("MMM")]));
        let titles: Vec<_> = view.cards().iter().map(|card| card.title.as_str()).collect();
        assert_eq!(titles, vec!["ZZZ", "AAA", "MMM"]);
    }

    #[test]
    fn duplicate_tickers_render_separate_cards() {
        let view = project(&succeeded(vec![entry("AAA"), entry("AAA")]));
        let cards = view.cards();
        assert_eq!(cards.len(), 2);
        assert_ne!(cards[0].key(), cards[1].key());
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let view = project(&succeeded(vec![Entry::default()]));
        let card = &view.cards()[0];
        assert_eq!(card.title, "--");
        assert_eq!(card.price, "--");
        assert_eq!(values(&card.tiles), vec!["--", "--"]);
        assert_eq!(values(&card.details), vec!["--", "--"]);
        assert_eq!(card.badge, "Buy Ready");
    }

    #[test]
    fn one_bad_field_leaves_the_rest_of_the_dashboard_intact() {
        let snapshot = crate::snapshot::loader::parse_snapshot(
            r#"{
                "last_updated": "2024-05-22 18:00:04",
                "total_scanned": "742",
                "stocks": [
                    { "ticker": "AAA", "price": "123.45", "cpr": "0.5", "signal": "Buy" },
                    null
                ]
            }"#,
        )
        .expect("lenient snapshot");
        let view = project(&LoadState::Succeeded(snapshot));

        assert!(matches!(view, DashboardView::Populated { .. }));
        let header = view.header().expect("header");
        assert_eq!(header.scanned.as_deref(), Some("742 stocks scanned"));

        let cards = view.cards();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].title, "AAA");
        assert_eq!(values(&cards[0].tiles), vec!["--", "--"]);
        assert_eq!(values(&cards[0].details), vec!["--", "Buy"]);
        assert_eq!(cards[1].title, "--");
    }

    #[test]
    fn header_without_timestamp_uses_placeholder() {
        let state = LoadState::Succeeded(Snapshot {
            last_updated: None,
            total_scanned: Some(500),
            results: vec![entry("AAA")],
        });
        let header = project(&state).header().cloned().expect("header");
        assert_eq!(header.last_updated, "--");
        assert_eq!(header.scanned.as_deref(), Some("500 stocks scanned"));
    }

    #[test]
    fn projection_is_idempotent() {
        let states = [
            LoadState::Pending,
            LoadState::Failed(LoadError::Transport("offline".into())),
            succeeded(Vec::new()),
            succeeded(vec![entry("AAA"), entry("BBB")]),
        ];

        for state in &states {
            assert_eq!(project(state), project(state));
        }
    }
}
