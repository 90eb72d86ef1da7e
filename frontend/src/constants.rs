/// Location of the scan artifact, relative to the page that hosts the dashboard.
pub const SNAPSHOT_PATH: &str = "./data.json";

/// Give up on the artifact after this long and show the unavailable view.
pub const SNAPSHOT_TIMEOUT_SECS: u64 = 30;

/// Shown in place of any value the artifact does not carry.
pub const PLACEHOLDER: &str = "--";

/// Header timestamp used when no snapshot could be loaded.
pub const NEVER_UPDATED: &str = "Never";
