use super::{loader::LoadError, types::Snapshot};

/// Where the session stands with respect to the scan artifact.
///
/// The only transition is out of `Pending`, through [`LoadState::resolve`].
/// Reloading the page is the only way back.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Pending,
    Failed(LoadError),
    Succeeded(Snapshot),
}

impl LoadState {
    pub fn is_settled(&self) -> bool {
        !matches!(self, LoadState::Pending)
    }

    /// Apply the loader outcome. Returns `false`, leaving the state untouched,
    /// when the session already settled.
    pub fn resolve(&mut self, outcome: Result<Snapshot, LoadError>) -> bool {
        if self.is_settled() {
            log::warn!("ignoring snapshot outcome; load state already settled");
            return false;
        }

        *self = match outcome {
            Ok(snapshot) => LoadState::Succeeded(snapshot),
            Err(err) => LoadState::Failed(err),
        };
        true
    }

    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            LoadState::Succeeded(snapshot) => Some(snapshot),
            _ => None,
        }
    }
}
