use crate::error::{AdvisoryError, Result};
use serde::Serialize;

/// The committed location pair driving advisory and heatmap queries.
///
/// `river` is only meaningful when non-empty and is implicitly scoped to
/// `state`; changing the state invalidates the river.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LocationSelection {
    pub state: String,
    pub river: String,
}

impl LocationSelection {
    pub fn new(state: impl Into<String>, river: impl Into<String>) -> Self {
        LocationSelection {
            state: state.into(),
            river: river.into(),
        }
    }

    /// Both fields must be non-empty before any network call is made.
    pub fn validate(&self) -> Result<()> {
        if self.state.trim().is_empty() || self.river.trim().is_empty() {
            return Err(AdvisoryError::Validation(
                "Please select both a state and a river".to_string(),
            ));
        }
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.validate().is_ok()
    }

    /// Commit a new state. A previously chosen river belongs to the old
    /// scope and is cleared.
    pub fn set_state(&mut self, state: impl Into<String>) {
        let state = state.into();
        if state != self.state {
            self.river.clear();
        }
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdvisoryError;

    #[test]
    fn test_validate_requires_both_fields() {
        assert!(LocationSelection::new("Kerala", "Periyar").validate().is_ok());
        for selection in [
            LocationSelection::new("", "Periyar"),
            LocationSelection::new("Kerala", ""),
            LocationSelection::new("", ""),
            LocationSelection::new("  ", "Periyar"),
        ] {
            let err = selection.validate().unwrap_err();
            assert!(matches!(err, AdvisoryError::Validation(_)));
        }
    }

    #[test]
    fn test_changing_state_clears_river() {
        let mut selection = LocationSelection::new("Kerala", "Periyar");
        selection.set_state("Bihar");
        assert_eq!(selection.state, "Bihar");
        assert_eq!(selection.river, "");
    }

    #[test]
    fn test_recommitting_same_state_keeps_river() {
        let mut selection = LocationSelection::new("Kerala", "Periyar");
        selection.set_state("Kerala");
        assert_eq!(selection.river, "Periyar");
    }
}
