//! Error types surfaced by the UI layer.

use thiserror::Error;
use uuid::Uuid;

/// A stored preference could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// The stored value is not one of the accepted spellings.
    #[error("unknown value {value:?} for preference {key}")]
    UnknownValue {
        /// Preference name.
        key: &'static str,
        /// Raw stored value.
        value: String,
    },
}

/// Failures reported to an error boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A cell action referenced a cell that is no longer on the dashboard.
    #[error("cell {0} is not on the dashboard")]
    CellNotFound(Uuid),
    /// A preference failed to load.
    #[error(transparent)]
    Preference(#[from] PreferenceError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        let err = PreferenceError::UnknownValue {
            key: "cell_menu.open_policy",
            value: "sometimes".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown value \"sometimes\" for preference cell_menu.open_policy"
        );
        let wrapped = UiError::from(err.clone());
        assert_eq!(wrapped.to_string(), err.to_string());
        assert!(
            UiError::CellNotFound(Uuid::nil())
                .to_string()
                .contains("00000000-0000-0000-0000-000000000000")
        );
    }
}
