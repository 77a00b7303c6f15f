/// Error types for building and writing decks.
use thiserror::Error;

/// Result type for deck operations.
pub type Result<T> = std::result::Result<T, DeckError>;

/// Error types for deck operations.
#[derive(Error, Debug)]
pub enum DeckError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP container error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// XML writing or parsing error
    #[error("XML error: {0}")]
    Xml(String),

    /// Part name that does not start with a slash
    #[error("Invalid pack URI: {0}")]
    InvalidPackUri(String),

    /// Part missing from a package being read
    #[error("Part not found: {0}")]
    PartNotFound(String),

    /// Neither HOME nor USERPROFILE is set
    #[error("Cannot determine the home directory (HOME is not set)")]
    HomeNotFound,

    /// Tool slide received too few cards
    #[error("Tool slide needs {expected} cards, got {got}")]
    ToolCount { expected: usize, got: usize },

    /// Table slide has no header columns
    #[error("Table needs at least one column")]
    EmptyTable,

    /// Table row width differs from the header width
    #[error("Table row {row} has {got} cells, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        got: usize,
    },
}

impl From<quick_xml::Error> for DeckError {
    fn from(err: quick_xml::Error) -> Self {
        DeckError::Xml(err.to_string())
    }
}

impl From<quick_xml::events::attributes::AttrError> for DeckError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        DeckError::Xml(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ragged_table_message() {
        let err = DeckError::RaggedTable {
            row: 2,
            expected: 3,
            got: 2,
        };
        assert_eq!(err.to_string(), "Table row 2 has 2 cells, expected 3");
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: DeckError = io.into();
        assert!(matches!(err, DeckError::Io(_)));
    }
}
