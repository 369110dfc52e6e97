//! Error types for the table engine.

/// Errors that can occur while building or rolling tables.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    /// A dice expression, table, list or composite is malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A rolled sum matched no entry of the table.
    #[error("roll of {sum} on table '{table}' matched no entry")]
    UnresolvedRoll {
        /// Name of the table that was rolled.
        table: String,
        /// The dice sum that had no entry.
        sum: u32,
    },

    /// A registry id or tag name does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Too few tags remain after exclusions to pick two distinct ones.
    #[error("need at least 2 eligible tags, found {eligible}")]
    DegenerateSelection {
        /// How many tags survived the exclusion filter.
        eligible: usize,
    },

    /// Table actions nested deeper than the engine allows.
    #[error("table '{table}' exceeded the nested roll limit")]
    RecursionLimit {
        /// Name of the table being rolled when the limit hit.
        table: String,
    },
}

impl TableError {
    /// Shorthand for an [`TableError::InvalidConfiguration`] with a message.
    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidConfiguration(msg.into())
    }
}

/// Convenience result type for table operations.
pub type TableResult<T> = Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        assert_eq!(
            TableError::invalid("bad dice").to_string(),
            "invalid configuration: bad dice"
        );
        assert_eq!(
            TableError::UnresolvedRoll {
                table: "Leadership".to_string(),
                sum: 7,
            }
            .to_string(),
            "roll of 7 on table 'Leadership' matched no entry"
        );
        assert_eq!(
            TableError::DegenerateSelection { eligible: 1 }.to_string(),
            "need at least 2 eligible tags, found 1"
        );
        assert_eq!(
            TableError::NotFound("no tag with name \"Foo\"".to_string()).to_string(),
            "no tag with name \"Foo\""
        );
    }
}
