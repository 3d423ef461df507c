use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExpensegenError {
    #[error("Parse error in row {row}: {reason}")]
    Parse { row: usize, reason: String },

    #[error("Could not prepare store: {0}")]
    Schema(#[source] rusqlite::Error),

    #[error("Checksum lookup failed, batch aborted: {0}")]
    ExistenceQuery(#[source] rusqlite::Error),

    #[error("Insert failed for checksum {checksum}: {source}")]
    Insert {
        checksum: String,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No table matching `{0}` found on page")]
    TableNotFound(String),

    #[error("Invalid selector `{0}`")]
    Selector(String),

    #[error("Settings error: {0}")]
    Settings(String),
}

impl ExpensegenError {
    /// Parse failure not yet tied to a row; the extractor fills in the row number.
    pub(crate) fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            row: 0,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExpensegenError>;
