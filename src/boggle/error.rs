use std::io;

/// Errors raised by the dictionary loader, the board constructors and the solver.
///
/// Precondition failures (`DictionaryNotLoaded`, `InvalidBoard`) are returned
/// before the solver touches any of its state, so a failed call can simply be
/// retried once the caller has fixed its input.
#[derive(Debug, thiserror::Error)]
pub enum BoggleError {
    #[error("no dictionary has been loaded")]
    DictionaryNotLoaded,

    #[error("invalid board: {reason}")]
    InvalidBoard { reason: String },

    #[error("invalid word \"{word}\": only the letters a-z are supported")]
    InvalidWord { word: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl BoggleError {
    pub(crate) fn invalid_board(reason: impl Into<String>) -> Self {
        Self::InvalidBoard {
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoggleError>;
