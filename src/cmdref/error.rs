use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmdrefError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Prompt cancelled")]
    PromptCancelled,

    #[error("Prompt error: {0}")]
    Prompt(String),

    #[error("Unrecognized action: {0}")]
    UnrecognizedAction(String),

    #[error("Config error: {0}")]
    Config(String),
}

impl CmdrefError {
    /// True for failures at the storage boundary (read, decode or write).
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            CmdrefError::Io(_) | CmdrefError::Serialization(_) | CmdrefError::Store(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, CmdrefError>;
