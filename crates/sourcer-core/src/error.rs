use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read links file: {0}")]
    Io(#[from] std::io::Error),

    #[error("No links found in file: {0}")]
    EmptyLinkList(String),

    #[error("Invalid notebook URL '{url}': {reason}")]
    InvalidNotebookUrl { url: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
