use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrmError {
    #[error("Customer not found: {0}")]
    CustomerNotFound(u32),

    #[error("Malformed record line: {0}")]
    MalformedLine(String),

    #[error("Search term cannot be empty")]
    BlankQuery,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input error: {0}")]
    Input(String),
}

pub type Result<T> = std::result::Result<T, CrmError>;
