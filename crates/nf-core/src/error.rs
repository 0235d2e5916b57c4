use thiserror::Error;

pub type NfResult<T> = Result<T, NfError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NfError {
    #[error("Graph construction failed: {message}")]
    Construction { message: String },
}
