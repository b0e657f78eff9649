use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestkitError {
    #[error("Failed to write report: {0}")]
    Io(#[from] std::io::Error),
}
