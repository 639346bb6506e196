/// Core errors shared across the Veridex crates.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("invalid credential definition identifier: {0}")]
    InvalidIdentifier(String),
}
