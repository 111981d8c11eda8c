use thiserror::Error;

/// Core error types.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Address is empty or not a recognized BTC/ETH literal.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// Event type is outside the closed enumeration.
    #[error("unknown event type: '{0}'")]
    UnknownEventType(String),
    /// Identifier minting failed.
    #[error(transparent)]
    Mint(#[from] crate::minter::MintError),
}
