//! Process configuration and the token-decryption seam.
//!
//! Configuration is read from the environment exactly once, at process
//! start, and injected by reference from then on; no component reads
//! ambient globals. Decrypting the compliance-API token is a collaborator
//! concern behind [`TokenDecryptor`]; this module only handles the
//! base64 transport encoding of the ciphertext.

use std::fmt;

use base64::Engine;
use thiserror::Error;

/// Environment variable naming the deployment environment.
pub const ENV_NAME_VAR: &str = "CHAINLINE_ENV_NAME";
/// Environment variable carrying the compliance-API base URL.
pub const COMPLIANCE_API_VAR: &str = "CHAINLINE_COMPLIANCE_API";
/// Environment variable carrying the encrypted compliance-API token.
pub const COMPLIANCE_TOKEN_VAR: &str = "CHAINLINE_ENC_COMPLIANCE_API_TOKEN";

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is unset or not UTF-8.
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    /// Token ciphertext is not valid base64.
    #[error("token ciphertext is not valid base64: {0}")]
    InvalidCiphertext(#[from] base64::DecodeError),
    /// The injected decryptor failed.
    #[error("token decryption failed: {0}")]
    Decrypt(String),
}

/// Decrypts the compliance-API token ciphertext.
///
/// Implemented by an external collaborator (KMS client, local keyring);
/// this crate never sees key material.
pub trait TokenDecryptor {
    /// Decrypts ciphertext bytes to the plaintext token.
    fn decrypt(&self, ciphertext: &[u8]) -> Result<String, ConfigError>;
}

/// Encrypted compliance-API token, held as base64 ciphertext.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptedToken(String);

impl EncryptedToken {
    /// Wraps base64 ciphertext as read from the environment.
    pub fn new(ciphertext_b64: impl Into<String>) -> Self {
        Self(ciphertext_b64.into())
    }

    /// Decodes the transport encoding to raw ciphertext bytes.
    pub fn ciphertext(&self) -> Result<Vec<u8>, ConfigError> {
        Ok(base64::engine::general_purpose::STANDARD.decode(&self.0)?)
    }

    /// Decodes the ciphertext and hands it to the injected decryptor.
    pub fn decrypt_with(&self, decryptor: &dyn TokenDecryptor) -> Result<String, ConfigError> {
        decryptor.decrypt(&self.ciphertext()?)
    }
}

impl fmt::Debug for EncryptedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Ciphertext stays out of logs and panic messages.
        f.write_str("EncryptedToken(..)")
    }
}

/// Process configuration, constructed once at startup and injected.
#[derive(Debug, Clone)]
pub struct Config {
    /// Deployment environment name; the stream name derives from it.
    pub env_name: String,
    /// Compliance-API base URL.
    pub compliance_api_url: String,
    /// Encrypted compliance-API access token.
    pub compliance_api_token: EncryptedToken,
}

impl Config {
    /// Reads configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] naming the first variable that
    /// is unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            env_name: require(ENV_NAME_VAR)?,
            compliance_api_url: require(COMPLIANCE_API_VAR)?,
            compliance_api_token: EncryptedToken::new(require(COMPLIANCE_TOKEN_VAR)?),
        })
    }

    /// Name of the event stream this deployment writes to.
    pub fn stream_name(&self) -> String {
        format!("{}-events", self.env_name)
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar(name))
}
