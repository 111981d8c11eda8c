use serde::{Deserialize, Serialize};

/// Text/binary encodings collaborators must name consistently.
///
/// These are registry entries, not algorithms this crate implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// UTF-8 text encoding.
    #[serde(rename = "utf-8")]
    Utf8,
    /// Base64 binary-to-text encoding.
    Base64,
    /// Hexadecimal binary-to-text encoding.
    Hex,
}

impl Encoding {
    /// Default encoding for text payloads.
    pub const DEFAULT: Encoding = Encoding::Utf8;

    /// Canonical name of the encoding.
    pub fn as_str(&self) -> &'static str {
        match self {
            Encoding::Utf8 => "utf-8",
            Encoding::Base64 => "base64",
            Encoding::Hex => "hex",
        }
    }
}

/// Digest algorithms collaborators must name consistently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlg {
    /// SHA-1.
    Sha1,
    /// SHA-256.
    Sha256,
}

impl HashAlg {
    /// Canonical name of the algorithm.
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlg::Sha1 => "sha1",
            HashAlg::Sha256 => "sha256",
        }
    }
}
