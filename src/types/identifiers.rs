use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum IdentifierError {
    #[error("Identifier must not be empty")]
    Empty,
    #[error("Identifier must not contain whitespace: {0:?}")]
    Whitespace(String),
}

/// Trim and validate a raw identifier string.
fn normalize_id(raw: &str) -> Result<String, IdentifierError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(IdentifierError::Empty);
    }
    if trimmed.chars().any(char::is_whitespace) {
        return Err(IdentifierError::Whitespace(trimmed.to_string()));
    }
    Ok(trimmed.to_string())
}

macro_rules! opaque_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl TryFrom<String> for $name {
            type Error = IdentifierError;

            fn try_from(raw: String) -> Result<Self, Self::Error> {
                Self::new(raw)
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> String {
                id.0
            }
        }

        impl $name {
            pub fn new(raw: impl AsRef<str>) -> Result<Self, IdentifierError> {
                normalize_id(raw.as_ref()).map($name)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

opaque_id!(
    /// Unique identifier of a post within a feed.
    PostId
);

opaque_id!(
    /// Opaque identity of an authenticated user.
    ///
    /// Resolved by the authentication layer; the feed only compares it for
    /// equality. Display names are never a substitute.
    UserId
);

opaque_id!(TopicId);

/// Content hash of a post's code body.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostVersion(String);

impl PostVersion {
    pub fn from_code(code: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(code.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        PostVersion(format!("sha256:{hex}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
