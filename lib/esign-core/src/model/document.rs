use std::path::Path;

use ct_codecs::{Base64, Decoder, Encoder};
use validator::{Validate, ValidationError};

/// Named document carried as standard (padded) base64 text.
#[derive(Clone, Debug, PartialEq, Eq, Validate)]
pub struct Base64Document {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1), custom(function = "validate_base64"))]
    pub content: String,
}

impl Base64Document {
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self, ct_codecs::Error> {
        Ok(Self {
            name: name.into(),
            content: Base64::encode_to_string(bytes)?,
        })
    }

    /// Extension of `name` without the dot, if any.
    pub fn file_extension(&self) -> Option<&str> {
        Path::new(&self.name)
            .extension()
            .and_then(|extension| extension.to_str())
    }

    pub fn decode(&self) -> Result<Vec<u8>, ct_codecs::Error> {
        Base64::decode_to_vec(&self.content, None)
    }
}

fn validate_base64(content: &str) -> Result<(), ValidationError> {
    Base64::decode_to_vec(content, None)
        .map(|_| ())
        .map_err(|_| ValidationError::new("base64"))
}
