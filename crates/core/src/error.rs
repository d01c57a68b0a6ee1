//! Error types for gadget-id-core.

use std::io;

use thiserror::Error;

use crate::identity::IdentityField;

/// Core library error type.
#[derive(Debug, Error)]
pub enum Error {
    /// Writing one of the identity files failed.
    #[error("failed to save {field}")]
    Save {
        field: IdentityField,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// The identity field whose persistence failed.
    pub fn field(&self) -> IdentityField {
        match self {
            Self::Save { field, .. } => *field,
        }
    }
}

/// Convenience Result alias.
pub type Result<T> = std::result::Result<T, Error>;
