#![deny(missing_docs)]
#![doc = "Core value types and errors for the quadra pseudo-Boolean reduction engine."]

use std::fmt;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod hash;
mod monomial;
mod polynomial;
pub mod provenance;
mod serialization;

pub use errors::{ErrorInfo, QuadError};
pub use hash::{canonical_hash, hash_json};
pub use monomial::Monomial;
pub use polynomial::Polynomial;
pub use provenance::SchemaVersion;
pub use serialization::{poly_from_bytes, poly_from_json, poly_to_bytes, poly_to_json};

/// Identifier of a binary variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Var(u64);

impl Var {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }

    /// Returns the identifier immediately after this one, if representable.
    pub const fn checked_next(&self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(raw) => Some(Self(raw)),
            None => None,
        }
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
