//! Canonical hashing helpers for polynomials and serialized reports.

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::errors::{ErrorInfo, QuadError};
use crate::polynomial::Polynomial;

/// Computes the canonical structural hash of a polynomial.
///
/// Terms are visited in canonical monomial order, so two polynomials with the
/// same terms hash identically regardless of how they were built.
pub fn canonical_hash(poly: &Polynomial) -> String {
    let mut hasher = Sha256::new();
    hasher.update((poly.len() as u64).to_le_bytes());
    for (monomial, coefficient) in poly.iter() {
        hasher.update((monomial.degree() as u64).to_le_bytes());
        for var in monomial.vars() {
            hasher.update(var.as_raw().to_le_bytes());
        }
        hasher.update(coefficient.to_bits().to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// Hashes the compact JSON form of any serializable value.
pub fn hash_json<T: Serialize>(value: &T) -> Result<String, QuadError> {
    let json = serde_json::to_vec(value)
        .map_err(|err| QuadError::Serde(ErrorInfo::new("serialize", err.to_string())))?;
    let mut hasher = Sha256::new();
    hasher.update(json);
    Ok(format!("{:x}", hasher.finalize()))
}
