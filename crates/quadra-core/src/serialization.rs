use crate::errors::{ErrorInfo, QuadError};
use crate::polynomial::Polynomial;

/// Serializes a polynomial to a compact binary representation using `bincode`.
pub fn poly_to_bytes(poly: &Polynomial) -> Result<Vec<u8>, QuadError> {
    bincode::serialize(poly)
        .map_err(|err| QuadError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a polynomial from its binary representation.
pub fn poly_from_bytes(bytes: &[u8]) -> Result<Polynomial, QuadError> {
    bincode::deserialize(bytes)
        .map_err(|err| QuadError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))
}

/// Serializes a polynomial to a pretty printed JSON term list.
pub fn poly_to_json(poly: &Polynomial) -> Result<String, QuadError> {
    serde_json::to_string_pretty(poly)
        .map_err(|err| QuadError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a polynomial from a JSON term list.
///
/// Text that is not a list of `[[ids...], coefficient]` terms (including
/// fractional ids) is a `deserialize-json` error. Well-formed terms are then
/// validated like [`Polynomial::from_terms`], so negative or repeated ids
/// surface as `Input` errors.
pub fn poly_from_json(json: &str) -> Result<Polynomial, QuadError> {
    let terms: Vec<(Vec<i64>, f64)> = serde_json::from_str(json)
        .map_err(|err| QuadError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    Polynomial::from_terms(terms)
}
