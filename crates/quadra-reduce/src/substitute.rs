use quadra_core::{Monomial, Polynomial, QuadError, Var};

/// Structural coefficient of the fresh variable in a fusion penalty.
pub const FRESH_COEFFICIENT: f64 = 3.0;
/// Coefficient of the fused pair's product.
pub const PAIR_COEFFICIENT: f64 = 1.0;
/// Coefficient of each (original, fresh) product.
pub const LINK_COEFFICIENT: f64 = -2.0;

/// Removes both members of `pair` from `monomial` and appends `new_variable`.
///
/// Variables outside the pair keep their relative order.
pub fn substitute(pair: (Var, Var), new_variable: Var, monomial: &[Var]) -> Vec<Var> {
    let mut rewritten: Vec<Var> = monomial
        .iter()
        .copied()
        .filter(|var| *var != pair.0 && *var != pair.1)
        .collect();
    rewritten.push(new_variable);
    rewritten
}

/// Penalty forcing `fresh` to equal `left AND right`.
///
/// `3·y + xi·xj − 2·xi·y − 2·xj·y` is zero on every consistent assignment and
/// at least one otherwise.
pub fn penalty_terms(left: Var, right: Var, fresh: Var) -> Result<Polynomial, QuadError> {
    Ok(Polynomial::from_monomials([
        (Monomial::single(fresh), FRESH_COEFFICIENT),
        (Monomial::pair(left, right)?, PAIR_COEFFICIENT),
        (Monomial::pair(left, fresh)?, LINK_COEFFICIENT),
        (Monomial::pair(right, fresh)?, LINK_COEFFICIENT),
    ]))
}
