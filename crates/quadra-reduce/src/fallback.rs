use quadra_core::{QuadError, Var};

/// Folds `sequence` pairwise until at most `target` variables remain.
///
/// Each round walks the sequence in disjoint adjacent pairs, replacing every
/// pair with the variable returned by `fuse`; an odd trailing variable is
/// carried over unchanged. `target` must be at least one.
pub fn fold_chain(
    sequence: &[Var],
    target: usize,
    mut fuse: impl FnMut(Var, Var) -> Result<Var, QuadError>,
) -> Result<Vec<Var>, QuadError> {
    let target = target.max(1);
    let mut current = sequence.to_vec();
    while current.len() > target {
        let mut next = Vec::with_capacity(current.len().div_ceil(2));
        for chunk in current.chunks(2) {
            match *chunk {
                [left, right] => next.push(fuse(left, right)?),
                [carried] => next.push(carried),
                _ => {}
            }
        }
        current = next;
    }
    Ok(current)
}
