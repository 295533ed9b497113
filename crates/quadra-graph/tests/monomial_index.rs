use quadra_core::{Monomial, Polynomial};
use quadra_graph::{MonomialId, MonomialIndex};

#[test]
fn replace_tracks_max_degree() {
    let poly = Polynomial::from_terms(vec![
        (vec![0, 1, 2, 3], 1.0),
        (vec![0, 1, 2], 1.0),
        (vec![4, 5], 1.0),
    ])
    .unwrap();
    let mut index = MonomialIndex::from_polynomial(&poly);
    assert_eq!(index.max_degree(), 4);

    let quartic = index
        .iter()
        .find(|(_, monomial)| monomial.degree() == 4)
        .map(|(id, _)| id)
        .unwrap();
    let previous = index
        .replace(quartic, Monomial::new(&[2, 3, 6]).unwrap())
        .unwrap();
    assert_eq!(previous, Monomial::new(&[0, 1, 2, 3]).unwrap());
    assert_eq!(index.max_degree(), 3);
    assert_eq!(index.over_degree(2).len(), 2);
    assert_eq!(index.over_degree(3).len(), 0);
}

#[test]
fn replace_rejects_unknown_ids() {
    let mut index = MonomialIndex::new();
    assert!(index.is_empty());
    assert_eq!(index.max_degree(), 0);
    let err = index
        .replace(MonomialId::from_raw(0), Monomial::unit())
        .unwrap_err();
    assert_eq!(err.info().code, "unknown-monomial");
}

#[test]
fn push_assigns_consecutive_ids() {
    let mut index = MonomialIndex::new();
    let a = index.push(Monomial::new(&[1]).unwrap());
    let b = index.push(Monomial::new(&[1, 2]).unwrap());
    assert_eq!(a, MonomialId::from_raw(0));
    assert_eq!(b, MonomialId::from_raw(1));
    assert_eq!(index.len(), 2);
    assert_eq!(index.max_degree(), 2);
}
