use quadra_core::{Monomial, Polynomial, Var};
use quadra_graph::{build_graph, canonical_hash, MonomialId, VarPair};

fn v(raw: u64) -> Var {
    Var::from_raw(raw)
}

fn pair(a: u64, b: u64) -> VarPair {
    VarPair::new(v(a), v(b))
}

#[test]
fn shared_pairs_produce_parallel_edges() {
    let poly = Polynomial::from_terms(vec![(vec![0, 1, 2], 1.0), (vec![0, 1, 3], 1.0)]).unwrap();
    let (index, graph) = build_graph(&poly);

    assert_eq!(index.len(), 2);
    assert_eq!(graph.node_count(), 4);
    assert_eq!(graph.edge_count(), 6);
    assert_eq!(graph.multiplicity(pair(0, 1)), 2);
    assert_eq!(graph.multiplicity(pair(1, 0)), 2);
    assert_eq!(graph.multiplicity(pair(0, 2)), 1);
    assert_eq!(graph.multiplicity(pair(2, 3)), 0);
    assert_eq!(
        graph.shared_monomials(pair(0, 1)),
        vec![MonomialId::from_raw(0), MonomialId::from_raw(1)]
    );
}

#[test]
fn linear_and_constant_terms_add_nodes_only() {
    let poly = Polynomial::from_terms(vec![(vec![5], 7.0), (vec![], 1.0)]).unwrap();
    let (index, graph) = build_graph(&poly);
    assert_eq!(index.len(), 2);
    assert!(graph.contains_node(v(5)));
    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(index.max_degree(), 1);
}

#[test]
fn index_ids_follow_canonical_order() {
    let poly = Polynomial::from_terms(vec![(vec![3, 4], 1.0), (vec![0, 1, 2], 1.0)]).unwrap();
    let (index, _) = build_graph(&poly);
    assert_eq!(
        index.get(MonomialId::from_raw(0)).unwrap(),
        &Monomial::new(&[0, 1, 2]).unwrap()
    );
    assert_eq!(
        index.get(MonomialId::from_raw(1)).unwrap(),
        &Monomial::new(&[3, 4]).unwrap()
    );
    let err = index.get(MonomialId::from_raw(9)).unwrap_err();
    assert_eq!(err.info().code, "unknown-monomial");
}

#[test]
fn edge_surgery_updates_multiplicities() {
    let poly = Polynomial::from_terms(vec![(vec![0, 1, 2], 1.0), (vec![0, 1, 3], 1.0)]).unwrap();
    let (_, mut graph) = build_graph(&poly);
    let m0 = MonomialId::from_raw(0);

    graph.remove_edge(pair(0, 1), m0).unwrap();
    assert_eq!(graph.multiplicity(pair(0, 1)), 1);
    let err = graph.remove_edge(pair(0, 1), m0).unwrap_err();
    assert_eq!(err.info().code, "unknown-edge");

    graph.remove_edge(pair(0, 2), m0).unwrap();
    assert_eq!(graph.multiplicity(pair(0, 2)), 0);
    assert!(!graph.neighbours(v(2)).contains(&v(0)));

    assert!(graph.add_edge(pair(2, 9), m0));
    assert!(!graph.add_edge(pair(9, 2), m0));
    assert!(graph.contains_node(v(9)));
    assert_eq!(graph.edge_count(), 5);
}

#[test]
fn hash_is_stable_across_builds() {
    let poly = Polynomial::from_terms(vec![(vec![0, 1, 2, 3], 1.0), (vec![1, 2], 2.0)]).unwrap();
    let (_, a) = build_graph(&poly);
    let (_, b) = build_graph(&poly.clone());
    assert_eq!(canonical_hash(&a), canonical_hash(&b));

    let other = Polynomial::from_terms(vec![(vec![0, 1, 2, 3], 1.0)]).unwrap();
    let (_, c) = build_graph(&other);
    assert_ne!(canonical_hash(&a), canonical_hash(&c));
}

#[test]
fn pairs_order_their_endpoints() {
    let p = pair(7, 2);
    assert_eq!((p.lo(), p.hi()), (v(2), v(7)));
    assert!(p.contains(v(7)) && !p.contains(v(3)));
    assert_eq!(p.to_monomial().unwrap(), Monomial::new(&[2, 7]).unwrap());
    assert_eq!(p.to_string(), "(2,7)");
}
