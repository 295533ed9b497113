use std::collections::BTreeSet;

use quadra_core::errors::{ErrorInfo, QuadError};
use quadra_core::{Monomial, Polynomial, Var};
use quadra_graph::{build_graph, CooccurrenceGraph, MonomialId, MonomialIndex, VarPair};
use tracing::debug;

use crate::fallback::fold_chain;
use crate::params::ReduceOpts;
use crate::penalty::PenaltyAccumulator;
use crate::ranking::RankingIndex;
use crate::report::{PhaseExit, Substitution, SubstitutionOrigin};
use crate::substitute::substitute;

/// State of the graph phase after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Reducing,
    Done(PhaseExit),
}

/// Everything one reduction owns: the live polynomial, its monomial index,
/// multigraph and ranking, the penalty, and the fresh variable counter.
#[derive(Debug)]
pub(crate) struct Engine<'a> {
    opts: &'a ReduceOpts,
    poly: Polynomial,
    index: MonomialIndex,
    graph: CooccurrenceGraph,
    ranking: RankingIndex,
    penalty: PenaltyAccumulator,
    next_var: Var,
    substitutions: Vec<Substitution>,
    graph_fusions: usize,
    fallback_folds: usize,
}

/// Engine contents once both phases have run.
#[derive(Debug)]
pub(crate) struct EngineOutput {
    pub(crate) reduced: Polynomial,
    pub(crate) penalty: Polynomial,
    pub(crate) penalty_collisions: usize,
    pub(crate) next_var: Var,
    pub(crate) substitutions: Vec<Substitution>,
    pub(crate) graph_fusions: usize,
    pub(crate) fallback_folds: usize,
}

impl<'a> Engine<'a> {
    pub(crate) fn new(poly: &Polynomial, first_fresh: Var, opts: &'a ReduceOpts) -> Self {
        let (index, graph) = build_graph(poly);
        let ranking = RankingIndex::from_graph(&graph);
        debug!(
            pairs = ranking.len(),
            buckets = ranking.bucket_count(),
            "ranked shared variable pairs"
        );
        Self {
            opts,
            poly: poly.clone(),
            index,
            graph,
            ranking,
            penalty: PenaltyAccumulator::new(opts.penalty_merge),
            next_var: first_fresh,
            substitutions: Vec::new(),
            graph_fusions: 0,
            fallback_folds: 0,
        }
    }

    /// Runs fusion steps until the graph phase is done.
    pub(crate) fn run_graph_phase(&mut self) -> Result<PhaseExit, QuadError> {
        loop {
            if let Phase::Done(exit) = self.step()? {
                debug!(?exit, fusions = self.graph_fusions, "graph phase finished");
                return Ok(exit);
            }
        }
    }

    /// Decides the next transition and performs at most one fusion.
    pub(crate) fn step(&mut self) -> Result<Phase, QuadError> {
        if self.index.max_degree() <= self.opts.max_degree {
            return Ok(Phase::Done(PhaseExit::DegreeSatisfied));
        }
        if self
            .opts
            .fusion_limit
            .is_some_and(|limit| self.graph_fusions >= limit)
        {
            return Ok(Phase::Done(PhaseExit::FusionLimit));
        }
        let pair = match self.ranking.select(self.opts.selection_quantile) {
            Ok(pair) => pair,
            Err(QuadError::Index(_)) => return Ok(Phase::Done(PhaseExit::IndexExhausted)),
            Err(err) => return Err(err),
        };
        self.fuse(pair)?;
        Ok(Phase::Reducing)
    }

    /// Replaces `pair` by a fresh variable in every monomial containing both.
    fn fuse(&mut self, pair: VarPair) -> Result<(), QuadError> {
        let fresh = self.allocate()?;
        let affected = self.graph.shared_monomials(pair);
        let mut removed: Vec<(VarPair, MonomialId)> = Vec::new();
        let mut added: Vec<(VarPair, MonomialId)> = Vec::new();

        for id in affected.iter().copied() {
            let old = self.index.get(id)?.clone();
            removed.push((pair, id));
            for var in old.vars().iter().copied().filter(|var| !pair.contains(*var)) {
                removed.push((VarPair::new(var, pair.lo()), id));
                removed.push((VarPair::new(var, pair.hi()), id));
                added.push((VarPair::new(var, fresh), id));
            }
            let rewritten =
                Monomial::from_vars(substitute((pair.lo(), pair.hi()), fresh, old.vars()))?;
            self.rewrite(id, &old, rewritten)?;
        }

        for (edge, id) in &removed {
            self.graph.remove_edge(*edge, *id)?;
        }
        self.graph.add_node(fresh);
        for (edge, id) in &added {
            self.graph.add_edge(*edge, *id);
        }

        self.penalty.emit(pair.lo(), pair.hi(), fresh)?;

        let touched: BTreeSet<VarPair> = removed
            .iter()
            .chain(added.iter())
            .map(|(edge, _)| *edge)
            .collect();
        for edge in touched {
            self.ranking.upsert(edge, self.graph.multiplicity(edge));
        }

        self.graph_fusions += 1;
        self.substitutions.push(Substitution {
            left: pair.lo(),
            right: pair.hi(),
            fresh,
            origin: SubstitutionOrigin::Graph,
        });
        debug!(
            %pair,
            %fresh,
            affected = affected.len(),
            max_degree = self.index.max_degree(),
            "fused variable pair"
        );
        Ok(())
    }

    /// Folds every monomial still above the degree bound, independently.
    pub(crate) fn run_fallback(&mut self) -> Result<(), QuadError> {
        let target = self.opts.fold_target();
        for id in self.index.over_degree(self.opts.max_degree) {
            let old = self.index.get(id)?.clone();
            let folded = fold_chain(old.vars(), target, |left, right| {
                self.fold_pair(left, right)
            })?;
            self.rewrite(id, &old, Monomial::from_vars(folded)?)?;
            debug!(monomial = %id, from = %old, "folded over-degree monomial");
        }
        Ok(())
    }

    fn fold_pair(&mut self, left: Var, right: Var) -> Result<Var, QuadError> {
        let fresh = self.allocate()?;
        self.penalty.emit(left, right, fresh)?;
        self.fallback_folds += 1;
        self.substitutions.push(Substitution {
            left,
            right,
            fresh,
            origin: SubstitutionOrigin::Fallback,
        });
        Ok(fresh)
    }

    /// Moves the coefficient of `old` onto `new` in both the index and the polynomial.
    fn rewrite(&mut self, id: MonomialId, old: &Monomial, new: Monomial) -> Result<(), QuadError> {
        let coefficient = self.poly.remove(old).ok_or_else(|| {
            QuadError::Graph(
                ErrorInfo::new("stale-monomial", "indexed monomial missing from polynomial")
                    .with_context("monomial", id)
                    .with_context("vars", old),
            )
        })?;
        self.index.replace(id, new.clone())?;
        let displaced = self.poly.insert(new, coefficient);
        debug_assert!(displaced.is_none(), "rewritten monomial collided with a live key");
        Ok(())
    }

    fn allocate(&mut self) -> Result<Var, QuadError> {
        let fresh = self.next_var;
        self.next_var = fresh.checked_next().ok_or_else(|| {
            QuadError::Input(
                ErrorInfo::new("variable-space-exhausted", "no fresh variable id is left")
                    .with_context("last", fresh),
            )
        })?;
        Ok(fresh)
    }

    pub(crate) fn max_degree(&self) -> usize {
        self.index.max_degree()
    }

    pub(crate) fn finish(self) -> EngineOutput {
        EngineOutput {
            reduced: self.poly,
            penalty_collisions: self.penalty.collisions(),
            penalty: self.penalty.into_polynomial(),
            next_var: self.next_var,
            substitutions: self.substitutions,
            graph_fusions: self.graph_fusions,
            fallback_folds: self.fallback_folds,
        }
    }
}
