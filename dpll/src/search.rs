//! DPLL search for satisfying assignments.

use crate::assign::{self, Assignment};
use crate::{Clause, Lit, Matrix, Rewind, Signed};
use alloc::vec::Vec;
use core::fmt::Display;
use core::hash::Hash;
use core::ops::Neg;
use hashbrown::HashSet;
use log::debug;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Search options.
///
/// The default options yield a plain branch-and-simplify search.
#[derive(Copy, Clone, Debug, Default)]
pub struct Opt {
    /// maximal number of decisions
    pub lim: Option<usize>,
    /// assign the literals of unit clauses before deciding
    pub units: bool,
    /// assign pure literals before deciding
    pub pures: bool,
}

/// Result of a search.
#[derive(Clone, Debug)]
pub enum Outcome<V> {
    /// satisfying assignment for all variables of the matrix
    Sat(Assignment<V>),
    Unsat,
    /// the decision limit was reached
    Unknown,
}

impl<V: Eq + Hash> PartialEq for Outcome<V> {
    fn eq(&self, other: &Self) -> bool {
        use Outcome::*;
        match (self, other) {
            (Sat(a1), Sat(a2)) => a1 == a2,
            (Unsat, Unsat) | (Unknown, Unknown) => true,
            _ => false,
        }
    }
}

impl<V: Eq + Hash> Eq for Outcome<V> {}

/// Search statistics.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Stats {
    pub decisions: usize,
    pub conflicts: usize,
    /// literals assigned from unit clauses
    pub propagations: usize,
    /// pure literals assigned
    pub pures: usize,
    /// maximal number of simultaneously assigned variables
    pub depth: usize,
}

#[derive(Debug, PartialEq, Eq)]
struct Limit;

type Clauses<'t, V> = Vec<Clause<Lit<&'t V>>>;

pub struct Search<'t, V> {
    clauses: Clauses<'t, V>,
    /// decision order
    order: Vec<&'t V>,
    assignment: Assignment<&'t V>,
    stats: Stats,
    opt: Opt,
}

/// Assign a literal in all clauses.
///
/// Clauses containing the literal are removed,
/// and the negated literal is removed from the remaining clauses.
/// Return `None` if this empties some clause.
fn simplify<L>(clauses: &[Clause<L>], lit: L) -> Option<Vec<Clause<L>>>
where
    L: Copy + Eq + Neg<Output = L>,
{
    let mut simplified = Vec::with_capacity(clauses.len());
    for cl in clauses {
        if cl.contains(&lit) {
            continue;
        }
        let cl: Clause<L> = cl.iter().copied().filter(|l| *l != -lit).collect();
        if cl.is_empty() {
            return None;
        }
        simplified.push(cl)
    }
    Some(simplified)
}

impl<'t, V: Clone + Display + Eq + Hash> Search<'t, V> {
    /// Prepare a search that decides variables in order of their first occurrence.
    pub fn new(matrix: &'t Matrix<Clause<Lit<V>>>, opt: Opt) -> Self {
        Self::with_order(matrix, Vec::new(), opt)
    }

    /// Prepare a search that decides variables in the given order.
    ///
    /// Variables of the matrix missing from the order are
    /// decided last, in order of their first occurrence.
    pub fn with_order(
        matrix: &'t Matrix<Clause<Lit<V>>>,
        mut order: Vec<&'t V>,
        opt: Opt,
    ) -> Self {
        let mut seen: HashSet<_> = order.iter().copied().collect();
        order.extend(matrix.vars().filter(|v| seen.insert(*v)));
        let clauses = matrix.iter();
        let clauses = clauses.map(|cl| cl.iter().map(Signed::as_ref).collect());
        Self {
            clauses: clauses.collect(),
            order,
            assignment: Assignment::default(),
            stats: Stats::default(),
            opt,
        }
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Decide satisfiability of the matrix.
    pub fn run(&mut self) -> Outcome<V> {
        self.assignment = Assignment::default();
        self.stats = Stats::default();
        let clauses = self.clauses.clone();
        match self.frame(0, clauses) {
            Ok(true) => Outcome::Sat(self.assignment.cloned()),
            Ok(false) => Outcome::Unsat,
            Err(Limit) => Outcome::Unknown,
        }
    }

    /// Search for an assignment of the variables from `idx` on in the decision order.
    ///
    /// Upon success, the assignment covers all variables.
    fn frame(&mut self, idx: usize, clauses: Clauses<'t, V>) -> Result<bool, Limit> {
        let clauses = match self.propagate(clauses) {
            Some(clauses) => clauses,
            None => return Ok(false),
        };
        if clauses.iter().any(|cl| cl.is_empty()) {
            debug!("empty clause");
            self.stats.conflicts += 1;
            return Ok(false);
        }
        if clauses.is_empty() {
            self.complete();
            return Ok(true);
        }

        let assignment = &self.assignment;
        let unassigned = self.order[idx..].iter().position(|v| !assignment.contains(v));
        let idx = match unassigned {
            Some(i) => idx + i,
            None => return Ok(true),
        };
        let v = self.order[idx];
        for sign in [true, false] {
            if self.branch(idx + 1, &clauses, Signed(sign, v))? {
                return Ok(true);
            }
        }
        debug!("both values of {} failed", v);
        Ok(false)
    }

    /// Assign a literal and continue the search.
    ///
    /// If no assignment is found, remove all assignments made after this literal.
    fn branch(
        &mut self,
        idx: usize,
        clauses: &[Clause<Lit<&'t V>>],
        lit: Lit<&'t V>,
    ) -> Result<bool, Limit> {
        if matches!(self.opt.lim, Some(lim) if self.stats.decisions >= lim) {
            debug!("decision limit reached");
            return Err(Limit);
        }
        self.stats.decisions += 1;
        debug!("decide {} ({} assigned)", lit, self.assignment.len());

        let ptr = assign::Ptr::from(&self.assignment);
        let result = match simplify(clauses, lit) {
            Some(clauses) => {
                self.assign(lit);
                self.frame(idx, clauses)
            }
            None => {
                debug!("conflict on {}", lit);
                self.stats.conflicts += 1;
                Ok(false)
            }
        };
        if result != Ok(true) {
            self.assignment.rewind(&ptr)
        }
        result
    }

    fn assign(&mut self, lit: Lit<&'t V>) {
        self.assignment.insert(lit.1, lit.0);
        self.stats.depth = core::cmp::max(self.stats.depth, self.assignment.len());
    }

    /// Assign literals of unit clauses and pure literals, as enabled by the options.
    ///
    /// Return `None` if this yields a conflict.
    fn propagate(&mut self, mut clauses: Clauses<'t, V>) -> Option<Clauses<'t, V>> {
        loop {
            let lit = if let Some(lit) = self.unit(&clauses) {
                self.stats.propagations += 1;
                lit
            } else if let Some(lit) = self.pure(&clauses) {
                self.stats.pures += 1;
                lit
            } else {
                return Some(clauses);
            };
            debug!("force {}", lit);
            self.assign(lit);
            clauses = match simplify(&clauses, lit) {
                Some(clauses) => clauses,
                None => {
                    debug!("conflict on {}", lit);
                    self.stats.conflicts += 1;
                    return None;
                }
            }
        }
    }

    fn unit(&self, clauses: &[Clause<Lit<&'t V>>]) -> Option<Lit<&'t V>> {
        if !self.opt.units {
            return None;
        }
        clauses.iter().find(|cl| cl.len() == 1).map(|cl| cl[0])
    }

    /// Return the first literal whose negation occurs in no clause.
    fn pure(&self, clauses: &[Clause<Lit<&'t V>>]) -> Option<Lit<&'t V>> {
        if !self.opt.pures {
            return None;
        }
        let lits: HashSet<_> = clauses.iter().flatten().collect();
        clauses.iter().flatten().find(|lit| !lits.contains(&-**lit)).copied()
    }

    /// Assign true to all unassigned variables.
    fn complete(&mut self) {
        for v in self.order.iter() {
            if !self.assignment.contains(v) {
                self.assignment.insert(v, true)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Form;
    use alloc::vec;

    type M<'a> = Matrix<Clause<Lit<&'a str>>>;

    fn matrix(clauses: &[&[(bool, &'static str)]]) -> M<'static> {
        let clause = |cl: &&[(bool, &'static str)]| -> Clause<Lit<&'static str>> {
            cl.iter().map(|(b, v)| Signed(*b, *v)).collect()
        };
        clauses.iter().map(clause).collect()
    }

    fn run(m: &M<'static>, opt: Opt) -> Outcome<&'static str> {
        Search::new(m, opt).run()
    }

    /// pigeonhole problem with three pigeons and two holes
    fn php() -> M<'static> {
        let p = ["p11", "p12", "p21", "p22", "p31", "p32"];
        let pigeon = |i: usize| vec![(true, p[2 * i]), (true, p[2 * i + 1])];
        let mut clauses: Vec<Vec<_>> = (0..3).map(pigeon).collect();
        for h in 0..2 {
            for i in 0..3 {
                for j in i + 1..3 {
                    clauses.push(vec![(false, p[2 * i + h]), (false, p[2 * j + h])]);
                }
            }
        }
        let clauses: Vec<&[_]> = clauses.iter().map(|cl| &cl[..]).collect();
        matrix(&clauses)
    }

    fn opts() -> [Opt; 4] {
        let opt = |units, pures| Opt { lim: None, units, pures };
        [opt(false, false), opt(true, false), opt(false, true), opt(true, true)]
    }

    #[test]
    fn empty_clause() {
        let m = matrix(&[&[(true, "p")], &[]]);
        for opt in opts() {
            assert_eq!(run(&m, opt), Outcome::Unsat);
        }
        let mut search = Search::new(&m, Opt::default());
        search.run();
        assert_eq!(search.stats().decisions, 0);
    }

    #[test]
    fn no_clauses() {
        let m = M::default();
        assert_eq!(run(&m, Opt::default()), Outcome::Sat(Assignment::default()));

        let (p, q) = ("p", "q");
        let mut search = Search::with_order(&m, vec![&p, &q], Opt::default());
        let expected = [("p", true), ("q", true)].into_iter().collect();
        assert_eq!(search.run(), Outcome::Sat(expected));
        assert_eq!(search.stats().decisions, 0);
    }

    #[test]
    fn owned_model() {
        use alloc::string::{String, ToString};
        let (p, q) = (String::from("p"), String::from("q"));
        let m: Matrix<Clause<Lit<String>>> =
            [Clause::from([Signed(false, p.clone()), Signed(true, q.clone())])]
                .into_iter()
                .collect();
        let outcome = Search::new(&m, Opt::default()).run();
        let expected: Assignment<String> = [(p, true), (q, true)].into_iter().collect();
        assert_eq!(outcome, Outcome::Sat(expected));
        assert_ne!(outcome, Outcome::Unsat);
        if let Outcome::Sat(a) = outcome {
            assert_eq!(a.to_string(), "{p ↦ true, q ↦ true}");
        }
    }

    #[test]
    fn first_true() {
        // (p | q) & (~p | q): p = true is tried first, then q must be true
        let m = matrix(&[&[(true, "p"), (true, "q")], &[(false, "p"), (true, "q")]]);
        let expected = [("p", true), ("q", true)].into_iter().collect();
        assert_eq!(run(&m, Opt::default()), Outcome::Sat(expected));

        // ~p & (p | ~q): p = true conflicts immediately
        let m = matrix(&[&[(false, "p")], &[(true, "p"), (false, "q")]]);
        let expected = [("p", false), ("q", false)].into_iter().collect();
        let mut search = Search::new(&m, Opt::default());
        assert_eq!(search.run(), Outcome::Sat(expected));
        assert_eq!(search.stats().conflicts, 2);
    }

    #[test]
    fn order() {
        let m = matrix(&[&[(true, "a"), (true, "b")]]);
        let b = "b";
        let outcome = Search::with_order(&m, vec![&b], Opt::default()).run();
        match outcome {
            Outcome::Sat(a) => {
                assert_eq!(a.iter().collect::<Vec<_>>(), [(&"b", true), (&"a", true)])
            }
            _ => panic!("expected model"),
        }
    }

    #[test]
    fn pigeonhole() {
        let m = php();
        for opt in opts() {
            assert_eq!(run(&m, opt), Outcome::Unsat);
        }
        {
            let mut search = Search::new(&m, Opt::default());
            search.run();
            assert!(search.stats().conflicts > 0);
        }

        // dropping one pigeon makes the problem satisfiable
        let pigeon1 = |cl: &Clause<Lit<&str>>| cl.iter().any(|l| l.1.starts_with("p1"));
        let m: M = m.into_iter().skip(1).filter(|cl| !pigeon1(cl)).collect();
        for opt in opts() {
            match run(&m, opt) {
                Outcome::Sat(a) => assert_eq!(m.eval(&a), Some(true)),
                o => panic!("expected model, got {:?}", o),
            }
        }
    }

    #[test]
    fn limit() {
        let m = php();
        let opt = Opt { lim: Some(3), ..Opt::default() };
        let mut search = Search::new(&m, opt);
        assert_eq!(search.run(), Outcome::Unknown);
        assert_eq!(search.stats().decisions, 3);

        let opt = Opt { lim: Some(0), ..Opt::default() };
        assert_eq!(run(&M::default(), opt), Outcome::Sat(Assignment::default()));
    }

    #[test]
    fn propagation() {
        // units alone decide this problem
        let m = matrix(&[
            &[(true, "a")],
            &[(false, "a"), (true, "b")],
            &[(false, "b"), (false, "c")],
        ]);
        let opt = Opt { units: true, ..Opt::default() };
        let mut search = Search::new(&m, opt);
        let expected = [("a", true), ("b", true), ("c", false)].into_iter().collect();
        assert_eq!(search.run(), Outcome::Sat(expected));
        assert_eq!(search.stats().decisions, 0);
        assert_eq!(search.stats().propagations, 3);
    }

    #[test]
    fn pure() {
        let m = matrix(&[&[(false, "a"), (true, "b")], &[(false, "a"), (false, "b")]]);
        let opt = Opt { pures: true, ..Opt::default() };
        let mut search = Search::new(&m, opt);
        match search.run() {
            Outcome::Sat(a) => assert_eq!(a.get(&"a"), Some(false)),
            o => panic!("expected model, got {:?}", o),
        }
        assert_eq!(search.stats().pures, 1);
    }

    #[test]
    fn tautology() {
        let fm = Form::imp(Form::Var("p"), Form::Var("p"));
        let m = M::try_from(fm.clausify().unwrap()).unwrap();
        assert_eq!(m.len(), 1);
        match run(&m, Opt::default()) {
            Outcome::Sat(a) => assert_eq!(a.get(&"p"), Some(true)),
            o => panic!("expected model, got {:?}", o),
        }
    }
}
