//! Normal forms: implication elimination, negation normal form, conjunctive normal form.

use crate::form::{Form, Op};
use crate::Error;

impl<V> Form<V> {
    /// Eliminate implications: `a -> b` becomes `~a \/ b`.
    pub fn ie(self) -> Self {
        use Form::*;
        match self {
            Var(_) | True | False => self,
            Not(fm) => -fm.ie(),
            Bin(l, Op::Impl, r) => -l.ie() | r.ie(),
            Bin(l, o, r) => Self::bin(l.ie(), o, r.ie()),
        }
    }

    /// Push negations inwards until they only apply to variables.
    ///
    /// Negated constants are evaluated.
    /// Fail if the formula contains an implication.
    pub fn nnf(self) -> Result<Self, Error<V>> {
        use Form::*;
        match self {
            Var(_) | True | False => Ok(self),
            Bin(l, Op::Impl, r) => Err(Error::Implication(Self::imp(*l, *r))),
            Bin(l, o, r) => Ok(Self::bin(l.nnf()?, o, r.nnf()?)),
            Not(fm) => match *fm {
                Var(v) => Ok(-Var(v)),
                True => Ok(False),
                False => Ok(True),
                Not(fm) => fm.nnf(),
                Bin(l, Op::Conj, r) => Ok((-*l).nnf()? | (-*r).nnf()?),
                Bin(l, Op::Disj, r) => Ok((-*l).nnf()? & (-*r).nnf()?),
                Bin(l, Op::Impl, r) => Err(Error::Implication(Self::imp(*l, *r))),
            },
        }
    }
}

impl<V: Clone> Form<V> {
    /// CNF of the disjunction of two CNF formulas.
    fn cnf_of_disj(l: Self, r: Self) -> Self {
        use Form::Bin;
        match (l, r) {
            (Bin(l1, Op::Conj, l2), r) => {
                Self::cnf_of_disj(*l1, r.clone()) & Self::cnf_of_disj(*l2, r)
            }
            (l, Bin(r1, Op::Conj, r2)) => {
                Self::cnf_of_disj(l.clone(), *r1) & Self::cnf_of_disj(l, *r2)
            }
            (l, r) => l | r,
        }
    }

    /// CNF of an NNF.
    ///
    /// Panics if the formula is not in NNF.
    pub fn cnf(self) -> Self {
        use Form::Bin;
        match self {
            Bin(l, Op::Conj, r) => l.cnf() & r.cnf(),
            Bin(l, Op::Disj, r) => Self::cnf_of_disj(l.cnf(), r.cnf()),
            a if a.is_literal() => a,
            _ => panic!("unhandled formula"),
        }
    }

    /// CNF of an arbitrary formula.
    pub fn clausify(self) -> Result<Self, Error<V>> {
        Ok(self.ie().nnf()?.cnf())
    }
}
