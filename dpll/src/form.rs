//! Propositional formulas.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt::{self, Display};
use core::hash::Hash;
use core::ops::Neg;

/// Propositional formula over variables `V`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Form<V> {
    Var(V),
    True,
    False,
    Not(Box<Form<V>>),
    /// binary operation
    Bin(Box<Form<V>>, Op, Box<Form<V>>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Op {
    Conj,
    Disj,
    Impl,
}

/// Formula with variables identified by their names.
pub type SForm = Form<String>;

impl Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Conj => write!(f, "/\\"),
            Op::Disj => write!(f, "\\/"),
            Op::Impl => write!(f, "->"),
        }
    }
}

impl<V: Display> Display for Form<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Form::*;
        match self {
            Var(v) => write!(f, "{}", v),
            True => write!(f, "True"),
            False => write!(f, "False"),
            Not(fm) => write!(f, "~{}", fm),
            Bin(l, o, r) => write!(f, "({} {} {})", l, o, r),
        }
    }
}

impl<V> Neg for Form<V> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::Not(Box::new(self))
    }
}

impl<V> core::ops::BitAnd for Form<V> {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        Self::bin(self, Op::Conj, rhs)
    }
}

impl<V> core::ops::BitOr for Form<V> {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        Self::bin(self, Op::Disj, rhs)
    }
}

impl<V> Form<V> {
    pub fn bin(l: Self, o: Op, r: Self) -> Self {
        Self::Bin(Box::new(l), o, Box::new(r))
    }

    pub fn imp(l: Self, r: Self) -> Self {
        Self::bin(l, Op::Impl, r)
    }

    /// Return `f1 & (f2 & (... & fn))`, or `None` if no formula is given.
    pub fn conjoin(fms: Vec<Self>) -> Option<Self> {
        fms.into_iter().rev().reduce(|acc, fm| fm & acc)
    }

    /// Return `f1 | (f2 | (... | fn))`, or `None` if no formula is given.
    pub fn disjoin(fms: Vec<Self>) -> Option<Self> {
        fms.into_iter().rev().reduce(|acc, fm| fm | acc)
    }

    pub fn subforms(&self) -> Box<dyn Iterator<Item = &Form<V>> + '_> {
        use core::iter::once;
        use Form::*;
        match self {
            Var(_) | True | False => Box::new(once(self)),
            Not(fm) => Box::new(once(self).chain(fm.subforms())),
            Bin(l, _, r) => Box::new(once(self).chain(l.subforms()).chain(r.subforms())),
        }
    }

    /// All variable occurrences, from left to right.
    pub fn atoms(&self) -> impl Iterator<Item = &V> {
        self.subforms().filter_map(|fm| match fm {
            Self::Var(v) => Some(v),
            _ => None,
        })
    }

    /// Return true for a variable, a constant, or a negated variable.
    pub fn is_literal(&self) -> bool {
        use Form::*;
        match self {
            Var(_) | True | False => true,
            Not(fm) => matches!(**fm, Var(_)),
            Bin(..) => false,
        }
    }

    /// Return true if the formula contains no implication and
    /// every negation is directly applied to a variable.
    pub fn is_nnf(&self) -> bool {
        match self {
            Self::Bin(_, Op::Impl, _) => false,
            Self::Bin(l, _, r) => l.is_nnf() && r.is_nnf(),
            fm => fm.is_literal(),
        }
    }

    /// Return true for a disjunction of literals.
    pub fn is_clause(&self) -> bool {
        match self {
            Self::Bin(l, Op::Disj, r) => l.is_clause() && r.is_clause(),
            fm => fm.is_literal(),
        }
    }

    /// Return true for a conjunction of clauses.
    pub fn is_cnf(&self) -> bool {
        match self {
            Self::Bin(l, Op::Conj, r) => l.is_cnf() && r.is_cnf(),
            fm => fm.is_clause(),
        }
    }

    /// Evaluate the formula, where `value` yields the values of variables.
    ///
    /// Return `None` if the truth value of the formula
    /// depends on a variable without value.
    ///
    /// ~~~
    /// # use dpll::Form;
    /// let fm = Form::Var("p") | -Form::Var("q");
    /// assert_eq!(fm.eval(&|v| (*v == "q").then(|| false)), Some(true));
    /// assert_eq!(fm.eval(&|_| None), None);
    /// ~~~
    pub fn eval(&self, value: &impl Fn(&V) -> Option<bool>) -> Option<bool> {
        use Form::*;
        match self {
            Var(v) => value(v),
            True => Some(true),
            False => Some(false),
            Not(fm) => fm.eval(value).map(|b| !b),
            Bin(l, o, r) => {
                let (l, r) = (l.eval(value), r.eval(value));
                match o {
                    Op::Conj => and(l, r),
                    Op::Disj => or(l, r),
                    Op::Impl => or(l.map(|b| !b), r),
                }
            }
        }
    }
}

fn and(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(false), _) | (_, Some(false)) => Some(false),
        (Some(true), Some(true)) => Some(true),
        _ => None,
    }
}

fn or(l: Option<bool>, r: Option<bool>) -> Option<bool> {
    match (l, r) {
        (Some(true), _) | (_, Some(true)) => Some(true),
        (Some(false), Some(false)) => Some(false),
        _ => None,
    }
}

impl<V: Eq + Hash> Form<V> {
    /// Variables of the formula in order of their first occurrence.
    pub fn vars(&self) -> impl Iterator<Item = &V> {
        crate::unique(self.atoms())
    }
}
