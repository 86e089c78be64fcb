//! Clause sets and the flattening of CNF formulas into them.

use crate::form::{Form, Op};
use crate::{Assignment, Clause, Error, Lit};
use alloc::vec::{self, Vec};
use core::fmt::{self, Display};
use core::hash::Hash;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Conjunction of clauses, kept in the order in which they were added.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Matrix<C>(Vec<C>);

impl<C: Display> Display for Matrix<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.0.iter();
        if let Some(cl) = iter.next() {
            write!(f, "{}", cl)?;
            for cl in iter {
                write!(f, ", {}", cl)?;
            }
        }
        write!(f, "]")
    }
}

impl<C> Default for Matrix<C> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<C> IntoIterator for Matrix<C> {
    type Item = C;
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<C> core::iter::FromIterator<C> for Matrix<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<C> core::ops::Deref for Matrix<C> {
    type Target = Vec<C>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<C> core::ops::DerefMut for Matrix<C> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<V> Matrix<Clause<Lit<V>>> {
    /// Add one clause for every conjunct of a CNF formula, from left to right.
    fn push_conj(&mut self, fm: Form<V>) -> Result<(), Error<V>> {
        match fm {
            Form::Bin(l, Op::Conj, r) => {
                self.push_conj(*l)?;
                self.push_conj(*r)
            }
            fm => {
                let mut cl = Clause::default();
                if !cl.push_disj(fm)? {
                    self.push(cl)
                }
                Ok(())
            }
        }
    }

    /// Rebuild the conjunction `c1 & (c2 & ...)`, or `True` if there are no clauses.
    pub fn into_form(self) -> Form<V> {
        let clauses = self.0.into_iter().map(Clause::into_form).collect();
        Form::conjoin(clauses).unwrap_or(Form::True)
    }
}

/// Flatten a CNF formula.
///
/// Clauses with a true constant are dropped, and
/// false constants are removed from clauses.
///
/// ~~~
/// # use dpll::{Form, Matrix};
/// let (p, q) = (Form::Var("p"), Form::Var("q"));
/// let fm = (p.clone() | -q.clone()) & ((q | Form::True) & p);
/// let matrix = Matrix::try_from(fm).unwrap();
/// assert_eq!(matrix.to_string(), "[[p, ~q], [p]]");
/// ~~~
impl<V> TryFrom<Form<V>> for Matrix<Clause<Lit<V>>> {
    type Error = Error<V>;

    fn try_from(fm: Form<V>) -> Result<Self, Self::Error> {
        let mut matrix = Self::default();
        matrix.push_conj(fm)?;
        Ok(matrix)
    }
}

impl<V: Eq + Hash> Matrix<Clause<Lit<V>>> {
    /// Variables of the matrix in order of their first occurrence.
    pub fn vars(&self) -> impl Iterator<Item = &V> {
        crate::unique(self.iter().flat_map(|cl| cl.iter().map(|lit| lit.var())))
    }

    /// Return true if every clause is true, false if some clause is false.
    pub fn eval(&self, assignment: &Assignment<V>) -> Option<bool> {
        let mut value = Some(true);
        for cl in self.iter() {
            match cl.eval(assignment) {
                Some(true) => (),
                Some(false) => return Some(false),
                None => value = None,
            }
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;

    type M<'a> = Matrix<Clause<Lit<&'a str>>>;

    #[test]
    fn constants() {
        assert_eq!(M::try_from(Form::True).unwrap(), Matrix::default());
        assert_eq!(M::try_from(Form::False).unwrap().to_string(), "[[]]");
        assert_eq!(M::try_from(-Form::Var("x")).unwrap().to_string(), "[[~x]]");
    }

    #[test]
    fn vars() {
        let (a, b, c) = (Form::Var("a"), Form::Var("b"), Form::Var("c"));
        let fm = (-c.clone() | a.clone()) & (b | (a | c));
        let matrix = M::try_from(fm).unwrap();
        assert_eq!(matrix.vars().collect::<Vec<_>>(), vec![&"c", &"a", &"b"]);
    }

    #[test]
    fn not_cnf() {
        let imp = Form::imp(Form::Var("a"), Form::Var("b"));
        assert_eq!(M::try_from(imp.clone()), Err(Error::NotCnf(imp)));
    }

    #[test]
    fn into_form() {
        let (a, b, c) = (Form::Var("a"), Form::Var("b"), Form::Var("c"));
        let fm = ((a.clone() | b.clone()) & -c.clone()) & (-a | (b | c));
        let matrix = M::try_from(fm).unwrap();
        let fm = matrix.clone().into_form();
        assert_eq!(fm.to_string(), "((a \\/ b) /\\ (~c /\\ (~a \\/ (b \\/ c))))");
        assert_eq!(M::try_from(fm), Ok(matrix));
    }
}
