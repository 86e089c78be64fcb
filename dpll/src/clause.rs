use crate::form::{Form, Op};
use crate::{Assignment, Error, Lit, Signed};
use alloc::{vec, vec::Vec};
use core::fmt::{self, Display};
use core::hash::Hash;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Disjunction of literals, kept in the order in which they were added.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Clause<L>(pub Vec<L>);

impl<L: Display> Display for Clause<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        let mut iter = self.0.iter();
        if let Some(lit) = iter.next() {
            write!(f, "{}", lit)?;
            for lit in iter {
                write!(f, ", {}", lit)?;
            }
        }
        write!(f, "]")
    }
}

impl<L> Default for Clause<L> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<L> core::ops::Deref for Clause<L> {
    type Target = Vec<L>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<L> core::ops::DerefMut for Clause<L> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'a, L> IntoIterator for &'a Clause<L> {
    type Item = &'a L;
    type IntoIter = core::slice::Iter<'a, L>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<L> IntoIterator for Clause<L> {
    type Item = L;
    type IntoIter = vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<L> core::iter::FromIterator<L> for Clause<L> {
    fn from_iter<I: IntoIterator<Item = L>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<L, const N: usize> From<[L; N]> for Clause<L> {
    fn from(s: [L; N]) -> Self {
        Self(s.into())
    }
}

impl<V> Clause<Lit<V>> {
    /// Add the literals of a disjunction from left to right.
    ///
    /// Return true if the disjunction contains a true constant,
    /// in which case the clause is satisfied.
    /// False constants are omitted.
    pub fn push_disj(&mut self, fm: Form<V>) -> Result<bool, Error<V>> {
        use Form::*;
        match fm {
            Bin(l, Op::Disj, r) => Ok(self.push_disj(*l)? | self.push_disj(*r)?),
            Var(v) => {
                self.push(Signed(true, v));
                Ok(false)
            }
            True => Ok(true),
            False => Ok(false),
            Not(fm) => match *fm {
                Var(v) => {
                    self.push(Signed(false, v));
                    Ok(false)
                }
                True => Ok(false),
                False => Ok(true),
                fm => Err(Error::NotCnf(-fm)),
            },
            fm => Err(Error::NotCnf(fm)),
        }
    }

    /// Rebuild the disjunction `l1 | (l2 | ...)`, or `False` if the clause is empty.
    pub fn into_form(self) -> Form<V> {
        let lits = self.0.into_iter().map(Form::from).collect();
        Form::disjoin(lits).unwrap_or(Form::False)
    }
}

impl<V: Eq + Hash> Clause<Lit<V>> {
    /// Return true if some literal is true, false if all literals are false.
    pub fn eval(&self, assignment: &Assignment<V>) -> Option<bool> {
        let mut value = Some(false);
        for lit in self.iter() {
            match lit.eval(assignment) {
                Some(true) => return Some(true),
                Some(false) => (),
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

    #[test]
    fn disj() {
        let fm = (Form::Var("a") | (-Form::Var("b") | Form::False)) | Form::Var("a");
        let mut cl = Clause::default();
        assert_eq!(cl.push_disj(fm), Ok(false));
        assert_eq!(cl.to_string(), "[a, ~b, a]");
        assert_eq!(cl.into_form().to_string(), "(a \\/ (~b \\/ a))");

        let mut cl = Clause::default();
        assert_eq!(cl.push_disj(Form::Var("a") | -Form::False), Ok(true));

        let conj = Form::Var("a") & Form::Var("b");
        let mut cl = Clause::default();
        assert_eq!(cl.push_disj(Form::Var("c") | conj.clone()), Err(Error::NotCnf(conj)));
    }

    #[test]
    fn empty() {
        let cl: Clause<Lit<&str>> = Clause::default();
        assert_eq!(cl.to_string(), "[]");
        assert_eq!(cl.into_form(), Form::False);
    }
}
