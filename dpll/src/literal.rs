use crate::{Assignment, Form, Signed};
use core::hash::Hash;

/// Literal, i.e. a variable `V` with a polarity.
pub type Lit<V> = Signed<V>;

impl<V> Lit<V> {
    /// The variable of the literal.
    pub fn var(&self) -> &V {
        &self.1
    }
}

impl<V: Eq + Hash> Lit<V> {
    /// Return the truth value of the literal, if its variable is assigned.
    pub fn eval(&self, assignment: &Assignment<V>) -> Option<bool> {
        assignment.get(&self.1).map(|b| b == self.0)
    }
}

impl<V> From<Lit<V>> for Form<V> {
    fn from(lit: Lit<V>) -> Self {
        let Signed(sign, v) = lit;
        if sign {
            Form::Var(v)
        } else {
            -Form::Var(v)
        }
    }
}
