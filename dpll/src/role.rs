//! Formula roles and their combination into a single problem formula.

use crate::Form;
use alloc::vec::Vec;

#[derive(PartialEq, Debug, Eq, Hash)]
pub enum Role {
    Conjecture,
    NegatedConjecture,
    Other,
}

#[derive(Debug, Default)]
pub struct RoleMap<F>(hashbrown::HashMap<Role, F>);

impl<F: Default> RoleMap<F> {
    pub fn get_mut(&mut self, role: Role) -> &mut F {
        self.0.entry(role).or_default()
    }

    fn remove(&mut self, role: &Role) -> F {
        self.0.remove(role).unwrap_or_default()
    }
}

impl<V> RoleMap<Vec<Form<V>>> {
    /// Combine all formulas into one whose validity is to be decided.
    ///
    /// Axioms `A1, ..., An` and conjectures `C1, ..., Cm` yield
    /// `(A1 & ... & An) -> (C1 & ... & Cm)`,
    /// where negated conjectures are negated to become conjectures.
    /// Without conjectures, this yields `~(A1 & ... & An)`.
    /// Return `None` if there are no formulas.
    pub fn join(mut self) -> Option<Form<V>> {
        let th = self.remove(&Role::Other);
        let mut cj = self.remove(&Role::Conjecture);
        let nc = self.remove(&Role::NegatedConjecture);
        cj.extend(nc.into_iter().map(|fm| -fm));
        match (Form::conjoin(th), Form::conjoin(cj)) {
            (Some(th), Some(cj)) => Some(Form::imp(th, cj)),
            (Some(th), None) => Some(-th),
            (None, cj) => cj,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn join() {
        let v = |s: &'static str| Form::Var(s);
        let mut forms: RoleMap<Vec<Form<&str>>> = RoleMap::default();
        forms.get_mut(Role::Other).push(v("a"));
        forms.get_mut(Role::Other).push(v("b"));
        forms.get_mut(Role::Conjecture).push(v("c"));
        forms.get_mut(Role::NegatedConjecture).push(v("d"));
        let fm = forms.join().unwrap();
        assert_eq!(fm.to_string(), "((a /\\ b) -> (c /\\ ~d))");

        let mut forms: RoleMap<Vec<Form<&str>>> = RoleMap::default();
        forms.get_mut(Role::Other).push(v("a"));
        assert_eq!(forms.join().unwrap().to_string(), "~a");

        assert_eq!(RoleMap::<Vec<Form<&str>>>::default().join(), None);
    }
}
