use crate::Form;
use alloc::string::String;
use core::fmt::{self, Display};

/// Reasons why a formula could not be processed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error<V> {
    /// negation normal form requested for a formula with an implication
    Implication(Form<V>),
    /// a clause set requested for a formula that is not in CNF
    NotCnf(Form<V>),
    /// quantified formula where a propositional one is expected
    Quantified,
    /// atom with arguments where a propositional variable is expected
    NonPropositional(String),
    Unsupported(&'static str),
    Syntax,
}

impl<V: Display> Display for Error<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Error::*;
        match self {
            Implication(fm) => write!(f, "implication in negation normal form conversion: {}", fm),
            NotCnf(fm) => write!(f, "not in conjunctive normal form: {}", fm),
            Quantified => write!(f, "quantified formula"),
            NonPropositional(p) => write!(f, "atom {} has arguments", p),
            Unsupported(what) => write!(f, "unsupported: {}", what),
            Syntax => write!(f, "syntax error"),
        }
    }
}
