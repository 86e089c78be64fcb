//! Status and output lines following the SZS ontology.

use crate::Error;
use core::fmt::{self, Debug, Display};
pub use NoSuccessKind::*;
pub use SuccessKind::*;

pub struct Status<K>(pub K);

impl<K: Debug> Display for Status<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS status {:?}", self.0)
    }
}

pub struct Output<O>(pub O);

impl<O: Display> Display for Output<O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "% SZS output start")?;
        writeln!(f, "{}", self.0)?;
        writeln!(f, "% SZS output end")
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SuccessKind {
    Theorem,
    CounterSatisfiable,
    Satisfiable,
    Unsatisfiable,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NoSuccessKind {
    OsError,
    InputError,
    SyntaxError,
    Inappropriate,
    ResourceOut,
    GaveUp,
}

impl<V> From<&Error<V>> for NoSuccessKind {
    fn from(e: &Error<V>) -> Self {
        match e {
            Error::Syntax => SyntaxError,
            Error::Implication(_) | Error::NotCnf(_) => InputError,
            Error::Quantified | Error::NonPropositional(_) | Error::Unsupported(_) => {
                Inappropriate
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn display() {
        assert_eq!(Status(Theorem).to_string(), "% SZS status Theorem\n");
        let out = Output("{p ↦ false}").to_string();
        assert_eq!(out, "% SZS output start\n{p ↦ false}\n% SZS output end\n");
    }

    #[test]
    fn kinds() {
        let e: Error<&str> = Error::Quantified;
        assert_eq!(NoSuccessKind::from(&e), Inappropriate);
        assert_eq!(NoSuccessKind::from(&Error::NotCnf(crate::Form::Var(0))), InputError);
    }
}
