use core::fmt::{self, Display};
use core::ops::Neg;
#[cfg(feature = "serde")]
use serde::Serialize;

/// Value with a polarity, where `true` stands for a positive occurrence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Signed<T>(pub bool, pub T);

impl<T> Signed<T> {
    pub fn as_ref(&self) -> Signed<&T> {
        Signed(self.0, &self.1)
    }
}

impl<T: Display> Display for Signed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.0 {
            "~".fmt(f)?;
        }
        self.1.fmt(f)
    }
}

impl<T> Neg for Signed<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self(!self.0, self.1)
    }
}
