#![no_std]
#![forbid(unsafe_code)]
//#![warn(missing_docs)]

extern crate alloc;

mod assign;
mod clause;
#[cfg(feature = "count")]
mod count;
mod error;
pub mod form;
mod literal;
mod matrix;
mod normal;
mod rewind;
pub mod role;
pub mod search;
mod signed;
pub mod szs;
#[cfg(feature = "tptp")]
pub mod tptp;

pub use assign::Assignment;
pub use clause::Clause;
pub use error::Error;
pub use form::{Form, SForm};
pub use literal::Lit;
pub use matrix::Matrix;
pub use rewind::Rewind;
pub use search::{Opt, Outcome, Search};
pub use signed::Signed;

use core::fmt::Display;
use core::hash::Hash;

/// Keep only the first occurrence of every element.
///
/// ~~~
/// let v: Vec<_> = dpll::unique([2, 1, 2, 3, 1].into_iter()).collect();
/// assert_eq!(v, vec![2, 1, 3]);
/// ~~~
pub fn unique<T: Copy + Eq + Hash>(iter: impl Iterator<Item = T>) -> impl Iterator<Item = T> {
    let mut seen = hashbrown::HashSet::new();
    iter.filter(move |x| seen.insert(*x))
}

/// Decide satisfiability of a formula.
///
/// ~~~
/// use dpll::{Form, Opt, Outcome};
/// let (p, q) = (Form::Var("p"), Form::Var("q"));
/// let fm = Form::imp(p.clone(), q.clone()) & p & -q;
/// assert_eq!(dpll::solve(fm, Opt::default()), Ok(Outcome::Unsat));
/// ~~~
pub fn solve<V>(fm: Form<V>, opt: Opt) -> Result<Outcome<V>, Error<V>>
where
    V: Clone + Display + Eq + Hash,
{
    let matrix = Matrix::try_from(fm.clausify()?)?;
    log::info!("matrix: {}", matrix);
    let outcome = Search::new(&matrix, opt).run();
    Ok(outcome)
}
