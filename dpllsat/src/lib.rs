mod cli;
mod error;
pub mod parse;

pub use cli::Cli;
pub use error::Error;

use dpll::search::{Outcome, Search, Stats};
use dpll::szs::{self, SuccessKind};
use dpll::{Assignment, Matrix, SForm};
use log::info;
use num_bigint::BigUint;

/// Result of deciding a problem.
pub struct Decision {
    pub status: SuccessKind,
    /// assignment that satisfies the axioms and falsifies the conjectures
    pub model: Option<Assignment<String>>,
    pub stats: Stats,
}

/// Decide a problem formula, where `None` stands for the empty problem.
///
/// Both validity and satisfiability (`--sat`) are decided by searching for
/// an assignment to the negated problem formula, i.e.
/// the axioms together with the negated conjectures.
pub fn decide(fm: Option<SForm>, cli: &Cli) -> Result<Decision, Error> {
    let fm = match fm {
        Some(fm) => fm,
        None => {
            // the empty conjunction is true
            let status = if cli.sat { szs::Satisfiable } else { szs::Theorem };
            let stats = Stats::default();
            return Ok(Decision { status, model: None, stats });
        }
    };
    info!("joined: {}", fm);

    let fm = -fm;
    let nnf = fm.clone().ie().nnf()?;
    info!("nnf: {}", nnf);

    if let Some(max) = cli.max_clauses {
        let len = nnf.cnf_len();
        info!("cnf has {} clauses", len);
        if len > BigUint::from(max) {
            let e = format!("CNF would have {} clauses, more than {}", len, max);
            return Err(Error::new(szs::ResourceOut, e.into()));
        }
    }

    let cnf = nnf.cnf();
    info!("cnf: {}", cnf);
    let matrix = Matrix::try_from(cnf)?;
    info!("matrix: {}", matrix);

    let mut search = Search::new(&matrix, cli.opt());
    let outcome = search.run();
    let stats = search.stats().clone();
    info!("search completed: {:?}", stats);

    let (status, model) = match outcome {
        Outcome::Sat(assignment) => {
            // variables eliminated by constants may take any value
            let value = |v: &String| Some(assignment.get(v).unwrap_or(true));
            assert_eq!(fm.eval(&value), Some(true));
            let status = if cli.sat {
                szs::Satisfiable
            } else {
                szs::CounterSatisfiable
            };
            (status, Some(assignment))
        }
        Outcome::Unsat => {
            let status = if cli.sat { szs::Unsatisfiable } else { szs::Theorem };
            (status, None)
        }
        Outcome::Unknown => return Err(Error::from(szs::GaveUp)),
    };
    Ok(Decision { status, model, stats })
}
