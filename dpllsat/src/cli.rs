use clap::Parser;
use dpll::search::Opt;
use std::path::PathBuf;

/// Decide validity or satisfiability of propositional problems
///
/// The problem is given in TPTP format, where
/// formulas must not contain quantifiers, equality, or atoms with arguments.
/// By default, the prover decides whether
/// the conjectures follow from the axioms.
///
/// Set the environment variable "LOG" to "info", "debug", or "trace"
/// to obtain an increasingly detailed log.
#[derive(Parser)]
#[command(version)]
pub struct Cli {
    /// Assign the literals of unit clauses before deciding
    #[arg(long)]
    units: bool,

    /// Assign pure literals before deciding
    #[arg(long)]
    pures: bool,

    /// Maximal number of decisions
    ///
    /// If the search exceeds this number, the prover gives up.
    #[arg(long)]
    lim: Option<usize>,

    /// Refuse to convert formulas whose CNF has more clauses than given
    #[arg(long)]
    pub max_clauses: Option<usize>,

    /// Decide satisfiability of the problem instead of validity
    #[arg(long)]
    pub sat: bool,

    /// Write SZS output (such as models and error details) to given file
    #[arg(short)]
    pub output: Option<PathBuf>,

    /// Write search statistics in JSON format to given file
    #[arg(long)]
    pub stats: Option<PathBuf>,

    /// Path of the TPTP problem file
    pub file: PathBuf,
}

impl Cli {
    pub fn opt(&self) -> Opt {
        Opt {
            lim: self.lim,
            units: self.units,
            pures: self.pures,
        }
    }

    pub fn output(&self, out: impl std::fmt::Display) -> Result<(), std::io::Error> {
        use std::io::Write;
        match &self.output {
            Some(o) => std::fs::write(o, out.to_string()),
            None => write!(std::io::stdout(), "{}", dpll::szs::Output(out)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify() {
        use clap::CommandFactory;
        Cli::command().debug_assert()
    }

    #[test]
    fn opt() {
        let cli = Cli::parse_from(["dpllsat", "--units", "--lim", "10", "problem.p"]);
        let opt = cli.opt();
        assert!(opt.units && !opt.pures);
        assert_eq!(opt.lim, Some(10));
        assert!(!cli.sat);
        assert_eq!(cli.file, PathBuf::from("problem.p"));
    }
}
