use crate::Error;
use dpll::role::RoleMap;
use dpll::szs::NoSuccessKind;
use dpll::SForm;
use log::{error, info};
use std::path::{Path, PathBuf};

fn parse_bytes(bytes: &[u8], forms: &mut RoleMap<Vec<SForm>>) -> Result<(), NoSuccessKind> {
    dpll::tptp::parse(bytes, forms, |filename, forms| {
        info!("include {}", filename);
        parse_file(Path::new(filename), forms).map_err(|e| {
            if let Some(detail) = e.detail() {
                error!("{}: {}", filename, detail)
            }
            e.kind()
        })
    })
}

fn read_file(filename: &Path) -> std::io::Result<Vec<u8>> {
    std::fs::read(filename).or_else(|e| {
        let tptp = std::env::var("TPTP").or(Err(e))?;
        let mut path = PathBuf::from(tptp);
        path.push(filename);
        std::fs::read(path)
    })
}

pub fn parse_file(filename: &Path, forms: &mut RoleMap<Vec<SForm>>) -> Result<(), Error> {
    info!("loading {:?}", filename);
    let bytes = read_file(filename)?;
    Ok(parse_bytes(&bytes, forms)?)
}

/// Parse a problem file and all files it includes.
pub fn parse(filename: &Path) -> Result<RoleMap<Vec<SForm>>, Error> {
    let mut forms = RoleMap::default();
    parse_file(filename, &mut forms)?;
    Ok(forms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include() -> Result<(), std::io::Error> {
        let dir = std::env::temp_dir().join(format!("dpllsat-{}", std::process::id()));
        std::fs::create_dir_all(&dir)?;
        let axioms = dir.join("axioms.ax");
        std::fs::write(&axioms, "fof(a, axiom, p => q).\nfof(b, axiom, p).\n")?;
        let problem = dir.join("problem.p");
        let include = format!("include('{}').\n", axioms.display());
        std::fs::write(&problem, include + "fof(c, conjecture, q).\n")?;

        let fm = parse(&problem).ok().and_then(|forms| forms.join());
        let fm = fm.map(|fm| fm.to_string());
        assert_eq!(fm.as_deref(), Some("(((p -> q) /\\ p) -> q)"));

        let missing = parse(&dir.join("missing.p")).err().map(|e| e.kind());
        assert_eq!(missing, Some(NoSuccessKind::OsError));
        std::fs::remove_dir_all(&dir)
    }
}
