//! Conversion of propositional TPTP problems to formulas.

use crate::role::{Role, RoleMap};
use crate::szs::NoSuccessKind;
use crate::SForm;
use alloc::string::ToString;
use alloc::vec::Vec;
use tptp::{cnf, common, fof, top, TPTPIterator};

type Error = crate::Error<alloc::string::String>;

/// Parse all formulas in `bytes` and store them in `forms` by their role.
///
/// The function `f` is called for every included file.
pub fn parse<F>(bytes: &[u8], forms: &mut RoleMap<Vec<SForm>>, f: F) -> Result<(), NoSuccessKind>
where
    F: Fn(&str, &mut RoleMap<Vec<SForm>>) -> Result<(), NoSuccessKind>,
{
    let mut parser = TPTPIterator::<()>::new(bytes);
    for input in &mut parser {
        let input = input.map_err(|_| NoSuccessKind::SyntaxError)?;
        match input {
            top::TPTPInput::Include(include) => f(include.file_name.0 .0, forms)?,
            top::TPTPInput::Annotated(ann) => {
                let (role, formula) = get_role_formula(*ann).map_err(|e| {
                    log::error!("{}", e);
                    NoSuccessKind::from(&e)
                })?;
                log::info!("formula: {}", formula);
                forms.get_mut(role).push(formula);
            }
        };
    }
    if parser.remaining.is_empty() {
        Ok(())
    } else {
        Err(NoSuccessKind::SyntaxError)
    }
}

fn get_role_formula(annotated: top::AnnotatedFormula) -> Result<(Role, SForm), Error> {
    use top::AnnotatedFormula::*;
    match annotated {
        Fof(fof) => Ok((Role::from(fof.0.role), SForm::try_from(*fof.0.formula)?)),
        // propositional clauses contain no variables to quantify
        Cnf(cnf) => Ok((Role::from(cnf.0.role), SForm::try_from(*cnf.0.formula)?)),
        Tfx(_) => Err(Error::Unsupported("typed formula")),
    }
}

impl TryFrom<fof::LogicFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::LogicFormula) -> Result<Self, Error> {
        use fof::LogicFormula::*;
        match frm {
            Binary(b) => Self::try_from(b),
            Unary(u) => Self::try_from(u),
            Unitary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnitFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::UnitFormula) -> Result<Self, Error> {
        use fof::UnitFormula::*;
        match frm {
            Unitary(u) => Self::try_from(u),
            Unary(u) => Self::try_from(u),
        }
    }
}

impl TryFrom<fof::UnaryFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::UnaryFormula) -> Result<Self, Error> {
        use fof::UnaryFormula::*;
        match frm {
            Unary(_negation, fuf) => Ok(-Self::try_from(*fuf)?),
            InfixUnary(_) => Err(Error::Unsupported("term inequality")),
        }
    }
}

impl TryFrom<fof::BinaryFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::BinaryFormula) -> Result<Self, Error> {
        use fof::BinaryFormula::*;
        match frm {
            Nonassoc(fbn) => Self::try_from(fbn),
            Assoc(fba) => Self::try_from(fba),
        }
    }
}

impl TryFrom<fof::BinaryNonassoc<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::BinaryNonassoc) -> Result<Self, Error> {
        let left = Self::try_from(*frm.left)?;
        let right = Self::try_from(*frm.right)?;
        let equiv = |l: Self, r: Self| Self::imp(l.clone(), r.clone()) & Self::imp(r, l);
        use common::NonassocConnective::*;
        Ok(match frm.op {
            LRImplies => Self::imp(left, right),
            RLImplies => Self::imp(right, left),
            Equivalent => equiv(left, right),
            NotEquivalent => -equiv(left, right),
            NotOr => -(left | right),
            NotAnd => -(left & right),
        })
    }
}

impl TryFrom<fof::BinaryAssoc<'_>> for SForm {
    type Error = Error;
    fn try_from(fm: fof::BinaryAssoc) -> Result<Self, Error> {
        use fof::BinaryAssoc::*;
        let (disj, fms) = match fm {
            Or(fms) => (true, fms.0),
            And(fms) => (false, fms.0),
        };
        let fms = fms.into_iter().map(Self::try_from);
        let fms = fms.collect::<Result<Vec<_>, _>>()?;
        let fm = if disj { Self::disjoin(fms) } else { Self::conjoin(fms) };
        // the parser yields at least two operands
        fm.ok_or(Error::Syntax)
    }
}

impl TryFrom<fof::UnitaryFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::UnitaryFormula) -> Result<Self, Error> {
        use fof::UnitaryFormula::*;
        match frm {
            Parenthesised(flf) => Self::try_from(*flf),
            Quantified(_) => Err(Error::Quantified),
            Atomic(a) => Self::try_from(*a),
        }
    }
}

impl TryFrom<fof::PlainAtomicFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::PlainAtomicFormula) -> Result<Self, Error> {
        use fof::PlainTerm::*;
        match frm.0 {
            Constant(c) => Ok(Self::Var(c.to_string())),
            Function(f, _args) => Err(Error::NonPropositional(f.to_string())),
        }
    }
}

impl TryFrom<fof::DefinedAtomicFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::DefinedAtomicFormula) -> Result<Self, Error> {
        use fof::DefinedAtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            Infix(_) => Err(Error::Unsupported("equality")),
        }
    }
}

impl TryFrom<fof::DefinedPlainFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(fm: fof::DefinedPlainFormula) -> Result<Self, Error> {
        use fof::DefinedPlainTerm::Constant;
        match fm.0 {
            Constant(c) if c.0 .0 .0 .0 .0 == "true" => Ok(Self::True),
            Constant(c) if c.0 .0 .0 .0 .0 == "false" => Ok(Self::False),
            _ => Err(Error::Unsupported("defined predicate")),
        }
    }
}

impl TryFrom<fof::AtomicFormula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::AtomicFormula) -> Result<Self, Error> {
        use fof::AtomicFormula::*;
        match frm {
            Plain(p) => Self::try_from(p),
            Defined(d) => Self::try_from(d),
            System(_) => Err(Error::Unsupported("system predicate")),
        }
    }
}

impl TryFrom<fof::Formula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: fof::Formula) -> Result<Self, Error> {
        Self::try_from(frm.0)
    }
}

impl TryFrom<cnf::Literal<'_>> for SForm {
    type Error = Error;
    fn try_from(lit: cnf::Literal) -> Result<Self, Error> {
        use cnf::Literal::*;
        match lit {
            Atomic(a) => Self::try_from(a),
            NegatedAtomic(a) => Ok(-Self::try_from(a)?),
            Infix(_) => Err(Error::Unsupported("term inequality")),
        }
    }
}

impl TryFrom<cnf::Disjunction<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: cnf::Disjunction) -> Result<Self, Error> {
        let lits = frm.0.into_iter().map(Self::try_from);
        let lits = lits.collect::<Result<Vec<_>, _>>()?;
        Ok(Self::disjoin(lits).unwrap_or(Self::False))
    }
}

impl TryFrom<cnf::Formula<'_>> for SForm {
    type Error = Error;
    fn try_from(frm: cnf::Formula) -> Result<Self, Error> {
        use cnf::Formula::*;
        match frm {
            Disjunction(d) | Parenthesised(d) => Self::try_from(d),
        }
    }
}

impl From<top::FormulaRole<'_>> for Role {
    fn from(role: top::FormulaRole<'_>) -> Self {
        match role.0 .0 {
            "conjecture" => Self::Conjecture,
            "negated_conjecture" => Self::NegatedConjecture,
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn forms(s: &str) -> Result<RoleMap<Vec<SForm>>, NoSuccessKind> {
        let mut forms = RoleMap::default();
        let s = alloc::format!("{}\n", s);
        parse(s.as_bytes(), &mut forms, |_, _| Ok(()))?;
        Ok(forms)
    }

    #[test]
    fn fof() {
        let s = "fof(a, axiom, p => q). fof(b, axiom, p). fof(c, conjecture, q | $false).";
        let fm = forms(s).unwrap().join().unwrap();
        assert_eq!(fm.to_string(), "(((p -> q) /\\ p) -> (q \\/ False))");
    }

    #[test]
    fn cnf() {
        let fm = forms("cnf(a, axiom, p | ~q | r).").unwrap().join().unwrap();
        assert_eq!(fm.to_string(), "~(p \\/ (~q \\/ r))");
    }

    #[test]
    fn equiv() {
        let fm = forms("fof(a, conjecture, p <=> ~p).").unwrap().join().unwrap();
        assert_eq!(fm.to_string(), "((p -> ~p) /\\ (~p -> p))");
    }

    #[test]
    fn rejected() {
        assert_eq!(forms("fof(a, axiom, ![X]: p(X)).").err(), Some(NoSuccessKind::Inappropriate));
        assert_eq!(forms("fof(a, axiom, p(a)).").err(), Some(NoSuccessKind::Inappropriate));
        assert_eq!(forms("fof(a, axiom, p &").err(), Some(NoSuccessKind::SyntaxError));
        let tff = "tff(a, axiom, p).";
        assert_eq!(forms(tff).err(), Some(NoSuccessKind::Inappropriate));
    }
}
