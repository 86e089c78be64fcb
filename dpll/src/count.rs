use crate::form::{Form, Op};
use num_bigint::BigUint;
use num_traits::One;

impl<V> Form<V> {
    /// Number of clauses in the CNF of an NNF.
    ///
    /// This is computed without constructing the CNF,
    /// whose size may be exponential in the size of the NNF.
    ///
    /// Panics if the formula is not in NNF.
    pub fn cnf_len(&self) -> BigUint {
        use Form::Bin;
        match self {
            Bin(l, Op::Conj, r) => l.cnf_len() + r.cnf_len(),
            Bin(l, Op::Disj, r) => l.cnf_len() * r.cnf_len(),
            a if a.is_literal() => One::one(),
            _ => panic!("unhandled formula"),
        }
    }
}

#[test]
fn cnf_len() {
    let v = |i: usize| Form::Var(i);
    // (0 & 1) | (2 & 3) | ... has 2^n clauses in CNF
    let dnf = (0..10).map(|i| v(2 * i) & v(2 * i + 1)).collect();
    let dnf = Form::disjoin(dnf).unwrap();
    assert_eq!(dnf.cnf_len(), BigUint::from(1024usize));

    let fm = ((v(0) | v(1)) & -v(2)) | (v(3) & (v(4) | v(5)));
    assert_eq!(fm.cnf_len(), BigUint::from(4usize));
    let len = fm.cnf_len();
    assert_eq!(len, BigUint::from(crate::Matrix::try_from(fm.cnf()).unwrap().len()));
}
