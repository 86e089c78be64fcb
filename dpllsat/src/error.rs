use dpll::szs::{self, NoSuccessKind};
use std::fmt::Display;

type Detail = Box<dyn std::error::Error>;

/// Reason for not deciding a problem, with optional details for the SZS output.
pub struct Error {
    kind: NoSuccessKind,
    detail: Option<Detail>,
}

impl Error {
    pub fn new(kind: NoSuccessKind, detail: Detail) -> Self {
        let detail = Some(detail);
        Self { kind, detail }
    }

    pub fn kind(&self) -> NoSuccessKind {
        self.kind
    }

    pub fn detail(&self) -> Option<&Detail> {
        self.detail.as_ref()
    }
}

impl From<NoSuccessKind> for Error {
    fn from(kind: NoSuccessKind) -> Self {
        let detail = None;
        Self { kind, detail }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::new(szs::OsError, e.into())
    }
}

/// Library errors are rendered eagerly, because their variables need not be `'static`.
impl<V: Display> From<dpll::Error<V>> for Error {
    fn from(e: dpll::Error<V>) -> Self {
        Self::new(NoSuccessKind::from(&e), e.to_string().into())
    }
}
