//! Veredicto final de una ejecución y su traducción a código de salida.

use crate::errors::{HookError, HookFailure};
use crate::model::Violation;
use crate::report::{banner, failure_report};

#[derive(Debug)]
pub enum Verdict {
    Accepted,
    Rejected { author: Option<String>, violation: Violation },
    Failed { author: Option<String>, error: HookError },
}

impl Verdict {
    /// Convierte el resultado del pipeline; `author` es el autor resuelto
    /// hasta el momento del corte (si lo hubo). Entre los errores de sistema
    /// sólo los de descripción de paquete saludan al autor.
    pub fn from_result(author: Option<String>, result: Result<(), HookFailure>) -> Self {
        match result {
            Ok(()) => Self::Accepted,
            Err(HookFailure::Rejected(violation)) => Self::Rejected { author, violation },
            Err(HookFailure::System(error)) => {
                let author = match error {
                    HookError::InvalidPackageDescription(_) => author,
                    _ => None,
                };
                Self::Failed { author, error }
            }
        }
    }

    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// 0 = aceptado; 1 = rechazado o error interno.
    pub fn exit_code(&self) -> i32 {
        if self.is_accepted() {
            0
        } else {
            1
        }
    }

    /// Texto para stderr; `None` cuando la transacción fue aceptada.
    pub fn render(&self) -> Option<String> {
        match self {
            Self::Accepted => None,
            Self::Rejected { author, violation } => Some(banner(author.as_deref(), &violation.to_string())),
            Self::Failed { author, error } => Some(failure_report(author.as_deref(), error)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_is_silent_and_exits_zero() {
        let v = Verdict::from_result(Some("ana".into()), Ok(()));
        assert_eq!(v.exit_code(), 0);
        assert!(v.render().is_none());
    }

    #[test]
    fn rejection_greets_author() {
        let v = Verdict::from_result(Some("ana".into()), Err(Violation::MissingWhat.into()));
        assert_eq!(v.exit_code(), 1);
        let text = v.render().unwrap();
        assert!(text.contains("Dear ana\n\n"));
        assert!(text.contains("Please provide 'What' information"));
    }

    #[test]
    fn system_error_prints_apology_and_detail() {
        let err = HookError::InvalidPackageDescription("branch missing");
        let v = Verdict::from_result(None, Err(err.into()));
        assert_eq!(v.exit_code(), 1);
        let text = v.render().unwrap();
        assert!(text.contains("Sorry, it's not your fault, it's ours"));
        assert!(text.contains("invalid package description: branch missing"));
        assert!(!text.contains("Dear"));
    }

    #[test]
    fn package_description_error_keeps_author() {
        let err = HookError::InvalidPackageDescription("branch missing");
        let text = Verdict::from_result(Some("ana".into()), Err(err.into())).render().unwrap();
        assert!(text.contains("Dear ana\n\n"));
    }

    #[test]
    fn tool_and_store_errors_drop_author() {
        let command = HookError::Command { command: "svnlook changed /r --transaction 1".into(),
                                           exit_code: 1,
                                           message: "svnlook: E160007".into() };
        let store = HookError::Store("connection refused".into());
        for err in [command, store] {
            let v = Verdict::from_result(Some("ana".into()), Err(err.into()));
            assert!(matches!(v, Verdict::Failed { author: None, .. }), "{v:?}");
            assert!(!v.render().unwrap().contains("Dear"));
        }
    }
}
