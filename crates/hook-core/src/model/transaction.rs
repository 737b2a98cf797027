//! Transacción en curso y rutas modificadas.

use crate::errors::HookError;
use crate::utils::basename;

/// Identidad de la transacción inspeccionada.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TxnContext {
    pub repo_path: String,
    pub txn_name: String,
}

impl TxnContext {
    pub fn new(repo_path: impl Into<String>, txn_name: impl Into<String>) -> Self {
        Self { repo_path: repo_path.into(),
               txn_name: txn_name.into() }
    }

    /// Nombre del repositorio: último segmento de la ruta.
    pub fn repository_name(&self) -> String {
        basename(&self.repo_path).trim().to_string()
    }
}

/// Tipo de cambio reportado por `svnlook changed`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Added,
    Deleted,
    Updated,
    /// Sólo cambiaron propiedades (`_U`).
    PropertyUpdated,
    Other(String),
}

impl ChangeKind {
    pub fn from_token(token: &str) -> Self {
        match token.to_ascii_uppercase().as_str() {
            "A" => Self::Added,
            "D" => Self::Deleted,
            "U" | "UU" => Self::Updated,
            "_U" => Self::PropertyUpdated,
            _ => Self::Other(token.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedPath {
    pub kind: ChangeKind,
    pub path: String,
}

impl ChangedPath {
    pub fn new(kind: ChangeKind, path: impl Into<String>) -> Self {
        Self { kind, path: path.into() }
    }

    /// Parsea una línea `<tipo><espacios><ruta>`. La ruta puede contener
    /// espacios.
    pub fn parse_line(line: &str) -> Result<Self, HookError> {
        let line = line.trim();
        let parsed = line.split_once(char::is_whitespace)
                         .map(|(token, rest)| (token, rest.trim_start()))
                         .filter(|(_, path)| !path.is_empty());
        match parsed {
            Some((token, path)) => Ok(Self::new(ChangeKind::from_token(token), path)),
            None => Err(HookError::Parse { context: "svnlook changed".into(),
                                           message: format!("malformed line '{line}'") }),
        }
    }

    pub fn is_added(&self) -> bool {
        self.kind == ChangeKind::Added
    }

    /// Los directorios se reportan con `/` final.
    pub fn is_directory(&self) -> bool {
        self.path.ends_with('/')
    }
}
