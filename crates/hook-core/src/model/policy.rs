//! Configuración de políticas, inmutable durante toda la ejecución.

use std::fmt;
use std::str::FromStr;

use crate::errors::HookError;
use crate::utils::parse_file_size_limit;

/// Estados de artifact admitidos si no se configuran otros.
pub const DEFAULT_ALLOWED_STATUSES: [&str; 3] = ["Opened", "Reopened", "Active"];

/// Límite de tamaño de archivo: texto original (para los mensajes) y bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSizeLimit {
    pub raw: String,
    pub bytes: u64,
}

impl FromStr for FileSizeLimit {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self { raw: s.to_string(),
                  bytes: parse_file_size_limit(s)? })
    }
}

impl fmt::Display for FileSizeLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfig {
    pub superusers: Vec<String>,
    pub allowed_statuses: Vec<String>,
    pub forbidden_suffixes: Vec<String>,
    pub file_size_limit: Option<FileSizeLimit>,
    /// Chequeo de carpetas `dbscript`/`demodata`.
    pub check_db: bool,
    pub check_naming: bool,
    pub check_log_message: bool,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self { superusers: Vec::new(),
               allowed_statuses: DEFAULT_ALLOWED_STATUSES.iter().map(|s| s.to_string()).collect(),
               forbidden_suffixes: Vec::new(),
               file_size_limit: None,
               check_db: true,
               check_naming: true,
               check_log_message: false }
    }
}

impl PolicyConfig {
    pub fn is_superuser(&self, author: &str) -> bool {
        self.superusers.iter().any(|u| u == author)
    }
}
