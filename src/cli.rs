//! Argumentos del hook.
//!
//! Svn invoca `pre-commit <repo> <txn>`; el script de hook agrega las
//! banderas de política:
//!
//! ```text
//! pre-commit-hook /srv/svn/alpha 42-a --superusers=cm,root --file-size-limit=10M --check-log-message
//! ```

use std::path::PathBuf;

use clap::Parser;
use hook_core::model::policy::DEFAULT_ALLOWED_STATUSES;
use hook_core::{FileSizeLimit, PolicyConfig, TxnContext};

fn default_statuses() -> Vec<String> {
    DEFAULT_ALLOWED_STATUSES.iter().map(|s| s.to_string()).collect()
}

#[derive(Debug, Parser)]
#[command(name = "pre-commit-hook", version, about = "Subversion pre-commit policy validator")]
pub struct Cli {
    /// Ruta del repositorio.
    pub repository: String,
    /// Nombre de la transacción en curso.
    pub transaction: String,

    /// Autores que omiten todos los chequeos.
    #[arg(long, value_delimiter = ',')]
    pub superusers: Vec<String>,

    /// Estados de artifact admitidos.
    #[arg(long = "allowable-statuses", value_delimiter = ',', default_values_t = default_statuses())]
    pub allowable_statuses: Vec<String>,

    /// Extensiones prohibidas (sin punto).
    #[arg(long = "forbidden-suffixes", value_delimiter = ',')]
    pub forbidden_suffixes: Vec<String>,

    /// Tamaño máximo de archivos agregados: `N`, `NK` o `NM`.
    #[arg(long = "file-size-limit")]
    pub file_size_limit: Option<FileSizeLimit>,

    /// Desactiva el chequeo de carpetas dbscript/demodata.
    #[arg(long = "no-check-db")]
    pub no_check_db: bool,

    /// Desactiva el chequeo de espacios en nombres.
    #[arg(long = "no-check-naming")]
    pub no_check_naming: bool,

    /// Exige líneas `What:` y `Reviewed by:` en el mensaje.
    #[arg(long = "check-log-message")]
    pub check_log_message: bool,

    /// Binario svnlook.
    #[arg(long, default_value = "svnlook")]
    pub svnlook: PathBuf,

    /// Archivo de propiedades de conexión (por defecto `hook.properties` junto
    /// al ejecutable).
    #[arg(long, env = "SVNHOOK_PROPERTIES")]
    pub properties: Option<PathBuf>,
}

impl Cli {
    pub fn policy(&self) -> PolicyConfig {
        PolicyConfig { superusers: self.superusers.clone(),
                       allowed_statuses: self.allowable_statuses.clone(),
                       forbidden_suffixes: self.forbidden_suffixes.clone(),
                       file_size_limit: self.file_size_limit.clone(),
                       check_db: !self.no_check_db,
                       check_naming: !self.no_check_naming,
                       check_log_message: self.check_log_message }
    }

    pub fn txn(&self) -> TxnContext {
        TxnContext::new(self.repository.clone(), self.transaction.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("pre-commit-hook").chain(args.iter().copied())).expect("parse")
    }

    #[test]
    fn defaults_without_flags() {
        let cli = parse(&["/srv/svn/alpha", "42-a"]);
        assert_eq!(cli.policy(), PolicyConfig::default());
        assert_eq!(cli.txn(), TxnContext::new("/srv/svn/alpha", "42-a"));
        assert_eq!(cli.svnlook, PathBuf::from("svnlook"));
    }

    #[test]
    fn policy_flags() {
        let cli = parse(&["/srv/svn/alpha",
                          "42-a",
                          "--superusers=cm,root",
                          "--allowable-statuses=Open",
                          "--forbidden-suffixes=bak,tmp",
                          "--file-size-limit=5M",
                          "--no-check-db",
                          "--no-check-naming",
                          "--check-log-message"]);
        let policy = cli.policy();
        assert_eq!(policy.superusers, vec!["cm", "root"]);
        assert_eq!(policy.allowed_statuses, vec!["Open"]);
        assert_eq!(policy.forbidden_suffixes, vec!["bak", "tmp"]);
        assert_eq!(policy.file_size_limit.unwrap().bytes, 5 * 1024 * 1024);
        assert!(!policy.check_db);
        assert!(!policy.check_naming);
        assert!(policy.check_log_message);
    }

    #[test]
    fn invalid_size_limit_is_rejected() {
        let res = Cli::try_parse_from(["pre-commit-hook", "/r", "1", "--file-size-limit=big"]);
        assert!(res.is_err());
    }

    #[test]
    fn positionals_are_mandatory() {
        assert!(Cli::try_parse_from(["pre-commit-hook", "/r"]).is_err());
    }
}
