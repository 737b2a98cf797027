//! svnhooks
//!
//! Hook pre-commit de Subversion: valida autor, artifact enlazado, release,
//! rama, nombres, tamaños, sufijos, carpetas de datos y formato del mensaje
//! antes de que la transacción se convierta en revisión.
//!
//! `execute` es el único punto que traduce el veredicto a texto en stderr y
//! código de salida; `main.rs` sólo termina el proceso con ese código.

pub mod cli;
pub mod logging;
pub mod validator;

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::Parser;
use hook_core::{HookError, SvnLook, Verdict};
use hook_persistence::{locate_properties, PgArtifactStore, Properties};

pub use cli::Cli;
pub use validator::PreCommitValidator;

/// Ejecuta el hook con los argumentos dados (incluido el nombre del
/// programa) y devuelve el código de salida.
pub fn execute<I, A>(args: I, stderr: &mut dyn Write) -> i32
    where I: IntoIterator<Item = A>,
          A: Into<OsString> + Clone
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return 0;
        }
        Err(e) => {
            let error = HookError::BadArguments(e.render().to_string().trim().to_string());
            return emit(&Verdict::Failed { author: None, error }, stderr);
        }
    };

    let properties = match load_properties(&cli) {
        Ok(p) => p,
        Err(error) => return emit(&Verdict::Failed { author: None, error }, stderr),
    };

    let policy = cli.policy();
    let txn = cli.txn();
    let repository_name = txn.repository_name();
    let validator = PreCommitValidator::new(&policy,
                                            SvnLook::new(cli.svnlook.clone(), txn),
                                            PgArtifactStore::new(properties),
                                            repository_name);
    emit(&validator.validate(), stderr)
}

fn load_properties(cli: &Cli) -> Result<Properties, HookError> {
    let path = locate_properties(cli.properties.as_deref())?;
    Properties::load(&path)
}

fn emit(verdict: &Verdict, stderr: &mut dyn Write) -> i32 {
    if let Some(text) = verdict.render() {
        let _ = stderr.write_all(text.as_bytes());
        let _ = stderr.flush();
    }
    verdict.exit_code()
}
