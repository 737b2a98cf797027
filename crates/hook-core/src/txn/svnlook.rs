//! `TxnInspector` sobre el binario `svnlook`.

use std::ffi::OsString;
use std::path::PathBuf;

use log::debug;

use crate::command::runner::{render_command_line, run_command};
use crate::errors::HookError;
use crate::model::{ChangedPath, TxnContext};
use crate::txn::TxnInspector;

pub struct SvnLook {
    program: PathBuf,
    txn: TxnContext,
}

impl SvnLook {
    pub fn new(program: impl Into<PathBuf>, txn: TxnContext) -> Self {
        Self { program: program.into(),
               txn }
    }

    /// Ejecuta `svnlook` y devuelve stdout; un código distinto de cero se
    /// convierte en `HookError::Command` con el texto de stderr.
    fn look(&self, args: &[OsString]) -> Result<String, HookError> {
        let output = run_command(&self.program, args)?;
        if output.success() {
            return Ok(output.stdout);
        }
        Err(HookError::Command { command: render_command_line(self.program.as_os_str(), args),
                                 exit_code: output.exit_code,
                                 message: output.stderr })
    }

    /// `svnlook <sub> <repo> --transaction <txn>`
    fn subcommand(&self, sub: &str) -> Result<String, HookError> {
        self.look(&[sub.into(),
                    self.txn.repo_path.clone().into(),
                    "--transaction".into(),
                    self.txn.txn_name.clone().into()])
    }
}

impl TxnInspector for SvnLook {
    fn author(&self) -> Result<String, HookError> {
        let author = self.subcommand("author")?.trim().to_string();
        debug!("svnlook:author txn={} author={author}", self.txn.txn_name);
        Ok(author)
    }

    fn log(&self) -> Result<String, HookError> {
        Ok(self.subcommand("log")?.trim().to_string())
    }

    fn changed(&self) -> Result<Vec<ChangedPath>, HookError> {
        let text = self.subcommand("changed")?;
        let changed = text.lines()
                          .filter(|l| !l.trim().is_empty())
                          .map(ChangedPath::parse_line)
                          .collect::<Result<Vec<_>, _>>()?;
        debug!("svnlook:changed txn={} count={}", self.txn.txn_name, changed.len());
        Ok(changed)
    }

    fn file_size(&self, path: &str) -> Result<u64, HookError> {
        let text = self.look(&["--transaction".into(),
                               self.txn.txn_name.clone().into(),
                               "filesize".into(),
                               self.txn.repo_path.clone().into(),
                               path.into()])?;
        text.trim().parse().map_err(|e| HookError::Parse { context: format!("svnlook filesize {path}"),
                                                            message: format!("'{}': {e}", text.trim()) })
    }
}
