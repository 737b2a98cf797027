//! Interrogación de la transacción en curso.
pub mod svnlook;

pub use svnlook::SvnLook;

use crate::errors::HookError;
use crate::model::ChangedPath;

/// Consultas sobre una transacción pendiente.
pub trait TxnInspector {
    fn author(&self) -> Result<String, HookError>;
    fn log(&self) -> Result<String, HookError>;
    /// Rutas modificadas, en el orden reportado por la herramienta.
    fn changed(&self) -> Result<Vec<ChangedPath>, HookError>;
    /// Tamaño en bytes de un archivo de la transacción.
    fn file_size(&self, path: &str) -> Result<u64, HookError>;
}

impl<T: TxnInspector + ?Sized> TxnInspector for &T {
    fn author(&self) -> Result<String, HookError> {
        (**self).author()
    }

    fn log(&self) -> Result<String, HookError> {
        (**self).log()
    }

    fn changed(&self) -> Result<Vec<ChangedPath>, HookError> {
        (**self).changed()
    }

    fn file_size(&self, path: &str) -> Result<u64, HookError> {
        (**self).file_size(path)
    }
}
