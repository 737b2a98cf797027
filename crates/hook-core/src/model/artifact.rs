use crate::errors::HookError;

/// Metadata del artifact (ticket) referenciado por el mensaje de commit,
/// tal como la devuelve el store externo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactRecord {
    pub artifact_status: String,
    /// Título del release "Fixed in Release" enlazado al artifact.
    pub fixed_in_release: String,
    pub fixed_in_release_status: String,
    /// Descripción libre del paquete que contiene los tags de política.
    pub package_description: Option<String>,
}

impl ArtifactRecord {
    /// Devuelve la descripción del paquete; su ausencia es un error de
    /// configuración, no del autor.
    pub fn package_description(&self) -> Result<&str, HookError> {
        self.package_description
            .as_deref()
            .ok_or(HookError::InvalidPackageDescription("empty"))
    }
}
