use std::collections::HashMap;

use crate::errors::HookError;
use crate::model::ArtifactRecord;

/// Lectura de metadata de artifacts desde el store externo.
pub trait ArtifactStore {
    /// Busca el artifact por id (`artf1234`). `Ok(None)` si no existe o no
    /// tiene release enlazado.
    fn find_artifact(&self, artifact_id: &str) -> Result<Option<ArtifactRecord>, HookError>;
}

/// Backend en memoria (tests y diagnósticos locales).
#[derive(Debug, Default)]
pub struct InMemoryArtifactStore {
    pub inner: HashMap<String, ArtifactRecord>,
}

impl InMemoryArtifactStore {
    pub fn with(mut self, artifact_id: &str, record: ArtifactRecord) -> Self {
        self.inner.insert(artifact_id.to_string(), record);
        self
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn find_artifact(&self, artifact_id: &str) -> Result<Option<ArtifactRecord>, HookError> {
        Ok(self.inner.get(artifact_id).cloned())
    }
}

impl<S: ArtifactStore + ?Sized> ArtifactStore for &S {
    fn find_artifact(&self, artifact_id: &str) -> Result<Option<ArtifactRecord>, HookError> {
        (**self).find_artifact(artifact_id)
    }
}
