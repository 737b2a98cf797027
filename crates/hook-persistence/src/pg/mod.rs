//! Lectura de artifacts desde la base TeamForge (Postgres, Diesel).
//!
//! Una conexión por consulta: se abre, ejecuta la única consulta
//! parametrizada y se libera al salir de `query_artifact`, también ante
//! error.

use diesel::prelude::*;
use diesel::sql_types::{Nullable, Text};
use hook_core::{ArtifactRecord, ArtifactStore, HookError};
use log::debug;

use crate::config::{DbConfig, Properties};
use crate::error::PersistenceError;

/// Artifact → release "Fixed in Release" → carpeta del paquete.
pub const ARTIFACT_QUERY: &str = "\
SELECT fv.value artifact_status, fr.status fixed_in_release_status, f1.title fixed_in_release, f2.description package_description
FROM artifact a INNER JOIN field_value fv ON a.status_fv = fv.id
 INNER JOIN relationship r ON r.target_id = a.id
 INNER JOIN frs_release fr ON r.origin_id = fr.id
 INNER JOIN folder f1 ON fr.id = f1.id
 INNER JOIN folder f2 ON f2.id = f1.parent_folder_id
WHERE a.id = $1
 AND r.relationship_type_name = 'ArtifactResolvedRelease' AND r.is_deleted = '0'
 AND fv.is_deleted = '0'
 AND f1.is_deleted = '0'
 AND f2.is_deleted = '0'";

/// Fila devuelta por `ARTIFACT_QUERY`.
#[derive(QueryableByName, Debug)]
pub struct ArtifactRow {
    #[diesel(sql_type = Text)]
    pub artifact_status: String,
    #[diesel(sql_type = Text)]
    pub fixed_in_release: String,
    #[diesel(sql_type = Text)]
    pub fixed_in_release_status: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub package_description: Option<String>,
}

impl From<ArtifactRow> for ArtifactRecord {
    fn from(row: ArtifactRow) -> Self {
        ArtifactRecord { artifact_status: row.artifact_status,
                         fixed_in_release: row.fixed_in_release,
                         fixed_in_release_status: row.fixed_in_release_status,
                         package_description: row.package_description }
    }
}

/// Ejecuta la consulta por id; si hay varias filas se usa la primera.
pub fn query_artifact(database_url: &str, artifact_id: &str) -> Result<Option<ArtifactRecord>, PersistenceError> {
    debug!("query_artifact:start artifact_id={artifact_id}");
    let mut conn = PgConnection::establish(database_url)?;
    let rows: Vec<ArtifactRow> = diesel::sql_query(ARTIFACT_QUERY).bind::<Text, _>(artifact_id)
                                                                   .load(&mut conn)?;
    debug!("query_artifact:done artifact_id={artifact_id} rows={}", rows.len());
    Ok(rows.into_iter().next().map(ArtifactRecord::from))
}

/// `ArtifactStore` respaldado por Postgres. La URL se resuelve en cada
/// búsqueda, de modo que una configuración incompleta sólo falla si se llega
/// a consultar la base.
pub struct PgArtifactStore {
    properties: Properties,
}

impl PgArtifactStore {
    pub fn new(properties: Properties) -> Self {
        Self { properties }
    }
}

impl ArtifactStore for PgArtifactStore {
    fn find_artifact(&self, artifact_id: &str) -> Result<Option<ArtifactRecord>, HookError> {
        let cfg = DbConfig::from_properties(&self.properties)?;
        Ok(query_artifact(&cfg.url, artifact_id)?)
    }
}
