//! hook-policies – reglas de aceptación de commits
//!
//! Funciones puras sobre el modelo de `hook-core`: gramática de tags de la
//! descripción del paquete, chequeos de artifact/release/repositorio, buckets
//! de violaciones por ruta y formato del mensaje de commit. Ninguna función
//! habla con procesos externos salvo a través del callback de tamaños.

pub mod changes;
pub mod checks;
pub mod tags;

pub use changes::{ChangeBuckets, ChangeRules};
pub use checks::{check_access, check_artifact_status, check_fixed_in_release, check_log_message, check_repository,
                 extract_artifact_id};
pub use tags::PackageTags;
