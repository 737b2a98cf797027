//! Chequeos por ruta modificada.
//!
//! Todas las rutas se evalúan contra todas las reglas y se acumulan en cinco
//! buckets; luego el primer bucket no vacío, en el orden naming → tamaño →
//! rama → sufijo → carpeta de datos, determina el rechazo.

use hook_core::{ChangedPath, FileSizeLimit, HookError, Violation};
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;

static SEED_DATA: Lazy<Regex> = Lazy::new(|| Regex::new(r".*/dbscript/(?:initdb|initdata)/.*").expect("static regex"));

const RESTRICTED_FOLDERS: [&str; 2] = ["/dbscript/", "/demodata/"];
const MAIN_DBSCRIPT: &str = "/src/main/dbscript/";

/// Parámetros de la evaluación por ruta.
#[derive(Debug, Clone)]
pub struct ChangeRules<'a> {
    pub branches: &'a [String],
    pub forbidden_suffixes: &'a [String],
    pub size_limit: Option<&'a FileSizeLimit>,
    pub check_naming: bool,
    pub check_db: bool,
    /// Nombre del release; una carpeta con ese nombre habilita los datos.
    pub fixed_in_release: &'a str,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ChangeBuckets {
    pub naming: Vec<String>,
    pub size: Vec<String>,
    pub branch: Vec<String>,
    pub suffix: Vec<String>,
    pub restricted: Vec<String>,
}

impl ChangeBuckets {
    /// Evalúa todas las rutas. `file_size` se invoca una vez por archivo
    /// agregado, y sólo si hay límite configurado.
    pub fn evaluate<F>(changed: &[ChangedPath], rules: &ChangeRules<'_>, mut file_size: F) -> Result<Self, HookError>
        where F: FnMut(&str) -> Result<u64, HookError>
    {
        let mut buckets = Self::default();
        for change in changed {
            let path = change.path.as_str();

            if rules.check_naming && change.is_added() && path.contains(' ') {
                buckets.naming.push(path.to_string());
            }

            if let Some(limit) = rules.size_limit {
                if change.is_added() && !change.is_directory() && file_size(path)? > limit.bytes {
                    buckets.size.push(path.to_string());
                }
            }

            if !rules.branches.iter().any(|b| path.starts_with(b.as_str())) {
                buckets.branch.push(path.to_string());
            }

            if rules.forbidden_suffixes.iter().any(|s| has_suffix(path, s)) {
                buckets.suffix.push(path.to_string());
            }

            if rules.check_db && !change.is_directory() && is_misplaced_data(path, rules.fixed_in_release) {
                buckets.restricted.push(path.to_string());
            }
        }
        debug!("change_buckets naming={} size={} branch={} suffix={} restricted={}",
               buckets.naming.len(),
               buckets.size.len(),
               buckets.branch.len(),
               buckets.suffix.len(),
               buckets.restricted.len());
        Ok(buckets)
    }

    /// Primer bucket no vacío según la prioridad fija, como violación.
    pub fn first_violation(self, rules: &ChangeRules<'_>) -> Option<Violation> {
        if !self.naming.is_empty() {
            return Some(Violation::NamingViolation { paths: self.naming });
        }
        if !self.size.is_empty() {
            let limit = rules.size_limit.map(|l| l.raw.clone()).unwrap_or_default();
            return Some(Violation::SizeLimitExceeded { limit, paths: self.size });
        }
        if !self.branch.is_empty() {
            return Some(Violation::WrongBranch { paths: self.branch });
        }
        if !self.suffix.is_empty() {
            return Some(Violation::ForbiddenSuffix { paths: self.suffix,
                                                     suffixes: rules.forbidden_suffixes.to_vec() });
        }
        if !self.restricted.is_empty() {
            return Some(Violation::WrongDbFolder { paths: self.restricted });
        }
        None
    }
}

fn has_suffix(path: &str, suffix: &str) -> bool {
    path.strip_suffix(suffix).is_some_and(|rest| rest.ends_with('.'))
}

/// Datos de seed (`.../dbscript/initdb|initdata/...`) fuera del árbol
/// principal `src/main/dbscript`.
fn is_seed_data(path: &str) -> bool {
    !path.contains(MAIN_DBSCRIPT) && SEED_DATA.is_match(path)
}

/// Scripts o datos demo que no están bajo una carpeta del release.
pub fn is_misplaced_data(path: &str, fixed_in_release: &str) -> bool {
    if !RESTRICTED_FOLDERS.iter().any(|f| path.contains(f)) || is_seed_data(path) {
        return false;
    }
    !path.contains(&format!("/{fixed_in_release}/"))
}
