//! Helpers pequeños compartidos por los crates del hook.

use std::path::Path;

use crate::errors::HookError;

/// Último segmento de una ruta (`/var/svn/proj/` → `proj`). Si la ruta no
/// tiene segmento final se devuelve tal cual.
pub fn basename(path: &str) -> String {
    Path::new(path).file_name()
                   .map(|n| n.to_string_lossy().into_owned())
                   .unwrap_or_else(|| path.to_string())
}

/// Convierte "10K", "5M" o "100" a bytes. El sufijo no distingue mayúsculas.
pub fn parse_file_size_limit(limit: &str) -> Result<u64, HookError> {
    let normalized = limit.trim().to_ascii_uppercase();
    let (digits, factor) = if let Some(n) = normalized.strip_suffix('K') {
        (n, 1024)
    } else if let Some(n) = normalized.strip_suffix('M') {
        (n, 1024 * 1024)
    } else {
        (normalized.as_str(), 1)
    };
    let invalid = |message: String| HookError::Parse { context: "file size limit".into(),
                                                       message };
    let value: u64 = digits.parse()
                           .map_err(|e| invalid(format!("'{limit}': {e}")))?;
    value.checked_mul(factor)
         .ok_or_else(|| invalid(format!("'{limit}' overflows")))
}

/// Separa una lista por comas, recortando espacios y descartando vacíos.
pub fn split_list(value: &str) -> Vec<String> {
    value.split(',')
         .map(str::trim)
         .filter(|s| !s.is_empty())
         .map(str::to_string)
         .collect()
}
