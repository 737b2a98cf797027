//! Tags `[nombre: v1,v2]` embebidos en la descripción del paquete.
//!
//! Gramática: nombre sin distinguir mayúsculas, espacios ASCII opcionales
//! alrededor del nombre, valores separados por coma y recortados. Si el tag aparece
//! varias veces gana la primera aparición. Un tag no cruza saltos de línea.

use hook_core::utils::split_list;
use once_cell::sync::Lazy;
use regex::Regex;

fn tag_regex(name: &str) -> Regex {
    Regex::new(&format!(r"(?i)\[(?-u:\s)*{name}(?-u:\s)*:(.*?)\]")).expect("static tag regex")
}

static ACCESS: Lazy<Regex> = Lazy::new(|| tag_regex("access"));
static VERSION: Lazy<Regex> = Lazy::new(|| tag_regex("version"));
static REPOSITORY: Lazy<Regex> = Lazy::new(|| tag_regex("repository"));
static BRANCH: Lazy<Regex> = Lazy::new(|| tag_regex("branch"));

/// Vista de sólo lectura sobre los tags de una descripción.
#[derive(Debug, Clone, Copy)]
pub struct PackageTags<'a> {
    description: &'a str,
}

impl<'a> PackageTags<'a> {
    pub fn parse(description: &'a str) -> Self {
        Self { description }
    }

    fn raw(&self, re: &Regex) -> Option<&'a str> {
        re.captures(self.description)
          .and_then(|c| c.get(1))
          .map(|m| m.as_str().trim())
    }

    /// Usuarios con acceso; `None` significa acceso libre.
    pub fn access(&self) -> Option<Vec<String>> {
        self.raw(&ACCESS).map(split_list)
    }

    /// Releases admitidos.
    pub fn versions(&self) -> Option<Vec<String>> {
        self.raw(&VERSION).map(split_list)
    }

    pub fn repository(&self) -> Option<&'a str> {
        self.raw(&REPOSITORY)
    }

    /// Prefijos de ruta (ramas) admitidos.
    pub fn branches(&self) -> Option<Vec<String>> {
        self.raw(&BRANCH).map(split_list)
    }
}
