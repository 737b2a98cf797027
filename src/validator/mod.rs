//! Orquestador de la validación pre-commit.
pub mod pipeline;

pub use pipeline::PreCommitValidator;
