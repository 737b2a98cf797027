//! Violaciones de política: errores esperados, accionables por el autor.
//!
//! Cada variante produce exactamente el mensaje que verá el operador.

use std::fmt;

const TRY_AGAIN: &str = "Please do the needful and try again, or contacting CM for assistance";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    MissingArtifactId,
    ArtifactNotFound { artifact_id: String },
    AccessDenied,
    StatusNotAllowed { status: String, allowed: Vec<String> },
    ReleaseInactive { release: String },
    ReleaseNotAllowed { release: String, allowed: Vec<String> },
    RepositoryNotAllowed { repository: String, allowed: String },
    NamingViolation { paths: Vec<String> },
    SizeLimitExceeded { limit: String, paths: Vec<String> },
    WrongBranch { paths: Vec<String> },
    ForbiddenSuffix { paths: Vec<String>, suffixes: Vec<String> },
    WrongDbFolder { paths: Vec<String> },
    MissingWhat,
    MissingReviewedBy,
}

impl Violation {
    /// Código corto para logging.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MissingArtifactId => "missing_artifact_id",
            Self::ArtifactNotFound { .. } => "artifact_not_found",
            Self::AccessDenied => "access_denied",
            Self::StatusNotAllowed { .. } => "status_not_allowed",
            Self::ReleaseInactive { .. } => "release_inactive",
            Self::ReleaseNotAllowed { .. } => "release_not_allowed",
            Self::RepositoryNotAllowed { .. } => "repository_not_allowed",
            Self::NamingViolation { .. } => "naming",
            Self::SizeLimitExceeded { .. } => "size_limit",
            Self::WrongBranch { .. } => "branch",
            Self::ForbiddenSuffix { .. } => "suffix",
            Self::WrongDbFolder { .. } => "db_folder",
            Self::MissingWhat => "missing_what",
            Self::MissingReviewedBy => "missing_reviewed_by",
        }
    }
}

/// Formato de lista `[a, b, c]`.
fn bracketed(items: &[String]) -> String {
    format!("[{}]", items.join(", "))
}

fn write_paths(f: &mut fmt::Formatter<'_>, paths: &[String]) -> fmt::Result {
    for path in paths {
        writeln!(f, "{path}")?;
    }
    writeln!(f)
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingArtifactId => {
                write!(f, "Please provide artifact id in the commit message (eg: [artf12306])")
            }
            Self::ArtifactNotFound { artifact_id } => {
                write!(f, "Please make sure below requirements have been fulfilled:\n\n")?;
                writeln!(f, "* artifact '{artifact_id}' is valid and does exist")?;
                write!(f, "* artifact '{artifact_id}' has 'Fixed in Release' field properly valued\n\n")?;
                write!(f, "If all satisfied, we apology for the inconvenience and please contact CM for assistance")
            }
            Self::AccessDenied => {
                write!(f, "Sorry, you do not have permission to access the code branch\n\n")?;
                write!(f, "If any questions, please contact CM for assistance")
            }
            Self::StatusNotAllowed { status, allowed } => {
                write!(f, "Status '{status}' is not allowed for code check-in\n\n")?;
                write!(f, "Current allowed statuses are: {}\n\n", bracketed(allowed))?;
                f.write_str(TRY_AGAIN)
            }
            Self::ReleaseInactive { release } => {
                write!(f,
                       "Release version '{release}' is not in 'active' state, please contact CM for assistance")
            }
            Self::ReleaseNotAllowed { release, allowed } => {
                write!(f, "Release version '{release}' is not allowed for code check-in\n\n")?;
                write!(f, "Current allowed versions are: {}\n\n", bracketed(allowed))?;
                f.write_str(TRY_AGAIN)
            }
            Self::RepositoryNotAllowed { repository, allowed } => {
                write!(f, "Repository '{repository}' is not allowed for code check-in\n\n")?;
                write!(f, "Current allowed repository is: '{allowed}'\n\n")?;
                f.write_str(TRY_AGAIN)
            }
            Self::NamingViolation { paths } => {
                write!(f, "Below changes contain whitespaces in the naming, please check\n\n")?;
                write_paths(f, paths)?;
                f.write_str(TRY_AGAIN)
            }
            Self::SizeLimitExceeded { limit, paths } => {
                write!(f, "Below changes exceeded maximum allowable size limit, please check\n\n")?;
                write!(f, "Current allowed file size limit is: [{limit}]\n\n")?;
                write_paths(f, paths)?;
                f.write_str(TRY_AGAIN)
            }
            Self::WrongBranch { paths } => {
                write!(f, "Below changes are committing to the wrong branch, please check\n\n")?;
                write_paths(f, paths)?;
                f.write_str(TRY_AGAIN)
            }
            Self::ForbiddenSuffix { paths, suffixes } => {
                write!(f, "Below changes are not allowed for check-in, please check\n\n")?;
                write_paths(f, paths)?;
                write!(f, "Current forbidden file types are: {}\n\n", bracketed(suffixes))?;
                f.write_str(TRY_AGAIN)
            }
            Self::WrongDbFolder { paths } => {
                write!(f, "Below changes are committing to the wrong db folder, please check\n\n")?;
                write_paths(f, paths)?;
                f.write_str(TRY_AGAIN)
            }
            Self::MissingWhat => write!(f, "Please provide 'What' information in the commit message"),
            Self::MissingReviewedBy => {
                write!(f, "Please provide 'Reviewed By' information in the commit message")
            }
        }
    }
}

impl std::error::Error for Violation {}
