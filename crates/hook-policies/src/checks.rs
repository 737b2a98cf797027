//! Chequeos secuenciales sobre mensaje, artifact y repositorio.

use hook_core::{ArtifactRecord, HookError, HookFailure, Violation};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::tags::PackageTags;

static ARTIFACT_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"\A(?-u:\s)*\[(?-u:\s)*(artf[0-9]+)(?-u:\s)*\]").expect("static regex"));
static WHAT_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?im)^(?-u:\s)*what(?-u:\s)*:(?-u:\s)*\S+.*$").expect("static regex"));
static REVIEWED_BY_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?im)^(?-u:\s)*reviewed(?-u:\s)+by(?-u:\s)*:(?-u:\s)*\S+.*$").expect("static regex"));

/// El mensaje debe empezar (tras espacios opcionales) con `[artfNNNN]`.
/// Dígitos y espacios son sólo ASCII.
pub fn extract_artifact_id(message: &str) -> Result<String, Violation> {
    ARTIFACT_ID.captures(message)
               .and_then(|c| c.get(1))
               .map(|m| m.as_str().to_string())
               .ok_or(Violation::MissingArtifactId)
}

/// Si existe el tag `access`, el autor debe figurar en él.
pub fn check_access(author: &str, tags: &PackageTags<'_>) -> Result<(), Violation> {
    match tags.access() {
        Some(allowed) if !allowed.iter().any(|a| a == author) => Err(Violation::AccessDenied),
        _ => Ok(()),
    }
}

pub fn check_artifact_status(status: &str, allowed: &[String]) -> Result<(), Violation> {
    if allowed.iter().any(|s| s == status) {
        Ok(())
    } else {
        Err(Violation::StatusNotAllowed { status: status.to_string(),
                                          allowed: allowed.to_vec() })
    }
}

/// El release debe estar `active` y figurar en el tag `version` (obligatorio).
pub fn check_fixed_in_release(record: &ArtifactRecord, tags: &PackageTags<'_>) -> Result<(), HookFailure> {
    if !record.fixed_in_release_status.eq_ignore_ascii_case("active") {
        return Err(Violation::ReleaseInactive { release: record.fixed_in_release.clone() }.into());
    }
    let allowed = tags.versions()
                      .ok_or(HookError::InvalidPackageDescription("release version missing"))?;
    if !allowed.iter().any(|v| v == &record.fixed_in_release) {
        return Err(Violation::ReleaseNotAllowed { release: record.fixed_in_release.clone(),
                                                  allowed }.into());
    }
    Ok(())
}

/// Si existe el tag `repository`, debe coincidir con el nombre del repositorio.
pub fn check_repository(repository_name: &str, tags: &PackageTags<'_>) -> Result<(), Violation> {
    match tags.repository() {
        Some(allowed) if allowed != repository_name => {
            Err(Violation::RepositoryNotAllowed { repository: repository_name.to_string(),
                                                  allowed: allowed.to_string() })
        }
        _ => Ok(()),
    }
}

/// El mensaje debe tener una línea `what: ...` y otra `reviewed by: ...`.
pub fn check_log_message(message: &str) -> Result<(), Violation> {
    if !WHAT_LINE.is_match(message) {
        return Err(Violation::MissingWhat);
    }
    if !REVIEWED_BY_LINE.is_match(message) {
        return Err(Violation::MissingReviewedBy);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(release: &str, release_status: &str) -> ArtifactRecord {
        ArtifactRecord { artifact_status: "Active".into(),
                         fixed_in_release: release.into(),
                         fixed_in_release_status: release_status.into(),
                         package_description: Some("[version: R1,R2] [branch: trunk/]".into()) }
    }

    #[test]
    fn artifact_id_must_lead_the_message() {
        assert_eq!(extract_artifact_id("[artf12306] fix").unwrap(), "artf12306");
        assert_eq!(extract_artifact_id("  \n [ artf7 ] fix").unwrap(), "artf7");
        for bad in ["fix [artf1]",
                    "[artf] x",
                    "[ARTF12] x",
                    "artf12 x",
                    "",
                    "[artf12x] y",
                    "[artf\u{661}\u{662}\u{663}] x",
                    "\u{2003}[artf1] x",
                    "[\u{a0}artf1] x"]
        {
            assert_eq!(extract_artifact_id(bad), Err(Violation::MissingArtifactId), "{bad}");
        }
    }

    #[test]
    fn access_tag_restricts_authors() {
        let tags = PackageTags::parse("[access: ana, bob]");
        assert!(check_access("bob", &tags).is_ok());
        assert_eq!(check_access("eve", &tags), Err(Violation::AccessDenied));
        assert!(check_access("eve", &PackageTags::parse("no tags")).is_ok());
    }

    #[test]
    fn status_must_be_allowed() {
        let allowed = vec!["Opened".to_string(), "Active".to_string()];
        assert!(check_artifact_status("Active", &allowed).is_ok());
        assert!(matches!(check_artifact_status("active", &allowed),
                         Err(Violation::StatusNotAllowed { .. })));
    }

    #[test]
    fn release_must_be_listed_in_version_tag() {
        let desc = "notes [version: R1,R2] [branch: trunk/] more";
        let tags = PackageTags::parse(desc);
        assert!(check_fixed_in_release(&record("R1", "Active"), &tags).is_ok());
        match check_fixed_in_release(&record("R3", "active"), &tags) {
            Err(HookFailure::Rejected(Violation::ReleaseNotAllowed { release, allowed })) => {
                assert_eq!(release, "R3");
                assert_eq!(allowed, vec!["R1", "R2"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn inactive_release_is_rejected_before_tag_lookup() {
        let tags = PackageTags::parse("no version tag");
        assert!(matches!(check_fixed_in_release(&record("R1", "Closed"), &tags),
                         Err(HookFailure::Rejected(Violation::ReleaseInactive { .. }))));
    }

    #[test]
    fn missing_version_tag_is_system_error() {
        let tags = PackageTags::parse("[branch: trunk/]");
        assert!(matches!(check_fixed_in_release(&record("R1", "ACTIVE"), &tags),
                         Err(HookFailure::System(HookError::InvalidPackageDescription("release version missing")))));
    }

    #[test]
    fn repository_tag_must_match_basename() {
        let tags = PackageTags::parse("[repository: alpha]");
        assert!(check_repository("alpha", &tags).is_ok());
        assert!(matches!(check_repository("beta", &tags),
                         Err(Violation::RepositoryNotAllowed { .. })));
        assert!(check_repository("beta", &PackageTags::parse("")).is_ok());
    }

    #[test]
    fn log_message_needs_what_and_reviewer() {
        let ok = "[artf1] fix\nWhat: parser crash\nReviewed By: bob";
        assert!(check_log_message(ok).is_ok());
        assert_eq!(check_log_message("[artf1] fix\nReviewed by: bob"), Err(Violation::MissingWhat));
        assert_eq!(check_log_message("[artf1] fix\n  WHAT : thing\nreviewed by:"),
                   Err(Violation::MissingReviewedBy));
    }
}
