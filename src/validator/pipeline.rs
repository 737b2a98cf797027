//! Pipeline lineal de chequeos con corte temprano.
//!
//! Orden:
//! 1. autor (bypass de superusuarios)
//! 2. mensaje y id de artifact
//! 3. metadata del artifact y tags del paquete: acceso, estado, release,
//!    repositorio
//! 4. rutas modificadas (buckets en orden de prioridad)
//! 5. formato del mensaje (opcional)
//!
//! Cada paso devuelve `Result<_, HookFailure>`; el primer error corta la
//! cadena y `validate` lo traduce a un `Verdict`.

use hook_core::{ArtifactStore, HookError, HookFailure, PolicyConfig, TxnInspector, Verdict, Violation};
use hook_policies::{check_access, check_artifact_status, check_fixed_in_release, check_log_message,
                    check_repository, extract_artifact_id, ChangeBuckets, ChangeRules, PackageTags};
use log::{debug, info};

pub struct PreCommitValidator<'p, T, S>
    where T: TxnInspector,
          S: ArtifactStore
{
    policy: &'p PolicyConfig,
    txn: T,
    store: S,
    repository_name: String,
}

impl<'p, T, S> PreCommitValidator<'p, T, S>
    where T: TxnInspector,
          S: ArtifactStore
{
    pub fn new(policy: &'p PolicyConfig, txn: T, store: S, repository_name: impl Into<String>) -> Self {
        Self { policy,
               txn,
               store,
               repository_name: repository_name.into() }
    }

    /// Ejecuta todos los chequeos y devuelve el veredicto.
    pub fn validate(&self) -> Verdict {
        let mut author = None;
        let result = self.run_checks(&mut author);
        let verdict = Verdict::from_result(author, result);
        match &verdict {
            Verdict::Accepted => debug!("validate:accepted repo={}", self.repository_name),
            Verdict::Rejected { violation, .. } => {
                info!("validate:rejected repo={} reason={}", self.repository_name, violation.code())
            }
            Verdict::Failed { error, .. } => info!("validate:failed repo={} err={error}", self.repository_name),
        }
        verdict
    }

    fn run_checks(&self, author_slot: &mut Option<String>) -> Result<(), HookFailure> {
        let author = self.txn.author()?;
        *author_slot = Some(author.clone());
        if self.policy.is_superuser(&author) {
            debug!("validate:superuser bypass author={author}");
            return Ok(());
        }

        let message = self.txn.log()?;
        let artifact_id = extract_artifact_id(&message)?;
        let record = self.store
                         .find_artifact(&artifact_id)?
                         .ok_or_else(|| Violation::ArtifactNotFound { artifact_id: artifact_id.clone() })?;
        debug!("validate:artifact id={artifact_id} status={} release={}",
               record.artifact_status,
               record.fixed_in_release);

        let tags = PackageTags::parse(record.package_description()?);
        check_access(&author, &tags)?;
        check_artifact_status(&record.artifact_status, &self.policy.allowed_statuses)?;
        check_fixed_in_release(&record, &tags)?;
        check_repository(&self.repository_name, &tags)?;

        let changed = self.txn.changed()?;
        let branches = tags.branches()
                           .ok_or(HookError::InvalidPackageDescription("branch missing"))?;
        let rules = ChangeRules { branches: &branches,
                                  forbidden_suffixes: &self.policy.forbidden_suffixes,
                                  size_limit: self.policy.file_size_limit.as_ref(),
                                  check_naming: self.policy.check_naming,
                                  check_db: self.policy.check_db,
                                  fixed_in_release: &record.fixed_in_release };
        let buckets = ChangeBuckets::evaluate(&changed, &rules, |path| self.txn.file_size(path))?;
        if let Some(violation) = buckets.first_violation(&rules) {
            return Err(violation.into());
        }

        if self.policy.check_log_message {
            check_log_message(&message)?;
        }
        Ok(())
    }
}
