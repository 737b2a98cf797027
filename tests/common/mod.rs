#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use hook_core::{ArtifactRecord, ChangedPath, HookError, InMemoryArtifactStore, TxnInspector};

pub const DESCRIPTION: &str = "Alpha 2024 train [version: 2024.1, 2024.2] [branch: trunk/,branches/2024.x/]";

/// Transacción simulada: respuestas fijas y registro de llamadas.
pub struct ScriptedTxn {
    pub author: Result<String, String>,
    pub log: String,
    pub changed: Vec<&'static str>,
    pub sizes: HashMap<String, u64>,
    pub calls: RefCell<Vec<String>>,
}

impl ScriptedTxn {
    pub fn new(author: &str, log: &str, changed: &[&'static str]) -> Self {
        Self { author: Ok(author.to_string()),
               log: log.to_string(),
               changed: changed.to_vec(),
               sizes: HashMap::new(),
               calls: RefCell::new(Vec::new()) }
    }

    pub fn with_size(mut self, path: &str, size: u64) -> Self {
        self.sizes.insert(path.to_string(), size);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

impl TxnInspector for ScriptedTxn {
    fn author(&self) -> Result<String, HookError> {
        self.record("author");
        self.author.clone().map_err(|message| HookError::Command { command: "svnlook author".into(),
                                                                   exit_code: 1,
                                                                   message })
    }

    fn log(&self) -> Result<String, HookError> {
        self.record("log");
        Ok(self.log.clone())
    }

    fn changed(&self) -> Result<Vec<ChangedPath>, HookError> {
        self.record("changed");
        self.changed.iter().map(|l| ChangedPath::parse_line(l)).collect()
    }

    fn file_size(&self, path: &str) -> Result<u64, HookError> {
        self.record(&format!("filesize {path}"));
        Ok(self.sizes.get(path).copied().unwrap_or(0))
    }
}

pub fn record(status: &str, release: &str, release_status: &str, description: Option<&str>) -> ArtifactRecord {
    ArtifactRecord { artifact_status: status.into(),
                     fixed_in_release: release.into(),
                     fixed_in_release_status: release_status.into(),
                     package_description: description.map(str::to_string) }
}

/// Store con `artf1001` activo en el release 2024.1.
pub fn store() -> InMemoryArtifactStore {
    InMemoryArtifactStore::default().with("artf1001", record("Active", "2024.1", "Active", Some(DESCRIPTION)))
}
