use crate::providers::{run_tool, Head, ProviderCapabilities, ProviderError, StatusProvider, StatusSnapshot, DEFAULT_TIMEOUT};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

/// Where the arc backend reads its working-set state from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ArcSource {
    /// One `arc status --branch --json` call, including ahead/behind
    #[default]
    Status,
    /// `arc info --json` plus `arc status --json`; no ahead/behind
    Info,
}

impl ArcSource {
    pub fn from_name(name: &str) -> Self {
        match name {
            "info" => ArcSource::Info,
            _ => ArcSource::Status,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ArcProvider {
    pub source: ArcSource,
    pub show_ahead_behind: bool,
    pub timeout: Duration,
}

impl ArcProvider {
    pub fn new() -> Self {
        Self {
            source: ArcSource::default(),
            show_ahead_behind: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    async fn status_json(&self, path: &Path) -> Result<StatusSnapshot, ProviderError> {
        let stdout = run_tool(
            "arc",
            &["status", "--branch", "--json", "--no-sync-status"],
            path,
            self.timeout,
        )
        .await?;
        parse_status_json(stdout)
    }

    async fn info_and_status(&self, path: &Path) -> Result<StatusSnapshot, ProviderError> {
        let info = run_tool("arc", &["info", "--json"], path, self.timeout).await?;
        let status = run_tool("arc", &["status", "--json"], path, self.timeout).await?;
        parse_info_json(info, status)
    }
}

impl Default for ArcProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusProvider for ArcProvider {
    fn name(&self) -> &'static str {
        "arc"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            ahead_behind: self.show_ahead_behind && self.source == ArcSource::Status,
        }
    }

    async fn detect(&self, path: &Path) -> bool {
        match run_tool("arc", &["rev-parse", "--is-inside-work-tree"], path, self.timeout).await {
            Ok(stdout) => stdout.as_slice() == b"true\n",
            Err(_) => false,
        }
    }

    async fn snapshot(&self, path: &Path) -> Result<StatusSnapshot, ProviderError> {
        match self.source {
            ArcSource::Status => self.status_json(path).await,
            ArcSource::Info => self.info_and_status(path).await,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArcStatusInfo {
    branch_info: ArcBranchInfo,
    status: ArcWorkingSet,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArcBranchInfo {
    ahead: u32,
    behind: u32,
    local: ArcLocalBranch,
    detached: bool,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArcLocalBranch {
    name: String,
    commit: ArcCommit,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArcCommit {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArcWorkingSet {
    untracked: Vec<IgnoredAny>,
    changed: Vec<IgnoredAny>,
    staged: Vec<IgnoredAny>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArcInfo {
    branch: String,
    hash: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ArcShortStatus {
    status: ArcWorkingSet,
}

/// SIMD parse first, serde_json as the fallback
fn decode<T: DeserializeOwned>(mut bytes: Vec<u8>) -> Result<T, ProviderError> {
    let fallback = bytes.clone();
    match simd_json::serde::from_slice::<T>(&mut bytes) {
        Ok(value) => Ok(value),
        Err(_) => Ok(serde_json::from_slice(&fallback)?),
    }
}

fn head_from(branch: String, commit_id: String, detached: bool) -> Result<Head, ProviderError> {
    if detached || branch.is_empty() {
        if commit_id.is_empty() {
            return Err(ProviderError::Malformed("neither branch nor commit reported".to_string()));
        }
        Ok(Head::Detached { commit_id })
    } else {
        Ok(Head::Branch(branch))
    }
}

fn counts(snapshot: &mut StatusSnapshot, working_set: &ArcWorkingSet) {
    snapshot.untracked = working_set.untracked.len() as u32;
    snapshot.changed = working_set.changed.len() as u32;
    snapshot.staged = working_set.staged.len() as u32;
}

/// Parse `arc status --branch --json` output.
pub fn parse_status_json(stdout: Vec<u8>) -> Result<StatusSnapshot, ProviderError> {
    let info: ArcStatusInfo = decode(stdout)?;
    let branch = info.branch_info;

    let mut snapshot = StatusSnapshot::on_branch("");
    snapshot.head = head_from(branch.local.name, branch.local.commit.id, branch.detached)?;
    snapshot.ahead = branch.ahead;
    snapshot.behind = branch.behind;
    counts(&mut snapshot, &info.status);
    Ok(snapshot)
}

/// Parse the `arc info --json` / `arc status --json` pair.
pub fn parse_info_json(info: Vec<u8>, status: Vec<u8>) -> Result<StatusSnapshot, ProviderError> {
    let info: ArcInfo = decode(info)?;
    let status: ArcShortStatus = decode(status)?;

    let mut snapshot = StatusSnapshot::on_branch("");
    snapshot.head = head_from(info.branch, info.hash, false)?;
    counts(&mut snapshot, &status.status);
    Ok(snapshot)
}
