//! Version-control status providers.
//!
//! A provider answers two questions about a directory: is it under this
//! tool's control, and what does its working set look like. Every failure,
//! from a missing binary to unparsable output, collapses into
//! [`Status::Absent`] at this boundary so the segment factories never see
//! an error.

pub mod arc;
pub mod git;
pub mod process;

pub use arc::*;
pub use git::*;
pub use process::*;

use log::debug;
use std::path::Path;
use thiserror::Error;

/// Commit identifier prefix length shown for a detached head
pub const DETACHED_ID_LEN: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Head {
    Branch(String),
    Detached { commit_id: String },
}

/// Point-in-time summary of a working set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub head: Head,
    pub ahead: u32,
    pub behind: u32,
    pub untracked: u32,
    pub changed: u32,
    pub staged: u32,
}

impl StatusSnapshot {
    /// A clean snapshot on the given branch
    pub fn on_branch(name: impl Into<String>) -> Self {
        Self {
            head: Head::Branch(name.into()),
            ahead: 0,
            behind: 0,
            untracked: 0,
            changed: 0,
            staged: 0,
        }
    }

    /// A clean snapshot with a detached head
    pub fn detached(commit_id: impl Into<String>) -> Self {
        Self {
            head: Head::Detached { commit_id: commit_id.into() },
            ..Self::on_branch("")
        }
    }

    pub fn is_clean(&self) -> bool {
        self.ahead == 0 && self.behind == 0 && self.untracked == 0 && self.changed == 0 && self.staged == 0
    }

    fn apply_capabilities(mut self, capabilities: ProviderCapabilities) -> Self {
        if !capabilities.ahead_behind {
            self.ahead = 0;
            self.behind = 0;
        }
        self
    }
}

/// Result of asking a provider about a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Snapshot(StatusSnapshot),
    /// Not applicable here, for whatever reason
    Absent,
}

impl Status {
    pub fn snapshot(&self) -> Option<&StatusSnapshot> {
        match self {
            Status::Snapshot(snapshot) => Some(snapshot),
            Status::Absent => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("not a repository")]
    NotARepository,

    #[error("{tool} is not available: {source}")]
    ToolUnavailable {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}: {stderr}")]
    CommandFailed {
        tool: String,
        status: String,
        stderr: String,
    },

    #[error("{tool} timed out after {millis}ms")]
    Timeout { tool: String, millis: u64 },

    #[error("malformed status output: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(err: serde_json::Error) -> Self {
        ProviderError::Malformed(err.to_string())
    }
}

/// What a backend is able (or allowed) to report
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderCapabilities {
    pub ahead_behind: bool,
}

impl Default for ProviderCapabilities {
    fn default() -> Self {
        Self { ahead_behind: true }
    }
}

#[allow(async_fn_in_trait)]
pub trait StatusProvider {
    /// Backend name, also used as the segment name prefix
    fn name(&self) -> &'static str;

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities::default()
    }

    /// Is `path` under version control by this tool
    async fn detect(&self, path: &Path) -> bool;

    async fn snapshot(&self, path: &Path) -> Result<StatusSnapshot, ProviderError>;

    /// Detect, then snapshot with this backend's capabilities applied
    async fn resolve(&self, path: &Path) -> Result<StatusSnapshot, ProviderError> {
        if !self.detect(path).await {
            return Err(ProviderError::NotARepository);
        }
        let snapshot = self.snapshot(path).await?;
        Ok(snapshot.apply_capabilities(self.capabilities()))
    }

    /// Resolve `path` to a snapshot or an absence. Never fails.
    async fn status(&self, path: &Path) -> Status {
        match self.resolve(path).await {
            Ok(snapshot) => Status::Snapshot(snapshot),
            Err(e) => {
                debug!(target: "providers", "{}: {}: {}", self.name(), path.display(), e);
                Status::Absent
            }
        }
    }
}

/// The backends a prompt can be configured with
#[derive(Debug, Clone)]
pub enum VcsBackend {
    Git(GitProvider),
    Arc(ArcProvider),
}

impl VcsBackend {
    pub fn name(&self) -> &'static str {
        match self {
            VcsBackend::Git(provider) => provider.name(),
            VcsBackend::Arc(provider) => provider.name(),
        }
    }

    pub async fn status(&self, path: &Path) -> Status {
        match self {
            VcsBackend::Git(provider) => provider.status(path).await,
            VcsBackend::Arc(provider) => provider.status(path).await,
        }
    }
}
