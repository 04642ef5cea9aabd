use crate::providers::{run_tool, Head, ProviderCapabilities, ProviderError, StatusProvider, StatusSnapshot, DEFAULT_TIMEOUT};
use log::debug;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct GitProvider {
    pub show_ahead_behind: bool,
    pub timeout: Duration,
}

impl GitProvider {
    pub fn new() -> Self {
        Self {
            show_ahead_behind: true,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl Default for GitProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusProvider for GitProvider {
    fn name(&self) -> &'static str {
        "git"
    }

    fn capabilities(&self) -> ProviderCapabilities {
        ProviderCapabilities {
            ahead_behind: self.show_ahead_behind,
        }
    }

    /// Repository discovery uses gix so a non-repository costs no process spawn
    async fn detect(&self, path: &Path) -> bool {
        match gix::discover(path) {
            Ok(repo) => {
                // Bare repositories have no working set to describe
                let has_worktree = repo.work_dir().is_some();
                debug!(target: "providers", "git: found repository at {}", repo.path().display());
                has_worktree
            }
            Err(_) => false,
        }
    }

    async fn snapshot(&self, path: &Path) -> Result<StatusSnapshot, ProviderError> {
        let stdout = run_tool(
            "git",
            &["status", "--porcelain=v2", "--branch", "--untracked-files=normal"],
            path,
            self.timeout,
        )
        .await?;

        parse_porcelain_v2(&String::from_utf8_lossy(&stdout))
    }
}

/// Parse `git status --porcelain=v2 --branch` output.
pub fn parse_porcelain_v2(output: &str) -> Result<StatusSnapshot, ProviderError> {
    let mut oid: Option<&str> = None;
    let mut head: Option<&str> = None;
    let mut snapshot = StatusSnapshot::on_branch("");

    for line in output.lines() {
        if let Some(header) = line.strip_prefix("# ") {
            let (key, value) = header.split_once(' ').unwrap_or((header, ""));
            match key {
                "branch.oid" => oid = Some(value),
                "branch.head" => head = Some(value),
                "branch.ab" => {
                    let (ahead, behind) = parse_ahead_behind(value)?;
                    snapshot.ahead = ahead;
                    snapshot.behind = behind;
                }
                _ => {}
            }
            continue;
        }

        let mut fields = line.splitn(3, ' ');
        match fields.next() {
            Some("1") | Some("2") => {
                let xy = fields
                    .next()
                    .ok_or_else(|| ProviderError::Malformed(format!("missing XY field: {}", line)))?;
                let mut flags = xy.chars();
                if flags.next().is_some_and(|x| x != '.') {
                    snapshot.staged += 1;
                }
                if flags.next().is_some_and(|y| y != '.') {
                    snapshot.changed += 1;
                }
            }
            Some("u") => snapshot.changed += 1,
            Some("?") => snapshot.untracked += 1,
            Some("!") | Some("") | None => {}
            Some(other) => {
                return Err(ProviderError::Malformed(format!("unexpected entry type: {}", other)));
            }
        }
    }

    let head = head.ok_or_else(|| ProviderError::Malformed("missing branch.head header".to_string()))?;
    snapshot.head = if head == "(detached)" {
        let commit_id = oid
            .filter(|oid| *oid != "(initial)")
            .ok_or_else(|| ProviderError::Malformed("detached head without commit".to_string()))?;
        Head::Detached {
            commit_id: commit_id.to_string(),
        }
    } else {
        Head::Branch(head.to_string())
    };

    Ok(snapshot)
}

fn parse_ahead_behind(value: &str) -> Result<(u32, u32), ProviderError> {
    let mut ahead = None;
    let mut behind = None;
    for part in value.split_whitespace() {
        if let Some(n) = part.strip_prefix('+') {
            ahead = n.parse().ok();
        } else if let Some(n) = part.strip_prefix('-') {
            behind = n.parse().ok();
        }
    }

    match (ahead, behind) {
        (Some(ahead), Some(behind)) => Ok((ahead, behind)),
        _ => Err(ProviderError::Malformed(format!("bad branch.ab header: {}", value))),
    }
}
