use crate::providers::ProviderError;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Duration;
use tokio::process::Command;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1500);

/// Run a version-control tool in `cwd` and return its stdout.
///
/// The child runs with a C locale and without optional git locks.
pub async fn run_tool(tool: &str, args: &[&str], cwd: &Path, timeout: Duration) -> Result<Vec<u8>, ProviderError> {
    debug!(target: "providers", "running {} {}", tool, args.join(" "));

    let mut command = Command::new(tool);
    command
        .args(args)
        .current_dir(cwd)
        .env("LANG", "C")
        .env("LC_ALL", "C")
        .env("GIT_OPTIONAL_LOCKS", "0")
        .kill_on_drop(true);

    let output = match tokio::time::timeout(timeout, command.output()).await {
        Ok(Ok(output)) => output,
        Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
            return Err(ProviderError::ToolUnavailable {
                tool: tool.to_string(),
                source: e,
            });
        }
        Ok(Err(e)) => {
            return Err(ProviderError::CommandFailed {
                tool: tool.to_string(),
                status: "spawn error".to_string(),
                stderr: e.to_string(),
            });
        }
        Err(_) => {
            return Err(ProviderError::Timeout {
                tool: tool.to_string(),
                millis: timeout.as_millis() as u64,
            });
        }
    };

    if !output.status.success() {
        return Err(ProviderError::CommandFailed {
            tool: tool.to_string(),
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(output.stdout)
}
