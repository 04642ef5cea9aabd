use crate::segments::Shell;
use std::env;
use std::path::{Path, PathBuf};

/// Facts about the invoking session that segment factories render from
#[derive(Debug, Clone)]
pub struct Environment {
    pub username: String,
    pub hostname: String,
    pub cwd: PathBuf,
    pub is_admin: bool,
    pub term: String,
    pub shell: Shell,
}

impl Environment {
    /// Probe the current process. `shell` and `cwd` win over detection when given.
    pub fn detect(shell: Option<&str>, cwd: Option<PathBuf>) -> Self {
        Self {
            username: username(),
            hostname: hostname(),
            cwd: cwd.unwrap_or_else(current_dir),
            is_admin: is_admin(),
            term: env::var("TERM").unwrap_or_default(),
            shell: shell.map(Shell::from_name).unwrap_or_else(detect_shell),
        }
    }
}

pub fn username() -> String {
    ["USER", "LOGNAME", "USERNAME"]
        .iter()
        .find_map(|key| env::var(key).ok().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "?".to_string())
}

/// Short host name, without the domain part
pub fn hostname() -> String {
    let full = raw_hostname().unwrap_or_else(|| env::var("HOSTNAME").unwrap_or_default());
    full.split('.').next().unwrap_or_default().to_string()
}

#[cfg(unix)]
fn raw_hostname() -> Option<String> {
    let mut buf = [0u8; 256];
    // SAFETY: the buffer is valid for `buf.len()` bytes and gethostname
    // writes at most that many.
    let rc = unsafe { libc::gethostname(buf.as_mut_ptr() as *mut libc::c_char, buf.len()) };
    if rc != 0 {
        return None;
    }
    let end = buf.iter().position(|b| *b == 0).unwrap_or(buf.len());
    String::from_utf8(buf[..end].to_vec()).ok().filter(|h| !h.is_empty())
}

#[cfg(not(unix))]
fn raw_hostname() -> Option<String> {
    env::var("COMPUTERNAME").ok()
}

#[cfg(unix)]
pub fn is_admin() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_admin() -> bool {
    false
}

/// `$PWD` keeps the logical (symlinked) path the user typed
fn current_dir() -> PathBuf {
    env::var("PWD")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute())
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}

fn detect_shell() -> Shell {
    env::var("SHELL")
        .ok()
        .as_deref()
        .map(Path::new)
        .and_then(|p| p.file_name())
        .and_then(|n| n.to_str())
        .map(Shell::from_name)
        .unwrap_or_default()
}
