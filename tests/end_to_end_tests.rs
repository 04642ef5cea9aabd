use std::process::{Command, Output};
use tempfile::TempDir;

fn run_prompt(dir: &TempDir, term: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_powerline-prompt"))
        .args(args)
        .arg("--cwd")
        .arg(dir.path())
        .current_dir(dir.path())
        .env("TERM", term)
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path())
        .env_remove("POWERLINE_PROMPT_THEME")
        .env_remove("POWERLINE_PROMPT_MODE")
        .env_remove("POWERLINE_PROMPT_SHELL")
        .env_remove("POWERLINE_PROMPT_MODULES")
        .env_remove("POWERLINE_PROMPT_CONFIG")
        .env_remove("POWERLINE_PROMPT_DEBUG")
        .output()
        .expect("Failed to execute powerline-prompt")
}

#[test]
fn test_bash_title_outside_repository() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_prompt(&temp_dir, "xterm-256color", &["--shell", "bash", "--modules", "termtitle,git,arc"]);

    assert!(output.status.success());
    let prompt = String::from_utf8(output.stdout).unwrap();
    assert!(prompt.starts_with("\\[\\e]0;\\w\\a\\]"), "prompt: {:?}", prompt);
    assert!(!prompt.contains("git"));
    assert!(!prompt.ends_with('\n'));
}

#[test]
fn test_help_assigns_prompt_from_hooks() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_prompt(&temp_dir, "xterm", &["--help"]);

    assert!(output.status.success());
    let help = String::from_utf8(output.stdout).unwrap();
    assert!(help.contains("PROMPT_COMMAND='PS1=\"$(powerline-prompt --shell bash)\"'"), "help: {}", help);
    assert!(help.contains("PROMPT=\"$(powerline-prompt --shell zsh)\""));
    assert!(help.contains("precmd_functions+=(powerline_precmd)"));
    assert!(!help.contains("PS1='$("));
}

#[test]
fn test_dumb_terminal_has_no_title() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_prompt(&temp_dir, "linux", &["--shell", "zsh", "--modules", "termtitle", "--dump"]);

    assert!(output.status.success());
    assert!(String::from_utf8(output.stdout).unwrap().trim().is_empty());
}

#[test]
fn test_dump_lists_segments() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_prompt(&temp_dir, "xterm", &["--shell", "fish", "--modules", "termtitle", "--dump"]);

    assert!(output.status.success());
    let dump = String::from_utf8(output.stdout).unwrap();
    assert!(dump.contains("termtitle"));
    assert!(dump.contains("priority=max"));
    assert!(dump.contains("hidden"));
}

#[test]
fn test_broken_config_still_renders() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.json");
    std::fs::write(&config_path, "{ nope").unwrap();

    let output = run_prompt(
        &temp_dir,
        "xterm",
        &["--shell", "bash", "--modules", "termtitle,bogus", "--config", config_path.to_str().unwrap()],
    );

    assert!(output.status.success());
    let prompt = String::from_utf8(output.stdout).unwrap();
    assert!(prompt.starts_with("\\[\\e]0;\\w\\a\\]"));
    // Warnings go to stderr, never into the prompt
    assert!(!prompt.contains("bogus"));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("bogus"));
}
