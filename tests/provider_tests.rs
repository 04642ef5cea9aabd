use powerline_prompt::providers::*;
use std::path::Path;
use std::process::Command;
use tempfile::TempDir;
use tokio::fs;

fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|o| o.status.success())
        .unwrap_or(false)
}

fn git(repo_path: &Path, args: &[&str]) {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()
        .expect("Failed to run git");
    assert!(output.status.success(), "git {:?} failed: {}", args, String::from_utf8_lossy(&output.stderr));
}

#[tokio::test]
async fn test_non_repository_is_absent() {
    let temp_dir = TempDir::new().unwrap();

    let git = GitProvider::new();
    assert!(!git.detect(temp_dir.path()).await);
    assert!(matches!(git.resolve(temp_dir.path()).await, Err(ProviderError::NotARepository)));
    assert_eq!(git.status(temp_dir.path()).await, Status::Absent);

    let backend = VcsBackend::Git(GitProvider::new());
    assert_eq!(backend.name(), "git");
    assert_eq!(backend.status(temp_dir.path()).await, Status::Absent);
}

#[tokio::test]
async fn test_missing_arc_binary_is_absent() {
    let temp_dir = TempDir::new().unwrap();
    let arc = VcsBackend::Arc(ArcProvider::new());
    // Whether arc is missing or the directory is not a mount, the answer is the same
    assert_eq!(arc.status(temp_dir.path()).await, Status::Absent);
}

#[test]
fn test_git_status_of_real_repository() {
    if !git_available() {
        eprintln!("git not installed, skipping");
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path();

    git(repo_path, &["init", "-q"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "user.name", "Test User"]);
    git(repo_path, &["checkout", "-q", "-b", "trunk"]);

    std::fs::write(repo_path.join("tracked.txt"), "one").unwrap();
    git(repo_path, &["add", "tracked.txt"]);
    git(repo_path, &["commit", "-q", "-m", "Initial commit"]);

    let status = tokio_test::block_on(GitProvider::new().status(repo_path));
    assert_eq!(status, Status::Snapshot(StatusSnapshot::on_branch("trunk")));

    std::fs::write(repo_path.join("tracked.txt"), "two").unwrap();
    std::fs::write(repo_path.join("new.txt"), "new").unwrap();
    std::fs::write(repo_path.join("staged.txt"), "staged").unwrap();
    git(repo_path, &["add", "staged.txt"]);

    let status = tokio_test::block_on(GitProvider::new().status(repo_path));
    let snapshot = status.snapshot().expect("repository should produce a snapshot");
    assert_eq!(snapshot.head, Head::Branch("trunk".to_string()));
    assert_eq!(snapshot.untracked, 1);
    assert_eq!(snapshot.changed, 1);
    assert_eq!(snapshot.staged, 1);
    assert_eq!((snapshot.ahead, snapshot.behind), (0, 0));
}

#[tokio::test]
async fn test_git_detached_head() {
    if !git_available() {
        return;
    }

    let temp_dir = TempDir::new().unwrap();
    let repo_path = temp_dir.path();

    git(repo_path, &["init", "-q"]);
    git(repo_path, &["config", "user.email", "test@example.com"]);
    git(repo_path, &["config", "user.name", "Test User"]);
    fs::write(repo_path.join("a.txt"), "a").await.unwrap();
    git(repo_path, &["add", "."]);
    git(repo_path, &["commit", "-q", "-m", "first"]);
    git(repo_path, &["checkout", "-q", "--detach"]);

    let status = GitProvider::new().status(repo_path).await;
    match status.snapshot().map(|s| &s.head) {
        Some(Head::Detached { commit_id }) => assert_eq!(commit_id.len(), 40),
        other => panic!("expected detached head, got {:?}", other),
    }
}
