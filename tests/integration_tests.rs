use powerline_prompt::config;
use powerline_prompt::providers::*;
use powerline_prompt::render::Renderer;
use powerline_prompt::segments::*;
use powerline_prompt::themes::*;
use tempfile::TempDir;
use tokio::fs;

fn context() -> RenderContext {
    let mut ctx = RenderContext::new(get_theme("default"), get_symbols("compatible"), Shell::Bash);
    ctx.username = "root".to_string();
    ctx.hostname = "box".to_string();
    ctx.cwd = "/srv".to_string();
    ctx.term = "xterm-256color".to_string();
    ctx.is_admin = true;
    ctx
}

fn dirty_git() -> VcsSegment {
    let mut snapshot = StatusSnapshot::on_branch("main");
    snapshot.changed = 2;
    VcsSegment::new("git", Status::Snapshot(snapshot))
}

#[test]
fn test_assemble_preserves_source_order() {
    let ctx = context();
    let sources: Vec<Box<dyn SegmentSource>> = vec![
        Box::new(TermTitleSegment),
        Box::new(UserSegment),
        Box::new(dirty_git()),
        Box::new(VcsSegment::new("arc", Status::Absent)),
    ];

    let outputs = collect(&sources, &ctx);
    assert_eq!(outputs.len(), 4);
    assert!(outputs[3].segments.is_empty());

    let segments = assemble(outputs, &Priorities::default());
    let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["termtitle", "user", "git-branch", "git-changed"]);
}

#[test]
fn test_assemble_applies_source_priorities() {
    let ctx = context();
    let sources: Vec<Box<dyn SegmentSource>> = vec![
        Box::new(dirty_git()),
        Box::new(TermTitleSegment),
        Box::new(UserSegment),
    ];
    let priorities = Priorities::from_order(&["user", "git", "termtitle"]);

    let segments = assemble(collect(&sources, &ctx), &priorities);
    let names: Vec<&str> = segments.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["git-branch", "git-changed", "termtitle", "user"]);

    assert_eq!(segments[0].priority, 2);
    assert_eq!(segments[1].priority, 2);
    // Saturates instead of wrapping
    assert_eq!(segments[2].priority, PRIORITY_MAX);
    assert_eq!(segments[3].priority, 3);
    assert_eq!(priorities.rank("unknown"), 0);
}

#[test]
fn test_failed_sources_do_not_blank_the_prompt() {
    let ctx = context();
    let sources: Vec<Box<dyn SegmentSource>> = vec![
        Box::new(VcsSegment::new("git", Status::Absent)),
        Box::new(UserSegment),
        Box::new(VcsSegment::new("arc", Status::Absent)),
    ];

    let segments = assemble(collect(&sources, &ctx), &Priorities::default());
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].name, "user");
}

#[test]
fn test_truncation_after_assembly() {
    let ctx = context();
    let sources: Vec<Box<dyn SegmentSource>> = vec![
        Box::new(TermTitleSegment),
        Box::new(UserSegment),
        Box::new(dirty_git()),
    ];
    let segments = assemble(collect(&sources, &ctx), &Priorities::from_order(&["termtitle", "user", "git"]));

    // "\u" is 2 columns + padding + separator = 5, the budget leaves room for it alone
    let renderer = Renderer::new(Shell::Bash, get_symbols("compatible")).with_max_width(Some(5));
    let kept = renderer.truncate(segments);
    let names: Vec<&str> = kept.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["termtitle", "user"]);

    let prompt = renderer.render(&kept);
    assert!(prompt.starts_with("\\[\\e]0;\\w\\a\\]"));
    assert!(prompt.contains(" \\u "));
}

#[tokio::test]
async fn test_load_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.json");
    let config_content = r#"{
        "theme": "gruvbox",
        "modules": ["git", "termtitle"],
        "maxWidth": 80,
        "segments": {
            "arc": {"enabled": false, "source": "info"},
            "git": {"showAheadBehind": false}
        },
        "colors": {"repo-dirty": {"bg": 9}}
    }"#;
    fs::write(&config_path, config_content).await.unwrap();

    let config = config::load_config_file(&config_path).await.unwrap();
    assert_eq!(config.theme, "gruvbox");
    assert_eq!(config.mode, "compatible");
    assert_eq!(config.modules, vec!["git", "termtitle"]);
    assert_eq!(config.max_width, Some(80));
    assert!(!config.is_enabled("arc"));
    assert!(config.is_enabled("git"));
    assert!(config.is_enabled("user"));
    assert!(!config.is_enabled("nonsense"));

    let git = config.segments.git.as_ref().unwrap();
    assert_eq!(git.show_ahead_behind, Some(false));
    assert_eq!(config.segments.arc.as_ref().unwrap().source.as_deref(), Some("info"));

    let theme = get_theme(&config.theme).with_overrides(config.colors.as_ref().unwrap());
    assert_eq!(theme.repo_dirty_bg, 9);
}

#[tokio::test]
async fn test_malformed_config_is_an_error() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("broken.json");
    fs::write(&config_path, "{ not json").await.unwrap();

    assert!(config::load_config_file(&config_path).await.is_err());
    assert!(config::load_config_file(&temp_dir.path().join("missing.json")).await.is_err());
}

#[test]
fn test_split_list() {
    assert_eq!(config::split_list(" git, ,arc ,"), vec!["git", "arc"]);
    assert!(config::split_list("").is_empty());
}
