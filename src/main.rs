use anyhow::Result;
use colored::Colorize;
use futures::future::join_all;
use log::{debug, warn};
use pico_args::Arguments;
use powerline_prompt::*;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug)]
struct Args {
    theme: Option<String>,
    mode: Option<String>,
    shell: Option<String>,
    config: Option<PathBuf>,
    modules: Option<String>,
    priority: Option<String>,
    max_width: Option<usize>,
    cwd: Option<PathBuf>,
    dump: bool,
    debug: bool,
    help: bool,
}

impl Args {
    fn from_env() -> Result<Self> {
        let mut args = Arguments::from_env();

        Ok(Self {
            theme: args.opt_value_from_str("--theme")?,
            mode: args.opt_value_from_str("--mode")?,
            shell: args.opt_value_from_str("--shell")?,
            config: args
                .opt_value_from_str::<_, PathBuf>("--config")?
                .or_else(|| env::var("POWERLINE_PROMPT_CONFIG").ok().map(PathBuf::from)),
            modules: args.opt_value_from_str("--modules")?,
            priority: args.opt_value_from_str("--priority")?,
            max_width: args.opt_value_from_str("--max-width")?,
            cwd: args.opt_value_from_str("--cwd")?,
            dump: args.contains("--dump"),
            debug: args.contains("--debug"),
            help: args.contains(["-h", "--help"]),
        })
    }

    /// CLI flags beat everything the config loader produced
    fn apply(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(mode) = &self.mode {
            config.mode = mode.clone();
        }
        if let Some(shell) = &self.shell {
            config.shell = Some(shell.clone());
        }
        if let Some(modules) = &self.modules {
            config.modules = config::split_list(modules);
        }
        if let Some(priority) = &self.priority {
            config.priority = config::split_list(priority);
        }
        if self.max_width.is_some() {
            config.max_width = self.max_width;
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::from_env()?;

    if args.help {
        print_help();
        return Ok(());
    }

    init_logging(args.debug);

    // A broken config file must never cost the user their prompt
    let mut config = match config::load_config(args.config.clone()).await {
        Ok(config) => config,
        Err(e) => {
            warn!("{:#}; falling back to defaults", e);
            Config::default()
        }
    };
    args.apply(&mut config);

    let environment = Environment::detect(config.shell.as_deref(), args.cwd.clone());
    debug!(
        "shell={} term={:?} user={} admin={} cwd={}",
        environment.shell,
        environment.term,
        environment.username,
        environment.is_admin,
        environment.cwd.display()
    );

    let segments = generate_prompt(&config, &environment).await;

    if args.dump {
        print_dump(&segments);
        return Ok(());
    }

    let renderer = Renderer::new(environment.shell, get_symbols(&config.mode)).with_max_width(config.max_width);
    let segments = renderer.truncate(segments);
    print!("{}", renderer.render(&segments));

    Ok(())
}

enum Planned {
    TermTitle,
    User,
    Vcs(VcsBackend),
}

fn plan_modules(config: &Config) -> Vec<Planned> {
    let mut plan = Vec::new();
    for module in &config.modules {
        let planned = match module.as_str() {
            "termtitle" => Planned::TermTitle,
            "user" => Planned::User,
            "git" => Planned::Vcs(git_backend(config)),
            "arc" => Planned::Vcs(arc_backend(config)),
            other => {
                warn!("unknown module: {}", other);
                continue;
            }
        };
        if config.is_enabled(module) {
            plan.push(planned);
        }
    }
    plan
}

fn git_backend(config: &Config) -> VcsBackend {
    let git = config.segments.git.clone().unwrap_or_default();
    VcsBackend::Git(GitProvider {
        show_ahead_behind: git.show_ahead_behind.unwrap_or(true),
        timeout: git.timeout_ms.map(Duration::from_millis).unwrap_or(DEFAULT_TIMEOUT),
    })
}

fn arc_backend(config: &Config) -> VcsBackend {
    let arc = config.segments.arc.clone().unwrap_or_default();
    VcsBackend::Arc(ArcProvider {
        source: arc.source.as_deref().map(ArcSource::from_name).unwrap_or_default(),
        show_ahead_behind: arc.show_ahead_behind.unwrap_or(true),
        timeout: arc.timeout_ms.map(Duration::from_millis).unwrap_or(DEFAULT_TIMEOUT),
    })
}

async fn generate_prompt(config: &Config, environment: &Environment) -> Vec<Segment> {
    let mut theme = themes::get_theme(&config.theme);
    if let Some(colors) = &config.colors {
        theme = theme.with_overrides(colors);
    }

    let ctx = RenderContext {
        theme,
        symbols: get_symbols(&config.mode),
        shell: environment.shell,
        username: environment.username.clone(),
        hostname: environment.hostname.clone(),
        cwd: environment.cwd.display().to_string(),
        is_admin: environment.is_admin,
        term: environment.term.clone(),
    };

    let plan = plan_modules(config);

    // Resolve every VCS backend up front, concurrently; the segment
    // factories themselves never touch the outside world
    let statuses = join_all(plan.iter().filter_map(|planned| match planned {
        Planned::Vcs(backend) => Some(backend.status(&environment.cwd)),
        _ => None,
    }))
    .await;
    let mut statuses = statuses.into_iter();

    let sources: Vec<Box<dyn SegmentSource>> = plan
        .into_iter()
        .map(|planned| -> Box<dyn SegmentSource> {
            match planned {
                Planned::TermTitle => Box::new(TermTitleSegment),
                Planned::User => Box::new(UserSegment),
                Planned::Vcs(backend) => Box::new(VcsSegment::new(
                    backend.name(),
                    statuses.next().unwrap_or(Status::Absent),
                )),
            }
        })
        .collect();

    let outputs = segments::collect(&sources, &ctx);
    assemble(outputs, &Priorities::from_order(config.priority.as_slice()))
}

fn print_dump(segments: &[Segment]) {
    for segment in segments {
        let priority = if segment.priority == PRIORITY_MAX {
            "max".to_string()
        } else {
            segment.priority.to_string()
        };
        let marker = if segment.hide_separators { "hidden" } else { "" };
        println!(
            "{:<16} fg={:<3} bg={:<3} priority={:<10} {:<6} {:?}",
            segment.name.as_str().bold(),
            segment.foreground,
            segment.background,
            priority,
            marker.dimmed(),
            segment.content
        );
    }
}

fn print_help() {
    println!("powerline-prompt - powerline-style shell prompt");
    println!();
    println!("USAGE:");
    println!("    The prompt must be assigned, not substituted inside PS1, so the shell decodes its escapes.");
    println!();
    println!("    bash:  PROMPT_COMMAND='PS1=\"$(powerline-prompt --shell bash)\"'");
    println!("    zsh:   powerline_precmd() {{ PROMPT=\"$(powerline-prompt --shell zsh)\" }}");
    println!("           precmd_functions+=(powerline_precmd)");
    println!();
    println!("OPTIONS:");
    println!("    --shell <SHELL>        bash, zsh, or anything else for plain text [default: $SHELL]");
    println!("    --theme <THEME>        default, solarized-dark, gruvbox, low-contrast [default: default]");
    println!("    --mode <MODE>          Symbol set: compatible, patched, flat [default: compatible]");
    println!("    --modules <LIST>       Comma-separated source order [default: termtitle,user,git,arc]");
    println!("    --priority <LIST>      Truncation ranking, highest first [default: termtitle,user,git,arc]");
    println!("    --max-width <COLS>     Drop low-priority segments beyond this width (0 = unlimited)");
    println!("    --cwd <DIR>            Directory to describe [default: $PWD]");
    println!("    --config <FILE>        Custom config file path");
    println!("    --dump                 Print the assembled segments instead of the prompt");
    println!("    --debug                Log diagnostics to stderr");
    println!("    --help                 Show this help message");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    POWERLINE_PROMPT_THEME     Override theme");
    println!("    POWERLINE_PROMPT_MODE      Override symbol mode");
    println!("    POWERLINE_PROMPT_SHELL     Override shell");
    println!("    POWERLINE_PROMPT_MODULES   Override module order");
    println!("    POWERLINE_PROMPT_CONFIG    Override config path");
    println!("    POWERLINE_PROMPT_DEBUG     Enable debug logging");
}
