//! matrix CLI: Render and preview terminal-aesthetic components

use clap::{Parser, Subcommand, ValueEnum};
use matrix_engine::components::BootSequence;
use matrix_engine::config::{CONFIG_DIR, CONFIG_FILE};
use matrix_engine::{
    catalog, Component, Config, FrameStyle, PaletteToken, StatusToken,
};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "MATRIX_LOG";

/// Matrix/CRT component kit: render components or browse the catalog
#[derive(Parser)]
#[command(name = "matrix")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the interactive catalog preview (default when no command specified)
    Preview,

    /// Render one component from JSON props or a catalog example
    Render {
        /// Component JSON, e.g. '{"component": "terminal-status", "status": "error"}'.
        /// Use "-" to read from stdin.
        #[arg(long, conflicts_with_all = ["props_file", "example"])]
        props: Option<String>,

        /// Path to a file holding component JSON
        #[arg(long, conflicts_with = "example")]
        props_file: Option<PathBuf>,

        /// Catalog example, by index or title
        #[arg(long)]
        example: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: Format,

        /// Render a boot sequence as it looks this many milliseconds after start
        #[arg(long)]
        at_ms: Option<u64>,
    },

    /// List catalog examples
    List,

    /// Print the token tables
    Tokens {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default .matrix/config.json
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Html,
    Json,
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        None | Some(Commands::Preview) => cmd_preview(),
        Some(Commands::Render {
            props,
            props_file,
            example,
            format,
            at_ms,
        }) => cmd_render(props, props_file, example, format, at_ms),
        Some(Commands::List) => cmd_list(),
        Some(Commands::Tokens { json }) => cmd_tokens(json),
        Some(Commands::Init { force }) => cmd_init(force),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn config_path() -> PathBuf {
    Path::new(CONFIG_DIR).join(CONFIG_FILE)
}

/// Print an error and exit with status 1.
fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("Error: {message}");
    std::process::exit(1);
}

fn cmd_preview() {
    let mut config = Config::load_or_default(&config_path());
    config.apply_env();

    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => fail(format!("failed to create tokio runtime: {e}")),
    };
    if let Err(e) = rt.block_on(matrix_tui::run_preview(&config)) {
        fail(e);
    }
}

fn cmd_render(
    props: Option<String>,
    props_file: Option<PathBuf>,
    example: Option<String>,
    format: Format,
    at_ms: Option<u64>,
) {
    let config = Config::load_or_default(&config_path());
    let component = load_component(props, props_file, example, &config).unwrap_or_else(|e| fail(e));
    let elapsed = at_ms.map(Duration::from_millis);
    match render_output(&component, format, elapsed) {
        Ok(output) => println!("{output}"),
        Err(e) => fail(e),
    }
}

/// Component from whichever source was given, with the configured theme
/// filling props it leaves at their defaults.
fn load_component(
    props: Option<String>,
    props_file: Option<PathBuf>,
    example: Option<String>,
    config: &Config,
) -> Result<Component, String> {
    let mut component = match (props, props_file, example) {
        (Some(json), _, _) => {
            let json = if json == "-" { read_stdin() } else { json };
            parse_component(&json)
        }
        (None, Some(path), _) => match std::fs::read_to_string(&path) {
            Ok(json) => parse_component(&json),
            Err(e) => Err(format!("failed to read {}: {e}", path.display())),
        },
        (None, None, Some(example)) => find_example(&example),
        (None, None, None) => Err("one of --props, --props-file or --example is required".into()),
    }?;
    config.theme.apply(&mut component);
    Ok(component)
}

fn read_stdin() -> String {
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        fail(format!("failed to read stdin: {e}"));
    }
    input
}

fn parse_component(json: &str) -> Result<Component, String> {
    Component::from_json(json).map_err(|e| format!("invalid component props: {e}"))
}

/// Catalog entry by index or case-insensitive title.
fn find_example(query: &str) -> Result<Component, String> {
    let entries = catalog();
    let found = match query.parse::<usize>() {
        Ok(index) => entries.into_iter().nth(index),
        Err(_) => entries
            .into_iter()
            .find(|entry| entry.title.eq_ignore_ascii_case(query)),
    };
    found
        .map(|entry| entry.component)
        .ok_or_else(|| format!("no catalog example matches '{query}' (see `matrix list`)"))
}

fn render_output(
    component: &Component,
    format: Format,
    elapsed: Option<Duration>,
) -> Result<String, String> {
    if let (Component::BootSequence(boot), Some(elapsed)) = (component, elapsed) {
        return render_boot_at(boot, format, elapsed);
    }

    match format {
        Format::Text => Ok(component.to_text()),
        Format::Html => Ok(component.to_html()),
        Format::Json => serde_json::to_string_pretty(component).map_err(|e| e.to_string()),
    }
}

/// A boot sequence as it looks `elapsed` after start. JSON output is the
/// same props with only the revealed lines kept.
fn render_boot_at(
    boot: &BootSequence,
    format: Format,
    elapsed: Duration,
) -> Result<String, String> {
    let schedule = boot.schedule();
    let visible = schedule.visible_at(elapsed);
    match format {
        Format::Html => Ok(boot.render_at(elapsed).to_html()),
        Format::Text => Ok(visible
            .iter()
            .map(|line| line.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        Format::Json => {
            let revealed = Component::BootSequence(BootSequence {
                lines: visible.to_vec(),
                ..boot.clone()
            });
            serde_json::to_string_pretty(&revealed).map_err(|e| e.to_string())
        }
    }
}

fn cmd_list() {
    for (index, entry) in catalog().iter().enumerate() {
        println!("{index:>3}  {:<26} {}", entry.title, entry.component.name());
    }
}

fn tokens_json() -> serde_json::Value {
    let palette: Vec<_> = PaletteToken::ALL
        .iter()
        .map(|token| {
            serde_json::json!({
                "name": token.name(),
                "hex": token.hex(),
                "textClass": token.text_class(),
                "bgClass": token.bg_class(),
                "borderClass": token.border_class(),
                "glowClass": token.glow_class(),
            })
        })
        .collect();

    let frames: Vec<_> = FrameStyle::ALL
        .iter()
        .map(|style| serde_json::json!({ "name": style.name(), "chars": style.chars() }))
        .collect();

    let statuses: Vec<_> = StatusToken::ALL
        .iter()
        .map(|status| {
            let look = status.look();
            serde_json::json!({
                "name": status.name(),
                "label": look.label,
                "color": look.color.name(),
                "animate": look.animate,
            })
        })
        .collect();

    serde_json::json!({
        "palette": palette,
        "frameStyles": frames,
        "statuses": statuses,
        "components": Component::NAMES,
    })
}

fn cmd_tokens(json: bool) {
    if json {
        match serde_json::to_string_pretty(&tokens_json()) {
            Ok(out) => println!("{out}"),
            Err(e) => fail(e),
        }
        return;
    }

    println!("Palette\n");
    for token in PaletteToken::ALL {
        let glow = token.glow_class().unwrap_or("-");
        println!("  {:<10} {}  {:<24} {glow}", token.name(), token.hex(), token.text_class());
    }

    println!("\nFrame styles\n");
    for style in FrameStyle::ALL {
        let chars = style.chars();
        if chars.is_complete() {
            println!(
                "  {:<10} {}{}{} {}{}{} {}",
                style.name(),
                chars.top_left,
                chars.horizontal,
                chars.top_right,
                chars.bottom_left,
                chars.horizontal,
                chars.bottom_right,
                chars.vertical
            );
        } else {
            println!("  {:<10} (customChars required)", style.name());
        }
    }

    println!("\nStatuses\n");
    for status in StatusToken::ALL {
        let look = status.look();
        let animate = if look.animate { "animated" } else { "steady" };
        println!("  {:<10} {:<10} {:<10} {animate}", status.name(), look.label, look.color.name());
    }
}

fn cmd_init(force: bool) {
    let path = config_path();
    match write_default_config(&path, force) {
        Ok(true) => println!("Created {}", path.display()),
        Ok(false) => println!("Config already exists at {}", path.display()),
        Err(e) => fail(format!("failed to write {}: {e}", path.display())),
    }
}

/// Write the default config. Returns false when a config exists and `force` is off.
fn write_default_config(path: &Path, force: bool) -> Result<bool, matrix_engine::ConfigError> {
    if path.exists() && !force {
        return Ok(false);
    }
    Config::default().save(path)?;
    tracing::info!(path = %path.display(), "wrote default config");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use tempfile::TempDir;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_find_example_by_index_and_title() {
        let by_index = find_example("0").unwrap();
        assert_eq!(by_index.name(), "ascii-frame");

        let by_title = find_example("system INFO").unwrap();
        assert_eq!(by_title.name(), "system-info");

        assert!(find_example("999").is_err());
        assert!(find_example("hologram").is_err());
    }

    #[test]
    fn test_render_formats() {
        let component =
            parse_component(r#"{"component": "terminal-status", "status": "error"}"#).unwrap();
        assert_eq!(
            render_output(&component, Format::Text, None).unwrap(),
            "[ ERROR ]"
        );
        let html = render_output(&component, Format::Html, None).unwrap();
        assert!(html.starts_with("<span"));
        assert!(html.contains("data-status=\"error\""));
        let json = render_output(&component, Format::Json, None).unwrap();
        assert_eq!(parse_component(&json).unwrap(), component);
    }

    #[test]
    fn test_bad_props_are_reported() {
        let err = parse_component(r#"{"component": "terminal-status", "status": "on-fire"}"#)
            .unwrap_err();
        assert!(err.starts_with("invalid component props"));
    }

    #[test]
    fn test_boot_at_elapsed() {
        let component = find_example("boot sequence").unwrap();
        let text = render_output(&component, Format::Text, Some(Duration::from_millis(850))).unwrap();
        assert_eq!(text.lines().count(), 3);

        let html = render_output(&component, Format::Html, Some(Duration::ZERO)).unwrap();
        assert!(html.contains("boot-cursor"));

        let json = render_output(&component, Format::Json, Some(Duration::from_millis(500))).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["component"], "boot-sequence");
        let lines = value["lines"].as_array().unwrap();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["text"], "LOADING KERNEL MODULES... OK");
        assert_eq!(lines[1]["delayMs"], 400);

        let Component::BootSequence(partial) = parse_component(&json).unwrap() else {
            panic!("expected a boot sequence");
        };
        assert_eq!(partial.lines.len(), 2);
    }

    #[test]
    fn test_config_theme_applies_to_rendered_props() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{"theme": {"frame_style": "double", "brackets": false}}"#).unwrap();
        let config = Config::load(&path).unwrap();

        let props_path = temp_dir.path().join("frame.json");
        std::fs::write(&props_path, r#"{"component": "ascii-box", "title": "core"}"#).unwrap();
        let framed = load_component(None, Some(props_path), None, &config).unwrap();
        let text = render_output(&framed, Format::Text, None).unwrap();
        assert!(text.starts_with('╔'), "{text}");

        let status = load_component(
            Some(r#"{"component": "terminal-status", "status": "error"}"#.into()),
            None,
            None,
            &config,
        )
        .unwrap();
        assert_eq!(render_output(&status, Format::Text, None).unwrap(), "ERROR");

        let kept = load_component(
            Some(r#"{"component": "terminal-status", "status": "error"}"#.into()),
            None,
            None,
            &Config::default(),
        )
        .unwrap();
        assert_eq!(render_output(&kept, Format::Text, None).unwrap(), "[ ERROR ]");

        assert!(load_component(None, None, None, &config).is_err());
    }

    #[test]
    fn test_tokens_json_covers_all_sets() {
        let value = tokens_json();
        assert_eq!(value["palette"].as_array().unwrap().len(), 6);
        assert_eq!(value["frameStyles"].as_array().unwrap().len(), 6);
        assert_eq!(value["statuses"].as_array().unwrap().len(), 6);
        assert_eq!(value["palette"][0]["glowClass"], serde_json::Value::Null);
        assert_eq!(value["components"].as_array().unwrap().len(), Component::NAMES.len());
    }

    #[test]
    fn test_init_writes_once() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_DIR).join(CONFIG_FILE);

        assert!(write_default_config(&path, false).unwrap());
        assert!(!write_default_config(&path, false).unwrap());
        assert!(write_default_config(&path, true).unwrap());
        assert_eq!(Config::load(&path).unwrap(), Config::default());
    }
}
