use crate::constants::DEFAULT_OUTPUT_PATH;
use anyhow::anyhow;
use clap::{ArgAction, Parser};
use env_logger::fmt::Color;
use log::{Level, LevelFilter};
use once_cell::sync::Lazy;
use std::{
    io::Write,
    path::{Path, PathBuf},
};

/// Full version string including the crate version and git description.
///
/// Falls back to the bare crate version when the build had no git metadata.
/// # Examples
/// * `0.1.0-1ba958a-dirty` - while on a dirty branch
/// * `0.1.0` - built outside a git checkout
pub static FULL_VERSION: Lazy<String> = Lazy::new(|| {
    let git_describe = env!("VERGEN_GIT_DESCRIBE");
    if git_describe.is_empty() || git_describe == "VERGEN_IDEMPOTENT_OUTPUT" {
        env!("CARGO_PKG_VERSION").to_string()
    } else {
        format!("{}-{}", env!("CARGO_PKG_VERSION"), git_describe)
    }
});

#[derive(Parser, Debug)]
#[command(name = "roster",
          version = &**FULL_VERSION,
          about = "Write an employee roster to CSV, read it back and print it sorted by name",
          long_about = None,
          help_template = "{name} {version}\n{about-section}\n{usage-heading}\n    {usage}\n\n{all-args}{after-help}",
          )]
pub struct Cli {
    /// Roster CSV file to write and read back
    #[arg(
        short = 'o',
        long = "output",
        value_name = "FILE",
        default_value = DEFAULT_OUTPUT_PATH,
        value_parser = check_prefix_path
    )]
    pub output: PathBuf,

    /// Specify multiple times to increase verbosity level (e.g., -vv for more verbosity)
    #[arg(
        short = 'v',
        long = "verbose",
        action = ArgAction::Count,
    )]
    pub verbosity: u8,
}

fn verbosity_filter(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn level_color(level: Level) -> Color {
    match level {
        Level::Error => Color::Red,
        Level::Warn => Color::Yellow,
        Level::Info => Color::Green,
        Level::Debug => Color::Blue,
        Level::Trace => Color::Cyan,
    }
}

/// Sets up `env_logger` on standard error, one `-v` per step from info to trace.
///
/// `RUST_LOG` is read first; the `-v` count then sets the global filter.
pub fn init_verbose(args: &Cli) {
    env_logger::Builder::from_default_env()
        .format(|buf, record| {
            let mut style = buf.style();
            style.set_color(level_color(record.level())).set_bold(true);
            writeln!(
                buf,
                "{} [{:<5}] {}: {}",
                chrono::Local::now().format("%H:%M:%S%.3f"),
                style.value(record.level()),
                record.target(),
                record.args()
            )
        })
        .filter_level(verbosity_filter(args.verbosity))
        .init();
}

/// Checks that the directory the output file will be created in exists.
fn check_prefix_path(s: &str) -> anyhow::Result<PathBuf> {
    let path = Path::new(s);
    if s.is_empty() {
        return Err(anyhow!("Output path must not be empty"));
    }
    if let Some(parent_dir) = path.parent() {
        if !parent_dir.as_os_str().is_empty() && !parent_dir.exists() {
            return Err(anyhow!("Path does not exist: {}", parent_dir.display()));
        }
    }
    Ok(path.to_path_buf())
}
