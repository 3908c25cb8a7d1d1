use std::{
    fs::File,
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{ArgAction, Parser};
use crossterm::{
    execute,
    style::{self, Attribute, Color, Stylize},
};
use mazegen::{Generator, UnknownGenerator};
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// Generates a perfect maze and prints it as text.
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    after_help = "For more information about maze generation algorithms, visit \
                  http://weblog.jamisbuck.org/2011/2/7/maze-generation-algorithm-recap"
)]
pub struct Args {
    /// Maze width in cells
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub width: u16,

    /// Maze height in cells
    #[arg(value_parser = clap::value_parser!(u16).range(1..))]
    pub height: u16,

    /// Algorithm for maze generation: aldous-broder, binary-tree, eller, hunt-and-kill,
    /// kruskal, prim, recursive-backtracker, recursive-division, sidewinder or wilson
    #[arg(short, long, default_value = "recursive-backtracker", value_parser = parse_generator)]
    pub algorithm: Generator,

    /// Random seed for maze generation; defaults to the current time in microseconds
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// File to write the maze to; defaults to stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Text representation for walls
    #[arg(short = 'w', long = "wall", default_value = "#", allow_hyphen_values = true)]
    pub wall: String,

    /// Text representation for blank spaces
    #[arg(short = 'b', long = "blank", default_value = ".", allow_hyphen_values = true)]
    pub blank: String,

    /// Widen the maze horizontally; equivalent to -w## -b..
    #[arg(short = 'W', long, conflicts_with_all = ["wall", "blank"])]
    pub widen: bool,

    /// Don't warn about slow algorithms
    #[arg(short, long)]
    pub force: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Number of maze edges from which slow algorithms ask for confirmation
    #[arg(long, default_value_t = 100_000)]
    pub slow_threshold: usize,
}

fn parse_generator(name: &str) -> Result<Generator, UnknownGenerator> {
    name.parse()
}

impl Args {
    /// Wall and blank tokens, taking `--widen` into account.
    pub fn tokens(&self) -> (&str, &str) {
        if self.widen {
            ("##", "..")
        } else {
            (&self.wall, &self.blank)
        }
    }

    /// Number of walls between adjacent cells, the measure slow algorithms scale with.
    pub fn edge_count(&self) -> usize {
        let (width, height) = (self.width as usize, self.height as usize);
        2 * width * height - width - height
    }

    pub fn needs_confirmation(&self) -> bool {
        !self.force && self.algorithm.is_slow() && self.edge_count() >= self.slow_threshold
    }
}

/// Installs the global subscriber. Logs go to stderr, or to `log_file` when given; stdout
/// is reserved for the maze.
///
/// The returned guard must be kept alive until exit so buffered file logs get flushed.
pub fn init_tracing(verbosity: u8, log_file: Option<&Path>) -> anyhow::Result<Option<WorkerGuard>> {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let builder = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false);

    match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("couldn't open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            builder.with_writer(writer).with_ansi(false).init();
            Ok(Some(guard))
        }
        None => {
            builder.with_writer(io::stderr).init();
            Ok(None)
        }
    }
}

/// Warns that `generator` will take a while and asks whether to go on.
/// Anything but an answer starting with `y` or `Y` counts as no.
pub fn confirm_slow(generator: Generator) -> io::Result<bool> {
    let mut stderr = io::stderr();
    execute!(
        stderr,
        style::PrintStyledContent(
            format!(
                "The algorithm '{}' is considerably slower than other algorithms, especially \
                 with large mazes. You can always abort by pressing Ctrl+C.\n",
                generator.name()
            )
            .with(Color::Yellow)
            .attribute(Attribute::Bold)
        ),
        style::PrintStyledContent("Continue? (Y/N) ".with(Color::Cyan)),
    )?;
    stderr.flush()?;

    let mut response = String::new();
    io::stdin().lock().read_line(&mut response)?;
    Ok(matches!(response.trim_start().chars().next(), Some('y' | 'Y')))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("mazegen").chain(args.iter().copied()))
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["10", "5"]).unwrap();
        assert_eq!((args.width, args.height), (10, 5));
        assert_eq!(args.algorithm, Generator::RecurBacktrack);
        assert_eq!(args.tokens(), ("#", "."));
        assert_eq!(args.seed, None);
        assert_eq!(args.slow_threshold, 100_000);
        assert!(!args.needs_confirmation());
    }

    #[test]
    fn test_attached_token_values() {
        let args = parse(&["-w##", "-b  ", "-a", "wilson", "-s", "42", "3", "4"]).unwrap();
        assert_eq!(args.tokens(), ("##", "  "));
        assert_eq!(args.algorithm, Generator::Wilson);
        assert_eq!(args.seed, Some(42));
    }

    #[test]
    fn test_widen() {
        let args = parse(&["-W", "3", "4"]).unwrap();
        assert_eq!(args.tokens(), ("##", ".."));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&["0", "4"]).is_err());
        assert!(parse(&["4", "70000"]).is_err());
        assert!(parse(&["-a", "labyrinth", "4", "4"]).is_err());
        assert!(parse(&["4"]).is_err());
    }

    #[test]
    fn test_slow_confirmation_threshold() {
        let args = parse(&["-a", "aldous-broder", "--slow-threshold", "12", "3", "3"]).unwrap();
        assert_eq!(args.edge_count(), 12);
        assert!(args.needs_confirmation());

        let forced = parse(&["-f", "-a", "aldous-broder", "--slow-threshold", "12", "3", "3"]).unwrap();
        assert!(!forced.needs_confirmation());

        let fast = parse(&["-a", "kruskal", "--slow-threshold", "0", "3", "3"]).unwrap();
        assert!(!fast.needs_confirmation());
    }
}
