mod cli;

use std::{
    fs::File,
    io::{self, BufWriter, Write},
};

use anyhow::Context;
use clap::Parser;
use mazegen::{RandomSource, generate};
use unicode_width::UnicodeWidthStr;

use crate::cli::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _log_guard = cli::init_tracing(args.verbose, args.log_file.as_deref())?;

    let (wall, blank) = args.tokens();
    if wall.width() != blank.width() {
        tracing::warn!(
            "wall token {:?} and blank token {:?} have different display widths, columns will not line up",
            wall,
            blank
        );
    }

    if args.needs_confirmation() && !cli::confirm_slow(args.algorithm)? {
        return Ok(());
    }

    let mut rng = RandomSource::new(args.seed);
    tracing::info!(
        "Generating {}x{} maze with {} (seed {})",
        args.width,
        args.height,
        args.algorithm,
        rng.seed()
    );
    let maze = generate(
        args.algorithm,
        args.width as usize,
        args.height as usize,
        &mut rng,
    );
    if tracing::enabled!(tracing::Level::DEBUG) {
        tracing::debug!("Maze is perfect: {}", maze.is_perfect());
    }

    let text = maze.render(wall, blank);
    match &args.output {
        Some(path) => {
            let file =
                File::create(path).with_context(|| format!("couldn't open {}", path.display()))?;
            let mut out = BufWriter::new(file);
            out.write_all(text.as_bytes())
                .and_then(|()| out.flush())
                .with_context(|| format!("couldn't write {}", path.display()))?;
            tracing::info!("Maze written to {}", path.display());
        }
        None => {
            let mut out = io::stdout().lock();
            out.write_all(text.as_bytes())?;
            out.flush()?;
        }
    }
    Ok(())
}
