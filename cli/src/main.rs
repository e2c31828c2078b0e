use clap::Parser;
use clearfield_core::{Board, CellCount, Coord, GameConfig, LayoutGenerator, RandomLayoutGenerator};
use std::{io, path::PathBuf};

mod command;
mod config;
mod render;
mod session;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Read board settings from a TOML file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of columns
    #[arg(long)]
    width: Option<Coord>,

    /// Number of rows
    #[arg(long)]
    height: Option<Coord>,

    /// Number of hazards to hide
    #[arg(long)]
    hazards: Option<CellCount>,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .format_timestamp(None)
        .try_init()?;

    let base = match &args.config {
        Some(path) => config::load(path)?,
        None => GameConfig::default(),
    };
    let config = config::resolve(base, args.width, args.height, args.hazards)?;

    let seed = args.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let layout = RandomLayoutGenerator::from_seed(seed).generate(config)?;
    let board = Board::from_layout(layout)?;

    let mut session = session::Session::new(board, io::stdin().lock(), io::stdout().lock());
    let end = session.run()?;
    let board = session.board();
    log::info!(
        "Session ended: {:?}, {} of {} cells revealed, {} flagged",
        end,
        board.revealed_count(),
        board.total_cells(),
        board.flagged_count()
    );
    Ok(())
}
