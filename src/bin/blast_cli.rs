use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::Context;
use blast_calc::logging;
use blast_calc::search::{replay, PlacementSearch, SearchConfig};
use blast_calc::Puzzle;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "blast_cli", about = "Find the best placement of up to three blocks")]
struct Cli {
    /// Puzzle file (JSON); stdin when omitted or "-"
    puzzle: Option<PathBuf>,

    /// Search orderings on one thread
    #[arg(long, default_value_t = false)]
    sequential: bool,

    /// Print the solution as JSON instead of board diagrams
    #[arg(long, default_value_t = false)]
    json: bool,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_puzzle(path: Option<&PathBuf>) -> anyhow::Result<Puzzle> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(Puzzle::load(path)?),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("reading puzzle from stdin")?;
            Ok(Puzzle::from_json(&text)?)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let _logger = logging::init(cli.verbose).context("starting logger")?;

    let puzzle = read_puzzle(cli.puzzle.as_ref())?;
    let config = if cli.sequential {
        SearchConfig::sequential()
    } else {
        SearchConfig::default()
    };
    let solution = puzzle.solve(&PlacementSearch::new(config))?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    if solution.is_empty() {
        println!("No placement fits. You're cooked.");
        return Ok(());
    }

    println!(
        "score {} in {} moves, {} cells left",
        solution.score,
        solution.move_count(),
        solution.remaining_cells()
    );
    for frame in replay(&puzzle.board, &solution.moves)? {
        println!();
        println!(
            "move {}: piece at ({}, {}), {} lines, total {}",
            frame.step + 1,
            frame.mv.x,
            frame.mv.y,
            frame.mv.lines_cleared,
            frame.total_score
        );
        print!("{}", frame.render());
    }
    println!();
    println!("final board:");
    print!("{}", solution.final_board);
    Ok(())
}
