//! Mazeball demo entry point
//!
//! Generates a maze, prints it as ASCII corridors, and optionally dumps the
//! wall layout as JSON for a host engine to consume. The actual game
//! (physics, rendering, input) lives in the host; this binary only exercises
//! the core.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use mazeball::maze::MazeGrid;
use mazeball::{MazeError, MazeSettings, generate, layout};

struct Args {
    rows: usize,
    cols: usize,
    seed: u64,
    json: bool,
}

fn parse_args() -> Result<Args, String> {
    let mut rows = mazeball::consts::DEFAULT_CELLS;
    let mut cols = mazeball::consts::DEFAULT_CELLS;
    let mut seed = None;
    let mut json = false;
    let mut positional = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--seed" => {
                let value = args.next().ok_or("--seed needs a value")?;
                seed = Some(value.parse::<u64>().map_err(|e| e.to_string())?);
            }
            _ => positional.push(arg.parse::<usize>().map_err(|e| e.to_string())?),
        }
    }

    match positional[..] {
        [] => {}
        [n] => (rows, cols) = (n, n),
        [r, c] => (rows, cols) = (r, c),
        _ => return Err("too many arguments".into()),
    }

    Ok(Args {
        rows,
        cols,
        seed: seed.unwrap_or_else(rand::random),
        json,
    })
}

/// Draw the maze as `+--+` cell borders with gaps where edges are open.
/// `S` marks the ball spawn, `G` the goal.
fn render_ascii(maze: &MazeGrid) -> String {
    let (rows, cols) = (maze.rows(), maze.cols());
    let mut out = String::new();

    out.push('+');
    for _ in 0..cols {
        out.push_str("--+");
    }
    out.push('\n');

    for row in 0..rows {
        out.push('|');
        for col in 0..cols {
            out.push_str(match (row, col) {
                (0, 0) => "S ",
                (r, c) if r == rows - 1 && c == cols - 1 => " G",
                _ => "  ",
            });
            let open = col + 1 < cols && maze.vertical_open(row, col);
            out.push(if open { ' ' } else { '|' });
        }
        out.push('\n');

        out.push('+');
        for col in 0..cols {
            let open = row + 1 < rows && maze.horizontal_open(row, col);
            out.push_str(if open { "  +" } else { "--+" });
        }
        out.push('\n');
    }
    out
}

fn main() -> Result<(), MazeError> {
    env_logger::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!("usage: mazeball [rows [cols]] [--seed N] [--json]");
            std::process::exit(2);
        }
    };

    let settings = MazeSettings::with_cells(args.rows, args.cols);
    settings.validate()?;

    let mut rng = Pcg32::seed_from_u64(args.seed);
    let maze = generate(args.rows, args.cols, &mut rng)?;
    let placed = layout(&maze, &settings);

    log::info!(
        "generated {}x{} maze (seed {}): {} open edges, {} walls",
        args.rows,
        args.cols,
        args.seed,
        maze.open_edge_count(),
        placed.walls.len(),
    );

    if args.json {
        // Unwrap is fine: the layout types serialize infallibly
        println!("{}", serde_json::to_string_pretty(&placed).unwrap());
    } else {
        print!("{}", render_ascii(&maze));
    }
    Ok(())
}
