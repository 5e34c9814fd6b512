use std::env;
use std::fs;
use std::io;
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use anyhow::bail;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sparselife::Coord;
use sparselife::cell::Cell;
use sparselife::pattern;
use sparselife::render::Renderer;
use sparselife::sim::Simulation;

const USAGE: &str = "\
Usage: sparselife [options]

Options:
  -b, --board-size <n>    grid edge length (default 25)
  -f, --freq <secs>       delay between frames in seconds (default 0.2)
  -g, --generations <n>   number of generations to run (default 100)
  -s, --saturation <d>    initial random density in [0, 1] (default 0.4)
  -p, --pattern <path>    plaintext .cells file, or \"random\" (default random)
      --seed <n>          RNG seed, for reproducible random boards
  -h, --help              print this help
";

struct Args {
    board_size: Coord,
    freq: f64,
    generations: u64,
    saturation: f64,
    pattern: String,
    seed: Option<u64>,
}

impl Default for Args {
    fn default() -> Self {
        Self {
            board_size: 25,
            freq: 0.2,
            generations: 100,
            saturation: 0.4,
            pattern: "random".to_string(),
            seed: None,
        }
    }
}

fn parse_args() -> anyhow::Result<Args> {
    let mut args = Args::default();
    let mut rest = env::args().skip(1);

    while let Some(flag) = rest.next() {
        match flag.as_str() {
            "-h" | "--help" => {
                print!("{USAGE}");
                std::process::exit(0);
            }
            "-b" | "--board-size" => args.board_size = value(&mut rest, &flag)?,
            "-f" | "--freq" => args.freq = value(&mut rest, &flag)?,
            "-g" | "--generations" => args.generations = value(&mut rest, &flag)?,
            "-s" | "--saturation" => args.saturation = value(&mut rest, &flag)?,
            "-p" | "--pattern" => args.pattern = value(&mut rest, &flag)?,
            "--seed" => args.seed = Some(value(&mut rest, &flag)?),
            other => bail!("unrecognized argument '{other}'\n\n{USAGE}"),
        }
    }

    Ok(args)
}

fn value<T>(rest: &mut impl Iterator<Item = String>, flag: &str) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = rest.next() else {
        bail!("missing value for '{flag}'");
    };

    raw.parse()
        .with_context(|| format!("invalid value \"{raw}\" for '{flag}'"))
}

/// Seed `sim` with a pattern file, centred on the board.
fn load_pattern(sim: &mut Simulation, path: &str) -> anyhow::Result<()> {
    let bytes = fs::read(path).with_context(|| format!("failed to read pattern file {path}"))?;

    let mut cells = Vec::new();
    let file = pattern::read_cells(&bytes, |x, y| cells.push(Cell::new(x, y)))
        .with_context(|| format!("failed to parse pattern file {path}"))?;

    let size = sim.board().size();
    if file.width > size || file.height > size {
        bail!(
            "pattern is {}x{}, too large for a {size}x{size} board",
            file.width,
            file.height
        );
    }

    let (dx, dy) = ((size - file.width) / 2, (size - file.height) / 2);
    sim.seed(cells.into_iter().map(|c| Cell::new(c.x + dx, c.y + dy)))?;

    if let Some(name) = file.name {
        info!(name = %String::from_utf8_lossy(name), "loaded pattern");
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = parse_args()?;

    if args.board_size < 1 {
        bail!("board size must be at least 1, got {}", args.board_size);
    }
    if !(0.0..=1.0).contains(&args.saturation) {
        bail!("saturation must be in [0, 1], got {}", args.saturation);
    }
    if args.freq < 0.0 {
        bail!("freq must be non-negative, got {}", args.freq);
    }

    let mut sim = match args.seed {
        Some(seed) => Simulation::with_seed(args.board_size, seed),
        None => Simulation::new(args.board_size),
    };

    if args.pattern == "random" {
        sim.randomize(args.saturation);
    } else {
        load_pattern(&mut sim, &args.pattern)?;
    }

    let mut renderer = Renderer::new();
    let mut stdout = io::stdout();
    let delay = Duration::from_secs_f64(args.freq);

    for _ in 0..args.generations {
        renderer.draw(&mut stdout, sim.board())?;
        sim.step();
        thread::sleep(delay);
    }

    Ok(())
}
