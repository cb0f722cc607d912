//! Driver for the `tilepath` binary.
//!
//! Stands in for the interactive front end: it builds a grid (from a text
//! map or at random), places the moving agent, runs the requested searches
//! and draws the result as text.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use log::{LevelFilter, Log, Metadata, Record};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tilepath_core::Point;
use tilepath_paths::{Grid, GridConfig, MapError, PathResult};

const USAGE: &str = "usage: tilepath [bfs|dijkstra|both] [MAP_FILE] [--agent ROW,COL] [--seed N]";

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

struct StderrLogger;

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{:<5} {}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Install the stderr logger. The level comes from `TILEPATH_LOG`
/// (`error`, `warn`, `info`, `debug`, `trace`, `off`), defaulting to `info`.
pub fn init_logging() {
    let level = std::env::var("TILEPATH_LOG")
        .ok()
        .and_then(|v| LevelFilter::from_str(&v).ok())
        .unwrap_or(LevelFilter::Info);
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Which searches to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algo {
    Bfs,
    Dijkstra,
    #[default]
    Both,
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub algo: Algo,
    pub map: Option<PathBuf>,
    pub agent: Option<Point>,
    pub seed: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algo: Algo::default(),
            map: None,
            agent: None,
            seed: 42,
        }
    }
}

impl Options {
    pub fn from_args(args: impl IntoIterator<Item = String>) -> Result<Self, DemoError> {
        let mut opts = Self::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "bfs" => opts.algo = Algo::Bfs,
                "dijkstra" => opts.algo = Algo::Dijkstra,
                "both" => opts.algo = Algo::Both,
                "--agent" => {
                    let v = args.next().ok_or_else(|| usage("--agent needs ROW,COL"))?;
                    opts.agent = Some(parse_row_col(&v)?);
                }
                "--seed" => {
                    let v = args.next().ok_or_else(|| usage("--seed needs a number"))?;
                    opts.seed = v.parse().map_err(|_| usage(&format!("bad seed {v:?}")))?;
                }
                "-h" | "--help" => return Err(DemoError::Usage(USAGE.to_string())),
                s if s.starts_with('-') => return Err(usage(&format!("unknown flag {s}"))),
                _ if opts.map.is_none() => opts.map = Some(PathBuf::from(&arg)),
                _ => return Err(usage(&format!("unexpected argument {arg:?}"))),
            }
        }
        Ok(opts)
    }
}

fn parse_row_col(s: &str) -> Result<Point, DemoError> {
    let bad = || usage(&format!("bad position {s:?}, expected ROW,COL"));
    let (row, col) = s.split_once(',').ok_or_else(bad)?;
    let row = row.trim().parse().map_err(|_| bad())?;
    let col = col.trim().parse().map_err(|_| bad())?;
    Ok(Point::from_row_col(row, col))
}

fn usage(msg: &str) -> DemoError {
    DemoError::Usage(format!("{msg}\n{USAGE}"))
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug)]
pub enum DemoError {
    Usage(String),
    Io(std::io::Error),
    Map(MapError),
    /// The map has no start or no goal marker.
    MissingMarker(char),
}

impl fmt::Display for DemoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage(msg) => f.write_str(msg),
            Self::Io(e) => write!(f, "reading map: {e}"),
            Self::Map(e) => write!(f, "{e}"),
            Self::MissingMarker(ch) => write!(f, "map has no \u{201c}{ch}\u{201d} marker"),
        }
    }
}

impl std::error::Error for DemoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Map(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for DemoError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<MapError> for DemoError {
    fn from(e: MapError) -> Self {
        Self::Map(e)
    }
}

// ---------------------------------------------------------------------------
// Maps
// ---------------------------------------------------------------------------

/// Parse a text map that may also contain one `A` for the agent. The agent
/// cell is open ground underneath.
pub fn load_map(text: &str) -> Result<(Grid, Option<Point>), MapError> {
    let mut agent = None;
    for (y, line) in text.trim().lines().enumerate() {
        if let Some(x) = line.chars().position(|c| c == 'A') {
            agent = Some(Point::new(x as i32, y as i32));
            break;
        }
    }
    let grid = Grid::parse(&text.replacen('A', ".", 1))?;
    Ok((grid, agent))
}

/// Random terrain: about one cell in five blocked, some cells costlier than
/// the default. The start is the top-left corner and the goal the
/// bottom-right one.
pub fn random_map<R: Rng>(cfg: &GridConfig, rng: &mut R) -> Grid {
    let mut grid = Grid::from_config(cfg);
    for p in grid.bounds() {
        let r: f64 = rng.random();
        if r < 0.2 {
            grid.block(p);
        } else if r < 0.35 {
            grid.set_cost(p, rng.random_range(2..10));
        }
    }
    let far = Point::new(grid.width() - 1, grid.height() - 1);
    grid.place_start(Point::ZERO);
    grid.place_goal(far);
    grid
}

// ---------------------------------------------------------------------------
// Running
// ---------------------------------------------------------------------------

/// Build the grid `opts` describes and run the searches on it.
pub fn run(opts: &Options) -> Result<String, DemoError> {
    let (mut grid, map_agent) = match &opts.map {
        Some(path) => load_map(&std::fs::read_to_string(path)?)?,
        None => {
            let mut rng = StdRng::seed_from_u64(opts.seed);
            (random_map(&GridConfig::default(), &mut rng), None)
        }
    };
    let agent = opts.agent.or(map_agent);
    report(&mut grid, opts.algo, agent)
}

/// Run the selected searches and describe each outcome with a drawing.
pub fn report(grid: &mut Grid, algo: Algo, agent: Option<Point>) -> Result<String, DemoError> {
    let start = grid.start().ok_or(DemoError::MissingMarker('S'))?;
    let goal = grid.goal().ok_or(DemoError::MissingMarker('G'))?;
    log::info!("grid {}x{}, start {start}, goal {goal}", grid.width(), grid.height());

    let mut out = Vec::new();
    if matches!(algo, Algo::Bfs | Algo::Both) {
        grid.reset_all();
        let result = grid.reverse_bfs(start, goal, agent);
        out.push(describe("reverse bfs", grid, &result, agent));
    }
    if matches!(algo, Algo::Dijkstra | Algo::Both) {
        grid.reset_all();
        let result = grid.dijkstra(start, goal, agent);
        out.push(describe("dijkstra", grid, &result, agent));
    }
    Ok(out.join("\n\n"))
}

fn describe(name: &str, grid: &Grid, result: &PathResult, agent: Option<Point>) -> String {
    let summary = match result {
        PathResult::Found(path) => format!(
            "{name}: cost {} over {} hops, {} cells expanded",
            path.cost(),
            path.hops(),
            grid.expansions().len()
        ),
        PathResult::NotFound(why) => format!("{name}: no path ({why})"),
    };
    format!("{summary}\n{}", grid.render(agent))
}
