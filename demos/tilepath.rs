//! Command-line pathfinding demo.
//!
//! Run: cargo run --bin tilepath -- [bfs|dijkstra|both] [MAP_FILE] [--agent ROW,COL] [--seed N]
//!
//! Without a map file a random grid is generated. Set `TILEPATH_LOG=debug`
//! to see what the searches are doing.

use tilepath_demos::{Options, init_logging, run};

fn main() {
    init_logging();

    let result = Options::from_args(std::env::args().skip(1)).and_then(|opts| run(&opts));
    match result {
        Ok(report) => println!("{report}"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
