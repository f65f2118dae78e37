use std::time::Duration;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use grid_snake::game::GameConfig;
use grid_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "grid_snake")]
#[command(version, about = "Classic grid-based snake game in the terminal")]
struct Cli {
    /// Game mode (currently only 'human' is implemented)
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// Number of grid rows
    #[arg(long, default_value = "7")]
    rows: i32,

    /// Number of grid columns
    #[arg(long, default_value = "7")]
    cols: i32,

    /// Pixel size of one grid cell
    #[arg(long, default_value = "50")]
    cell_size: i32,

    /// Initial snake length in segments
    #[arg(long, default_value = "5")]
    length: usize,

    /// Milliseconds between game ticks
    #[arg(long, default_value = "125")]
    tick_ms: u64,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stdout)
        .init();

    let cli = Cli::parse();

    let config = GameConfig {
        cell_size: cli.cell_size,
        rows: cli.rows,
        cols: cli.cols,
        initial_length: cli.length,
    };

    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config, Duration::from_millis(cli.tick_ms))?;
            human_mode.run().await?;
        }
    }

    Ok(())
}
