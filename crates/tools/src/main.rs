use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use crawl_core::mapgen::connectivity::connectivity_ratio;
use crawl_core::mapgen::generate_map;
use crawl_core::progression::LevelPlan;
use crawl_core::{EntityRef, Game, Grid};
use env_logger::Env;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(author, version, about = "Headless inspection tools for crawl dungeons", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate one map and print it
    Map {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(long, default_value_t = 25)]
        width: usize,
        #[arg(long, default_value_t = 25)]
        height: usize,
        #[arg(short, long, value_enum, default_value_t = MapFormat::Rows)]
        format: MapFormat,
        /// Write to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Generate a range of seeds and report attempts, connectivity, and fallbacks
    Connectivity {
        #[arg(long, default_value_t = 0)]
        first_seed: u64,
        #[arg(short, long, default_value_t = 100)]
        count: u64,
        /// Map side; defaults to the level 1 size
        #[arg(long)]
        size: Option<usize>,
    },
    /// Build a level the way a run would and list what spawned where
    Level {
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        #[arg(short, long, default_value_t = 1)]
        level: u32,
    },
    /// Load a map saved with `map --format json` and check it
    Inspect { path: PathBuf },
}

#[derive(Clone, Copy, ValueEnum)]
enum MapFormat {
    Rows,
    Json,
}

#[derive(Serialize)]
struct MapDump<'a> {
    seed: u64,
    attempts: u32,
    used_fallback: bool,
    grid: &'a Grid,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match args.command {
        Command::Map { seed, width, height, format, out } => {
            dump_map(seed, width, height, format, out)
        }
        Command::Connectivity { first_seed, count, size } => {
            let side = size.unwrap_or(LevelPlan::for_level(1).map_side);
            connectivity_report(first_seed, count, side);
            Ok(())
        }
        Command::Level { seed, level } => {
            describe_level(seed, level);
            Ok(())
        }
        Command::Inspect { path } => inspect(&path),
    }
}

fn dump_map(
    seed: u64,
    width: usize,
    height: usize,
    format: MapFormat,
    out: Option<PathBuf>,
) -> Result<()> {
    let map = generate_map(width, height, seed);
    let text = match format {
        MapFormat::Rows => map.grid.to_rows().join("\n") + "\n",
        MapFormat::Json => {
            let dump = MapDump {
                seed,
                attempts: map.attempts,
                used_fallback: map.used_fallback,
                grid: &map.grid,
            };
            serde_json::to_string_pretty(&dump).context("Failed to serialize map")? + "\n"
        }
    };

    match out {
        Some(path) => {
            fs::write(&path, text)
                .with_context(|| format!("Failed to write map file: {}", path.display()))?;
            log::info!("wrote {}x{} map for seed {seed} to {}", width, height, path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}

fn connectivity_report(first_seed: u64, count: u64, side: usize) {
    let mut fallbacks = 0;
    let mut total_attempts = 0;
    let mut worst_ratio = f64::INFINITY;

    println!("seed        attempts  floor  ratio   fallback");
    for seed in first_seed..first_seed.saturating_add(count) {
        let map = generate_map(side, side, seed);
        let ratio = connectivity_ratio(&map.grid).unwrap_or(0.0);
        total_attempts += u64::from(map.attempts);
        worst_ratio = worst_ratio.min(ratio);
        if map.used_fallback {
            fallbacks += 1;
        }
        println!(
            "{seed:<11} {:<9} {:<6} {ratio:<7.3} {}",
            map.attempts,
            map.grid.floor_count(),
            if map.used_fallback { "yes" } else { "" }
        );
    }

    if count > 0 {
        let mean_attempts = total_attempts as f64 / count as f64;
        println!("{count} maps of {side}x{side}: mean attempts {mean_attempts:.2}");
        println!("worst ratio {worst_ratio:.3}, {fallbacks} fallbacks");
    }
}

fn describe_level(seed: u64, level: u32) {
    let game = Game::starting_at(seed, level);
    let state = game.state();
    let player = game.player();

    println!(
        "level {} seed {seed}: {}x{} map{}",
        game.level(),
        state.grid.width(),
        state.grid.height(),
        if state.used_fallback_map { " (corridor lattice)" } else { "" }
    );
    println!(
        "player   ({:.2}, {:.2}) facing {:.2} rad",
        player.position.x, player.position.y, player.angle
    );
    for entity in game.entities() {
        let position = entity.position();
        let label = match entity {
            EntityRef::Enemy(_, enemy) => format!("{:<8}", enemy.kind.label()),
            EntityRef::Coin(coin) => format!("coin {:<3}", coin.amount),
            EntityRef::Shop(_) => "shop    ".to_string(),
            EntityRef::Portal(portal) => {
                if portal.is_active() { "portal  ".to_string() } else { "portal* ".to_string() }
            }
        };
        println!("{label} ({:.2}, {:.2})", position.x, position.y);
    }
    println!("snapshot 0x{:016x}", game.snapshot_hash());
}

fn inspect(path: &Path) -> Result<()> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read map file: {}", path.display()))?;
    let value: serde_json::Value =
        serde_json::from_str(&data).with_context(|| "Failed to parse map JSON")?;
    let grid_value = value.get("grid").cloned().unwrap_or(value);
    let grid: Grid =
        serde_json::from_value(grid_value).with_context(|| "Map JSON is not a valid grid")?;

    let ratio = connectivity_ratio(&grid);
    println!("{}x{} grid, {} floor cells", grid.width(), grid.height(), grid.floor_count());
    println!("border solid: {}", grid.border_is_solid());
    match ratio {
        Some(ratio) => println!("connectivity: {ratio:.3}"),
        None => bail!("grid has no interior floor"),
    }
    Ok(())
}
