use anyhow::{Result, ensure};
use clap::Parser;
use crawl_core::entities::{Damageable, Positioned};
use crawl_core::{Action, Game, GameEvent, InputState, RunStatus, WeaponKind};
use env_logger::Env;
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 20_000)]
    ticks: u32,
    /// Ticks each random input is held for
    #[arg(long, default_value_t = 12)]
    hold: u32,
}

fn random_input(rng: &mut ChaCha8Rng) -> InputState {
    let mut input = InputState::default();
    for action in Action::ALL {
        // Bias toward moving and shooting.
        let odds = match action {
            Action::Forward | Action::Fire => 2,
            _ => 5,
        };
        input.set(action, rng.next_u64() % odds == 0);
    }
    input
}

#[derive(Debug, Default, PartialEq, Eq)]
struct PurchaseTally {
    bought: u32,
    refused: u32,
}

impl PurchaseTally {
    fn attempt(&mut self, game: &mut Game, kind: WeaponKind) {
        match game.buy_weapon(kind) {
            Ok(()) => self.bought += 1,
            Err(err) => {
                log::debug!("tick {}: {} refused: {err}", game.current_tick(), kind.name());
                self.refused += 1;
            }
        }
    }
}

fn check_invariants(game: &Game) -> Result<()> {
    let state = game.state();
    let player = game.player();
    ensure!(state.grid.border_is_solid(), "border opened on level {}", state.level);
    ensure!(
        state.grid.is_open(player.position),
        "player inside a wall at ({:.3}, {:.3})",
        player.position.x,
        player.position.y
    );
    ensure!(player.health() <= player.max_health(), "player health above maximum");
    for (_, enemy) in &state.enemies {
        ensure!(enemy.health() <= enemy.max_health(), "enemy health above maximum");
        ensure!(state.grid.is_open(enemy.position()), "enemy inside a wall");
    }
    if game.status() == RunStatus::Playing {
        ensure!(
            state.portal.is_active() == (state.live_enemy_count() == 0),
            "portal state disagrees with enemy count"
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    println!("Starting fuzz harness on seed {} for {} ticks...", args.seed, args.ticks);
    let mut game = Game::new(args.seed);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed ^ 0x5eed);
    let mut input = InputState::default();
    let mut deaths = 0;
    let mut kills = 0;
    let mut deepest = game.level();
    let mut tally = PurchaseTally::default();

    for step in 0..args.ticks {
        if step % args.hold.max(1) == 0 {
            input = random_input(&mut rng);
            if game.near_shop() {
                let index = (rng.next_u64() % WeaponKind::SHOP_STOCK.len() as u64) as usize;
                tally.attempt(&mut game, WeaponKind::SHOP_STOCK[index]);
            }
        }

        let report = game.tick(&input);
        kills += report
            .events
            .iter()
            .filter(|event| matches!(event, GameEvent::EnemyKilled { .. }))
            .count();
        deepest = deepest.max(game.level());
        check_invariants(&game)?;

        if report.status == RunStatus::GameOver {
            deaths += 1;
            game.restart();
        }
    }

    println!("Kills: {kills}, deaths: {deaths}, deepest level: {deepest}");
    println!("Purchases: {}, refused: {}", tally.bought, tally.refused);
    println!("Final tick: {}", game.current_tick());
    println!("Snapshot hash: 0x{:016x}", game.snapshot_hash());
    println!("Fuzzing completed successfully.");
    Ok(())
}
