//! One fixed simulation step.
//! Order inside a tick: player, enemies, pickups, then win and loss checks.

use std::mem;

use super::*;
use crate::config::{COIN_PICKUP_RADIUS, TICK_MS};
use crate::entities::Positioned;

impl Game {
    pub fn tick(&mut self, input: &InputState) -> TickReport {
        let mut events = mem::take(&mut self.pending);
        let interact_pressed = input.interact && !self.interact_held;
        let cycle_pressed = input.next_weapon && !self.cycle_held;
        self.interact_held = input.interact;
        self.cycle_held = input.next_weapon;

        match self.status {
            RunStatus::GameOver => return self.report(events),
            RunStatus::LevelTransition { next_level } => {
                self.advance_clock();
                self.start_level(next_level);
                events.append(&mut self.pending);
                return self.report(events);
            }
            RunStatus::Playing => {}
        }

        self.advance_clock();
        let now_ms = self.elapsed_ms;

        self.step_player(input, cycle_pressed, now_ms, &mut events);
        if interact_pressed && self.interact(&mut events) {
            return self.report(events);
        }
        self.step_enemies(now_ms, &mut events);
        self.collect_coins(&mut events);
        self.check_outcome(&mut events);

        self.report(events)
    }

    fn advance_clock(&mut self) {
        self.tick += 1;
        self.elapsed_ms += TICK_MS;
    }

    fn report(&self, events: Vec<GameEvent>) -> TickReport {
        TickReport { tick: self.tick, events, status: self.status }
    }

    fn step_player(
        &mut self,
        input: &InputState,
        cycle_pressed: bool,
        now_ms: f64,
        events: &mut Vec<GameEvent>,
    ) {
        let GameState { grid, player, .. } = &mut self.state;
        let turn = input.turn_axis();
        if turn != 0.0 {
            player.rotate(turn);
        }
        let direction = input.move_axis();
        if direction != 0.0 {
            player.try_move(grid, direction);
        }
        if cycle_pressed {
            player.cycle_weapon();
        }
        if input.fire {
            self.fire(now_ms, events);
        }
    }

    /// Uses whatever is in reach, portal first. Returns true when the level is being left.
    fn interact(&mut self, events: &mut Vec<GameEvent>) -> bool {
        if self.near_active_portal() {
            let level = self.state.level;
            log::info!("player left level {level} through the portal");
            events.push(GameEvent::LevelExited { level });
            self.status = RunStatus::LevelTransition { next_level: level + 1 };
            return true;
        }
        if self.near_shop() {
            events.push(GameEvent::ShopOpened);
        }
        false
    }

    fn step_enemies(&mut self, now_ms: f64, events: &mut Vec<GameEvent>) {
        let GameState { grid, player, enemies, .. } = &mut self.state;
        for (id, enemy) in enemies.iter_mut() {
            if enemy.is_dead() {
                continue;
            }
            if let Some(amount) = enemy.update(player, grid, now_ms) {
                events.push(GameEvent::PlayerDamaged { enemy: id, amount });
            }
        }
    }

    fn collect_coins(&mut self, events: &mut Vec<GameEvent>) {
        let GameState { player, coins, .. } = &mut self.state;
        for coin in coins.iter_mut() {
            if coin.distance_to(player.position) >= COIN_PICKUP_RADIUS {
                continue;
            }
            if let Some(amount) = coin.collect() {
                player.add_coins(amount);
                events.push(GameEvent::CoinCollected { amount });
            }
        }
        coins.retain(|coin| !coin.is_collected());
    }

    fn check_outcome(&mut self, events: &mut Vec<GameEvent>) {
        if self.state.player.is_dead() {
            log::info!("player died on level {}", self.state.level);
            self.status = RunStatus::GameOver;
            events.push(GameEvent::PlayerDied);
            return;
        }
        if self.state.live_enemy_count() == 0 && self.state.portal.activate() {
            log::info!("level {} cleared, portal open", self.state.level);
            events.push(GameEvent::PortalActivated);
        }
    }
}
