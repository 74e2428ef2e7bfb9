//! Per-level difficulty scaling.

pub const STARTING_LEVEL: u32 = 1;

const BASE_MAP_SIDE: usize = 25;
const MAP_SIDE_STEP: usize = 3;
const MAX_MAP_SIDE: usize = 40;

const BASE_ENEMY_COUNT: usize = 8;
const ENEMY_COUNT_STEP: usize = 2;
const MAX_ENEMY_COUNT: usize = 20;

const HEALTH_GROWTH_PER_LEVEL: f64 = 0.2;

/// Everything that changes between levels, resolved up front.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LevelPlan {
    pub level: u32,
    pub map_side: usize,
    pub enemy_count: usize,
    pub health_multiplier: f64,
}

impl LevelPlan {
    pub fn for_level(level: u32) -> Self {
        Self {
            level: level.max(STARTING_LEVEL),
            map_side: map_side(level),
            enemy_count: enemy_count(level),
            health_multiplier: health_multiplier(level),
        }
    }

    pub fn scaled_health(&self, base_health: u32) -> u32 {
        (f64::from(base_health) * self.health_multiplier).floor() as u32
    }
}

fn levels_past_start(level: u32) -> usize {
    level.saturating_sub(STARTING_LEVEL) as usize
}

pub fn map_side(level: u32) -> usize {
    (BASE_MAP_SIDE + levels_past_start(level) * MAP_SIDE_STEP).min(MAX_MAP_SIDE)
}

pub fn enemy_count(level: u32) -> usize {
    (BASE_ENEMY_COUNT + levels_past_start(level) * ENEMY_COUNT_STEP).min(MAX_ENEMY_COUNT)
}

pub fn health_multiplier(level: u32) -> f64 {
    1.0 + levels_past_start(level) as f64 * HEALTH_GROWTH_PER_LEVEL
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_level_uses_base_values() {
        let plan = LevelPlan::for_level(1);
        assert_eq!(plan.map_side, 25);
        assert_eq!(plan.enemy_count, 8);
        assert_eq!(plan.scaled_health(50), 50);
    }

    #[test]
    fn scaling_is_monotonic_and_capped() {
        let mut previous = LevelPlan::for_level(1);
        for level in 2..=30 {
            let plan = LevelPlan::for_level(level);
            assert!(plan.map_side >= previous.map_side);
            assert!(plan.enemy_count >= previous.enemy_count);
            assert!(plan.scaled_health(75) >= previous.scaled_health(75));
            previous = plan;
        }
        assert_eq!(previous.map_side, 40);
        assert_eq!(previous.enemy_count, 20);
    }

    #[test]
    fn health_scaling_floors() {
        assert_eq!(LevelPlan::for_level(3).scaled_health(30), 42);
        assert_eq!(LevelPlan::for_level(2).scaled_health(75), 90);
    }
}
