use crate::types::WeaponKind;

struct WeaponStats {
    name: &'static str,
    damage: u32,
    cooldown_ms: f64,
    cost: u32,
    range: f64,
}

const fn stats(kind: WeaponKind) -> WeaponStats {
    match kind {
        WeaponKind::Pistol => {
            WeaponStats { name: "Pistol", damage: 25, cooldown_ms: 500.0, cost: 0, range: 15.0 }
        }
        WeaponKind::Shotgun => {
            WeaponStats { name: "Shotgun", damage: 50, cooldown_ms: 800.0, cost: 50, range: 10.0 }
        }
        WeaponKind::Rifle => {
            WeaponStats { name: "Rifle", damage: 35, cooldown_ms: 300.0, cost: 100, range: 20.0 }
        }
        WeaponKind::Sniper => {
            WeaponStats { name: "Sniper", damage: 100, cooldown_ms: 1500.0, cost: 200, range: 25.0 }
        }
    }
}

impl WeaponKind {
    pub const SHOP_STOCK: [WeaponKind; 3] =
        [WeaponKind::Shotgun, WeaponKind::Rifle, WeaponKind::Sniper];

    pub fn name(self) -> &'static str {
        stats(self).name
    }
}

/// A weapon instance. Its kind is the unique key inside an arsenal.
#[derive(Clone, Debug, PartialEq)]
pub struct Weapon {
    kind: WeaponKind,
    last_fired_ms: Option<f64>,
}

impl Weapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self { kind, last_fired_ms: None }
    }

    pub fn kind(&self) -> WeaponKind {
        self.kind
    }

    pub fn name(&self) -> &'static str {
        stats(self.kind).name
    }

    pub fn damage(&self) -> u32 {
        stats(self.kind).damage
    }

    pub fn cooldown_ms(&self) -> f64 {
        stats(self.kind).cooldown_ms
    }

    pub fn cost(&self) -> u32 {
        stats(self.kind).cost
    }

    pub fn range(&self) -> f64 {
        stats(self.kind).range
    }

    pub fn last_fired_ms(&self) -> Option<f64> {
        self.last_fired_ms
    }

    pub fn is_ready(&self, now_ms: f64) -> bool {
        self.last_fired_ms.is_none_or(|last| now_ms - last >= self.cooldown_ms())
    }

    /// Starts the cooldown if the weapon is ready. Returns whether a shot went off.
    pub fn try_fire(&mut self, now_ms: f64) -> bool {
        if !self.is_ready(now_ms) {
            return false;
        }
        self.last_fired_ms = Some(now_ms);
        true
    }
}
