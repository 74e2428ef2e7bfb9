use crate::types::{Point, WeaponKind};

use super::weapon::Weapon;
use super::{Interactable, Positioned};

const SHOP_RADIUS: f64 = 2.0;

/// Fixed-position vendor. Purchases mutate the player; the shop itself never changes.
#[derive(Clone, Debug, PartialEq)]
pub struct Shop {
    pub position: Point,
    inventory: Vec<Weapon>,
}

impl Shop {
    pub fn new(position: Point) -> Self {
        Self { position, inventory: WeaponKind::SHOP_STOCK.into_iter().map(Weapon::new).collect() }
    }

    pub fn inventory(&self) -> &[Weapon] {
        &self.inventory
    }

    pub fn item(&self, kind: WeaponKind) -> Option<&Weapon> {
        self.inventory.iter().find(|weapon| weapon.kind() == kind)
    }
}

impl Positioned for Shop {
    fn position(&self) -> Point {
        self.position
    }
}

impl Interactable for Shop {
    fn interaction_radius(&self) -> f64 {
        SHOP_RADIUS
    }
}
