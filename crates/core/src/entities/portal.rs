use std::mem;

use crate::types::Point;

use super::{Interactable, Positioned};

const PORTAL_RADIUS: f64 = 1.5;

/// Level exit. Dormant until every enemy is dead, then active for the rest of the level.
#[derive(Clone, Debug, PartialEq)]
pub struct ExitPortal {
    pub position: Point,
    active: bool,
}

impl ExitPortal {
    pub fn new(position: Point) -> Self {
        Self { position, active: false }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Returns true only on the call that switched the portal on.
    pub fn activate(&mut self) -> bool {
        !mem::replace(&mut self.active, true)
    }
}

impl Positioned for ExitPortal {
    fn position(&self) -> Point {
        self.position
    }
}

impl Interactable for ExitPortal {
    fn interaction_radius(&self) -> f64 {
        PORTAL_RADIUS
    }
}
