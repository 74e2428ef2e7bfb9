use crate::types::Point;

use super::Positioned;

#[derive(Clone, Debug, PartialEq)]
pub struct CoinDrop {
    pub position: Point,
    pub amount: u32,
    collected: bool,
}

impl CoinDrop {
    pub fn new(position: Point, amount: u32) -> Self {
        Self { position, amount, collected: false }
    }

    pub fn is_collected(&self) -> bool {
        self.collected
    }

    /// Marks the drop collected and yields its amount the first time only.
    pub fn collect(&mut self) -> Option<u32> {
        if self.collected {
            return None;
        }
        self.collected = true;
        Some(self.amount)
    }
}

impl Positioned for CoinDrop {
    fn position(&self) -> Point {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collecting_twice_pays_once() {
        let mut drop = CoinDrop::new(Point::new(2.5, 2.5), 12);
        assert_eq!(drop.collect(), Some(12));
        assert!(drop.is_collected());
        assert_eq!(drop.collect(), None);
    }
}
