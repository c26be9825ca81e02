use rand::Rng;

use crate::constants::*;
use crate::rendering::GameGrid;
use crate::types::Vector2D;

/// The player-controlled fox. Center position plus a fixed collision box.
pub struct Player {
    pub position: Vector2D,
    pub width: f64,
    pub height: f64,
}

impl Player {
    pub fn new(x: f64, y: f64) -> Self {
        Player {
            position: Vector2D::new(x, y),
            width: FOX_WIDTH,
            height: FOX_HEIGHT,
        }
    }

    pub fn step(&mut self, delta: Vector2D) {
        self.position = self.position.add(delta);
    }

    /// AABB overlap on half-extent sums, strict on both axes so boxes that
    /// merely touch edge-to-edge do not count as colliding.
    pub fn overlaps(&self, coin: &Coin) -> bool {
        let dx = (self.position.x - coin.position.x).abs();
        let dy = (self.position.y - coin.position.y).abs();
        dx < (self.width + coin.width) / 2.0 && dy < (self.height + coin.height) / 2.0
    }

    pub fn draw(&self, grid: &mut GameGrid) {
        grid.fill_field_rect(self.position, self.width, self.height, '@');
    }
}

/// The collectible coin. Relocated uniformly within the inset bounds on
/// every pickup.
pub struct Coin {
    pub position: Vector2D,
    pub width: f64,
    pub height: f64,
}

impl Coin {
    pub fn new(x: f64, y: f64) -> Self {
        Coin {
            position: Vector2D::new(x, y),
            width: COIN_WIDTH,
            height: COIN_HEIGHT,
        }
    }

    /// Each coordinate drawn independently from [margin, dimension - margin],
    /// endpoints included.
    pub fn relocate(&mut self, rng: &mut impl Rng) {
        self.position = Vector2D::new(
            rng.gen_range(COIN_MARGIN..=FIELD_WIDTH - COIN_MARGIN),
            rng.gen_range(COIN_MARGIN..=FIELD_HEIGHT - COIN_MARGIN),
        );
    }

    pub fn draw(&self, grid: &mut GameGrid) {
        grid.fill_field_rect(self.position, self.width, self.height, 'o');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn overlap_by_one_unit_collides() {
        let fox = Player::new(200.0, 200.0);
        let touching_x = 200.0 + (FOX_WIDTH + COIN_WIDTH) / 2.0;
        let coin = Coin::new(touching_x - 1.0, 200.0);
        assert!(fox.overlaps(&coin));
    }

    #[test]
    fn separated_by_one_unit_does_not_collide() {
        let fox = Player::new(200.0, 200.0);
        let touching_x = 200.0 + (FOX_WIDTH + COIN_WIDTH) / 2.0;
        let coin = Coin::new(touching_x + 1.0, 200.0);
        assert!(!fox.overlaps(&coin));
    }

    #[test]
    fn exact_edge_contact_does_not_collide() {
        let fox = Player::new(200.0, 200.0);
        let touching_x = 200.0 + (FOX_WIDTH + COIN_WIDTH) / 2.0;
        let coin = Coin::new(touching_x, 200.0);
        assert!(!fox.overlaps(&coin));

        let touching_y = 200.0 + (FOX_HEIGHT + COIN_HEIGHT) / 2.0;
        let coin = Coin::new(200.0, touching_y);
        assert!(!fox.overlaps(&coin));
    }

    #[test]
    fn overlap_requires_both_axes() {
        let fox = Player::new(200.0, 200.0);
        // Overlapping in x, far apart in y.
        let coin = Coin::new(210.0, 350.0);
        assert!(!fox.overlaps(&coin));
    }

    #[test]
    fn relocate_stays_within_inset_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut coin = Coin::new(COIN_START_X, COIN_START_Y);
        for _ in 0..100 {
            coin.relocate(&mut rng);
            assert!(coin.position.x >= COIN_MARGIN);
            assert!(coin.position.x <= FIELD_WIDTH - COIN_MARGIN);
            assert!(coin.position.y >= COIN_MARGIN);
            assert!(coin.position.y <= FIELD_HEIGHT - COIN_MARGIN);
        }
    }
}
