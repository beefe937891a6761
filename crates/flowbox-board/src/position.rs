//! Card coordinates and placement regions

use rand::Rng;
use serde::{Deserialize, Serialize};

/// 2D canvas coordinate
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Half-open rectangle new cards are placed into: `[min_x, max_x) x [min_y, max_y)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Solo creator canvas region
    pub const CANVAS: Bounds = Bounds::new(100.0, 500.0, 100.0, 400.0);

    /// Region used by the student, team and pod canvases
    pub const COMPACT: Bounds = Bounds::new(150.0, 450.0, 150.0, 350.0);

    #[inline]
    #[must_use]
    pub const fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Non-empty and finite on both axes
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x < self.max_x
            && self.min_y < self.max_y
    }

    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.x >= self.min_x
            && position.x < self.max_x
            && position.y >= self.min_y
            && position.y < self.max_y
    }

    /// Draw a uniformly random position inside the region.
    ///
    /// Invalid bounds collapse to the `(min_x, min_y)` corner.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Position {
        if !self.is_valid() {
            return Position::new(self.min_x, self.min_y);
        }
        Position::new(
            rng.random_range(self.min_x..self.max_x),
            rng.random_range(self.min_y..self.max_y),
        )
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::CANVAS
    }
}
