use raylib::prelude::*;

use crate::constants::RENDER_WIDTH;

pub const DOT_RADIUS: f32 = 8.0;
pub const DOT_ACTIVE_SCALE: f32 = 1.25;
const DOT_GAP: f32 = 12.0;
const HIT_RADIUS: f32 = 16.0;
const CARD_PADDING_X: f32 = 32.0;
const CARD_PADDING_Y: f32 = 16.0;
const CARD_TOP: f32 = 32.0;

/// Navigation dots, one per slide, in a card centered at the top.
#[derive(Debug, Clone, Copy)]
pub struct NavBar {
    count: usize,
}

impl NavBar {
    pub fn new(count: usize) -> Self {
        Self { count }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    fn row_width(&self) -> f32 {
        if self.count == 0 {
            return 0.0;
        }
        self.count as f32 * DOT_RADIUS * 2.0 + (self.count - 1) as f32 * DOT_GAP
    }

    pub fn card(&self) -> Rectangle {
        let width = self.row_width() + CARD_PADDING_X * 2.0;
        let height = DOT_RADIUS * 2.0 + CARD_PADDING_Y * 2.0;
        Rectangle::new((RENDER_WIDTH as f32 - width) * 0.5, CARD_TOP, width, height)
    }

    pub fn dot_center(&self, index: usize) -> Vector2 {
        let card = self.card();
        Vector2::new(
            card.x + CARD_PADDING_X + DOT_RADIUS + index as f32 * (DOT_RADIUS * 2.0 + DOT_GAP),
            card.y + card.height * 0.5,
        )
    }

    /// Index of the dot under `point` (render space).
    pub fn hit_test(&self, point: Vector2) -> Option<usize> {
        (0..self.count).find(|&i| {
            let center = self.dot_center(i);
            let (dx, dy) = (point.x - center.x, point.y - center.y);
            dx * dx + dy * dy <= HIT_RADIUS * HIT_RADIUS
        })
    }
}
