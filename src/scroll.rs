use raylib::ease::{self, Tween};

use crate::constants::SCROLL_DURATION;

/// Vertical scroll state of the slide column.
pub struct ScrollState {
    offset: f32,
    viewport_height: f32,
    content_height: f32,
    tween: Option<Tween>,
}

impl ScrollState {
    pub fn new(viewport_height: f32, content_height: f32) -> Self {
        Self {
            offset: 0.0,
            viewport_height: viewport_height.max(0.0),
            content_height: content_height.max(0.0),
            tween: None,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn viewport_height(&self) -> f32 {
        self.viewport_height
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_height - self.viewport_height).max(0.0)
    }

    /// Normalized scroll position.
    ///
    /// NaN when the content does not scroll (0 / 0); callers sanitize.
    pub fn progress(&self) -> f32 {
        self.offset / (self.content_height - self.viewport_height)
    }

    /// Where the current smooth scroll ends, or the offset when idle.
    pub fn target(&self) -> f32 {
        self.tween.as_ref().map_or(self.offset, Tween::end_value)
    }

    pub fn is_scrolling(&self) -> bool {
        self.tween.is_some()
    }

    /// Smooth scroll to an absolute offset, clamped to the scrollable range.
    pub fn scroll_to(&mut self, offset: f32) {
        let target = if offset.is_finite() { offset.clamp(0.0, self.max_offset()) } else { self.offset };
        if target == self.offset {
            self.tween = None;
            return;
        }
        self.tween = Some(Tween::new(ease::cubic_out, self.offset, target, SCROLL_DURATION));
    }

    /// Smooth scroll relative to the pending target.
    pub fn scroll_by(&mut self, delta: f32) {
        self.scroll_to(self.target() + delta);
    }

    pub fn update(&mut self, dt: f32) {
        let max_offset = self.max_offset();
        if let Some(tween) = self.tween.as_mut() {
            self.offset = tween.apply(dt.max(0.0)).clamp(0.0, max_offset);
            if tween.has_completed() {
                self.offset = tween.end_value().clamp(0.0, max_offset);
                self.tween = None;
            }
        }
    }
}
