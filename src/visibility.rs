use crate::constants::{ACTIVE_RATIO, INTERSECTION_THRESHOLDS};

/// Fraction of a slide `[top, top + height)` that lies inside the viewport.
pub fn intersection_ratio(top: f32, height: f32, view_top: f32, view_height: f32) -> f32 {
    if !(height > 0.0) || !(view_height > 0.0) || !top.is_finite() || !view_top.is_finite() {
        return 0.0;
    }
    let visible = (top + height).min(view_top + view_height) - top.max(view_top);
    (visible / height).clamp(0.0, 1.0)
}

fn crossed_thresholds(ratio: f32) -> usize {
    INTERSECTION_THRESHOLDS.iter().filter(|&&t| ratio >= t).count()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Entry {
    pub index: usize,
    pub ratio: f32,
    pub is_intersecting: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Observation {
    crossed: usize,
    intersecting: bool,
}

// Reports an entry when a slide's crossed-threshold count or intersecting flag changes.
#[derive(Debug, Clone)]
pub struct IntersectionTracker {
    observed: Vec<Option<Observation>>,
    visible: Vec<bool>,
    active: usize,
}

impl IntersectionTracker {
    pub fn new(slide_count: usize) -> Self {
        Self {
            observed: vec![None; slide_count],
            visible: vec![false; slide_count],
            active: 0,
        }
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn visible(&self) -> &[bool] {
        &self.visible
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Force the active slide, as navigation does before the scroll lands.
    pub fn set_active(&mut self, index: usize) {
        if index < self.visible.len() {
            self.active = index;
        }
    }

    /// Feed the current ratio of every slide; returns the delivered entries.
    pub fn observe(&mut self, ratios: &[f32]) -> Vec<Entry> {
        let mut entries = Vec::new();
        for (index, (&ratio, last)) in ratios.iter().zip(self.observed.iter_mut()).enumerate() {
            let now = Observation {
                crossed: crossed_thresholds(ratio),
                intersecting: ratio > 0.0,
            };
            if *last != Some(now) {
                *last = Some(now);
                entries.push(Entry { index, ratio, is_intersecting: now.intersecting });
            }
        }
        for entry in &entries {
            self.visible[entry.index] = entry.is_intersecting;
            if entry.is_intersecting && entry.ratio > ACTIVE_RATIO {
                self.active = entry.index;
            }
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll::ScrollState;

    fn ratios(count: usize, height: f32, offset: f32) -> Vec<f32> {
        (0..count)
            .map(|i| intersection_ratio(i as f32 * height, height, offset, height))
            .collect()
    }

    #[test]
    fn test_intersection_ratio() {
        assert_eq!(intersection_ratio(0.0, 100.0, 0.0, 100.0), 1.0);
        assert_eq!(intersection_ratio(100.0, 100.0, 50.0, 100.0), 0.5);
        assert_eq!(intersection_ratio(300.0, 100.0, 0.0, 100.0), 0.0);
        assert_eq!(intersection_ratio(0.0, 0.0, 0.0, 100.0), 0.0);
        assert_eq!(intersection_ratio(0.0, 100.0, f32::NAN, 100.0), 0.0);
        assert_eq!(intersection_ratio(f32::NAN, 100.0, 0.0, 100.0), 0.0);
        assert_eq!(intersection_ratio(0.0, 100.0, f32::INFINITY, 100.0), 0.0);
    }

    #[test]
    fn test_first_observation_delivers_every_slide() {
        let mut tracker = IntersectionTracker::new(3);
        let entries = tracker.observe(&ratios(3, 100.0, 0.0));
        assert_eq!(entries.len(), 3);
        assert_eq!(tracker.visible(), &[true, false, false]);
        assert_eq!(tracker.active(), 0);
        assert!(tracker.observe(&ratios(3, 100.0, 0.0)).is_empty());
    }

    #[test]
    fn test_small_moves_inside_a_threshold_band_are_silent() {
        let mut tracker = IntersectionTracker::new(2);
        tracker.observe(&ratios(2, 100.0, 0.0));
        assert!(tracker.observe(&ratios(2, 100.0, 5.0)).len() == 1);
        // slide 0 stays in the 0.9 band, slide 1 stays in the below-0.1 band
        assert!(tracker.observe(&ratios(2, 100.0, 8.0)).is_empty());
    }

    #[test]
    fn test_active_requires_ratio_above_threshold() {
        let mut tracker = IntersectionTracker::new(2);
        tracker.observe(&ratios(2, 100.0, 0.0));
        tracker.observe(&ratios(2, 100.0, 25.0));
        assert_eq!(tracker.active(), 0);
        assert!(tracker.is_visible(1));
        tracker.observe(&ratios(2, 100.0, 60.0));
        assert_eq!(tracker.active(), 1);
    }

    #[test]
    fn test_navigation_ends_on_target_slide() {
        let height = 1080.0;
        let count = 7;
        for target in 0..count {
            for start in [0, 3, 6] {
                let mut scroll = ScrollState::new(height, height * count as f32);
                scroll.scroll_to(start as f32 * height);
                for _ in 0..60 {
                    scroll.update(1.0 / 60.0);
                }
                let mut tracker = IntersectionTracker::new(count);
                tracker.observe(&ratios(count, height, scroll.offset()));

                scroll.scroll_to(target as f32 * height);
                tracker.set_active(target);
                for _ in 0..90 {
                    scroll.update(1.0 / 60.0);
                    tracker.observe(&ratios(count, height, scroll.offset()));
                }
                assert_eq!(tracker.active(), target, "from {start} to {target}");
                assert!(tracker.is_visible(target));
            }
        }
    }
}
