use raylib::ease::{EaseFn, Tween};

/// Evaluate a raylib easing curve on a unit interval: `t` in `0..=1` maps to `0..=1`.
pub fn eased(easer: EaseFn, t: f32) -> f32 {
    easer(t.clamp(0.0, 1.0), 0.0, 1.0, 1.0)
}

/// A value that chases a moving target like a CSS `transition`.
///
/// Retargeting restarts the tween from the current value, so an animation
/// interrupted halfway continues smoothly.
pub struct Transition {
    easer: EaseFn,
    duration: f32,
    value: f32,
    tween: Option<Tween>,
}

impl Transition {
    pub fn new(easer: EaseFn, value: f32, duration: f32) -> Self {
        Self { easer, duration, value, tween: None }
    }

    pub fn target(&self) -> f32 {
        self.tween.as_ref().map_or(self.value, Tween::end_value)
    }

    pub fn set_target(&mut self, target: f32) {
        if target == self.target() {
            return;
        }
        if self.duration <= 0.0 {
            self.value = target;
            self.tween = None;
        } else {
            self.tween = Some(Tween::new(self.easer, self.value, target, self.duration));
        }
    }

    pub fn update(&mut self, dt: f32) -> f32 {
        if let Some(tween) = self.tween.as_mut() {
            self.value = tween.apply(dt.max(0.0));
            if tween.has_completed() {
                self.value = tween.end_value();
                self.tween = None;
            }
        }
        self.value
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use raylib::ease;

    #[test]
    fn test_eased_curves_hit_endpoints() {
        for easer in [ease::linear_none as EaseFn, ease::cubic_out, ease::cubic_in_out, ease::sine_in_out] {
            assert!(eased(easer, 0.0).abs() < 1e-6);
            assert!((eased(easer, 1.0) - 1.0).abs() < 1e-6);
        }
        assert!(eased(ease::cubic_out, 0.5) > 0.5, "ease-out is ahead of linear");
    }

    #[test]
    fn test_transition_finishes_on_target() {
        let mut t = Transition::new(ease::cubic_out, 10.0, 0.5);
        t.set_target(110.0);
        let halfway = t.update(0.25);
        assert!(halfway > 60.0 && halfway < 110.0, "ease-out is ahead of linear: {halfway}");
        assert_eq!(t.update(1.0), 110.0);
        assert_eq!(t.target(), 110.0);
    }

    #[test]
    fn test_zero_duration_is_instant() {
        let mut t = Transition::new(ease::linear_none, 0.0, 0.0);
        t.set_target(5.0);
        assert_eq!(t.value(), 5.0);
        assert_eq!(t.update(0.0), 5.0);
    }

    #[test]
    fn test_transition_retarget_continues_from_current_value() {
        let mut t = Transition::new(ease::linear_none, 0.0, 1.0);
        t.set_target(1.0);
        assert_eq!(t.update(0.5), 0.5);
        t.set_target(0.0);
        assert_eq!(t.value(), 0.5);
        assert_eq!(t.update(0.5), 0.25);
        assert_eq!(t.update(10.0), 0.0);
    }
}
