use raylib::ease::EaseFn;

use crate::tween::eased;

/// `(offset, value)` stops with offsets in `0..=1`; the easing applies per segment.
#[derive(Debug, Clone, Copy)]
pub struct Track<const N: usize> {
    stops: [(f32, f32); N],
}

impl<const N: usize> Track<N> {
    pub const fn new(stops: [(f32, f32); N]) -> Self {
        Self { stops }
    }

    pub fn sample(&self, phase: f32, ease: EaseFn) -> f32 {
        let phase = if phase.is_finite() { phase.clamp(0.0, 1.0) } else { 0.0 };
        let (first_offset, first_value) = self.stops[0];
        if phase <= first_offset {
            return first_value;
        }
        for window in self.stops.windows(2) {
            let (start, from) = window[0];
            let (end, to) = window[1];
            if phase <= end {
                let span = end - start;
                if span <= 0.0 {
                    return to;
                }
                let t = eased(ease, (phase - start) / span);
                return from + (to - from) * t;
            }
        }
        self.stops[N - 1].1
    }
}

/// Looping animation timing: duration and start delay in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Timing {
    pub duration: f32,
    pub delay: f32,
}

impl Timing {
    pub const fn new(duration: f32, delay: f32) -> Self {
        Self { duration, delay }
    }

    /// Phase in `0..1` at `time`, or `None` while still waiting for the delay.
    pub fn phase(&self, time: f32) -> Option<f32> {
        if !time.is_finite() || self.duration <= 0.0 {
            return None;
        }
        let local = time - self.delay;
        if local < 0.0 {
            return None;
        }
        Some((local / self.duration).fract())
    }
}
