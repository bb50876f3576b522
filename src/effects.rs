use raylib::ease::{self, EaseFn, linear_none};

use crate::keyframes::{Timing, Track};
use crate::particles::{Balloon, Confetti, Firework, Twinkle};

// Poses are in render space; `None` means the particle is still waiting for its delay.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Degrees, clockwise
    pub rotation: f32,
    pub opacity: f32,
}

const EASE_OUT: EaseFn = ease::cubic_out;
const EASE_IN_OUT: EaseFn = ease::sine_in_out;

const ROCKET_DURATION: f32 = 3.0;
const ROCKET_Y: Track<3> = Track::new([(0.0, 1.0), (0.7, -0.2), (1.0, -0.3)]); // x viewport height
const ROCKET_X: Track<3> = Track::new([(0.0, 0.0), (0.7, 20.0), (1.0, 30.0)]);
const ROCKET_SCALE: Track<3> = Track::new([(0.0, 0.5), (0.7, 1.0), (1.0, 0.0)]);
const ROCKET_OPACITY: Track<3> = Track::new([(0.0, 1.0), (0.7, 1.0), (1.0, 0.0)]);

const EXPLOSION_DURATION: f32 = 3.0;
const EXPLOSION_DELAY: f32 = 2.0;
const EXPLOSION_SCALE: Track<4> = Track::new([(0.0, 0.0), (0.2, 0.0), (0.3, 1.0), (1.0, 3.0)]);
const EXPLOSION_OPACITY: Track<4> = Track::new([(0.0, 0.0), (0.2, 0.0), (0.3, 1.0), (1.0, 0.0)]);

const CONFETTI_DURATION: f32 = 4.0;
const CONFETTI_Y: Track<2> = Track::new([(0.0, -1.0), (1.0, 1.0)]); // x viewport height
const CONFETTI_ROTATION: Track<2> = Track::new([(0.0, 0.0), (1.0, 720.0)]);
const CONFETTI_OPACITY: Track<2> = Track::new([(0.0, 1.0), (1.0, 0.0)]);

const BALLOON_DURATION: f32 = 15.0;
pub const BALLOON_START_BELOW: f32 = 100.0;
const BALLOON_Y: Track<3> = Track::new([(0.0, 0.0), (0.5, -0.5), (1.0, -1.2)]); // x viewport height
const BALLOON_ROTATION: Track<3> = Track::new([(0.0, -2.0), (0.5, 2.0), (1.0, -2.0)]);

const SPARKLE_DURATION: f32 = 2.0;
const SPARKLE_SCALE: Track<3> = Track::new([(0.0, 0.0), (0.5, 1.5), (1.0, 0.0)]);
const SPARKLE_ROTATION: Track<3> = Track::new([(0.0, 0.0), (0.5, 180.0), (1.0, 0.0)]);
const SPARKLE_OPACITY: Track<3> = Track::new([(0.0, 0.0), (0.5, 1.0), (1.0, 0.0)]);

const STAR_DURATION: f32 = 8.0;
const STAR_START_X: f32 = -100.0;
const STAR_DROP: f32 = 50.0;
const STAR_OPACITY: Track<4> = Track::new([(0.0, 0.0), (0.1, 1.0), (0.9, 1.0), (1.0, 0.0)]);

const FLOAT_RISE: Track<3> = Track::new([(0.0, 0.0), (0.5, -20.0), (1.0, 0.0)]);
const FLOAT_ROTATION: Track<3> = Track::new([(0.0, 0.0), (0.5, 180.0), (1.0, 0.0)]);

fn percent(value: f32, extent: f32) -> f32 {
    value / 100.0 * extent
}

pub fn firework_rocket(firework: &Firework, time: f32, width: f32, height: f32) -> Option<Pose> {
    let phase = Timing::new(ROCKET_DURATION, firework.delay).phase(time)?;
    Some(Pose {
        x: percent(firework.x, width) + ROCKET_X.sample(phase, EASE_OUT),
        y: percent(firework.y, height) + ROCKET_Y.sample(phase, EASE_OUT) * height,
        scale: ROCKET_SCALE.sample(phase, EASE_OUT),
        rotation: 0.0,
        opacity: ROCKET_OPACITY.sample(phase, EASE_OUT),
    })
}

pub fn firework_explosion(firework: &Firework, time: f32, width: f32, height: f32) -> Option<Pose> {
    let phase = Timing::new(EXPLOSION_DURATION, firework.delay + EXPLOSION_DELAY).phase(time)?;
    Some(Pose {
        x: percent(firework.x, width),
        y: percent(firework.y, height),
        scale: EXPLOSION_SCALE.sample(phase, EASE_OUT),
        rotation: 0.0,
        opacity: EXPLOSION_OPACITY.sample(phase, EASE_OUT),
    })
}

pub fn confetti(piece: &Confetti, time: f32, width: f32, height: f32) -> Option<Pose> {
    let phase = Timing::new(CONFETTI_DURATION, piece.delay).phase(time)?;
    Some(Pose {
        x: percent(piece.x, width),
        y: percent(piece.y, height) + CONFETTI_Y.sample(phase, linear_none) * height,
        scale: 1.0,
        rotation: CONFETTI_ROTATION.sample(phase, linear_none),
        opacity: CONFETTI_OPACITY.sample(phase, linear_none),
    })
}

/// Pose of the balloon body's top-left anchor.
pub fn balloon(balloon: &Balloon, time: f32, width: f32, height: f32) -> Option<Pose> {
    let phase = Timing::new(BALLOON_DURATION, balloon.delay).phase(time)?;
    Some(Pose {
        x: percent(balloon.x, width),
        y: height + BALLOON_START_BELOW + BALLOON_Y.sample(phase, EASE_IN_OUT) * height,
        scale: 1.0,
        rotation: BALLOON_ROTATION.sample(phase, EASE_IN_OUT),
        opacity: 1.0,
    })
}

pub fn sparkle(sparkle: &Twinkle, time: f32, width: f32, height: f32) -> Option<Pose> {
    let phase = Timing::new(SPARKLE_DURATION, sparkle.delay).phase(time)?;
    Some(Pose {
        x: percent(sparkle.x, width),
        y: percent(sparkle.y, height),
        scale: SPARKLE_SCALE.sample(phase, EASE_IN_OUT),
        rotation: SPARKLE_ROTATION.sample(phase, EASE_IN_OUT),
        opacity: SPARKLE_OPACITY.sample(phase, EASE_IN_OUT),
    })
}

pub fn shooting_star(star: &Twinkle, time: f32, width: f32, height: f32) -> Option<Pose> {
    let phase = Timing::new(STAR_DURATION, star.delay).phase(time)?;
    Some(Pose {
        x: percent(star.x, width) + STAR_START_X + (width - STAR_START_X) * phase,
        y: percent(star.y, height) + STAR_DROP * phase,
        scale: 1.0,
        rotation: 45.0,
        opacity: STAR_OPACITY.sample(phase, linear_none),
    })
}

/// One of the small dots drifting over each slide.
pub fn floating_dot(index: usize, time: f32, width: f32, height: f32, slide_opacity: f32) -> Pose {
    let i = index as f32;
    let duration = 3.0 + i * 0.5;
    let phase = Timing::new(duration, i * 0.5).phase(time).unwrap_or(0.0);
    Pose {
        x: percent(20.0 + i * 15.0, width),
        y: percent(30.0 + (index % 3) as f32 * 20.0, height) + FLOAT_RISE.sample(phase, EASE_IN_OUT),
        scale: 1.0,
        rotation: FLOAT_ROTATION.sample(phase, EASE_IN_OUT),
        opacity: crate::transition::sanitize(slide_opacity).clamp(0.0, 1.0) * 0.7,
    }
}

/// Hue in degrees cycling once per `period` seconds.
pub fn rainbow_hue(time: f32, period: f32) -> f32 {
    if !time.is_finite() || period <= 0.0 {
        return 0.0;
    }
    (time / period).fract() * 360.0
}

/// Gentle headline bob: 0 → -10 → 0 pixels.
pub fn gentle_bounce(time: f32, period: f32) -> f32 {
    const BOB: Track<3> = Track::new([(0.0, 0.0), (0.5, -10.0), (1.0, 0.0)]);
    Timing::new(period, 0.0).phase(time).map_or(0.0, |p| BOB.sample(p, EASE_IN_OUT))
}

/// Icon bounce: lifted by a quarter of `size` at the start and end of each second.
pub fn bounce(time: f32, delay: f32, size: f32) -> f32 {
    const BOUNCE: Track<3> = Track::new([(0.0, -0.25), (0.5, 0.0), (1.0, -0.25)]);
    let phase = Timing::new(1.0, 0.0).phase(time - delay).unwrap_or(0.0);
    BOUNCE.sample(phase, EASE_IN_OUT) * size
}

/// Pulse opacity: 1 → 0.5 → 1 over two seconds.
pub fn pulse(time: f32) -> f32 {
    const PULSE: Track<3> = Track::new([(0.0, 1.0), (0.5, 0.5), (1.0, 1.0)]);
    Timing::new(2.0, 0.0).phase(time).map_or(1.0, |p| PULSE.sample(p, EASE_IN_OUT))
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 1920.0;
    const H: f32 = 1080.0;

    fn assert_finite(pose: &Pose) {
        for v in [pose.x, pose.y, pose.scale, pose.rotation, pose.opacity] {
            assert!(v.is_finite(), "{pose:?}");
        }
        assert!((0.0..=1.0).contains(&pose.opacity), "{pose:?}");
    }

    #[test]
    fn test_nothing_drawn_before_delay() {
        let firework = Firework { id: 0, x: 50.0, y: 50.0, delay: 1.5 };
        assert!(firework_rocket(&firework, 1.0, W, H).is_none());
        assert!(firework_rocket(&firework, 1.5, W, H).is_some());
        assert!(firework_explosion(&firework, 3.0, W, H).is_none());
        assert!(firework_explosion(&firework, 3.5, W, H).is_some());
    }

    #[test]
    fn test_poses_are_finite_over_time() {
        let firework = Firework { id: 0, x: 10.0, y: 90.0, delay: 0.3 };
        let piece = Confetti { id: 0, x: 40.0, y: -35.0, color: 0xff6b6b, delay: 0.2 };
        let b = Balloon { id: 0, x: 80.0, color: 0x4ecdc4, delay: 1.0 };
        let t = Twinkle { id: 0, x: 5.0, y: 25.0, delay: 0.0 };
        for step in 0..2000 {
            let time = step as f32 * 0.05;
            for pose in [
                firework_rocket(&firework, time, W, H),
                firework_explosion(&firework, time, W, H),
                confetti(&piece, time, W, H),
                balloon(&b, time, W, H),
                sparkle(&t, time, W, H),
                shooting_star(&t, time, W, H),
            ]
            .iter()
            .flatten()
            {
                assert_finite(pose);
            }
            assert_finite(&floating_dot(step % 6, time, W, H, 1.0));
        }
        assert_finite(&floating_dot(2, 1.0, W, H, f32::NAN));
    }

    #[test]
    fn test_confetti_falls_and_fades() {
        let piece = Confetti { id: 0, x: 50.0, y: -10.0, color: 0xff6b6b, delay: 0.0 };
        let start = confetti(&piece, 0.0, W, H).unwrap();
        let later = confetti(&piece, 3.0, W, H).unwrap();
        assert!(later.y > start.y);
        assert!(later.opacity < start.opacity);
        assert_eq!(start.y, -0.1 * H - H);
    }

    #[test]
    fn test_balloon_starts_below_the_screen() {
        let b = Balloon { id: 0, x: 0.0, color: 0x4ecdc4, delay: 0.0 };
        let pose = balloon(&b, 0.0, W, H).unwrap();
        assert_eq!(pose.y, H + BALLOON_START_BELOW);
        assert_eq!(pose.rotation, -2.0);
        let top = balloon(&b, 14.99, W, H).unwrap();
        assert!(top.y < 0.0);
    }

    #[test]
    fn test_rainbow_hue_wraps() {
        assert_eq!(rainbow_hue(0.0, 3.0), 0.0);
        assert!((rainbow_hue(1.5, 3.0) - 180.0).abs() < 1e-3);
        assert!(rainbow_hue(4.5, 3.0) < 360.0);
        assert_eq!(rainbow_hue(f32::NAN, 3.0), 0.0);
    }

    #[test]
    fn test_pulse_range() {
        for step in 0..100 {
            let p = pulse(step as f32 * 0.1);
            assert!((0.5..=1.0).contains(&p));
        }
    }
}
