use rand::Rng;
use rand::seq::IndexedRandom;

use crate::constants::*;

// Positions are viewport percentages, delays are seconds.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Firework {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub delay: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Confetti {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub color: u32,
    pub delay: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Balloon {
    pub id: usize,
    pub x: f32,
    pub color: u32,
    pub delay: f32,
}

/// Sparkles and shooting stars share this shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Twinkle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub delay: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particles {
    pub fireworks: Vec<Firework>,
    pub confetti: Vec<Confetti>,
    pub balloons: Vec<Balloon>,
    pub sparkles: Vec<Twinkle>,
    pub shooting_stars: Vec<Twinkle>,
}

fn pick_color<R: Rng>(rng: &mut R) -> u32 {
    *PARTICLE_PALETTE.choose(rng).unwrap_or(&PARTICLE_PALETTE[0])
}

impl Particles {
    pub fn generate<R: Rng>(rng: &mut R) -> Self {
        let fireworks = (0..FIREWORK_COUNT)
            .map(|id| Firework {
                id,
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..5.0),
            })
            .collect();

        let confetti = (0..CONFETTI_COUNT)
            .map(|id| Confetti {
                id,
                x: rng.random_range(0.0..100.0),
                y: -10.0 - rng.random_range::<f32, _>(0.0..50.0),
                color: pick_color(rng),
                delay: rng.random_range(0.0..3.0),
            })
            .collect();

        let balloons = (0..BALLOON_COUNT)
            .map(|id| Balloon {
                id,
                x: rng.random_range(0.0..90.0),
                color: pick_color(rng),
                delay: rng.random_range(0.0..2.0),
            })
            .collect();

        let sparkles = (0..SPARKLE_COUNT)
            .map(|id| Twinkle {
                id,
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..100.0),
                delay: rng.random_range(0.0..4.0),
            })
            .collect();

        let shooting_stars = (0..SHOOTING_STAR_COUNT)
            .map(|id| Twinkle {
                id,
                x: rng.random_range(0.0..100.0),
                y: rng.random_range(0.0..50.0),
                delay: rng.random_range(0.0..6.0),
            })
            .collect();

        Self { fireworks, confetti, balloons, sparkles, shooting_stars }
    }
}
