pub const RENDER_WIDTH: i32 = 1920;           // Width of the render texture
pub const RENDER_HEIGHT: i32 = 1080;          // Height of the render texture
pub const FPS: u32 = 60;                      // Default frames per second
pub const MAX_FRAME_TIME: f32 = 0.1;          // Clamp for long frames (window drag, breakpoint)

pub const WINDOW_TITLE: &str = "Birthday Celebration";
pub const WINDOW_DESCRIPTION: &str = "A magical birthday slideshow";

pub const SCROLL_DURATION: f32 = 0.6;         // Smooth scroll duration (seconds)
pub const TRANSITION_DURATION: f32 = 0.5;     // Opacity/transform chase duration (seconds)
pub const WHEEL_STEP: f32 = 120.0;            // Pixels scrolled per wheel notch
pub const KEY_STEP: f32 = 80.0;               // Pixels scrolled per arrow key press

// Intersection observer thresholds and the ratio a slide needs to become active
pub const INTERSECTION_THRESHOLDS: [f32; 5] = [0.1, 0.3, 0.5, 0.7, 0.9];
pub const ACTIVE_RATIO: f32 = 0.3;

// Slide pose when not intersecting the viewport
pub const HIDDEN_OFFSET: f32 = 40.0;
pub const HIDDEN_SCALE: f32 = 0.9;

// Slide pose range while visible
pub const MAX_VISIBLE_OFFSET: f32 = 20.0;
pub const MIN_VISIBLE_SCALE: f32 = 0.95;

pub const FIREWORK_COUNT: usize = 8;
pub const CONFETTI_COUNT: usize = 50;
pub const BALLOON_COUNT: usize = 12;
pub const SPARKLE_COUNT: usize = 20;
pub const SHOOTING_STAR_COUNT: usize = 6;
pub const FLOATING_DOT_COUNT: usize = 6;

pub const PARTICLE_PALETTE: [u32; 6] = [0xff6b6b, 0x4ecdc4, 0x45b7d1, 0x96ceb4, 0xfeca57, 0xff9ff3];

pub const PRIMARY: u32 = 0x7877c6;
pub const ACCENT: u32 = 0xff6b6b;
pub const SECONDARY: u32 = 0x4ecdc4;
pub const FOREGROUND: u32 = 0x2d2a40;
pub const MUTED: u32 = 0x6b6880;
pub const BACKGROUND_TOP: u32 = 0xf6f5fc;
pub const BACKGROUND_BOTTOM: u32 = 0xeceaf8;
