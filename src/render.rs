use std::borrow::Cow;

use log::{info, warn};
use raylib::prelude::*;

use crate::config::Config;
use crate::constants::*;
use crate::effects::{self, Pose};
use crate::nav::{DOT_ACTIVE_SCALE, DOT_RADIUS, NavBar};
use crate::slide::{Slide, SlideKind};
use crate::slideshow::Slideshow;
use crate::texture_loader::load_texture_with_exif_rotation;

const RW: f32 = RENDER_WIDTH as f32;
const RH: f32 = RENDER_HEIGHT as f32;

const PHOTO_BOX: (f32, f32) = (900.0, 500.0);
const TEXT_WIDTH: f32 = 1200.0;
const CARD_WIDTH: f32 = 1300.0;

// --- Window Placement ---

/// Placement of the render texture inside the window, preserving aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Letterbox {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Letterbox {
    pub fn new(screen_width: f32, screen_height: f32) -> Self {
        let scale = (screen_width / RW).min(screen_height / RH).max(0.0);
        Self {
            x: (screen_width - RW * scale) * 0.5,
            y: (screen_height - RH * scale) * 0.5,
            scale,
        }
    }

    pub fn dest(&self) -> Rectangle {
        Rectangle::new(self.x, self.y, RW * self.scale, RH * self.scale)
    }

    /// Map a window point into render space; `None` outside the picture.
    pub fn to_render_space(&self, point: Vector2) -> Option<Vector2> {
        if self.scale <= 0.0 {
            return None;
        }
        let x = (point.x - self.x) / self.scale;
        let y = (point.y - self.y) / self.scale;
        if (0.0..RW).contains(&x) && (0.0..RH).contains(&y) { Some(Vector2::new(x, y)) } else { None }
    }
}

pub fn rgb(hex: u32) -> Color {
    Color::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8, 255)
}

fn fade(color: Color, alpha: f32) -> Color {
    let alpha = crate::transition::sanitize(alpha).clamp(0.0, 1.0);
    Color::new(color.r, color.g, color.b, (color.a as f32 * alpha) as u8)
}

fn rainbow(time: f32, period: f32) -> Color {
    Color::color_from_hsv(effects::rainbow_hue(time, period), 0.55, 0.85)
}

/// Size of a `width` x `height` image scaled to fit inside a box.
pub fn fit(width: f32, height: f32, box_width: f32, box_height: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (box_width, box_height);
    }
    let scale = (box_width / width).min(box_height / height);
    (width * scale, height * scale)
}

/// Number of text columns fitting in `max_width` pixels.
pub fn wrap_columns(max_width: f32, average_char_width: f32) -> usize {
    if average_char_width <= 0.0 {
        return 1;
    }
    ((max_width / average_char_width).floor() as usize).max(1)
}

fn average_char_width(d: &RaylibDrawHandle, font_size: i32) -> f32 {
    const SAMPLE: &str = "the quick brown fox jumps over the lazy dog";
    d.measure_text(SAMPLE, font_size) as f32 / SAMPLE.len() as f32
}

pub fn wrap(text: &str, columns: usize) -> Vec<Cow<'_, str>> {
    textwrap::wrap(text, columns)
}

/// Where one slide's content block is drawn this frame.
struct Frame {
    cx: f32,
    cy: f32,
    scale: f32,
    opacity: f32,
}

impl Frame {
    fn y(&self, rel: f32) -> f32 {
        self.cy + rel * self.scale
    }

    fn x(&self, rel: f32) -> f32 {
        self.cx + rel * self.scale
    }

    fn font(&self, size: f32) -> i32 {
        (size * self.scale).round().max(1.0) as i32
    }

    fn text(&self, d: &mut RaylibDrawHandle, text: &str, rel_y: f32, size: f32, color: Color) {
        let font_size = self.font(size);
        let width = d.measure_text(text, font_size);
        d.draw_text(
            text,
            (self.cx - width as f32 * 0.5) as i32,
            (self.y(rel_y) - font_size as f32 * 0.5) as i32,
            font_size,
            fade(color, self.opacity),
        );
    }

    /// Wrapped paragraph whose first line starts at `rel_y`.
    fn paragraph(&self, d: &mut RaylibDrawHandle, text: &str, rel_y: f32, size: f32, color: Color) {
        let font_size = self.font(size);
        let lines = wrap(text, wrap_columns(TEXT_WIDTH * self.scale, average_char_width(d, font_size)));
        let line_height = size * 1.5;
        for (i, line) in lines.iter().enumerate() {
            self.text(d, line, rel_y + line_height * (i as f32 + 0.5), size, color);
        }
    }

    fn rect(&self, rel_x: f32, rel_y: f32, width: f32, height: f32) -> Rectangle {
        Rectangle::new(self.x(rel_x), self.y(rel_y), width * self.scale, height * self.scale)
    }
}

// --- Icons ---

fn draw_sparkle(d: &mut RaylibDrawHandle, center: Vector2, size: f32, rotation: f32, color: Color) {
    let thickness = (size * 0.18).max(1.0);
    for angle in [0.0, 90.0] {
        d.draw_rectangle_pro(
            Rectangle::new(center.x, center.y, size * 2.0, thickness),
            Vector2::new(size, thickness * 0.5),
            rotation + angle,
            color,
        );
    }
    for angle in [45.0, 135.0] {
        d.draw_rectangle_pro(
            Rectangle::new(center.x, center.y, size, thickness * 0.6),
            Vector2::new(size * 0.5, thickness * 0.3),
            rotation + angle,
            color,
        );
    }
    d.draw_circle_v(center, thickness, color);
}

fn draw_heart(d: &mut RaylibDrawHandle, center: Vector2, size: f32, color: Color) {
    let r = size * 0.5;
    d.draw_circle_v(Vector2::new(center.x - r * 0.5, center.y - r * 0.25), r * 0.55, color);
    d.draw_circle_v(Vector2::new(center.x + r * 0.5, center.y - r * 0.25), r * 0.55, color);
    d.draw_poly(Vector2::new(center.x, center.y + r * 0.2), 4, r * 0.85, 0.0, color);
}

fn draw_gift(d: &mut RaylibDrawHandle, center: Vector2, size: f32, color: Color, ribbon: Color) {
    let half = size * 0.5;
    d.draw_rectangle_rec(Rectangle::new(center.x - half, center.y - half * 0.5, size, size * 0.75), color);
    d.draw_rectangle_rec(Rectangle::new(center.x - half * 1.1, center.y - half * 0.8, size * 1.1, size * 0.2), color);
    d.draw_rectangle_rec(Rectangle::new(center.x - size * 0.06, center.y - half * 0.8, size * 0.12, size * 1.05), ribbon);
}

pub struct Renderer {
    photos: Vec<Option<Texture2D>>,
    nav: NavBar,
}

impl Renderer {
    /// Load the photos the slides reference; failures fall back to a placeholder.
    pub fn load(rl: &mut RaylibHandle, thread: &RaylibThread, config: &Config, slides: &[Slide]) -> Self {
        let photos = slides
            .iter()
            .map(|slide| {
                let file_name = slide.image?;
                let path = config.image_path(file_name);
                match load_texture_with_exif_rotation(rl, thread, &path) {
                    Ok(texture) => {
                        info!("Loaded {:?} ({}x{})", path, texture.width(), texture.height());
                        Some(texture)
                    }
                    Err(e) => {
                        warn!("{}; showing placeholder", e);
                        None
                    }
                }
            })
            .collect();
        Self { photos, nav: NavBar::new(slides.len()) }
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn draw(&self, d: &mut RaylibDrawHandle, show: &Slideshow) {
        let time = show.elapsed();
        d.clear_background(rgb(BACKGROUND_TOP));
        d.draw_rectangle_gradient_v(0, 0, RENDER_WIDTH, RENDER_HEIGHT, rgb(BACKGROUND_TOP), rgb(BACKGROUND_BOTTOM));

        for (index, slide) in show.slides().iter().enumerate() {
            let top = show.slide_top(index);
            let height = show.viewport_height();
            if top >= RH || top + height <= 0.0 {
                continue;
            }
            if !show.is_visible(index) && show.visual(index).opacity <= 0.0 {
                continue;
            }
            self.draw_slide(d, show, index, slide, top, time);
        }

        self.draw_particles(d, show, time);
        self.draw_nav(d, show.active());
        draw_scrollbar(d, show);
    }

    fn draw_slide(&self, d: &mut RaylibDrawHandle, show: &Slideshow, index: usize, slide: &Slide, top: f32, time: f32) {
        let visual = show.visual(index);
        let height = show.viewport_height();

        // Faint radial tint behind every slide
        d.draw_circle_gradient(
            (RW * 0.5) as i32,
            (top + height * 0.5) as i32,
            RW * 0.35,
            fade(rgb(PRIMARY), 0.06),
            fade(rgb(PRIMARY), 0.0),
        );

        let frame = Frame {
            cx: RW * 0.5,
            cy: top + height * 0.5 + visual.transform.offset_y,
            scale: visual.transform.scale,
            opacity: visual.opacity,
        };

        match slide.kind {
            SlideKind::Intro => self.draw_intro(d, &frame, slide, time),
            SlideKind::Photo => self.draw_photo(d, &frame, slide, index),
            SlideKind::Message | SlideKind::Memory => self.draw_message(d, &frame, slide, time),
            SlideKind::Finale => self.draw_finale(d, &frame, slide, time),
        }

        for dot in 0..FLOATING_DOT_COUNT {
            let pose = effects::floating_dot(dot, time, RW, height, visual.opacity);
            let color = fade(rainbow(time + dot as f32, 4.0), 0.3 * pose.opacity);
            d.draw_circle_v(Vector2::new(pose.x, top + pose.y), 4.0, color);
        }
    }

    fn draw_intro(&self, d: &mut RaylibDrawHandle, frame: &Frame, slide: &Slide, time: f32) {
        let pulse = effects::pulse(time * 2.0);
        draw_sparkle(d, Vector2::new(frame.cx, frame.y(-250.0)), 40.0 * frame.scale, 0.0,
            fade(rainbow(time, 2.0), frame.opacity * pulse));

        if let Some(title) = slide.title {
            let bob = effects::gentle_bounce(time, 3.0);
            frame.text(d, title, -130.0 + bob, 110.0, rainbow(time, 3.0));
        }
        if let Some(content) = slide.content {
            frame.text(d, content, 10.0, 40.0, rgb(MUTED));
        }

        let icons_y = 120.0;
        let size = 40.0 * frame.scale;
        let gift_y = frame.y(icons_y) + effects::bounce(time, 0.0, size);
        draw_gift(d, Vector2::new(frame.x(-80.0), gift_y), size, fade(rgb(ACCENT), frame.opacity),
            fade(rgb(SECONDARY), frame.opacity));
        let heart_y = frame.y(icons_y) + effects::bounce(time, 0.2, size);
        draw_heart(d, Vector2::new(frame.x(0.0), heart_y), size, fade(rgb(SECONDARY), frame.opacity));
        let sparkle_y = frame.y(icons_y) + effects::bounce(time, 0.4, size);
        draw_sparkle(d, Vector2::new(frame.x(80.0), sparkle_y), size * 0.6, 0.0,
            fade(rainbow(time, 3.0), frame.opacity));
    }

    fn draw_photo(&self, d: &mut RaylibDrawHandle, frame: &Frame, slide: &Slide, index: usize) {
        let photo_center = -150.0;
        let (box_w, box_h) = PHOTO_BOX;

        let (w, h) = match self.photos.get(index).and_then(Option::as_ref) {
            Some(texture) => fit(texture.width() as f32, texture.height() as f32, box_w, box_h),
            None => (box_h * 4.0 / 3.0, box_h),
        };
        let dest = frame.rect(-w * 0.5, photo_center - h * 0.5, w, h);

        // Glow
        let glow = Rectangle::new(dest.x - 24.0, dest.y - 24.0, dest.width + 48.0, dest.height + 48.0);
        d.draw_rectangle_rounded(glow, 0.12, 12, fade(rgb(PRIMARY), 0.15 * frame.opacity));

        match self.photos.get(index).and_then(Option::as_ref) {
            Some(texture) => {
                d.draw_texture_pro(
                    texture,
                    Rectangle::new(0.0, 0.0, texture.width() as f32, texture.height() as f32),
                    dest,
                    Vector2::new(0.0, 0.0),
                    0.0,
                    fade(Color::WHITE, frame.opacity),
                );
            }
            None => {
                d.draw_rectangle_rounded(dest, 0.06, 12, fade(Color::new(226, 224, 236, 255), frame.opacity));
                let center = Vector2::new(dest.x + dest.width * 0.5, dest.y + dest.height * 0.5);
                d.draw_circle_v(Vector2::new(center.x + dest.width * 0.2, center.y - dest.height * 0.2),
                    dest.height * 0.08, fade(Color::new(200, 197, 214, 255), frame.opacity));
                d.draw_poly(Vector2::new(center.x - dest.width * 0.1, center.y + dest.height * 0.15), 3,
                    dest.height * 0.25, -90.0, fade(Color::new(200, 197, 214, 255), frame.opacity));
            }
        }

        let text_top = photo_center + box_h * 0.5 + 30.0;
        if let Some(title) = slide.title {
            frame.text(d, title, text_top + 30.0, 64.0, rgb(PRIMARY));
        }
        if let Some(content) = slide.content {
            frame.paragraph(d, content, text_top + 80.0, 28.0, rgb(MUTED));
        }
    }

    fn draw_message(&self, d: &mut RaylibDrawHandle, frame: &Frame, slide: &Slide, time: f32) {
        let body_size = 30.0;
        let line_height = body_size * 1.5;
        // Estimate the card height from a wrap at the unscaled font size
        let average = average_char_width(d, body_size as i32);
        let lines = slide.content.map_or(0, |c| wrap(c, wrap_columns(TEXT_WIDTH, average)).len());
        let card_height = 100.0 + 60.0 + lines as f32 * line_height + 80.0;
        let card_top = -card_height * 0.5 - 40.0;

        let glow = frame.rect(-CARD_WIDTH * 0.5 - 32.0, card_top - 32.0, CARD_WIDTH + 64.0, card_height + 64.0);
        d.draw_rectangle_rounded(glow, 0.2, 16, fade(rgb(ACCENT), 0.08 * frame.opacity));
        let card = frame.rect(-CARD_WIDTH * 0.5, card_top, CARD_WIDTH, card_height);
        d.draw_rectangle_rounded(card, 0.08, 16, fade(Color::new(255, 255, 255, 220), frame.opacity));

        if let Some(title) = slide.title {
            frame.text(d, title, card_top + 90.0, 64.0, rgb(PRIMARY));
        }
        if let Some(content) = slide.content {
            frame.paragraph(d, content, card_top + 160.0, body_size, rgb(FOREGROUND));
        }

        let heart_y = frame.y(card_top + card_height + 70.0);
        draw_heart(d, Vector2::new(frame.cx, heart_y), 48.0 * frame.scale,
            fade(rgb(ACCENT), frame.opacity * effects::pulse(time)));
    }

    fn draw_finale(&self, d: &mut RaylibDrawHandle, frame: &Frame, slide: &Slide, time: f32) {
        let glow = 0.5 + 0.5 * (1.0 - effects::pulse(time)) * 2.0;
        d.draw_circle_gradient(
            frame.cx as i32,
            frame.y(-60.0) as i32,
            520.0 * frame.scale,
            fade(rgb(ACCENT), 0.25 * glow * frame.opacity),
            fade(rgb(SECONDARY), 0.0),
        );

        if let Some(title) = slide.title {
            frame.text(d, title, -140.0 + effects::gentle_bounce(time, 2.0), 96.0, rainbow(time, 3.0));
        }
        if let Some(content) = slide.content {
            frame.paragraph(d, content, -60.0, 40.0, rgb(FOREGROUND));
        }

        for i in 0..5 {
            let size = 28.0 * frame.scale;
            let x = frame.x((i as f32 - 2.0) * 90.0);
            let y = frame.y(200.0) + effects::bounce(time, i as f32 * 0.1, size * 2.0);
            draw_sparkle(d, Vector2::new(x, y), size, 0.0, fade(rainbow(time + i as f32 * 0.1, 2.0), frame.opacity));
        }
    }

    fn draw_particles(&self, d: &mut RaylibDrawHandle, show: &Slideshow, time: f32) {
        let particles = show.particles();

        for balloon in &particles.balloons {
            if let Some(pose) = effects::balloon(balloon, time, RW, RH) {
                draw_balloon(d, &pose, rgb(balloon.color));
            }
        }

        for star in &particles.shooting_stars {
            if let Some(pose) = effects::shooting_star(star, time, RW, RH) {
                let head = Vector2::new(pose.x, pose.y);
                d.draw_circle_v(head, 6.0, fade(rgb(0xfeca57), 0.35 * pose.opacity));
                d.draw_circle_v(head, 2.0, fade(Color::WHITE, pose.opacity));
                d.draw_circle_v(Vector2::new(head.x - 20.0, head.y - 5.0), 1.5, fade(Color::WHITE, 0.8 * pose.opacity));
                d.draw_circle_v(Vector2::new(head.x - 40.0, head.y - 10.0), 1.0, fade(rgb(0xfeca57), 0.6 * pose.opacity));
            }
        }

        for piece in &particles.confetti {
            if let Some(pose) = effects::confetti(piece, time, RW, RH) {
                draw_pose_rect(d, &pose, 12.0, 12.0, rgb(piece.color));
            }
        }

        for sparkle in &particles.sparkles {
            if let Some(pose) = effects::sparkle(sparkle, time, RW, RH) {
                draw_sparkle(d, Vector2::new(pose.x, pose.y), 14.0 * pose.scale, pose.rotation,
                    fade(rgb(0xfeca57), pose.opacity));
            }
        }

        for firework in &particles.fireworks {
            if let Some(pose) = effects::firework_rocket(firework, time, RW, RH) {
                let (w, h) = (4.0 * pose.scale, 20.0 * pose.scale);
                d.draw_rectangle_gradient_v(
                    (pose.x - w * 0.5) as i32,
                    (pose.y - h * 0.5) as i32,
                    w.ceil() as i32,
                    h.ceil() as i32,
                    fade(rgb(0xfeca57), pose.opacity),
                    fade(rgb(0xff6b6b), pose.opacity),
                );
            }
            if let Some(pose) = effects::firework_explosion(firework, time, RW, RH) {
                let radius = 15.0 * pose.scale;
                if radius > 0.5 {
                    d.draw_circle_gradient(pose.x as i32, pose.y as i32, radius,
                        fade(rgb(0xff6b6b), pose.opacity), fade(rgb(0x4ecdc4), 0.0));
                    d.draw_circle_lines(pose.x as i32, pose.y as i32, radius * 0.6, fade(rgb(0xfeca57), pose.opacity));
                }
            }
        }
    }

    fn draw_nav(&self, d: &mut RaylibDrawHandle, active: usize) {
        d.draw_rectangle_rounded(self.nav.card(), 1.0, 12, Color::new(255, 255, 255, 204));
        for index in 0..self.nav.count() {
            let center = self.nav.dot_center(index);
            if index == active {
                d.draw_circle_v(center, DOT_RADIUS * DOT_ACTIVE_SCALE, rgb(PRIMARY));
            } else {
                d.draw_circle_v(center, DOT_RADIUS, fade(rgb(MUTED), 0.3));
            }
        }
    }
}

/// Thin scrollbar thumb along the right edge.
fn draw_scrollbar(d: &mut RaylibDrawHandle, show: &Slideshow) {
    let pages = show.slides().len().max(1) as f32;
    let thumb = RH / pages;
    let progress = crate::transition::sanitize(show.scroll_progress()).clamp(0.0, 1.0);
    let rect = Rectangle::new(RW - 8.0, (RH - thumb) * progress, 4.0, thumb);
    d.draw_rectangle_rounded(rect, 1.0, 4, fade(rgb(PRIMARY), 0.3));
}

fn draw_pose_rect(d: &mut RaylibDrawHandle, pose: &Pose, width: f32, height: f32, color: Color) {
    d.draw_rectangle_pro(
        Rectangle::new(pose.x, pose.y, width * pose.scale, height * pose.scale),
        Vector2::new(width * pose.scale * 0.5, height * pose.scale * 0.5),
        pose.rotation,
        fade(color, pose.opacity),
    );
}

fn draw_balloon(d: &mut RaylibDrawHandle, pose: &Pose, color: Color) {
    let (rx, ry) = (24.0, 32.0);
    let center = Vector2::new(pose.x + rx, pose.y + ry);
    // sway the string with the balloon's tilt
    let sway = pose.rotation.to_radians().sin() * 40.0;
    let knot = Vector2::new(center.x, center.y + ry);
    d.draw_line_ex(knot, Vector2::new(knot.x - sway, knot.y + 36.0), 1.5, Color::new(156, 163, 175, 255));
    d.draw_ellipse(center.x as i32, center.y as i32, rx, ry, color);
    d.draw_poly(Vector2::new(knot.x, knot.y + 2.0), 3, 6.0, 90.0, color);
    d.draw_ellipse((center.x - rx * 0.35) as i32, (center.y - ry * 0.4) as i32, rx * 0.2, ry * 0.25,
        Color::new(255, 255, 255, 90));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letterbox_matches_aspect() {
        let lb = Letterbox::new(960.0, 540.0);
        assert_eq!(lb, Letterbox { x: 0.0, y: 0.0, scale: 0.5 });

        let tall = Letterbox::new(960.0, 1000.0);
        assert_eq!(tall.scale, 0.5);
        assert_eq!(tall.y, (1000.0 - 540.0) * 0.5);
    }

    #[test]
    fn test_letterbox_maps_points() {
        let lb = Letterbox::new(960.0, 1000.0);
        let p = lb.to_render_space(Vector2::new(480.0, 230.0 + 270.0)).unwrap();
        assert_eq!((p.x, p.y), (960.0, 540.0));
        assert!(lb.to_render_space(Vector2::new(480.0, 10.0)).is_none());
        assert!(Letterbox::new(0.0, 0.0).to_render_space(Vector2::new(0.0, 0.0)).is_none());
    }

    #[test]
    fn test_fit_preserves_aspect() {
        let (w, h) = fit(4000.0, 3000.0, 900.0, 500.0);
        assert!((w - 500.0 * 4.0 / 3.0).abs() < 1e-2 && (h - 500.0).abs() < 1e-2);
        assert_eq!(fit(1800.0, 500.0, 900.0, 500.0), (900.0, 250.0));
        assert_eq!(fit(0.0, 10.0, 900.0, 500.0), (900.0, 500.0));
    }

    #[test]
    fn test_wrap_respects_columns() {
        let columns = wrap_columns(300.0, 15.0);
        assert_eq!(columns, 20);
        for line in wrap(crate::slide::SLIDES[2].content.unwrap(), columns) {
            assert!(line.chars().count() <= columns, "{line}");
        }
        assert_eq!(wrap_columns(10.0, 0.0), 1);
    }

    #[test]
    fn test_rgb_unpacks_hex() {
        let c = rgb(0xff6b6b);
        assert_eq!((c.r, c.g, c.b, c.a), (0xff, 0x6b, 0x6b, 255));
        assert_eq!(fade(c, f32::NAN).a, 0);
        assert_eq!(fade(c, 0.5).a, 127);
    }
}
