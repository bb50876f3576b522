use crate::constants::*;

/// Replace non-finite values with 0.
pub fn sanitize(value: f32) -> f32 {
    if value.is_finite() { value } else { 0.0 }
}

fn clamp_unit(value: f32) -> f32 {
    sanitize(value).clamp(0.0, 1.0)
}

/// Progress of slide `index` (0..=1) for a global scroll progress.
pub fn slide_progress(index: usize, slide_count: usize, scroll_progress: f32) -> f32 {
    if !scroll_progress.is_finite() {
        return 0.0;
    }
    clamp_unit(scroll_progress * slide_count as f32 - index as f32 + 0.5)
}

/// Opacity for a slide progress. Reaches 1 at progress 0.75.
pub fn opacity(progress: f32) -> f32 {
    if !progress.is_finite() {
        return 0.0;
    }
    clamp_unit(progress * 2.0 - 0.5)
}

/// Vertical offset (render pixels, positive is down) and scale of a slide.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub offset_y: f32,
    pub scale: f32,
}

impl Transform {
    pub const HIDDEN: Transform = Transform { offset_y: HIDDEN_OFFSET, scale: HIDDEN_SCALE };
    pub const SETTLED: Transform = Transform { offset_y: 0.0, scale: 1.0 };
}

pub fn transform(progress: f32) -> Transform {
    let p = clamp_unit(progress);
    Transform {
        offset_y: (1.0 - p) * MAX_VISIBLE_OFFSET,
        scale: MIN_VISIBLE_SCALE + p * (1.0 - MIN_VISIBLE_SCALE),
    }
}

/// Target pose of a slide: opacity plus transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideVisual {
    pub opacity: f32,
    pub transform: Transform,
}

impl SlideVisual {
    pub const HIDDEN: SlideVisual = SlideVisual { opacity: 0.0, transform: Transform::HIDDEN };

    /// Pose for a slide given its visibility flag.
    pub fn target(index: usize, slide_count: usize, scroll_progress: f32, visible: bool) -> Self {
        if !visible {
            return Self::HIDDEN;
        }
        let progress = slide_progress(index, slide_count, scroll_progress);
        SlideVisual {
            opacity: opacity(progress),
            transform: transform(progress),
        }
    }
}
