use log::debug;
use rand::Rng;
use raylib::ease;

use crate::constants::TRANSITION_DURATION;
use crate::particles::Particles;
use crate::scroll::ScrollState;
use crate::slide::Slide;
use crate::transition::{SlideVisual, Transform, sanitize};
use crate::tween::Transition;
use crate::visibility::{IntersectionTracker, intersection_ratio};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    ScrollBy(f32),
    NavigateTo(usize),
    NextSlide,
    PreviousSlide,
    FirstSlide,
    LastSlide,
}

/// Eased presentation of one slide.
struct SlidePresenter {
    opacity: Transition,
    offset_y: Transition,
    scale: Transition,
}

impl SlidePresenter {
    fn new() -> Self {
        let hidden = SlideVisual::HIDDEN;
        Self {
            opacity: Transition::new(ease::cubic_out, hidden.opacity, TRANSITION_DURATION),
            offset_y: Transition::new(ease::cubic_out, hidden.transform.offset_y, TRANSITION_DURATION),
            scale: Transition::new(ease::cubic_out, hidden.transform.scale, TRANSITION_DURATION),
        }
    }

    fn update(&mut self, target: SlideVisual, dt: f32) {
        self.opacity.set_target(target.opacity);
        self.offset_y.set_target(target.transform.offset_y);
        self.scale.set_target(target.transform.scale);
        self.opacity.update(dt);
        self.offset_y.update(dt);
        self.scale.update(dt);
    }

    fn visual(&self) -> SlideVisual {
        SlideVisual {
            opacity: sanitize(self.opacity.value()).clamp(0.0, 1.0),
            transform: Transform {
                offset_y: sanitize(self.offset_y.value()),
                scale: sanitize(self.scale.value()),
            },
        }
    }
}

// Slides are stacked vertically, each exactly one viewport tall.
pub struct Slideshow {
    slides: &'static [Slide],
    scroll: ScrollState,
    tracker: IntersectionTracker,
    presenters: Vec<SlidePresenter>,
    particles: Particles,
    elapsed: f32,
}

impl Slideshow {
    pub fn new<R: Rng>(slides: &'static [Slide], viewport_height: f32, rng: &mut R) -> Self {
        let particles = Particles::generate(rng);
        debug!(
            "Seeded {} fireworks, {} confetti, {} balloons",
            particles.fireworks.len(),
            particles.confetti.len(),
            particles.balloons.len()
        );
        let mut slideshow = Self {
            slides,
            scroll: ScrollState::new(viewport_height, viewport_height * slides.len() as f32),
            tracker: IntersectionTracker::new(slides.len()),
            presenters: slides.iter().map(|_| SlidePresenter::new()).collect(),
            particles,
            elapsed: 0.0,
        };
        slideshow.observe();
        slideshow
    }

    pub fn slides(&self) -> &'static [Slide] {
        self.slides
    }

    pub fn particles(&self) -> &Particles {
        &self.particles
    }

    /// Seconds since the slideshow started.
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn active(&self) -> usize {
        self.tracker.active()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.tracker.is_visible(index)
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll.progress()
    }

    pub fn viewport_height(&self) -> f32 {
        self.scroll.viewport_height()
    }

    /// Top of slide `index` relative to the viewport.
    pub fn slide_top(&self, index: usize) -> f32 {
        index as f32 * self.scroll.viewport_height() - self.scroll.offset()
    }

    /// Pose the slide is heading to this frame.
    pub fn target_visual(&self, index: usize) -> SlideVisual {
        SlideVisual::target(index, self.slides.len(), self.scroll.progress(), self.tracker.is_visible(index))
    }

    /// Eased pose to draw.
    pub fn visual(&self, index: usize) -> SlideVisual {
        self.presenters.get(index).map_or(SlideVisual::HIDDEN, SlidePresenter::visual)
    }

    pub fn navigate_to(&mut self, index: usize) {
        if index >= self.slides.len() {
            return;
        }
        debug!("Navigating to slide {}", index);
        self.scroll.scroll_to(index as f32 * self.scroll.viewport_height());
        self.tracker.set_active(index);
    }

    pub fn handle(&mut self, command: Command) {
        let last = self.slides.len().saturating_sub(1);
        match command {
            Command::ScrollBy(delta) => self.scroll.scroll_by(delta),
            Command::NavigateTo(index) => self.navigate_to(index),
            Command::NextSlide => self.navigate_to((self.active() + 1).min(last)),
            Command::PreviousSlide => self.navigate_to(self.active().saturating_sub(1)),
            Command::FirstSlide => self.navigate_to(0),
            Command::LastSlide => self.navigate_to(last),
        }
    }

    pub fn update(&mut self, dt: f32) {
        let dt = sanitize(dt).max(0.0);
        self.elapsed += dt;
        self.scroll.update(dt);
        self.observe();

        for index in 0..self.presenters.len() {
            let target = self.target_visual(index);
            self.presenters[index].update(target, dt);
        }
    }

    fn observe(&mut self) {
        let height = self.scroll.viewport_height();
        let offset = self.scroll.offset();
        let ratios: Vec<f32> = (0..self.slides.len())
            .map(|i| intersection_ratio(i as f32 * height, height, offset, height))
            .collect();
        let previous = self.tracker.active();
        self.tracker.observe(&ratios);
        if self.tracker.active() != previous {
            debug!("Active slide {} -> {}", previous, self.tracker.active());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::*;
    use crate::slide::SLIDES;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    const FRAME: f32 = 1.0 / 60.0;

    fn slideshow() -> Slideshow {
        Slideshow::new(&SLIDES, RENDER_HEIGHT as f32, &mut StdRng::seed_from_u64(1))
    }

    fn run(show: &mut Slideshow, seconds: f32) {
        let frames = (seconds / FRAME).ceil() as usize;
        for _ in 0..frames {
            show.update(FRAME);
        }
    }

    #[test]
    fn test_starts_on_intro() {
        let show = slideshow();
        assert_eq!(show.active(), 0);
        assert!(show.is_visible(0));
        assert!(!show.is_visible(1));
        assert_eq!(show.scroll_progress(), 0.0);
    }

    #[test]
    fn test_navigation_marks_target_active() {
        let mut show = slideshow();
        for target in [3, 6, 1, 0, 5] {
            show.handle(Command::NavigateTo(target));
            assert_eq!(show.active(), target);
            run(&mut show, 1.0);
            assert_eq!(show.active(), target);
            assert_eq!(show.slide_top(target), 0.0);
        }
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let mut show = slideshow();
        show.handle(Command::NavigateTo(SLIDES.len()));
        run(&mut show, 1.0);
        assert_eq!(show.active(), 0);
    }

    #[test]
    fn test_next_and_previous_stop_at_the_ends() {
        let mut show = slideshow();
        show.handle(Command::PreviousSlide);
        assert_eq!(show.active(), 0);
        show.handle(Command::LastSlide);
        run(&mut show, 1.0);
        show.handle(Command::NextSlide);
        run(&mut show, 1.0);
        assert_eq!(show.active(), SLIDES.len() - 1);
        show.handle(Command::PreviousSlide);
        run(&mut show, 1.0);
        assert_eq!(show.active(), SLIDES.len() - 2);
    }

    #[test]
    fn test_scroll_reveals_middle_slide() {
        let mut show = slideshow();
        show.handle(Command::NavigateTo(3));
        run(&mut show, 2.0);
        assert_eq!(show.scroll_progress(), 0.5);
        let visual = show.visual(3);
        assert!((visual.opacity - 1.0).abs() < 1e-4);
        assert!((visual.transform.scale - 1.0).abs() < 1e-4);
        assert_eq!(show.visual(0), SlideVisual::HIDDEN);
    }

    #[test]
    fn test_eased_visuals_stay_in_range() {
        let mut show = slideshow();
        for step in 0..400 {
            if step % 37 == 0 {
                show.handle(Command::ScrollBy(if step % 2 == 0 { 900.0 } else { -500.0 }));
            }
            show.update(FRAME);
            for i in 0..SLIDES.len() {
                let v = show.visual(i);
                assert!((0.0..=1.0).contains(&v.opacity));
                assert!((0.0..=HIDDEN_OFFSET).contains(&v.transform.offset_y));
                assert!((HIDDEN_SCALE..=1.0).contains(&v.transform.scale));
            }
        }
    }

    #[test]
    fn test_single_viewport_falls_back_to_zero() {
        let mut show = Slideshow::new(&SLIDES[..1], 1080.0, &mut StdRng::seed_from_u64(3));
        assert!(show.scroll_progress().is_nan());
        run(&mut show, 1.0);
        let visual = show.visual(0);
        assert_eq!(visual.opacity, 0.0);
        assert!(visual.transform.offset_y.is_finite());
    }
}
