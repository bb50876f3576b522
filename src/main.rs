use anyhow::{Result, anyhow};
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use raylib::prelude::*;

mod config;
mod constants;
mod effects;
mod error;
mod input;
mod keyframes;
mod nav;
mod particles;
mod render;
mod scroll;
mod slide;
mod slideshow;
mod texture_loader;
mod transition;
mod tween;
mod visibility;

use crate::config::Config;
use crate::constants::*;
use crate::render::{Letterbox, Renderer};
use crate::slide::SLIDES;
use crate::slideshow::Slideshow;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::from_args()?;
    info!("{}: {}", WINDOW_TITLE, WINDOW_DESCRIPTION);
    info!("Assets directory: {:?}", config.assets);

    let (mut rl, thread) = raylib::init()
        .size(config.width, config.height)
        .title(WINDOW_TITLE)
        .vsync()
        .resizable()
        .build();
    rl.set_target_fps(config.fps);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);

    let renderer = Renderer::load(&mut rl, &thread, &config, &SLIDES);

    let mut slideshow = match config.seed {
        Some(seed) => Slideshow::new(&SLIDES, RENDER_HEIGHT as f32, &mut StdRng::seed_from_u64(seed)),
        None => Slideshow::new(&SLIDES, RENDER_HEIGHT as f32, &mut rand::rng()),
    };

    let mut framebuffer = rl
        .load_render_texture(&thread, RENDER_WIDTH as u32, RENDER_HEIGHT as u32)
        .map_err(|e| anyhow!("failed to create render texture: {}", e))?;

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(MAX_FRAME_TIME);

        let letterbox = Letterbox::new(rl.get_screen_width() as f32, rl.get_screen_height() as f32);
        for command in input::poll_commands(&rl, renderer.nav(), &letterbox) {
            slideshow.handle(command);
        }
        slideshow.update(dt);

        // --- Render into the fixed size framebuffer ---
        rl.draw_texture_mode(&thread, &mut framebuffer, |mut tmd| {
            let mut d = tmd.begin_drawing(&thread);
            renderer.draw(&mut d, &slideshow);
        });

        // --- Scale it into the window, render textures are stored upside down ---
        let mut d = rl.begin_drawing(&thread);
        d.clear_background(Color::BLACK);
        d.draw_texture_pro(
            &framebuffer,
            Rectangle::new(0.0, 0.0, framebuffer.width() as f32, -(framebuffer.height() as f32)),
            letterbox.dest(),
            Vector2::new(0.0, 0.0),
            0.0,
            Color::WHITE,
        );
    }

    info!("Window closed");
    Ok(())
}
