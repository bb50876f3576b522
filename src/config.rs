use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::Parser;

use crate::constants::*;

#[derive(Parser, Debug)]
#[command(name = "birthday-slideshow", version, about = WINDOW_DESCRIPTION)]
pub struct Args {
    /// Directory holding the slide photos (1.jpg, 2.jpg, 3.jpg)
    #[arg(long, default_value = "assets")]
    pub assets: PathBuf,

    /// Initial window width in pixels
    #[arg(long, default_value_t = RENDER_WIDTH / 2)]
    pub width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = RENDER_HEIGHT / 2)]
    pub height: i32,

    /// Target frames per second
    #[arg(long, default_value_t = FPS)]
    pub fps: u32,

    /// Seed for reproducible particle placement
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub assets: PathBuf,
    pub width: i32,
    pub height: i32,
    pub fps: u32,
    pub seed: Option<u64>,
}

impl TryFrom<Args> for Config {
    type Error = anyhow::Error;

    fn try_from(args: Args) -> Result<Self> {
        if args.width <= 0 || args.height <= 0 {
            bail!("window size must be positive, got {}x{}", args.width, args.height);
        }
        if args.fps == 0 {
            bail!("fps must be greater than zero");
        }
        Ok(Config {
            assets: args.assets,
            width: args.width,
            height: args.height,
            fps: args.fps,
            seed: args.seed,
        })
    }
}

impl Config {
    pub fn from_args() -> Result<Self> {
        Config::try_from(Args::parse())
    }

    pub fn image_path(&self, file_name: &str) -> PathBuf {
        self.assets.join(file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(argv: &[&str]) -> Result<Config> {
        Config::try_from(Args::try_parse_from(argv)?)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&["birthday-slideshow"]).unwrap();
        assert_eq!(
            config,
            Config {
                assets: PathBuf::from("assets"),
                width: 960,
                height: 540,
                fps: 60,
                seed: None,
            }
        );
        assert_eq!(config.image_path("1.jpg"), PathBuf::from("assets").join("1.jpg"));
    }

    #[test]
    fn test_overrides() {
        let config = parse(&["birthday-slideshow", "--assets", "/tmp/pics", "--fps", "30", "--seed", "9"]).unwrap();
        assert_eq!(config.assets, PathBuf::from("/tmp/pics"));
        assert_eq!(config.fps, 30);
        assert_eq!(config.seed, Some(9));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(parse(&["birthday-slideshow", "--fps", "0"]).is_err());
        assert!(parse(&["birthday-slideshow", "--width", "0"]).is_err());
        assert!(parse(&["birthday-slideshow", "--height", "nope"]).is_err());
    }
}
