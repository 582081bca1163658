use clap::Parser;
use glfw3::{ClientApi, OpenGlProfile, WindowHint};
use log::LevelFilter;

/// Oldest context the shaders are written for.
const MIN_GL_VERSION: (u8, u8) = (3, 3);

#[derive(Debug, Clone, Parser)]
#[command(
    name = "hello-triangle",
    about = "Draw a triangle with OpenGL entry points resolved through GLFW"
)]
pub struct Config {
    /// Window width in screen coordinates
    #[arg(long, default_value_t = 800, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Window height in screen coordinates
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    #[arg(long, default_value = "Hello Triangle")]
    pub title: String,

    /// Requested OpenGL major version
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(3..=4))]
    pub gl_major: u8,

    /// Requested OpenGL minor version
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=6))]
    pub gl_minor: u8,

    /// Frames to wait between buffer swaps; 0 disables vsync
    #[arg(long, default_value_t = 1)]
    pub swap_interval: i32,

    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

impl Config {
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.gl_version() >= MIN_GL_VERSION,
            "OpenGL {}.{} requested, at least {}.{} is required",
            self.gl_major,
            self.gl_minor,
            MIN_GL_VERSION.0,
            MIN_GL_VERSION.1
        );
        Ok(())
    }

    pub fn gl_version(&self) -> (u8, u8) {
        (self.gl_major, self.gl_minor)
    }

    /// GLSL `#version` matching the requested context, e.g. `410` for 4.1.
    pub fn glsl_version(&self) -> u32 {
        u32::from(self.gl_major) * 100 + u32::from(self.gl_minor) * 10
    }

    pub fn window_hints(&self) -> Vec<WindowHint> {
        vec![
            WindowHint::ClientApi(ClientApi::OpenGl),
            WindowHint::ContextVersionMajor(i32::from(self.gl_major)),
            WindowHint::ContextVersionMinor(i32::from(self.gl_minor)),
            WindowHint::OpenGlProfile(OpenGlProfile::Core),
            // macOS only hands out core contexts that are forward-compatible
            WindowHint::OpenGlForwardCompat(cfg!(target_os = "macos")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Config, clap::Error> {
        Config::try_parse_from(std::iter::once("hello-triangle").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!((800, 600), (config.width, config.height));
        assert_eq!("Hello Triangle", config.title);
        assert_eq!((4, 1), config.gl_version());
        assert_eq!(1, config.swap_interval);
        assert_eq!(LevelFilter::Info, config.log_level);
        config.validate().unwrap();
    }

    #[test]
    fn overrides() {
        let config = parse(&[
            "--width",
            "1024",
            "--height",
            "768",
            "--title",
            "tri",
            "--gl-major",
            "3",
            "--gl-minor",
            "3",
            "--log-level",
            "trace",
        ])
        .unwrap();
        assert_eq!((1024, 768), (config.width, config.height));
        assert_eq!("tri", config.title);
        assert_eq!((3, 3), config.gl_version());
        assert_eq!(LevelFilter::Trace, config.log_level);
    }

    #[test]
    fn rejects_empty_window() {
        assert!(parse(&["--width", "0"]).is_err());
        assert!(parse(&["--height", "-5"]).is_err());
    }

    #[test]
    fn rejects_old_contexts() {
        assert!(parse(&["--gl-major", "2"]).is_err());
        let config = parse(&["--gl-major", "3", "--gl-minor", "2"]).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn glsl_version_follows_context() {
        assert_eq!(410, parse(&[]).unwrap().glsl_version());
        let config = parse(&["--gl-major", "3", "--gl-minor", "3"]).unwrap();
        assert_eq!(330, config.glsl_version());
    }

    #[test]
    fn hints_request_core_context() {
        let hints = parse(&["--gl-minor", "5"]).unwrap().window_hints();
        assert!(hints.contains(&WindowHint::ClientApi(ClientApi::OpenGl)));
        assert!(hints.contains(&WindowHint::ContextVersionMajor(4)));
        assert!(hints.contains(&WindowHint::ContextVersionMinor(5)));
        assert!(hints.contains(&WindowHint::OpenGlProfile(OpenGlProfile::Core)));
    }
}
