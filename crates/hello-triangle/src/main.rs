use anyhow::{anyhow, Context};
use clap::Parser;
use glfw3::{Action, Glfw, InitHint, Key, Window, WindowEvent};

mod config;
mod loader;
mod logger;
mod renderer;
mod shader;

use config::Config;
use renderer::Triangle;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    logger::init(config.log_level).context("failed to install logger")?;
    config.validate()?;
    run(&config)
}

fn run(config: &Config) -> anyhow::Result<()> {
    let glfw = Glfw::init(InitHint::none()).context("failed to initialize GLFW")?;
    log::info!(
        "GLFW {} on {:?}",
        Glfw::get_version_string(),
        glfw.get_platform()
    );

    let hints = config.window_hints();
    let window = glfw
        .create_window(&hints, config.width, config.height, &config.title, None)
        .map_err(|err| anyhow!("failed to create GLFW window: {}", err))?;
    window
        .make_context_current()
        .context("failed to make the OpenGL context current")?;

    loader::load_gl(&glfw)?;
    loader::log_context_info();
    if let Err(err) = glfw.set_swap_interval(config.swap_interval) {
        log::warn!("swap interval {} rejected: {}", config.swap_interval, err);
    }

    let (width, height) = window.get_framebuffer_size()?;
    renderer::set_viewport(width, height);
    let triangle = Triangle::new(config.glsl_version())?;

    while !window.should_close() {
        glfw.poll_events(&mut |_window_id, (time, event)| {
            handle_event(&window, event).map(|event| (time, event))
        })?;
        triangle.render();
        window.swap_buffers()?;
    }

    // GL objects go while their context is still current
    drop(triangle);
    glfw.make_context_non_current()?;
    Ok(())
}

/// React to the events the demo cares about; anything else is handed back.
fn handle_event(window: &Window, event: WindowEvent) -> Option<WindowEvent> {
    match event {
        WindowEvent::FramebufferSize(width, height) => {
            log::info!("Resizing window to {}x{}.", width, height);
            renderer::set_viewport(width, height);
            None
        }
        WindowEvent::Key(Key::Escape, _, Action::Press, _) => {
            log::info!("Closing window since user hit ESC.");
            window.set_should_close(true);
            None
        }
        event => Some(event),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glfw3::{ClientApi, Modifiers, Platform, WindowHint};

    const INIT_HINTS: &[InitHint] = &[InitHint::Platform(Platform::Null)];

    fn headless_window(glfw: &Glfw) -> Window {
        glfw.create_window(
            &[WindowHint::ClientApi(ClientApi::None)],
            320,
            240,
            "test",
            None,
        )
        .unwrap()
    }

    #[test]
    fn escape_press_closes_window() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = headless_window(&glfw);
        let event = WindowEvent::Key(Key::Escape, 9, Action::Press, Modifiers::empty());
        assert_eq!(None, handle_event(&window, event));
        assert!(window.should_close());
    }

    #[test]
    fn other_events_are_handed_back() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = headless_window(&glfw);
        let release = WindowEvent::Key(Key::Escape, 9, Action::Release, Modifiers::empty());
        assert_eq!(Some(release.clone()), handle_event(&window, release));
        let other = WindowEvent::Key(Key::Space, 65, Action::Press, Modifiers::SHIFT);
        assert_eq!(Some(other.clone()), handle_event(&window, other));
        assert_eq!(Some(WindowEvent::Close), handle_event(&window, WindowEvent::Close));
        assert!(!window.should_close());
    }

    /// Full startup path against a real context:
    /// `cargo test -p hello-triangle -- --ignored`
    #[test]
    #[ignore = "requires a display with OpenGL 4.1"]
    fn loads_gl_and_builds_triangle() {
        let config = Config::try_parse_from(["hello-triangle"]).unwrap();
        let glfw = Glfw::init(InitHint::none()).unwrap();
        let mut hints = config.window_hints();
        hints.push(WindowHint::Visible(false));
        let window = glfw
            .create_window(&hints, config.width, config.height, &config.title, None)
            .unwrap();
        window.make_context_current().unwrap();

        loader::load_gl(&glfw).unwrap();
        assert!(loader::gl_string(gl::VERSION).is_some());
        assert!(glfw.get_proc_address("glNotARealFunction").is_null());

        let triangle = Triangle::new(config.glsl_version()).unwrap();
        triangle.render();
        drop(triangle);
        glfw.make_context_non_current().unwrap();
    }
}
