use std::ffi::CStr;

use anyhow::ensure;
use gl::types::GLenum;
use glfw3::Glfw;

/// Entry points without which nothing else can work. A loader that could not
/// resolve these is looking at the wrong (or no) context.
fn essentials() -> [(&'static str, bool); 3] {
    [
        ("glGetString", gl::GetString::is_loaded()),
        ("glGetIntegerv", gl::GetIntegerv::is_loaded()),
        ("glViewport", gl::Viewport::is_loaded()),
    ]
}

/// Load every GL entry point against the context current on this thread.
pub fn load_gl(glfw: &Glfw) -> anyhow::Result<()> {
    let mut requested = 0usize;
    let mut resolved = 0usize;
    gl::load_with(|name| {
        let address = glfw.get_proc_address(name);
        requested += 1;
        if address.is_null() {
            log::trace!("{} not available", name);
        } else {
            resolved += 1;
        }
        address
    });
    log::debug!("resolved {} of {} GL entry points", resolved, requested);

    let missing = missing_names(&essentials());
    ensure!(
        missing.is_empty(),
        "failed to load OpenGL: {} did not resolve",
        missing.join(", ")
    );
    Ok(())
}

fn missing_names(checks: &[(&'static str, bool)]) -> Vec<&'static str> {
    checks
        .iter()
        .filter(|(_, loaded)| !loaded)
        .map(|(name, _)| *name)
        .collect()
}

/// Read one of the `glGetString` strings of the current context.
pub fn gl_string(name: GLenum) -> Option<String> {
    unsafe {
        let ptr = gl::GetString(name);
        if ptr.is_null() {
            None
        } else {
            Some(CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned())
        }
    }
}

pub fn log_context_info() {
    for (label, name) in [
        ("vendor", gl::VENDOR),
        ("renderer", gl::RENDERER),
        ("version", gl::VERSION),
        ("GLSL", gl::SHADING_LANGUAGE_VERSION),
    ] {
        match gl_string(name) {
            Some(value) => log::info!("OpenGL {}: {}", label, value),
            None => log::warn!("OpenGL {} unavailable", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keeps_order() {
        let checks = [("glA", true), ("glB", false), ("glC", false)];
        assert_eq!(vec!["glB", "glC"], missing_names(&checks));
        assert!(missing_names(&[("glA", true)]).is_empty());
    }
}
