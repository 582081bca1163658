//! Resolving client API entry points through GLFW.
//!
//! Every function here hands the symbol name to `glfwGetProcAddress` and
//! returns its answer as is. A null address means GLFW could not resolve the
//! name (unknown symbol, no current context, or GLFW not initialized); the
//! reason is left pending in GLFW's error state for the caller, see
//! [`Glfw::get_error`](crate::Glfw::get_error).
//!
//! The lookup is answered for the context current on the calling thread, so
//! a function loader must run on that thread.
//!
//! ```no_run
//! # use glfw3::{Glfw, InitHint};
//! let glfw = Glfw::init(InitHint::none()).unwrap();
//! let window = glfw.create_window(&[], 800, 600, "gl", None).unwrap();
//! window.make_context_current().unwrap();
//! gl::load_with(glfw3::get_proc_address_str);
//! ```

use core::ffi::{c_char, c_void, CStr};
use std::{ffi::CString, ptr};

use glfw3_sys as sys;

/// A client API function pointer as returned by GLFW.
pub type GlProc = sys::GLFWglproc;

#[doc(alias = "glfwGetProcAddress")]
#[inline]
pub fn get_proc_address(name: &CStr) -> GlProc {
    unsafe { sys::glfwGetProcAddress(name.as_ptr()) }
}

/// C loader callback (`void *(*)(const char *)`) backed by `glfwGetProcAddress`.
///
/// # Safety
///
/// `name` must point to a NUL-terminated string that stays valid for the call.
#[doc(alias = "glfwGetProcAddress")]
pub unsafe extern "C" fn load_proc(name: *const c_char) -> *const c_void {
    proc_to_ptr(sys::glfwGetProcAddress(name))
}

/// Loader in the shape `gl::load_with` and similar generated bindings expect.
///
/// The name is copied to add the terminator GLFW needs. A name containing a
/// NUL byte cannot name a C symbol and gives a null address without asking GLFW.
#[doc(alias = "glfwGetProcAddress")]
pub fn get_proc_address_str(name: &str) -> *const c_void {
    match CString::new(name) {
        Ok(name) => proc_to_ptr(get_proc_address(&name)),
        Err(_) => ptr::null(),
    }
}

fn proc_to_ptr(proc: GlProc) -> *const c_void {
    proc.map_or(ptr::null(), |f| f as *const c_void)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{HEADLESS_WINDOW, INIT_HINTS};
    use crate::{ClientApi, ErrorCode, Glfw, InitHint, OpenGlProfile, WindowHint};

    fn direct(name: &CStr) -> *const c_void {
        proc_to_ptr(unsafe { sys::glfwGetProcAddress(name.as_ptr()) })
    }

    #[test]
    fn null_without_current_context() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        assert!(get_proc_address(c"glGetString").is_none());
        assert!(unsafe { load_proc(c"glGetString".as_ptr()) }.is_null());
        assert!(get_proc_address_str("glGetString").is_null());
        assert!(glfw.get_proc_address("glGetString").is_null());
    }

    #[test]
    fn leaves_error_pending_for_caller() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let _window = glfw
            .create_window(HEADLESS_WINDOW, 64, 64, "test", None)
            .unwrap();
        Glfw::get_error().unwrap();
        let _ = get_proc_address_str("glClear");
        let err = Glfw::get_error().unwrap_err();
        assert_eq!(Some(ErrorCode::NoCurrentContext), err.kind());
    }

    #[test]
    fn same_answer_as_glfw() {
        let _glfw = Glfw::init(INIT_HINTS).unwrap();
        for name in [c"glGetString", c"glClear", c"glNotARealFunction"] {
            assert_eq!(direct(name), unsafe { load_proc(name.as_ptr()) });
            assert_eq!(direct(name), proc_to_ptr(get_proc_address(name)));
        }
    }

    #[test]
    fn interior_nul_is_null() {
        assert!(get_proc_address_str("glGet\0String").is_null());
    }

    #[test]
    fn proc_to_ptr_keeps_address() {
        unsafe extern "C" fn marker() {}
        let proc: GlProc = Some(marker);
        assert_eq!(marker as *const c_void, proc_to_ptr(proc));
        assert!(proc_to_ptr(None).is_null());
    }

    /// Needs a display and an OpenGL 3.3 capable driver:
    /// `cargo test -p glfw3 -- --ignored`
    #[test]
    #[ignore = "requires a display with OpenGL"]
    fn resolves_against_current_context() {
        let glfw = Glfw::init(InitHint::none()).unwrap();
        let window = glfw
            .create_window(
                &[
                    WindowHint::Visible(false),
                    WindowHint::ClientApi(ClientApi::OpenGl),
                    WindowHint::ContextVersionMajor(3),
                    WindowHint::ContextVersionMinor(3),
                    WindowHint::OpenGlProfile(OpenGlProfile::Core),
                    WindowHint::OpenGlForwardCompat(cfg!(target_os = "macos")),
                ],
                64,
                64,
                "proc address",
                None,
            )
            .unwrap();
        window.make_context_current().unwrap();

        let get_string = get_proc_address_str("glGetString");
        assert!(!get_string.is_null());
        assert_eq!(direct(c"glGetString"), get_string);
        assert_eq!(get_string, get_proc_address_str("glGetString"));
        assert_eq!(get_string, glfw.get_proc_address("glGetString"));

        assert!(get_proc_address_str("glGetStrnig").is_null());
        assert!(get_proc_address(c"glGetStrnig").is_none());

        glfw.make_context_non_current().unwrap();
    }
}
