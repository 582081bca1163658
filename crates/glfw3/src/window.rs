use core::ptr;
use std::rc::Rc;

use glfw3_sys as sys;

use crate::{Action, Error, Glfw, Key, Terminate};

#[repr(transparent)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowId(pub(crate) usize);

impl WindowId {
    pub fn window_ptr(self) -> *const sys::GLFWwindow {
        self.0 as *const _
    }

    pub fn window_mut_ptr(self) -> *mut sys::GLFWwindow {
        self.0 as *mut _
    }
}

pub struct Window {
    pub(crate) window_ptr: *mut sys::GLFWwindow,
    pub(crate) _terminate: Rc<Terminate>,
}

impl Window {
    pub(crate) fn new(window_ptr: *mut sys::GLFWwindow, terminate: Rc<Terminate>) -> Window {
        Window {
            window_ptr,
            _terminate: terminate,
        }
    }

    pub fn window_id(&self) -> WindowId {
        WindowId(self.window_ptr as usize)
    }

    /// Make this window's context current on the calling thread.
    ///
    /// Fails with `GLFW_NO_WINDOW_CONTEXT` for windows created with
    /// `ClientApi::None`.
    #[doc(alias = "glfwMakeContextCurrent")]
    pub fn make_context_current(&self) -> Result<(), Error> {
        unsafe {
            sys::glfwMakeContextCurrent(self.window_ptr);
            Glfw::get_error()
        }
    }

    #[doc(alias = "glfwGetCurrentContext")]
    pub fn is_context_current(&self) -> bool {
        unsafe { sys::glfwGetCurrentContext() == self.window_ptr }
    }

    #[doc(alias = "glfwSwapBuffers")]
    pub fn swap_buffers(&self) -> Result<(), Error> {
        unsafe {
            sys::glfwSwapBuffers(self.window_ptr);
            Glfw::get_error()
        }
    }

    #[doc(alias = "glfwWindowShouldClose")]
    pub fn should_close(&self) -> bool {
        unsafe { sys::GLFW_TRUE == sys::glfwWindowShouldClose(self.window_ptr) }
    }

    #[doc(alias = "glfwSetWindowShouldClose")]
    pub fn set_should_close(&self, value: bool) {
        unsafe { sys::glfwSetWindowShouldClose(self.window_ptr, crate::glfw_bool(value)) }
    }

    /// Last reported state of `key`. `Key::Unknown` is not a valid argument.
    #[doc(alias = "glfwGetKey")]
    pub fn get_key(&self, key: Key) -> Result<Action, Error> {
        unsafe {
            let state = sys::glfwGetKey(self.window_ptr, key as i32);
            Glfw::get_error()?;
            Ok(Action::try_from(state).unwrap_or(Action::Release))
        }
    }

    /// Framebuffer size in pixels, which may differ from the window size in
    /// screen coordinates.
    #[doc(alias = "glfwGetFramebufferSize")]
    pub fn get_framebuffer_size(&self) -> Result<(i32, i32), Error> {
        let mut width = 0;
        let mut height = 0;
        unsafe {
            sys::glfwGetFramebufferSize(self.window_ptr, &mut width, &mut height);
            Glfw::get_error()?;
        }
        Ok((width, height))
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        unsafe {
            if self.window_ptr != ptr::null_mut() {
                sys::glfwDestroyWindow(self.window_ptr);
                if let Some(err) = Glfw::get_error().err() {
                    log::warn!("glfwDestroyWindow failed: {:?}", err);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::{HEADLESS_WINDOW, INIT_HINTS};
    use crate::*;

    #[test]
    fn window_id_round_trips_pointer() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = glfw
            .create_window(HEADLESS_WINDOW, 640, 480, "test", None)
            .unwrap();
        let id = window.window_id();
        assert_eq!(window.window_ptr, id.window_mut_ptr());
        assert_eq!(window.window_ptr as *const _, id.window_ptr());
    }

    #[test]
    fn should_close_flag() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = glfw
            .create_window(HEADLESS_WINDOW, 640, 480, "test", None)
            .unwrap();
        assert!(!window.should_close());
        window.set_should_close(true);
        assert!(window.should_close());
        window.set_should_close(false);
        assert!(!window.should_close());
    }

    #[test]
    fn framebuffer_size_of_null_window() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = glfw
            .create_window(HEADLESS_WINDOW, 640, 480, "test", None)
            .unwrap();
        assert_eq!((640, 480), window.get_framebuffer_size().unwrap());
    }

    #[test]
    fn keys_start_released() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = glfw
            .create_window(HEADLESS_WINDOW, 640, 480, "test", None)
            .unwrap();
        assert_eq!(Action::Release, window.get_key(Key::Escape).unwrap());
        let err = window.get_key(Key::Unknown).unwrap_err();
        assert_eq!(Some(ErrorCode::InvalidEnum), err.kind());
    }

    #[test]
    fn make_context_current_without_context() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = glfw
            .create_window(HEADLESS_WINDOW, 640, 480, "test", None)
            .unwrap();
        let err = window.make_context_current().unwrap_err();
        assert_eq!(Some(ErrorCode::NoWindowContext), err.kind());
        assert!(!window.is_context_current());
    }
}
