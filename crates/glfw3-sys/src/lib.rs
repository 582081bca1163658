#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(rustdoc::broken_intra_doc_links)]

mod ffi;
pub use ffi::*;

#[cfg(test)]
mod tests {
    use crate as sys;
    use core::{ffi::c_char, ptr};
    use parking_lot::Mutex;

    // glfwInit/glfwTerminate are process-global; the test harness runs tests on
    // several threads.
    static GLFW_LOCK: Mutex<()> = Mutex::new(());

    macro_rules! c_str {
        ($s:expr) => {
            concat!($s, "\0").as_ptr() as *const c_char
        };
    }

    unsafe fn init_null_platform() {
        sys::glfwInitHint(sys::GLFW_PLATFORM, sys::GLFW_PLATFORM_NULL);
        let status = sys::glfwInit();
        assert_eq!(sys::GLFW_TRUE, status);
    }

    unsafe fn take_error() -> i32 {
        let mut desc = ptr::null();
        sys::glfwGetError(&mut desc)
    }

    #[test]
    fn glfw_init_terminate() {
        let _lock = GLFW_LOCK.lock();
        unsafe {
            init_null_platform();
            assert_eq!(sys::GLFW_PLATFORM_NULL, sys::glfwGetPlatform());
            sys::glfwTerminate();
        }
    }

    #[test]
    fn get_version_matches_header() {
        let (mut major, mut minor, mut revision) = (0, 0, 0);
        unsafe { sys::glfwGetVersion(&mut major, &mut minor, &mut revision) };
        assert_eq!(sys::GLFW_VERSION_MAJOR, major);
        assert!(minor >= sys::GLFW_VERSION_MINOR);
    }

    #[test]
    fn get_proc_address_without_context() {
        let _lock = GLFW_LOCK.lock();
        unsafe {
            init_null_platform();
            assert!(sys::glfwGetCurrentContext().is_null());
            let proc = sys::glfwGetProcAddress(c_str!("glGetString"));
            assert!(proc.is_none());
            assert_eq!(sys::GLFW_NO_CURRENT_CONTEXT, take_error());
            sys::glfwTerminate();
        }
    }

    #[test]
    fn get_proc_address_before_init() {
        let _lock = GLFW_LOCK.lock();
        unsafe {
            let proc = sys::glfwGetProcAddress(c_str!("glGetString"));
            assert!(proc.is_none());
            assert_eq!(sys::GLFW_NOT_INITIALIZED, take_error());
        }
    }
}
