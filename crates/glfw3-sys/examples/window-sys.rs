use core::{ffi, ptr};
use glfw3_sys as sys;
use std::ffi::CString;

macro_rules! c_str {
    ($s:expr) => {
        concat!($s, "\0").as_ptr() as *const ffi::c_char
    };
}

/// `gl::load_with` hands out `&str`; GLFW wants a C string.
fn load(name: &str) -> *const ffi::c_void {
    let Ok(name) = CString::new(name) else {
        return ptr::null();
    };
    match unsafe { sys::glfwGetProcAddress(name.as_ptr()) } {
        Some(proc) => proc as *const ffi::c_void,
        None => ptr::null(),
    }
}

unsafe extern "C" fn error_callback(code: ffi::c_int, desc: *const ffi::c_char) {
    let desc = ffi::CStr::from_ptr(desc);
    println!("GLFW Error ({:#x}): {:?}", code, desc);
}

unsafe extern "C" fn refresh_callback(window: *mut sys::GLFWwindow) {
    draw(window);
}

unsafe extern "C" fn framebuffer_size_callback(
    _window: *mut sys::GLFWwindow,
    width: ffi::c_int,
    height: ffi::c_int,
) {
    gl::Viewport(0, 0, width, height);
}

unsafe fn draw(window: *mut sys::GLFWwindow) {
    let time: f32 = 2.0 * sys::glfwGetTime() as f32;
    let red = time.sin();
    let green = time.cos();
    let blue = 1.0 - red;
    let alpha = 1.0;
    gl::ClearColor(red, green, blue, alpha);
    gl::Clear(gl::COLOR_BUFFER_BIT);
    sys::glfwSwapBuffers(window);
}

fn main() {
    unsafe {
        sys::glfwSetErrorCallback(Some(error_callback));

        let result = sys::glfwInit();
        assert_eq!(sys::GLFW_TRUE, result, "Failed to initialize GLFW");

        sys::glfwWindowHint(sys::GLFW_CONTEXT_VERSION_MAJOR, 3);
        sys::glfwWindowHint(sys::GLFW_CONTEXT_VERSION_MINOR, 3);
        sys::glfwWindowHint(sys::GLFW_OPENGL_PROFILE, sys::GLFW_OPENGL_CORE_PROFILE);
        if cfg!(target_os = "macos") {
            sys::glfwWindowHint(sys::GLFW_OPENGL_FORWARD_COMPAT, sys::GLFW_TRUE);
        }

        let window = sys::glfwCreateWindow(
            800,
            600,
            c_str!("GLFW Window"),
            ptr::null_mut(),
            ptr::null_mut(),
        );
        assert_ne!(ptr::null_mut(), window, "Failed to create window");

        sys::glfwMakeContextCurrent(window);

        gl::load_with(load);
        assert!(gl::GetString::is_loaded(), "glGetString did not resolve");

        sys::glfwSetWindowRefreshCallback(window, Some(refresh_callback));
        sys::glfwSetFramebufferSizeCallback(window, Some(framebuffer_size_callback));

        while sys::GLFW_FALSE == sys::glfwWindowShouldClose(window) {
            sys::glfwPollEvents();
            if sys::glfwGetKey(window, sys::GLFW_KEY_ESCAPE) == sys::GLFW_PRESS {
                sys::glfwSetWindowShouldClose(window, sys::GLFW_TRUE);
            }
            draw(window);
        }

        sys::glfwMakeContextCurrent(ptr::null_mut());
        sys::glfwTerminate();
    }
}
