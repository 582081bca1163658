use core::ffi::{c_char, c_int, c_uint};

/// Opaque window object.
#[repr(C)]
pub struct GLFWwindow {
    _private: [u8; 0],
}

/// Opaque monitor object.
#[repr(C)]
pub struct GLFWmonitor {
    _private: [u8; 0],
}

/// Client API function pointer type, as returned by `glfwGetProcAddress`.
pub type GLFWglproc = Option<unsafe extern "C" fn()>;

pub type GLFWerrorfun = Option<unsafe extern "C" fn(error_code: c_int, description: *const c_char)>;

pub type GLFWwindowposfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, xpos: c_int, ypos: c_int)>;

pub type GLFWwindowsizefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, width: c_int, height: c_int)>;

pub type GLFWwindowclosefun = Option<unsafe extern "C" fn(window: *mut GLFWwindow)>;

pub type GLFWwindowrefreshfun = Option<unsafe extern "C" fn(window: *mut GLFWwindow)>;

pub type GLFWwindowfocusfun = Option<unsafe extern "C" fn(window: *mut GLFWwindow, focused: c_int)>;

pub type GLFWwindowiconifyfun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, iconified: c_int)>;

pub type GLFWwindowmaximizefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, maximized: c_int)>;

pub type GLFWframebuffersizefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, width: c_int, height: c_int)>;

pub type GLFWwindowcontentscalefun =
    Option<unsafe extern "C" fn(window: *mut GLFWwindow, xscale: f32, yscale: f32)>;

pub type GLFWkeyfun = Option<
    unsafe extern "C" fn(
        window: *mut GLFWwindow,
        key: c_int,
        scancode: c_int,
        action: c_int,
        mods: c_int,
    ),
>;

pub type GLFWcharfun = Option<unsafe extern "C" fn(window: *mut GLFWwindow, codepoint: c_uint)>;
