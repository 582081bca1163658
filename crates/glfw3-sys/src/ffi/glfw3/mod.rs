//! Declarations from `GLFW/glfw3.h` (GLFW 3.4).
//!
//! Only the context, window, input and init parts of the API are declared.
//! Monitor, joystick, cursor and Vulkan entry points are left out.

mod constants;
mod functions;
mod link;
mod types;

pub use constants::*;
pub use functions::*;
pub use types::*;
