mod glfw3;
pub use glfw3::*;
