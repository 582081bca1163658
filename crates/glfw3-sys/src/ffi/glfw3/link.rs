#[cfg(feature = "vendored")]
#[link(name = "glfw3", kind = "static")]
extern "C" {}

// A static GLFW pulls in the system frameworks/libraries its backends use.
#[cfg(all(feature = "vendored", target_os = "macos"))]
#[link(name = "Cocoa", kind = "framework")]
#[link(name = "IOKit", kind = "framework")]
#[link(name = "CoreFoundation", kind = "framework")]
#[link(name = "QuartzCore", kind = "framework")]
extern "C" {}

#[cfg(all(feature = "vendored", target_family = "windows"))]
#[link(name = "gdi32")]
#[link(name = "user32")]
#[link(name = "shell32")]
extern "C" {}

#[cfg(all(feature = "vendored", target_family = "unix", not(target_os = "macos")))]
#[link(name = "dl")]
#[link(name = "pthread")]
#[link(name = "m")]
extern "C" {}

#[cfg(not(feature = "vendored"))]
// no `kind = static` so a shared libglfw can be picked up from the system
#[cfg(target_family = "unix")]
#[link(name = "glfw")]
extern "C" {}

#[cfg(not(feature = "vendored"))]
#[cfg(target_family = "windows")]
#[link(name = "glfw3")]
extern "C" {}
