use std::{env, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-env-changed=GLFW3_SYS_SOURCE_DIR");
    if env::var_os("CARGO_FEATURE_VENDORED").is_some() {
        build_vendored();
    }
}

/// Build GLFW as a static library with CMake. `link.rs` carries the
/// `#[link]` attributes; this only has to put the archive on the search path.
fn build_vendored() {
    let source_dir = env::var_os("GLFW3_SYS_SOURCE_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("glfw"));
    if !source_dir.join("CMakeLists.txt").exists() {
        panic!(
            "the `vendored` feature needs the GLFW 3.4 sources; set GLFW3_SYS_SOURCE_DIR \
             (looked in {})",
            source_dir.display()
        );
    }
    println!("cargo:rerun-if-changed={}", source_dir.display());

    let wayland = env::var_os("CARGO_FEATURE_WAYLAND").is_some();
    let mut config = cmake::Config::new(&source_dir);
    config
        .define("BUILD_SHARED_LIBS", "OFF")
        .define("GLFW_BUILD_EXAMPLES", "OFF")
        .define("GLFW_BUILD_TESTS", "OFF")
        .define("GLFW_BUILD_DOCS", "OFF")
        .define("GLFW_INSTALL", "ON")
        .define("GLFW_BUILD_WAYLAND", if wayland { "ON" } else { "OFF" })
        .define("GLFW_BUILD_X11", if wayland { "OFF" } else { "ON" });
    let dst = config.build();

    println!("cargo:rustc-link-search=native={}", dst.join("lib").display());
    println!("cargo:rustc-link-search=native={}", dst.join("lib64").display());
    println!("cargo:root={}", dst.display());
}
