use core::time::Duration;

use glfw3::{Glfw, InitHint, WindowEvent};

fn main() {
    let glfw = Glfw::init(InitHint::none()).expect("GLFW failed to initialize");

    let window = glfw
        .create_window(&[], 800, 600, "GLFW Window", None)
        .expect("Failed to create window");

    window
        .make_context_current()
        .expect("glfwMakeContextCurrent");

    gl::load_with(glfw3::get_proc_address_str);
    assert!(gl::Clear::is_loaded(), "glClear did not resolve");

    let timeout = Duration::from_secs(1);
    let mut running = true;
    while running {
        let result = glfw.wait_events_timeout(timeout, &mut |_window_id, (_time, event)| {
            println!("{:?}", event);
            match event {
                WindowEvent::Close => {
                    running = false;
                }
                WindowEvent::Refresh => {
                    unsafe {
                        gl::ClearColor(0.2, 0.2, 0.2, 0.2);
                        gl::Clear(gl::COLOR_BUFFER_BIT);
                    }
                    window.swap_buffers().expect("glfwSwapBuffers");
                }
                _ => {}
            }
            None
        });
        result.expect("glfwWaitEventsTimeout");
    }
}
