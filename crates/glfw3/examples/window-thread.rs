use core::time::Duration;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

use glfw3::{Glfw, InitHint, WindowEvent};
use glfw3_sys as sys;

fn main() {
    let glfw = Glfw::init(InitHint::none()).expect("GLFW failed to initialize");

    let window = glfw
        .create_window(&[], 800, 600, "GLFW Window", None)
        .expect("Failed to create window");

    let window_id = window.window_id();
    let running = Arc::new(AtomicBool::new(true));
    let render_running = Arc::clone(&running);

    let join_handle = std::thread::spawn(move || {
        let window_ptr = window_id.window_mut_ptr();
        unsafe {
            sys::glfwMakeContextCurrent(window_ptr);
        }
        // Entry points resolve against the context current on this thread.
        gl::load_with(|name| {
            let address = glfw3::get_proc_address_str(name);
            if address.is_null() {
                eprintln!("unresolved: {}", name);
            }
            address
        });
        while render_running.load(Ordering::Acquire) {
            let time = unsafe { sys::glfwGetTime() as f32 } * 2.0;
            unsafe {
                gl::ClearColor(time.sin(), time.cos(), 1.0 - time.sin(), 1.0);
                gl::Clear(gl::COLOR_BUFFER_BIT);
                sys::glfwSwapBuffers(window_ptr);
            }
        }
        unsafe {
            sys::glfwMakeContextCurrent(core::ptr::null_mut());
        }
    });

    let timeout = Duration::from_secs(1);
    while running.load(Ordering::Acquire) {
        let result = glfw.wait_events_timeout(timeout, &mut |_window_id, (_time, event)| {
            println!("{:?}", event);
            if let WindowEvent::Close = event {
                running.store(false, Ordering::Release);
            }
            None
        });
        result.expect("glfwWaitEventsTimeout");
    }

    join_handle.join().expect("failed to join render thread");
}
