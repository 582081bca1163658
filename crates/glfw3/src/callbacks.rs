use crate::{Action, Key, Modifiers, WindowEvent, WindowId};
use core::ffi::{c_int, c_uint};
use glfw3_sys as sys;
use std::{cell::RefCell, marker::PhantomData};

type CallbackPtr = *mut core::ffi::c_void;

type HandlerFn = fn(
    window_id: WindowId,
    event: (f64, WindowEvent),
    callback_ptr: CallbackPtr,
) -> Option<(f64, WindowEvent)>;

thread_local! {
    static HANDLER: RefCell<Option<(HandlerFn, CallbackPtr)>> = RefCell::new(None);
}

pub struct UnsetHandlerGuard<'a, F> {
    _private: PhantomData<&'a mut F>,
}

impl<'a, F> Drop for UnsetHandlerGuard<'a, F> {
    fn drop(&mut self) {
        HANDLER.with(|ref_cell| {
            *ref_cell.borrow_mut() = None;
        })
    }
}

pub fn call_handler(window_id: WindowId, event: (f64, WindowEvent)) -> Option<(f64, WindowEvent)> {
    // Copy the entry out so the handler runs without the cell borrowed.
    let entry = HANDLER.with(|ref_cell| *ref_cell.borrow());
    if let Some((handler, callback_ptr)) = entry {
        handler(window_id, event, callback_ptr)
    } else {
        Some(event)
    }
}

pub fn set_handler<'a, F>(callback: &'a mut F) -> UnsetHandlerGuard<'a, F>
where
    F: FnMut(WindowId, (f64, WindowEvent)) -> Option<(f64, WindowEvent)>,
{
    fn handler<F>(
        window_id: WindowId,
        event: (f64, WindowEvent),
        callback_ptr: CallbackPtr,
    ) -> Option<(f64, WindowEvent)>
    where
        F: FnMut(WindowId, (f64, WindowEvent)) -> Option<(f64, WindowEvent)>,
    {
        unsafe {
            let callback: &mut F = &mut *(callback_ptr as *mut F);
            callback(window_id, event)
        }
    }

    HANDLER.with(|ref_cell| {
        let callback_ptr = callback as *mut F as CallbackPtr;
        *ref_cell.borrow_mut() = Some((handler::<F>, callback_ptr));
    });

    UnsetHandlerGuard {
        _private: PhantomData,
    }
}

fn dispatch(window: *mut sys::GLFWwindow, event: WindowEvent) {
    let window_id = WindowId(window as usize);
    let time = unsafe { sys::glfwGetTime() };
    if let Some((time, event)) = call_handler(window_id, (time, event)) {
        log::trace!("unhandled event for {:?} at {:.3}: {:?}", window_id, time, event);
    }
}

unsafe extern "C" fn window_pos_callback(window: *mut sys::GLFWwindow, x: c_int, y: c_int) {
    dispatch(window, WindowEvent::Pos(x, y));
}

unsafe extern "C" fn window_size_callback(window: *mut sys::GLFWwindow, width: c_int, height: c_int) {
    dispatch(window, WindowEvent::Size(width, height));
}

unsafe extern "C" fn window_close_callback(window: *mut sys::GLFWwindow) {
    dispatch(window, WindowEvent::Close);
}

unsafe extern "C" fn window_refresh_callback(window: *mut sys::GLFWwindow) {
    dispatch(window, WindowEvent::Refresh);
}

unsafe extern "C" fn window_focus_callback(window: *mut sys::GLFWwindow, focused: c_int) {
    dispatch(window, WindowEvent::Focus(focused == sys::GLFW_TRUE));
}

unsafe extern "C" fn window_iconify_callback(window: *mut sys::GLFWwindow, iconified: c_int) {
    dispatch(window, WindowEvent::Iconify(iconified == sys::GLFW_TRUE));
}

unsafe extern "C" fn window_maximize_callback(window: *mut sys::GLFWwindow, maximized: c_int) {
    dispatch(window, WindowEvent::Maximize(maximized == sys::GLFW_TRUE));
}

unsafe extern "C" fn framebuffer_size_callback(
    window: *mut sys::GLFWwindow,
    width: c_int,
    height: c_int,
) {
    dispatch(window, WindowEvent::FramebufferSize(width, height));
}

unsafe extern "C" fn content_scale_callback(window: *mut sys::GLFWwindow, x: f32, y: f32) {
    dispatch(window, WindowEvent::ContentScale(x, y));
}

unsafe extern "C" fn key_callback(
    window: *mut sys::GLFWwindow,
    key: c_int,
    scancode: c_int,
    action: c_int,
    mods: c_int,
) {
    let Ok(action) = Action::try_from(action) else {
        log::warn!("ignoring key event with unknown action {}", action);
        return;
    };
    let event = WindowEvent::Key(
        Key::from_raw(key),
        scancode,
        action,
        Modifiers::from_bits_truncate(mods),
    );
    dispatch(window, event);
}

unsafe extern "C" fn char_callback(window: *mut sys::GLFWwindow, codepoint: c_uint) {
    dispatch(window, WindowEvent::Char(codepoint));
}

pub unsafe fn set_window_callbacks(window: *mut sys::GLFWwindow) {
    sys::glfwSetWindowPosCallback(window, Some(window_pos_callback));
    sys::glfwSetWindowSizeCallback(window, Some(window_size_callback));
    sys::glfwSetWindowCloseCallback(window, Some(window_close_callback));
    sys::glfwSetWindowRefreshCallback(window, Some(window_refresh_callback));
    sys::glfwSetWindowFocusCallback(window, Some(window_focus_callback));
    sys::glfwSetWindowIconifyCallback(window, Some(window_iconify_callback));
    sys::glfwSetWindowMaximizeCallback(window, Some(window_maximize_callback));
    sys::glfwSetFramebufferSizeCallback(window, Some(framebuffer_size_callback));
    sys::glfwSetWindowContentScaleCallback(window, Some(content_scale_callback));
    sys::glfwSetKeyCallback(window, Some(key_callback));
    sys::glfwSetCharCallback(window, Some(char_callback));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handler_receives_event_while_set() {
        let window_id = WindowId(0x1000);
        let mut seen = Vec::new();
        {
            let mut handler = |id: WindowId, (time, event): (f64, WindowEvent)| -> Option<(f64, WindowEvent)> {
                seen.push((id, time, event));
                None
            };
            let _guard = set_handler(&mut handler);
            let unhandled = call_handler(window_id, (1.5, WindowEvent::Close));
            assert_eq!(None, unhandled);
        }
        assert_eq!(vec![(window_id, 1.5, WindowEvent::Close)], seen);
    }

    #[test]
    fn event_is_returned_without_handler() {
        let event = (0.25, WindowEvent::FramebufferSize(800, 600));
        assert_eq!(Some(event.clone()), call_handler(WindowId(1), event));
    }

    #[test]
    fn guard_unsets_handler() {
        let mut handler = |_: WindowId, _: (f64, WindowEvent)| -> Option<(f64, WindowEvent)> { None };
        drop(set_handler(&mut handler));
        let event = (0.0, WindowEvent::Refresh);
        assert_eq!(Some(event.clone()), call_handler(WindowId(1), event));
    }

    #[test]
    fn handler_can_pass_events_through() {
        let mut handler = |_: WindowId, event: (f64, WindowEvent)| Some(event);
        let _guard = set_handler(&mut handler);
        let event = (2.0, WindowEvent::Focus(true));
        assert_eq!(Some(event.clone()), call_handler(WindowId(1), event));
    }
}
