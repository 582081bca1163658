use core::ffi::{c_char, c_int, CStr};
use glfw3_sys::{self as sys};
use std::{
    ffi::{CString, NulError},
    marker::PhantomData,
    mem, ptr,
    rc::Rc,
    sync::{LazyLock, Mutex, MutexGuard, TryLockError},
    time::Duration,
};

mod callbacks;
mod input;
mod proc_address;
mod window;

pub use input::*;
pub use proc_address::*;
pub use window::*;

/// Unwrap errors that are expected to be impossible to happen unless
/// GLFW has not been initialized as described in the function documentation.
///
/// ```text
/// get_error().expect(GLFW_NOT_INITIALIZED);
/// ```
const GLFW_NOT_INITIALIZED: &str = "GLFW has not been initialized";

/// Value for integer window hints that should be left to the platform.
pub const DONT_CARE: i32 = sys::GLFW_DONT_CARE;

static INIT: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

#[derive(Debug)]
struct Terminate {
    _init_guard: InitGuard,
    _phantom: PhantomData<*mut ()>,
}

type InitGuard = MutexGuard<'static, ()>;

/// Handle to an initialized GLFW library.
///
/// GLFW is terminated once this handle and every [`Window`] created from it
/// have been dropped. Only one `Glfw` can exist at a time.
#[derive(Debug)]
pub struct Glfw {
    terminate: Rc<Terminate>,
}

impl Drop for Terminate {
    fn drop(&mut self) {
        unsafe {
            sys::glfwTerminate();
            if let Some(err) = Glfw::get_error().err() {
                log::warn!("glfwTerminate failed: {:?}", err);
            }
        }
    }
}

#[derive(Debug)]
pub enum InitError<'a> {
    Hint(&'a InitHint, Error),
    Init(Error),
    Poisoned,
}

impl core::fmt::Display for InitError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            InitError::Hint(hint, err) => write!(f, "init hint {:?} rejected: {}", hint, err),
            InitError::Init(err) => write!(f, "glfwInit failed: {}", err),
            InitError::Poisoned => f.write_str("GLFW init lock poisoned"),
        }
    }
}

impl core::error::Error for InitError<'_> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            InitError::Hint(_, err) | InitError::Init(err) => Some(err),
            InitError::Poisoned => None,
        }
    }
}

#[derive(Debug)]
pub enum TryInitError<'a> {
    InitError(InitError<'a>),
    WouldBlock,
}

impl<'a> From<InitError<'a>> for TryInitError<'a> {
    fn from(value: InitError<'a>) -> Self {
        TryInitError::InitError(value)
    }
}

impl core::fmt::Display for TryInitError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            TryInitError::InitError(err) => err.fmt(f),
            TryInitError::WouldBlock => f.write_str("GLFW is already initialized"),
        }
    }
}

impl core::error::Error for TryInitError<'_> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            TryInitError::InitError(err) => err.source(),
            TryInitError::WouldBlock => None,
        }
    }
}

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Platform {
    Any = sys::GLFW_ANY_PLATFORM,
    Win32 = sys::GLFW_PLATFORM_WIN32,
    Cocoa = sys::GLFW_PLATFORM_COCOA,
    Wayland = sys::GLFW_PLATFORM_WAYLAND,
    X11 = sys::GLFW_PLATFORM_X11,
    Null = sys::GLFW_PLATFORM_NULL,
}

impl TryFrom<i32> for Platform {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value >= sys::GLFW_ANY_PLATFORM && value <= sys::GLFW_PLATFORM_NULL {
            Ok(unsafe { mem::transmute(value) })
        } else {
            Err(value)
        }
    }
}

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WaylandLibDecor {
    Prefer = sys::GLFW_WAYLAND_PREFER_LIBDECOR,
    Disable = sys::GLFW_WAYLAND_DISABLE_LIBDECOR,
}

#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AnglePlatformType {
    None = sys::GLFW_ANGLE_PLATFORM_TYPE_NONE,
    OpenGl = sys::GLFW_ANGLE_PLATFORM_TYPE_OPENGL,
    OpenGlEs = sys::GLFW_ANGLE_PLATFORM_TYPE_OPENGLES,
    D3D9 = sys::GLFW_ANGLE_PLATFORM_TYPE_D3D9,
    D3D11 = sys::GLFW_ANGLE_PLATFORM_TYPE_D3D11,
    Vulkan = sys::GLFW_ANGLE_PLATFORM_TYPE_VULKAN,
    Metal = sys::GLFW_ANGLE_PLATFORM_TYPE_METAL,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitHint {
    Platform(Platform),
    JoystickHatButtons(bool),
    CocoaChdirResources(bool),
    CocoaMenubar(bool),
    WaylandLibDecor(WaylandLibDecor),
    X11XcbVulkanSurface(bool),
    AnglePlatformType(AnglePlatformType),
}

impl InitHint {
    pub fn none() -> &'static [InitHint] {
        &[]
    }

    /// https://www.glfw.org/docs/3.4/intro_guide.html#init_hints
    fn default_hints() -> &'static [InitHint] {
        &[
            InitHint::Platform(Platform::Any),
            InitHint::JoystickHatButtons(true),
            InitHint::AnglePlatformType(AnglePlatformType::None),
            InitHint::CocoaChdirResources(true),
            InitHint::CocoaMenubar(true),
            InitHint::WaylandLibDecor(WaylandLibDecor::Prefer),
            InitHint::X11XcbVulkanSurface(true),
        ]
    }

    /// The `(hint, value)` pair passed to `glfwInitHint`.
    fn to_raw(&self) -> (c_int, c_int) {
        match *self {
            InitHint::Platform(platform) => (sys::GLFW_PLATFORM, platform as c_int),
            InitHint::JoystickHatButtons(value) => (sys::GLFW_JOYSTICK_HAT_BUTTONS, glfw_bool(value)),
            InitHint::CocoaChdirResources(value) => {
                (sys::GLFW_COCOA_CHDIR_RESOURCES, glfw_bool(value))
            }
            InitHint::CocoaMenubar(value) => (sys::GLFW_COCOA_MENUBAR, glfw_bool(value)),
            InitHint::WaylandLibDecor(value) => (sys::GLFW_WAYLAND_LIBDECOR, value as c_int),
            InitHint::X11XcbVulkanSurface(value) => {
                (sys::GLFW_X11_XCB_VULKAN_SURFACE, glfw_bool(value))
            }
            InitHint::AnglePlatformType(value) => (sys::GLFW_ANGLE_PLATFORM_TYPE, value as c_int),
        }
    }
}

fn glfw_bool(value: bool) -> c_int {
    if value {
        sys::GLFW_TRUE
    } else {
        sys::GLFW_FALSE
    }
}

/// GLFW 3.4 error codes.
#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    NotInitialized = sys::GLFW_NOT_INITIALIZED,
    NoCurrentContext = sys::GLFW_NO_CURRENT_CONTEXT,
    InvalidEnum = sys::GLFW_INVALID_ENUM,
    InvalidValue = sys::GLFW_INVALID_VALUE,
    OutOfMemory = sys::GLFW_OUT_OF_MEMORY,
    ApiUnavailable = sys::GLFW_API_UNAVAILABLE,
    VersionUnavailable = sys::GLFW_VERSION_UNAVAILABLE,
    PlatformError = sys::GLFW_PLATFORM_ERROR,
    FormatUnavailable = sys::GLFW_FORMAT_UNAVAILABLE,
    NoWindowContext = sys::GLFW_NO_WINDOW_CONTEXT,
    CursorUnavailable = sys::GLFW_CURSOR_UNAVAILABLE,
    FeatureUnavailable = sys::GLFW_FEATURE_UNAVAILABLE,
    FeatureUnimplemented = sys::GLFW_FEATURE_UNIMPLEMENTED,
    PlatformUnavailable = sys::GLFW_PLATFORM_UNAVAILABLE,
}

impl TryFrom<i32> for ErrorCode {
    type Error = i32;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        if value >= sys::GLFW_NOT_INITIALIZED && value <= sys::GLFW_PLATFORM_UNAVAILABLE {
            Ok(unsafe { mem::transmute(value) })
        } else {
            Err(value)
        }
    }
}

#[derive(Debug)]
pub struct Error {
    pub code: i32,
    pub desc: String,
}

impl Error {
    /// The named error code, or `None` for codes outside GLFW 3.4's set.
    pub fn kind(&self) -> Option<ErrorCode> {
        ErrorCode::try_from(self.code).ok()
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        None
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ({:#x})", self.desc, self.code)
    }
}

fn unknown_error() -> Error {
    Error {
        code: -1,
        desc: String::from("Unknown error"),
    }
}

fn initialize<'a>(hints: &'a [InitHint], init_guard: InitGuard) -> Result<Glfw, InitError<'a>> {
    unsafe {
        sys::glfwSetErrorCallback(Some(error_callback));
    }
    let default_hints = InitHint::default_hints();
    for hint in default_hints.iter().chain(hints.iter()) {
        let (name, value) = hint.to_raw();
        unsafe {
            sys::glfwInitHint(name, value);
            Glfw::get_error().map_err(|err| InitError::Hint(hint, err))?;
        }
    }
    unsafe {
        if sys::GLFW_TRUE == sys::glfwInit() {
            Ok(Glfw {
                terminate: Rc::new(Terminate {
                    _init_guard: init_guard,
                    _phantom: PhantomData,
                }),
            })
        } else {
            Err(InitError::Init(
                Glfw::get_error().err().unwrap_or_else(unknown_error),
            ))
        }
    }
}

impl Glfw {
    /// Take the last error reported by GLFW on this thread, clearing it.
    #[doc(alias = "glfwGetError")]
    pub fn get_error() -> Result<(), Error> {
        unsafe {
            let mut desc = ptr::null();
            let code = sys::glfwGetError(&mut desc);
            if sys::GLFW_NO_ERROR != code {
                let desc = if desc.is_null() {
                    String::new()
                } else {
                    CStr::from_ptr(desc).to_string_lossy().into_owned()
                };
                Err(Error { code, desc })
            } else {
                Ok(())
            }
        }
    }

    /// Initialize GLFW, blocking while another `Glfw` handle is alive.
    ///
    /// GLFW's documented defaults are applied for every init hint before `hints`,
    /// so hints left over from an earlier initialization do not leak through.
    #[doc(alias = "glfwInit")]
    #[doc(alias = "glfwInitHint")]
    pub fn init<'a>(hints: &'a [InitHint]) -> Result<Glfw, InitError<'a>> {
        let init_guard = INIT.lock().map_err(|_| InitError::Poisoned)?;
        Ok(initialize(hints, init_guard)?)
    }

    #[doc(alias = "glfwInit")]
    #[doc(alias = "glfwInitHint")]
    pub fn try_init<'a>(hints: &'a [InitHint]) -> Result<Glfw, TryInitError<'a>> {
        let init_guard = INIT.try_lock().map_err(|err| match err {
            TryLockError::Poisoned(_) => TryInitError::InitError(InitError::Poisoned),
            TryLockError::WouldBlock => TryInitError::WouldBlock,
        })?;
        Ok(initialize(hints, init_guard)?)
    }

    #[doc(alias = "glfwPlatformSupported")]
    pub fn platform_supported(platform: Platform) -> bool {
        unsafe { sys::GLFW_TRUE == sys::glfwPlatformSupported(platform as i32) }
    }

    #[doc(alias = "glfwGetVersion")]
    pub fn get_version() -> (i32, i32, i32) {
        let mut major = 0;
        let mut minor = 0;
        let mut patch = 0;
        unsafe { sys::glfwGetVersion(&mut major, &mut minor, &mut patch) }
        (major, minor, patch)
    }

    #[doc(alias = "glfwGetVersionString")]
    pub fn get_version_string() -> String {
        unsafe {
            CStr::from_ptr(sys::glfwGetVersionString())
                .to_string_lossy()
                .into_owned()
        }
    }

    #[doc(alias = "glfwGetPlatform")]
    pub fn get_platform(&self) -> Platform {
        let platform = unsafe { sys::glfwGetPlatform() };
        match platform {
            sys::GLFW_PLATFORM_WIN32 => Platform::Win32,
            sys::GLFW_PLATFORM_COCOA => Platform::Cocoa,
            sys::GLFW_PLATFORM_WAYLAND => Platform::Wayland,
            sys::GLFW_PLATFORM_X11 => Platform::X11,
            sys::GLFW_PLATFORM_NULL => Platform::Null,
            _ => Platform::Any,
        }
    }

    /// Seconds since GLFW was initialized.
    #[doc(alias = "glfwGetTime")]
    pub fn get_time(&self) -> f64 {
        unsafe { sys::glfwGetTime() }
    }

    /// Requires a current context on the calling thread.
    #[doc(alias = "glfwSwapInterval")]
    pub fn set_swap_interval(&self, interval: i32) -> Result<(), Error> {
        unsafe {
            sys::glfwSwapInterval(interval);
            Glfw::get_error()
        }
    }

    /// Whether the current context supports the named API extension.
    /// Names that cannot be passed to C are never supported.
    #[doc(alias = "glfwExtensionSupported")]
    pub fn extension_supported(&self, name: &str) -> bool {
        match CString::new(name) {
            Ok(name) => unsafe { sys::GLFW_TRUE == sys::glfwExtensionSupported(name.as_ptr()) },
            Err(_) => false,
        }
    }

    /// Address of the named client API function in the current context.
    ///
    /// See [`get_proc_address_str`]. Like it, this leaves any GLFW error pending
    /// for the caller to read with [`Glfw::get_error`].
    #[doc(alias = "glfwGetProcAddress")]
    pub fn get_proc_address(&self, name: &str) -> *const core::ffi::c_void {
        get_proc_address_str(name)
    }

    /// Detach the calling thread's current context, if any.
    #[doc(alias = "glfwMakeContextCurrent")]
    pub fn make_context_non_current(&self) -> Result<(), Error> {
        unsafe {
            sys::glfwMakeContextCurrent(ptr::null_mut());
            Glfw::get_error()
        }
    }

    #[doc(alias = "glfwCreateWindow")]
    #[doc(alias = "glfwWindowHint")]
    pub fn create_window<'a>(
        &self,
        hints: &'a [WindowHint],
        width: i32,
        height: i32,
        title: &str,
        share: Option<&Window>,
    ) -> Result<Window, CreateWindowError<'a>> {
        let title = CString::new(title).map_err(CreateWindowError::Title)?;
        unsafe {
            if let Err(err) = Glfw::get_error() {
                log::debug!("discarding earlier GLFW error: {}", err);
            }
            sys::glfwDefaultWindowHints();
            Glfw::get_error().expect(GLFW_NOT_INITIALIZED);
            for hint in hints.iter() {
                let (name, value) = hint.to_raw();
                sys::glfwWindowHint(name, value);
                Glfw::get_error().map_err(|err| CreateWindowError::Hint(hint, err))?;
            }
            let share_ptr = share.map(|w| w.window_ptr).unwrap_or(ptr::null_mut());
            let window_ptr =
                sys::glfwCreateWindow(width, height, title.as_ptr(), ptr::null_mut(), share_ptr);
            if window_ptr.is_null() {
                return Err(CreateWindowError::CreateWindow(
                    Glfw::get_error().err().unwrap_or_else(unknown_error),
                ));
            }
            log::debug!("created window {:?} ({}x{})", title, width, height);
            callbacks::set_window_callbacks(window_ptr);
            let terminate = Rc::clone(&self.terminate);
            Ok(Window::new(window_ptr, terminate))
        }
    }

    #[doc(alias = "glfwPollEvents")]
    pub fn poll_events<F>(&self, event_handler: &mut F) -> Result<(), Error>
    where
        F: FnMut(WindowId, (f64, WindowEvent)) -> Option<(f64, WindowEvent)>,
    {
        let _unset_handler_guard = callbacks::set_handler(event_handler);
        unsafe {
            sys::glfwPollEvents();
            Glfw::get_error()?;
        }
        Ok(())
    }

    #[doc(alias = "glfwWaitEvents")]
    pub fn wait_events<F>(&self, event_handler: &mut F) -> Result<(), Error>
    where
        F: FnMut(WindowId, (f64, WindowEvent)) -> Option<(f64, WindowEvent)>,
    {
        let _unset_handler_guard = callbacks::set_handler(event_handler);
        unsafe {
            sys::glfwWaitEvents();
            Glfw::get_error()?;
        }
        Ok(())
    }

    #[doc(alias = "glfwWaitEventsTimeout")]
    pub fn wait_events_timeout<F>(
        &self,
        timeout: Duration,
        event_handler: &mut F,
    ) -> Result<(), Error>
    where
        F: FnMut(WindowId, (f64, WindowEvent)) -> Option<(f64, WindowEvent)>,
    {
        let _unset_handler_guard = callbacks::set_handler(event_handler);
        unsafe {
            sys::glfwWaitEventsTimeout(timeout.as_secs_f64());
            Glfw::get_error()?;
        }
        Ok(())
    }
}

unsafe extern "C" fn error_callback(code: c_int, desc: *const c_char) {
    if desc.is_null() {
        log::debug!("GLFW error {:#x}", code);
    } else {
        log::debug!("GLFW error {:#x}: {}", code, CStr::from_ptr(desc).to_string_lossy());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowHint {
    Resizable(bool),
    Visible(bool),
    Decorated(bool),
    Focused(bool),
    AutoIconify(bool),
    Floating(bool),
    Maximized(bool),
    CenterCursor(bool),
    TransparentFramebuffer(bool),
    FocusOnShow(bool),
    ScaleToMonitor(bool),
    ScaleFramebuffer(bool),
    MousePassthrough(bool),
    PositionX(i32),
    PositionY(i32),
    RedBits(i32),
    GreenBits(i32),
    BlueBits(i32),
    AlphaBits(i32),
    DepthBits(i32),
    StencilBits(i32),
    AccumRedBits(i32),
    AccumGreenBits(i32),
    AccumBlueBits(i32),
    AccumAlphaBits(i32),
    AuxBuffers(i32),
    Samples(i32),
    RefreshRate(i32),
    Stereo(bool),
    SrgbCapable(bool),
    Doublebuffer(bool),
    ClientApi(ClientApi),
    ContextCreationApi(ContextCreationApi),
    ContextVersionMajor(i32),
    ContextVersionMinor(i32),
    ContextRobustness(ContextRobustness),
    ContextReleaseBehavior(ContextReleaseBehavior),
    ContextNoError(bool),
    ContextDebug(bool),
    OpenGlForwardCompat(bool),
    OpenGlProfile(OpenGlProfile),
}

impl WindowHint {
    pub fn none() -> &'static [WindowHint] {
        &[]
    }

    /// The `(hint, value)` pair passed to `glfwWindowHint`.
    fn to_raw(&self) -> (c_int, c_int) {
        match *self {
            WindowHint::Resizable(value) => (sys::GLFW_RESIZABLE, glfw_bool(value)),
            WindowHint::Visible(value) => (sys::GLFW_VISIBLE, glfw_bool(value)),
            WindowHint::Decorated(value) => (sys::GLFW_DECORATED, glfw_bool(value)),
            WindowHint::Focused(value) => (sys::GLFW_FOCUSED, glfw_bool(value)),
            WindowHint::AutoIconify(value) => (sys::GLFW_AUTO_ICONIFY, glfw_bool(value)),
            WindowHint::Floating(value) => (sys::GLFW_FLOATING, glfw_bool(value)),
            WindowHint::Maximized(value) => (sys::GLFW_MAXIMIZED, glfw_bool(value)),
            WindowHint::CenterCursor(value) => (sys::GLFW_CENTER_CURSOR, glfw_bool(value)),
            WindowHint::TransparentFramebuffer(value) => {
                (sys::GLFW_TRANSPARENT_FRAMEBUFFER, glfw_bool(value))
            }
            WindowHint::FocusOnShow(value) => (sys::GLFW_FOCUS_ON_SHOW, glfw_bool(value)),
            WindowHint::ScaleToMonitor(value) => (sys::GLFW_SCALE_TO_MONITOR, glfw_bool(value)),
            WindowHint::ScaleFramebuffer(value) => (sys::GLFW_SCALE_FRAMEBUFFER, glfw_bool(value)),
            WindowHint::MousePassthrough(value) => (sys::GLFW_MOUSE_PASSTHROUGH, glfw_bool(value)),
            WindowHint::PositionX(value) => (sys::GLFW_POSITION_X, value),
            WindowHint::PositionY(value) => (sys::GLFW_POSITION_Y, value),
            WindowHint::RedBits(value) => (sys::GLFW_RED_BITS, value),
            WindowHint::GreenBits(value) => (sys::GLFW_GREEN_BITS, value),
            WindowHint::BlueBits(value) => (sys::GLFW_BLUE_BITS, value),
            WindowHint::AlphaBits(value) => (sys::GLFW_ALPHA_BITS, value),
            WindowHint::DepthBits(value) => (sys::GLFW_DEPTH_BITS, value),
            WindowHint::StencilBits(value) => (sys::GLFW_STENCIL_BITS, value),
            WindowHint::AccumRedBits(value) => (sys::GLFW_ACCUM_RED_BITS, value),
            WindowHint::AccumGreenBits(value) => (sys::GLFW_ACCUM_GREEN_BITS, value),
            WindowHint::AccumBlueBits(value) => (sys::GLFW_ACCUM_BLUE_BITS, value),
            WindowHint::AccumAlphaBits(value) => (sys::GLFW_ACCUM_ALPHA_BITS, value),
            WindowHint::AuxBuffers(value) => (sys::GLFW_AUX_BUFFERS, value),
            WindowHint::Samples(value) => (sys::GLFW_SAMPLES, value),
            WindowHint::RefreshRate(value) => (sys::GLFW_REFRESH_RATE, value),
            WindowHint::Stereo(value) => (sys::GLFW_STEREO, glfw_bool(value)),
            WindowHint::SrgbCapable(value) => (sys::GLFW_SRGB_CAPABLE, glfw_bool(value)),
            WindowHint::Doublebuffer(value) => (sys::GLFW_DOUBLEBUFFER, glfw_bool(value)),
            WindowHint::ClientApi(value) => (sys::GLFW_CLIENT_API, value as c_int),
            WindowHint::ContextCreationApi(value) => {
                (sys::GLFW_CONTEXT_CREATION_API, value as c_int)
            }
            WindowHint::ContextVersionMajor(value) => (sys::GLFW_CONTEXT_VERSION_MAJOR, value),
            WindowHint::ContextVersionMinor(value) => (sys::GLFW_CONTEXT_VERSION_MINOR, value),
            WindowHint::ContextRobustness(value) => (sys::GLFW_CONTEXT_ROBUSTNESS, value as c_int),
            WindowHint::ContextReleaseBehavior(value) => {
                (sys::GLFW_CONTEXT_RELEASE_BEHAVIOR, value as c_int)
            }
            WindowHint::ContextNoError(value) => (sys::GLFW_CONTEXT_NO_ERROR, glfw_bool(value)),
            WindowHint::ContextDebug(value) => (sys::GLFW_CONTEXT_DEBUG, glfw_bool(value)),
            WindowHint::OpenGlForwardCompat(value) => {
                (sys::GLFW_OPENGL_FORWARD_COMPAT, glfw_bool(value))
            }
            WindowHint::OpenGlProfile(value) => (sys::GLFW_OPENGL_PROFILE, value as c_int),
        }
    }
}

#[derive(Debug)]
pub enum CreateWindowError<'a> {
    Hint(&'a WindowHint, Error),
    Title(NulError),
    CreateWindow(Error),
}

impl core::fmt::Display for CreateWindowError<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            CreateWindowError::Hint(hint, err) => write!(f, "window hint {:?} rejected: {}", hint, err),
            CreateWindowError::Title(err) => write!(f, "invalid window title: {}", err),
            CreateWindowError::CreateWindow(err) => write!(f, "glfwCreateWindow failed: {}", err),
        }
    }
}

impl core::error::Error for CreateWindowError<'_> {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            CreateWindowError::Hint(_, err) | CreateWindowError::CreateWindow(err) => Some(err),
            CreateWindowError::Title(err) => Some(err),
        }
    }
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientApi {
    OpenGl = sys::GLFW_OPENGL_API,
    OpenGlEs = sys::GLFW_OPENGL_ES_API,
    None = sys::GLFW_NO_API,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenGlProfile {
    Any = sys::GLFW_OPENGL_ANY_PROFILE,
    Core = sys::GLFW_OPENGL_CORE_PROFILE,
    Compat = sys::GLFW_OPENGL_COMPAT_PROFILE,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextCreationApi {
    Native = sys::GLFW_NATIVE_CONTEXT_API,
    Egl = sys::GLFW_EGL_CONTEXT_API,
    OsMesa = sys::GLFW_OSMESA_CONTEXT_API,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextRobustness {
    None = sys::GLFW_NO_ROBUSTNESS,
    NoResetNotification = sys::GLFW_NO_RESET_NOTIFICATION,
    LoseContextOnReset = sys::GLFW_LOSE_CONTEXT_ON_RESET,
}

#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextReleaseBehavior {
    Any = sys::GLFW_ANY_RELEASE_BEHAVIOR,
    Flush = sys::GLFW_RELEASE_BEHAVIOR_FLUSH,
    None = sys::GLFW_RELEASE_BEHAVIOR_NONE,
}

#[derive(Clone, PartialEq, Debug)]
pub enum WindowEvent {
    Pos(i32, i32),
    Size(i32, i32),
    Close,
    Refresh,
    Focus(bool),
    Iconify(bool),
    FramebufferSize(i32, i32),
    Key(Key, Scancode, Action, Modifiers),
    Char(Codepoint),
    Maximize(bool),
    ContentScale(f32, f32),
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::*;
    use glfw3_sys as sys;

    macro_rules! assert_not_impl {
        ($x:ty, $($t:path),+ $(,)*) => {
            const _: fn() -> () = || {
                struct Check<T: ?Sized>(T);
                trait AmbiguousIfImpl<A> { fn some_item() { } }

                impl<T: ?Sized> AmbiguousIfImpl<()> for Check<T> { }
                impl<T: ?Sized $(+ $t)*> AmbiguousIfImpl<u8> for Check<T> { }

                <Check::<$x> as AmbiguousIfImpl<_>>::some_item()
            };
        };
    }

    assert_not_impl!(Glfw, Send, Sync);
    assert_not_impl!(Terminate, Send, Sync);
    assert_not_impl!(Window, Send, Sync);

    pub(crate) const INIT_HINTS: &[InitHint] = &[InitHint::Platform(Platform::Null)];

    pub(crate) const HEADLESS_WINDOW: &[WindowHint] = &[WindowHint::ClientApi(ClientApi::None)];

    #[test]
    fn platform_supported() {
        assert!(Glfw::platform_supported(Platform::Null));
    }

    #[test]
    fn init() {
        let glfw = Glfw::init(INIT_HINTS).expect("it failed");
        assert_eq!(Platform::Null, glfw.get_platform());
    }

    #[test]
    fn init_twice_in_sequence() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        drop(glfw);
        let _glfw = Glfw::init(INIT_HINTS).unwrap();
    }

    #[test]
    fn try_init_while_initialized() {
        let _glfw = Glfw::init(INIT_HINTS).unwrap();
        match Glfw::try_init(INIT_HINTS) {
            Err(TryInitError::WouldBlock) => {}
            other => panic!("expected WouldBlock, got {:?}", other),
        }
    }

    #[test]
    fn get_version() {
        let (major, minor, _patch) = Glfw::get_version();
        assert_eq!((3, 4), (major, minor.min(4)));
        assert!(Glfw::get_version_string().starts_with("3."));
    }

    #[test]
    fn get_time_is_monotonic() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let first = glfw.get_time();
        let second = glfw.get_time();
        assert!(first >= 0.0);
        assert!(second >= first);
    }

    #[test]
    fn init_hint_raw_values() {
        assert_eq!(
            (sys::GLFW_PLATFORM, sys::GLFW_PLATFORM_NULL),
            InitHint::Platform(Platform::Null).to_raw()
        );
        assert_eq!(
            (sys::GLFW_JOYSTICK_HAT_BUTTONS, sys::GLFW_FALSE),
            InitHint::JoystickHatButtons(false).to_raw()
        );
        assert_eq!(
            (sys::GLFW_WAYLAND_LIBDECOR, sys::GLFW_WAYLAND_DISABLE_LIBDECOR),
            InitHint::WaylandLibDecor(WaylandLibDecor::Disable).to_raw()
        );
    }

    #[test]
    fn window_hint_raw_values() {
        assert_eq!(
            (sys::GLFW_OPENGL_PROFILE, sys::GLFW_OPENGL_CORE_PROFILE),
            WindowHint::OpenGlProfile(OpenGlProfile::Core).to_raw()
        );
        assert_eq!(
            (sys::GLFW_CONTEXT_VERSION_MAJOR, 4),
            WindowHint::ContextVersionMajor(4).to_raw()
        );
        assert_eq!(
            (sys::GLFW_OPENGL_FORWARD_COMPAT, sys::GLFW_TRUE),
            WindowHint::OpenGlForwardCompat(true).to_raw()
        );
        assert_eq!(
            (sys::GLFW_CLIENT_API, sys::GLFW_NO_API),
            WindowHint::ClientApi(ClientApi::None).to_raw()
        );
        assert_eq!(
            (sys::GLFW_SAMPLES, DONT_CARE),
            WindowHint::Samples(DONT_CARE).to_raw()
        );
    }

    #[test]
    fn error_kind() {
        let err = Error {
            code: sys::GLFW_NO_CURRENT_CONTEXT,
            desc: String::from("no context"),
        };
        assert_eq!(Some(ErrorCode::NoCurrentContext), err.kind());
        assert_eq!("no context (0x10002)", err.to_string());
        assert_eq!(None, unknown_error().kind());
    }

    #[test]
    fn create_window() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let _window = glfw
            .create_window(HEADLESS_WINDOW, 800, 600, "test", None)
            .expect("create_window");
    }

    #[test]
    fn create_window_rejects_nul_in_title() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        match glfw.create_window(HEADLESS_WINDOW, 800, 600, "te\0st", None) {
            Err(CreateWindowError::Title(_)) => {}
            other => panic!("expected a title error, got {:?}", other.err()),
        }
    }

    #[test]
    fn window_outlives_glfw_handle() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        let window = glfw
            .create_window(HEADLESS_WINDOW, 320, 240, "test", None)
            .unwrap();
        drop(glfw);
        assert!(!window.should_close());
    }

    #[test]
    fn extension_supported_without_context() {
        let glfw = Glfw::init(INIT_HINTS).unwrap();
        assert!(!glfw.extension_supported("GL_ARB_debug_output"));
        assert_eq!(
            Some(ErrorCode::NoCurrentContext),
            Glfw::get_error().unwrap_err().kind()
        );
        assert!(!glfw.extension_supported("GL_\0"));
    }
}
