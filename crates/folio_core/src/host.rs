//! Host environment boundary.
//!
//! # Responsibility
//! - Describe the side effects the engine asks the page host to perform.
//! - Keep the engine free of DOM/window dependencies.

/// How a scroll request should be animated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Side-effect sink implemented by the page host.
///
/// Calls are fire-and-forget; the engine never inspects a response.
pub trait HostEnvironment {
    /// Scrolls the viewport so its top lands at document offset `y`.
    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior);
    /// Opens `url` in a new browsing context.
    fn open_external(&mut self, url: &str);
    /// Navigates to an in-site page such as a project detail route.
    fn open_route(&mut self, path: &str);
    /// Shows a short user-facing notice.
    fn show_notice(&mut self, message: &str);
}

/// One recorded host side effect.
#[derive(Debug, Clone, PartialEq)]
pub enum HostCall {
    ScrollTo { y: f64, behavior: ScrollBehavior },
    OpenExternal(String),
    OpenRoute(String),
    Notice(String),
}

/// Host that records calls instead of performing them.
///
/// Used by the CLI probe and by tests.
#[derive(Debug, Clone, Default)]
pub struct RecordingHost {
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }
}

impl HostEnvironment for RecordingHost {
    fn scroll_to(&mut self, y: f64, behavior: ScrollBehavior) {
        self.calls.push(HostCall::ScrollTo { y, behavior });
    }

    fn open_external(&mut self, url: &str) {
        self.calls.push(HostCall::OpenExternal(url.to_string()));
    }

    fn open_route(&mut self, path: &str) {
        self.calls.push(HostCall::OpenRoute(path.to_string()));
    }

    fn show_notice(&mut self, message: &str) {
        self.calls.push(HostCall::Notice(message.to_string()));
    }
}
