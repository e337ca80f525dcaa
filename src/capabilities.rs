//! Process-wide UI services injected into the form core.
//!
//! Notifications and the creation surface belong to the host application;
//! the core only reaches them through these traits.

#[cfg(feature = "test-mocks")]
use mockall::automock;

/// Transient user-facing notifications (toasts in the host UI).
#[cfg_attr(feature = "test-mocks", automock)]
pub trait Notifier {
    fn success(&self, message: &str);
    fn error(&self, message: &str);
}

/// The surface hosting the form (a modal in the host UI).
#[cfg_attr(feature = "test-mocks", automock)]
pub trait CreationSurface {
    fn close(&self);
}
