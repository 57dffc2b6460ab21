//! Validation errors of the stream itself.

/// Failures the stream detects before issuing any VFS call.
///
/// Backend failures pass through unchanged; these are the adapter's
/// own refusals. They are raised through `Error::msg`, so callers can
/// `downcast_ref::<StreamError>()` to tell the two apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StreamError {
    /// The seek target lies outside `[0, size]`.
    #[error("offset out of range")]
    InvalidOffset,
    /// A write was attempted somewhere other than the end of the object.
    #[error("object is append-only")]
    AppendOnly,
    /// The session has no target object bound.
    #[error("no object bound")]
    Unbound,
}
