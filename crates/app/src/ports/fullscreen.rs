//! Fullscreen port — the host's fullscreen capability.

/// Host fullscreen API.
pub trait Fullscreen {
    /// Error reported by the host when a request is refused.
    type Error;

    /// Whether some element is currently fullscreen.
    fn is_active(&self) -> bool;

    /// Make the whole page fullscreen.
    ///
    /// # Errors
    ///
    /// Returns the host error when fullscreen is unsupported or refused.
    fn enter(&self) -> Result<(), Self::Error>;

    /// Leave fullscreen.
    ///
    /// # Errors
    ///
    /// Returns the host error when the request is refused.
    fn exit(&self) -> Result<(), Self::Error>;
}
