//! Fullscreen toggle.

use crate::ports::Fullscreen;

/// Direction the toggle went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FullscreenChange {
    Entered,
    Exited,
}

/// Enter fullscreen when nothing is fullscreen, leave it otherwise.
///
/// # Errors
///
/// Returns the host error unchanged; there is no fallback.
pub fn toggle_fullscreen<F: Fullscreen>(screen: &F) -> Result<FullscreenChange, F::Error> {
    if screen.is_active() {
        screen.exit()?;
        Ok(FullscreenChange::Exited)
    } else {
        screen.enter()?;
        Ok(FullscreenChange::Entered)
    }
}
