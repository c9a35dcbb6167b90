//! The render hook boards invoke after every mutation.
//!
//! An observer implements [`RenderCallback`] (or is a plain closure wrapped
//! with [`render_fn`]). It receives a borrowed [`BoardState`] that is valid
//! only for the duration of the call; use [`BoardState::to_snapshot`] to
//! keep a copy.

use crate::error::RenderError;
use crate::state::BoardState;

/// Observer notified synchronously after each board mutation.
pub trait RenderCallback: Send {
    /// Called once per `tick()` and once per effective cell write.
    ///
    /// # Errors
    ///
    /// Any error is returned unmodified from the board operation that
    /// triggered the notification.
    fn on_render(&mut self, state: &BoardState<'_>) -> Result<(), RenderError>;
}

impl<F> RenderCallback for F
where
    F: FnMut(&BoardState<'_>) -> Result<(), RenderError> + Send,
{
    fn on_render(&mut self, state: &BoardState<'_>) -> Result<(), RenderError> {
        self(state)
    }
}

/// Pin a closure to the render callback signature.
///
/// Closures passed straight to a generic `impl RenderCallback` parameter
/// cannot infer their argument lifetime or error type; routing them through
/// this function fixes both.
pub const fn render_fn<F>(f: F) -> F
where
    F: FnMut(&BoardState<'_>) -> Result<(), RenderError> + Send,
{
    f
}

/// A render callback that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpRender;

impl RenderCallback for NoOpRender {
    fn on_render(&mut self, _state: &BoardState<'_>) -> Result<(), RenderError> {
        Ok(())
    }
}
