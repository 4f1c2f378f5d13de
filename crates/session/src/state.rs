use foundation::geo::GeoPoint;
use foundation::time::Time;
use viewport::adapter::EntityHandle;

/// Where the one-shot submission workflow currently stands.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// No marker placed; submit disabled.
    NoGuess,
    /// Marker exists; submit enabled.
    Ready,
    /// Request in flight (or already succeeded); submit disabled.
    Submitting,
    /// Request failed; marker retained, submit enabled for retry.
    Failed,
}

/// The player's current pin. At most one exists at any time; replaced (never
/// merely removed) on every valid click.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct GuessMarker {
    pub position: GeoPoint,
    pub placed_at: Time,
    pub handle: EntityHandle,
}
