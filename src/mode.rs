//! Operating-mode notifications.

/// The appliance's operating mode.
///
/// Each mode is bound to a fixed pattern and base color; see
/// [`StatusRing::apply`](crate::StatusRing::apply) for the mapping. Modes
/// are transient notifications; the engine keeps no record of the
/// previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Device is booting.
    Startup,
    /// Waiting for a card.
    Idle,
    /// Card read, playback starting.
    StartPlay,
    /// Audio playing.
    Play,
    /// Playback paused.
    Pause,
    /// Admin menu active.
    Admin,
}
