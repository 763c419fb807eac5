//! Integer color helpers.
//!
//! Provides the two operations every pattern builds on: intensity scaling
//! and the classic 256-position hue wheel. Both are pure functions over
//! 8-bit values with no floating point, matching what the LED hardware
//! actually consumes.
//!
//! All functions return `palette::Srgb<u8>` for direct use with the engine.

use palette::Srgb;

/// Scales a color to the given intensity.
///
/// Each channel becomes `c * intensity / 255` (integer division, truncating
/// toward zero). `scale(c, 255)` is the identity and `scale(c, 0)` is black.
///
/// Truncation means repeated scaling is not exactly composable: scale from
/// the full-intensity base color each frame, never from an already-scaled
/// value, or the result drifts toward black.
#[inline]
pub fn scale(color: Srgb<u8>, intensity: u8) -> Srgb<u8> {
    let s = u16::from(intensity);
    Srgb::new(
        (u16::from(color.red) * s / 255) as u8,
        (u16::from(color.green) * s / 255) as u8,
        (u16::from(color.blue) * s / 255) as u8,
    )
}

/// Maps a wheel position to a fully saturated color.
///
/// The 256 positions split into three 85-wide bands producing a smooth
/// red → green → blue → red transition. Adjacent positions never differ by
/// more than 3 per channel, so a rotating ring shows no seams, and position
/// 255 lands back on red next to position 0.
#[inline]
pub fn wheel(position: u8) -> Srgb<u8> {
    if position < 85 {
        Srgb::new(255 - position * 3, position * 3, 0)
    } else if position < 170 {
        let p = position - 85;
        Srgb::new(0, 255 - p * 3, p * 3)
    } else {
        let p = position - 170;
        Srgb::new(p * 3, 0, 255 - p * 3)
    }
}
