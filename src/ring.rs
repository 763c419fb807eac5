//! Ring animation engine with per-pattern state and mode dispatch.
//!
//! Provides [`StatusRing`] which owns an addressable LED strip and renders
//! one animation frame per invocation, advancing the breathing or rainbow
//! state machine as it goes. Also defines the [`LedStrip`] trait for
//! hardware abstraction.

use crate::colors::{scale, wheel};
use crate::config::{ConfigError, RingConfig};
use crate::mode::Mode;
use crate::{BLUE, COLOR_OFF, GREEN, RED};
use palette::Srgb;

/// Trait for abstracting addressable LED strip hardware.
///
/// Implement this for your LED driver (SPI, RMT, PIO, bit-banged, etc.) to
/// let the engine render through it.
pub trait LedStrip {
    /// Stages a color for the pixel at `index`.
    ///
    /// The engine only passes indices in `[0, pixel_count)`. Handle any
    /// hardware errors internally - this method cannot fail.
    fn set_pixel(&mut self, index: u16, color: Srgb<u8>);

    /// Pushes the staged frame to the hardware.
    fn show(&mut self);
}

/// Breathing state: current level and signed per-frame increment.
///
/// The increment flips sign when the level reaches a bound, producing a
/// symmetric bounce between 0 and the configured ceiling.
#[derive(Debug, Clone, Copy)]
struct PulseState {
    level: u8,
    step: i16,
}

impl PulseState {
    fn new(level: u8, step: u8) -> Self {
        Self {
            level,
            step: i16::from(step),
        }
    }

    /// Advances one frame and returns the new level.
    ///
    /// A bound is rendered exactly once: the level clamps to it the frame
    /// it is reached and moves away the next frame.
    fn advance(&mut self, ceiling: u8) -> u8 {
        let next = i16::from(self.level) + self.step;
        if next >= i16::from(ceiling) {
            self.level = ceiling;
            self.step = -self.step;
        } else if next <= 0 {
            self.level = 0;
            self.step = -self.step;
        } else {
            self.level = next as u8;
        }
        self.level
    }
}

/// Rainbow state: rotation phase and per-frame increment.
///
/// The phase is a `u8` on purpose: only eight bits ever select a wheel
/// position, so type-level wraparound is the rotation period itself and no
/// overflow check is needed.
#[derive(Debug, Clone, Copy)]
struct RainbowState {
    phase: u8,
    step: u8,
}

impl RainbowState {
    fn new(step: u8) -> Self {
        Self { phase: 0, step }
    }

    /// Wheel position of pixel `index` on a ring of `count` pixels: the
    /// hue cycle spread once around the ring, rotated by the phase.
    fn position(&self, index: u16, count: u16) -> u8 {
        ((u32::from(index) * 256 / u32::from(count) + u32::from(self.phase)) & 0xFF) as u8
    }

    fn advance(&mut self) {
        self.phase = self.phase.wrapping_add(self.step);
    }
}

/// Renders device-status animations onto an addressable LED ring.
///
/// The engine owns the strip and both pattern state machines. It is purely
/// reactive: every mode entry point renders at most one frame (all pixels
/// written, then flushed) and advances its pattern by one step. Drive it
/// from a single control loop at the tick rate the configuration describes;
/// it never blocks, allocates, or sleeps.
///
/// # Type Parameters
/// * `S` - LED strip implementation type
pub struct StatusRing<S: LedStrip> {
    strip: S,
    pixel_count: u16,
    brightness_max: u8,
    pulse: PulseState,
    rainbow: RainbowState,
}

impl<S: LedStrip> StatusRing<S> {
    /// Initial breathing level, mid-range so the first idle frames are
    /// visibly alive rather than fading in from black.
    const PULSE_START: u8 = 50;

    /// Creates an engine from a validated configuration.
    ///
    /// Nothing is rendered until the first mode notification; the strip is
    /// left untouched.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] for unusable configurations: a zero pixel
    /// count, zero timing values, or timing that derives a pulse increment
    /// of zero (which would freeze the breathing pattern).
    pub fn new(strip: S, config: RingConfig) -> Result<Self, ConfigError> {
        let step = config.validate()?;

        Ok(Self {
            strip,
            pixel_count: config.pixel_count,
            brightness_max: config.brightness_max,
            pulse: PulseState::new(Self::PULSE_START.min(config.brightness_max), step),
            rainbow: RainbowState::new(config.rainbow_step),
        })
    }

    /// Dispatches a mode notification to its fixed pattern.
    ///
    /// | Mode        | Pattern    | Base color |
    /// |-------------|------------|------------|
    /// | `Startup`   | solid fill | red        |
    /// | `Idle`      | pulse      | green      |
    /// | `StartPlay` | pulse      | red        |
    /// | `Play`      | rainbow    | -          |
    /// | `Pause`     | no-op      | -          |
    /// | `Admin`     | pulse      | blue       |
    ///
    /// Repeating a mode re-renders it one animation step further each call.
    pub fn apply(&mut self, mode: Mode) {
        match mode {
            Mode::Startup => self.on_startup(),
            Mode::Idle => self.on_idle(),
            Mode::StartPlay => self.on_start_play(),
            Mode::Play => self.on_play(),
            Mode::Pause => self.on_pause(),
            Mode::Admin => self.on_admin(),
        }
    }

    /// Fills the ring solid red.
    pub fn on_startup(&mut self) {
        self.solid(RED);
    }

    /// Renders one green breathing step.
    pub fn on_idle(&mut self) {
        self.pulse(GREEN);
    }

    /// Renders one red breathing step.
    pub fn on_start_play(&mut self) {
        self.pulse(RED);
    }

    /// Renders one rainbow rotation step.
    pub fn on_play(&mut self) {
        self.rainbow();
    }

    /// Renders nothing and resets nothing.
    ///
    /// The last flushed frame stays on the strip, and both pattern states
    /// are retained so a later `Play` (or pulse mode) continues exactly
    /// where it left off.
    pub fn on_pause(&mut self) {}

    /// Renders one blue breathing step.
    pub fn on_admin(&mut self) {
        self.pulse(BLUE);
    }

    /// Blanks the ring.
    pub fn off(&mut self) {
        self.solid(COLOR_OFF);
    }

    /// Returns the number of pixels in the ring.
    pub fn pixel_count(&self) -> u16 {
        self.pixel_count
    }

    /// Returns the breathing pattern's current level.
    pub fn pulse_level(&self) -> u8 {
        self.pulse.level
    }

    /// Returns the rainbow pattern's current phase.
    pub fn rainbow_phase(&self) -> u8 {
        self.rainbow.phase
    }

    /// Returns a reference to the strip.
    pub fn strip(&self) -> &S {
        &self.strip
    }

    /// Returns a mutable reference to the strip.
    pub fn strip_mut(&mut self) -> &mut S {
        &mut self.strip
    }

    /// Consumes the engine and returns the strip.
    pub fn into_strip(self) -> S {
        self.strip
    }

    fn pulse(&mut self, base: Srgb<u8>) {
        let level = self.pulse.advance(self.brightness_max);
        // Scale from the canonical base each frame; rescaling the previous
        // frame's color would truncate toward black cumulatively.
        let color = scale(base, level);
        self.fill_with(|_| color);
    }

    fn rainbow(&mut self) {
        let rainbow = self.rainbow;
        let count = self.pixel_count;
        self.fill_with(|i| wheel(rainbow.position(i, count)));
        self.rainbow.advance();
    }

    fn solid(&mut self, color: Srgb<u8>) {
        self.fill_with(|_| color);
    }

    /// Writes one full frame and flushes it.
    fn fill_with(&mut self, mut f: impl FnMut(u16) -> Srgb<u8>) {
        for i in 0..self.pixel_count {
            self.strip.set_pixel(i, f(i));
        }
        self.strip.show();
    }
}
