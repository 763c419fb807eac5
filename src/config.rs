//! Init-time configuration and its validation errors.

/// Configuration for a [`StatusRing`](crate::StatusRing), consumed once at
/// construction.
///
/// Starts from the pixel count; everything else defaults to values tuned
/// for a 20 ms control loop (a derived pulse step of 5). Setters chain by
/// value.
#[derive(Debug, Clone, Copy)]
pub struct RingConfig {
    pub(crate) pixel_count: u16,
    pub(crate) cycle_time_ms: u32,
    pub(crate) pulses_per_second: u16,
    pub(crate) brightness_max: u8,
    pub(crate) rainbow_step: u8,
}

impl RingConfig {
    /// Creates a configuration for a ring of `pixel_count` LEDs.
    pub fn new(pixel_count: u16) -> Self {
        Self {
            pixel_count,
            cycle_time_ms: 20,
            pulses_per_second: 1,
            brightness_max: 255,
            rainbow_step: 1,
        }
    }

    /// Sets the caller's tick period in milliseconds.
    ///
    /// The pulse increment is derived from this, so it must match how often
    /// the control loop actually invokes the engine. Default is 20.
    pub fn cycle_time_ms(mut self, ms: u32) -> Self {
        self.cycle_time_ms = ms;
        self
    }

    /// Sets the target breathing rate for the pulse pattern. Default is 1.
    pub fn pulses_per_second(mut self, pulses: u16) -> Self {
        self.pulses_per_second = pulses;
        self
    }

    /// Caps the pulse pattern's peak brightness.
    ///
    /// Default is 255 (full range). The breathing bounce turns around at
    /// this ceiling instead of 255.
    pub fn brightness_max(mut self, max: u8) -> Self {
        self.brightness_max = max;
        self
    }

    /// Sets how many wheel positions the rainbow rotates per frame.
    ///
    /// Default is 1, one full revolution every 256 frames.
    pub fn rainbow_step(mut self, step: u8) -> Self {
        self.rainbow_step = step;
        self
    }

    /// Validates the configuration and derives the per-frame pulse
    /// increment (`cycle_time_ms * 255 / pulses_per_second / 1000`,
    /// capped to the 8-bit brightness range).
    ///
    /// # Errors
    /// * `ZeroPixelCount` - Ring has no pixels
    /// * `ZeroCycleTime` - Tick period is zero
    /// * `ZeroPulseRate` - Pulse rate is zero
    /// * `ZeroPulseStep` - Derived pulse increment truncates to zero
    /// * `ZeroRainbowStep` - Rainbow rotation step is zero
    pub(crate) fn validate(&self) -> Result<u8, ConfigError> {
        if self.pixel_count == 0 {
            return Err(ConfigError::ZeroPixelCount);
        }
        if self.cycle_time_ms == 0 {
            return Err(ConfigError::ZeroCycleTime);
        }
        if self.pulses_per_second == 0 {
            return Err(ConfigError::ZeroPulseRate);
        }
        if self.rainbow_step == 0 {
            return Err(ConfigError::ZeroRainbowStep);
        }

        let step = self.cycle_time_ms.saturating_mul(255) / u32::from(self.pulses_per_second) / 1000;
        if step == 0 {
            return Err(ConfigError::ZeroPulseStep);
        }

        Ok(step.min(255) as u8)
    }
}

/// Configuration errors, rejected at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Pixel count is zero.
    ZeroPixelCount,

    /// Tick period is zero.
    ZeroCycleTime,

    /// Pulse rate is zero.
    ZeroPulseRate,

    /// The configured timing derives a pulse increment of zero, so the
    /// breathing pattern would never animate.
    ZeroPulseStep,

    /// Rainbow rotation step is zero, so the rainbow would never rotate.
    ZeroRainbowStep,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::ZeroPixelCount => {
                write!(f, "ring must have at least one pixel")
            }
            ConfigError::ZeroCycleTime => {
                write!(f, "cycle time must be non-zero")
            }
            ConfigError::ZeroPulseRate => {
                write!(f, "pulse rate must be non-zero")
            }
            ConfigError::ZeroPulseStep => {
                write!(
                    f,
                    "cycle time and pulse rate derive a zero pulse increment (increase cycle time or lower the pulse rate)"
                )
            }
            ConfigError::ZeroRainbowStep => {
                write!(f, "rainbow step must be non-zero")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
