#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`StatusRing`**: The animation engine; renders one frame per call onto an LED ring
//! - **`Mode`**: The appliance's operating mode; each maps to a fixed (pattern, color) pair
//! - **`RingConfig`**: Init-time configuration (pixel count, tick period, pulse rate, brightness ceiling)
//! - **`LedStrip`**: Trait to implement for your LED ring hardware
//! - **`colors`**: Integer color helpers (`scale`, `wheel`)
//!
//! The library uses `Srgb<u8>` (0-255 per channel) for all color values, and all
//! color math is integer-only. When implementing `LedStrip` for your hardware,
//! forward the 8-bit channel values to your device's native pixel format.

// Re-export Srgb from palette for user convenience
pub use palette::Srgb;

pub mod colors;
pub mod config;
pub mod mode;
pub mod ring;

pub use config::{ConfigError, RingConfig};
pub use mode::Mode;
pub use ring::{LedStrip, StatusRing};

/// Base color for `Startup` and `StartPlay`.
pub const RED: Srgb<u8> = Srgb::new(255, 0, 0);

/// Base color for `Idle`.
pub const GREEN: Srgb<u8> = Srgb::new(0, 255, 0);

/// Base color for `Admin`.
pub const BLUE: Srgb<u8> = Srgb::new(0, 0, 255);

pub const COLOR_OFF: Srgb<u8> = Srgb::new(0, 0, 0);
