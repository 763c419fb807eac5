//! Shared test infrastructure for status-ring integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use palette::Srgb;
use status_ring::{COLOR_OFF, LedStrip, RingConfig, StatusRing};

// ============================================================================
// Mock Strip
// ============================================================================

/// Capacity of the mock's pixel buffers; tests use rings up to this size.
pub const MAX_PIXELS: usize = 64;

/// One flushed frame.
pub type Frame = heapless::Vec<Srgb<u8>, MAX_PIXELS>;

/// Mock strip that stages pixel writes and keeps the last flushed frame,
/// so tests can tell staged-but-unflushed data from what "hardware" shows.
pub struct MockStrip {
    staged: Frame,
    last_frame: Frame,
    set_pixel_count: usize,
    show_count: usize,
}

impl MockStrip {
    pub fn new(pixel_count: usize) -> Self {
        let mut staged = Frame::new();
        for _ in 0..pixel_count {
            staged.push(COLOR_OFF).unwrap();
        }
        Self {
            last_frame: staged.clone(),
            staged,
            set_pixel_count: 0,
            show_count: 0,
        }
    }

    /// The most recently flushed frame.
    pub fn last_frame(&self) -> &[Srgb<u8>] {
        &self.last_frame
    }

    /// Clones the most recently flushed frame for later comparison.
    pub fn snapshot(&self) -> Frame {
        self.last_frame.clone()
    }

    /// Total number of `show` calls.
    pub fn show_count(&self) -> usize {
        self.show_count
    }

    /// Total number of `set_pixel` calls.
    pub fn set_pixel_count(&self) -> usize {
        self.set_pixel_count
    }
}

impl LedStrip for MockStrip {
    fn set_pixel(&mut self, index: u16, color: Srgb<u8>) {
        self.staged[usize::from(index)] = color;
        self.set_pixel_count += 1;
    }

    fn show(&mut self) {
        self.last_frame = self.staged.clone();
        self.show_count += 1;
    }
}

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds a 16-pixel engine with default timing (derived pulse step 5).
pub fn ring_16() -> StatusRing<MockStrip> {
    StatusRing::new(MockStrip::new(16), RingConfig::new(16)).unwrap()
}

/// Asserts every pixel of the last flushed frame equals `color`.
pub fn assert_all_pixels(strip: &MockStrip, color: Srgb<u8>) {
    for (i, pixel) in strip.last_frame().iter().enumerate() {
        assert_eq!(*pixel, color, "pixel {} mismatch", i);
    }
}
