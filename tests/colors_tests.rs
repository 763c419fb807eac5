//! Integration tests for the colors module

use palette::Srgb;
use status_ring::colors::{scale, wheel};
use status_ring::{BLUE, COLOR_OFF, GREEN, RED};

#[test]
fn scale_at_full_intensity_is_identity() {
    for color in [RED, GREEN, BLUE, Srgb::new(17, 130, 211)] {
        assert_eq!(scale(color, 255), color);
    }
}

#[test]
fn scale_at_zero_is_black() {
    for color in [RED, GREEN, BLUE, Srgb::new(255, 255, 255)] {
        assert_eq!(scale(color, 0), COLOR_OFF);
    }
}

#[test]
fn scale_truncates_toward_zero() {
    // 255*100/255 = 100, 55*100/255 = 21.56 -> 21, 1*100/255 -> 0
    assert_eq!(scale(Srgb::new(255, 55, 1), 100), Srgb::new(100, 21, 0));
}

#[test]
fn scaling_the_base_differs_from_rescaling_a_scaled_color() {
    // 200 scaled by 128 twice underflows what a single scale of the base
    // gives, which is why patterns always scale from the base color.
    let base = Srgb::new(200, 200, 200);
    let once = scale(base, 128);
    let twice = scale(once, 128);
    assert!(twice.red < once.red);
}

#[test]
fn wheel_zero_is_red() {
    assert_eq!(wheel(0), Srgb::new(255, 0, 0));
}

#[test]
fn wheel_band_starts_are_pure_primaries() {
    assert_eq!(wheel(85), Srgb::new(0, 255, 0));
    assert_eq!(wheel(170), Srgb::new(0, 0, 255));
}

#[test]
fn wheel_cycle_closes_exactly() {
    // The third band tops out at 3 * 85 = 255, landing back on red
    assert_eq!(wheel(255), Srgb::new(255, 0, 0));
    assert_eq!(wheel(255), wheel(0));
}

#[test]
fn wheel_is_continuous_at_band_boundaries() {
    for (a, b) in [(84u8, 85u8), (169, 170), (255, 0)] {
        let ca = wheel(a);
        let cb = wheel(b);
        assert!(
            ca.red.abs_diff(cb.red) <= 3
                && ca.green.abs_diff(cb.green) <= 3
                && ca.blue.abs_diff(cb.blue) <= 3,
            "seam between positions {} and {}: {:?} vs {:?}",
            a,
            b,
            ca,
            cb
        );
    }
}

#[test]
fn wheel_always_leaves_one_channel_dark() {
    for position in 0..=255u8 {
        let c = wheel(position);
        assert!(
            c.red == 0 || c.green == 0 || c.blue == 0,
            "position {} has no dark channel: {:?}",
            position,
            c
        );
    }
}
