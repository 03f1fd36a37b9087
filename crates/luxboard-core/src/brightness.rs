//! Lux to artificial-light brightness mapping.
//!
//! Brighter daylight needs less artificial light, so the mapping is
//! inverse and bucketed into three levels.

/// Above this many lux the lights are dimmed to [`DIM_BRIGHTNESS`].
pub const HIGH_DAYLIGHT_LUX: f64 = 500.0;
/// Above this many lux (and up to [`HIGH_DAYLIGHT_LUX`]) lights run at [`MEDIUM_BRIGHTNESS`].
pub const LOW_DAYLIGHT_LUX: f64 = 300.0;

pub const DIM_BRIGHTNESS: u8 = 10;
pub const MEDIUM_BRIGHTNESS: u8 = 40;
pub const FULL_BRIGHTNESS: u8 = 80;

/// Every value [`evaluate_brightness`] can return.
pub const BRIGHTNESS_LEVELS: [u8; 3] = [DIM_BRIGHTNESS, MEDIUM_BRIGHTNESS, FULL_BRIGHTNESS];

/// Map ambient lux to a brightness percentage.
///
/// Thresholds are strict: exactly 500 lux is still the medium bucket and
/// exactly 300 lux is still full brightness. Negative (physically invalid)
/// readings fall into the full-brightness bucket.
pub fn evaluate_brightness(lux: f64) -> u8 {
    if lux > HIGH_DAYLIGHT_LUX {
        DIM_BRIGHTNESS
    } else if lux > LOW_DAYLIGHT_LUX {
        MEDIUM_BRIGHTNESS
    } else {
        FULL_BRIGHTNESS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn boundaries_are_strict() {
        assert_eq!(evaluate_brightness(500.0), 40);
        assert_eq!(evaluate_brightness(500.01), 10);
        assert_eq!(evaluate_brightness(300.0), 80);
        assert_eq!(evaluate_brightness(300.01), 40);
    }

    #[test]
    fn negative_and_zero_lux_use_full_brightness() {
        assert_eq!(evaluate_brightness(0.0), 80);
        assert_eq!(evaluate_brightness(-120.0), 80);
    }

    proptest! {
        #[test]
        fn low_daylight_is_full_brightness(lux in -1_000.0f64..=300.0) {
            prop_assert_eq!(evaluate_brightness(lux), 80);
        }

        #[test]
        fn medium_daylight_is_medium_brightness(lux in 300.0001f64..=500.0) {
            prop_assert_eq!(evaluate_brightness(lux), 40);
        }

        #[test]
        fn high_daylight_is_dim(lux in 500.0001f64..200_000.0) {
            prop_assert_eq!(evaluate_brightness(lux), 10);
        }

        #[test]
        fn result_is_a_known_level(lux in any::<f64>()) {
            prop_assert!(BRIGHTNESS_LEVELS.contains(&evaluate_brightness(lux)));
        }
    }
}
