// Copyright 2025 the ProbeViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fixed-width numeric formatting for tick labels.
//!
//! Tick formatters delegate the final number-to-string step to a
//! [`NumberFormat`], a tiny immutable description of decimal places and
//! zero padding. It stands in for a locale-aware number formatter; axis labels
//! only need fixed decimals and leading zeros (e.g. the `05` in `1:05`).

extern crate alloc;

use alloc::string::String;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Fixed decimal-place formatting with optional zero padding.
///
/// With zero decimals the value is rounded to the nearest integer before
/// formatting. `pad_width` is the minimum total width of the output (sign
/// included), filled with leading zeros.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    decimals: usize,
    pad_width: usize,
}

impl NumberFormat {
    /// Rounds to the nearest integer, no padding.
    pub const fn integer() -> Self {
        Self {
            decimals: 0,
            pad_width: 0,
        }
    }

    /// Formats with a fixed number of decimal places.
    pub const fn decimal(decimals: usize) -> Self {
        Self {
            decimals,
            pad_width: 0,
        }
    }

    /// Rounds to the nearest integer and zero-pads to `width` characters.
    pub const fn zero_padded(width: usize) -> Self {
        Self {
            decimals: 0,
            pad_width: width,
        }
    }

    /// Sets the minimum output width, filled with leading zeros.
    pub const fn with_pad_width(mut self, width: usize) -> Self {
        self.pad_width = width;
        self
    }

    /// Formats a value.
    ///
    /// Non-finite values fall back to Rust's default float rendering
    /// (`NaN`, `inf`, `-inf`).
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return alloc::format!("{value}");
        }
        if self.decimals == 0 {
            let n = {
                let rounded = value.round().clamp(i64::MIN as f64, i64::MAX as f64);
                #[allow(clippy::cast_possible_truncation, reason = "clamped to the i64 range")]
                {
                    rounded as i64
                }
            };
            alloc::format!("{:0w$}", n, w = self.pad_width)
        } else {
            alloc::format!("{:0w$.p$}", value, w = self.pad_width, p = self.decimals)
        }
    }
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::integer()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    #[test]
    fn integer_rounds_to_nearest() {
        let f = NumberFormat::integer();
        assert_eq!(f.format(2.4), "2");
        assert_eq!(f.format(2.5), "3");
        assert_eq!(f.format(-2.5), "-3");
        assert_eq!(f.format(0.0), "0");
    }

    #[test]
    fn zero_padding_fills_to_width() {
        let f = NumberFormat::zero_padded(2);
        assert_eq!(f.format(5.0), "05");
        assert_eq!(f.format(30.0), "30");
        assert_eq!(f.format(0.0), "00");
        assert_eq!(f.format(123.0), "123");
    }

    #[test]
    fn decimals_render_fixed_places() {
        let f = NumberFormat::decimal(2);
        assert_eq!(f.format(2.5), "2.50");
        assert_eq!(f.format(2.345), "2.35");
        assert_eq!(f.format(-1.0), "-1.00");
    }

    #[test]
    fn pad_width_counts_sign_and_decimals() {
        let f = NumberFormat::decimal(1).with_pad_width(6);
        assert_eq!(f.format(2.5), "0002.5");
        assert_eq!(f.format(-2.5), "-002.5");
    }

    #[test]
    fn non_finite_values_fall_back_to_default_rendering() {
        let f = NumberFormat::integer();
        assert_eq!(f.format(f64::NAN), "NaN");
        assert_eq!(f.format(f64::INFINITY), "inf");
    }
}
