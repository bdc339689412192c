// Copyright 2025 the ProbeViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tick label formatting strategies.
//!
//! An axis hands each visible tick value to a [`TickFormatter`] during layout,
//! so formatting runs many times per render pass and must stay cheap and
//! infallible. The strategies are a closed set of tagged variants dispatched
//! by [`TickFormatter::format`] rather than an open trait hierarchy:
//!
//! - **Categorical**: integral tick values select a category name; everything
//!   else renders blank. Ticks outside the categorical domain degrade to an
//!   empty label instead of failing, so "nice" tick generators can overshoot
//!   the category range without corrupting a render pass.
//! - **Prefixed**: the value is scaled by a fixed unit prefix (e.g. `1000` for
//!   km shown in m) before ordinary numeric formatting.
//! - **Sexagesimal**: the premultiplied value is split into integral and
//!   fractional parts and rendered as `major:minor` (e.g. minutes:seconds).

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use crate::error::ConfigError;
use crate::number::NumberFormat;

/// Absolute tolerance for matching a tick value to an integral category index.
pub const DEFAULT_CATEGORY_TOLERANCE: f64 = 1e-10;

/// An immutable tick-value-to-label formatting strategy.
///
/// Construction validates the configuration; [`TickFormatter::format`] never
/// fails or panics for finite input. Instances are cheap to clone and safe to
/// share across concurrent repaint calls.
#[derive(Clone, Debug, PartialEq)]
pub struct TickFormatter {
    kind: FormatterKind,
}

#[derive(Clone, Debug, PartialEq)]
enum FormatterKind {
    Categorical {
        categories: Vec<String>,
        tolerance: f64,
    },
    Prefixed {
        prefix: f64,
        number: NumberFormat,
    },
    Sexagesimal {
        premultiplier: f64,
        minor_per_major: f64,
        major: NumberFormat,
        minor: NumberFormat,
    },
}

impl TickFormatter {
    /// Creates a categorical formatter with the default match tolerance.
    ///
    /// A tick value `v` maps to `categories[round(v) - 1]` when `v` is within
    /// [`DEFAULT_CATEGORY_TOLERANCE`] of an integer in `1..=categories.len()`,
    /// and to an empty label otherwise.
    pub fn categorical(categories: Vec<String>) -> Result<Self, ConfigError> {
        Self::categorical_with_tolerance(categories, DEFAULT_CATEGORY_TOLERANCE)
    }

    /// Creates a categorical formatter with an explicit match tolerance.
    ///
    /// The tolerance is absolute and does not scale with tick spacing; pick it
    /// per axis if the default is too tight or too loose.
    pub fn categorical_with_tolerance(
        categories: Vec<String>,
        tolerance: f64,
    ) -> Result<Self, ConfigError> {
        if categories.is_empty() {
            return Err(ConfigError::EmptyCategories);
        }
        if !tolerance.is_finite() || tolerance < 0.0 {
            return Err(ConfigError::BadTolerance { value: tolerance });
        }
        Ok(Self {
            kind: FormatterKind::Categorical {
                categories,
                tolerance,
            },
        })
    }

    /// Creates a formatter that scales values by a unit prefix before
    /// formatting, e.g. a prefix of `1000.0` to label kilometer data in
    /// meters.
    ///
    /// The prefix must be positive and finite.
    pub fn prefixed(prefix: f64, number: NumberFormat) -> Result<Self, ConfigError> {
        if !prefix.is_finite() || prefix <= 0.0 {
            return Err(ConfigError::NonPositiveMultiplier { value: prefix });
        }
        Ok(Self {
            kind: FormatterKind::Prefixed { prefix, number },
        })
    }

    /// Creates a sexagesimal-style split formatter.
    ///
    /// The value is first scaled by `premultiplier` into major units; the
    /// integral part is rendered with `major`, and the fractional part is
    /// scaled by `minor_per_major` and rendered with `minor`, joined by a
    /// colon. With `premultiplier = 1.0`, `minor_per_major = 60.0`, and a
    /// two-digit zero-padded minor format, `1.5` minutes renders as `1:30`.
    ///
    /// Both parts always derive from the same premultiplied value, so they
    /// cannot round apart; an exactly integral value still renders its minor
    /// part (e.g. `2:00`). Both multipliers must be positive and finite.
    pub fn sexagesimal(
        premultiplier: f64,
        minor_per_major: f64,
        major: NumberFormat,
        minor: NumberFormat,
    ) -> Result<Self, ConfigError> {
        for value in [premultiplier, minor_per_major] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositiveMultiplier { value });
            }
        }
        Ok(Self {
            kind: FormatterKind::Sexagesimal {
                premultiplier,
                minor_per_major,
                major,
                minor,
            },
        })
    }

    /// Formats a tick value.
    ///
    /// Never fails for finite input. Non-finite input produces an unspecified
    /// (but non-panicking) label; callers are expected to filter `NaN` and
    /// infinities upstream.
    pub fn format(&self, value: f64) -> String {
        match &self.kind {
            FormatterKind::Categorical {
                categories,
                tolerance,
            } => {
                if !value.is_finite() {
                    return String::new();
                }
                let nearest = value.round();
                if (value - nearest).abs() > *tolerance {
                    return String::new();
                }
                if nearest < 1.0 || nearest > categories.len() as f64 {
                    return String::new();
                }
                #[allow(
                    clippy::cast_possible_truncation,
                    clippy::cast_sign_loss,
                    reason = "checked against 1..=categories.len() above"
                )]
                let index = nearest as usize - 1;
                categories[index].clone()
            }
            FormatterKind::Prefixed { prefix, number } => number.format(prefix * value),
            FormatterKind::Sexagesimal {
                premultiplier,
                minor_per_major,
                major,
                minor,
            } => {
                if !value.is_finite() {
                    return alloc::format!("{value}");
                }
                let premultiplied = premultiplier * value;
                // Integral and fractional parts of the *same* premultiplied
                // value; splitting first keeps `major` and `minor` in sync.
                let fractional = premultiplied - premultiplied.trunc();
                let integral = premultiplied - fractional;
                alloc::format!(
                    "{}:{}",
                    major.format(integral),
                    minor.format(fractional * minor_per_major)
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::string::ToString;
    use alloc::vec;

    use super::*;

    fn seasons() -> Vec<String> {
        vec![
            "Spring".to_string(),
            "Summer".to_string(),
            "Autumn".to_string(),
            "Winter".to_string(),
        ]
    }

    #[test]
    fn categorical_maps_integral_values_to_names() {
        let f = TickFormatter::categorical(seasons()).unwrap();
        assert_eq!(f.format(1.0), "Spring");
        assert_eq!(f.format(2.0), "Summer");
        assert_eq!(f.format(4.0), "Winter");
    }

    #[test]
    fn categorical_blanks_outside_the_category_range() {
        let f = TickFormatter::categorical(seasons()).unwrap();
        assert_eq!(f.format(0.0), "");
        assert_eq!(f.format(5.0), "");
        assert_eq!(f.format(-3.0), "");
    }

    #[test]
    fn categorical_blanks_non_integral_values() {
        let f = TickFormatter::categorical(seasons()).unwrap();
        assert_eq!(f.format(1.5), "");
        assert_eq!(f.format(2.001), "");
    }

    #[test]
    fn categorical_matches_within_tolerance() {
        let f = TickFormatter::categorical(seasons()).unwrap();
        assert_eq!(f.format(3.0 + 1e-11), "Autumn");
        assert_eq!(f.format(3.0 - 1e-11), "Autumn");
    }

    #[test]
    fn categorical_custom_tolerance_widens_the_match() {
        let f = TickFormatter::categorical_with_tolerance(seasons(), 0.25).unwrap();
        assert_eq!(f.format(2.2), "Summer");
        assert_eq!(f.format(2.3), "");
    }

    #[test]
    fn categorical_blanks_non_finite_input() {
        let f = TickFormatter::categorical(seasons()).unwrap();
        assert_eq!(f.format(f64::NAN), "");
        assert_eq!(f.format(f64::INFINITY), "");
    }

    #[test]
    fn categorical_rejects_empty_list() {
        assert_eq!(
            TickFormatter::categorical(Vec::new()),
            Err(ConfigError::EmptyCategories)
        );
    }

    #[test]
    fn categorical_rejects_bad_tolerance() {
        assert_eq!(
            TickFormatter::categorical_with_tolerance(seasons(), -1e-10),
            Err(ConfigError::BadTolerance { value: -1e-10 })
        );
        assert!(TickFormatter::categorical_with_tolerance(seasons(), f64::NAN).is_err());
    }

    #[test]
    fn prefixed_scales_before_formatting() {
        let f = TickFormatter::prefixed(1000.0, NumberFormat::integer()).unwrap();
        assert_eq!(f.format(2.5), "2500");
    }

    #[test]
    fn prefixed_keeps_decimal_places() {
        let f = TickFormatter::prefixed(0.001, NumberFormat::decimal(2)).unwrap();
        assert_eq!(f.format(2500.0), "2.50");
    }

    #[test]
    fn prefixed_rejects_non_positive_prefix() {
        let number = NumberFormat::integer();
        assert_eq!(
            TickFormatter::prefixed(0.0, number),
            Err(ConfigError::NonPositiveMultiplier { value: 0.0 })
        );
        assert!(TickFormatter::prefixed(-2.0, number).is_err());
        assert!(TickFormatter::prefixed(f64::INFINITY, number).is_err());
    }

    #[test]
    fn sexagesimal_splits_major_and_minor_units() {
        let f = TickFormatter::sexagesimal(
            1.0,
            60.0,
            NumberFormat::integer(),
            NumberFormat::zero_padded(2),
        )
        .unwrap();
        assert_eq!(f.format(1.5), "1:30");
        assert_eq!(f.format(2.25), "2:15");
    }

    #[test]
    fn sexagesimal_renders_zero_minor_part() {
        let f = TickFormatter::sexagesimal(
            1.0,
            60.0,
            NumberFormat::integer(),
            NumberFormat::zero_padded(2),
        )
        .unwrap();
        assert_eq!(f.format(2.0), "2:00");
    }

    #[test]
    fn sexagesimal_premultiplies_before_splitting() {
        let f = TickFormatter::sexagesimal(
            60.0,
            60.0,
            NumberFormat::integer(),
            NumberFormat::zero_padded(2),
        )
        .unwrap();
        // 1.5 hours -> 90 minutes, no fractional minute left.
        assert_eq!(f.format(1.5), "90:00");
        assert_eq!(f.format(1.52), "91:12");
    }

    #[test]
    fn sexagesimal_rejects_non_positive_multipliers() {
        let number = NumberFormat::integer();
        assert_eq!(
            TickFormatter::sexagesimal(0.0, 60.0, number, number),
            Err(ConfigError::NonPositiveMultiplier { value: 0.0 })
        );
        assert_eq!(
            TickFormatter::sexagesimal(1.0, -60.0, number, number),
            Err(ConfigError::NonPositiveMultiplier { value: -60.0 })
        );
    }
}
