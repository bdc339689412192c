// Copyright 2025 the ProbeViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration errors.
//!
//! Formatters and gradients validate their configuration up front and never
//! reach a usable state with an invalid one. Runtime calls (`format`,
//! `color_at`, ...) are infallible; only constructors and builders return
//! these errors.

use thiserror::Error;

/// An invalid formatter or gradient configuration, rejected at construction.
#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A categorical formatter needs at least one category name.
    #[error("category list is empty")]
    EmptyCategories,

    /// A categorical match tolerance must be finite and non-negative.
    #[error("category tolerance must be finite and non-negative, got {value}")]
    BadTolerance {
        /// The rejected tolerance.
        value: f64,
    },

    /// Prefix scale factors and sexagesimal multipliers must be positive and finite.
    #[error("multiplier must be positive and finite, got {value}")]
    NonPositiveMultiplier {
        /// The rejected multiplier.
        value: f64,
    },

    /// A gradient needs at least two stops to interpolate between.
    #[error("a gradient needs at least 2 stops, got {count}")]
    TooFewStops {
        /// The number of stops supplied.
        count: usize,
    },

    /// Stop positions must be strictly increasing.
    #[error("stop position at index {index} does not increase")]
    StopsNotIncreasing {
        /// Index of the offending stop.
        index: usize,
    },

    /// Stop positions must be finite and within `[0, 1]`.
    #[error("stop position {position} at index {index} is outside [0, 1]")]
    StopPositionOutOfRange {
        /// Index of the offending stop.
        index: usize,
        /// The rejected position.
        position: f32,
    },

    /// The first stop must sit at `0.0` and the last at `1.0`.
    #[error("stop positions must start at 0 and end at 1")]
    UnanchoredStops,

    /// Palette sizes are limited so palette indexes fit in a `u16`.
    #[error("palette size {size} is outside [2, 65536]")]
    BadPaletteSize {
        /// The rejected palette size.
        size: usize,
    },

    /// Resizing was requested on a gradient built with a fixed palette.
    #[error("gradient palette is fixed and cannot be resized")]
    PaletteNotResizable,
}
