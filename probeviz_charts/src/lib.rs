// Copyright 2025 the ProbeViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart support pieces for probe force-curve visualization.
//!
//! This crate is a small, reusable layer beneath the probeviz chart frontends:
//! - **Tick formatting** turns numeric axis tick values into display strings
//!   under a fixed unit-conversion strategy (categorical names, prefixed
//!   scaling, or a sexagesimal `major:minor` split).
//! - **Color gradients** map a normalized fraction in `[0, 1]` to a color via
//!   piecewise linear interpolation over ordered stops, with a precomputed
//!   packed-integer palette for per-pixel lookup.
//!
//! Both components are immutable value objects: configuration is validated at
//! construction, and the hot-path calls (`format`, `color_at`, `packed_at`)
//! never fail for finite input. They hold no shared mutable state, so
//! concurrent renderers can call into them freely.
//!
//! Chart layout, mark generation, and rendering are out of scope; callers hand
//! in stop lists, category names, and multipliers as plain constructor
//! arguments.

#![no_std]

extern crate alloc;

mod error;
#[cfg(not(feature = "std"))]
mod float;
mod gradient;
mod number;
mod ticks;

pub use error::ConfigError;
pub use gradient::{ColorGradient, DEFAULT_PALETTE_SIZE, GradientBuilder};
pub use number::NumberFormat;
pub use ticks::{DEFAULT_CATEGORY_TOLERANCE, TickFormatter};
