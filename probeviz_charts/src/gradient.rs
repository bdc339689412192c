// Copyright 2025 the ProbeViz Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Piecewise-linear color gradients with a precomputed lookup palette.
//!
//! A [`ColorGradient`] maps a normalized fraction in `[0, 1]` to a color by
//! interpolating between ordered stops. Heat-map and legend renderers call the
//! lookup once per pixel or data point, so the gradient also precomputes a
//! packed-integer palette at construction: callers snapshot [`ColorGradient::palette`]
//! once and index into it instead of re-interpolating.
//!
//! Interpolation runs per channel on 8-bit RGBA values (`c0 + (c1 - c0) * t`,
//! rounded to nearest, clamped to `[0, 255]`), so [`ColorGradient::color_at`]
//! and [`ColorGradient::packed_at`] agree bit-for-bit. Gradients are immutable
//! after construction; resizing the palette produces a new instance and leaves
//! concurrent readers of the old one untouched.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use peniko::Color;
use peniko::color::palette::css;

use crate::error::ConfigError;

/// Default number of palette entries.
pub const DEFAULT_PALETTE_SIZE: usize = 512;

/// Largest allowed palette, chosen so palette indexes fit in a `u16`.
const MAX_PALETTE_SIZE: usize = 1 << 16;

/// An immutable gradient over ordered color stops, with a packed-ARGB palette.
///
/// Stop positions are strictly increasing `f32` values anchored at `0.0` and
/// `1.0`. Lookups clamp out-of-range fractions to the endpoint colors and never
/// fail; non-finite fractions produce an unspecified (but non-panicking)
/// color.
#[derive(Clone, Debug)]
pub struct ColorGradient {
    positions: Vec<f32>,
    colors: Vec<Color>,
    // Stop colors quantized once to 8-bit channels; all interpolation runs on
    // these so the `Color` and packed-u32 accessors cannot disagree.
    rgba: Vec<[u8; 4]>,
    palette: Vec<u32>,
    resizable: bool,
}

impl ColorGradient {
    /// Creates a gradient from `(position, color)` stops with the default
    /// palette size and a resizable palette.
    pub fn new(stops: &[(f32, Color)]) -> Result<Self, ConfigError> {
        GradientBuilder::from_stops(stops).build()
    }

    /// Returns a builder for configuring stops and palette options.
    pub fn builder() -> GradientBuilder {
        GradientBuilder::new()
    }

    /// A black-to-white gradient, the usual default for topography views.
    pub fn grayscale() -> Self {
        Self::new(&[(0.0, css::BLACK), (1.0, css::WHITE)]).expect("static stop list is valid")
    }

    /// A black-body style heat gradient (black, red, yellow, white).
    pub fn thermal() -> Self {
        Self::new(&[
            (0.0, css::BLACK),
            (1.0 / 3.0, css::RED),
            (2.0 / 3.0, css::YELLOW),
            (1.0, css::WHITE),
        ])
        .expect("static stop list is valid")
    }

    /// A blue-to-red spectrum gradient (blue, cyan, green, yellow, red).
    pub fn spectrum() -> Self {
        Self::new(&[
            (0.0, css::BLUE),
            (0.25, css::CYAN),
            (0.5, css::LIME),
            (0.75, css::YELLOW),
            (1.0, css::RED),
        ])
        .expect("static stop list is valid")
    }

    /// The number of color stops.
    pub fn stop_count(&self) -> usize {
        self.positions.len()
    }

    /// The number of precomputed palette entries.
    pub fn palette_size(&self) -> usize {
        self.palette.len()
    }

    /// Whether [`ColorGradient::with_palette_size`] is allowed on this gradient.
    pub fn is_palette_resizable(&self) -> bool {
        self.resizable
    }

    /// Stop positions, strictly increasing from `0.0` to `1.0`.
    pub fn stop_positions(&self) -> &[f32] {
        &self.positions
    }

    /// Stop colors, parallel to [`ColorGradient::stop_positions`].
    pub fn stop_colors(&self) -> &[Color] {
        &self.colors
    }

    /// The color of a single stop.
    ///
    /// Panics if `index` is not in `[0, stop_count)`.
    pub fn stop_color(&self, index: usize) -> Color {
        self.colors[index]
    }

    /// Interpolates the gradient color for a fraction in `[0, 1]`.
    ///
    /// Fractions below the first stop return the first stop color; fractions
    /// above the last return the last. A fraction exactly at a stop position
    /// returns that stop's color with no interpolation error.
    pub fn color_at(&self, fraction: f64) -> Color {
        let [r, g, b, a] = self.rgba_at(fraction);
        Color::from_rgba8(r, g, b, a)
    }

    /// Like [`ColorGradient::color_at`], packed as a 32-bit ARGB integer.
    pub fn packed_at(&self, fraction: f64) -> u32 {
        let [r, g, b, a] = self.rgba_at(fraction);
        pack_argb(r, g, b, a)
    }

    /// Maps a fraction to the nearest palette slot.
    ///
    /// Returns `round(fraction * (palette_size - 1))`, clamped to the valid
    /// index range, so `palette()[index_for(f)]` approximates `packed_at(f)`
    /// at palette resolution.
    pub fn index_for(&self, fraction: f64) -> u16 {
        if !fraction.is_finite() {
            return 0;
        }
        let last = (self.palette.len() - 1) as f64;
        let slot = (fraction * last).round().clamp(0.0, last);
        #[allow(
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss,
            reason = "clamped to [0, palette_size - 1], which fits in a u16"
        )]
        {
            slot as u16
        }
    }

    /// The full precomputed palette in packed ARGB, where entry `i` equals
    /// `packed_at(i / (palette_size - 1))`.
    pub fn palette(&self) -> &[u32] {
        &self.palette
    }

    /// Returns a copy of this gradient with a palette of `size` entries.
    ///
    /// The existing gradient is left untouched, so renderers holding the old
    /// palette keep a consistent view. Fails if the gradient was built with a
    /// fixed palette or if `size` is out of range.
    pub fn with_palette_size(&self, size: usize) -> Result<Self, ConfigError> {
        if !self.resizable {
            return Err(ConfigError::PaletteNotResizable);
        }
        validate_palette_size(size)?;
        let mut out = self.clone();
        out.palette = build_palette(&out.positions, &out.rgba, size);
        Ok(out)
    }

    fn rgba_at(&self, fraction: f64) -> [u8; 4] {
        rgba_at(&self.positions, &self.rgba, fraction)
    }
}

/// A mutable stop list that freezes into an immutable [`ColorGradient`].
#[derive(Clone, Debug)]
pub struct GradientBuilder {
    stops: Vec<(f32, Color)>,
    palette_size: usize,
    resizable: bool,
}

impl GradientBuilder {
    /// Creates an empty builder with the default palette size.
    pub fn new() -> Self {
        Self {
            stops: Vec::new(),
            palette_size: DEFAULT_PALETTE_SIZE,
            resizable: true,
        }
    }

    /// Creates a builder seeded with `(position, color)` stops.
    pub fn from_stops(stops: &[(f32, Color)]) -> Self {
        let mut builder = Self::new();
        builder.stops.extend_from_slice(stops);
        builder
    }

    /// Appends a stop. Stops must be pushed in increasing position order.
    pub fn stop(mut self, position: f32, color: Color) -> Self {
        self.stops.push((position, color));
        self
    }

    /// Sets the palette size (number of precomputed entries).
    pub fn palette_size(mut self, size: usize) -> Self {
        self.palette_size = size;
        self
    }

    /// Marks the palette as fixed, disallowing
    /// [`ColorGradient::with_palette_size`] on the built gradient.
    pub fn fixed_palette(mut self) -> Self {
        self.resizable = false;
        self
    }

    /// Validates the configuration and freezes it into a gradient.
    pub fn build(self) -> Result<ColorGradient, ConfigError> {
        let count = self.stops.len();
        if count < 2 {
            return Err(ConfigError::TooFewStops { count });
        }
        for (index, &(position, _)) in self.stops.iter().enumerate() {
            if !position.is_finite() || !(0.0..=1.0).contains(&position) {
                return Err(ConfigError::StopPositionOutOfRange { index, position });
            }
            if index > 0 && position <= self.stops[index - 1].0 {
                return Err(ConfigError::StopsNotIncreasing { index });
            }
        }
        if self.stops[0].0 != 0.0 || self.stops[count - 1].0 != 1.0 {
            return Err(ConfigError::UnanchoredStops);
        }
        validate_palette_size(self.palette_size)?;

        let positions: Vec<f32> = self.stops.iter().map(|&(p, _)| p).collect();
        let colors: Vec<Color> = self.stops.iter().map(|&(_, c)| c).collect();
        let rgba: Vec<[u8; 4]> = colors
            .iter()
            .map(|c| {
                let c = c.to_rgba8();
                [c.r, c.g, c.b, c.a]
            })
            .collect();
        let palette = build_palette(&positions, &rgba, self.palette_size);
        Ok(ColorGradient {
            positions,
            colors,
            rgba,
            palette,
            resizable: self.resizable,
        })
    }
}

impl Default for GradientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_palette_size(size: usize) -> Result<(), ConfigError> {
    if size < 2 || size > MAX_PALETTE_SIZE {
        return Err(ConfigError::BadPaletteSize { size });
    }
    Ok(())
}

fn build_palette(positions: &[f32], rgba: &[[u8; 4]], size: usize) -> Vec<u32> {
    (0..size)
        .map(|i| {
            let fraction = i as f64 / (size - 1) as f64;
            let [r, g, b, a] = rgba_at(positions, rgba, fraction);
            pack_argb(r, g, b, a)
        })
        .collect()
}

fn rgba_at(positions: &[f32], rgba: &[[u8; 4]], fraction: f64) -> [u8; 4] {
    let last = positions.len() - 1;
    if !fraction.is_finite() || fraction <= f64::from(positions[0]) {
        return rgba[0];
    }
    if fraction >= f64::from(positions[last]) {
        return rgba[last];
    }
    let mut hi = 1;
    while f64::from(positions[hi]) < fraction {
        hi += 1;
    }
    let p0 = f64::from(positions[hi - 1]);
    let p1 = f64::from(positions[hi]);
    let t = (fraction - p0) / (p1 - p0);
    let c0 = rgba[hi - 1];
    let c1 = rgba[hi];
    core::array::from_fn(|channel| lerp_channel(c0[channel], c1[channel], t))
}

fn lerp_channel(c0: u8, c1: u8, t: f64) -> u8 {
    let v = f64::from(c0) + (f64::from(c1) - f64::from(c0)) * t;
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "clamped to [0, 255]"
    )]
    {
        v.round().clamp(0.0, 255.0) as u8
    }
}

const fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
}
