//! Palette mosaics: partition a rectangle among the colors of a palette.
//!
//! - [`Strategy`] and [`render`] describe how a surface is split.
//! - [`Palette`] decodes records of the ColourLovers API.
//! - [`PaletteView`] binds a palette and a strategy to a [`Surface`].
//!
//! Colors are [`RGBA<f64>`] with every channel in \[0, 1\].  The
//! [`RGBColor`] trait converts from and to the other encodings of the
//! [`rgb`] crate.

use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

pub mod config;
pub mod fetch;
pub mod geometry;
pub mod hex;
pub mod list;
pub mod palette;
pub mod render;
pub mod svg;
pub mod view;

pub use config::{Config, ConfigError};
pub use fetch::{decode_page, FetchError, FetchService, PaletteQuery, Transport};
pub use geometry::Rect;
pub use list::PaletteList;
pub use palette::{Palette, PaletteError};
pub use render::{paint, render, Fill, Shape, Strategy, Surface};
pub use svg::SvgSurface;
pub use view::PaletteView;

/// The canonical color of this crate: RGBA with channels in \[0, 1\].
pub type Color = RGBA<f64>;

/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 1\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 1\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// Decode a `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` string (the
    /// `#` is optional).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use palette_mosaic::RGBColor;
    /// assert_eq!(RGB8::from_hex("#f80"), Some(RGB8::new(255, 136, 0)));
    /// assert_eq!(RGB8::from_hex("#f8"), None);
    /// ```
    #[inline]
    fn from_hex(s: &str) -> Option<Self> { hex::parse_hex(s) }

    /// Return the CSS hexadecimal notation of the color.
    #[inline]
    fn to_hex(&self) -> String { hex::to_hex(self) }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

#[inline]
fn to_u8(x: f64) -> u8 { (255. * x).round() as u8 }

#[inline]
fn to_u16(x: f64) -> u16 { (65535. * x).round() as u16 }

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b) }
    }
}

impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535., a: 1. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: to_u16(c.r),  g: to_u16(c.g),  b: to_u16(c.b) }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 255., g: self.g as f64 / 255.,
              b: self.b as f64 / 255., a: self.a as f64 / 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: to_u8(c.r),  g: to_u8(c.g),  b: to_u8(c.b), a: to_u8(c.a) }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 65535., g: self.g as f64 / 65535.,
              b: self.b as f64 / 65535., a: self.a as f64 / 65535. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: to_u16(c.r),  g: to_u16(c.g),  b: to_u16(c.b),
                 a: to_u16(c.a) }
    }
}
