//! Partition a rectangle among the colors of a palette.
//!
//! Every strategy consumes the colors and their proportional widths
//! first to last and yields one [`Fill`] per color, in painting order:
//! later fills are drawn over earlier ones.  Widths are not clamped;
//! proportions outside \[0, 1\] give inverted or degenerate shapes but
//! never a division by zero.

use std::fmt;
use std::str::FromStr;
use log::warn;
use serde::{Deserialize, Serialize};
use crate::geometry::Rect;

/// Smallest diameter of a concentric ring, as a fraction of the
/// longest side of the surface.
pub const CONCENTRIC_FLOOR: f64 = 0.1;

/// How a surface is partitioned.
///
/// Deserialized through [`FromStr`], so configuration files accept the
/// same names as the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Strategy {
    /// Nested rectangles, each one a fraction of the previous, the
    /// shrinking axis alternating between width and height.
    Bisection,
    /// Full-width bands, each shorter than the previous one.
    Banded,
    /// Circles of decreasing diameter centred on the surface, drawn
    /// over a background filled with the first color.
    Concentric,
}

impl Strategy {
    /// All strategies, in toolbar order.
    pub const ALL: [Strategy; 3] =
        [Strategy::Bisection, Strategy::Banded, Strategy::Concentric];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bisection => "bisection",
            Strategy::Banded => "banded",
            Strategy::Concentric => "concentric",
        }
    }

    /// Partition `surface` with this strategy, without reordering.
    pub fn partition<C: Clone>(self, surface: Rect, colors: &[C],
                               widths: &[f64]) -> Vec<Fill<C>> {
        match self {
            Strategy::Bisection => bisection(surface, colors, widths),
            Strategy::Banded => banded(surface, colors, widths),
            Strategy::Concentric => concentric(surface, colors, widths),
        }
    }
}

impl Default for Strategy {
    fn default() -> Self { Strategy::Bisection }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A strategy name that is not known.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown strategy {0:?} (expected bisection, banded or concentric)")]
pub struct UnknownStrategy(pub String);

impl FromStr for Strategy {
    type Err = UnknownStrategy;

    /// Accepts the names of [`Strategy::name`] and the legacy
    /// `bayesian`, `vertical` and `circular`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bisection" | "bayesian" => Ok(Strategy::Bisection),
            "banded" | "vertical" => Ok(Strategy::Banded),
            "concentric" | "circular" => Ok(Strategy::Concentric),
            _ => Err(UnknownStrategy(s.to_string())),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = UnknownStrategy;

    fn try_from(s: String) -> Result<Self, Self::Error> { s.parse() }
}

/// Region covered by a fill.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Shape {
    Rect(Rect),
    /// Ellipse inscribed in the rectangle.
    Ellipse(Rect),
}

impl Shape {
    /// The rectangle bounding the shape.
    pub fn bounds(&self) -> Rect {
        match *self { Shape::Rect(r) | Shape::Ellipse(r) => r }
    }
}

/// One fill operation on a [`Surface`].
#[derive(Clone, Debug, PartialEq)]
pub struct Fill<C> {
    pub shape: Shape,
    pub color: C,
}

impl<C> Fill<C> {
    pub fn rect(rect: Rect, color: C) -> Self {
        Fill { shape: Shape::Rect(rect), color }
    }

    pub fn ellipse(bounds: Rect, color: C) -> Self {
        Fill { shape: Shape::Ellipse(bounds), color }
    }

    /// Perform the fill on `surface`.
    pub fn paint<S: Surface<C> + ?Sized>(&self, surface: &mut S) {
        match self.shape {
            Shape::Rect(r) => surface.fill_rect(r, &self.color),
            Shape::Ellipse(r) => surface.fill_ellipse(r, &self.color),
        }
    }
}

/// Something fills can be painted on.
///
/// Implementations must paint in call order; a surface must not be
/// painted from several threads at once.
pub trait Surface<C> {
    fn fill_rect(&mut self, rect: Rect, color: &C);

    /// Fill the ellipse inscribed in `bounds`.
    fn fill_ellipse(&mut self, bounds: Rect, color: &C);
}

/// Records the fills, in order.
impl<C: Clone> Surface<C> for Vec<Fill<C>> {
    fn fill_rect(&mut self, rect: Rect, color: &C) {
        self.push(Fill::rect(rect, color.clone()))
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: &C) {
        self.push(Fill::ellipse(bounds, color.clone()))
    }
}

/// Paint `fills` on `surface` in order.
pub fn paint<C, S: Surface<C> + ?Sized>(surface: &mut S, fills: &[Fill<C>]) {
    for f in fills { f.paint(surface) }
}

/// Partition `surface` among `colors` with `strategy`.
///
/// `colors[i]` is paired with `widths[i]`.  If `reverse` is set, the
/// pairs are consumed last to first.  Should the two slices differ in
/// length, the extra items of the longer one are ignored.
///
/// # Example
///
/// ```
/// use palette_mosaic::{render, Rect, Strategy};
/// let fills = render(Rect::from_size(100., 100.), &["red", "blue"],
///                    &[0.5, 0.5], Strategy::Banded, false);
/// assert_eq!(fills.len(), 2);
/// assert_eq!(fills[1].shape.bounds(), Rect::from_size(100., 50.));
/// ```
pub fn render<C: Clone>(surface: Rect, colors: &[C], widths: &[f64],
                        strategy: Strategy, reverse: bool) -> Vec<Fill<C>> {
    let count = colors.len().min(widths.len());
    if colors.len() != widths.len() {
        warn!("{} colors but {} widths, drawing {count}",
              colors.len(), widths.len());
    }
    let (colors, widths) = (&colors[.. count], &widths[.. count]);
    if reverse {
        let colors: Vec<C> = colors.iter().rev().cloned().collect();
        let widths: Vec<f64> = widths.iter().rev().copied().collect();
        strategy.partition(surface, &colors, &widths)
    } else {
        strategy.partition(surface, colors, widths)
    }
}

/// Fill the current rectangle, then shrink it along its width (even
/// steps) or height (odd steps), keeping its top-left corner.
///
/// The shrink factor starts at ½ and is multiplied at step `n` by
/// `1 - (widths[n] - 1/count)`, so that a color wider than the average
/// leaves less room to the following ones.
pub fn bisection<C: Clone>(surface: Rect, colors: &[C],
                           widths: &[f64]) -> Vec<Fill<C>> {
    let count = colors.len().min(widths.len());
    let mut fills = Vec::with_capacity(count);
    let mut current = surface;
    let mut halver = 0.5;
    for (n, (color, &width)) in colors.iter().zip(widths).enumerate() {
        // `count > 0` inside the loop.
        let width = width - 1. / count as f64;
        halver *= 1. - width;
        fills.push(Fill::rect(current, color.clone()));
        current = if n % 2 == 0 { current.with_width(current.width * halver) }
                  else { current.with_height(current.height * halver) };
    }
    fills
}

/// Full-width bands anchored at the top of `surface`.  After each
/// fill, the height left is reduced by the color's width, so each band
/// only shows where the next, shorter one does not cover it.
pub fn banded<C: Clone>(surface: Rect, colors: &[C],
                        widths: &[f64]) -> Vec<Fill<C>> {
    let mut fills = Vec::with_capacity(colors.len().min(widths.len()));
    let mut current = surface;
    let mut percent = 1.;
    for (color, &width) in colors.iter().zip(widths) {
        fills.push(Fill::rect(current, color.clone()));
        percent -= width;
        current = surface.with_height(surface.height * percent);
    }
    fills
}

/// Fill `surface` with the first color, then draw discs centred on it.
/// The disc of color `n` has the diameter `max(width, height) × p`
/// where `p` is 1 minus the widths of the colors before it, never less
/// than [`CONCENTRIC_FLOOR`].  The last width is not used.
pub fn concentric<C: Clone>(surface: Rect, colors: &[C],
                            widths: &[f64]) -> Vec<Fill<C>> {
    let count = colors.len().min(widths.len());
    if count == 0 { return Vec::new() }
    let mut fills = Vec::with_capacity(count);
    fills.push(Fill::rect(surface, colors[0].clone()));
    let full = surface.max_side();
    let (cx, cy) = (surface.mid_x(), surface.mid_y());
    let mut percent: f64 = 1.;
    for (color, &width) in colors[1 .. count].iter().zip(widths) {
        percent = (percent - width).max(CONCENTRIC_FLOOR);
        let diameter = full * percent;
        fills.push(Fill::ellipse(Rect::centered_square(cx, cy, diameter),
                                 color.clone()));
    }
    fills
}
