//! Detail view of a palette.

use log::warn;
use rgb::RGBA;
use crate::geometry::Rect;
use crate::palette::Palette;
use crate::render::{paint, Strategy, Surface};

/// Binds a palette, a strategy and a drawing direction.
///
/// Every change marks the view as needing to be redrawn; [`draw`]
/// repaints the whole surface.  The view starts with the bisection
/// strategy and reversed colors.
///
/// [`draw`]: PaletteView::draw
#[derive(Debug, Clone)]
pub struct PaletteView {
    palette: Option<Palette>,
    strategy: Option<Strategy>,
    reverse: bool,
    needs_display: bool,
}

impl Default for PaletteView {
    fn default() -> Self {
        PaletteView { palette: None, strategy: Some(Strategy::Bisection),
                      reverse: true, needs_display: true }
    }
}

impl PaletteView {
    pub fn new() -> Self { Self::default() }

    pub fn palette(&self) -> Option<&Palette> { self.palette.as_ref() }

    pub fn strategy(&self) -> Option<Strategy> { self.strategy }

    pub fn reverse(&self) -> bool { self.reverse }

    /// Whether the surface is out of date.
    pub fn needs_display(&self) -> bool { self.needs_display }

    /// Title of the palette shown, if any.
    pub fn title(&self) -> Option<&str> {
        self.palette.as_ref().map(Palette::title)
    }

    pub fn set_palette(&mut self, palette: Option<Palette>) {
        self.palette = palette;
        self.needs_display = true;
    }

    pub fn set_strategy(&mut self, strategy: Option<Strategy>) {
        self.strategy = strategy;
        self.needs_display = true;
    }

    pub fn set_reverse(&mut self, reverse: bool) {
        self.reverse = reverse;
        self.needs_display = true;
    }

    pub fn toggle_reverse(&mut self) {
        self.set_reverse(!self.reverse)
    }

    /// The surface changed size or layout.
    pub fn invalidate(&mut self) { self.needs_display = true }

    /// Paint the palette over `bounds` and return the number of fills.
    ///
    /// Without a palette or a strategy nothing is painted and the
    /// surface keeps what it showed.
    pub fn draw<S>(&mut self, bounds: Rect, surface: &mut S) -> usize
    where S: Surface<RGBA<f64>> + ?Sized {
        let Some(palette) = &self.palette else {
            warn!("view has no palette");
            return 0
        };
        let Some(strategy) = self.strategy else {
            warn!("view has no strategy");
            return 0
        };
        let fills = palette.render(bounds, strategy, self.reverse);
        paint(surface, &fills);
        self.needs_display = false;
        fills.len()
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use crate::render::{Fill, Shape};

    const BOUNDS: Rect = Rect { x: 0., y: 0., width: 90., height: 60. };

    fn palette() -> Palette {
        Palette::from_json(&json!({
            "id": 5, "title": "Trio", "colors": ["F00", "0F0", "00F"],
            "colorWidths": [0.5, 0.3, 0.2],
            "dateCreated": "2015-08-15 08:00:00" })).unwrap()
    }

    #[test]
    fn defaults() {
        let v = PaletteView::new();
        assert_eq!(v.strategy(), Some(Strategy::Bisection));
        assert!(v.reverse());
        assert!(v.title().is_none());
    }

    #[test]
    fn nothing_without_palette() {
        let mut v = PaletteView::new();
        let mut surface: Vec<Fill<RGBA<f64>>> = Vec::new();
        assert_eq!(v.draw(BOUNDS, &mut surface), 0);
        assert!(surface.is_empty());
        assert!(v.needs_display());
    }

    #[test]
    fn nothing_without_strategy() {
        let mut v = PaletteView::new();
        v.set_palette(Some(palette()));
        v.set_strategy(None);
        let mut surface: Vec<Fill<RGBA<f64>>> = Vec::new();
        assert_eq!(v.draw(BOUNDS, &mut surface), 0);
        assert!(surface.is_empty());
    }

    #[test]
    fn draws_reversed_by_default() {
        let mut v = PaletteView::new();
        v.set_palette(Some(palette()));
        assert_eq!(v.title(), Some("Trio"));
        let mut surface: Vec<Fill<RGBA<f64>>> = Vec::new();
        assert_eq!(v.draw(BOUNDS, &mut surface), 3);
        assert!(!v.needs_display());
        assert_eq!(surface[0].color, RGBA { r: 0., g: 0., b: 1., a: 1. });
        assert_eq!(surface[0].shape, Shape::Rect(BOUNDS));
    }

    #[test]
    fn changes_invalidate() {
        let mut v = PaletteView::new();
        v.set_palette(Some(palette()));
        let mut surface: Vec<Fill<RGBA<f64>>> = Vec::new();
        v.draw(BOUNDS, &mut surface);
        v.toggle_reverse();
        assert!(v.needs_display() && !v.reverse());
        surface.clear();
        v.set_strategy(Some(Strategy::Concentric));
        v.draw(BOUNDS, &mut surface);
        assert_eq!(surface[0].color, RGBA { r: 1., g: 0., b: 0., a: 1. });
        assert!(matches!(surface[1].shape, Shape::Ellipse(_)));
        v.invalidate();
        assert!(v.needs_display());
    }
}
