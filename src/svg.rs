//! A [`Surface`] producing SVG markup.

use rgb::RGBA;
use crate::geometry::Rect;
use crate::render::Surface;
use crate::RGBColor;

/// Accumulates fills as SVG elements.
#[derive(Debug, Clone)]
pub struct SvgSurface {
    width: f64,
    height: f64,
    body: String,
}

fn fill_attrs<C: RGBColor>(color: &C) -> String {
    let RGBA { r, g, b, a } = color.to_rgba();
    let opaque = RGBA { r, g, b, a: 1. };
    if a >= 1. { format!("fill=\"{}\"", opaque.to_hex()) }
    else {
        format!("fill=\"{}\" fill-opacity=\"{:.3}\"", opaque.to_hex(),
                a.clamp(0., 1.))
    }
}

impl SvgSurface {
    pub fn new(width: f64, height: f64) -> Self {
        SvgSurface { width, height, body: String::new() }
    }

    /// The rectangle covering the whole image.
    pub fn bounds(&self) -> Rect { Rect::from_size(self.width, self.height) }

    /// Complete `<svg>` element.
    pub fn to_svg(&self) -> String {
        format!("<svg xmlns=\"http://www.w3.org/2000/svg\" \
                 width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n\
                 {body}</svg>\n",
                w = self.width, h = self.height, body = self.body)
    }
}

// SVG rejects negative sizes: inverted rectangles are normalized.
impl<C: RGBColor> Surface<C> for SvgSurface {
    fn fill_rect(&mut self, rect: Rect, color: &C) {
        let r = rect.normalized();
        self.body.push_str(&format!(
            "  <rect x=\"{:.2}\" y=\"{:.2}\" width=\"{:.2}\" height=\"{:.2}\" {}/>\n",
            r.x, r.y, r.width, r.height, fill_attrs(color)));
    }

    fn fill_ellipse(&mut self, bounds: Rect, color: &C) {
        let r = bounds.normalized();
        self.body.push_str(&format!(
            "  <ellipse cx=\"{:.2}\" cy=\"{:.2}\" rx=\"{:.2}\" ry=\"{:.2}\" {}/>\n",
            r.mid_x(), r.mid_y(), r.width / 2., r.height / 2.,
            fill_attrs(color)));
    }
}
