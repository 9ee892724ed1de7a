//! Hexadecimal color notation.

use rgb::RGBA;
use crate::RGBColor;

/// Decode `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the leading `#`
/// is optional).
///
/// Short forms scale each digit by 1/15, long forms each pair of
/// digits by 1/255.  Alpha defaults to 1 when absent.  Any other
/// length, or any character that is not a hexadecimal digit, gives
/// `None`.
pub fn parse_hex<C: RGBColor>(s: &str) -> Option<C> {
    let hex = s.strip_prefix('#').unwrap_or(s);
    // `from_str_radix` would accept a leading sign.
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) { return None }
    let nibble = |v: u32, shift: u32| ((v >> shift) & 0xF) as f64 / 15.;
    let byte = |v: u32, shift: u32| ((v >> shift) & 0xFF) as f64 / 255.;
    let rgba = match hex.len() {
        3 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            RGBA { r: nibble(v, 8), g: nibble(v, 4), b: nibble(v, 0), a: 1. }
        }
        4 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            RGBA { r: nibble(v, 12), g: nibble(v, 8), b: nibble(v, 4),
                   a: nibble(v, 0) }
        }
        6 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            RGBA { r: byte(v, 16), g: byte(v, 8), b: byte(v, 0), a: 1. }
        }
        8 => {
            let v = u32::from_str_radix(hex, 16).ok()?;
            RGBA { r: byte(v, 24), g: byte(v, 16), b: byte(v, 8),
                   a: byte(v, 0) }
        }
        _ => return None,
    };
    Some(C::from_rgba(rgba))
}

fn channel(x: f64) -> u8 { (255. * x.clamp(0., 1.)).round() as u8 }

/// Return `#rrggbb`, or `#rrggbbaa` when the color is not opaque.
/// Channels outside \[0, 1\] are clamped.
pub fn to_hex<C: RGBColor>(c: &C) -> String {
    let RGBA { r, g, b, a } = c.to_rgba();
    let (r, g, b, a) = (channel(r), channel(g), channel(b), channel(a));
    if a == 255 { format!("#{r:02x}{g:02x}{b:02x}") }
    else { format!("#{r:02x}{g:02x}{b:02x}{a:02x}") }
}
