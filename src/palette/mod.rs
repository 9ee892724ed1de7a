//! Palettes of the [ColourLovers API](http://www.colourlovers.com/api).

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;
use chrono::NaiveDateTime;
use rgb::RGBA;
use serde_json::Value;
use url::Url;
use crate::geometry::Rect;
use crate::hex::parse_hex;
use crate::render::{self, Fill, Strategy};

mod json;
use json::{array_value, float_value, int_value, string_value};

/// Format of `dateCreated` in API records.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Keys of an API record.
pub mod keys {
    pub const ID: &str = "id";
    pub const TITLE: &str = "title";
    pub const USER_NAME: &str = "userName";
    pub const COLORS: &str = "colors";
    pub const COLOR_WIDTHS: &str = "colorWidths";
    pub const NUM_VIEWS: &str = "numViews";
    pub const NUM_VOTES: &str = "numVotes";
    pub const NUM_COMMENTS: &str = "numComments";
    pub const NUM_HEARTS: &str = "numHearts";
    pub const RANK: &str = "rank";
    pub const DATE_CREATED: &str = "dateCreated";
    pub const URL: &str = "url";
    pub const IMAGE_URL: &str = "imageUrl";
    pub const BADGE_URL: &str = "badgeUrl";
    pub const API_URL: &str = "apiUrl";
}

/// Why a record could not be turned into a [`Palette`].
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// A required field holds a value that cannot be decoded.
    #[error("could not parse [{key:?} : {value}]")]
    ValueIncorrectType { key: &'static str, value: Value },
    #[error("palette record is not an object: {0}")]
    NotAnObject(Value),
    #[error("palette record is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl PaletteError {
    /// The offending field, if any.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            PaletteError::ValueIncorrectType { key, .. } => Some(*key),
            _ => None,
        }
    }
}

/// A palette: colors with their proportional widths, and the metadata
/// published with them.
///
/// Two palettes are equal when their ids are; the id alone is hashed.
#[derive(Debug, Clone)]
pub struct Palette {
    id: i64,
    title: String,
    user_name: String,
    colors: Vec<RGBA<f64>>, // Invariant: same length as `color_widths`
    color_widths: Vec<f64>,
    num_views: i64,
    num_votes: i64,
    num_comments: i64,
    num_hearts: f64,
    rank: i64,
    date_created: NaiveDateTime,
    url: Option<Url>,
    image_url: Option<Url>,
    badge_url: Option<Url>,
    api_url: Option<Url>,
}

fn raw(record: &Value, key: &str) -> Value {
    record.get(key).cloned().unwrap_or(Value::Null)
}

fn url_value(v: Option<&Value>) -> Option<Url> {
    Url::parse(&string_value(v)).ok()
}

impl Palette {
    /// Build a palette from an API record.
    ///
    /// Counters, title and user name fall back to zero or empty when
    /// missing.  The record is rejected if one of its `colors` is not
    /// a hexadecimal color, if `dateCreated` is not
    /// `yyyy-MM-dd HH:mm:ss`, or if `colorWidths` is given but does
    /// not have one width per color.  Without `colorWidths`, the
    /// colors get equal widths.
    ///
    /// # Example
    ///
    /// ```
    /// use palette_mosaic::Palette;
    /// let record = serde_json::json!({
    ///     "id": 92095, "title": "Giant Goldfish",
    ///     "colors": ["69D2E7", "A7DBD8", "E0E4CC"],
    ///     "colorWidths": [0.3, 0.3, 0.4],
    ///     "dateCreated": "2007-07-03 10:42:02" });
    /// let p = Palette::from_json(&record).unwrap();
    /// assert_eq!(p.len(), 3);
    /// assert!(!p.has_uniform_widths());
    /// ```
    pub fn from_json(record: &Value) -> Result<Palette, PaletteError> {
        if !record.is_object() {
            return Err(PaletteError::NotAnObject(record.clone()))
        }
        let get = |key: &str| record.get(key);

        // Undecodable colors are skipped, then the count is checked.
        let hexes = array_value(get(keys::COLORS));
        let colors: Vec<RGBA<f64>> = hexes.iter()
            .filter_map(|h| parse_hex(&string_value(Some(h))))
            .collect();
        if colors.len() != hexes.len() {
            return Err(PaletteError::ValueIncorrectType {
                key: keys::COLORS, value: raw(record, keys::COLORS) })
        }

        let date = string_value(get(keys::DATE_CREATED));
        let date_created = NaiveDateTime::parse_from_str(&date, DATE_FORMAT)
            .map_err(|_| PaletteError::ValueIncorrectType {
                key: keys::DATE_CREATED,
                value: raw(record, keys::DATE_CREATED) })?;

        let widths = array_value(get(keys::COLOR_WIDTHS));
        let color_widths: Vec<f64> = if widths.is_empty() {
            vec![1. / colors.len().max(1) as f64; colors.len()]
        } else {
            widths.iter().map(|w| float_value(Some(w))).collect()
        };
        if color_widths.len() != colors.len() {
            return Err(PaletteError::ValueIncorrectType {
                key: keys::COLOR_WIDTHS, value: raw(record, keys::COLOR_WIDTHS) })
        }

        Ok(Palette {
            id: int_value(get(keys::ID)),
            title: string_value(get(keys::TITLE)),
            user_name: string_value(get(keys::USER_NAME)),
            colors,
            color_widths,
            num_views: int_value(get(keys::NUM_VIEWS)),
            num_votes: int_value(get(keys::NUM_VOTES)),
            num_comments: int_value(get(keys::NUM_COMMENTS)),
            num_hearts: float_value(get(keys::NUM_HEARTS)),
            rank: int_value(get(keys::RANK)),
            date_created,
            url: url_value(get(keys::URL)),
            image_url: url_value(get(keys::IMAGE_URL)),
            badge_url: url_value(get(keys::BADGE_URL)),
            api_url: url_value(get(keys::API_URL)),
        })
    }

    /// Identifier given by the API.
    pub fn id(&self) -> i64 { self.id }

    pub fn title(&self) -> &str { &self.title }

    pub fn user_name(&self) -> &str { &self.user_name }

    /// Colors, channels in \[0, 1\].
    pub fn colors(&self) -> &[RGBA<f64>] { &self.colors }

    /// Proportion of each color, conventionally summing to 1.
    pub fn color_widths(&self) -> &[f64] { &self.color_widths }

    /// Number of colors.
    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    pub fn num_views(&self) -> i64 { self.num_views }

    pub fn num_votes(&self) -> i64 { self.num_votes }

    pub fn num_comments(&self) -> i64 { self.num_comments }

    /// Rating from 0 to 5, in steps of ½.
    pub fn num_hearts(&self) -> f64 { self.num_hearts }

    pub fn rank(&self) -> i64 { self.rank }

    pub fn date_created(&self) -> NaiveDateTime { self.date_created }

    /// Web page of the palette.
    pub fn url(&self) -> Option<&Url> { self.url.as_ref() }

    pub fn image_url(&self) -> Option<&Url> { self.image_url.as_ref() }

    /// Image with the palette's statistics.
    pub fn badge_url(&self) -> Option<&Url> { self.badge_url.as_ref() }

    /// JSON description of the palette.
    pub fn api_url(&self) -> Option<&Url> { self.api_url.as_ref() }

    /// Whether all widths are equal (true for zero or one color).
    pub fn has_uniform_widths(&self) -> bool {
        match self.color_widths.split_first() {
            Some((first, rest)) => rest.iter().all(|w| w == first),
            None => true,
        }
    }

    /// Partition `surface` among the colors of the palette.
    pub fn render(&self, surface: Rect, strategy: Strategy,
                  reverse: bool) -> Vec<Fill<RGBA<f64>>> {
        render::render(surface, &self.colors, &self.color_widths,
                       strategy, reverse)
    }
}

impl TryFrom<&Value> for Palette {
    type Error = PaletteError;

    fn try_from(record: &Value) -> Result<Self, Self::Error> {
        Palette::from_json(record)
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    /// Parse a single JSON record.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Palette::from_json(&serde_json::from_str(s)?)
    }
}

impl PartialEq for Palette {
    fn eq(&self, other: &Self) -> bool { self.id == other.id }
}

impl Eq for Palette {}

impl Hash for Palette {
    fn hash<H: Hasher>(&self, state: &mut H) { self.id.hash(state) }
}

/// `<Palette> title(id)`, then the colors and the widths.
impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Palette> {}({})\n\t[", self.title, self.id)?;
        for (i, c) in self.colors.iter().enumerate() {
            if i > 0 { f.write_str(", ")? }
            write!(f, "{{{} {} {} {}}}", c.r, c.g, c.b, c.a)?;
        }
        f.write_str("]\n\t[")?;
        for (i, w) in self.color_widths.iter().enumerate() {
            if i > 0 { f.write_str(", ")? }
            write!(f, "{w}")?;
        }
        f.write_str("]")
    }
}
