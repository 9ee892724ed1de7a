//! Pages of palettes from the ColourLovers API.
//!
//! This crate does not speak HTTP: a [`Transport`] supplied by the
//! caller performs the `GET`.  What is fixed here is the shape of the
//! request and how a response body becomes palettes.

use std::ops::Range;
use lazy_static::lazy_static;
use log::{debug, warn};
use serde_json::Value;
use url::Url;
use crate::list::PaletteList;
use crate::palette::Palette;

/// Number of palettes requested at a time by default.
pub const DEFAULT_BATCH_SIZE: usize = 20;

lazy_static! {
    /// Top-ranked palettes.
    pub static ref DEFAULT_API_BASE: Url =
        Url::parse("http://www.colourlovers.com/api/palettes/top")
        .expect("static URL");
}

/// Why a page yielded no palettes.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("transport failed: {0}")]
    Transport(String),
    #[error("empty response body")]
    EmptyBody,
    #[error("response is not JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("response is not an array of palettes")]
    NotAnArray,
}

/// Request for `count` palettes starting at row `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteQuery {
    pub base: Url,
    pub count: usize,
    pub offset: usize,
}

impl PaletteQuery {
    pub fn new(base: Url, count: usize, offset: usize) -> Self {
        PaletteQuery { base, count, offset }
    }

    pub fn for_range(base: Url, rows: Range<usize>) -> Self {
        PaletteQuery { base, count: rows.len(), offset: rows.start }
    }

    /// `<base>?format=json&showPaletteWidths=1&numResults=…&resultOffset=…`
    pub fn url(&self) -> Url {
        let mut url = self.base.clone();
        url.query_pairs_mut()
            .append_pair("format", "json")
            .append_pair("showPaletteWidths", "1")
            .append_pair("numResults", &self.count.to_string())
            .append_pair("resultOffset", &self.offset.to_string());
        url
    }
}

/// Decode a response body: a JSON array of palette records.
///
/// Records that cannot be decoded are logged and skipped; the others
/// are returned in order.
pub fn decode_page(body: &[u8]) -> Result<Vec<Palette>, FetchError> {
    decode_records(body).map(|(page, _)| page)
}

/// The palettes of `body` and the number of records it held.
fn decode_records(body: &[u8]) -> Result<(Vec<Palette>, usize), FetchError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(FetchError::EmptyBody)
    }
    let Value::Array(records) = serde_json::from_slice::<Value>(body)? else {
        return Err(FetchError::NotAnArray)
    };
    let page: Vec<Palette> = records.iter()
        .filter_map(|r| match Palette::from_json(r) {
            Ok(p) => Some(p),
            Err(e) => { warn!("skipping palette record: {e}"); None }
        })
        .collect();
    debug!("decoded {} of {} palette records", page.len(), records.len());
    Ok((page, records.len()))
}

/// Performs the `GET` of a page.
pub trait Transport {
    fn get(&self, url: &Url) -> Result<Vec<u8>, FetchError>;
}

impl<F> Transport for F
where F: Fn(&Url) -> Result<Vec<u8>, FetchError> {
    fn get(&self, url: &Url) -> Result<Vec<u8>, FetchError> { self(url) }
}

/// Fetches pages of palettes through a [`Transport`].
#[derive(Debug, Clone)]
pub struct FetchService<T> {
    transport: T,
    base: Url,
    batch_size: usize,
}

impl<T: Transport> FetchService<T> {
    /// Service for [`struct@DEFAULT_API_BASE`], [`DEFAULT_BATCH_SIZE`]
    /// palettes at a time.
    pub fn new(transport: T) -> Self {
        FetchService { transport, base: DEFAULT_API_BASE.clone(),
                       batch_size: DEFAULT_BATCH_SIZE }
    }

    pub fn with_base(mut self, base: Url) -> Self {
        self.base = base;
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn base(&self) -> &Url { &self.base }

    pub fn batch_size(&self) -> usize { self.batch_size }

    /// Fetch and decode the palettes of rows `rows`.
    pub fn fetch(&self, rows: Range<usize>) -> Result<Vec<Palette>, FetchError> {
        self.fetch_records(rows).map(|(page, _)| page)
    }

    fn fetch_records(&self, rows: Range<usize>)
                     -> Result<(Vec<Palette>, usize), FetchError> {
        let url = PaletteQuery::for_range(self.base.clone(), rows.clone()).url();
        debug!("fetching palettes {rows:?}");
        let body = self.transport.get(&url)?;
        decode_records(&body)
    }

    /// Fetch the batch following the last API row consumed by `list`
    /// and append it.  Returns the number of palettes added; a failed
    /// fetch is logged and leaves `list` untouched.
    pub fn next(&self, list: &mut PaletteList) -> usize {
        let rows = list.next_range(self.batch_size);
        match self.fetch_records(rows) {
            Ok((page, records)) => list.apply_rows(page, records).len(),
            Err(e) => {
                warn!("could not fetch palettes: {e}");
                0
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    const PAGE: &str = r##"[
        {"id": 1, "title": "One", "colors": ["FF0000", "00FF00"],
         "colorWidths": [0.5, 0.5], "dateCreated": "2015-08-14 10:00:00"},
        {"id": 2, "title": "Broken", "colors": ["FF0000", "nope"],
         "colorWidths": [0.5, 0.5], "dateCreated": "2015-08-14 10:00:00"},
        {"id": 3, "title": "Undated", "colors": ["FF0000"],
         "colorWidths": [1.0], "dateCreated": "yesterday"},
        "not a record",
        {"id": 4, "title": "Four", "colors": ["#abc", "#def"],
         "colorWidths": [0.3, 0.7], "dateCreated": "2015-08-15 18:30:00"}
    ]"##;

    #[test]
    fn query_url() {
        let q = PaletteQuery::for_range(DEFAULT_API_BASE.clone(), 40 .. 60);
        assert_eq!(q.url().as_str(),
                   "http://www.colourlovers.com/api/palettes/top?format=json\
                    &showPaletteWidths=1&numResults=20&resultOffset=40");
    }

    #[test]
    fn query_keeps_existing_parameters() {
        let base = Url::parse("http://example.com/palettes?lover=me").unwrap();
        let q = PaletteQuery::new(base, 5, 0);
        assert_eq!(q.url().query(), Some("lover=me&format=json\
                    &showPaletteWidths=1&numResults=5&resultOffset=0"));
    }

    #[test]
    fn bad_records_are_skipped() {
        let page = decode_page(PAGE.as_bytes()).unwrap();
        let ids: Vec<_> = page.iter().map(Palette::id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn bodies_without_palettes() {
        assert!(matches!(decode_page(b""), Err(FetchError::EmptyBody)));
        assert!(matches!(decode_page(b" \n"), Err(FetchError::EmptyBody)));
        assert!(matches!(decode_page(b"<html>"), Err(FetchError::Json(_))));
        assert!(matches!(decode_page(b"{\"id\": 1}"),
                         Err(FetchError::NotAnArray)));
        assert!(decode_page(b"[]").unwrap().is_empty());
    }

    #[test]
    fn next_requests_the_following_rows() {
        let requested = RefCell::new(Vec::new());
        let transport = |url: &Url| -> Result<Vec<u8>, FetchError> {
            requested.borrow_mut().push(url.to_string());
            Ok(PAGE.as_bytes().to_vec())
        };
        let service = FetchService::new(transport).with_batch_size(5);
        let mut list = PaletteList::new();
        assert_eq!(service.next(&mut list), 2);
        assert_eq!(service.next(&mut list), 2);
        assert_eq!(list.len(), 4);
        let requested = requested.borrow();
        assert!(requested[0].ends_with("numResults=5&resultOffset=0"));
        assert!(requested[1].ends_with("numResults=5&resultOffset=5"));
        assert_eq!(list.rows_consumed(), 10);
    }

    #[test]
    fn skipped_records_are_not_requested_again() {
        let requested = RefCell::new(Vec::new());
        let transport = |url: &Url| -> Result<Vec<u8>, FetchError> {
            let offset = url.query_pairs()
                .find(|(k, _)| k == "resultOffset")
                .map(|(_, v)| v.into_owned())
                .unwrap_or_default();
            requested.borrow_mut().push(offset.clone());
            let body = match offset.as_str() {
                "0" => r#"[
                    {"id": 10, "colors": ["000"], "dateCreated": "2015-08-14 10:00:00"},
                    {"id": 11, "colors": ["000"], "dateCreated": "never"},
                    {"id": 12, "colors": ["000"], "dateCreated": "2015-08-14 10:00:00"}
                ]"#,
                "3" => r#"[
                    {"id": 13, "colors": ["fff"], "dateCreated": "2015-08-14 10:00:00"},
                    {"id": 14, "colors": ["fff"], "dateCreated": "2015-08-14 10:00:00"}
                ]"#,
                _ => "[]",
            };
            Ok(body.as_bytes().to_vec())
        };
        let service = FetchService::new(transport).with_batch_size(3);
        let mut list = PaletteList::new();
        assert_eq!(service.next(&mut list), 2);
        assert_eq!(service.next(&mut list), 2);
        assert_eq!(service.next(&mut list), 0);
        assert_eq!(*requested.borrow(), vec!["0", "3", "5"]);
        let ids: Vec<_> = list.iter().map(Palette::id).collect();
        assert_eq!(ids, vec![10, 12, 13, 14]);
    }

    #[test]
    fn failed_fetch_leaves_the_list_alone() {
        let service = FetchService::new(|_: &Url| -> Result<Vec<u8>, FetchError> {
            Err(FetchError::Transport("offline".into()))
        });
        let mut list = PaletteList::new();
        assert_eq!(service.next(&mut list), 0);
        assert!(list.is_empty());
        assert!(matches!(service.fetch(0 .. 20),
                         Err(FetchError::Transport(_))));
    }
}
