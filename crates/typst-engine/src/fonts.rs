//! Font loading and caching.
//!
//! Fonts come from the embedded `typst-assets` set so rendering is
//! reproducible across machines; the cache is shared for the life of
//! the process.

use std::sync::OnceLock;

use typst::foundations::Bytes;
use typst::text::{Font, FontBook};

static FONT_CACHE: OnceLock<FontCache> = OnceLock::new();

/// Get the global font cache, initializing it on first use.
pub fn global_font_cache() -> &'static FontCache {
    FONT_CACHE.get_or_init(FontCache::new)
}

/// Embedded fonts plus their metadata book.
#[derive(Debug)]
pub struct FontCache {
    book: FontBook,
    fonts: Vec<Font>,
}

impl FontCache {
    pub fn new() -> Self {
        let mut book = FontBook::new();
        let mut fonts = Vec::new();

        for data in typst_assets::fonts() {
            let buffer = Bytes::from_static(data);
            for font in Font::iter(buffer) {
                book.push(font.info().clone());
                fonts.push(font);
            }
        }

        tracing::debug!("font cache initialized with {} fonts", fonts.len());

        Self { book, fonts }
    }

    pub fn book(&self) -> &FontBook {
        &self.book
    }

    pub fn font(&self, index: usize) -> Option<Font> {
        self.fonts.get(index).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}

impl Default for FontCache {
    fn default() -> Self {
        Self::new()
    }
}
