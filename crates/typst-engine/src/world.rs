//! In-memory implementation of the Typst `World` trait.
//!
//! A render holds exactly one virtual source file; there is no
//! filesystem access, no packages, and no external assets, so
//! compilation cannot touch anything outside the process.

use chrono::{Datelike, Timelike, Utc};
use typst::diag::{FileError, FileResult};
use typst::foundations::{Bytes, Datetime};
use typst::syntax::{FileId, Source, VirtualPath};
use typst::text::{Font, FontBook};
use typst::utils::LazyHash;
use typst::{Library, World};

use crate::fonts::{global_font_cache, FontCache};

pub struct ResumeWorld {
    main: Source,
    font_cache: &'static FontCache,
    library: LazyHash<Library>,
    book: LazyHash<FontBook>,
    time: chrono::DateTime<Utc>,
}

impl ResumeWorld {
    pub fn new(source: String) -> Self {
        let cache = global_font_cache();
        let id = FileId::new(None, VirtualPath::new("/main.typ"));
        Self {
            main: Source::new(id, source),
            font_cache: cache,
            library: LazyHash::new(Library::builder().build()),
            book: LazyHash::new(cache.book().clone()),
            time: Utc::now(),
        }
    }
}

impl World for ResumeWorld {
    fn library(&self) -> &LazyHash<Library> {
        &self.library
    }

    fn book(&self) -> &LazyHash<FontBook> {
        &self.book
    }

    fn main(&self) -> FileId {
        self.main.id()
    }

    fn source(&self, id: FileId) -> FileResult<Source> {
        if id == self.main.id() {
            Ok(self.main.clone())
        } else {
            Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
        }
    }

    fn file(&self, id: FileId) -> FileResult<Bytes> {
        Err(FileError::NotFound(id.vpath().as_rootless_path().into()))
    }

    fn font(&self, index: usize) -> Option<Font> {
        self.font_cache.font(index)
    }

    fn today(&self, offset: Option<i64>) -> Option<Datetime> {
        let offset_hours = offset.unwrap_or(0);
        let adjusted = self.time + chrono::Duration::hours(offset_hours);

        Datetime::from_ymd_hms(
            adjusted.year(),
            adjusted.month() as u8,
            adjusted.day() as u8,
            adjusted.hour() as u8,
            adjusted.minute() as u8,
            adjusted.second() as u8,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_serves_the_main_source() {
        let world = ResumeWorld::new("Hello".to_string());
        let source = world.source(world.main()).unwrap();
        assert!(source.text().contains("Hello"));
    }

    #[test]
    fn unknown_files_are_not_found() {
        let world = ResumeWorld::new("x".to_string());
        let other = FileId::new(None, VirtualPath::new("/other.typ"));
        assert!(world.source(other).is_err());
        assert!(world.file(other).is_err());
    }

    #[test]
    fn today_is_available() {
        let world = ResumeWorld::new("x".to_string());
        assert!(world.today(None).is_some());
    }
}
