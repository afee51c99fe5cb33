pub mod document;
pub mod emoji;
pub mod report;

pub use document::{Block, Document, HeadingLevel, ListItem, Run, Segment};
pub use emoji::{contains_emoji, strip_emojis};
pub use report::{CheckResult, CheckStatus, ComplianceReport};
