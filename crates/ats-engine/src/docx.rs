//! DOCX compliance checks.
//!
//! Nine fixed checks, always run in the same order so reports from
//! different runs line up. Each check inspects the raw package view
//! and is independent of the others.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::debug;

use resume_types::{contains_emoji, CheckResult, ComplianceReport};

use crate::{CheckError, DocxPackage, ATS_SAFE_FONTS, SAFE_COLORS};

pub fn check_docx(path: &Path) -> Result<ComplianceReport, CheckError> {
    let package = DocxPackage::open(path)?;
    debug!(
        paragraphs = package.paragraphs.len(),
        tables = package.tables,
        "opened docx package"
    );

    let mut report = ComplianceReport::new(path.display().to_string());
    report.push(heading_check(&package));
    report.push(font_check(&package));
    report.push(table_check(&package));
    report.push(image_check(&package));
    report.push(color_check(&package));
    report.push(emoji_check(&package));
    report.push(layout_check(&package));
    report.push(hyperlink_check(&package));
    report.push(style_summary(&package));
    Ok(report)
}

fn heading_check(package: &DocxPackage) -> CheckResult {
    let count = package
        .paragraphs
        .iter()
        .filter(|p| p.style.starts_with("Heading"))
        .count();
    if count > 0 {
        CheckResult::pass("Heading styles", format!("{count} built-in headings used"))
    } else {
        CheckResult::warn(
            "Heading styles",
            "No built-in heading styles found - ATS may not detect sections",
        )
    }
}

fn font_check(package: &DocxPackage) -> CheckResult {
    let used = package.fonts_used();
    let unsafe_fonts: Vec<&str> = used
        .iter()
        .copied()
        .filter(|f| !ATS_SAFE_FONTS.contains(f))
        .collect();
    if !unsafe_fonts.is_empty() {
        return CheckResult::warn(
            "Fonts",
            format!("Non-standard fonts: {}", unsafe_fonts.join(", ")),
        );
    }
    let default = package.default_font.as_deref().unwrap_or("document default");
    let extras: Vec<&str> = used
        .iter()
        .copied()
        .filter(|f| Some(*f) != package.default_font.as_deref())
        .collect();
    let detail = if extras.is_empty() {
        format!("ATS-safe: {default}")
    } else {
        format!("ATS-safe: {default} + {}", extras.join(", "))
    };
    CheckResult::pass("Fonts", detail)
}

fn table_check(package: &DocxPackage) -> CheckResult {
    if package.tables > 0 {
        CheckResult::warn(
            "Tables",
            format!(
                "{} table(s) found - some ATS cannot parse these",
                package.tables
            ),
        )
    } else {
        CheckResult::pass("Tables", "None")
    }
}

fn image_check(package: &DocxPackage) -> CheckResult {
    if package.images > 0 {
        CheckResult::warn(
            "Images",
            format!(
                "{} image(s) found - ATS cannot read image text",
                package.images
            ),
        )
    } else {
        CheckResult::pass("Images", "None")
    }
}

fn color_check(package: &DocxPackage) -> CheckResult {
    let used = package.colors_used();
    let nonstandard: Vec<&str> = used
        .iter()
        .copied()
        .filter(|c| !SAFE_COLORS.contains(c))
        .collect();
    if !nonstandard.is_empty() {
        CheckResult::warn(
            "Colors",
            format!("Non-black text colors: {}", nonstandard.join(", ")),
        )
    } else if used.contains("0000FF") {
        CheckResult::pass("Colors", "Black text + hyperlink blue only")
    } else {
        CheckResult::pass("Colors", "Black text only")
    }
}

fn emoji_check(package: &DocxPackage) -> CheckResult {
    let found = package
        .paragraphs
        .iter()
        .any(|p| contains_emoji(&p.text));
    if found {
        CheckResult::warn(
            "Emoji",
            "Emoji characters found - some ATS strip or misparse these",
        )
    } else {
        CheckResult::pass("Emoji", "None")
    }
}

fn layout_check(package: &DocxPackage) -> CheckResult {
    if package.multi_column {
        CheckResult::warn(
            "Layout",
            "Multi-column layout detected - use a single column for ATS",
        )
    } else {
        CheckResult::pass("Layout", "Single column")
    }
}

fn hyperlink_check(package: &DocxPackage) -> CheckResult {
    if package.hyperlinks > 0 {
        CheckResult::pass(
            "Hyperlinks",
            format!("{} preserved as real links", package.hyperlinks),
        )
    } else {
        CheckResult::info("Hyperlinks", "None found")
    }
}

fn style_summary(package: &DocxPackage) -> CheckResult {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for p in &package.paragraphs {
        *counts.entry(p.style.as_str()).or_default() += 1;
    }
    let summary: Vec<String> = counts
        .iter()
        .map(|(style, count)| format!("{style}: {count}"))
        .collect();
    CheckResult::info("Styles used", summary.join(", "))
}
