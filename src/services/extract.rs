// src/services/extract.rs

//! Name extraction from raw directory pages.
//!
//! Directory pages are matched as plain text, not parsed as HTML. Everything
//! that knows about their markup sits behind [`NameExtractor`], so the search
//! service only ever sees candidate names.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;

/// Turns a raw page body into candidate school names, in page order.
pub trait NameExtractor {
    fn extract(&self, body: &str) -> Vec<String>;
}

/// School-detail links on the public and private school search pages.
static SCHOOL_DETAIL_LINKS: LazyLock<PatternExtractor> = LazyLock::new(|| {
    PatternExtractor::new(r#"(?i)href="school_detail\.asp\?[^>]+>([^<]+)</a>"#)
        .expect("school detail pattern is valid")
});

/// Bold anchors on the college search page.
static COLLEGE_LINKS: LazyLock<PatternExtractor> = LazyLock::new(|| {
    PatternExtractor::new(r#"(?i)<a href="[^"]+"><strong>([^<]+)</strong></a>"#)
        .expect("college link pattern is valid")
});

/// Extracts the first capture group of every match of a regex.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    pattern: Regex,
}

impl PatternExtractor {
    /// Compile an extractor. The pattern must have one capture group.
    pub fn new(pattern: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
        })
    }

    /// Extractor for school-detail anchors (public and private directories).
    pub fn school_detail_links() -> Self {
        SCHOOL_DETAIL_LINKS.clone()
    }

    /// Extractor for `<a><strong>name</strong></a>` anchors (college directory).
    pub fn college_links() -> Self {
        COLLEGE_LINKS.clone()
    }
}

impl NameExtractor for PatternExtractor {
    fn extract(&self, body: &str) -> Vec<String> {
        self.pattern
            .captures_iter(body)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
