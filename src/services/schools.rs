// src/services/schools.rs

//! School search service.
//!
//! Queries the public school directory, falls back to the private school
//! directory when that finds nothing, and always adds colleges. Names are
//! normalized, deduplicated in order of first appearance and capped.

use std::collections::HashSet;

use crate::error::{Degrade, Result};
use crate::models::{Config, DirectoryConfig, DirectoryEndpoint, SchoolRecord};
use crate::services::extract::{NameExtractor, PatternExtractor};
use crate::utils::{PageSource, normalize_name};

/// Normalized names in order of first appearance.
#[derive(Debug, Default)]
struct UniqueNames {
    seen: HashSet<String>,
    names: Vec<String>,
}

impl UniqueNames {
    fn insert(&mut self, name: String) {
        if !name.is_empty() && self.seen.insert(name.clone()) {
            self.names.push(name);
        }
    }

    fn len(&self) -> usize {
        self.names.len()
    }

    fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Service for finding schools near a postal code.
pub struct SchoolSearch<S> {
    source: S,
    directories: DirectoryConfig,
    max_results: usize,
    school_links: Box<dyn NameExtractor>,
    college_links: Box<dyn NameExtractor>,
}

impl<S: PageSource> SchoolSearch<S> {
    /// Create a search service with the default extraction patterns.
    pub fn new(source: S, config: &Config) -> Self {
        Self {
            source,
            directories: config.directories.clone(),
            max_results: config.search.max_results,
            school_links: Box::new(PatternExtractor::school_detail_links()),
            college_links: Box::new(PatternExtractor::college_links()),
        }
    }

    /// Replace the extractors used for school and college pages.
    pub fn with_extractors(
        mut self,
        school_links: impl NameExtractor + 'static,
        college_links: impl NameExtractor + 'static,
    ) -> Self {
        self.school_links = Box::new(school_links);
        self.college_links = Box::new(college_links);
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Find schools near `zip`.
    ///
    /// Never fails: any transport or URL error discards everything found so
    /// far and yields an empty list.
    pub fn search(&self, zip: &str) -> Vec<SchoolRecord> {
        self.try_search(zip)
            .degrade(&format!("School search for {zip}"), Vec::new)
    }

    /// Find schools near `zip`, surfacing transport and URL errors.
    ///
    /// A directory answering with a non-success status contributes nothing
    /// but does not stop the search.
    pub fn try_search(&self, zip: &str) -> Result<Vec<SchoolRecord>> {
        let mut names = UniqueNames::default();

        self.collect(
            &self.directories.public_schools,
            zip,
            self.school_links.as_ref(),
            &mut names,
        )?;

        if names.is_empty() {
            log::debug!("No public schools for {zip}, trying private schools");
            self.collect(
                &self.directories.private_schools,
                zip,
                self.school_links.as_ref(),
                &mut names,
            )?;
        }

        self.collect(
            &self.directories.colleges,
            zip,
            self.college_links.as_ref(),
            &mut names,
        )?;

        log::debug!("Found {} unique name(s) for {zip}", names.len());

        Ok(names
            .names
            .into_iter()
            .take(self.max_results)
            .map(|name| SchoolRecord::new(name, zip))
            .collect())
    }

    /// Fetch one directory page and merge its names into `names`.
    fn collect(
        &self,
        endpoint: &DirectoryEndpoint,
        zip: &str,
        extractor: &dyn NameExtractor,
        names: &mut UniqueNames,
    ) -> Result<()> {
        let url = endpoint.url_for(zip)?;
        log::debug!("Fetching {url}");

        let Some(body) = self.source.fetch(&url)? else {
            return Ok(());
        };

        let before = names.len();
        for raw in extractor.extract(&body) {
            names.insert(normalize_name(&raw));
        }
        log::debug!("{url}: {} new name(s)", names.len() - before);

        Ok(())
    }
}
