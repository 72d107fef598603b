//! Building a corpus from a directory of HTML pages

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::Path,
    sync::LazyLock,
};

use regex::Regex;

use super::{Corpus, build_corpus};

const ANCHOR_PATTERN: &str = r#"<a\s+(?:[^>]*?)href="([^"]*)""#;

static ANCHOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(ANCHOR_PATTERN).unwrap_or_else(|_| panic!("Invalid Regex")));

/// Source of the raw hyperlink targets found in a document
pub trait LinkExtractor {
    fn extract_links(&self, document: &str) -> BTreeSet<String>;
}

/// Extracts `href` targets of `<a>` tags
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlLinkExtractor;

impl LinkExtractor for HtmlLinkExtractor {
    fn extract_links(&self, document: &str) -> BTreeSet<String> {
        ANCHOR_RE
            .captures_iter(document)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// Read every `.html` file directly inside `directory` into a [`Corpus`].
///
/// Pages are named by file name. Subdirectories and other files are skipped.
///
/// # Errors
///
/// Returns [`crate::Error::Io`] if the directory or a page cannot be read and
/// [`crate::Error::EmptyCorpus`] if no page was found.
pub fn crawl(directory: &Path, extractor: &impl LinkExtractor) -> crate::Result<Corpus> {
    let entries = fs::read_dir(directory)
        .map_err(|e| crate::Error::io(format!("read directory '{}'", directory.display()), e))?;

    let mut raw: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
    for entry in entries {
        let entry = entry.map_err(|e| crate::Error::io("read directory entry", e))?;
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !path.is_file() || !name.ends_with(".html") {
            tracing::debug!(path = %path.display(), "skipping non-page entry");
            continue;
        }

        let contents = fs::read_to_string(&path)
            .map_err(|e| crate::Error::io(format!("read page '{}'", path.display()), e))?;
        raw.insert(name.to_string(), extractor.extract_links(&contents));
    }

    if raw.is_empty() {
        return Err(crate::Error::EmptyCorpus {
            directory: directory.display().to_string(),
        });
    }

    let corpus = build_corpus(raw);
    tracing::info!(pages = corpus.len(), directory = %directory.display(), "crawled corpus");
    Ok(corpus)
}
