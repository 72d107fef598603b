//! Link graph representation

use std::collections::{BTreeMap, BTreeSet};

/// A set of pages and the pages each one links to.
///
/// Every link target is itself a page of the corpus and no page links to
/// itself. A page with no outgoing links is dangling; the ranking code
/// treats it as linking to every page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    pages: BTreeMap<String, BTreeSet<String>>,
}

impl Corpus {
    /// Number of pages in the corpus
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn contains(&self, page: &str) -> bool {
        self.pages.contains_key(page)
    }

    /// Page names in sorted order
    pub fn pages(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    /// Outgoing links of `page`, or `None` if the page is unknown
    pub fn links(&self, page: &str) -> Option<&BTreeSet<String>> {
        self.pages.get(page)
    }

    /// Iterate over `(page, links)` pairs in sorted page order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.pages.iter().map(|(page, links)| (page.as_str(), links))
    }

    /// Whether `page` has no outgoing links
    pub fn is_dangling(&self, page: &str) -> bool {
        self.pages.get(page).is_some_and(BTreeSet::is_empty)
    }
}

/// Build a corpus from the raw links extracted from each page.
///
/// Links pointing outside the known pages are dropped, as are links from a
/// page to itself.
pub fn build_corpus<I, P, L>(raw: I) -> Corpus
where
    I: IntoIterator<Item = (P, L)>,
    P: Into<String>,
    L: IntoIterator,
    L::Item: Into<String>,
{
    let raw: BTreeMap<String, BTreeSet<String>> = raw
        .into_iter()
        .map(|(page, links)| (page.into(), links.into_iter().map(Into::into).collect()))
        .collect();

    let pages = raw
        .iter()
        .map(|(page, links)| {
            let kept = links
                .iter()
                .filter(|link| *link != page && raw.contains_key(link.as_str()))
                .cloned()
                .collect();
            (page.clone(), kept)
        })
        .collect();

    Corpus { pages }
}
