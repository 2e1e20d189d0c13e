//! Keyword-overlap relevance scoring over the knowledge store.

use crate::knowledge::{CategoryEntry, KnowledgeEntry, KnowledgeStore};

/// Maximum number of matches handed to the context builder.
pub const TOP_N: usize = 2;

/// What a [`Match`] points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTarget<'a> {
    Service(&'a KnowledgeEntry),
    Category(&'a CategoryEntry),
}

/// A scored reference into the store. Lives only for one query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub target: MatchTarget<'a>,
    pub score: u32,
}

impl<'a> Match<'a> {
    /// Service title, or category id.
    pub fn label(&self) -> &'a str {
        match self.target {
            MatchTarget::Service(s) => &s.title,
            MatchTarget::Category(c) => &c.id,
        }
    }

    pub fn service(&self) -> Option<&'a KnowledgeEntry> {
        match self.target {
            MatchTarget::Service(s) => Some(s),
            MatchTarget::Category(_) => None,
        }
    }
}

/// Scores every service and category against `query` and returns the best
/// [`TOP_N`] with a positive score.
///
/// A service gains the word count of each keyword found in the lower-cased
/// query; a category gains 1 per keyword found. Matching is plain substring
/// containment, so "window" also fires inside "windows". Ties keep catalog
/// order, services before categories.
///
/// # Example
/// ```
/// use glass_rag::{KnowledgeStore, score};
/// let matches = score("window price", KnowledgeStore::builtin());
/// assert_eq!(matches[0].label(), "Window Glass Installation");
/// ```
pub fn score<'a>(query: &str, store: &'a KnowledgeStore) -> Vec<Match<'a>> {
    let q = query.to_lowercase();
    let mut pool: Vec<Match<'a>> = Vec::new();

    for entry in &store.services {
        let s: u32 = entry
            .keywords
            .iter()
            .filter_map(|k| keyword_hit(&q, k))
            .map(|k| k.split_whitespace().count() as u32)
            .sum();
        if s > 0 {
            pool.push(Match {
                target: MatchTarget::Service(entry),
                score: s,
            });
        }
    }

    for cat in &store.categories {
        let s = cat
            .keywords
            .iter()
            .filter(|k| keyword_hit(&q, k).is_some())
            .count() as u32;
        if s > 0 {
            pool.push(Match {
                target: MatchTarget::Category(cat),
                score: s,
            });
        }
    }

    // `sort_by` is stable; equal scores keep insertion order.
    pool.sort_by(|a, b| b.score.cmp(&a.score));
    pool.truncate(TOP_N);
    pool
}

/// Lower-cased keyword if it occurs in `q`. Blank keywords never match.
fn keyword_hit(q: &str, keyword: &str) -> Option<String> {
    let k = keyword.to_lowercase();
    if k.trim().is_empty() || !q.contains(&k) {
        return None;
    }
    Some(k)
}
