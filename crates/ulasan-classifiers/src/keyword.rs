//! Keyword matching engines
//!
//! Single-pass Aho-Corasick matching over per-axis lexicons. Automatons are
//! built once at construction; a classification allocates only the lowercased
//! copy of the text.

use crate::lexicon::{IctRules, KeywordTable};
use aho_corasick::AhoCorasick;
use ulasan_core::{Error, Result};

/// Scores a keyword table against a text and selects the winning label.
///
/// A label's score is the number of distinct keywords from its list that
/// occur as substrings of the lowercased text; repeated occurrences of one
/// keyword count once.
pub struct KeywordScorer {
    automaton: AhoCorasick,
    /// pattern id -> entry index
    pattern_entry: Vec<usize>,
    /// labels in declaration order
    labels: Vec<String>,
    /// entry index returned when every label scores zero
    fallback: Option<usize>,
}

impl KeywordScorer {
    pub fn new(table: &KeywordTable) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_entry = Vec::new();
        for (idx, entry) in table.entries.iter().enumerate() {
            for keyword in &entry.keywords {
                if keyword.trim().is_empty() {
                    return Err(Error::config(format!(
                        "label {:?} declares an empty keyword",
                        entry.label
                    )));
                }
                patterns.push(keyword.to_lowercase());
                pattern_entry.push(idx);
            }
        }

        let automaton = AhoCorasick::new(&patterns)
            .map_err(|e| Error::config(format!("failed to build keyword matcher: {e}")))?;

        let labels: Vec<String> = table.entries.iter().map(|e| e.label.clone()).collect();
        let fallback = match &table.fallback {
            Some(label) => {
                let idx = labels.iter().position(|l| l == label).ok_or_else(|| {
                    Error::config(format!("fallback label {label:?} is not declared"))
                })?;
                Some(idx)
            }
            None => None,
        };

        Ok(Self {
            automaton,
            pattern_entry,
            labels,
            fallback,
        })
    }

    /// Distinct-keyword counts per label, in declaration order
    pub fn score(&self, text: &str) -> Vec<(&str, usize)> {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts(text))
            .collect()
    }

    /// Select the winning label: maximum score with ties (including the
    /// all-zero tie) resolved to the first-declared label among the tied,
    /// unless the table declares a fallback for the all-zero case.
    pub fn classify(&self, text: &str) -> &str {
        let counts = self.counts(text);
        let mut best = 0;
        for (idx, &count) in counts.iter().enumerate().skip(1) {
            if count > counts[best] {
                best = idx;
            }
        }
        if counts[best] == 0 {
            if let Some(fallback) = self.fallback {
                return &self.labels[fallback];
            }
        }
        &self.labels[best]
    }

    fn counts(&self, text: &str) -> Vec<usize> {
        let lowered = text.to_lowercase();
        let mut matched = vec![false; self.pattern_entry.len()];
        for m in self.automaton.find_overlapping_iter(&lowered) {
            matched[m.pattern().as_usize()] = true;
        }

        let mut counts = vec![0usize; self.labels.len()];
        for (pattern, hit) in matched.iter().enumerate() {
            if *hit {
                counts[self.pattern_entry[pattern]] += 1;
            }
        }
        counts
    }
}

/// First-match evaluator for the ICT-literacy precedence rules.
///
/// Returns the first category in priority order with at least one keyword
/// present in the lowercased text, or the default category when none match.
pub struct IctMatcher {
    automaton: AhoCorasick,
    /// pattern id -> category index
    pattern_category: Vec<usize>,
    /// category labels in priority order
    labels: Vec<String>,
    default: usize,
}

impl IctMatcher {
    pub fn new(rules: &IctRules) -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_category = Vec::new();
        for (idx, category) in rules.categories.iter().enumerate() {
            for keyword in &category.keywords {
                if keyword.trim().is_empty() {
                    return Err(Error::config(format!(
                        "category {:?} declares an empty keyword",
                        category.label
                    )));
                }
                patterns.push(keyword.to_lowercase());
                pattern_category.push(idx);
            }
        }

        let automaton = AhoCorasick::new(&patterns)
            .map_err(|e| Error::config(format!("failed to build keyword matcher: {e}")))?;

        let labels: Vec<String> = rules.categories.iter().map(|e| e.label.clone()).collect();
        let default = labels
            .iter()
            .position(|l| l == &rules.default)
            .ok_or_else(|| {
                Error::config(format!(
                    "default label {:?} is not a declared category",
                    rules.default
                ))
            })?;

        Ok(Self {
            automaton,
            pattern_category,
            labels,
            default,
        })
    }

    pub fn classify(&self, text: &str) -> &str {
        let lowered = text.to_lowercase();
        let mut hit = vec![false; self.labels.len()];
        for m in self.automaton.find_overlapping_iter(&lowered) {
            hit[self.pattern_category[m.pattern().as_usize()]] = true;
        }

        match hit.iter().position(|h| *h) {
            Some(idx) => &self.labels[idx],
            None => &self.labels[self.default],
        }
    }
}
