//! Label sets and keyword lexicons
//!
//! The three label sets and their keyword tables are configuration data, not
//! logic: the matching engine is language-agnostic and the lexicon is
//! swappable per deployment locale. The built-in lexicon targets Indonesian
//! e-learning reviews, matching the platform's original deployment.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use ulasan_core::{Axis, Error, Result};

/// Fixed, ordered candidate labels for one axis.
///
/// Declaration order is semantically significant: scored axes resolve ties to
/// the first-declared label among the tied candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelSet {
    /// Axis these labels belong to
    pub axis: Axis,

    /// Candidate labels, in declaration order
    pub labels: Vec<String>,
}

impl LabelSet {
    /// Create a new label set
    pub fn new<I, S>(axis: Axis, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            axis,
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `label` is a member of this set
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// The first-declared label, if any
    pub fn first(&self) -> Option<&str> {
        self.labels.first().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// One label with its keyword list (lowercase literal substrings).
///
/// A label may carry an empty keyword list: it never matches and is reachable
/// only through a table's fallback or tie-break default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    /// Label this entry scores for
    pub label: String,

    /// Keywords matched as substrings of the lowercased text
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl KeywordEntry {
    pub fn new<I, S>(label: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            label: label.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
        }
    }
}

/// Ordered label -> keyword-list table for one scored axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordTable {
    /// Entries in declaration order; this order drives the tie-break
    pub entries: Vec<KeywordEntry>,

    /// Label returned when every entry scores zero.
    ///
    /// Without a fallback the all-zero tie resolves to the first-declared
    /// label, like any other tie.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl KeywordTable {
    /// Labels in declaration order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.label.as_str())
    }
}

/// Ordered precedence categories for the ICT-literacy axis.
///
/// Unlike the scored axes, ICT literacy is evaluated by first-match over the
/// category order: literacy complaints are assumed to dominate signal over
/// technical-issue language, so the order is policy and must not be
/// rearranged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IctRules {
    /// Categories in priority order
    pub categories: Vec<KeywordEntry>,

    /// Label returned when no category keyword is present
    pub default: String,
}

impl IctRules {
    /// Category labels in priority order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|e| e.label.as_str())
    }
}

/// The complete lexicon: one table or rule list per strategy-classified axis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Problem-topic keyword table
    pub topic: KeywordTable,

    /// ICT-literacy precedence rules
    pub ict: IctRules,

    /// Emotional-tone keyword table
    pub emotion: KeywordTable,
}

impl Lexicon {
    /// The built-in Indonesian lexicon
    pub fn builtin() -> Self {
        Self {
            topic: KeywordTable {
                entries: builtin_entries(TOPIC_LEXICON),
                fallback: None,
            },
            ict: IctRules {
                categories: builtin_entries(ICT_LEXICON),
                default: ICT_DEFAULT.to_string(),
            },
            emotion: KeywordTable {
                entries: builtin_entries(EMOTION_LEXICON),
                fallback: Some(EMOTION_FALLBACK.to_string()),
            },
        }
    }

    /// Load a lexicon from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| Error::config(format!("invalid lexicon: {e}")))
    }

    /// Load a lexicon from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Serialize the lexicon to YAML (for per-locale editing)
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| Error::config(format!("lexicon export: {e}")))
    }

    /// The candidate labels for one axis, in declaration order
    pub fn label_set(&self, axis: Axis) -> LabelSet {
        match axis {
            Axis::Topic => LabelSet::new(axis, self.topic.labels()),
            Axis::IctLiteracy => LabelSet::new(axis, self.ict.labels()),
            Axis::Emotion => LabelSet::new(axis, self.emotion.labels()),
        }
    }

    /// Check the lexicon invariants: non-empty label sets, unique labels per
    /// axis, and fallback/default labels that are members of their axis.
    pub fn validate(&self) -> Result<()> {
        validate_table(&self.topic, Axis::Topic)?;
        validate_table(&self.emotion, Axis::Emotion)?;

        if self.ict.categories.is_empty() {
            return Err(Error::config("ict_literacy: no categories declared"));
        }
        check_unique(self.ict.labels(), Axis::IctLiteracy)?;
        if !self.ict.labels().any(|l| l == self.ict.default.as_str()) {
            return Err(Error::config(format!(
                "ict_literacy: default label {:?} is not a declared category",
                self.ict.default
            )));
        }

        Ok(())
    }
}

fn validate_table(table: &KeywordTable, axis: Axis) -> Result<()> {
    if table.entries.is_empty() {
        return Err(Error::config(format!("{axis}: no labels declared")));
    }
    check_unique(table.labels(), axis)?;
    if let Some(fallback) = &table.fallback {
        if !table.labels().any(|l| l == fallback) {
            return Err(Error::config(format!(
                "{axis}: fallback label {fallback:?} is not a declared label"
            )));
        }
    }
    Ok(())
}

fn check_unique<'a>(labels: impl Iterator<Item = &'a str>, axis: Axis) -> Result<()> {
    let mut seen = HashSet::new();
    for label in labels {
        if !seen.insert(label) {
            return Err(Error::config(format!("{axis}: duplicate label {label:?}")));
        }
    }
    Ok(())
}

fn builtin_entries(lexicon: &[(&str, &[&str])]) -> Vec<KeywordEntry> {
    lexicon
        .iter()
        .map(|(label, keywords)| KeywordEntry::new(*label, keywords.iter().copied()))
        .collect()
}

/// Problem-topic lexicon. Label order drives the tie-break.
const TOPIC_LEXICON: &[(&str, &[&str])] = &[
    (
        "Akses kelas dan materi",
        &[
            "akses kelas",
            "akses materi",
            "tidak bisa masuk kelas",
            "materi tidak muncul",
            "materi tidak bisa dibuka",
        ],
    ),
    (
        "Notifikasi tidak muncul",
        &["notifikasi", "pemberitahuan", "notif"],
    ),
    (
        "Upload tugas",
        &["upload", "unggah", "kumpul tugas", "tugas tidak terkirim"],
    ),
    (
        "Login atau SSO",
        &["login", "log in", "sso", "kata sandi", "password", "masuk akun"],
    ),
    (
        "Navigasi aplikasi",
        &["navigasi", "menu", "pindah halaman", "cari fitur"],
    ),
    (
        "Fitur tidak lengkap",
        &[
            "fitur tidak lengkap",
            "fitur kurang",
            "belum ada fitur",
            "fitur tidak tersedia",
        ],
    ),
    (
        "Video conference bermasalah",
        &[
            "video conference",
            "video call",
            "vicon",
            "zoom",
            "meet",
            "kamera",
            "mikrofon",
        ],
    ),
    (
        "Bug atau error aplikasi",
        &["bug", "error", "crash", "force close", "keluar sendiri"],
    ),
    (
        "Masalah performa atau lemot",
        &["lemot", "lambat", "loading lama", "berat", "ngelag", "lag", "macet"],
    ),
    (
        "Tampilan atau UI membingungkan",
        &["tampilan", "desain", "antarmuka", "interface", "membingungkan"],
    ),
];

/// ICT-literacy categories in priority order: literacy signals win over
/// technical-issue language.
const ICT_LEXICON: &[(&str, &[&str])] = &[
    (
        "Low ICT literacy",
        &[
            "bingung",
            "cara pakai",
            "tidak paham",
            "tidak mengerti",
            "gaptek",
            "susah dipakai",
            "ribet",
        ],
    ),
    (
        "Medium ICT literacy",
        &["lumayan mudah", "cukup mudah", "biasa saja", "masih belajar"],
    ),
    (
        "High ICT literacy",
        &[
            "clear cache",
            "reinstall",
            "sudah coba",
            "restart",
            "uninstall",
            "update aplikasi",
        ],
    ),
    (
        "Technical issue (not ICT literacy)",
        &[
            "error",
            "bug",
            "server",
            "crash",
            "force close",
            "gagal login",
            "tidak bisa dibuka",
        ],
    ),
];

const ICT_DEFAULT: &str = "Medium ICT literacy";

/// Emotional-tone lexicon. "neutral" carries no keywords and is reachable
/// only through the table's fallback.
const EMOTION_LEXICON: &[(&str, &[&str])] = &[
    (
        "frustration",
        &["frustrasi", "frustasi", "menyerah", "capek", "putus asa"],
    ),
    (
        "confusion",
        &["bingung", "tidak paham", "tidak jelas", "tidak mengerti"],
    ),
    ("annoyance", &["kesal", "jengkel", "sebal", "mengganggu"]),
    (
        "overwhelmed",
        &["kewalahan", "terlalu banyak", "keteteran", "tidak sanggup"],
    ),
    ("stress", &["stres", "stress", "pusing", "tertekan"]),
    (
        "satisfaction",
        &["puas", "bagus", "mantap", "membantu", "keren"],
    ),
    ("neutral", &[]),
];

const EMOTION_FALLBACK: &str = "neutral";
