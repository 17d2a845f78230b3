//! Data model shared by the extractor, rule engine, scorer and callers.

use serde::Serialize;
use strum_macros::EnumIter as EnumIterMacro;

/// Structural facts extracted from one page at fetch time.
///
/// Text fields are `None` when the element (or attribute) is absent, which is
/// distinct from present-but-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructuralSignals {
    /// Trimmed text of the first `<title>`, `None` if missing or blank.
    pub title: Option<String>,
    /// `content` of `<meta name="description">`.
    pub description: Option<String>,
    /// Number of `<h1>` elements.
    pub heading_count: usize,
    /// `content` of `<meta name="viewport">`.
    pub viewport: Option<String>,
    /// Number of `<img>` elements.
    pub image_count: usize,
    /// Number of `<img>` elements carrying an `alt` attribute (empty counts).
    pub images_with_alt_count: usize,
    /// `<video>` elements plus YouTube/Vimeo iframes.
    pub media_embed_count: usize,
}

/// Independent rule-evaluation partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum Category {
    /// Search visibility: title, description, headings.
    Seo,
    /// Paid search vertical inferred from title and description.
    Ppc,
    /// Video content.
    Creative,
    /// Mobile readiness and image accessibility.
    Tech,
}

impl Category {
    /// Payload key for the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Seo => "seo",
            Category::Ppc => "ppc",
            Category::Creative => "creative",
            Category::Tech => "tech",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered insight strings per category. The first entry is the primary one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InsightSet {
    /// Title, description and heading findings.
    pub seo: Vec<String>,
    /// Exactly one vertical finding.
    pub ppc: Vec<String>,
    /// Exactly one video finding.
    pub creative: Vec<String>,
    /// Viewport finding, then the ALT text finding if any.
    pub tech: Vec<String>,
}

impl InsightSet {
    /// Insights for `category`.
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Seo => &self.seo,
            Category::Ppc => &self.ppc,
            Category::Creative => &self.creative,
            Category::Tech => &self.tech,
        }
    }

    pub(crate) fn set(&mut self, category: Category, insights: Vec<String>) {
        match category {
            Category::Seo => self.seo = insights,
            Category::Ppc => self.ppc = insights,
            Category::Creative => self.creative = insights,
            Category::Tech => self.tech = insights,
        }
    }
}

/// Exactly one recommended action per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ActionSet {
    /// Search visibility action.
    pub seo: String,
    /// Paid search action.
    pub ppc: String,
    /// Content action.
    pub creative: String,
    /// Technical action.
    pub tech: String,
}

impl ActionSet {
    /// Action for `category`.
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Seo => &self.seo,
            Category::Ppc => &self.ppc,
            Category::Creative => &self.creative,
            Category::Tech => &self.tech,
        }
    }

    pub(crate) fn set(&mut self, category: Category, action: String) {
        match category {
            Category::Seo => self.seo = action,
            Category::Ppc => self.ppc = action,
            Category::Creative => self.creative = action,
            Category::Tech => self.tech = action,
        }
    }
}

/// Result of analyzing one page.
///
/// Serializes to the success payload:
/// `{ seo, ppc, creative, tech, actions, score, improvement }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisResult {
    /// Insights, serialized as the top-level category keys.
    #[serde(flatten)]
    pub insights: InsightSet,
    /// One action per category.
    pub actions: ActionSet,
    /// Health score, 0 to 100.
    pub score: u32,
    /// Capped headroom, 0 to 20.
    pub improvement: u32,
}

impl AnalysisResult {
    /// First insight for a category, which is what presentation layers display.
    pub fn primary_insight(&self, category: Category) -> Option<&str> {
        self.insights.get(category).first().map(String::as_str)
    }
}
