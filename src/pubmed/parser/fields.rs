//! Field table: where each single-valued field lives and what replaces it
//! when it is absent

use super::xml_types::{PubmedArticleXml, TextElement};

/// Single-valued fields of a [`crate::Record`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Pmid,
    Title,
    Journal,
    Year,
    Pages,
}

/// `(field, path relative to <PubmedArticle>, fallback text)`, in variant order
pub static FIELD_TABLE: [(Field, &str, &str); 5] = [
    (Field::Pmid, "MedlineCitation/PMID", "N/A"),
    (
        Field::Title,
        "MedlineCitation/Article/ArticleTitle",
        "No title",
    ),
    (
        Field::Journal,
        "MedlineCitation/Article/Journal/Title",
        "No journal",
    ),
    (
        Field::Year,
        "MedlineCitation/Article/Journal/JournalIssue/PubDate/Year",
        "Unknown",
    ),
    (
        Field::Pages,
        "MedlineCitation/Article/Pagination/MedlinePgn",
        "N/A",
    ),
];

impl Field {
    fn entry(self) -> &'static (Field, &'static str, &'static str) {
        &FIELD_TABLE[self as usize]
    }

    /// Element path relative to `<PubmedArticle>`
    pub fn path(self) -> &'static str {
        self.entry().1
    }

    /// Text substituted when the element is missing or empty
    pub fn fallback(self) -> &'static str {
        self.entry().2
    }

    pub(super) fn lookup(self, article: &PubmedArticleXml) -> Option<&str> {
        let element = match self {
            Field::Pmid => article.medline_citation.as_ref()?.pmid.as_ref(),
            Field::Title => article.article()?.article_title.as_ref(),
            Field::Journal => article.article()?.journal.as_ref()?.title.as_ref(),
            Field::Year => article
                .article()?
                .journal
                .as_ref()?
                .journal_issue
                .as_ref()?
                .pub_date
                .as_ref()?
                .year
                .as_ref(),
            Field::Pages => article.article()?.pagination.as_ref()?.medline_pgn.as_ref(),
        };
        element.and_then(TextElement::text)
    }

    /// Value of the field in `article`, or its fallback
    pub(super) fn resolve(self, article: &PubmedArticleXml) -> String {
        resolve_or_fallback(self, self.lookup(article))
    }
}

/// Map an optional lookup result to its final text
pub fn resolve_or_fallback(field: Field, value: Option<&str>) -> String {
    value.unwrap_or_else(|| field.fallback()).to_string()
}
