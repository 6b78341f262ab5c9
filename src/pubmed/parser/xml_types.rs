//! Internal serde types mirroring the parts of `<PubmedArticle>` we read
//!
//! Every element is optional. Elements we do not model are ignored by serde,
//! so the structs only describe the paths in the field table.

use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::result;

/// An element whose only interesting content is its text
///
/// Attributes (e.g. `PMID/@Version`) are ignored. Mixed content keeps the text
/// of nested markup such as MathML, so `Effect of <mml:mi>x</mml:mi> on Sufu`
/// reads as `Effect of x on Sufu`. An empty element such as `<Year/>` gives
/// `value == None`.
#[derive(Debug, Default)]
pub(super) struct TextElement {
    pub value: Option<String>,
}

impl TextElement {
    pub fn text(&self) -> Option<&str> {
        self.value.as_deref().filter(|v| !v.is_empty())
    }

    fn from_parts<I, S>(parts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = parts
            .into_iter()
            .map(|part| part.as_ref().trim().to_string())
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        Self {
            value: (!joined.is_empty()).then_some(joined),
        }
    }
}

impl<'de> Deserialize<'de> for TextElement {
    fn deserialize<D>(deserializer: D) -> result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct TextElementVisitor;

        impl<'de> Visitor<'de> for TextElementVisitor {
            type Value = TextElement;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("element text content")
            }

            fn visit_str<E>(self, value: &str) -> result::Result<TextElement, E>
            where
                E: de::Error,
            {
                Ok(TextElement::from_parts([value]))
            }

            fn visit_unit<E>(self) -> result::Result<TextElement, E>
            where
                E: de::Error,
            {
                Ok(TextElement::default())
            }

            fn visit_map<M>(self, mut map: M) -> result::Result<TextElement, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut parts = Vec::new();
                while let Some(key) = map.next_key::<String>()? {
                    if key == "$text" || key == "$value" {
                        parts.push(map.next_value::<String>()?);
                    } else if key.starts_with('@') {
                        map.next_value::<IgnoredAny>()?;
                    } else {
                        // Nested markup: keep its text in document order
                        let child: TextElement = map.next_value()?;
                        parts.extend(child.value);
                    }
                }
                Ok(TextElement::from_parts(parts))
            }
        }

        deserializer.deserialize_any(TextElementVisitor)
    }
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PubmedArticleXml {
    #[serde(rename = "MedlineCitation", default)]
    pub medline_citation: Option<MedlineCitationXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct MedlineCitationXml {
    #[serde(rename = "PMID", default)]
    pub pmid: Option<TextElement>,
    #[serde(rename = "Article", default)]
    pub article: Option<ArticleXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct ArticleXml {
    #[serde(rename = "Journal", default)]
    pub journal: Option<JournalXml>,
    #[serde(rename = "ArticleTitle", default)]
    pub article_title: Option<TextElement>,
    #[serde(rename = "Pagination", default)]
    pub pagination: Option<PaginationXml>,
    #[serde(rename = "AuthorList", default)]
    pub author_list: Option<AuthorListXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct JournalXml {
    #[serde(rename = "Title", default)]
    pub title: Option<TextElement>,
    #[serde(rename = "JournalIssue", default)]
    pub journal_issue: Option<JournalIssueXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct JournalIssueXml {
    #[serde(rename = "PubDate", default)]
    pub pub_date: Option<PubDateXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PubDateXml {
    #[serde(rename = "Year", default)]
    pub year: Option<TextElement>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct PaginationXml {
    #[serde(rename = "MedlinePgn", default)]
    pub medline_pgn: Option<TextElement>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AuthorListXml {
    #[serde(rename = "Author", default)]
    pub authors: Vec<AuthorXml>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct AuthorXml {
    #[serde(rename = "ForeName", default)]
    pub fore_name: Option<TextElement>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<TextElement>,
}

impl PubmedArticleXml {
    pub fn article(&self) -> Option<&ArticleXml> {
        self.medline_citation.as_ref()?.article.as_ref()
    }

    /// "First Last" for every author, dropping names that are blank
    pub fn author_names(&self) -> Vec<String> {
        let Some(list) = self.article().and_then(|a| a.author_list.as_ref()) else {
            return Vec::new();
        };

        list.authors
            .iter()
            .filter_map(|author| {
                let first = author.fore_name.as_ref().and_then(TextElement::text);
                let last = author.last_name.as_ref().and_then(TextElement::text);
                let full = format!("{} {}", first.unwrap_or(""), last.unwrap_or(""));
                let full = full.trim();
                (!full.is_empty()).then(|| full.to_string())
            })
            .collect()
    }
}
