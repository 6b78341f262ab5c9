//! XML preprocessing before record extraction

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

/// Remove inline formatting tags such as `<i>`, `<sup>` and `<sub>`
///
/// Titles like `Role of <i>SUFU</i> in ...` would otherwise reach the
/// deserializer as mixed content and lose everything after the first tag.
pub(crate) fn strip_inline_html_tags(xml: &str) -> String {
    static INLINE_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
    let re = INLINE_TAG_REGEX.get_or_init(|| {
        Regex::new(r"</?(?:i|b|u|sup|sub|em|strong|italic|bold)>")
            .expect("inline tag pattern is valid")
    });

    let cleaned = re.replace_all(xml, "");
    if cleaned.len() != xml.len() {
        debug!(
            removed_bytes = xml.len() - cleaned.len(),
            "Stripped inline formatting tags"
        );
    }

    cleaned.into_owned()
}
