//! Link records produced by the discovery and listing stages.

use serde::{Deserialize, Serialize};

/// A link to a category or article page.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkItem {
    /// Visible anchor text
    #[serde(rename = "titulo")]
    pub title: String,

    /// Absolute URL of the linked page
    pub url: String,

    /// Card summary (not collected by the current flow)
    #[serde(rename = "resumo", default)]
    pub summary: String,

    /// Page the link was found on
    #[serde(rename = "lista_origem")]
    pub source_list_url: String,
}

impl LinkItem {
    /// Create a link item found on `source_list_url`.
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        source_list_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            summary: String::new(),
            source_list_url: source_list_url.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_portuguese_keys() {
        let item = LinkItem::new(
            "TI",
            "https://example.com/ti/",
            "https://example.com/",
        );
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["titulo"], "TI");
        assert_eq!(value["resumo"], "");
        assert_eq!(value["lista_origem"], "https://example.com/");
    }
}
