// src/models/selectors.rs

//! Selector configuration for the showcase markup.
//!
//! Every query is a CSS selector with optional text predicates. The text
//! predicates match against the full text of the selected element, which lets
//! the configuration express "the `p.eael-team-text` that mentions Fone"
//! without relying on non-standard pseudo-classes.

use serde::{Deserialize, Serialize};

/// A CSS selector plus optional text predicates.
///
/// In TOML a query is either a plain string (`"div.content h1"`) or a table
/// (`{ css = "p.eael-team-text", contains = ["Fone"] }`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "QuerySpecRepr")]
pub struct QuerySpec {
    /// CSS selector (selector lists are allowed)
    pub css: String,

    /// Keep only elements whose text contains at least one of these
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub contains: Vec<String>,

    /// Drop elements whose text contains any of these
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub excludes: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuerySpecRepr {
    Css(String),
    Full {
        css: String,
        #[serde(default)]
        contains: Vec<String>,
        #[serde(default)]
        excludes: Vec<String>,
    },
}

impl From<QuerySpecRepr> for QuerySpec {
    fn from(repr: QuerySpecRepr) -> Self {
        match repr {
            QuerySpecRepr::Css(css) => Self::css(css),
            QuerySpecRepr::Full {
                css,
                contains,
                excludes,
            } => Self {
                css,
                contains,
                excludes,
            },
        }
    }
}

impl QuerySpec {
    /// A query with no text predicates.
    pub fn css(css: impl Into<String>) -> Self {
        Self {
            css: css.into(),
            ..Self::default()
        }
    }

    /// Require the element text to contain one of `needles`.
    pub fn containing(mut self, needles: &[&str]) -> Self {
        self.contains = needles.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Reject elements whose text contains any of `needles`.
    pub fn excluding(mut self, needles: &[&str]) -> Self {
        self.excludes = needles.iter().map(|s| s.to_string()).collect();
        self
    }
}

/// Selectors for the three crawl stages.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectorConfig {
    /// Category anchors on the showcase front page
    #[serde(default = "defaults::category_link")]
    pub category_link: QuerySpec,

    /// Article-card anchors on a category listing page
    #[serde(default = "defaults::listing_card_link")]
    pub listing_card_link: QuerySpec,

    /// "Next page" anchor on a listing page
    #[serde(default = "defaults::next_page")]
    pub next_page: QuerySpec,

    /// Article page fields
    #[serde(default)]
    pub article: ArticleSelectors,

    /// Label prefixes stripped from article text fields
    #[serde(default)]
    pub labels: LabelConfig,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            category_link: defaults::category_link(),
            listing_card_link: defaults::listing_card_link(),
            next_page: defaults::next_page(),
            article: ArticleSelectors::default(),
            labels: LabelConfig::default(),
        }
    }
}

/// One query per article field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArticleSelectors {
    /// Required; pages without it are not articles
    #[serde(default = "defaults::title")]
    pub title: QuerySpec,
    #[serde(default = "defaults::description")]
    pub description: QuerySpec,
    #[serde(default = "defaults::benefits")]
    pub benefits: QuerySpec,
    #[serde(default = "defaults::status")]
    pub status: QuerySpec,
    #[serde(default = "defaults::trl")]
    pub trl: QuerySpec,
    #[serde(default = "defaults::inventors")]
    pub inventors: QuerySpec,
    #[serde(default = "defaults::department")]
    pub department: QuerySpec,
    #[serde(default = "defaults::phone")]
    pub phone: QuerySpec,
    #[serde(default = "defaults::department_contact")]
    pub department_contact: QuerySpec,

    /// Attribute read from the department contact element
    #[serde(default = "defaults::contact_attr")]
    pub contact_attr: String,

    #[serde(default = "defaults::email")]
    pub email: QuerySpec,
}

impl Default for ArticleSelectors {
    fn default() -> Self {
        Self {
            title: defaults::title(),
            description: defaults::description(),
            benefits: defaults::benefits(),
            status: defaults::status(),
            trl: defaults::trl(),
            inventors: defaults::inventors(),
            department: defaults::department(),
            phone: defaults::phone(),
            department_contact: defaults::department_contact(),
            contact_attr: defaults::contact_attr(),
            email: defaults::email(),
        }
    }
}

impl ArticleSelectors {
    /// All queries with the field name they belong to.
    pub fn named(&self) -> [(&'static str, &QuerySpec); 10] {
        [
            ("title", &self.title),
            ("description", &self.description),
            ("benefits", &self.benefits),
            ("status", &self.status),
            ("trl", &self.trl),
            ("inventors", &self.inventors),
            ("department", &self.department),
            ("phone", &self.phone),
            ("department_contact", &self.department_contact),
            ("email", &self.email),
        ]
    }
}

/// Literal label prefixes removed from field text before trimming.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig {
    #[serde(default = "defaults::status_labels")]
    pub status: Vec<String>,
    #[serde(default = "defaults::trl_labels")]
    pub trl: Vec<String>,
    #[serde(default = "defaults::department_labels")]
    pub department: Vec<String>,
    #[serde(default = "defaults::phone_labels")]
    pub phone: Vec<String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            status: defaults::status_labels(),
            trl: defaults::trl_labels(),
            department: defaults::department_labels(),
            phone: defaults::phone_labels(),
        }
    }
}

mod defaults {
    use super::QuerySpec;

    // Stage selectors
    pub fn category_link() -> QuerySpec {
        QuerySpec::css("h5.fg-item-title a[href], .fg-item-title a[href]")
    }
    pub fn listing_card_link() -> QuerySpec {
        QuerySpec::css("div.post.postcard a[href], .post.postcard a[href]")
    }
    pub fn next_page() -> QuerySpec {
        QuerySpec::css("a.next.page-numbers[href]")
    }

    // Article selectors
    pub fn title() -> QuerySpec {
        QuerySpec::css("div.content h1")
    }
    pub fn description() -> QuerySpec {
        QuerySpec::css("div.elementor-widget-container p")
    }
    pub fn benefits() -> QuerySpec {
        QuerySpec::css("h4.elementor-icon-box-title span").excluding(&["Status"])
    }
    pub fn status() -> QuerySpec {
        QuerySpec::css("h4.elementor-icon-box-title span").containing(&["Status"])
    }
    pub fn trl() -> QuerySpec {
        QuerySpec::css("div.elementor-icon-box-title span")
    }
    pub fn inventors() -> QuerySpec {
        QuerySpec::css("div.eael-team-content p")
    }
    pub fn department() -> QuerySpec {
        QuerySpec::css("p.eael-team-text").containing(&["Departamento", "Campus"])
    }
    pub fn phone() -> QuerySpec {
        QuerySpec::css("p.eael-team-text").containing(&["Fone"])
    }
    pub fn department_contact() -> QuerySpec {
        QuerySpec::css("p.eael-team-text a[href]")
    }
    pub fn contact_attr() -> String {
        "href".into()
    }
    pub fn email() -> QuerySpec {
        QuerySpec::css("p.eael-team-text").containing(&["@"])
    }

    // Label prefixes
    pub fn status_labels() -> Vec<String> {
        vec!["Status:".into()]
    }
    pub fn trl_labels() -> Vec<String> {
        vec!["TRL:".into()]
    }
    pub fn department_labels() -> Vec<String> {
        vec!["Departamento:".into(), "Campus:".into()]
    }
    pub fn phone_labels() -> Vec<String> {
        vec!["Fone:".into()]
    }
}
