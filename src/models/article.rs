//! Article record extracted from a technology page.

use serde::{Deserialize, Serialize};

/// Structured fields of one showcase article.
///
/// Every field has a value: markup that is missing on the page shows up as an
/// empty string or an empty list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    #[serde(rename = "titulo")]
    pub title: String,

    #[serde(rename = "descricao")]
    pub description: String,

    #[serde(rename = "beneficios")]
    pub benefits: Vec<String>,

    pub status: String,

    /// Technology readiness level
    #[serde(rename = "trl")]
    pub technology_readiness_level: String,

    #[serde(rename = "lista_de_inventores")]
    pub inventors: Vec<String>,

    #[serde(rename = "departamento")]
    pub department: String,

    #[serde(rename = "fone")]
    pub phone: String,

    /// Raw `href` of the department contact link
    #[serde(rename = "contato_departamento")]
    pub department_contact_href: String,

    pub email: String,

    /// URL the article was fetched from
    pub url: String,
}
