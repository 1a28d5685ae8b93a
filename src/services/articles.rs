// src/services/articles.rs

//! Article extraction service.
//!
//! Fetches a technology page and reads the showcase field schema from it.

use std::sync::Arc;

use scraper::Html;

use crate::error::Result;
use crate::models::{ArticleRecord, LabelConfig, LinkItem, SelectorConfig};
use crate::services::markup::{self, Query};
use crate::utils::http::Fetcher;
use crate::utils::strip_labels;

/// Compiled article field queries.
pub struct ArticleTemplate {
    title: Query,
    description: Query,
    benefits: Query,
    status: Query,
    trl: Query,
    inventors: Query,
    department: Query,
    phone: Query,
    department_contact: Query,
    contact_attr: String,
    email: Query,
    labels: LabelConfig,
}

impl ArticleTemplate {
    /// Compile every article query.
    pub fn compile(selectors: &SelectorConfig) -> Result<Self> {
        let article = &selectors.article;
        Ok(Self {
            title: Query::compile(&article.title)?,
            description: Query::compile(&article.description)?,
            benefits: Query::compile(&article.benefits)?,
            status: Query::compile(&article.status)?,
            trl: Query::compile(&article.trl)?,
            inventors: Query::compile(&article.inventors)?,
            department: Query::compile(&article.department)?,
            phone: Query::compile(&article.phone)?,
            department_contact: Query::compile(&article.department_contact)?,
            contact_attr: article.contact_attr.clone(),
            email: Query::compile(&article.email)?,
            labels: selectors.labels.clone(),
        })
    }

    /// Read an article from a parsed page.
    ///
    /// Returns `None` when the page has no title node. Every other field is
    /// read on its own and falls back to an empty value.
    pub fn parse(&self, document: &Html, url: &str) -> Option<ArticleRecord> {
        let title = self.title.select_one(document)?;

        Some(ArticleRecord {
            title: markup::text(title),
            description: all_texts(&self.description, document).join(" "),
            benefits: all_texts(&self.benefits, document),
            status: labeled_text(&self.status, document, &self.labels.status),
            technology_readiness_level: labeled_text(&self.trl, document, &self.labels.trl),
            inventors: all_texts(&self.inventors, document),
            department: labeled_text(&self.department, document, &self.labels.department),
            phone: labeled_text(&self.phone, document, &self.labels.phone),
            department_contact_href: self
                .department_contact
                .select_one(document)
                .and_then(|node| markup::attr(node, &self.contact_attr))
                .map(str::to_string)
                .unwrap_or_default(),
            email: labeled_text(&self.email, document, &[]),
            url: url.to_string(),
        })
    }
}

fn all_texts(query: &Query, document: &Html) -> Vec<String> {
    query.select(document).map(markup::text).collect()
}

fn labeled_text(query: &Query, document: &Html, labels: &[String]) -> String {
    query
        .select_one(document)
        .map(|node| strip_labels(&markup::text(node), labels))
        .unwrap_or_default()
}

/// Service for extracting article records.
pub struct ArticleExtractor {
    fetcher: Arc<dyn Fetcher>,
    template: ArticleTemplate,
    show_progress: bool,
}

impl ArticleExtractor {
    pub fn new(fetcher: Arc<dyn Fetcher>, selectors: &SelectorConfig) -> Result<Self> {
        Ok(Self {
            fetcher,
            template: ArticleTemplate::compile(selectors)?,
            show_progress: true,
        })
    }

    /// Toggle per-article progress lines.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    pub fn show_progress(&self) -> bool {
        self.show_progress
    }

    /// Fetch and read one article.
    ///
    /// `Ok(None)` means the page was fetched but is not an article page.
    pub async fn extract(&self, item: &LinkItem) -> Result<Option<ArticleRecord>> {
        let body = self.fetcher.fetch(&item.url).await?;
        Ok(self.read(&body, &item.url))
    }

    fn read(&self, body: &str, url: &str) -> Option<ArticleRecord> {
        let document = Html::parse_document(body);
        self.template.parse(&document, url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::http::testing::StaticFetcher;

    const ARTICLE_URL: &str = "https://example.com/tec/sensor/";

    const FULL_ARTICLE: &str = r#"
        <html><body>
          <div class="content"><h1> Sensor óptico de baixo custo </h1></div>
          <div class="elementor-widget-container"><p>Primeiro parágrafo.</p></div>
          <div class="elementor-widget-container"><p>Segundo <em>parágrafo</em>.</p></div>
          <h4 class="elementor-icon-box-title"><span>Baixo custo</span></h4>
          <h4 class="elementor-icon-box-title"><span>Status: Patente concedida</span></h4>
          <h4 class="elementor-icon-box-title"><span>Portátil</span></h4>
          <div class="elementor-icon-box-title"><span>TRL: 4</span></div>
          <div class="eael-team-content"><p>Maria Silva</p><p>João Souza</p></div>
          <p class="eael-team-text">Departamento: Engenharia Elétrica</p>
          <p class="eael-team-text">Fone: (85) 3366-9999</p>
          <p class="eael-team-text"><a href="https://dee.ufc.br">Contato</a></p>
          <p class="eael-team-text"> inova@ufc.br </p>
        </body></html>
    "#;

    fn template() -> ArticleTemplate {
        ArticleTemplate::compile(&SelectorConfig::default()).unwrap()
    }

    fn parse(body: &str) -> Option<ArticleRecord> {
        template().parse(&Html::parse_document(body), ARTICLE_URL)
    }

    #[test]
    fn reads_every_field() {
        let record = parse(FULL_ARTICLE).unwrap();

        assert_eq!(record.title, "Sensor óptico de baixo custo");
        assert_eq!(record.description, "Primeiro parágrafo. Segundoparágrafo.");
        assert_eq!(record.benefits, vec!["Baixo custo", "Portátil"]);
        assert_eq!(record.status, "Patente concedida");
        assert_eq!(record.technology_readiness_level, "4");
        assert_eq!(record.inventors, vec!["Maria Silva", "João Souza"]);
        assert_eq!(record.department, "Engenharia Elétrica");
        assert_eq!(record.phone, "(85) 3366-9999");
        assert_eq!(record.department_contact_href, "https://dee.ufc.br");
        assert_eq!(record.email, "inova@ufc.br");
        assert_eq!(record.url, ARTICLE_URL);
    }

    #[test]
    fn missing_department_is_empty_not_dropped() {
        let body = FULL_ARTICLE.replace(
            r#"<p class="eael-team-text">Departamento: Engenharia Elétrica</p>"#,
            "",
        );
        let record = parse(&body).unwrap();

        assert_eq!(record.department, "");
        assert_eq!(record.title, "Sensor óptico de baixo custo");
        assert_eq!(record.phone, "(85) 3366-9999");
    }

    #[test]
    fn campus_label_counts_as_department() {
        let body = FULL_ARTICLE.replace("Departamento: Engenharia Elétrica", "Campus: Sobral");
        assert_eq!(parse(&body).unwrap().department, "Sobral");
    }

    #[test]
    fn page_without_title_is_skipped() {
        let body = FULL_ARTICLE.replace(
            r#"<div class="content"><h1> Sensor óptico de baixo custo </h1></div>"#,
            "",
        );
        assert!(parse(&body).is_none());
    }

    #[test]
    fn title_only_page_has_empty_defaults() {
        let record = parse(r#"<div class="content"><h1>Só título</h1></div>"#).unwrap();

        assert_eq!(
            record,
            ArticleRecord {
                title: "Só título".to_string(),
                url: ARTICLE_URL.to_string(),
                ..ArticleRecord::default()
            }
        );
    }

    #[tokio::test]
    async fn extract_fetches_item_url() {
        let fetcher = Arc::new(StaticFetcher::new().page(ARTICLE_URL, FULL_ARTICLE));
        let extractor = ArticleExtractor::new(fetcher.clone(), &SelectorConfig::default()).unwrap();
        let item = LinkItem::new("Sensor", ARTICLE_URL, "https://example.com/cat/ti/");

        let record = extractor.extract(&item).await.unwrap().unwrap();
        assert_eq!(record.url, ARTICLE_URL);
        assert_eq!(fetcher.requests(), vec![ARTICLE_URL.to_string()]);
    }

    #[test]
    fn progress_lines_follow_the_flag() {
        let fetcher = Arc::new(StaticFetcher::new());
        let extractor = ArticleExtractor::new(fetcher, &SelectorConfig::default()).unwrap();
        assert!(extractor.show_progress());
        assert!(!extractor.with_progress(false).show_progress());
    }

    #[tokio::test]
    async fn extract_propagates_fetch_errors() {
        let extractor =
            ArticleExtractor::new(Arc::new(StaticFetcher::new()), &SelectorConfig::default())
                .unwrap();
        let item = LinkItem::new("Gone", ARTICLE_URL, "https://example.com/cat/ti/");

        assert!(extractor.extract(&item).await.unwrap_err().is_fetch());
    }
}
