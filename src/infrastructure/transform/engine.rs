//! Tera-backed stylesheet engine for schema documentation.

use async_trait::async_trait;
use std::path::Path;
use tera::Tera;

use crate::generation::{GenerationError, TransformEngine};
use crate::infrastructure::transform::parse_document;

/// Renders one document through one stylesheet.
///
/// The stylesheet is a tera template; the parsed document tree is exposed
/// to it as `doc` and the document's file name as `source_file`. The
/// engine holds no state, so identical inputs always render identically.
pub struct TeraTransformEngine;

impl TeraTransformEngine {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TeraTransformEngine {
    fn default() -> Self {
        Self::new()
    }
}

const STYLESHEET_TEMPLATE: &str = "stylesheet";

#[async_trait]
impl TransformEngine for TeraTransformEngine {
    async fn render(
        &self,
        stylesheet: &Path,
        document: &Path,
    ) -> Result<String, GenerationError> {
        let template = tokio::fs::read_to_string(stylesheet).await.map_err(|e| {
            GenerationError::transform(
                document,
                format!("reading stylesheet `{}`: {e}", stylesheet.display()),
            )
        })?;
        let source = tokio::fs::read_to_string(document)
            .await
            .map_err(|e| GenerationError::transform(document, format!("reading document: {e}")))?;

        let doc = parse_document(&source)
            .map_err(|reason| GenerationError::transform(document, reason))?;

        let mut tera = Tera::default();
        tera.add_raw_template(STYLESHEET_TEMPLATE, &template)
            .map_err(|e| {
                GenerationError::transform(
                    document,
                    format!("stylesheet `{}`: {e}", stylesheet.display()),
                )
            })?;

        let mut context = tera::Context::new();
        context.insert("doc", &doc);
        context.insert(
            "source_file",
            &document
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default(),
        );

        tera.render(STYLESHEET_TEMPLATE, &context)
            .map_err(|e| GenerationError::transform(document, format!("rendering: {e}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn render_fixture(stylesheet: &str, document: &str) -> Result<String, GenerationError> {
        let dir = tempfile::tempdir().unwrap();
        let stylesheet_path = dir.path().join("page.html.tera");
        let document_path = dir.path().join("model.xsd");
        std::fs::write(&stylesheet_path, stylesheet).unwrap();
        std::fs::write(&document_path, document).unwrap();

        TeraTransformEngine::new()
            .render(&stylesheet_path, &document_path)
            .await
    }

    #[tokio::test]
    async fn test_render_exposes_doc_and_source_file() {
        let page = render_fixture(
            "<h1>{{ source_file }}</h1><p>{{ doc.name }}</p>",
            r#"<xs:schema targetNamespace="urn:test"/>"#,
        )
        .await
        .unwrap();

        assert_eq!(page, "<h1>model.xsd</h1><p>xs:schema</p>");
    }

    #[tokio::test]
    async fn test_render_walks_children() {
        let page = render_fixture(
            "{% for child in doc.children %}{{ child.attributes.name }};{% endfor %}",
            r#"<s><e name="A"/><e name="B"/></s>"#,
        )
        .await
        .unwrap();

        assert_eq!(page, "A;B;");
    }

    #[tokio::test]
    async fn test_render_is_deterministic() {
        let stylesheet = "{{ doc.name }}:{% for c in doc.children %}{{ c.name }}{% endfor %}";
        let document = r#"<root a="1"><x/><y/></root>"#;

        let first = render_fixture(stylesheet, document).await.unwrap();
        let second = render_fixture(stylesheet, document).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_malformed_document_names_the_input() {
        let error = render_fixture("{{ doc.name }}", "<broken")
            .await
            .unwrap_err();

        match error {
            GenerationError::TransformFailure { input, .. } => {
                assert!(input.ends_with("model.xsd"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_stylesheet_fails() {
        let error = render_fixture("{% for x in %}", "<fine/>").await.unwrap_err();
        assert!(matches!(error, GenerationError::TransformFailure { .. }));
    }
}
