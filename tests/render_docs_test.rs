//! Integration tests for documentation rendering with the tera engine

use std::path::Path;
use std::sync::Arc;

use schemaforge::generation::{DocTransformer, GenerationError, TransformJob};
use schemaforge::infrastructure::TeraTransformEngine;

const STYLESHEET: &str = "<html><body><h1>{{ source_file }}</h1>\
<ul>{% for child in doc.children %}<li>{{ child.attributes.name }}</li>{% endfor %}</ul>\
</body></html>";

fn setup(dir: &Path) -> TransformJob {
    let input_dir = dir.join("schemas");
    std::fs::create_dir_all(&input_dir).unwrap();
    let stylesheet = dir.join("page.html.tera");
    std::fs::write(&stylesheet, STYLESHEET).unwrap();
    TransformJob {
        input_dir,
        output_dir: dir.join("site"),
        stylesheet,
    }
}

fn transformer() -> DocTransformer {
    DocTransformer::new(Arc::new(TeraTransformEngine::new()))
}

#[tokio::test]
async fn only_schema_documents_are_rendered() {
    let dir = tempfile::tempdir().unwrap();
    let job = setup(dir.path());
    std::fs::write(
        job.input_dir.join("a.xsd"),
        r#"<xs:schema><xs:element name="A"/></xs:schema>"#,
    )
    .unwrap();
    std::fs::write(
        job.input_dir.join("b.xsd"),
        r#"<xs:schema><xs:element name="B"/></xs:schema>"#,
    )
    .unwrap();
    std::fs::write(job.input_dir.join("c.txt"), "not a schema").unwrap();

    let rendered = transformer().transform(&job).await.unwrap();

    assert_eq!(rendered, 2);
    let mut outputs: Vec<String> = std::fs::read_dir(&job.output_dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    outputs.sort();
    assert_eq!(outputs, vec!["a.html", "b.html"]);

    let page = std::fs::read_to_string(job.output_dir.join("a.html")).unwrap();
    assert!(page.contains("<h1>a.xsd</h1>"));
    assert!(page.contains("<li>A</li>"));
}

#[tokio::test]
async fn empty_input_dir_renders_nothing_and_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let job = setup(dir.path());

    let rendered = transformer().transform(&job).await.unwrap();

    assert_eq!(rendered, 0);
    assert_eq!(std::fs::read_dir(&job.output_dir).unwrap().count(), 0);
}

#[tokio::test]
async fn rendering_is_deterministic_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let job = setup(dir.path());
    std::fs::write(
        job.input_dir.join("model.xsd"),
        r#"<xs:schema><xs:element name="Message"/><xs:element name="Evidence"/></xs:schema>"#,
    )
    .unwrap();

    transformer().transform(&job).await.unwrap();
    let first = std::fs::read(job.output_dir.join("model.html")).unwrap();

    transformer().transform(&job).await.unwrap();
    let second = std::fs::read(job.output_dir.join("model.html")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn malformed_input_aborts_but_keeps_earlier_outputs() {
    let dir = tempfile::tempdir().unwrap();
    let job = setup(dir.path());
    // Sorted processing order: a-good renders before b-broken fails.
    std::fs::write(job.input_dir.join("a-good.xsd"), "<xs:schema/>").unwrap();
    std::fs::write(job.input_dir.join("b-broken.xsd"), "<unclosed").unwrap();

    let error = transformer().transform(&job).await.unwrap_err();

    match error {
        GenerationError::TransformFailure { input, .. } => {
            assert!(input.ends_with("b-broken.xsd"));
        }
        other => panic!("unexpected error: {other}"),
    }

    assert!(job.output_dir.join("a-good.html").is_file());
    assert!(!job.output_dir.join("b-broken.html").exists());
}
