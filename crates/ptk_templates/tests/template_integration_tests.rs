//! Integration tests for the data-to-template pipeline.

use std::fs;
use std::path::Path;

use ptk_templates::{
    load_document, DataSource, Document, RenderContext, TemplateError, TemplateRenderer,
};
use tempfile::tempdir;

fn write(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    format!("file://{}", path.display())
}

fn load_all(descriptors: &[&str]) -> RenderContext {
    let documents: Vec<Document> = descriptors
        .iter()
        .map(|d| load_document(d).unwrap())
        .collect();
    RenderContext::from_documents(&documents)
}

/// Files, inline YAML and inline JSON combine into one context.
#[test]
fn test_mixed_sources_render() {
    let dir = tempdir().unwrap();
    let defaults = write(
        dir.path(),
        "defaults.yaml",
        "service:\n  name: api\n  replicas: 2\nregion: eu-west-1\n",
    );

    let context = load_all(&[
        "yaml://service: {replicas: 5, image: 'api:1.4'}",
        defaults.as_str(),
        r#"json://{"region": "us-east-1", "labels": ["web", "public"]}"#,
    ]);

    let template = "\
name: {{ service.name }}
image: {{ service.image }}
replicas: {{ service.replicas }}
region: {{ region }}
labels:{% for l in labels %} {{ l }}{% endfor %}
";
    let rendered = TemplateRenderer::new().render(template, &context).unwrap();

    assert_eq!(
        rendered,
        "\
name: api
image: api:1.4
replicas: 5
region: eu-west-1
labels: web public
"
    );
}

/// The first descriptor that sets a leaf decides its value.
#[test]
fn test_descriptor_order_sets_precedence() {
    let first = load_all(&["yaml://env: prod", "yaml://env: dev"]);
    let second = load_all(&["yaml://env: dev", "yaml://env: prod"]);

    let renderer = TemplateRenderer::new();
    assert_eq!(renderer.render("{{ env }}", &first).unwrap(), "prod");
    assert_eq!(renderer.render("{{ env }}", &second).unwrap(), "dev");
}

#[test]
fn test_render_template_file_with_secret_encoding() {
    let dir = tempdir().unwrap();
    let template_path = dir.path().join("secret.yaml.tpl");
    fs::write(
        &template_path,
        "apiVersion: v1\nkind: Secret\ndata:\n  password: {{ db.password | base64encode }}\n",
    )
    .unwrap();

    let context = load_all(&["yaml://db: {password: abc}"]);
    let rendered = TemplateRenderer::new()
        .render_file(&template_path, &context)
        .unwrap();

    assert!(rendered.ends_with("  password: YWJj\n"));
}

#[test]
fn test_error_kinds() {
    let dir = tempdir().unwrap();

    let missing = format!("file://{}", dir.path().join("nope.yaml").display());
    assert!(load_document(&missing).unwrap_err().is_io());

    assert!(load_document("yaml://{invalid").unwrap_err().is_parse());
    assert!(load_document("toml://a = 1").unwrap_err().is_parse());

    let err = TemplateRenderer::new()
        .render("{% for %}", &RenderContext::new())
        .unwrap_err();
    assert!(matches!(err, TemplateError::Syntax(_)));
    assert!(err.is_template());
}

#[test]
fn test_data_source_display_round_trips_files() {
    let source = DataSource::parse("file://values/prod.yaml").unwrap();
    assert_eq!(source.to_string(), "file://values/prod.yaml");
}
