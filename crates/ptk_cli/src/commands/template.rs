//! Template command - Render a template against merged data sources.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use ptk_templates::{read_template, DataSource, RenderContext, TemplateRenderer};

const STDOUT_MARKER: &str = "-";

#[derive(Args)]
pub struct TemplateArgs {
    /// Template file to render
    template: PathBuf,

    /// Data source to merge into the context: file://PATH, yaml://DOCUMENT or
    /// json://DOCUMENT. Repeatable; the first source to set a value wins.
    #[arg(long = "data", value_name = "DESCRIPTOR")]
    data: Vec<String>,

    /// Fail on undefined variables instead of rendering them empty
    #[arg(long, env = "PTK_STRICT")]
    strict: bool,

    /// Write the result to FILE instead of standard output
    #[arg(short, long, value_name = "FILE", default_value = STDOUT_MARKER)]
    output: PathBuf,
}

pub fn execute(args: TemplateArgs) -> Result<()> {
    info!("Rendering template {:?}", args.template);

    // The template is read before any data source is touched.
    let template_source = read_template(&args.template).context("Could not read template")?;

    let mut context = RenderContext::new();
    for descriptor in &args.data {
        let source = DataSource::parse(descriptor)?;
        let document = source
            .load()
            .with_context(|| format!("Could not load data from {}", source))?;
        context.merge(&document);
    }
    debug!(
        "Merged {} data sources into {} top-level keys",
        args.data.len(),
        context.len()
    );

    let name = args.template.display().to_string();
    let rendered = TemplateRenderer::new()
        .strict(args.strict)
        .render_named(&name, &template_source, &context)
        .context("Could not render template")?;

    write_output(&args.output, &rendered)
}

/// Output is only written once rendering has fully succeeded.
fn write_output(target: &Path, rendered: &str) -> Result<()> {
    if target == Path::new(STDOUT_MARKER) {
        let mut out = io::stdout().lock();
        out.write_all(rendered.as_bytes())
            .and_then(|_| out.flush())
            .context("Could not write output")?;
    } else {
        fs::write(target, rendered)
            .with_context(|| format!("Could not write output to {:?}", target))?;
        debug!("Wrote {} bytes to {:?}", rendered.len(), target);
    }

    Ok(())
}
