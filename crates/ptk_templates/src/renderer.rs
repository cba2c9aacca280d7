//! Template rendering.

use std::path::Path;

use minijinja::{AutoEscape, Environment, UndefinedBehavior, Value};
use tracing::debug;

use crate::context::RenderContext;
use crate::error::{TemplateError, TemplateResult};
use crate::filters;
use crate::loader::read_bytes;

const INLINE_TEMPLATE_NAME: &str = "<string>";

/// Template renderer.
///
/// Every render builds its own environment with the custom filters
/// registered on it, so nothing is shared between renders.
#[derive(Debug, Clone, Default)]
pub struct TemplateRenderer {
    strict: bool,
}

impl TemplateRenderer {
    /// Create a renderer where undefined values render as empty strings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make lookups of undefined values fail the render.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    fn environment<'source>(&self) -> Environment<'source> {
        let mut env = Environment::new();

        env.set_undefined_behavior(if self.strict {
            UndefinedBehavior::Strict
        } else {
            UndefinedBehavior::Chainable
        });
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.add_filter("base64encode", filters::base64encode);

        env
    }

    /// Render template source against a context.
    pub fn render(&self, source: &str, context: &RenderContext) -> TemplateResult<String> {
        self.render_named(INLINE_TEMPLATE_NAME, source, context)
    }

    /// Render template source, naming it in error messages.
    pub fn render_named(
        &self,
        name: &str,
        source: &str,
        context: &RenderContext,
    ) -> TemplateResult<String> {
        let mut env = self.environment();
        env.add_template(name, source)?;
        let template = env.get_template(name)?;

        debug!(
            "Rendering template {} with {} top-level keys",
            name,
            context.len()
        );
        let rendered = template.render(Value::from_serialize(context))?;
        Ok(rendered)
    }

    /// Read a template file and render it.
    pub fn render_file(&self, path: &Path, context: &RenderContext) -> TemplateResult<String> {
        let source = read_template(path)?;
        let name = path.display().to_string();
        self.render_named(&name, &source, context)
    }
}

/// Read a template file. Contents that are not UTF-8 are a template error.
pub fn read_template(path: &Path) -> TemplateResult<String> {
    let bytes = read_bytes(path)?;
    String::from_utf8(bytes).map_err(|e| {
        TemplateError::Syntax(format!("{} is not valid UTF-8: {}", path.display(), e))
    })
}

/// Render template source with a default renderer.
pub fn render_template(source: &str, context: &RenderContext) -> TemplateResult<String> {
    TemplateRenderer::new().render(source, context)
}
