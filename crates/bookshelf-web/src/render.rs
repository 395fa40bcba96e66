//! Handlebars template registry and the view seam.
//!
//! Handlers never render HTML themselves; they build a [`View`] naming a
//! registered template and carrying the model attributes, and the engine
//! turns it into a page.

use handlebars::Handlebars;
use serde_json::Value;

/// Logical name of the author list page.
pub const LIST_AUTHORS: &str = "list-authors";
/// Logical name of the single-author page.
pub const LIST_AUTHOR: &str = "list-author";
/// Logical name of the create-author form page.
pub const ADD_AUTHOR: &str = "add-author";
/// Logical name of the update-author form page.
pub const UPDATE_AUTHOR: &str = "update-author";

/// A template name plus the model attributes to render it with.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    /// Logical template name, no file extension, no path.
    pub template: &'static str,
    /// Named attributes handed to the renderer.
    pub model: Value,
}

impl View {
    /// Creates a view for `template` with `model` attributes.
    #[must_use]
    pub fn new(template: &'static str, model: Value) -> Self {
        Self { template, model }
    }
}

/// Handlebars registry with all catalogue templates compiled at startup.
#[derive(Debug)]
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    /// Compiles and registers every page template.
    ///
    /// # Errors
    ///
    /// Returns `handlebars::TemplateError` if a template fails to compile.
    pub fn new() -> Result<Self, handlebars::TemplateError> {
        let mut registry = Handlebars::new();
        registry.register_template_string(
            LIST_AUTHORS,
            include_str!("../templates/list-authors.hbs"),
        )?;
        registry
            .register_template_string(LIST_AUTHOR, include_str!("../templates/list-author.hbs"))?;
        registry
            .register_template_string(ADD_AUTHOR, include_str!("../templates/add-author.hbs"))?;
        registry.register_template_string(
            UPDATE_AUTHOR,
            include_str!("../templates/update-author.hbs"),
        )?;
        Ok(Self { registry })
    }

    /// Renders a view to an HTML page.
    ///
    /// # Errors
    ///
    /// Returns `handlebars::RenderError` if the template name is unknown or
    /// rendering fails.
    pub fn render(&self, view: &View) -> Result<String, handlebars::RenderError> {
        self.registry.render(view.template, &view.model)
    }
}
