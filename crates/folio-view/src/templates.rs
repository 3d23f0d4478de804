#![forbid(unsafe_code)]

//! Handlebars registry holding every page and navigation template.
//!
//! Templates live in `templates/*.hbs` and are compiled into the binary.
//! Text interpolated with `{{..}}` is HTML-escaped by the registry; only
//! pre-rendered fragments are spliced with `{{{..}}}`.

use handlebars::Handlebars;
use serde::Serialize;

/// Error raised while compiling or rendering a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// A template failed to parse.
    Template(String),
    /// Rendering a registered template failed.
    Render(String),
}

impl core::fmt::Display for ViewError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Template(msg) => write!(f, "template error: {msg}"),
            Self::Render(msg) => write!(f, "render error: {msg}"),
        }
    }
}

impl std::error::Error for ViewError {}

impl From<handlebars::TemplateError> for ViewError {
    fn from(err: handlebars::TemplateError) -> Self {
        Self::Template(err.to_string())
    }
}

impl From<handlebars::RenderError> for ViewError {
    fn from(err: handlebars::RenderError) -> Self {
        Self::Render(err.to_string())
    }
}

/// Result alias for rendering.
pub type ViewResult<T> = Result<T, ViewError>;

const PARTIALS: &[(&str, &str)] = &[
    ("icon", include_str!("../templates/icon.hbs")),
    ("rich", include_str!("../templates/rich.hbs")),
    ("nav_list", include_str!("../templates/nav_list.hbs")),
];

const TEMPLATES: &[(&str, &str)] = &[
    ("nav", include_str!("../templates/nav.hbs")),
    ("home", include_str!("../templates/home.hbs")),
    ("about", include_str!("../templates/about.hbs")),
    ("experience", include_str!("../templates/experience.hbs")),
    ("projects", include_str!("../templates/projects.hbs")),
    ("main", include_str!("../templates/main.hbs")),
    ("app", include_str!("../templates/app.hbs")),
];

/// Compiled template set.
pub struct Templates {
    registry: Handlebars<'static>,
}

impl Templates {
    /// Compile every template.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Template`] if a template fails to parse.
    pub fn new() -> ViewResult<Self> {
        let mut registry = Handlebars::new();
        for (name, source) in PARTIALS {
            registry.register_partial(name, source.trim_end())?;
        }
        for (name, source) in TEMPLATES {
            registry.register_template_string(name, source.trim_end())?;
        }
        Ok(Self { registry })
    }

    /// Render template `name` with `context`, trimmed of surrounding
    /// whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`] if rendering fails.
    pub fn render<T: Serialize>(&self, name: &str, context: &T) -> ViewResult<String> {
        let html = self.registry.render(name, context)?;
        Ok(html.trim().to_string())
    }

    /// Whether a template called `name` is registered.
    #[must_use]
    pub fn has_template(&self, name: &str) -> bool {
        self.registry.has_template(name)
    }
}

impl core::fmt::Debug for Templates {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Templates")
            .field("templates", &TEMPLATES.len())
            .field("partials", &PARTIALS.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn every_template_compiles() {
        let templates = Templates::new().unwrap();
        for (name, _) in TEMPLATES {
            assert!(templates.has_template(name), "{name}");
        }
    }

    #[test]
    fn interpolated_text_is_escaped() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render("app", &json!({ "layout": "<b>", "nav": "", "main": "" }))
            .unwrap();
        assert!(html.starts_with(r#"<div id="app-shell" class="app &lt;b&gt;">"#));
    }

    #[test]
    fn rich_spans_emphasize() {
        let templates = Templates::new().unwrap();
        let html = templates
            .render(
                "experience",
                &json!({
                    "id": "experience",
                    "experience": [{
                        "period": "p",
                        "title": "t",
                        "organization": "o",
                        "highlights": [[
                            { "text": "up ", "emphasis": false },
                            { "text": "5%", "emphasis": true }
                        ]]
                    }]
                }),
            )
            .unwrap();
        assert!(html.contains(r#"<li>up <strong class="emphasis">5%</strong></li>"#));
    }
}
