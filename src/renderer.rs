//! Template rendering for mas.
//! Wraps MiniJinja as a pure `template + bindings -> text` function.
use crate::error::{Error, Result};
use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde_json::Value;

/// Variables available to a single render call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariableBindings {
    values: serde_json::Map<String, Value>,
}

impl VariableBindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier binding.
    pub fn bind<K: Into<String>, V: Into<Value>>(mut self, name: K, value: V) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// The bindings as a template context object.
    pub fn to_context(&self) -> Value {
        Value::Object(self.values.clone())
    }
}

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a template string with the given bindings.
    ///
    /// # Arguments
    /// * `template` - Template string to render
    /// * `bindings` - Variables referenced by the template
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render(&self, template: &str, bindings: &VariableBindings) -> Result<String>;
}

/// MiniJinja-based template rendering engine.
///
/// Undefined variables are an error, never an empty string or `null`, even
/// when they only reach the output through a filter such as `tojson`.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new renderer with strict undefined handling.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::MinijinjaError` if the template does not parse or references
    ///   a variable missing from `bindings`
    fn render(&self, template: &str, bindings: &VariableBindings) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template_owned("temp", template.to_owned()).map_err(Error::MinijinjaError)?;

        let tmpl = env.get_template("temp").map_err(Error::MinijinjaError)?;

        // Strict mode lets undefined values through filters, so check up front.
        let mut unbound: Vec<_> = tmpl
            .undeclared_variables(false)
            .into_iter()
            .filter(|name| !bindings.contains(name))
            .collect();
        if !unbound.is_empty() {
            unbound.sort();
            return Err(Error::MinijinjaError(minijinja::Error::new(
                ErrorKind::UndefinedError,
                format!("unbound template variables: {}", unbound.join(", ")),
            )));
        }

        tmpl.render(bindings.to_context()).map_err(Error::MinijinjaError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_substitutes_bindings() {
        let renderer = MiniJinjaRenderer::new();
        let bindings = VariableBindings::new().bind("name", "test").bind("value", 42);

        let result = renderer.render("Hello {{ name }}!", &bindings).unwrap();
        assert_eq!(result, "Hello test!");

        let result = renderer.render("Value: {{ value }}", &bindings).unwrap();
        assert_eq!(result, "Value: 42");
    }

    #[test]
    fn test_render_rejects_unbound_variable() {
        let renderer = MiniJinjaRenderer::new();
        let bindings = VariableBindings::new().bind("name", "test");

        let err = renderer.render("{{ name }} {{ missing }}", &bindings).unwrap_err();
        assert!(matches!(err, Error::MinijinjaError(_)));
    }

    #[test]
    fn test_render_rejects_unbound_variable_behind_filter() {
        let renderer = MiniJinjaRenderer::new();
        let bindings = VariableBindings::new().bind("servicename", "x");

        let err = renderer.render("{{ interfacedir | tojson }}", &bindings).unwrap_err();
        assert!(matches!(err, Error::MinijinjaError(_)));
        assert!(err.to_string().contains("interfacedir"));
    }

    #[test]
    fn test_render_allows_template_locals() {
        let renderer = MiniJinjaRenderer::new();
        let bindings = VariableBindings::new().bind("items", vec!["a", "b"]);

        let out = renderer
            .render("{% set sep = ',' %}{% for i in items %}{{ i }}{{ sep }}{% endfor %}", &bindings)
            .unwrap();
        assert_eq!(out, "a,b,");
    }

    #[test]
    fn test_render_keeps_trailing_newline() {
        let renderer = MiniJinjaRenderer::new();
        let out = renderer.render("{{ a }}\n", &VariableBindings::new().bind("a", "x")).unwrap();
        assert_eq!(out, "x\n");
    }

    #[test]
    fn test_bind_replaces_value() {
        let bindings = VariableBindings::new().bind("k", "one").bind("k", "two");
        assert!(bindings.contains("k"));
        assert_eq!(bindings.to_context(), serde_json::json!({ "k": "two" }));
    }
}
