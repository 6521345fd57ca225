//! The bundled template set.
//! Every template is compiled into the binary; ids are paths relative to the
//! crate's `templates/` directory.

use crate::error::{Error, Result};
use globset::Glob;
use std::path::Path;

/// Id of the parameterized service manifest template
pub const SERVICE_TEMPLATE: &str = "service.json.j2";
/// Id of the application entry point
pub const ENTRY_POINT: &str = "mas.js";
/// Id of the demo interface handler
pub const DEMO_INTERFACE: &str = "if.js";
/// Id of the interface descriptor document
pub const INTERFACE_DESCRIPTOR: &str = "js/interface.xml";
/// Directory holding the auxiliary interface scripts
pub const SCRIPTS_DIR: &str = "js";
/// Pattern selecting the auxiliary interface scripts
pub const SCRIPTS_PATTERN: &str = "*.js";

/// A template file embedded at compile time.
#[derive(Debug)]
pub struct Template {
    /// Path relative to the `templates/` directory, `/`-separated
    pub id: &'static str,
    pub contents: &'static [u8],
}

impl Template {
    /// File name part of the id.
    pub fn file_name(&self) -> &'static str {
        self.id.rsplit('/').next().unwrap_or(self.id)
    }

    /// Directory part of the id, empty for top-level templates.
    pub fn dir(&self) -> &'static str {
        self.id.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("")
    }

    /// Contents decoded as UTF-8.
    pub fn text(&self) -> Result<&'static str> {
        std::str::from_utf8(self.contents)
            .map_err(|_| Error::EncodingError { path: self.id.to_string() })
    }
}

macro_rules! bundled {
    ($($id:literal),+ $(,)?) => {
        &[$(Template {
            id: $id,
            contents: include_bytes!(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/", $id)),
        }),+]
    };
}

/// All bundled templates, sorted by id.
pub static TEMPLATES: &[Template] = bundled![
    "if.js",
    "js/interface.xml",
    "js/redis.js",
    "js/util.js",
    "mas.js",
    "service.json.j2",
];

/// Looks up a bundled template by id.
///
/// # Errors
/// * `Error::MissingTemplateError` if no template has this id
pub fn find(id: &str) -> Result<&'static Template> {
    let id = id.trim_start_matches("./");
    TEMPLATES
        .iter()
        .find(|template| template.id == id)
        .ok_or_else(|| Error::MissingTemplateError { path: id.to_string() })
}

/// Lists the templates directly inside `dir` whose file name matches `pattern`.
///
/// # Errors
/// * `Error::GlobError` if `pattern` is not a valid glob
pub fn matching<P: AsRef<Path>>(dir: P, pattern: &str) -> Result<Vec<&'static Template>> {
    let matcher = Glob::new(pattern)?.compile_matcher();
    let dir = dir.as_ref();

    Ok(TEMPLATES
        .iter()
        .filter(|template| Path::new(template.dir()) == dir)
        .filter(|template| matcher.is_match(template.file_name()))
        .collect())
}
