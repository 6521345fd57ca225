//! The generated `package.json`.

use crate::error::Result;
use crate::name::ProjectName;
use indexmap::IndexMap;
use serde::Serialize;

/// Version written into every new manifest
pub const INITIAL_VERSION: &str = "1.0.0";

/// Command run by `npm start`
pub const START_SCRIPT: &str = "node mas.js";

/// Runtime dependencies of a generated service, in manifest order
pub const DEPENDENCIES: [(&str, &str); 5] = [
    ("meap", "1.1.2"),
    ("ioredis", "^4.19.4"),
    ("node-expat", "^2.3.18"),
    ("node-uuid", "^1.4.8"),
    ("async", "^3.2.0"),
];

/// Package descriptor of a generated project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManifestDescriptor {
    pub name: String,
    pub version: String,
    pub private: bool,
    pub scripts: IndexMap<String, String>,
    pub dependencies: IndexMap<String, String>,
}

impl ManifestDescriptor {
    /// Builds the manifest for `name` with the fixed script and dependency set.
    pub fn new(name: &ProjectName) -> Self {
        let mut scripts = IndexMap::new();
        scripts.insert("start".to_string(), START_SCRIPT.to_string());

        Self {
            name: name.to_string(),
            version: INITIAL_VERSION.to_string(),
            private: true,
            scripts,
            dependencies: DEPENDENCIES
                .iter()
                .map(|(dep, range)| (dep.to_string(), range.to_string()))
                .collect(),
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }
}
