//! Project generation.
//! Sequences the overwrite check, planning and writes that turn an empty
//! directory into a service project.

use crate::constants::INTERFACE_DIR;
use crate::error::{Error, Result};
use crate::guard::{can_proceed, Decision};
use crate::manifest::ManifestDescriptor;
use crate::name::{project_name, resolve_path, ProjectName};
use crate::plan::{plan_directories, plan_templates};
use crate::prompt::Prompter;
use crate::renderer::{TemplateRenderer, VariableBindings};
use crate::writer::FileWriter;
use log::debug;
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name of the generated package manifest
pub const MANIFEST_FILE: &str = "package.json";

/// What to generate and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    destination: PathBuf,
    force: bool,
}

impl ProjectRequest {
    /// An empty destination means the current directory.
    pub fn new<P: Into<PathBuf>>(destination: P, force: bool) -> Self {
        let mut destination = destination.into();
        if destination.as_os_str().is_empty() {
            destination = PathBuf::from(".");
        }
        Self { destination, force }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    pub fn force(&self) -> bool {
        self.force
    }
}

/// Template variables for a project whose absolute root is `root`.
pub fn service_bindings(name: &ProjectName, root: &Path) -> VariableBindings {
    VariableBindings::new()
        .bind("servicename", name.service_name())
        .bind("interfacedir", root.join(INTERFACE_DIR).to_string_lossy().into_owned())
}

/// Generates a project as described by `request`.
///
/// Progress lines go to `out`. The first failure stops generation and
/// leaves whatever was already written in place.
///
/// # Returns
/// * `Result<ProjectName>` - Name the project was generated under
///
/// # Errors
/// * `Error::Aborted` if the destination is not empty and the user declined
/// * Any I/O, template or manifest error raised while writing
pub fn create_project(
    request: &ProjectRequest,
    prompter: &mut dyn Prompter,
    renderer: &dyn TemplateRenderer,
    out: &mut dyn Write,
) -> Result<ProjectName> {
    let destination = request.destination();
    let root = resolve_path(destination)?;
    let name = project_name(&root);
    debug!("Project name '{}' from '{}'", name, root.display());

    if can_proceed(destination, request.force(), prompter)? == Decision::Abort {
        return Err(Error::Aborted);
    }

    let manifest = ManifestDescriptor::new(&name);
    let bindings = service_bindings(&name, &root);
    let directories = plan_directories(destination, &name);
    let files = plan_templates(destination, &name)?;
    debug!("Planned {} directories and {} files", directories.len(), files.len());

    let mut writer = FileWriter::new(out);
    for dir in &directories {
        writer.create_directory(dir)?;
    }
    for file in &files {
        writer.apply(file, renderer, &bindings)?;
    }
    writer.write_file(destination.join(MANIFEST_FILE), manifest.to_json()?.as_bytes())?;

    Ok(name)
}
