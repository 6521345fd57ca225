//! Generation planning.
//! Computes the directories to create and the ordered list of template writes
//! before anything touches the filesystem.

use crate::constants::{DEMO_DIR, INTERFACE_DIR};
use crate::error::Result;
use crate::name::ProjectName;
use crate::templates::{self, Template};
use std::path::{Path, PathBuf};

/// How a template turns into its destination file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Bytes copied unchanged
    RawCopy,
    /// Text decoded as UTF-8 and written back unchanged
    TextTemplateCopy,
    /// Text rendered with the generation's variable bindings
    ParameterizedRender,
}

/// One planned template write.
#[derive(Debug)]
pub struct PlannedFile {
    pub template: &'static Template,
    pub destination: PathBuf,
    pub mode: RenderMode,
}

/// Ordered template writes for one project.
pub type TemplatePlan = Vec<PlannedFile>;

/// Directory receiving the service's interface files, relative to the project root.
pub fn service_dir(name: &ProjectName) -> PathBuf {
    Path::new(INTERFACE_DIR).join(name.service_name())
}

fn push_unique(dirs: &mut Vec<PathBuf>, dir: PathBuf) {
    if !dirs.contains(&dir) {
        dirs.push(dir);
    }
}

/// Returns the directories to create, parents before children.
///
/// The root itself is left out when it is the current directory.
pub fn plan_directories<P: AsRef<Path>>(root: P, name: &ProjectName) -> Vec<PathBuf> {
    let root = root.as_ref();
    let service_dir = service_dir(name);
    let mut dirs = Vec::with_capacity(4);

    if root != Path::new(".") {
        push_unique(&mut dirs, root.to_path_buf());
    }
    push_unique(&mut dirs, root.join(INTERFACE_DIR));
    push_unique(&mut dirs, root.join(&service_dir));
    push_unique(&mut dirs, root.join(service_dir).join(DEMO_DIR));

    dirs
}

/// Plans one file per template in `from_dir` matching `pattern`, written
/// under `to_dir` with its own file name.
pub fn plan_multi<P: AsRef<Path>>(
    from_dir: &str,
    to_dir: P,
    pattern: &str,
    mode: RenderMode,
) -> Result<TemplatePlan> {
    let to_dir = to_dir.as_ref();
    Ok(templates::matching(from_dir, pattern)?
        .into_iter()
        .map(|template| PlannedFile {
            template,
            destination: to_dir.join(template.file_name()),
            mode,
        })
        .collect())
}

/// Builds the complete template plan for a project rooted at `root`.
///
/// # Errors
/// * `Error::MissingTemplateError` if a fixed template is not bundled
/// * `Error::GlobError` if the scripts pattern is invalid
pub fn plan_templates<P: AsRef<Path>>(root: P, name: &ProjectName) -> Result<TemplatePlan> {
    let root = root.as_ref();
    let service_dir = root.join(service_dir(name));

    let planned = |id: &str, destination: PathBuf, mode: RenderMode| -> Result<PlannedFile> {
        Ok(PlannedFile { template: templates::find(id)?, destination, mode })
    };

    let mut plan = vec![
        planned(
            templates::SERVICE_TEMPLATE,
            root.join("service.json"),
            RenderMode::ParameterizedRender,
        )?,
        planned(templates::ENTRY_POINT, root.join("mas.js"), RenderMode::TextTemplateCopy)?,
        planned(
            templates::DEMO_INTERFACE,
            service_dir.join(DEMO_DIR).join("if.js"),
            RenderMode::TextTemplateCopy,
        )?,
        planned(
            templates::INTERFACE_DESCRIPTOR,
            service_dir.join("interface.xml"),
            RenderMode::RawCopy,
        )?,
    ];
    plan.extend(plan_multi(
        templates::SCRIPTS_DIR,
        &service_dir,
        templates::SCRIPTS_PATTERN,
        RenderMode::TextTemplateCopy,
    )?);

    Ok(plan)
}
