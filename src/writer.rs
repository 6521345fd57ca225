//! Filesystem mutations for project generation.
//! Every successful operation reports a `create : <path>` line.

use crate::error::{Error, Result};
use crate::plan::{self, PlannedFile, RenderMode};
use crate::renderer::{TemplateRenderer, VariableBindings};
use crate::templates::{self, Template};
use console::style;
use log::debug;
use std::fs::{DirBuilder, OpenOptions};
use std::io::Write;
use std::path::{Path, MAIN_SEPARATOR};

/// Writes files and directories and reports each creation to `out`.
pub struct FileWriter<'a> {
    out: &'a mut dyn Write,
}

impl<'a> FileWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self { out }
    }

    fn report(&mut self, path: &Path, is_dir: bool) {
        let suffix = if is_dir { MAIN_SEPARATOR.to_string() } else { String::new() };
        // Progress output only; a closed stdout must not fail generation.
        let _ =
            writeln!(self.out, "   {} : {}{}", style("create").cyan(), path.display(), suffix);
    }

    /// Creates `path` and any missing parents. Existing directories are left as-is.
    pub fn create_directory<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(crate::constants::DIR_MODE);
        }

        builder.create(path)?;
        self.report(path, true);
        Ok(())
    }

    /// Writes `contents` to `path`, replacing any existing file.
    pub fn write_file<P: AsRef<Path>>(&mut self, path: P, contents: &[u8]) -> Result<()> {
        let path = path.as_ref();
        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(crate::constants::FILE_MODE);
        }

        let mut file = options.open(path)?;
        file.write_all(contents)?;
        self.report(path, false);
        Ok(())
    }

    /// Copies the bundled template `id` to `to`.
    ///
    /// # Errors
    /// * `Error::TemplateError` for [`RenderMode::ParameterizedRender`], which
    ///   needs bindings; use [`FileWriter::apply`] instead
    pub fn copy_template<P: AsRef<Path>>(&mut self, id: &str, to: P, mode: RenderMode) -> Result<()> {
        self.write_template(templates::find(id)?, to.as_ref(), mode)
    }

    fn write_template(&mut self, template: &Template, to: &Path, mode: RenderMode) -> Result<()> {
        match mode {
            RenderMode::RawCopy => self.write_file(to, template.contents),
            RenderMode::TextTemplateCopy => self.write_file(to, template.text()?.as_bytes()),
            RenderMode::ParameterizedRender => Err(Error::TemplateError(format!(
                "'{}' must be rendered with variable bindings",
                template.id
            ))),
        }
    }

    /// Copies every bundled template directly inside `from_dir` whose file
    /// name matches `pattern` into `to_dir`.
    pub fn copy_template_multi<P: AsRef<Path>>(
        &mut self,
        from_dir: &str,
        to_dir: P,
        pattern: &str,
    ) -> Result<()> {
        for file in plan::plan_multi(from_dir, to_dir, pattern, RenderMode::TextTemplateCopy)? {
            self.write_template(file.template, &file.destination, file.mode)?;
        }
        Ok(())
    }

    /// Executes one planned template write.
    pub fn apply(
        &mut self,
        file: &PlannedFile,
        renderer: &dyn TemplateRenderer,
        bindings: &VariableBindings,
    ) -> Result<()> {
        match file.mode {
            RenderMode::ParameterizedRender => {
                debug!("Rendering '{}'", file.template.id);
                let rendered = renderer.render(file.template.text()?, bindings)?;
                self.write_file(&file.destination, rendered.as_bytes())
            }
            mode => {
                debug!("Copying '{}'", file.template.id);
                self.write_template(file.template, &file.destination, mode)
            }
        }
    }
}
