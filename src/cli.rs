//! Command-line interface implementation for mas.
//! Provides argument parsing and the process exit path.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Command-line arguments structure for mas.
#[derive(Parser, Debug)]
#[command(
    name = "mas",
    author,
    version,
    about = "mas: generate a new service project",
    long_about = None
)]
pub struct Args {
    /// Directory where the project will be created
    #[arg(value_name = "DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Force generation into a non-empty directory
    #[arg(short, long)]
    pub force: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses `args` without exiting on failure.
pub fn parse_args_from<I, T>(args: I) -> Result<Args, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Args::try_parse_from(args)
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * Prints usage before the error when an unknown option is given
/// * With clap's default error handling for every argument error
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::UnknownArgument {
                let _ = Args::command().print_help();
                println!();
            }
            e.exit()
        }
    }
}

/// Prints the closing summary line. Write failures are ignored; the project
/// already exists at this point.
pub fn print_summary(out: &mut dyn Write, name: &str, destination: &Path) {
    let _ = writeln!(out, "\nProject '{}' created in {}.", name, destination.display());
}

/// Flushes both output streams and terminates the process with `code`.
pub fn flush_and_exit<O: Write, E: Write>(code: i32, mut stdout: O, mut stderr: E) -> ! {
    let _ = stdout.flush();
    let _ = stderr.flush();
    std::process::exit(code)
}
