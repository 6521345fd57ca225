//! mas's main application entry point.
//! Parses arguments, runs generation and owns the single exit point.

use std::io::{self, IsTerminal, Write};

use mas::{
    cli::{flush_and_exit, get_args, print_summary, Args},
    constants::EXIT_SUCCESS,
    error::{default_error_handler, Result},
    generator::{create_project, ProjectRequest},
    logger::init_logger,
    prompt::{DialoguerPrompter, Prompter, ReaderPrompter},
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    let mut stdout = io::stdout();
    let mut stderr = io::stderr();

    let code = match run(args, &mut stdout) {
        Ok(()) => EXIT_SUCCESS,
        Err(err) => default_error_handler(&err, &mut stderr),
    };

    flush_and_exit(code, stdout, stderr);
}

/// Main application logic execution.
///
/// The confirmation prompt uses the terminal when stdin is one and reads a
/// plain line from stdin otherwise.
fn run(args: Args, out: &mut dyn Write) -> Result<()> {
    let renderer = MiniJinjaRenderer::new();
    let mut prompter: Box<dyn Prompter> = if io::stdin().is_terminal() {
        Box::new(DialoguerPrompter::new())
    } else {
        Box::new(ReaderPrompter::new(io::stdin().lock(), io::stdout()))
    };

    let request = ProjectRequest::new(args.dir, args.force);
    let name = create_project(&request, &mut *prompter, &renderer, out)?;

    print_summary(out, name.as_str(), request.destination());
    Ok(())
}
