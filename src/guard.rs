//! Overwrite protection for the destination directory.

use crate::constants::AFFIRMATIVE_ANSWERS;
use crate::error::Result;
use crate::prompt::Prompter;
use log::debug;
use std::io::ErrorKind;
use std::path::Path;

/// Question asked before generating into a non-empty destination
pub const CONFIRM_MESSAGE: &str = "destination is not empty, continue? [y/N] ";

/// Outcome of the overwrite check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Proceed,
    NeedsConfirmation,
    Abort,
}

/// Returns `true` if `dir` does not exist or has no entries.
///
/// # Errors
/// * `Error::IoError` for anything other than a missing directory, including
///   a destination that is a regular file
pub fn is_empty_dir<P: AsRef<Path>>(dir: P) -> Result<bool> {
    match std::fs::read_dir(dir.as_ref()) {
        Ok(mut entries) => Ok(entries.next().is_none()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(true),
        Err(e) => Err(e.into()),
    }
}

/// Decides without asking whether `destination` may be written into.
///
/// Returns [`Decision::Proceed`] or [`Decision::NeedsConfirmation`].
pub fn probe<P: AsRef<Path>>(destination: P, force: bool) -> Result<Decision> {
    let destination = destination.as_ref();
    let decision = if is_empty_dir(destination)? || force {
        Decision::Proceed
    } else {
        Decision::NeedsConfirmation
    };
    debug!("Destination '{}': {:?}", destination.display(), decision);
    Ok(decision)
}

/// Returns `true` if `answer` is one of the accepted affirmative words.
///
/// The trimmed answer must equal a whole word from [`AFFIRMATIVE_ANSWERS`],
/// ignoring ASCII case. Prefixes and longer words such as `yep` or `okay`
/// are declines.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    AFFIRMATIVE_ANSWERS.iter().any(|word| answer.eq_ignore_ascii_case(word))
}

/// Asks for confirmation and closes the prompter once an answer is read.
pub fn confirm_overwrite(prompter: &mut dyn Prompter) -> Result<Decision> {
    let answer = prompter.ask(CONFIRM_MESSAGE)?;
    prompter.close();

    if is_affirmative(&answer) {
        Ok(Decision::Proceed)
    } else {
        debug!("Overwrite declined with answer '{answer}'");
        Ok(Decision::Abort)
    }
}

/// Full overwrite policy: probes `destination` and asks when needed.
///
/// Never returns [`Decision::NeedsConfirmation`].
pub fn can_proceed<P: AsRef<Path>>(
    destination: P,
    force: bool,
    prompter: &mut dyn Prompter,
) -> Result<Decision> {
    match probe(destination, force)? {
        Decision::NeedsConfirmation => confirm_overwrite(prompter),
        decision => Ok(decision),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_affirmative() {
        for answer in ["y", "Y", "yes", "YES", "Yes", "ok", "OK", "true", "True", " y \t"] {
            assert!(is_affirmative(answer), "{answer:?}");
        }
        for answer in ["", "n", "no", "nope", "yep", "yess", "okay", "false", "1", "y es"] {
            assert!(!is_affirmative(answer), "{answer:?}");
        }
    }
}
