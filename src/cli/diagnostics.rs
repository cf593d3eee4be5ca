use base_pack::{DecodeError, DictionaryNotFoundError};
use std::error::Error;
use std::io::IsTerminal;

/// Writes warnings and errors to stderr.
pub struct Reporter {
    color: bool,
    quiet: bool,
}

impl Reporter {
    pub fn new(no_color: bool, quiet: bool) -> Self {
        Self {
            color: !no_color && should_use_color(),
            quiet,
        }
    }

    fn label(&self, code: &str, text: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}:\x1b[0m", code, text)
        } else {
            format!("{}:", text)
        }
    }

    pub fn warn(&self, message: &str) {
        if !self.quiet {
            eprintln!("{} {}", self.label("1;33", "warning"), message);
        }
    }

    pub fn error(&self, err: &(dyn Error + 'static)) {
        eprintln!("{} {}", self.label("1;31", "error"), err);

        if let Some(decode_err) = err.downcast_ref::<DecodeError>() {
            if let DecodeError::InvalidCharacter {
                position, input, ..
            } = decode_err
            {
                // The echoed input is cut after 60 chars
                if *position < 60 {
                    eprintln!();
                    eprintln!("  {}", input);
                    let caret = if self.color { "\x1b[1;31m^\x1b[0m" } else { "^" };
                    eprintln!("  {}{}", " ".repeat(*position), caret);
                }
            }
            eprintln!();
            eprintln!("{} {}", self.label("1;36", "hint"), decode_err.hint());
        } else if err.downcast_ref::<DictionaryNotFoundError>().is_some() {
            eprintln!();
            eprintln!(
                "{} run `base-pack config list` to see all dictionaries",
                self.label("1;36", "hint")
            );
        }
    }
}

/// Check if colored output should be used
fn should_use_color() -> bool {
    // Respect NO_COLOR environment variable
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    std::io::stderr().is_terminal()
}
