/*!
# HTMLSan: CLI Errors
*/

use fyi_msg::ProglessError;
use htmlsan::SanitizeError;
use std::{
	error::Error,
	fmt,
};



/// # Help Text.
const HELP: &str = concat!(r"
     __,---.__
  ,-'         `-.__
&/           `._\ _\
/               ''._    ", "\x1b[38;5;199mHTMLSan\x1b[0;38;5;69m v", env!("CARGO_PKG_VERSION"), "\x1b[0m", r#"
|   ,             (∞)   Allow-list, in-place
|__,'`-..--|__|--''     HTML sanitization.

USAGE:
    htmlsan [FLAGS] [OPTIONS] <PATH(S)>...

FLAGS:
    -h, --help        Print help information and exit.
        --minimum     Only apply the hardcoded removal rules; keep comments,
                      scripts, styles, and custom elements.
        --permissive  Strict sanitization, but allow custom (hyphenated)
                      elements.
    -p, --progress    Show progress bar while working.
        --strict      Remove comments, scripts, styles, unsafe URIs, and
                      custom elements. (This is the default.)
    -V, --version     Print program version and exit.

OPTIONS:
    -l, --list <FILE> Read (absolute) file and/or directory paths from this
                      text file, or STDIN if "-", one entry per line, instead
                      of or in addition to the trailing <PATH(S)>.

ARGS:
    <PATH(S)>...      One or more files or directories to sanitize.

Set RUST_LOG=debug (or trace) to see what gets removed.
"#);



#[expect(clippy::missing_docs_in_private_items, reason = "Self-explanatory.")]
#[derive(Debug, Copy, Clone)]
/// # Generic Error.
pub(super) enum HtmlsanError {
	EmptyFile,
	ListFile,
	NoDocuments,
	Parse,
	Progress(ProglessError),
	Read,
	Sanitize(SanitizeError),
	Save,
	PrintHelp,    // Not an error.
	PrintVersion, // Not an error.
}

impl AsRef<str> for HtmlsanError {
	#[inline]
	fn as_ref(&self) -> &str { self.as_str() }
}

impl fmt::Display for HtmlsanError {
	#[inline]
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Error for HtmlsanError {}

impl From<ProglessError> for HtmlsanError {
	#[inline]
	fn from(src: ProglessError) -> Self { Self::Progress(src) }
}

impl From<SanitizeError> for HtmlsanError {
	#[inline]
	fn from(src: SanitizeError) -> Self {
		match src {
			SanitizeError::Parse => Self::Parse,
			e => Self::Sanitize(e),
		}
	}
}

impl HtmlsanError {
	/// # As Str.
	pub(super) const fn as_str(self) -> &'static str {
		match self {
			Self::EmptyFile => "The file is empty.",
			Self::ListFile => "Unable to read the path list.",
			Self::NoDocuments => "No documents were found.",
			Self::Parse => "Unable to parse the document.",
			Self::Progress(e) => e.as_str(),
			Self::Read => "Unable to read the file.",
			Self::Sanitize(e) => e.as_str(),
			Self::Save => "Unable to save the file.",
			Self::PrintHelp => HELP,
			Self::PrintVersion => concat!("HTMLSan v", env!("CARGO_PKG_VERSION")),
		}
	}
}
