/*!
# HTMLSan

`HTMLSan` is a fast, in-place HTML sanitizer written in Rust for Linux. It
strips scripts, event handlers, dangerous links, and anything else not
explicitly allowed, leaving the rest of the markup alone.

Like its minifying sibling, `HTMLSan` is *not* a stream processor; it builds a
complete DOM tree from each document before deciding what to remove, and if a
document cannot be parsed or sanitized, it is left as-was.

Documents with nothing to remove are not rewritten.



## Use

For basic use, just toss one or more file or directory paths after the command,
like:
```bash
# Clean one file.
htmlsan /path/to/one.html

# Recursively clean every .htm(l) file in a directory.
htmlsan /path/to

# Do the same thing but with a progress bar.
htmlsan -p /path/to

# Keep custom elements.
htmlsan --permissive /path/to

# For a full list of options, run help:
htmlsan -h
```
*/

#![deny(unsafe_code)]

#![warn(
	clippy::filetype_is_file,
	clippy::integer_division,
	clippy::needless_borrow,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::suboptimal_flops,
	clippy::unneeded_field_pattern,
	macro_use_extern_crate,
	missing_copy_implementations,
	missing_debug_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unreachable_pub,
	unused_extern_crates,
	unused_import_braces,
)]



mod cli;
mod file;

use argyle::Argument;
use cli::HtmlsanError;
use dactyl::NiceU64;
use dowser::{
	Dowser,
	Extension,
};
use fyi_msg::{
	Msg,
	MsgKind,
	Progless,
};
use htmlsan::Policy;
use rayon::iter::{
	IntoParallelRefIterator,
	ParallelIterator,
};
use std::{
	path::{
		Path,
		PathBuf,
	},
	sync::atomic::{
		AtomicU64,
		Ordering::{
			Acquire,
			Relaxed,
		},
	},
};
use tracing::debug;
use tracing_subscriber::{
	EnvFilter,
	fmt,
	layer::SubscriberExt,
	util::SubscriberInitExt,
};



include!(concat!(env!("OUT_DIR"), "/htmlsan-extensions.rs"));



/// # Main.
fn main() {
	match main__() {
		Ok(()) => {},
		Err(e @ (HtmlsanError::PrintHelp | HtmlsanError::PrintVersion)) => {
			println!("{e}");
		},
		Err(e) => { Msg::error(e.as_str()).die(1); },
	}
}

#[inline]
/// # Actual Main.
fn main__() -> Result<(), HtmlsanError> {
	// Parse CLI arguments.
	let args = argyle::args()
		.with_keywords(include!(concat!(env!("OUT_DIR"), "/argyle.rs")));

	let mut policy = Policy::Strict;
	let mut progress = false;
	let mut paths = Dowser::default();
	for arg in args {
		match arg {
			Argument::Key("-h" | "--help") => return Err(HtmlsanError::PrintHelp),
			Argument::Key("--minimum") => { policy = Policy::Minimum; },
			Argument::Key("-p" | "--progress") => { progress = true; },
			Argument::Key("--permissive") => { policy = Policy::Permissive; },
			Argument::Key("--strict") => { policy = Policy::Strict; },
			Argument::Key("-V" | "--version") => return Err(HtmlsanError::PrintVersion),

			Argument::KeyWithValue("-l" | "--list", s) => {
				paths.read_paths_from_file(&s).map_err(|_| HtmlsanError::ListFile)?;
			},

			// Assume paths.
			Argument::Path(s) => { paths = paths.with_path(s); },
			Argument::Other(s) => { paths = paths.with_path(s); },

			// Nothing else is expected.
			_ => {},
		}
	}

	// Put it all together!
	let paths: Vec<PathBuf> = paths.filter(|p| is_html(p)).collect();
	if paths.is_empty() { return Err(HtmlsanError::NoDocuments); }

	init_logging();
	debug!(policy = policy.as_str(), documents = paths.len(), "Starting.");

	// Running totals.
	let changed = AtomicU64::new(0);
	let nodes = AtomicU64::new(0);
	let attributes = AtomicU64::new(0);
	let tally = |p: &Path| match file::sanitize(p, policy) {
		Ok(report) => if ! report.is_empty() {
			changed.fetch_add(1, Relaxed);
			nodes.fetch_add(report.nodes() as u64, Relaxed);
			attributes.fetch_add(report.attributes() as u64, Relaxed);
		},
		Err(e) => { debug!(path = %p.display(), error = e.as_str(), "Skipped."); },
	};

	// Sexy run-through.
	if progress {
		// Boot up a progress bar.
		let progress = Progless::try_from(paths.len())?
			.with_title(Some(Msg::custom("HTMLSan", 199, "Reticulating &splines;")));

		// Process!
		let killed = Progless::sigint_two_strike();
		paths.par_iter().for_each(|p|
			if ! killed.load(Acquire) {
				let tmp = p.to_string_lossy();
				progress.add(&tmp);
				tally(p.as_path());
				progress.remove(&tmp);
			}
		);

		// Finish up.
		progress.finish();
		progress.summary(MsgKind::Crunched, "document", "documents").print();
		Msg::custom("Removed", 199, &format!(
			"{} element(s) and {} attribute(s) from {} document(s).",
			NiceU64::from(nodes.load(Acquire)),
			NiceU64::from(attributes.load(Acquire)),
			NiceU64::from(changed.load(Acquire)),
		))
			.with_newline(true)
			.print();
	}
	else {
		paths.par_iter().for_each(|p| tally(p.as_path()));
	}

	Ok(())
}

/// # Is HTML?
///
/// Match `.htm` and `.html` files, case-insensitively.
fn is_html(path: &Path) -> bool {
	Extension::try_from3(path).map_or_else(
		|| Extension::try_from4(path) == Some(E_HTML),
		|e| e == E_HTM,
	)
}

/// # Initialize Logging.
///
/// Diagnostics go to STDERR, filtered by `RUST_LOG`. By default, only
/// warnings are shown.
fn init_logging() {
	let _res = tracing_subscriber::registry()
		.with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with(fmt::layer().with_writer(std::io::stderr))
		.try_init();
}
