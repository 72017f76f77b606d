/*!
# HTMLSan: File Sanitization.
*/

use crate::HtmlsanError;
use htmlsan::{
	Policy,
	Report,
	Sanitizer,
	Tree,
};
use std::path::Path;



/// # Sanitize a Document (or Fragment).
///
/// Read the raw HTML from a file, parse it into a tree, sanitize said tree,
/// turn it _back_ into HTML, and save it if anything was removed.
///
/// ## Errors
///
/// This will return an error if the file is unreadable, empty, or
/// unparseable, if sanitization fails, or if issues are encountered when
/// trying to re-save it.
pub(super) fn sanitize(src: &Path, policy: Policy) -> Result<Report, HtmlsanError> {
	// Load the file.
	let raw = std::fs::read_to_string(src).map_err(|_| HtmlsanError::Read)?;
	if raw.trim().is_empty() { return Err(HtmlsanError::EmptyFile); }

	// Parse the document into a tree.
	let tree =
		if is_fragment(raw.as_bytes()) { Tree::parse_fragment(raw.as_bytes())? }
		else { Tree::parse_document(raw.as_bytes())? };

	// Clean it.
	let report = Sanitizer::new(policy).sanitize_report(tree.root())?;

	// Save it if different!
	if ! report.is_empty() {
		let out = tree.serialize();
		if out != raw {
			write_atomic::write_file(src, out.as_bytes()).map_err(|_| HtmlsanError::Save)?;
		}
	}

	Ok(report)
}



/// # Is Fragment.
///
/// This returns `false` if the document contains (case-insensitively)
/// `<html`, `<body`, `</body>`, or `</html>`.
fn is_fragment(src: &[u8]) -> bool {
	let mut rest = src;
	while let Some(pos) = rest.iter().position(|&b| b'<' == b) {
		rest = &rest[pos + 1..];

		// Opening tags just need a name.
		if let Some(tag) = rest.get(..4) && is_root_tag(tag) { return false; }

		// Closing tags need the whole thing.
		if
			let Some(tag) = rest.get(..6) &&
			b'/' == tag[0] &&
			b'>' == tag[5] &&
			is_root_tag(&tag[1..5])
		{
			return false;
		}
	}

	true
}

/// # Body or HTML?
fn is_root_tag(tag: &[u8]) -> bool {
	tag.eq_ignore_ascii_case(b"body") || tag.eq_ignore_ascii_case(b"html")
}



#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn t_is_fragment() {
		for i in [
			"<p>Hello</p>",
			"<div class=\"body\">x</div>",
			"<p>x</p></bod",
			"<p>x</p><htm",
			"",
		] {
			assert!(is_fragment(i.as_bytes()), "{i}");
		}

		for i in [
			"<!DOCTYPE html><html><body>x</body></html>",
			"<HTML lang=\"en\">",
			"<p>x</p></BODY>",
			"<body class=\"home\">",
			"<body>",
			"<p>x</p><html>",
			"<p>x</p></html>",
		] {
			assert!(! is_fragment(i.as_bytes()), "{i}");
		}
	}

	#[test]
	fn t_sanitize() {
		let dir = std::env::temp_dir().join(format!("htmlsan-{}", std::process::id()));
		std::fs::create_dir_all(&dir).expect("Unable to create temporary directory.");

		// Dirty.
		let dirty = dir.join("dirty.html");
		std::fs::write(&dirty, "<p onclick=\"x()\">Hi</p><script>x()</script>")
			.expect("Unable to write file.");
		let report = sanitize(&dirty, Policy::Strict).expect("Sanitize failed.");
		assert_eq!(report.nodes(), 1);
		assert_eq!(report.attributes(), 1);
		assert_eq!(
			std::fs::read_to_string(&dirty).expect("Unable to read file."),
			"<p>Hi</p>",
		);

		// Clean; formatting should be left alone.
		let clean = dir.join("clean.html");
		std::fs::write(&clean, "<P>Hi</P>").expect("Unable to write file.");
		let report = sanitize(&clean, Policy::Strict).expect("Sanitize failed.");
		assert!(report.is_empty());
		assert_eq!(
			std::fs::read_to_string(&clean).expect("Unable to read file."),
			"<P>Hi</P>",
		);

		// Empty.
		let empty = dir.join("empty.html");
		std::fs::write(&empty, "").expect("Unable to write file.");
		assert!(matches!(sanitize(&empty, Policy::Strict), Err(HtmlsanError::EmptyFile)));

		let _res = std::fs::remove_dir_all(&dir);
	}
}
