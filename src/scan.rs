/*!
# HTMLSan: Attribute Scanner

These methods decide whether or not an individual attribute gets to stay.
They never touch the tree themselves; removal is left to the caller.
*/

use crate::{
	Node,
	policy,
	SanitizeOptions,
	Tag,
};
use std::borrow::Cow;



/// # Safe URI Prefixes.
const SAFE_URI: [&str; 5] = ["http://", "https://", "mailto:", "/", "#"];

/// # Script Schemes.
const SCRIPT_URI: [&str; 2] = ["javascript:", "vbscript:"];

/// # Valid Targets.
const TARGETS: [&str; 4] = ["_blank", "_self", "_parent", "_top"];



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Removal Reason.
pub(crate) enum Reason {
	/// # Not in the Allow-List.
	Disallowed,

	/// # Dangerous `data:` URI.
	DataUri,

	/// # Event Handler.
	EventHandler,

	/// # Inline Style.
	InlineStyle,

	/// # Invalid Target.
	InvalidTarget,

	/// # `javascript:` or `vbscript:` URI.
	ScriptUri,

	/// # Unsafe URI.
	UnsafeUri,
}

impl Reason {
	#[must_use]
	/// # As Str.
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Disallowed => "disallowed",
			Self::DataUri => "data uri",
			Self::EventHandler => "event handler",
			Self::InlineStyle => "inline style",
			Self::InvalidTarget => "invalid target",
			Self::ScriptUri => "script uri",
			Self::UnsafeUri => "unsafe uri",
		}
	}
}



#[must_use]
/// # Is Safe URI?
///
/// Returns `true` for absolute `http://`/`https://` URLs, `mailto:` links,
/// root-relative paths, and fragments.
///
/// Like browsers, leading whitespace and control characters are ignored, as
/// are embedded tabs and newlines, and the comparison is case-insensitive.
pub fn is_safe_uri(value: &str) -> bool {
	let value = normalize(value);
	SAFE_URI.iter().any(|p| value.starts_with(p))
}

/// # Standard Element Attribute.
///
/// Check an attribute belonging to an element with a policy entry,
/// returning the reason it should go, if any.
pub(crate) fn standard(tag: Tag, name: &str, value: &str, opts: SanitizeOptions)
-> Option<Reason> {
	if policy::is_framework_attribute(name) { return None; }
	if ! policy::is_attribute_allowed(tag, name) { return Some(Reason::Disallowed); }

	if let Some(reason) = dangerous_value(value) { return Some(reason); }
	if is_event_attribute(name) { return Some(Reason::EventHandler); }
	if name.eq_ignore_ascii_case("style") { return Some(Reason::InlineStyle); }
	if opts.strict_uri_validation() && is_uri_attribute(name) && ! is_safe_uri(value) {
		return Some(Reason::UnsafeUri);
	}
	if name.eq_ignore_ascii_case("target") && ! TARGETS.iter().any(|t| value.eq_ignore_ascii_case(t)) {
		return Some(Reason::InvalidTarget);
	}

	None
}

/// # Custom Element Attribute.
///
/// Custom elements have no allow-list, so only the obviously dangerous bits
/// are removed.
pub(crate) fn custom(name: &str, value: &str, opts: SanitizeOptions) -> Option<Reason> {
	if policy::is_framework_attribute(name) { None }
	else if let Some(reason) = dangerous_value(value) { Some(reason) }
	else if is_event_attribute(name) { Some(Reason::EventHandler) }
	else if opts.remove_styles() && name.eq_ignore_ascii_case("style") {
		Some(Reason::InlineStyle)
	}
	else if opts.strict_uri_validation() && is_uri_attribute(name) && ! is_safe_uri(value) {
		Some(Reason::UnsafeUri)
	}
	else { None }
}

/// # SVG Attribute.
///
/// SVG elements lose their event handlers and anything pointing at a script
/// scheme, `href` and `xlink:href` included.
pub(crate) fn svg(name: &str, value: &str) -> Option<Reason> {
	if is_event_attribute(name) { Some(Reason::EventHandler) }
	else if is_script_uri(value) { Some(Reason::ScriptUri) }
	else if name.eq_ignore_ascii_case("href") && is_dangerous_data_uri(value) {
		Some(Reason::DataUri)
	}
	else { None }
}

#[must_use]
/// # Iframe Allowed?
///
/// Frames must be sandboxed, and must not point to script or data URIs.
pub(crate) fn iframe_ok(node: &Node) -> bool {
	node.attr("sandbox").is_some() &&
	node.attr("src").is_none_or(|src| {
		let src = normalize(&src);
		! src.starts_with("data:") && ! SCRIPT_URI.iter().any(|p| src.starts_with(p))
	})
}



/// # Dangerous Value?
fn dangerous_value(value: &str) -> Option<Reason> {
	if is_script_uri(value) { Some(Reason::ScriptUri) }
	else if is_dangerous_data_uri(value) { Some(Reason::DataUri) }
	else { None }
}

#[must_use]
/// # Is Event Handler?
fn is_event_attribute(name: &str) -> bool {
	name.len() >= 2 && name.as_bytes()[..2].eq_ignore_ascii_case(b"on")
}

#[must_use]
/// # Is URL Attribute?
///
/// These are the ones subject to strict URI validation.
fn is_uri_attribute(name: &str) -> bool {
	name.eq_ignore_ascii_case("href") || name.eq_ignore_ascii_case("src")
}

#[must_use]
/// # Is Script URI?
fn is_script_uri(value: &str) -> bool {
	let value = normalize(value);
	SCRIPT_URI.iter().any(|p| value.starts_with(p))
}

#[must_use]
/// # Is Dangerous Data URI?
///
/// Base64 payloads, HTML, and Javascript are all out.
fn is_dangerous_data_uri(value: &str) -> bool {
	let value = normalize(value);
	value.starts_with("data:") && (
		value.contains("base64") ||
		value.starts_with("data:text/html") ||
		value.starts_with("data:text/javascript")
	)
}

#[must_use]
/// # Normalize URI.
///
/// Strip leading whitespace/control characters and embedded tabs/newlines,
/// and lowercase the rest. The original is returned as-is when nothing
/// needs changing.
fn normalize(value: &str) -> Cow<'_, str> {
	let value = value.trim_start_matches(|c: char| c <= ' ');
	if value.bytes().any(|b| matches!(b, b'\t' | b'\n' | b'\r') || b.is_ascii_uppercase()) {
		Cow::Owned(
			value.chars()
				.filter(|c| ! matches!(c, '\t' | '\n' | '\r'))
				.map(|c| c.to_ascii_lowercase())
				.collect()
		)
	}
	else { Cow::Borrowed(value) }
}
