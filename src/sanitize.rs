/*!
# HTMLSan: Sanitizer
*/

use crate::{
	Capacity,
	Collector,
	Handle,
	RemovalSet,
	SanitizeError,
};
use std::{
	ops::AddAssign,
	rc::Rc,
};
use tracing::debug;



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Sanitization Options.
///
/// This is a compact set of flags controlling the few rules that are
/// actually optional. Everything else is non-negotiable.
///
/// Start with `SanitizeOptions::new` (nothing set) or one of the preset
/// constants, then toggle individual flags with the `with_*` builders.
pub struct SanitizeOptions(u8);

macro_rules! options {
	( $($nice:ident $with:ident $k:ident $v:literal,)+ ) => (
		impl SanitizeOptions {
			$(
				/// # Flag.
				const $k: u8 = $v;

				#[must_use]
				/// # Getter.
				pub const fn $nice(self) -> bool {
					Self::$k == self.0 & Self::$k
				}

				#[must_use]
				/// # Setter.
				pub const fn $with(self, on: bool) -> Self {
					if on { Self(self.0 | Self::$k) }
					else { Self(self.0 & ! Self::$k) }
				}
			)+

			/// # All Flags.
			const ALL: u8 = $( Self::$k )|+;
		}
	)
}

options! {
	skip_comments         with_skip_comments         SKIP_COMMENTS   0b0000_0001, // Remove comments.
	remove_scripts        with_remove_scripts        REMOVE_SCRIPTS  0b0000_0010, // Remove <script>.
	remove_styles         with_remove_styles         REMOVE_STYLES   0b0000_0100, // Remove <style>.
	strict_uri_validation with_strict_uri_validation STRICT_URI      0b0000_1000, // Only safe href/src.
	allow_custom_elements with_allow_custom_elements ALLOW_CUSTOM    0b0001_0000, // Keep hyphenated tags.
}

impl SanitizeOptions {
	/// # Minimum.
	///
	/// Comments, scripts, and styles are left alone, and custom elements are
	/// welcome. Only the unconditional rules apply.
	pub const MINIMUM: Self = Self(Self::ALLOW_CUSTOM);

	/// # Strict.
	///
	/// Comments, scripts, and styles are removed, URLs must be safe, and
	/// custom elements are not allowed.
	pub const STRICT: Self = Self(
		Self::SKIP_COMMENTS | Self::REMOVE_SCRIPTS | Self::REMOVE_STYLES | Self::STRICT_URI
	);

	/// # Permissive.
	///
	/// Strict, but custom elements are allowed.
	pub const PERMISSIVE: Self = Self(Self::STRICT.0 | Self::ALLOW_CUSTOM);

	#[must_use]
	/// # New (Empty).
	pub const fn new() -> Self { Self(0) }

	#[must_use]
	/// # Is Empty?
	pub const fn is_empty(self) -> bool { 0 == self.0 & Self::ALL }
}



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Sanitization Policy.
pub enum Policy {
	/// # Do Nothing.
	None,

	/// # Minimum.
	///
	/// See `SanitizeOptions::MINIMUM`.
	Minimum,

	#[default]
	/// # Strict.
	///
	/// See `SanitizeOptions::STRICT`.
	Strict,

	/// # Permissive.
	///
	/// See `SanitizeOptions::PERMISSIVE`.
	Permissive,

	/// # Custom.
	Custom(SanitizeOptions),
}

impl From<SanitizeOptions> for Policy {
	#[inline]
	fn from(src: SanitizeOptions) -> Self { Self::Custom(src) }
}

impl Policy {
	#[must_use]
	/// # Options.
	///
	/// Return the flags for the policy, or `None` if the policy is to do
	/// nothing at all.
	pub const fn options(self) -> Option<SanitizeOptions> {
		match self {
			Self::None => None,
			Self::Minimum => Some(SanitizeOptions::MINIMUM),
			Self::Strict => Some(SanitizeOptions::STRICT),
			Self::Permissive => Some(SanitizeOptions::PERMISSIVE),
			Self::Custom(o) => Some(o),
		}
	}

	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::None => "none",
			Self::Minimum => "minimum",
			Self::Strict => "strict",
			Self::Permissive => "permissive",
			Self::Custom(_) => "custom",
		}
	}
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Sanitization Report.
///
/// Counts of what was removed, across the root and every template.
pub struct Report {
	/// # Nodes Detached.
	nodes: usize,

	/// # Attributes Removed.
	attributes: usize,

	/// # Templates Sanitized.
	templates: usize,
}

impl AddAssign for Report {
	fn add_assign(&mut self, other: Self) {
		self.nodes += other.nodes;
		self.attributes += other.attributes;
		self.templates += other.templates;
	}
}

impl Report {
	#[must_use]
	/// # New.
	pub(crate) const fn new(nodes: usize, attributes: usize, templates: usize) -> Self {
		Self { nodes, attributes, templates }
	}

	#[must_use]
	/// # Nodes Detached.
	///
	/// Descendants of detached nodes go with them, but are not counted.
	pub const fn nodes(&self) -> usize { self.nodes }

	#[must_use]
	/// # Attributes Removed.
	pub const fn attributes(&self) -> usize { self.attributes }

	#[must_use]
	/// # Template Fragments Sanitized.
	pub const fn templates(&self) -> usize { self.templates }

	#[must_use]
	/// # Nothing Removed?
	pub const fn is_empty(&self) -> bool { 0 == self.nodes && 0 == self.attributes }
}



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Sanitizer.
///
/// This is the full-featured entry point, pairing a `Policy` with the
/// `Capacity` limits for each round of collection.
///
/// ## Examples
///
/// ```
/// use htmlsan::{Capacity, Policy, Sanitizer, Tree};
///
/// let tree = Tree::parse_fragment(b"<p onclick=\"x()\">Hello</p><script>x()</script>")
///     .unwrap();
/// let report = Sanitizer::new(Policy::Strict)
///     .with_capacity(Capacity::new(100, 100, 10))
///     .sanitize_report(tree.root())
///     .unwrap();
///
/// assert_eq!(report.nodes(), 1);
/// assert_eq!(report.attributes(), 1);
/// assert_eq!(tree.serialize(), "<p>Hello</p>");
/// ```
pub struct Sanitizer {
	/// # Policy.
	policy: Policy,

	/// # Capacity.
	capacity: Capacity,
}

impl From<Policy> for Sanitizer {
	#[inline]
	fn from(src: Policy) -> Self { Self::new(src) }
}

impl Sanitizer {
	#[must_use]
	/// # New.
	pub const fn new(policy: Policy) -> Self {
		Self { policy, capacity: Capacity::DEFAULT }
	}

	#[must_use]
	/// # With Capacity.
	pub const fn with_capacity(self, capacity: Capacity) -> Self {
		Self { policy: self.policy, capacity }
	}

	#[must_use]
	/// # Policy.
	pub const fn policy(&self) -> Policy { self.policy }

	#[must_use]
	/// # Capacity.
	pub const fn capacity(&self) -> Capacity { self.capacity }

	/// # Sanitize.
	///
	/// Sanitize the node's descendants in place.
	///
	/// ## Errors
	///
	/// Returns an error if a removal collection overflows or memory cannot be
	/// allocated. Either way, the tree is left exactly as it was.
	pub fn sanitize(&self, root: &Handle) -> Result<(), SanitizeError> {
		self.sanitize_report(root).map(|_| ())
	}

	/// # Sanitize (With Report).
	///
	/// Same as `Sanitizer::sanitize`, but returns counts of what was removed.
	///
	/// Every fragment (the root and the contents of each `<template>`, however
	/// deeply nested) is collected before any of them are changed.
	///
	/// ## Errors
	///
	/// Returns an error if a removal collection overflows or memory cannot be
	/// allocated. Either way, the tree is left exactly as it was.
	pub fn sanitize_report(&self, root: &Handle) -> Result<Report, SanitizeError> {
		let Some(opts) = self.policy.options() else { return Ok(Report::default()); };

		// Collect.
		let mut pending: Vec<Handle> = vec![Rc::clone(root)];
		let mut collected: Vec<(Handle, RemovalSet)> = Vec::new();
		while let Some(fragment) = pending.pop() {
			let removals = Collector::new(opts, self.capacity).collect(&fragment)?;
			for template in removals.templates() {
				if let Some(contents) = template.template_contents() {
					pending.try_reserve(1)?;
					pending.push(contents);
				}
			}
			collected.try_reserve(1)?;
			collected.push((fragment, removals));
		}

		// Apply.
		let mut report = Report::default();
		for (fragment, removals) in collected { report += removals.apply(&fragment); }

		debug!(
			policy = self.policy.as_str(),
			nodes = report.nodes,
			attributes = report.attributes,
			templates = report.templates,
			"Sanitized.",
		);

		Ok(report)
	}
}



/// # Sanitize.
///
/// Sanitize the node's descendants in place according to the policy, using
/// the default capacities.
///
/// ## Examples
///
/// ```
/// use htmlsan::{Policy, Tree};
///
/// let tree = Tree::parse_fragment(b"<svg><script>bad()</script><circle r=\"1\"/></svg>")
///     .unwrap();
/// htmlsan::sanitize(tree.root(), Policy::Strict).unwrap();
/// assert_eq!(tree.serialize(), "<svg><circle r=\"1\"/></svg>");
/// ```
///
/// ## Errors
///
/// Returns an error if a removal collection overflows or memory cannot be
/// allocated. Either way, the tree is left exactly as it was.
pub fn sanitize(root: &Handle, policy: Policy) -> Result<(), SanitizeError> {
	Sanitizer::new(policy).sanitize(root)
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::Tree;

	#[test]
	fn t_options() {
		let opts = SanitizeOptions::new();
		assert!(opts.is_empty());
		assert!(! opts.skip_comments());

		let opts = opts.with_skip_comments(true).with_remove_styles(true);
		assert!(opts.skip_comments());
		assert!(opts.remove_styles());
		assert!(! opts.remove_scripts());
		assert!(! opts.with_skip_comments(false).skip_comments());

		// Presets.
		let strict = SanitizeOptions::STRICT;
		assert!(strict.skip_comments());
		assert!(strict.remove_scripts());
		assert!(strict.remove_styles());
		assert!(strict.strict_uri_validation());
		assert!(! strict.allow_custom_elements());
		assert_eq!(SanitizeOptions::PERMISSIVE, strict.with_allow_custom_elements(true));
		assert_eq!(
			SanitizeOptions::MINIMUM,
			SanitizeOptions::new().with_allow_custom_elements(true),
		);
	}

	#[test]
	fn t_policy() {
		assert_eq!(Policy::default(), Policy::Strict);
		assert_eq!(Policy::None.options(), None);
		assert_eq!(Policy::Strict.options(), Some(SanitizeOptions::STRICT));
		let custom = SanitizeOptions::new().with_remove_scripts(true);
		assert_eq!(Policy::from(custom).options(), Some(custom));
	}

	#[test]
	fn t_none() {
		let raw = "<!-- hi --><script>x()</script><p onclick=\"x()\">Hi</p>";
		let tree = Tree::parse_fragment(raw.as_bytes()).expect("Parse failed.");
		let report = Sanitizer::new(Policy::None)
			.sanitize_report(tree.root())
			.expect("Sanitize failed.");
		assert!(report.is_empty());
		assert_eq!(tree.serialize(), raw);
	}

	#[test]
	fn t_report() {
		let tree = Tree::parse_fragment(
			b"<!-- a --><div onclick=\"x()\" style=\"color: red\"><object></object></div><template><script>x()</script></template>"
		).expect("Parse failed.");
		let report = Sanitizer::new(Policy::Strict)
			.sanitize_report(tree.root())
			.expect("Sanitize failed.");
		assert_eq!(report, Report::new(3, 2, 1));
		assert_eq!(tree.serialize(), "<div></div><template></template>");
	}

	#[test]
	fn t_custom_policy() {
		// Keep the comments, lose the scripts.
		let opts = SanitizeOptions::new().with_remove_scripts(true);
		let tree = Tree::parse_fragment(b"<!--a--><script>x()</script><style>p {}</style>")
			.expect("Parse failed.");
		sanitize(tree.root(), Policy::Custom(opts)).expect("Sanitize failed.");
		assert_eq!(tree.serialize(), "<!--a--><style>p {}</style>");
	}
}
