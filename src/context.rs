/*!
# HTMLSan: Traversal Context
*/

use crate::{
	SanitizeError,
	Tag,
};



#[derive(Debug, Clone, Copy, Default, Eq, Hash, PartialEq)]
/// # Special Ancestor.
///
/// This is the nearest "special" ancestor of the node being visited, if any.
pub enum Context {
	#[default]
	/// # Regular HTML.
	Html,

	/// # Inside `<svg>`.
	Svg,

	/// # Inside `<code>`.
	Code,

	/// # Inside `<pre>`.
	Pre,

	/// # Inside `<template>`.
	Template,
}

impl Context {
	#[must_use]
	/// # From Tag.
	///
	/// Return the context a tag establishes for its descendants, if any.
	pub const fn from_tag(tag: Tag) -> Option<Self> {
		match tag {
			Tag::Svg => Some(Self::Svg),
			Tag::Code => Some(Self::Code),
			Tag::Pre => Some(Self::Pre),
			Tag::Template => Some(Self::Template),
			_ => None,
		}
	}

	#[must_use]
	/// # As Str.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Html => "html",
			Self::Svg => "svg",
			Self::Code => "code",
			Self::Pre => "pre",
			Self::Template => "template",
		}
	}

	#[must_use]
	/// # Is SVG?
	pub const fn is_svg(self) -> bool { matches!(self, Self::Svg) }
}



#[derive(Debug, Default)]
/// # Context Tracker.
///
/// This follows a pre-order walk, keeping one entry per open special
/// ancestor along with the depth it was found at. Before each node is
/// processed, `visit` drops the entries whose subtrees have ended, so the
/// context never outlives the element that set it.
pub(crate) struct ContextTracker {
	/// # Open Ancestors.
	stack: Vec<(usize, Context)>,
}

impl ContextTracker {
	#[must_use]
	/// # Current Context.
	pub(crate) fn current(&self) -> Context {
		self.stack.last().map_or(Context::Html, |(_, c)| *c)
	}

	/// # Visit Node.
	///
	/// Call this for every node in pre-order, before anything else. Entries
	/// at or below `depth` belong to (former) siblings or their descendants
	/// and no longer apply.
	pub(crate) fn visit(&mut self, depth: usize) -> Context {
		while self.stack.last().is_some_and(|(d, _)| depth <= *d) {
			self.stack.pop();
		}
		self.current()
	}

	/// # Enter Element.
	///
	/// Update the context for an element at `depth`, returning the new
	/// value. Tags without a context of their own leave it as-is.
	///
	/// ## Errors
	///
	/// Returns an error if the stack cannot grow.
	pub(crate) fn enter(&mut self, depth: usize, tag: Option<Tag>)
	-> Result<Context, SanitizeError> {
		if let Some(ctx) = tag.and_then(Context::from_tag) {
			self.stack.try_reserve(1)?;
			self.stack.push((depth, ctx));
			Ok(ctx)
		}
		else { Ok(self.current()) }
	}
}
