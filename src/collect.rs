/*!
# HTMLSan: Collection

Sanitization happens in two passes: a read-only walk through the tree to
figure out what needs to go, then the actual removal. This module handles
the first part.
*/

use crate::{
	Collection,
	Context,
	ContextTracker,
	Handle,
	Node,
	NodeInner,
	policy,
	Report,
	SanitizeError,
	SanitizeOptions,
	scan::{
		self,
		Reason,
	},
	Tag,
	Walk,
};
use html5ever::QualName;
use indexmap::IndexMap;
use std::{
	cell::RefCell,
	hash::Hash,
	rc::Rc,
};
use tracing::{
	trace,
	warn,
};



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Node Identity.
///
/// Positions shift once removal begins, so nodes are tracked by address
/// instead. The `RemovalSet` holds a handle to each, so the address cannot
/// be reused while the key is alive.
struct NodeKey(*const Node);

impl NodeKey {
	#[must_use]
	/// # New.
	fn new(handle: &Handle) -> Self { Self(Rc::as_ptr(handle)) }
}



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Removal Capacity.
///
/// The maximum number of entries each removal collection may hold for a
/// given fragment. Running out is an error; nothing is silently skipped.
pub struct Capacity {
	/// # Nodes.
	nodes: usize,

	/// # Attributes.
	attributes: usize,

	/// # Templates.
	templates: usize,
}

impl Default for Capacity {
	#[inline]
	fn default() -> Self { Self::DEFAULT }
}

impl Capacity {
	/// # Default.
	pub const DEFAULT: Self = Self::new(65_536, 65_536, 1024);

	#[must_use]
	/// # New.
	pub const fn new(nodes: usize, attributes: usize, templates: usize) -> Self {
		Self { nodes, attributes, templates }
	}

	#[must_use]
	/// # Nodes.
	pub const fn nodes(&self) -> usize { self.nodes }

	#[must_use]
	/// # Attributes.
	pub const fn attributes(&self) -> usize { self.attributes }

	#[must_use]
	/// # Templates.
	pub const fn templates(&self) -> usize { self.templates }
}



#[derive(Debug)]
/// # Removal Set.
///
/// Everything marked for removal (or further processing) during a single
/// walk of a single fragment.
pub(crate) struct RemovalSet {
	/// # Limits.
	capacity: Capacity,

	/// # Nodes to Detach.
	nodes: IndexMap<NodeKey, Handle>,

	/// # Attributes to Remove.
	attrs: IndexMap<(NodeKey, QualName), Handle>,

	/// # Templates to Sanitize.
	templates: IndexMap<NodeKey, Handle>,
}

impl RemovalSet {
	#[must_use]
	/// # New.
	fn new(capacity: Capacity) -> Self {
		Self {
			capacity,
			nodes: IndexMap::new(),
			attrs: IndexMap::new(),
			templates: IndexMap::new(),
		}
	}

	/// # Mark Node.
	fn remove_node(&mut self, handle: &Handle) -> Result<(), SanitizeError> {
		insert(&mut self.nodes, NodeKey::new(handle), handle, self.capacity.nodes, Collection::Nodes)
	}

	/// # Mark Attribute.
	fn remove_attr(&mut self, handle: &Handle, key: &QualName) -> Result<(), SanitizeError> {
		insert(
			&mut self.attrs,
			(NodeKey::new(handle), key.clone()),
			handle,
			self.capacity.attributes,
			Collection::Attributes,
		)
	}

	/// # Queue Template.
	fn queue_template(&mut self, handle: &Handle) -> Result<(), SanitizeError> {
		insert(
			&mut self.templates,
			NodeKey::new(handle),
			handle,
			self.capacity.templates,
			Collection::Templates,
		)
	}

	/// # Queued Templates.
	pub(crate) fn templates(&self) -> impl Iterator<Item=&Handle> {
		self.templates.values()
	}

	/// # Apply.
	///
	/// Remove the marked attributes, then detach the marked nodes.
	pub(crate) fn apply(self, root: &Handle) -> Report {
		let mut attributes = 0;
		for ((_, key), handle) in &self.attrs {
			if handle.remove_attr(key) { attributes += 1; }
		}

		let nodes =
			if self.nodes.is_empty() { 0 }
			else { root.prune(|h| self.nodes.contains_key(&NodeKey::new(h))) };

		Report::new(nodes, attributes, self.templates.len())
	}
}



#[derive(Debug)]
/// # Collector.
///
/// This walks a fragment, working out what needs to go.
pub(crate) struct Collector {
	/// # Options.
	opts: SanitizeOptions,

	/// # Context.
	context: ContextTracker,

	/// # Removals.
	removals: RemovalSet,
}

impl Collector {
	#[must_use]
	/// # New.
	pub(crate) fn new(opts: SanitizeOptions, capacity: Capacity) -> Self {
		Self {
			opts,
			context: ContextTracker::default(),
			removals: RemovalSet::new(capacity),
		}
	}

	/// # Collect.
	///
	/// Walk the root's descendants once, returning everything that needs
	/// removing. The tree itself is not modified.
	///
	/// ## Errors
	///
	/// Returns an error if a collection overflows or cannot be allocated.
	pub(crate) fn collect(mut self, root: &Handle) -> Result<RemovalSet, SanitizeError> {
		let mut error = None;
		root.walk(|handle, depth| match self.visit(handle, depth) {
			Ok(()) => Walk::Continue,
			Err(e) => {
				error.replace(e);
				Walk::Stop
			},
		});

		if let Some(e) = error { Err(e) }
		else { Ok(self.removals) }
	}

	/// # Visit Node.
	fn visit(&mut self, handle: &Handle, depth: usize) -> Result<(), SanitizeError> {
		let ctx = self.context.visit(depth);
		match handle.inner {
			NodeInner::Element { ref name, ref attrs, .. } =>
				self.visit_element(handle, depth, name, attrs),
			NodeInner::Comment { .. } if self.opts.skip_comments() => {
				trace!(context = ctx.as_str(), "Removing comment.");
				self.removals.remove_node(handle)
			},
			_ => Ok(()),
		}
	}

	/// # Visit Element.
	fn visit_element(
		&mut self,
		handle: &Handle,
		depth: usize,
		name: &QualName,
		attrs: &RefCell<crate::Attributes>,
	) -> Result<(), SanitizeError> {
		let local: &str = name.local.as_ref();

		// Only HTML templates have a content fragment; any other "template"
		// is just an unknown element.
		let tag = Tag::classify(local).filter(|t|
			! matches!(t, Tag::Template) || handle.template_contents().is_some()
		);

		// Templates get their own attributes checked here, their contents
		// later.
		if matches!(tag, Some(Tag::Template)) {
			self.context.enter(depth, tag)?;
			self.scan_standard(handle, Tag::Template, attrs)?;
			return self.removals.queue_template(handle);
		}

		// Some things are removed outright.
		if let Some(t) = tag && self.is_doomed(t) {
			return self.remove_node(handle, local, self.context.current(), "forbidden");
		}

		let ctx = self.context.enter(depth, tag)?;
		if ctx.is_svg() { return self.visit_svg(handle, tag, local, attrs); }

		match tag.and_then(policy::lookup) {
			Some(p) =>
				if matches!(p.tag(), Tag::Iframe) && ! scan::iframe_ok(handle) {
					self.remove_node(handle, local, ctx, "unsandboxed frame")
				}
				else { self.scan_standard(handle, p.tag(), attrs) },
			None =>
				if self.opts.allow_custom_elements() && crate::is_custom_element(local) {
					self.scan_custom(handle, local, attrs)
				}
				else { self.remove_node(handle, local, ctx, "not allowed") },
		}
	}

	/// # Visit SVG Element.
	fn visit_svg(
		&mut self,
		handle: &Handle,
		tag: Option<Tag>,
		local: &str,
		attrs: &RefCell<crate::Attributes>,
	) -> Result<(), SanitizeError> {
		let Some(tag) = tag.filter(|t| ! is_svg_denied(*t) && policy::lookup(*t).is_some())
		else { return self.remove_node(handle, local, Context::Svg, "not allowed"); };

		for (key, value) in attrs.borrow().iter() {
			if let Some(reason) = scan::svg(key.local.as_ref(), value) {
				self.remove_attr(handle, tag.as_str(), key, reason)?;
			}
		}

		Ok(())
	}

	/// # Scan Standard Element.
	fn scan_standard(&mut self, handle: &Handle, tag: Tag, attrs: &RefCell<crate::Attributes>)
	-> Result<(), SanitizeError> {
		for (key, value) in attrs.borrow().iter() {
			if let Some(reason) = scan::standard(tag, key.local.as_ref(), value, self.opts) {
				self.remove_attr(handle, tag.as_str(), key, reason)?;
			}
		}

		Ok(())
	}

	/// # Scan Custom Element.
	///
	/// Unreadable attributes are logged and skipped rather than treated as
	/// fatal.
	fn scan_custom(&mut self, handle: &Handle, local: &str, attrs: &RefCell<crate::Attributes>)
	-> Result<(), SanitizeError> {
		let Ok(attrs) = attrs.try_borrow() else {
			warn!(tag = local, "Unable to read custom element attributes; skipping.");
			return Ok(());
		};

		for (key, value) in attrs.iter() {
			if let Some(reason) = scan::custom(key.local.as_ref(), value, self.opts) {
				self.remove_attr(handle, local, key, reason)?;
			}
		}

		Ok(())
	}

	#[must_use]
	/// # Always Remove?
	const fn is_doomed(&self, tag: Tag) -> bool {
		match tag {
			Tag::Object | Tag::Embed => true,
			Tag::Script => self.opts.remove_scripts(),
			Tag::Style => self.opts.remove_styles(),
			_ => false,
		}
	}

	/// # Mark Node.
	fn remove_node(&mut self, handle: &Handle, tag: &str, ctx: Context, why: &'static str)
	-> Result<(), SanitizeError> {
		trace!(tag, context = ctx.as_str(), why, "Removing element.");
		self.removals.remove_node(handle)
	}

	/// # Mark Attribute.
	fn remove_attr(&mut self, handle: &Handle, tag: &str, key: &QualName, reason: Reason)
	-> Result<(), SanitizeError> {
		trace!(
			tag,
			attr = key.local.as_ref(),
			reason = reason.as_str(),
			context = self.context.current().as_str(),
			"Removing attribute.",
		);
		self.removals.remove_attr(handle, key)
	}
}



#[must_use]
/// # Is Denied SVG Element?
///
/// These can run script or rewrite attributes on the fly, so are never
/// allowed inside an `<svg>`.
const fn is_svg_denied(tag: Tag) -> bool {
	matches!(
		tag,
		Tag::Script | Tag::ForeignObject | Tag::Animate | Tag::AnimateTransform | Tag::Set
	)
}

/// # Insert Unique.
///
/// Add an entry to one of the removal collections unless it is already
/// there, enforcing the collection's capacity.
fn insert<K: Eq + Hash>(
	map: &mut IndexMap<K, Handle>,
	key: K,
	handle: &Handle,
	cap: usize,
	kind: Collection,
) -> Result<(), SanitizeError> {
	if map.contains_key(&key) { return Ok(()); }
	if cap <= map.len() { return Err(SanitizeError::CapacityExceeded(kind)); }
	map.try_reserve(1)?;
	map.insert(key, Rc::clone(handle));
	Ok(())
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::Tree;

	/// # Collect a Fragment.
	fn collect(raw: &str, opts: SanitizeOptions, capacity: Capacity)
	-> (Tree, Result<RemovalSet, SanitizeError>) {
		let tree = Tree::parse_fragment(raw.as_bytes()).expect("Parse failed.");
		let res = Collector::new(opts, capacity).collect(tree.root());
		(tree, res)
	}

	/// # Marked Node Names.
	fn marked(set: &RemovalSet) -> Vec<String> {
		set.nodes.values()
			.map(|h| h.name().map_or_else(|| String::from("#"), |n| n.local.to_string()))
			.collect()
	}

	#[test]
	fn t_collect() {
		let (tree, res) = collect(
			"<!--x--><p onclick=\"x()\" class=\"ok\">Hi</p><object></object><my-el onclick=\"x()\"></my-el><template><b>x</b></template>",
			SanitizeOptions::STRICT,
			Capacity::DEFAULT,
		);
		let set = res.expect("Collect failed.");

		assert_eq!(marked(&set), ["#", "object", "my-el"]);
		assert_eq!(set.attrs.len(), 1);
		assert_eq!(set.templates().count(), 1);

		// Nothing should have changed yet.
		assert_eq!(
			tree.serialize(),
			"<!--x--><p onclick=\"x()\" class=\"ok\">Hi</p><object></object><my-el onclick=\"x()\"></my-el><template><b>x</b></template>",
		);

		// Now it should.
		let report = set.apply(tree.root());
		assert_eq!(report, Report::new(3, 1, 1));
		assert_eq!(tree.serialize(), "<p class=\"ok\">Hi</p><template><b>x</b></template>");
	}

	#[test]
	fn t_collect_svg() {
		let (tree, res) = collect(
			"<svg onload=\"x()\"><foreignObject><p>x</p></foreignObject><a xlink:href=\"javascript:x()\"><circle r=\"1\"/></a><my-el></my-el></svg>",
			SanitizeOptions::MINIMUM,
			Capacity::DEFAULT,
		);
		let set = res.expect("Collect failed.");

		// The custom element is allowed generally, but not in an SVG.
		assert_eq!(marked(&set), ["foreignObject", "my-el"]);
		assert_eq!(set.attrs.len(), 2);

		set.apply(tree.root());
		assert_eq!(tree.serialize(), "<svg><a><circle r=\"1\"/></a></svg>");
	}

	#[test]
	fn t_collect_template() {
		let (tree, res) = collect(
			"<template onclick=\"x()\"><b>x</b></template><svg><template><script>x()</script></template></svg>",
			SanitizeOptions::MINIMUM,
			Capacity::DEFAULT,
		);
		let set = res.expect("Collect failed.");

		// Only the real template is queued; the SVG one is an ordinary
		// (unknown) element, and its script is still an SVG script.
		assert_eq!(set.templates().count(), 1);
		assert_eq!(marked(&set), ["template", "script"]);
		assert_eq!(set.attrs.len(), 1);

		set.apply(tree.root());
		assert_eq!(tree.serialize(), "<template><b>x</b></template><svg></svg>");
	}

	#[test]
	fn t_collect_context() {
		// The SVG is the last child of the div, but its context must not
		// leak to the following paragraph.
		let (tree, res) = collect(
			"<div><svg><rect/></svg></div><p title=\"ok\" onclick=\"x()\">Hi</p>",
			SanitizeOptions::STRICT,
			Capacity::DEFAULT,
		);
		let set = res.expect("Collect failed.");
		assert!(set.nodes.is_empty());

		// Both attributes would survive the SVG rules, but onclick fails the
		// allow-list.
		set.apply(tree.root());
		assert_eq!(tree.serialize(), "<div><svg><rect/></svg></div><p title=\"ok\">Hi</p>");
	}

	#[test]
	fn t_collect_iframe() {
		let (tree, res) = collect(
			"<iframe src=\"https://x\" sandbox onload=\"x()\"></iframe><iframe src=\"https://x\"></iframe>",
			SanitizeOptions::STRICT,
			Capacity::DEFAULT,
		);
		let set = res.expect("Collect failed.");
		assert_eq!(marked(&set), ["iframe"]);
		set.apply(tree.root());
		assert_eq!(tree.serialize(), "<iframe src=\"https://x\" sandbox></iframe>");
	}

	#[test]
	fn t_capacity() {
		let raw = "<p onclick=\"a()\" onmouseover=\"b()\"></p><object></object><object></object>";

		let (_, res) = collect(raw, SanitizeOptions::STRICT, Capacity::new(1, 10, 10));
		assert_eq!(res.err(), Some(SanitizeError::CapacityExceeded(Collection::Nodes)));

		let (_, res) = collect(raw, SanitizeOptions::STRICT, Capacity::new(10, 1, 10));
		assert_eq!(res.err(), Some(SanitizeError::CapacityExceeded(Collection::Attributes)));

		let (_, res) = collect(
			"<template></template><template></template>",
			SanitizeOptions::STRICT,
			Capacity::new(10, 10, 1),
		);
		assert_eq!(res.err(), Some(SanitizeError::CapacityExceeded(Collection::Templates)));

		// Exactly enough is fine.
		let (_, res) = collect(raw, SanitizeOptions::STRICT, Capacity::new(2, 2, 0));
		assert!(res.is_ok());
	}

	#[test]
	fn t_custom_borrowed() {
		let tree = Tree::parse_fragment(b"<my-el onclick=\"x()\"></my-el><p onclick=\"x()\"></p>")
			.expect("Parse failed.");
		let custom = tree.root().children.borrow()[0].clone();
		let NodeInner::Element { ref attrs, .. } = custom.inner else {
			panic!("Expected an element.");
		};

		// Hold the attributes hostage; the element should be skipped, but the
		// rest of the tree still processed.
		let _guard = attrs.borrow_mut();
		let set = Collector::new(SanitizeOptions::PERMISSIVE, Capacity::DEFAULT)
			.collect(tree.root())
			.expect("Collect failed.");
		assert_eq!(set.attrs.len(), 1);
		assert!(set.nodes.is_empty());
	}
}
