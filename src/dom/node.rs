/*!
# HTMLSan: DOM Node.
*/

use html5ever::{
	local_name,
	ns,
	QualName,
};
use indexmap::IndexMap;
use std::{
	cell::RefCell,
	rc::Rc,
};
use tendril::StrTendril;



/// # Reference-Counted Node.
///
/// Nodes are self-referential, so generally need to be wrapped in `Rc`.
pub type Handle = Rc<Node>;

/// # Element Attributes.
///
/// Attributes are kept in source order.
pub type Attributes = IndexMap<QualName, StrTendril>;



#[derive(Debug)]
/// # DOM Node.
///
/// This struct holds tag/attribute/content details for a node and its
/// children. At the root level, it's the whole damn tree.
///
/// In practice, most references hold `Handle` instead, which is an `Rc`-
/// wrapped version of `Node`.
pub struct Node {
	/// # Node Kind/Data.
	pub inner: NodeInner,

	/// # Child Node(s).
	pub children: RefCell<Vec<Handle>>,
}

impl Node {
	#[must_use]
	/// # New.
	pub fn new(inner: NodeInner) -> Handle {
		Rc::new(Self {
			inner,
			children: RefCell::new(Vec::new()),
		})
	}

	#[must_use]
	/// # New Element.
	///
	/// `<template>` elements are given an (empty) content fragment.
	pub fn element<I>(name: QualName, attrs: I) -> Handle
	where I: IntoIterator<Item=(QualName, StrTendril)> {
		let template =
			if
				matches!(name.ns, ns!(html)) &&
				matches!(name.local, local_name!("template"))
			{
				Some(Self::new(NodeInner::Fragment))
			}
			else { None };

		Self::new(NodeInner::Element {
			name,
			attrs: RefCell::new(attrs.into_iter().collect()),
			template,
		})
	}

	#[must_use]
	/// # New Text.
	pub fn text<S: Into<StrTendril>>(contents: S) -> Handle {
		Self::new(NodeInner::Text { contents: RefCell::new(contents.into()) })
	}

	#[must_use]
	/// # New Comment.
	pub fn comment<S: Into<StrTendril>>(contents: S) -> Handle {
		Self::new(NodeInner::Comment { contents: contents.into() })
	}

	/// # Append Child.
	pub fn append(&self, child: Handle) { self.children.borrow_mut().push(child); }

	#[must_use]
	/// # Element Name.
	pub const fn name(&self) -> Option<&QualName> {
		if let NodeInner::Element { ref name, .. } = self.inner { Some(name) }
		else { None }
	}

	#[must_use]
	/// # Template Contents.
	///
	/// Return the content fragment associated with a `<template>` element,
	/// if this is one.
	pub fn template_contents(&self) -> Option<Handle> {
		if let NodeInner::Element { template: Some(ref t), .. } = self.inner {
			Some(Rc::clone(t))
		}
		else { None }
	}

	#[must_use]
	/// # Get Attribute (by Local Name).
	pub fn attr(&self, local: &str) -> Option<StrTendril> {
		if let NodeInner::Element { ref attrs, .. } = self.inner {
			attrs.borrow()
				.iter()
				.find_map(|(k, v)| (k.local.as_ref() == local).then(|| v.clone()))
		}
		else { None }
	}

	/// # Remove Attribute.
	///
	/// Returns `true` if the attribute existed.
	pub fn remove_attr(&self, key: &QualName) -> bool {
		if let NodeInner::Element { ref attrs, .. } = self.inner {
			attrs.borrow_mut().shift_remove(key).is_some()
		}
		else { false }
	}

	/// # Walk Descendants.
	///
	/// Visit each of the node's descendants (but not the node itself) in
	/// depth-first pre-order, passing each to the callback along with its
	/// depth (direct children are at depth one).
	///
	/// The walk ends early if the callback returns `Walk::Stop`.
	///
	/// Note: template contents are separate fragments, not children, so are
	/// not visited.
	pub fn walk<F>(&self, mut cb: F) -> Walk
	where F: FnMut(&Handle, usize) -> Walk {
		let mut stack: Vec<(Handle, usize)> = self.children.borrow()
			.iter()
			.rev()
			.map(|h| (Rc::clone(h), 1))
			.collect();

		while let Some((handle, depth)) = stack.pop() {
			if matches!(cb(&handle, depth), Walk::Stop) { return Walk::Stop; }

			let children = handle.children.borrow();
			stack.reserve(children.len());
			for child in children.iter().rev() {
				stack.push((Rc::clone(child), depth + 1));
			}
		}

		Walk::Continue
	}

	/// # Prune Descendants.
	///
	/// Detach every descendant for which the callback returns `true`, along
	/// with its own descendants, returning the number of (directly) matching
	/// nodes removed. Detached nodes are destroyed as soon as the last
	/// outstanding handle goes away.
	pub fn prune<F>(&self, mut doomed: F) -> usize
	where F: FnMut(&Handle) -> bool {
		let mut removed = 0;
		let mut keep = |h: &Handle| if doomed(h) {
			removed += 1;
			false
		}
		else { true };

		self.children.borrow_mut().retain(&mut keep);
		let mut stack: Vec<Handle> = self.children.borrow().iter().map(Rc::clone).collect();
		while let Some(handle) = stack.pop() {
			handle.children.borrow_mut().retain(&mut keep);
			stack.extend(handle.children.borrow().iter().map(Rc::clone));
		}

		removed
	}
}



#[derive(Debug)]
/// # Node Kind/Data.
///
/// This enum holds the details for a given node, differentiated by kind.
pub enum NodeInner {
	/// # The Root Node.
	Document,

	/// # Template Contents.
	Fragment,

	/// # HTML Element.
	Element {
		/// # Tag Name.
		name: QualName,

		/// # Tag Attributes.
		attrs: RefCell<Attributes>,

		/// # Template Contents.
		///
		/// This is only used by `<template>` elements, whose content is
		/// parsed into a separate fragment rather than as children.
		template: Option<Handle>,
	},

	/// # Text.
	Text {
		/// # Content.
		contents: RefCell<StrTendril>
	},

	/// # Comment.
	Comment {
		/// # Content.
		contents: StrTendril,
	},

	/// # Processing Instructions.
	///
	/// We don't support these node types, but the `TreeSink` API requires we
	/// "create" them anyway.
	Ignored,
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Walk Decision.
pub enum Walk {
	/// # Keep Going.
	Continue,

	/// # Stop Walking.
	Stop,
}
