/*!
# HTMLSan: DOM.
*/

pub(super) mod node;

use crate::{
	Handle,
	Node,
	NodeInner,
	Policy,
	SanitizeError,
};
use html5ever::{
	Attribute,
	expanded_name,
	ns,
	local_name,
	ExpandedName,
	interface::{
		ElementFlags,
		NodeOrText,
		QuirksMode,
		TreeSink,
	},
	ParseOpts,
	QualName,
	tendril::TendrilSink,
};
use indexmap::IndexMap;
use std::{
	borrow::Cow,
	cell::RefCell,
	io::Cursor,
	rc::Rc,
};
use tendril::StrTendril;



/// # Invalid Expanded Name.
///
/// This is used to avoid unfriendly panics in inapplicable `TreeSink` member
/// methods.
static NOOP_NAME: ExpandedName = expanded_name!("", "abbr");

/// # Fragment Scaffold.
///
/// Fragments are parsed as the contents of an otherwise empty `<body>`.
const FRAGMENT_OPEN: &[u8] = b"<!DOCTYPE html><html><head></head><body>";



#[derive(Debug, Clone)]
/// # HTML DOM Tree.
///
/// This holds a parsed document (or fragment) and is where the ugly
/// `TreeSink` trait gets implemented. `Node` (or `Handle`) is
/// self-referential, so is more or less its own tree. Haha.
pub struct Tree {
	/// # Document Root.
	root: Handle,

	/// # Fragment Root.
	///
	/// For fragments, this is the `<body>` holding the parsed content.
	fragment: Option<Handle>,

	/// # Error.
	error: RefCell<Option<SanitizeError>>,
}

impl Default for Tree {
	#[inline]
	/// # Default: Empty Root Document.
	fn default() -> Self {
		Self {
			root: Node::new(NodeInner::Document),
			fragment: None,
			error: RefCell::new(None),
		}
	}
}

impl TreeSink for Tree {
	type Handle = Handle;
	type Output = Self;
	type ElemName<'a> = ExpandedName<'a>
	where Self: 'a;

	/// # Add Attributes if Missing.
	///
	/// If `target` is an element, attach the new attributes to it, except
	/// when they'd collide with existing entries.
	fn add_attrs_if_missing(&self, target: &Handle, new: Vec<Attribute>) {
		use indexmap::map::Entry;

		if let NodeInner::Element { ref attrs, .. } = target.inner {
			let attrs: &mut IndexMap<_, _> = &mut attrs.borrow_mut();

			for Attribute { name, value } in new {
				if let Entry::Vacant(e) = attrs.entry(name) { e.insert(value); }
			}
		}
	}

	/// # Append Node.
	///
	/// Attach a text, comment, or element child node to an existing (parent)
	/// node.
	fn append(&self, parent: &Handle, child: NodeOrText<Handle>) {
		match child {
			// Text nodes can always be added.
			NodeOrText::AppendText(v) =>
				// If the last node was text, merge them.
				if
					let Some(last) = parent.children.borrow().last() &&
					let NodeInner::Text { ref contents } = last.inner
				{
					contents.borrow_mut().push_tendril(&v);
				}
				// Otherwise add it anew.
				else {
					parent.children.borrow_mut().push(Node::new(NodeInner::Text {
						contents: RefCell::new(v)
					}));
				},

			NodeOrText::AppendNode(v) => if is_appendable(&v) {
				parent.children.borrow_mut().push(v);
			},
		}
	}

	/// # Append Based on Parent Node.
	///
	/// Insert `child` before `sibling` if `sibling` has a parent, otherwise
	/// append it to `last_parent`.
	fn append_based_on_parent_node(
		&self,
		sibling: &Handle,
		last_parent: &Handle,
		child: NodeOrText<Self::Handle>,
	) {
		if self.find_node_parent_and_index(sibling).is_some() {
			self.append_before_sibling(sibling, child);
		}
		else { self.append(last_parent, child); }
	}

	/// # Append Before Sibling.
	fn append_before_sibling(&self, sibling: &Handle, child: NodeOrText<Handle>) {
		let Some((parent, pos)) = self.find_node_parent_and_index(sibling) else {
			self.error.borrow_mut().replace(SanitizeError::Parse);
			return;
		};

		// Unwrap the children.
		let children: &mut Vec<_> = &mut parent.children.borrow_mut();
		if children.len() <= pos {
			self.error.borrow_mut().replace(SanitizeError::Parse);
			return;
		}

		match child {
			NodeOrText::AppendText(v) =>
				// If the previous node was text, merge them.
				if
					pos != 0 &&
					let NodeInner::Text { ref contents } = children[pos - 1].inner
				{
					contents.borrow_mut().push_tendril(&v);
				}
				// Otherwise add it anew.
				else {
					children.insert(pos, Node::new(NodeInner::Text {
						contents: RefCell::new(v)
					}));
				},

			NodeOrText::AppendNode(v) => if is_appendable(&v) {
				children.insert(pos, v);
			},
		}
	}

	/// # Create Comment.
	fn create_comment(&self, text: StrTendril) -> Handle {
		Node::new(NodeInner::Comment { contents: text })
	}

	/// # Create Element.
	///
	/// Create and return a new element node.
	fn create_element(&self, name: QualName, attrs: Vec<Attribute>, flags: ElementFlags)
	-> Handle {
		// Fucking templates. Haha.
		let template =
			if flags.template { Some(Node::new(NodeInner::Fragment)) }
			else { None };

		let inner = NodeInner::Element {
			name,
			attrs: RefCell::new(attrs.into_iter().map(|v| (v.name, v.value)).collect()),
			template,
		};

		Node::new(inner)
	}

	/// # Create Processing Instruction.
	///
	/// Return a generic placeholder node that will be ignored if appended.
	fn create_pi(&self, _target: StrTendril, _data: StrTendril) -> Handle {
		Node::new(NodeInner::Ignored)
	}

	/// # Element Name.
	///
	/// Return an element node's fully qualified name.
	fn elem_name<'a>(&self, target: &'a Handle) -> ExpandedName<'a> {
		if let NodeInner::Element { ref name, .. } = target.inner {
			name.expanded()
		}
		else {
			debug_assert!(false, "BUG: elem_name called on non-element node.");
			self.error.borrow_mut().replace(SanitizeError::Parse);
			NOOP_NAME
		}
	}

	#[inline]
	/// # Finish Parsing.
	fn finish(self) -> Self { self }

	/// # Get Document Root.
	///
	/// Clone and return the root document.
	fn get_document(&self) -> Handle { Rc::clone(&self.root) }

	/// # Get Template Contents.
	///
	/// `<template>` child nodes are parsed into a separate fragment instead
	/// of being attached as children. This method returns a handle for it.
	fn get_template_contents(&self, target: &Handle) -> Handle {
		if let Some(out) = target.template_contents() { return out; }

		debug_assert!(false, "BUG: get_template_contents called on non-template node.");
		self.error.borrow_mut().replace(SanitizeError::Parse);
		Node::new(NodeInner::Ignored)
	}

	/// # Remove From Parent.
	fn remove_from_parent(&self, target: &Handle) {
		if let Some((parent, pos)) = self.find_node_parent_and_index(target) {
			let children: &mut Vec<_> = &mut parent.children.borrow_mut();
			if pos < children.len() { children.remove(pos); }
		}
	}

	/// # Reparent Children.
	///
	/// Drain and append all children from `old_parent` onto `new_parent`.
	fn reparent_children(&self, old_parent: &Handle, new_parent: &Handle) {
		let old_children: &mut Vec<_> = &mut old_parent.children.borrow_mut();
		let new_children: &mut Vec<_> = &mut new_parent.children.borrow_mut();
		new_children.append(old_children);
	}

	/// # Same Node?
	fn same_node(&self, x: &Handle, y: &Handle) -> bool { Rc::ptr_eq(x, y) }

	/// # Append Doctype to Document.
	///
	/// Documents are always serialized as HTML5, so the original doctype
	/// doesn't matter.
	fn append_doctype_to_document(
		&self,
		_name: StrTendril,
		_public_id: StrTendril,
		_system_id: StrTendril,
	) {
		// Noop.
	}

	/// # Is Mathml?
	///
	/// We don't support mathml, so always return false.
	fn is_mathml_annotation_xml_integration_point(&self, _node: &Handle) -> bool {
		false
	}

	/// # Set Parsing Error.
	///
	/// HTML is awfully forgiving; recoverable errors don't concern us.
	fn parse_error(&self, _msg: Cow<'static, str>) {
		// Noop.
	}

	/// # Set Quirks Mode.
	fn set_quirks_mode(&self, _mode: QuirksMode) {
		// Noop.
	}
}

impl Tree {
	/// # Parse Document.
	///
	/// Parse RAW HTML (as bytes) into a proper tree, returning it unless
	/// there's a show-stopping error of some kind.
	///
	/// ## Errors
	///
	/// Returns an error if the document cannot be parsed.
	pub fn parse_document(raw: &[u8]) -> Result<Self, SanitizeError> {
		let dom = html5ever::parse_document(Self::default(), ParseOpts::default())
			.from_utf8()
			.read_from(&mut Cursor::new(raw))
			.map_err(|_| SanitizeError::Parse)?;

		if let Some(e) = dom.error.borrow_mut().take() {
			return Err(e);
		}

		Ok(dom)
	}

	/// # Parse Fragment.
	///
	/// Parse RAW HTML (as bytes) as if it were the contents of an otherwise
	/// empty `<body>`. The body then serves as the root for sanitization and
	/// serialization.
	///
	/// ## Errors
	///
	/// Returns an error if the fragment cannot be parsed.
	pub fn parse_fragment(raw: &[u8]) -> Result<Self, SanitizeError> {
		let mut scaffold = Vec::with_capacity(FRAGMENT_OPEN.len() + raw.len());
		scaffold.extend_from_slice(FRAGMENT_OPEN);
		scaffold.extend_from_slice(raw);

		let mut dom = Self::parse_document(&scaffold)?;
		let body = dom.find_body().ok_or(SanitizeError::Parse)?;
		dom.fragment.replace(body);
		Ok(dom)
	}

	#[must_use]
	/// # Root.
	///
	/// Return the document node, or for fragments, the `<body>` holding the
	/// content.
	pub fn root(&self) -> &Handle {
		self.fragment.as_ref().unwrap_or(&self.root)
	}

	#[must_use]
	/// # Is Fragment?
	pub const fn is_fragment(&self) -> bool { self.fragment.is_some() }

	/// # Sanitize.
	///
	/// Sanitize the tree in place according to the policy.
	///
	/// ## Errors
	///
	/// Returns an error if sanitization fails, in which case the tree is left
	/// as it was.
	pub fn sanitize(&self, policy: Policy) -> Result<(), SanitizeError> {
		crate::sanitize(self.root(), policy)
	}

	#[must_use]
	/// # Serialize.
	///
	/// Convert the tree back into an HTML string. For fragments, only the
	/// content is returned.
	pub fn serialize(&self) -> String {
		if let Some(body) = self.fragment.as_ref() {
			crate::ser::serialize_children(body)
		}
		else { crate::ser::serialize(&self.root) }
	}

	#[must_use]
	/// # Find Body.
	fn find_body(&self) -> Option<Handle> {
		/// # Find Child Element.
		fn child(parent: &Handle, local: &html5ever::LocalName) -> Option<Handle> {
			parent.children.borrow()
				.iter()
				.find(|h| h.name().is_some_and(|n|
					matches!(n.ns, ns!(html)) && n.local == *local
				))
				.map(Rc::clone)
		}

		let html = child(&self.root, &local_name!("html"))?;
		child(&html, &local_name!("body"))
	}

	#[must_use]
	/// # Find Node.
	///
	/// Search the tree (template contents included) for `target`,
	/// returning its parent and position in `parent.children` if found.
	///
	/// Note the struct is _not_ optimized for this sort of operation, but
	/// it doesn't come up very often during parsing.
	fn find_node_parent_and_index(&self, target: &Handle) -> Option<(Handle, usize)> {
		/// # Find It.
		fn walk(handle: &Handle, target: &Handle) -> Option<(Handle, usize)> {
			let children = handle.children.borrow();
			if let Some(pos) = children.iter().position(|v| Rc::ptr_eq(v, target)) {
				return Some((Rc::clone(handle), pos));
			}

			// Recurse.
			for child in children.iter() {
				if let Some(out) = walk(child, target) { return Some(out); }
				if
					let Some(contents) = child.template_contents() &&
					let Some(out) = walk(&contents, target)
				{
					return Some(out);
				}
			}

			None
		}

		walk(&self.root, target)
	}
}



/// # Appendable?
///
/// Elements and comments are kept; processing instructions and the like are
/// not.
fn is_appendable(handle: &Handle) -> bool {
	matches!(handle.inner, NodeInner::Element { .. } | NodeInner::Comment { .. })
}



#[cfg(test)]
mod tests {
	use super::*;

	/// # Predictable Test Tree.
	const HTML: &[u8] = b"\
	<html>\
		<head></head>\
		<body>\
			<div>\
				<span></span>\
			</div>\
		</body>\
	</html>";

	/// # Find the Span.
	fn span(tree: &Tree) -> Handle {
		let target = Rc::clone(
			&tree.root.children.borrow()[0]
				.children.borrow()[1]
				.children.borrow()[0]
				.children.borrow()[0]
		);
		let NodeInner::Element { ref name, .. } = target.inner else {
			panic!("Wrong element.");
		};
		assert_eq!(name.local, local_name!("span"));
		target
	}

	#[test]
	fn t_remove_from_parent() {
		let tree = Tree::parse_document(HTML).expect("Tree parse failed.");
		let target = span(&tree);

		// Remove the span from the tree.
		tree.remove_from_parent(&target);

		// The div should have no children now.
		assert!(
			tree.root.children.borrow()[0]
				.children.borrow()[1]
				.children.borrow()[0]
				.children.borrow().is_empty()
		);
	}

	#[test]
	fn t_append_before_sibling() {
		let tree = Tree::parse_document(HTML).expect("Tree parse failed.");
		let target = span(&tree);

		// Let's add a text element before it.
		let new = NodeOrText::AppendText(StrTendril::from("Hello World"));
		tree.append_before_sibling(&target, new);

		// The text should come first, then the span.
		let div = Rc::clone(
			&tree.root.children.borrow()[0]
				.children.borrow()[1]
				.children.borrow()[0]
		);
		let children = div.children.borrow();
		assert_eq!(children.len(), 2);
		assert!(matches!(children[0].inner, NodeInner::Text { .. }));
		assert!(Rc::ptr_eq(&children[1], &target));
	}

	#[test]
	fn t_parse_fragment() {
		let tree = Tree::parse_fragment(b"<style>b{}</style><p>Hello</p><!--hi-->")
			.expect("Fragment parse failed.");
		assert!(tree.is_fragment());

		// Everything should have wound up in the body, in order.
		let root = tree.root();
		assert!(root.name().is_some_and(|n| n.local == local_name!("body")));
		let children = root.children.borrow();
		assert_eq!(children.len(), 3);
		assert!(children[0].name().is_some_and(|n| n.local == local_name!("style")));
		assert!(children[1].name().is_some_and(|n| n.local == local_name!("p")));
		assert!(matches!(children[2].inner, NodeInner::Comment { .. }));
	}

	#[test]
	fn t_parse_template() {
		let tree = Tree::parse_fragment(b"<template><p>Hi</p></template>")
			.expect("Fragment parse failed.");

		let template = Rc::clone(&tree.root().children.borrow()[0]);
		assert!(template.children.borrow().is_empty());

		let contents = template.template_contents().expect("Missing template contents.");
		assert!(matches!(contents.inner, NodeInner::Fragment));
		assert_eq!(contents.children.borrow().len(), 1);

		// Nested nodes inside the template should still be findable.
		let p = Rc::clone(&contents.children.borrow()[0]);
		let (parent, pos) = tree.find_node_parent_and_index(&p).expect("Missing p.");
		assert!(Rc::ptr_eq(&parent, &contents));
		assert_eq!(pos, 0);
	}
}
