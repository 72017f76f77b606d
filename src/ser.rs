/*!
# HTMLSan: Serialization
*/

use crate::{
	Handle,
	NodeInner,
	Tag,
};
use html5ever::{
	local_name,
	ns,
	QualName,
};
use std::rc::Rc;



/// # HTML5 Doctype.
const DOCTYPE: &str = "<!DOCTYPE html>\n";



#[must_use]
/// # Serialize Node.
///
/// Serialize the node (usually a document) and its descendants back into
/// HTML.
///
/// This borrows heavily from `markup5ever_rcdom::SerializableHandle`, but
/// doesn't actually leverage the `Serialize` trait.
pub(crate) fn serialize(handle: &Handle) -> String {
	let mut serializer = Serializer::default();
	serializer.run(Stage::Open(Rc::clone(handle)));
	serializer.writer
}

#[must_use]
/// # Serialize Children.
///
/// Serialize the node's children (but not the node itself) back into
/// HTML. This is the equivalent of `innerHTML`.
pub(crate) fn serialize_children(handle: &Handle) -> String {
	let mut serializer = Serializer::default();
	if let Some(name) = handle.name() {
		serializer.stack.push(ParentTag::new(name, false));
	}
	serializer.run_children(handle);
	serializer.writer
}



#[derive(Debug)]
/// # Serialization Stage.
enum Stage {
	/// # Open Tag.
	Open(Handle),

	/// # Close Tag.
	Close(QualName),
}



#[derive(Debug, Clone, Copy)]
/// # Element Details.
///
/// This struct holds top-level tag details for `Serializer`. It's only
/// really used to be able to track a given object's parent.
struct ParentTag {
	/// # Unescaped Text?
	///
	/// Text nodes are passed through _without_ the usual escaping for
	/// `<script>`, `<style>`, and the other raw-text tags.
	plain_text: bool,

	/// # Self-Closing?
	///
	/// This is `true` for "void" HTML tags, but also for any SVG child tags
	/// that have no children.
	void: bool,
}

impl ParentTag {
	#[must_use]
	/// # New.
	fn new(tag: &QualName, void: bool) -> Self {
		let plain_text =
			matches!(tag.ns, ns!(html)) &&
			Tag::from_qualname(tag).is_some_and(|t|
				t.is_no_escape_content() || matches!(t, Tag::Noscript)
			);

		Self { plain_text, void }
	}
}



#[derive(Debug, Default)]
/// # Serializer.
///
/// This is roughly based on `html5ever::serialize::Serializer`, but doesn't
/// actually implement the trait.
struct Serializer {
	/// # Writer.
	writer: String,

	/// # Stack.
	stack: Vec<ParentTag>,
}

impl Serializer {
	/// # Run.
	fn run(&mut self, first: Stage) {
		let mut queue = vec![first];
		while let Some(op) = queue.pop() {
			match op {
				Stage::Open(handle) => match handle.inner {
					NodeInner::Document => {
						self.writer.push_str(DOCTYPE);
						push_children(&mut queue, &handle);
					},
					NodeInner::Fragment => { push_children(&mut queue, &handle); },
					NodeInner::Element { ref name, ref attrs, ref template } => {
						let children = template.as_ref().unwrap_or(&handle);
						let has_children = ! children.children.borrow().is_empty();
						self.start_elem(name, attrs.borrow().iter(), has_children);
						queue.push(Stage::Close(name.clone()));
						push_children(&mut queue, children);
					},
					NodeInner::Text { ref contents } => self.write_text(&contents.borrow()),
					NodeInner::Comment { ref contents } => {
						self.writer.push_str("<!--");
						self.writer.push_str(contents);
						self.writer.push_str("-->");
					},
					NodeInner::Ignored => {},
				},
				Stage::Close(name) => self.end_elem(&name),
			}
		}
	}

	/// # Run Children.
	fn run_children(&mut self, handle: &Handle) {
		let children = handle.template_contents().unwrap_or_else(|| Rc::clone(handle));
		for child in children.children.borrow().iter() {
			self.run(Stage::Open(Rc::clone(child)));
		}
	}

	#[must_use]
	/// # Parent Element.
	fn parent(&self) -> Option<ParentTag> { self.stack.last().copied() }

	/// # Write Escaped Text Node.
	///
	/// HTML text requires escaping `&`, `<`, and `>`.
	///
	/// This method also converts literal non-breaking space characters to
	/// `&nbsp;` for clarity, since most readers won't make it clear that
	/// it's irregular.
	fn write_esc_text(&mut self, txt: &str) {
		for c in txt.chars() {
			match c {
				'\u{a0}' => { self.writer.push_str("&nbsp;"); },
				'&' =>      { self.writer.push_str("&amp;"); },
				'<' =>      { self.writer.push_str("&lt;"); },
				'>' =>      { self.writer.push_str("&gt;"); },
				_ =>        { self.writer.push(c); },
			}
		}
	}

	/// # Write Escaped Attr.
	///
	/// HTML attributes require escaping of `&` and the wrapping character.
	fn write_esc_attr(&mut self, txt: &str) {
		self.writer.push_str("=\"");
		for c in txt.chars() {
			match c {
				'\u{a0}' => { self.writer.push_str("&nbsp;"); },
				'&' =>      { self.writer.push_str("&amp;"); },
				'"' =>      { self.writer.push_str("&quot;"); },
				_ =>        { self.writer.push(c); },
			}
		}
		self.writer.push('"');
	}

	/// # Write Opening Tag.
	///
	/// Childless SVG elements are self-closed.
	fn start_elem<'a, I>(&mut self, tag: &QualName, attrs: I, has_children: bool)
	where I: Iterator<Item=(&'a QualName, &'a tendril::StrTendril)> {
		// Void parents don't get children.
		if self.parent().is_some_and(|p| p.void) {
			self.stack.push(ParentTag::new(tag, true));
			return;
		}

		// Opening tag.
		self.writer.push('<');
		self.writer.push_str(tag.local.as_ref());

		// Attribute(s).
		for (key, value) in attrs { self.write_attr(tag, key, value); }

		// Finish the tag, and figure out if it's self-closing.
		let void =
			if
				! has_children &&
				matches!(tag.ns, ns!(svg)) &&
				! matches!(tag.local, local_name!("svg"))
			{
				// XML requires />
				self.writer.push_str("/>");
				true
			}
			else {
				self.writer.push('>');
				matches!(tag.ns, ns!(html)) &&
				Tag::from_qualname(tag).is_some_and(Tag::is_void)
			};

		self.stack.push(ParentTag::new(tag, void));
	}

	/// # Write Closing Tag.
	///
	/// Note that for self-closing tags, the work will have already been done.
	fn end_elem(&mut self, name: &QualName) {
		if self.stack.pop().is_some_and(|p| ! p.void) {
			self.writer.push_str("</");
			self.writer.push_str(name.local.as_ref());
			self.writer.push('>');
		}
	}

	/// # Write Tag Attribute.
	///
	/// Empty values are implied for HTML, so only the key is written.
	fn write_attr(&mut self, tag: &QualName, key: &QualName, value: &str) {
		match key.ns {
			ns!(xml) => self.writer.push_str(" xml:"),
			ns!(xmlns) =>
				if matches!(key.local, local_name!("xmlns")) { self.writer.push(' '); }
				else { self.writer.push_str(" xmlns:"); },
			ns!(xlink) => self.writer.push_str(" xlink:"),
			_ => self.writer.push(' '),
		}

		self.writer.push_str(key.local.as_ref());

		if ! value.is_empty() || ! matches!(tag.ns, ns!(html)) {
			self.write_esc_attr(value);
		}
	}

	/// # Write Text.
	fn write_text(&mut self, txt: &str) {
		if self.parent().is_some_and(|p| p.plain_text) { self.writer.push_str(txt); }
		else { self.write_esc_text(txt); }
	}
}



/// # Queue Children.
///
/// The queue is a stack, so children are pushed in reverse.
fn push_children(queue: &mut Vec<Stage>, handle: &Handle) {
	let children = handle.children.borrow();
	queue.reserve(children.len());
	for child in children.iter().rev() {
		queue.push(Stage::Open(Rc::clone(child)));
	}
}



#[cfg(test)]
mod tests {
	use super::*;
	use crate::Tree;

	/// # Round Trip a Fragment.
	fn round_trip(raw: &str) -> String {
		Tree::parse_fragment(raw.as_bytes())
			.expect("Fragment parse failed.")
			.serialize()
	}

	#[test]
	fn t_serialize_fragment() {
		for (raw, expected) in [
			("<p class=\"a\">Hello <b>World</b></p>", "<p class=\"a\">Hello <b>World</b></p>"),
			("<br><img src=\"x.png\" alt=\"\">", "<br><img src=\"x.png\" alt>"),
			("<p title='say \"hi\"'>&amp; &lt;</p>", "<p title=\"say &quot;hi&quot;\">&amp; &lt;</p>"),
			("<script>if (a < b) {}</script>", "<script>if (a < b) {}</script>"),
			("<!-- note --><p>x</p>", "<!-- note --><p>x</p>"),
			("<svg><circle r=\"1\"/></svg>", "<svg><circle r=\"1\"/></svg>"),
			("<svg></svg>", "<svg></svg>"),
			("<template><p>Hi</p></template>", "<template><p>Hi</p></template>"),
			("<p>a\u{a0}b</p>", "<p>a&nbsp;b</p>"),
		] {
			assert_eq!(round_trip(raw), expected, "{raw}");
		}
	}

	#[test]
	fn t_serialize_document() {
		let tree = Tree::parse_document(b"<!DOCTYPE html><html><head><title>Hi</title></head><body><p>Hi</p></body></html>")
			.expect("Document parse failed.");
		assert_eq!(
			tree.serialize(),
			"<!DOCTYPE html>\n<html><head><title>Hi</title></head><body><p>Hi</p></body></html>",
		);
	}
}
