/*!
# HTMLSan

`HTMLSan` is an allow-list HTML sanitizer. It takes a parsed document (or
fragment) tree and strips out anything capable of running script or leaking
the reader somewhere they didn't mean to go: `<script>` tags, event handler
attributes, `javascript:` links, un-sandboxed frames, and so on.

Elements and attributes not explicitly allowed are removed. Text is never
rewritten; escaping happens during serialization.



## Use

The quickest route is `clean_fragment` or `clean_document`, which parse,
sanitize, and serialize in one go:

```
use htmlsan::Policy;

let out = htmlsan::clean_fragment(
    r#"<div onclick="x()" style="color:red"><p class="ok">hi</p></div>"#,
    Policy::Strict,
).unwrap();
assert_eq!(out, r#"<div><p class="ok">hi</p></div>"#);
```

For more control, parse a `Tree` and run a `Sanitizer` over its root.



## Policies

| Policy | Comments | Scripts | Styles | Strict URIs | Custom Elements |
| ------ | -------- | ------- | ------ | ----------- | --------------- |
| `Minimum` | Kept | Kept | Kept | No | Allowed |
| `Strict` | Removed | Removed | Removed | Yes | Removed |
| `Permissive` | Removed | Removed | Removed | Yes | Allowed |

`Policy::Custom` takes any combination of `SanitizeOptions`, and
`Policy::None` does nothing at all.

Regardless of policy, `<object>` and `<embed>` are always removed, frames must
be sandboxed, SVGs lose their scripts, animations, and event handlers, and
tags without an allow-list entry are dropped.



## How It Works

Sanitization takes two passes. The first walks the tree without changing
anything, collecting the nodes and attributes that need to go. If that
succeeds, for the root _and_ every nested `<template>`, the second pass
removes them. If a collection overflows its `Capacity`, the tree is left
exactly as it was.
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

#![allow(clippy::module_name_repetitions)]



mod collect;
mod context;
pub mod dom;
mod error;
mod policy;
mod sanitize;
mod scan;
mod ser;
mod spec;

pub(crate) use collect::{
	Collector,
	RemovalSet,
};
pub(crate) use context::ContextTracker;

pub use collect::Capacity;
pub use context::Context;
pub use dom::{
	node::{
		Attributes,
		Handle,
		Node,
		NodeInner,
		Walk,
	},
	Tree,
};
pub use error::{
	Collection,
	SanitizeError,
};
pub use policy::{
	AttrName,
	AttributePolicy,
	ElementPolicy,
	is_attribute_allowed,
	is_framework_attribute,
	is_value_valid,
	lookup,
};
pub use sanitize::{
	Policy,
	Report,
	sanitize,
	SanitizeOptions,
	Sanitizer,
};
pub use scan::is_safe_uri;
pub use spec::{
	is_custom_element,
	Tag,
};



/// # Clean Document.
///
/// Parse, sanitize, and serialize a complete HTML document.
///
/// ## Errors
///
/// Returns an error if the document cannot be parsed or sanitized.
pub fn clean_document(raw: &str, policy: Policy) -> Result<String, SanitizeError> {
	let tree = Tree::parse_document(raw.as_bytes())?;
	tree.sanitize(policy)?;
	Ok(tree.serialize())
}

/// # Clean Fragment.
///
/// Parse, sanitize, and serialize a snippet of HTML, e.g. the body of a user
/// comment.
///
/// ## Errors
///
/// Returns an error if the fragment cannot be parsed or sanitized.
pub fn clean_fragment(raw: &str, policy: Policy) -> Result<String, SanitizeError> {
	let tree = Tree::parse_fragment(raw.as_bytes())?;
	tree.sanitize(policy)?;
	Ok(tree.serialize())
}
