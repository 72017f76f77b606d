/*!
# Tests: Sanitization
*/

use html5ever::QualName;
use htmlsan::{
	Attributes,
	Capacity,
	Collection,
	Handle,
	NodeInner,
	Policy,
	SanitizeError,
	Sanitizer,
	Tree,
	Walk,
};
use std::{
	collections::BTreeSet,
	rc::Rc,
};



/// # Test Corpus.
const CORPUS: &[&str] = &[
	"<div onclick=\"x()\" style=\"color:red\"><p class=\"ok\">hi</p></div>",
	"<svg><script>bad()</script><circle r=\"1\"/></svg>",
	"<a href=\"javascript:alert(1)\" target=\"_blank\">x</a>",
	"<a href=\" JaVaScRiPt:alert(1)\" target=\"_evil\">x</a>",
	"<a href=\"ftp://example.com\" title=\"t\">x</a>",
	"<img src=\"data:image/png;base64,AAAA\" alt=\"x\" onerror=\"x()\">",
	"<iframe src=\"https://x\" sandbox></iframe><iframe src=\"https://x\"></iframe>",
	"<object data=\"x.swf\"></object><embed src=\"x.swf\">",
	"<my-widget data-id=\"1\" onclick=\"x()\" href=\"vbscript:x\" style=\"a\">w</my-widget>",
	"<template><script>x()</script><p onmouseover=\"x()\">t</p><template><style>p{}</style></template></template>",
	"<!-- c --><pre><code>let x = 1;</code></pre><p>after</p>",
	"<div x-on:click=\"go()\" phx-click=\"go\" :if=\"ok\" @click=\"go()\">d</div>",
	"<svg><a xlink:href=\"javascript:x()\"><text>t</text></a><animate attributeName=\"href\" to=\"javascript:x()\"/></svg>",
	"<form action=\"javascript:x()\"><input type=\"text\" name=\"q\" formaction=\"javascript:y()\"><button>Go</button></form>",
	"<script>x()</script><style>p{}</style><noscript><p>n</p></noscript>",
	"<math><mi>x</mi></math><p title=\"javascript:x()\">t</p>",
	"<div><svg><rect/></svg></div><p onclick=\"x()\">last-child</p>",
	"<template onclick=\"x()\" onfocus=\"y()\" title=\"javascript:z()\"><p>a</p></template>",
	"<svg><template><script>bad()</script><circle r=\"1\" onload=\"x()\"/></template></svg>",
];

/// # Active Presets.
const PRESETS: [Policy; 3] = [Policy::Minimum, Policy::Strict, Policy::Permissive];



/// # Clean.
fn clean(raw: &str, policy: Policy) -> String {
	htmlsan::clean_fragment(raw, policy).expect("Sanitization failed.")
}

/// # Sanitized Tree.
fn sanitized(raw: &str, policy: Policy) -> Tree {
	let tree = Tree::parse_fragment(raw.as_bytes()).expect("Parse failed.");
	tree.sanitize(policy).expect("Sanitization failed.");
	tree
}

/// # Each Element.
///
/// Visit every element in the tree, template contents included.
fn each_element<F>(root: &Handle, mut cb: F)
where F: FnMut(&QualName, &Attributes) {
	let mut stack = vec![Rc::clone(root)];
	while let Some(fragment) = stack.pop() {
		fragment.walk(|handle, _| {
			if let NodeInner::Element { ref name, ref attrs, ref template } = handle.inner {
				cb(name, &attrs.borrow());
				if let Some(t) = template { stack.push(Rc::clone(t)); }
			}
			Walk::Continue
		});
	}
}

/// # Surviving Attributes.
fn attributes(raw: &str, policy: Policy) -> BTreeSet<String> {
	let tree = sanitized(raw, policy);
	let mut out = BTreeSet::new();
	each_element(tree.root(), |name, attrs| {
		for (k, v) in attrs {
			out.insert(format!("{}[{}={}]", name.local, k.local, v));
		}
	});
	out
}



#[test]
fn t_idempotence() {
	for policy in PRESETS {
		for raw in CORPUS {
			let once = clean(raw, policy);
			let twice = clean(&once, policy);
			assert_eq!(once, twice, "{policy:?}: {raw}");
		}
	}
}

#[test]
fn t_monotonic() {
	for raw in CORPUS {
		let strict = attributes(raw, Policy::Strict);
		let permissive = attributes(raw, Policy::Permissive);
		let minimum = attributes(raw, Policy::Minimum);
		assert!(strict.is_subset(&permissive), "{raw}");
		assert!(permissive.is_subset(&minimum), "{raw}");
	}
}

#[test]
fn t_invariants() {
	for policy in PRESETS {
		for raw in CORPUS {
			let tree = sanitized(raw, policy);
			each_element(tree.root(), |name, attrs| {
				// No script elements under strict.
				if matches!(policy, Policy::Strict) {
					assert!(
						! matches!(name.local.as_ref(), "script" | "style" | "object" | "embed"),
						"{policy:?}: {raw}",
					);
				}

				// No event handlers or script links under any of them.
				for (k, v) in attrs {
					let k = k.local.to_ascii_lowercase();
					let v = v.trim_start().to_ascii_lowercase();
					assert!(! k.starts_with("on"), "{policy:?}: {raw}");
					assert!(
						! v.starts_with("javascript:") && ! v.starts_with("vbscript:"),
						"{policy:?}: {raw}",
					);
				}
			});
		}
	}
}

#[test]
fn t_scenarios() {
	assert_eq!(
		clean("<div onclick=\"x()\" style=\"color:red\"><p class=\"ok\">hi</p></div>", Policy::Strict),
		"<div><p class=\"ok\">hi</p></div>",
	);

	for policy in PRESETS {
		assert_eq!(
			clean("<svg><script>bad()</script><circle r=\"1\"/></svg>", policy),
			"<svg><circle r=\"1\"/></svg>",
			"{policy:?}",
		);
	}
}

#[test]
fn t_none() {
	for raw in CORPUS {
		let tree = Tree::parse_fragment(raw.as_bytes()).expect("Parse failed.");
		let before = tree.serialize();
		tree.sanitize(Policy::None).expect("Sanitization failed.");
		assert_eq!(tree.serialize(), before);
	}
}

#[test]
fn t_custom_elements() {
	let raw = "<my-el class=\"x\">hi</my-el>";
	assert_eq!(clean(raw, Policy::Permissive), raw);
	assert_eq!(clean(raw, Policy::Minimum), raw);
	assert_eq!(clean(raw, Policy::Strict), "");
}

#[test]
fn t_iframes() {
	for policy in PRESETS {
		assert_eq!(
			clean("<iframe src=\"https://x\" sandbox></iframe>", policy),
			"<iframe src=\"https://x\" sandbox></iframe>",
			"{policy:?}",
		);
		assert_eq!(clean("<iframe src=\"https://x\"></iframe>", policy), "", "{policy:?}");
		assert_eq!(
			clean("<iframe src=\"javascript:x()\" sandbox></iframe>", policy),
			"",
			"{policy:?}",
		);
	}
}

#[test]
fn t_templates() {
	assert_eq!(
		clean("<template><script>x()</script></template>", Policy::Strict),
		"<template></template>",
	);

	// Nested.
	assert_eq!(
		clean(
			"<template><p onclick=\"x()\">a</p><template><b onclick=\"y()\">b</b></template></template>",
			Policy::Strict,
		),
		"<template><p>a</p><template><b>b</b></template></template>",
	);

	// The template's own attributes are checked too.
	for policy in PRESETS {
		assert_eq!(
			clean("<template onclick=\"x()\" onfocus=\"y()\" title=\"javascript:z()\"><p>a</p></template>", policy),
			"<template><p>a</p></template>",
			"{policy:?}",
		);
	}

	// An SVG "template" has no contents of its own; it is just an unknown
	// element as far as the SVG rules are concerned.
	for policy in PRESETS {
		assert_eq!(
			clean("<svg><template><script>bad()</script></template></svg>", policy),
			"<svg></svg>",
			"{policy:?}",
		);
	}

	// The same options apply all the way down.
	assert_eq!(
		clean("<template><script>x()</script><my-el></my-el></template>", Policy::Minimum),
		"<template><script>x()</script><my-el></my-el></template>",
	);
}

#[test]
fn t_context() {
	// The <pre> is the last child of the div; its context ends with it.
	assert_eq!(
		clean("<div><pre><code>x</code></pre></div><a href=\"/\" onclick=\"x()\">y</a>", Policy::Strict),
		"<div><pre><code>x</code></pre></div><a href=\"/\">y</a>",
	);

	// Custom elements are not allowed in an SVG, even when they are allowed
	// generally.
	assert_eq!(
		clean("<svg><my-el></my-el></svg><my-el></my-el>", Policy::Permissive),
		"<svg></svg><my-el></my-el>",
	);
}

#[test]
fn t_document() {
	let out = htmlsan::clean_document(
		"<!DOCTYPE html><html><head><meta charset=\"utf-8\"><meta http-equiv=\"refresh\" content=\"0;url=https://evil\"><base href=\"https://evil/\"><title>T</title></head><body><p>Hi</p></body></html>",
		Policy::Strict,
	).expect("Sanitization failed.");
	assert_eq!(
		out,
		"<!DOCTYPE html>\n<html><head><meta charset=\"utf-8\"><meta content=\"0;url=https://evil\"><title>T</title></head><body><p>Hi</p></body></html>",
	);
}

#[test]
fn t_capacity() {
	// The root is fine, but the template overflows. Nothing should change.
	let raw = "<p onclick=\"x()\">a</p><template><b onclick=\"1\" onmouseover=\"2\">b</b></template>";
	let tree = Tree::parse_fragment(raw.as_bytes()).expect("Parse failed.");
	let res = Sanitizer::new(Policy::Strict)
		.with_capacity(Capacity::new(10, 1, 10))
		.sanitize(tree.root());
	assert_eq!(res, Err(SanitizeError::CapacityExceeded(Collection::Attributes)));
	assert_eq!(tree.serialize(), raw);

	// With a little more room, it works.
	let report = Sanitizer::new(Policy::Strict)
		.with_capacity(Capacity::new(10, 2, 10))
		.sanitize_report(tree.root())
		.expect("Sanitization failed.");
	assert_eq!(report.attributes(), 3);
	assert_eq!(report.templates(), 1);
	assert_eq!(tree.serialize(), "<p>a</p><template><b>b</b></template>");
}
