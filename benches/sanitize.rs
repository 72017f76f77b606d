/*!
# Benchmark: `htmlsan`
*/

use criterion::{
	Criterion,
	criterion_group,
	criterion_main,
};
use htmlsan::{
	Policy,
	Tree,
};



/// # Dirty Fragment.
const FRAGMENT: &str = r#"<div class="comment" onclick="steal()">
	<p style="color: red">Hello <a href="javascript:alert(1)" target="_blank">World</a>!</p>
	<img src="data:image/png;base64,AAAA" alt="pixel" onerror="steal()">
	<my-widget data-id="5" x-on:click="go()">Widget</my-widget>
	<svg viewBox="0 0 10 10"><script>steal()</script><circle r="1" onload="steal()"/></svg>
	<iframe src="https://example.com"></iframe>
	<template><script>steal()</script><p>Later</p></template>
	<!-- Comment -->
</div>"#;

fn is_safe_uri(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmlsan::is_safe_uri");

	for uri in ["https://example.com/", "  JaVaScRiPt:alert(1)", "relative/path.html"] {
		group.bench_function(format!("{uri:?}"), move |b| {
			b.iter(|| htmlsan::is_safe_uri(uri))
		});
	}

	group.finish();
}

fn clean_fragment(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmlsan::clean_fragment");

	for policy in [Policy::Minimum, Policy::Strict, Policy::Permissive] {
		group.bench_function(policy.as_str(), move |b| {
			b.iter(|| htmlsan::clean_fragment(FRAGMENT, policy))
		});
	}

	group.finish();
}

fn sanitize(c: &mut Criterion) {
	let mut group = c.benchmark_group("htmlsan::sanitize");

	group.bench_function("strict", move |b| {
		b.iter_with_setup(||
			Tree::parse_fragment(FRAGMENT.as_bytes()).unwrap(),
			|tree| htmlsan::sanitize(tree.root(), Policy::Strict)
		)
	});

	group.finish();
}



criterion_group!(
	benches,
	is_safe_uri,
	clean_fragment,
	sanitize,
);
criterion_main!(benches);
