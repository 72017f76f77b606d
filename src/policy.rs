/*!
# HTMLSan: Policy Table.

The compiled-in allow-list mapping each tag to the attributes it may carry,
and (for some of them) the values those attributes may hold.
*/

use crate::Tag;



/// # Always-Permitted Prefixes.
///
/// Accessibility and data attributes are fine on anything.
const GLOBAL_PREFIXES: [&str; 2] = ["aria-", "data-"];

/// # Framework Directive Prefixes.
///
/// Client-side templating/reactivity bindings: `phx-click`, `hx-get`,
/// `x-show`, `v-if`, `@click`, etc.
const FRAMEWORK_PREFIXES: [&str; 5] = ["phx-", "hx-", "x-", "v-", "@"];

/// # Framework Directive Names.
///
/// Conditional-render and data-passing directives.
const FRAMEWORK_NAMES: [&str; 4] = [":if", ":for", ":let", ":key"];



#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
/// # Attribute Name Matcher.
pub enum AttrName {
	/// # Exact Name.
	Exact(&'static str),

	/// # Name Prefix.
	Prefix(&'static str),
}

impl AttrName {
	#[must_use]
	/// # Matches?
	///
	/// Names are compared case-insensitively. Prefix matches require at
	/// least one character beyond the prefix itself.
	pub fn matches(self, name: &str) -> bool {
		match self {
			Self::Exact(v) => name.eq_ignore_ascii_case(v),
			Self::Prefix(v) => v.len() < name.len() && starts_with_ci(name, v),
		}
	}
}



#[derive(Debug, Clone, Copy, Eq, PartialEq)]
/// # Attribute Policy.
pub struct AttributePolicy {
	/// # Name.
	name: AttrName,

	/// # Allowed Values.
	///
	/// `None` means anything goes.
	values: Option<&'static [&'static str]>,

	/// # Safe?
	///
	/// This is `false` for attributes whose values are URLs.
	safe: bool,
}

impl AttributePolicy {
	/// # Any Value.
	const fn any(name: &'static str) -> Self {
		Self { name: AttrName::Exact(name), values: None, safe: true }
	}

	/// # Boolean.
	///
	/// The only legal value for a boolean attribute is an empty string.
	const fn boolean(name: &'static str) -> Self {
		Self { name: AttrName::Exact(name), values: Some(&[""]), safe: true }
	}

	/// # One Of.
	const fn one_of(name: &'static str, values: &'static [&'static str]) -> Self {
		Self { name: AttrName::Exact(name), values: Some(values), safe: true }
	}

	/// # Prefix.
	const fn prefix(name: &'static str) -> Self {
		Self { name: AttrName::Prefix(name), values: None, safe: true }
	}

	/// # URL.
	const fn url(name: &'static str) -> Self {
		Self { name: AttrName::Exact(name), values: None, safe: false }
	}

	#[must_use]
	/// # Name.
	pub const fn name(&self) -> AttrName { self.name }

	#[must_use]
	/// # Allowed Values.
	pub const fn values(&self) -> Option<&'static [&'static str]> { self.values }

	#[must_use]
	/// # Is Safe?
	///
	/// Returns `false` if the value is a URL and might warrant a closer
	/// look.
	pub const fn is_safe(&self) -> bool { self.safe }

	#[must_use]
	/// # Matches Name?
	pub fn matches(&self, name: &str) -> bool { self.name.matches(name) }

	#[must_use]
	/// # Is Value Valid?
	pub fn is_value_valid(&self, value: &str) -> bool {
		self.values.is_none_or(|list| list.iter().any(|v| value.eq_ignore_ascii_case(v)))
	}
}



#[derive(Debug, Clone, Copy)]
/// # Element Policy.
pub struct ElementPolicy {
	/// # Tag.
	tag: Tag,

	/// # Attribute Sets.
	///
	/// Every element starts with the baseline set; the rest are
	/// specializations.
	attrs: &'static [&'static [AttributePolicy]],

	/// # Void?
	void: bool,
}

impl ElementPolicy {
	#[must_use]
	/// # Tag.
	pub const fn tag(&self) -> Tag { self.tag }

	#[must_use]
	/// # Is Void?
	pub const fn is_void(&self) -> bool { self.void }

	/// # Attributes.
	///
	/// Return an iterator over the element's attribute policies, in order.
	pub fn attributes(&self) -> impl Iterator<Item=&'static AttributePolicy> + use<> {
		let attrs: &'static [&'static [AttributePolicy]] = self.attrs;
		attrs.iter().copied().flatten()
	}

	#[must_use]
	/// # Find Attribute Policy.
	pub fn attribute(&self, name: &str) -> Option<&'static AttributePolicy> {
		self.attributes().find(|a| a.matches(name))
	}
}



/// # Baseline.
const BASE: &[AttributePolicy] = &[
	AttributePolicy::any("id"),
	AttributePolicy::any("class"),
	AttributePolicy::any("title"),
	AttributePolicy::any("lang"),
	AttributePolicy::one_of("dir", &["ltr", "rtl", "auto"]),
	AttributePolicy::boolean("hidden"),
	AttributePolicy::any("tabindex"),
	AttributePolicy::any("role"),
	AttributePolicy::any("accesskey"),
	AttributePolicy::any("slot"),
	AttributePolicy::one_of("translate", &["yes", "no"]),
	AttributePolicy::one_of("draggable", &["true", "false", "auto"]),
	AttributePolicy::one_of("spellcheck", &["true", "false"]),
	AttributePolicy::prefix("aria-"),
	AttributePolicy::prefix("data-"),
];

/// # Anchors.
const ANCHOR: &[AttributePolicy] = &[
	AttributePolicy::url("href"),
	AttributePolicy::one_of("target", &["_blank", "_self", "_parent", "_top"]),
	AttributePolicy::any("rel"),
	AttributePolicy::any("name"),
	AttributePolicy::any("download"),
	AttributePolicy::any("hreflang"),
	AttributePolicy::any("type"),
	AttributePolicy::any("referrerpolicy"),
];

/// # Image Maps.
const AREA: &[AttributePolicy] = &[
	AttributePolicy::any("alt"),
	AttributePolicy::any("coords"),
	AttributePolicy::one_of("shape", &["rect", "circle", "poly", "default"]),
];

/// # Images.
const IMAGE: &[AttributePolicy] = &[
	AttributePolicy::url("src"),
	AttributePolicy::url("srcset"),
	AttributePolicy::any("alt"),
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
	AttributePolicy::any("sizes"),
	AttributePolicy::one_of("loading", &["lazy", "eager"]),
	AttributePolicy::one_of("decoding", &["sync", "async", "auto"]),
	AttributePolicy::one_of("crossorigin", &["", "anonymous", "use-credentials"]),
	AttributePolicy::any("usemap"),
	AttributePolicy::boolean("ismap"),
	AttributePolicy::any("referrerpolicy"),
];

/// # Tables.
const TABLE: &[AttributePolicy] = &[
	AttributePolicy::any("border"),
	AttributePolicy::any("cellpadding"),
	AttributePolicy::any("cellspacing"),
	AttributePolicy::any("summary"),
	AttributePolicy::any("width"),
	AttributePolicy::any("align"),
];

/// # Table Cells.
const TABLE_CELL: &[AttributePolicy] = &[
	AttributePolicy::any("colspan"),
	AttributePolicy::any("rowspan"),
	AttributePolicy::any("headers"),
	AttributePolicy::one_of("scope", &["row", "col", "rowgroup", "colgroup"]),
	AttributePolicy::any("abbr"),
	AttributePolicy::any("align"),
	AttributePolicy::any("valign"),
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
];

/// # Table Columns.
const TABLE_COL: &[AttributePolicy] = &[
	AttributePolicy::any("span"),
	AttributePolicy::any("width"),
	AttributePolicy::any("align"),
	AttributePolicy::any("valign"),
];

/// # Table Sections and Rows.
const TABLE_ROW: &[AttributePolicy] = &[
	AttributePolicy::any("align"),
	AttributePolicy::any("valign"),
];

/// # Forms.
const FORM: &[AttributePolicy] = &[
	AttributePolicy::url("action"),
	AttributePolicy::one_of("method", &["get", "post", "dialog"]),
	AttributePolicy::one_of("enctype", &[
		"application/x-www-form-urlencoded",
		"multipart/form-data",
		"text/plain",
	]),
	AttributePolicy::any("accept-charset"),
	AttributePolicy::one_of("autocomplete", &["on", "off"]),
	AttributePolicy::any("name"),
	AttributePolicy::boolean("novalidate"),
	AttributePolicy::one_of("target", &["_blank", "_self", "_parent", "_top"]),
];

/// # Form Controls.
///
/// The bits shared by inputs, buttons, selects, and textareas.
const FORM_CONTROL: &[AttributePolicy] = &[
	AttributePolicy::any("name"),
	AttributePolicy::any("form"),
	AttributePolicy::boolean("disabled"),
	AttributePolicy::boolean("autofocus"),
	AttributePolicy::any("autocomplete"),
];

/// # Inputs.
const INPUT: &[AttributePolicy] = &[
	AttributePolicy::one_of("type", &[
		"button", "checkbox", "color", "date", "datetime-local", "email",
		"file", "hidden", "image", "month", "number", "password", "radio",
		"range", "reset", "search", "submit", "tel", "text", "time", "url",
		"week",
	]),
	AttributePolicy::any("value"),
	AttributePolicy::any("placeholder"),
	AttributePolicy::boolean("checked"),
	AttributePolicy::boolean("readonly"),
	AttributePolicy::boolean("required"),
	AttributePolicy::boolean("multiple"),
	AttributePolicy::any("min"),
	AttributePolicy::any("max"),
	AttributePolicy::any("step"),
	AttributePolicy::any("minlength"),
	AttributePolicy::any("maxlength"),
	AttributePolicy::any("pattern"),
	AttributePolicy::any("size"),
	AttributePolicy::any("list"),
	AttributePolicy::any("accept"),
	AttributePolicy::any("alt"),
	AttributePolicy::url("src"),
	AttributePolicy::url("formaction"),
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
	AttributePolicy::any("inputmode"),
];

/// # Buttons.
const BUTTON: &[AttributePolicy] = &[
	AttributePolicy::one_of("type", &["submit", "reset", "button"]),
	AttributePolicy::any("value"),
	AttributePolicy::url("formaction"),
	AttributePolicy::boolean("formnovalidate"),
];

/// # Selects.
const SELECT: &[AttributePolicy] = &[
	AttributePolicy::boolean("multiple"),
	AttributePolicy::boolean("required"),
	AttributePolicy::any("size"),
];

/// # Options and Option Groups.
const OPTION: &[AttributePolicy] = &[
	AttributePolicy::any("value"),
	AttributePolicy::any("label"),
	AttributePolicy::boolean("selected"),
	AttributePolicy::boolean("disabled"),
];

/// # Textareas.
const TEXTAREA: &[AttributePolicy] = &[
	AttributePolicy::any("rows"),
	AttributePolicy::any("cols"),
	AttributePolicy::any("placeholder"),
	AttributePolicy::boolean("readonly"),
	AttributePolicy::boolean("required"),
	AttributePolicy::any("minlength"),
	AttributePolicy::any("maxlength"),
	AttributePolicy::one_of("wrap", &["soft", "hard"]),
];

/// # Labels, Outputs.
const LABEL: &[AttributePolicy] = &[
	AttributePolicy::any("for"),
	AttributePolicy::any("form"),
	AttributePolicy::any("name"),
];

/// # Fieldsets.
const FIELDSET: &[AttributePolicy] = &[
	AttributePolicy::boolean("disabled"),
	AttributePolicy::any("form"),
	AttributePolicy::any("name"),
];

/// # Audio and Video.
const MEDIA: &[AttributePolicy] = &[
	AttributePolicy::url("src"),
	AttributePolicy::boolean("controls"),
	AttributePolicy::boolean("autoplay"),
	AttributePolicy::boolean("loop"),
	AttributePolicy::boolean("muted"),
	AttributePolicy::one_of("preload", &["", "none", "metadata", "auto"]),
	AttributePolicy::one_of("crossorigin", &["", "anonymous", "use-credentials"]),
];

/// # Video Extras.
const VIDEO: &[AttributePolicy] = &[
	AttributePolicy::url("poster"),
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
	AttributePolicy::boolean("playsinline"),
];

/// # Media Sources.
const SOURCE: &[AttributePolicy] = &[
	AttributePolicy::url("src"),
	AttributePolicy::url("srcset"),
	AttributePolicy::any("type"),
	AttributePolicy::any("media"),
	AttributePolicy::any("sizes"),
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
];

/// # Media Tracks.
const TRACK: &[AttributePolicy] = &[
	AttributePolicy::url("src"),
	AttributePolicy::one_of("kind", &[
		"subtitles", "captions", "descriptions", "chapters", "metadata",
	]),
	AttributePolicy::any("srclang"),
	AttributePolicy::any("label"),
	AttributePolicy::boolean("default"),
];

/// # Inline Frames.
const IFRAME: &[AttributePolicy] = &[
	AttributePolicy::url("src"),
	AttributePolicy::any("sandbox"),
	AttributePolicy::any("allow"),
	AttributePolicy::boolean("allowfullscreen"),
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
	AttributePolicy::any("name"),
	AttributePolicy::one_of("loading", &["lazy", "eager"]),
	AttributePolicy::any("referrerpolicy"),
];

/// # Quotes.
const QUOTE: &[AttributePolicy] = &[
	AttributePolicy::url("cite"),
];

/// # Edits.
const EDIT: &[AttributePolicy] = &[
	AttributePolicy::url("cite"),
	AttributePolicy::any("datetime"),
];

/// # Times.
const TIME: &[AttributePolicy] = &[
	AttributePolicy::any("datetime"),
];

/// # Values.
const VALUE: &[AttributePolicy] = &[
	AttributePolicy::any("value"),
];

/// # Ordered Lists.
const OL: &[AttributePolicy] = &[
	AttributePolicy::any("start"),
	AttributePolicy::boolean("reversed"),
	AttributePolicy::one_of("type", &["1", "a", "i"]),
];

/// # Disclosure Widgets.
const OPEN: &[AttributePolicy] = &[
	AttributePolicy::boolean("open"),
];

/// # Gauges.
const METER: &[AttributePolicy] = &[
	AttributePolicy::any("value"),
	AttributePolicy::any("min"),
	AttributePolicy::any("max"),
	AttributePolicy::any("low"),
	AttributePolicy::any("high"),
	AttributePolicy::any("optimum"),
];

/// # Progress.
const PROGRESS: &[AttributePolicy] = &[
	AttributePolicy::any("value"),
	AttributePolicy::any("max"),
];

/// # Maps.
const MAP: &[AttributePolicy] = &[
	AttributePolicy::any("name"),
];

/// # Canvases.
const CANVAS: &[AttributePolicy] = &[
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
];

/// # Meta.
///
/// Notably absent: `http-equiv`, which can trigger redirects.
const META: &[AttributePolicy] = &[
	AttributePolicy::any("charset"),
	AttributePolicy::any("name"),
	AttributePolicy::any("content"),
];

/// # Scripts.
///
/// Scripts only survive when a preset deliberately keeps them.
const SCRIPT: &[AttributePolicy] = &[
	AttributePolicy::url("src"),
	AttributePolicy::any("type"),
	AttributePolicy::boolean("async"),
	AttributePolicy::boolean("defer"),
	AttributePolicy::boolean("nomodule"),
	AttributePolicy::one_of("crossorigin", &["", "anonymous", "use-credentials"]),
	AttributePolicy::any("integrity"),
	AttributePolicy::any("nonce"),
	AttributePolicy::any("referrerpolicy"),
];

/// # Styles.
const STYLE: &[AttributePolicy] = &[
	AttributePolicy::any("media"),
	AttributePolicy::any("type"),
	AttributePolicy::any("nonce"),
];

/// # Templates.
const TEMPLATE: &[AttributePolicy] = &[
	AttributePolicy::one_of("shadowrootmode", &["open", "closed"]),
	AttributePolicy::boolean("shadowrootclonable"),
	AttributePolicy::boolean("shadowrootdelegatesfocus"),
	AttributePolicy::boolean("shadowrootserializable"),
];

/// # SVG Presentation.
///
/// SVG elements are handled by their own rules, but still need an entry to
/// be kept at all.
const SVG: &[AttributePolicy] = &[
	AttributePolicy::any("xmlns"),
	AttributePolicy::any("version"),
	AttributePolicy::any("viewbox"),
	AttributePolicy::any("preserveaspectratio"),
	AttributePolicy::any("width"),
	AttributePolicy::any("height"),
	AttributePolicy::any("x"),
	AttributePolicy::any("y"),
	AttributePolicy::any("fill"),
	AttributePolicy::any("fill-opacity"),
	AttributePolicy::any("fill-rule"),
	AttributePolicy::any("clip-rule"),
	AttributePolicy::any("clip-path"),
	AttributePolicy::any("mask"),
	AttributePolicy::any("filter"),
	AttributePolicy::any("opacity"),
	AttributePolicy::any("stroke"),
	AttributePolicy::any("stroke-width"),
	AttributePolicy::any("stroke-linecap"),
	AttributePolicy::any("stroke-linejoin"),
	AttributePolicy::any("stroke-dasharray"),
	AttributePolicy::any("stroke-opacity"),
	AttributePolicy::any("transform"),
	AttributePolicy::any("font-family"),
	AttributePolicy::any("font-size"),
	AttributePolicy::any("text-anchor"),
	AttributePolicy::url("href"),
];

/// # SVG Shapes.
const SVG_SHAPE: &[AttributePolicy] = &[
	AttributePolicy::any("d"),
	AttributePolicy::any("points"),
	AttributePolicy::any("cx"),
	AttributePolicy::any("cy"),
	AttributePolicy::any("r"),
	AttributePolicy::any("rx"),
	AttributePolicy::any("ry"),
	AttributePolicy::any("x1"),
	AttributePolicy::any("y1"),
	AttributePolicy::any("x2"),
	AttributePolicy::any("y2"),
	AttributePolicy::any("dx"),
	AttributePolicy::any("dy"),
	AttributePolicy::any("pathlength"),
];

/// # SVG Paint Servers.
const SVG_PAINT: &[AttributePolicy] = &[
	AttributePolicy::any("offset"),
	AttributePolicy::any("stop-color"),
	AttributePolicy::any("stop-opacity"),
	AttributePolicy::any("gradientunits"),
	AttributePolicy::any("gradienttransform"),
	AttributePolicy::any("patternunits"),
	AttributePolicy::any("patterntransform"),
	AttributePolicy::any("spreadmethod"),
	AttributePolicy::any("fx"),
	AttributePolicy::any("fy"),
	AttributePolicy::any("markerwidth"),
	AttributePolicy::any("markerheight"),
	AttributePolicy::any("refx"),
	AttributePolicy::any("refy"),
	AttributePolicy::any("orient"),
	AttributePolicy::any("maskunits"),
	AttributePolicy::any("clippathunits"),
];



macro_rules! policies {
	( $( $tag:ident [ $( $set:ident ),* ], )+ ) => (
		#[must_use]
		/// # Lookup.
		///
		/// Return the element policy for the tag, if any. Tags without an
		/// entry are not allowed to exist.
		pub fn lookup(tag: Tag) -> Option<&'static ElementPolicy> {
			match tag {
				$(
					Tag::$tag => {
						static POLICY: ElementPolicy = ElementPolicy {
							tag: Tag::$tag,
							attrs: &[ BASE, $( $set ),* ],
							void: Tag::$tag.is_void(),
						};
						Some(&POLICY)
					},
				)+
				_ => None,
			}
		}
	);
}

policies! {
	A              [ANCHOR],
	Abbr           [],
	Address        [],
	Area           [ANCHOR, AREA],
	Article        [],
	Aside          [],
	Audio          [MEDIA],
	B              [],
	Bdi            [],
	Bdo            [],
	Blockquote     [QUOTE],
	Body           [],
	Br             [],
	Button         [FORM_CONTROL, BUTTON],
	Canvas         [CANVAS],
	Caption        [],
	Circle         [SVG, SVG_SHAPE],
	Cite           [],
	ClipPath       [SVG, SVG_PAINT],
	Code           [],
	Col            [TABLE_COL],
	Colgroup       [TABLE_COL],
	Data           [VALUE],
	Datalist       [],
	Dd             [],
	Defs           [SVG],
	Del            [EDIT],
	Desc           [SVG],
	Details        [OPEN],
	Dfn            [],
	Dialog         [OPEN],
	Div            [],
	Dl             [],
	Dt             [],
	Ellipse        [SVG, SVG_SHAPE],
	Em             [],
	Fieldset       [FIELDSET],
	Figcaption     [],
	Figure         [],
	Filter         [SVG],
	Footer         [],
	Form           [FORM],
	G              [SVG],
	H1             [],
	H2             [],
	H3             [],
	H4             [],
	H5             [],
	H6             [],
	Head           [],
	Header         [],
	Hgroup         [],
	Hr             [],
	Html           [],
	I              [],
	Iframe         [IFRAME],
	Image          [SVG],
	Img            [IMAGE],
	Input          [FORM_CONTROL, INPUT],
	Ins            [EDIT],
	Kbd            [],
	Label          [LABEL],
	Legend         [],
	Li             [VALUE],
	Line           [SVG, SVG_SHAPE],
	LinearGradient [SVG, SVG_PAINT],
	Main           [],
	Map            [MAP],
	Mark           [],
	Marker         [SVG, SVG_PAINT],
	Mask           [SVG, SVG_PAINT],
	Meta           [META],
	Meter          [METER],
	Nav            [],
	Ol             [OL],
	Optgroup       [OPTION],
	Option         [OPTION],
	Output         [LABEL],
	P              [],
	Path           [SVG, SVG_SHAPE],
	Pattern        [SVG, SVG_PAINT],
	Picture        [],
	Polygon        [SVG, SVG_SHAPE],
	Polyline       [SVG, SVG_SHAPE],
	Pre            [],
	Progress       [PROGRESS],
	Q              [QUOTE],
	RadialGradient [SVG, SVG_PAINT],
	Rb             [],
	Rect           [SVG, SVG_SHAPE],
	Rp             [],
	Rt             [],
	Rtc            [],
	Ruby           [],
	S              [],
	Samp           [],
	Script         [SCRIPT],
	Search         [],
	Section        [],
	Select         [FORM_CONTROL, SELECT],
	Small          [],
	Source         [SOURCE],
	Span           [],
	Stop           [SVG, SVG_PAINT],
	Strong         [],
	Style          [STYLE],
	Sub            [],
	Summary        [],
	Sup            [],
	Svg            [SVG],
	Symbol         [SVG],
	Table          [TABLE],
	Tbody          [TABLE_ROW],
	Td             [TABLE_CELL],
	Template       [TEMPLATE],
	Text           [SVG, SVG_SHAPE],
	TextPath       [SVG, SVG_SHAPE],
	Textarea       [FORM_CONTROL, TEXTAREA],
	Tfoot          [TABLE_ROW],
	Th             [TABLE_CELL],
	Thead          [TABLE_ROW],
	Time           [TIME],
	Title          [],
	Tr             [TABLE_ROW],
	Track          [TRACK],
	Tspan          [SVG, SVG_SHAPE],
	U              [],
	Ul             [],
	Use            [SVG, SVG_SHAPE],
	Var            [],
	Video          [MEDIA, VIDEO],
	Wbr            [],
}



#[must_use]
/// # Is Attribute Allowed?
///
/// Returns `true` if the tag's policy lists the attribute, or if it belongs
/// to one of the always-permitted groups (`aria-*`, `data-*`, framework
/// directives).
pub fn is_attribute_allowed(tag: Tag, name: &str) -> bool {
	is_global_attribute(name) ||
	lookup(tag).is_some_and(|p| p.attribute(name).is_some())
}

#[must_use]
/// # Is Value Valid?
///
/// Returns `true` if the attribute is allowed and its value satisfies the
/// policy's value restrictions, if any.
pub fn is_value_valid(tag: Tag, name: &str, value: &str) -> bool {
	if let Some(attr) = lookup(tag).and_then(|p| p.attribute(name)) {
		attr.is_value_valid(value)
	}
	else { is_global_attribute(name) }
}

#[must_use]
/// # Is Framework Directive?
///
/// Returns `true` for the client-side templating directives that are always
/// retained, e.g. `phx-click` or `:if`.
pub fn is_framework_attribute(name: &str) -> bool {
	FRAMEWORK_PREFIXES.iter().any(|p| p.len() < name.len() && starts_with_ci(name, p)) ||
	FRAMEWORK_NAMES.iter().any(|n| name.eq_ignore_ascii_case(n))
}

#[must_use]
/// # Is Always-Permitted?
fn is_global_attribute(name: &str) -> bool {
	GLOBAL_PREFIXES.iter().any(|p| p.len() < name.len() && starts_with_ci(name, p)) ||
	is_framework_attribute(name)
}

#[must_use]
/// # Starts With (Case-Insensitive).
fn starts_with_ci(src: &str, prefix: &str) -> bool {
	src.len() >= prefix.len() &&
	src.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}
