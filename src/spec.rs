/*!
# HTMLSan: Tags.

This module holds the closed enumeration of tag names the sanitizer knows
about, along with a few simple predicates for them.
*/

use html5ever::QualName;



/// # Longest Known Tag Name.
///
/// Names longer than this can't be standard, so needn't be checked.
const MAX_TAG_LEN: usize = 16;



macro_rules! tags {
	( $( $k:ident $v:literal, )+ ) => (
		#[derive(Debug, Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
		/// # Standard Tag.
		///
		/// This enum covers the standard HTML elements, plus the handful of
		/// SVG elements the allow-list has an opinion about. Anything else is
		/// either a custom element or garbage.
		pub enum Tag {
			$(
				#[doc = concat!("# `<", $v, ">`")]
				$k,
			)+
		}

		impl Tag {
			/// # All Tags.
			pub const ALL: &'static [Self] = &[ $( Self::$k ),+ ];

			#[must_use]
			/// # As Str.
			///
			/// Return the (lowercase) tag name.
			pub const fn as_str(self) -> &'static str {
				match self {
					$( Self::$k => $v, )+
				}
			}

			#[must_use]
			/// # Classify.
			///
			/// Match a tag name (case-insensitively) against the list of
			/// standard tags, returning `None` if it is custom or unknown.
			pub fn classify(name: &str) -> Option<Self> {
				let src = name.as_bytes();
				if src.is_empty() || MAX_TAG_LEN < src.len() { return None; }

				let mut buf = [0_u8; MAX_TAG_LEN];
				let buf = &mut buf[..src.len()];
				buf.copy_from_slice(src);
				buf.make_ascii_lowercase();

				match std::str::from_utf8(buf).ok()? {
					$( $v => Some(Self::$k), )+
					_ => None,
				}
			}
		}
	);
}

tags! {
	A                "a",
	Abbr             "abbr",
	Acronym          "acronym",
	Address          "address",
	Animate          "animate",
	AnimateMotion    "animatemotion",
	AnimateTransform "animatetransform",
	Applet           "applet",
	Area             "area",
	Article          "article",
	Aside            "aside",
	Audio            "audio",
	B                "b",
	Base             "base",
	Basefont         "basefont",
	Bdi              "bdi",
	Bdo              "bdo",
	Bgsound          "bgsound",
	Big              "big",
	Blink            "blink",
	Blockquote       "blockquote",
	Body             "body",
	Br               "br",
	Button           "button",
	Canvas           "canvas",
	Caption          "caption",
	Center           "center",
	Circle           "circle",
	Cite             "cite",
	ClipPath         "clippath",
	Code             "code",
	Col              "col",
	Colgroup         "colgroup",
	Data             "data",
	Datalist         "datalist",
	Dd               "dd",
	Defs             "defs",
	Del              "del",
	Desc             "desc",
	Details          "details",
	Dfn              "dfn",
	Dialog           "dialog",
	Dir              "dir",
	Div              "div",
	Dl               "dl",
	Dt               "dt",
	Ellipse          "ellipse",
	Em               "em",
	Embed            "embed",
	Fieldset         "fieldset",
	Figcaption       "figcaption",
	Figure           "figure",
	Filter           "filter",
	Font             "font",
	Footer           "footer",
	ForeignObject    "foreignobject",
	Form             "form",
	Frame            "frame",
	Frameset         "frameset",
	G                "g",
	H1               "h1",
	H2               "h2",
	H3               "h3",
	H4               "h4",
	H5               "h5",
	H6               "h6",
	Head             "head",
	Header           "header",
	Hgroup           "hgroup",
	Hr               "hr",
	Html             "html",
	I                "i",
	Iframe           "iframe",
	Image            "image",
	Img              "img",
	Input            "input",
	Ins              "ins",
	Isindex          "isindex",
	Kbd              "kbd",
	Keygen           "keygen",
	Label            "label",
	Legend           "legend",
	Li               "li",
	Line             "line",
	LinearGradient   "lineargradient",
	Link             "link",
	Listing          "listing",
	Main             "main",
	Map              "map",
	Mark             "mark",
	Marker           "marker",
	Marquee          "marquee",
	Mask             "mask",
	Math             "math",
	Menu             "menu",
	Meta             "meta",
	Meter            "meter",
	Nav              "nav",
	Nobr             "nobr",
	Noembed          "noembed",
	Noframes         "noframes",
	Noscript         "noscript",
	Object           "object",
	Ol               "ol",
	Optgroup         "optgroup",
	Option           "option",
	Output           "output",
	P                "p",
	Param            "param",
	Path             "path",
	Pattern          "pattern",
	Picture          "picture",
	Plaintext        "plaintext",
	Polygon          "polygon",
	Polyline         "polyline",
	Pre              "pre",
	Progress         "progress",
	Q                "q",
	RadialGradient   "radialgradient",
	Rb               "rb",
	Rect             "rect",
	Rp               "rp",
	Rt               "rt",
	Rtc              "rtc",
	Ruby             "ruby",
	S                "s",
	Samp             "samp",
	Script           "script",
	Search           "search",
	Section          "section",
	Select           "select",
	Set              "set",
	Slot             "slot",
	Small            "small",
	Source           "source",
	Span             "span",
	Stop             "stop",
	Strike           "strike",
	Strong           "strong",
	Style            "style",
	Sub              "sub",
	Summary          "summary",
	Sup              "sup",
	Svg              "svg",
	Symbol           "symbol",
	Table            "table",
	Tbody            "tbody",
	Td               "td",
	Template         "template",
	Text             "text",
	TextPath         "textpath",
	Textarea         "textarea",
	Tfoot            "tfoot",
	Th               "th",
	Thead            "thead",
	Time             "time",
	Title            "title",
	Tr               "tr",
	Track            "track",
	Tspan            "tspan",
	Tt               "tt",
	U                "u",
	Ul               "ul",
	Use              "use",
	Var              "var",
	Video            "video",
	Wbr              "wbr",
	Xmp              "xmp",
}

impl Tag {
	#[must_use]
	/// # From Qualified Name.
	pub fn from_qualname(name: &QualName) -> Option<Self> {
		Self::classify(name.local.as_ref())
	}

	#[must_use]
	/// # Is Void?
	///
	/// Void elements are self-closing; they have no children and no closing
	/// tag.
	pub const fn is_void(self) -> bool {
		matches!(
			self,
			Self::Area | Self::Base | Self::Br | Self::Col | Self::Embed |
			Self::Hr | Self::Img | Self::Input | Self::Link | Self::Meta |
			Self::Source | Self::Track | Self::Wbr
		)
	}

	#[must_use]
	/// # Is No-Escape Content?
	///
	/// Text inside these elements is written as-is during serialization.
	/// The sanitizer itself does nothing with this information.
	pub const fn is_no_escape_content(self) -> bool {
		matches!(
			self,
			Self::Iframe | Self::Noembed | Self::Noframes | Self::Plaintext |
			Self::Script | Self::Style | Self::Xmp
		)
	}
}



#[must_use]
/// # Is Custom Element?
///
/// Per the Web Components convention, custom element names contain a hyphen.
pub fn is_custom_element(name: &str) -> bool { name.contains('-') }
