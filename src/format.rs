//! Rendering containers as text, steered by a small format language.
//!
//! A container format is a run of directives, each a letter followed by a
//! single-quoted literal:
//!
//! | letter | sets                               | default |
//! |--------|------------------------------------|---------|
//! | `e`    | separator between elements         | `, `    |
//! | `p`    | text before the first element      | `[`     |
//! | `s`    | text after the last element        | `]`     |
//! | `f`    | format handed to every element     | empty   |
//!
//! Inside a literal `\` takes the next character as is, so `\'` is a quote
//! and `\}` a brace. A bare `}` is an error.
//!
//! The element format is whatever the element understands: a nested
//! container parses it as another container format, a scalar as
//! `[[fill]align][+][0][width][.precision]`, with align one of `<`, `>`, `^`.
//!
//! ```
//! use seqtools::format::render;
//!
//! let grid = vec![vec![1, 2], vec![3, 4]];
//! assert_eq!(render(&grid, "").unwrap(), "[[1, 2], [3, 4]]");
//! assert_eq!(render(&grid, r"e' 'f'p\'(\'s\')\'f\'0>2\''").unwrap(), "[(01, 02) (03, 04)]");
//! ```
use core::fmt;
use core::str::CharIndices;

use crate::boundless::Boundless;
use crate::enum_array::{EnumArray, Enumerated};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErr {
	/// A directive letter wasn't followed by `'`.
	ExpectedQuote { directive: char },
	UnterminatedLiteral { directive: char },
	/// Unescaped `}` at this byte offset.
	UnexpectedBrace { pos: usize },
	UnknownDirective { letter: char, pos: usize },
	InvalidValueSpec { spec: String },
}

impl fmt::Display for ParseErr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::ExpectedQuote { directive } => {
				write!(f, "expected ' after directive '{}'", directive)
			}
			Self::UnterminatedLiteral { directive } => {
				write!(f, "literal of directive '{}' is never closed", directive)
			}
			Self::UnexpectedBrace { pos } => {
				write!(f, "unescaped '}}' at offset {}", pos)
			}
			Self::UnknownDirective { letter, pos } => {
				write!(f, "unknown directive '{}' at offset {}", letter, pos)
			}
			Self::InvalidValueSpec { spec } => {
				write!(f, "invalid value format \"{}\"", spec)
			}
		}
	}
}

impl std::error::Error for ParseErr {}

/// A parsed container format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Spec {
	pub separator: String,
	pub prefix: String,
	pub suffix: String,
	/// Handed unparsed to each element.
	pub element: String,
}

impl Default for Spec {
	fn default() -> Self {
		Self {
			separator: ", ".into(),
			prefix: "[".into(),
			suffix: "]".into(),
			element: String::new(),
		}
	}
}

impl Spec {
	/// Later directives overwrite earlier ones with the same letter.
	pub fn parse(text: &str) -> Result<Self, ParseErr> {
		let mut spec = Self::default();
		let mut chars = text.char_indices();

		while let Some((pos, letter)) = chars.next() {
			let field = match letter {
				'e' => &mut spec.separator,
				'p' => &mut spec.prefix,
				's' => &mut spec.suffix,
				'f' => &mut spec.element,
				_ => return Err(ParseErr::UnknownDirective { letter, pos }),
			};
			*field = literal(&mut chars, letter)?;
		}

		Ok(spec)
	}

	/// Writes `items` between prefix and suffix, each in the element format.
	pub fn render_items<'a, T, I>(&self, items: I, out: &mut String) -> Result<(), ParseErr>
	where
		T: Render + ?Sized + 'a,
		I: IntoIterator<Item = &'a T>,
	{
		out.push_str(&self.prefix);
		for (i, item) in items.into_iter().enumerate() {
			if i > 0 {
				out.push_str(&self.separator);
			}
			item.render(&self.element, out)?;
		}
		out.push_str(&self.suffix);
		Ok(())
	}
}

fn literal(chars: &mut CharIndices, directive: char) -> Result<String, ParseErr> {
	match chars.next() {
		Some((_, '\'')) => {}
		_ => return Err(ParseErr::ExpectedQuote { directive }),
	}

	let mut text = String::new();
	loop {
		match chars.next() {
			Some((_, '\'')) => return Ok(text),
			Some((_, '\\')) => match chars.next() {
				Some((_, c)) => text.push(c),
				None => break,
			},
			Some((pos, '}')) => return Err(ParseErr::UnexpectedBrace { pos }),
			Some((_, c)) => text.push(c),
			None => break,
		}
	}

	Err(ParseErr::UnterminatedLiteral { directive })
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
	Left,
	Right,
	Center,
}

impl Align {
	fn from_char(c: char) -> Option<Self> {
		match c {
			'<' => Some(Self::Left),
			'>' => Some(Self::Right),
			'^' => Some(Self::Center),
			_ => None,
		}
	}
}

/// A parsed scalar format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValueSpec {
	pub fill: char,
	/// `None` means numbers go right and text goes left.
	pub align: Option<Align>,
	/// Show `+` on non-negative numbers.
	pub plus: bool,
	/// Pad numbers with zeros after the sign.
	pub zero: bool,
	/// At most `MAX_WIDTH`.
	pub width: usize,
	/// At most `MAX_WIDTH`.
	pub precision: Option<usize>,
}

/// Largest width or precision a value format accepts.
pub const MAX_WIDTH: usize = u16::MAX as usize;

impl Default for ValueSpec {
	fn default() -> Self {
		Self { fill: ' ', align: None, plus: false, zero: false, width: 0, precision: None }
	}
}

impl ValueSpec {
	pub fn parse(text: &str) -> Result<Self, ParseErr> {
		let invalid = || ParseErr::InvalidValueSpec { spec: text.to_string() };
		let bounded = |digits: String| {
			digits.parse::<u16>().map(usize::from).map_err(|_| invalid())
		};
		let chars: Vec<char> = text.chars().collect();
		let mut spec = Self::default();
		let mut i = 0;

		if let Some(align) = chars.get(1).and_then(|&c| Align::from_char(c)) {
			spec.fill = chars[0];
			spec.align = Some(align);
			i = 2;
		} else if let Some(align) = chars.first().and_then(|&c| Align::from_char(c)) {
			spec.align = Some(align);
			i = 1;
		}

		if chars.get(i) == Some(&'+') {
			spec.plus = true;
			i += 1;
		}
		if chars.get(i) == Some(&'0') {
			spec.zero = true;
			i += 1;
		}

		let (width, next) = digits(&chars, i);
		if let Some(width) = width {
			spec.width = bounded(width)?;
		}
		i = next;

		if chars.get(i) == Some(&'.') {
			let (precision, next) = digits(&chars, i + 1);
			let precision = precision.ok_or_else(invalid)?;
			spec.precision = Some(bounded(precision)?);
			i = next;
		}

		if i != chars.len() {
			return Err(invalid());
		}
		Ok(spec)
	}

	fn pad(&self, body: &str, default: Align) -> String {
		let len = body.chars().count();
		if len >= self.width {
			return body.to_string();
		}

		let gap = self.width - len;
		let (left, right) = match self.align.unwrap_or(default) {
			Align::Left => (0, gap),
			Align::Right => (gap, 0),
			Align::Center => (gap / 2, gap - gap / 2),
		};

		let capacity = gap
			.checked_mul(self.fill.len_utf8())
			.and_then(|fill| fill.checked_add(body.len()))
			.unwrap_or(body.len());
		let mut out = String::with_capacity(capacity);
		out.extend(core::iter::repeat(self.fill).take(left));
		out.push_str(body);
		out.extend(core::iter::repeat(self.fill).take(right));
		out
	}

	/// `body` is the number's plain rendering, `-` included.
	fn number(&self, body: String) -> String {
		let (sign, magnitude) = match body.strip_prefix('-') {
			Some(magnitude) => ("-", magnitude),
			None if self.plus => ("+", body.as_str()),
			None => ("", body.as_str()),
		};

		if self.zero && self.align.is_none() {
			let len = sign.len() + magnitude.chars().count();
			let zeros = self.width.saturating_sub(len);
			return format!("{}{}{}", sign, "0".repeat(zeros), magnitude);
		}

		self.pad(&format!("{}{}", sign, magnitude), Align::Right)
	}

	fn text(&self, body: &str, spec: &str) -> Result<String, ParseErr> {
		if self.plus || self.zero {
			return Err(ParseErr::InvalidValueSpec { spec: spec.to_string() });
		}

		Ok(match self.precision {
			Some(max) => self.pad(&body.chars().take(max).collect::<String>(), Align::Left),
			None => self.pad(body, Align::Left),
		})
	}
}

/// Run of ASCII digits starting at `start`, and the index just past it.
fn digits(chars: &[char], start: usize) -> (Option<String>, usize) {
	let end = chars[start.min(chars.len())..]
		.iter()
		.position(|c| !c.is_ascii_digit())
		.map_or(chars.len(), |n| start + n);

	if end > start {
		(Some(chars[start..end].iter().collect()), end)
	} else {
		(None, start)
	}
}

/// Anything that can write itself under a format string.
pub trait Render {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr>;
}

macro_rules! render_integer {
	($($t:ty),*) => {$(
		impl Render for $t {
			fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
				let value = ValueSpec::parse(spec)?;
				if value.precision.is_some() {
					return Err(ParseErr::InvalidValueSpec { spec: spec.to_string() });
				}
				out.push_str(&value.number(self.to_string()));
				Ok(())
			}
		}
	)*};
}

render_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! render_float {
	($($t:ty),*) => {$(
		impl Render for $t {
			fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
				let value = ValueSpec::parse(spec)?;
				let body = match value.precision {
					Some(precision) => format!("{:.*}", precision, self),
					None => self.to_string(),
				};
				out.push_str(&value.number(body));
				Ok(())
			}
		}
	)*};
}

render_float!(f32, f64);

impl Render for str {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		out.push_str(&ValueSpec::parse(spec)?.text(self, spec)?);
		Ok(())
	}
}

impl Render for String {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		self.as_str().render(spec, out)
	}
}

impl Render for char {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		self.encode_utf8(&mut [0; 4]).render(spec, out)
	}
}

impl Render for bool {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		let body = if *self { "true" } else { "false" };
		body.render(spec, out)
	}
}

impl<T: Render + ?Sized> Render for &T {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		(**self).render(spec, out)
	}
}

impl<T: Render> Render for [T] {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		Spec::parse(spec)?.render_items(self, out)
	}
}

impl<T: Render, const N: usize> Render for [T; N] {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		self.as_slice().render(spec, out)
	}
}

impl<T: Render> Render for Vec<T> {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		self.as_slice().render(spec, out)
	}
}

impl<T: Render + Default, C: AsRef<[T]>> Render for Boundless<T, C> {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		self.as_slice().render(spec, out)
	}
}

impl<E: Enumerated, T: Render, const N: usize> Render for EnumArray<E, T, N> {
	fn render(&self, spec: &str, out: &mut String) -> Result<(), ParseErr> {
		self.as_slice().render(spec, out)
	}
}

/// Renders `value` into a fresh string.
pub fn render<T: Render + ?Sized>(value: &T, spec: &str) -> Result<String, ParseErr> {
	let mut out = String::new();
	value.render(spec, &mut out)?;
	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::boundless::BoundlessVec;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	fn one_to_five() -> Vec<i32> {
		(1..=5).collect()
	}

	#[test]
	fn default_container() {
		assert_eq!(render(&one_to_five(), "").unwrap(), "[1, 2, 3, 4, 5]");
		assert_eq!(render(&Vec::<i32>::new(), "").unwrap(), "[]");
		assert_eq!(render(&["a", "b"], "").unwrap(), "[a, b]");
	}

	#[test]
	fn container_directives() {
		let v = one_to_five();
		assert_eq!(render(&v, "p'<'s'>'").unwrap(), "<1, 2, 3, 4, 5>");
		assert_eq!(render(&v, "e' -- '").unwrap(), "[1 -- 2 -- 3 -- 4 -- 5]");
		assert_eq!(render(&v, r"p'\{ 's' \}'").unwrap(), "{ 1, 2, 3, 4, 5 }");
		assert_eq!(render(&v, "f'0>2'").unwrap(), "[01, 02, 03, 04, 05]");
		assert_eq!(render(&v, "p''s''e''").unwrap(), "12345");
	}

	#[test]
	fn nested_containers() {
		let grid = vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]];
		assert_eq!(
			render(&grid, "").unwrap(),
			"[[1, 2, 3], [4, 5, 6], [7, 8, 9]]"
		);
		assert_eq!(
			render(&grid, r"f'p\'<\'s\'>\''").unwrap(),
			"[<1, 2, 3>, <4, 5, 6>, <7, 8, 9>]"
		);
		assert_eq!(
			render(&grid, r"p'['s']'f'f\'0>2\''").unwrap(),
			"[[01, 02, 03], [04, 05, 06], [07, 08, 09]]"
		);
	}

	#[test]
	fn later_directive_wins() {
		let spec = Spec::parse("p'('p'{'").unwrap();
		assert_eq!(spec.prefix, "{");
		assert_eq!(spec.suffix, "]");
	}

	#[test]
	fn parse_errors() {
		assert_eq!(
			Spec::parse("r'('"),
			Err(ParseErr::UnknownDirective { letter: 'r', pos: 0 })
		);
		assert_eq!(
			Spec::parse("p'<'u')'"),
			Err(ParseErr::UnknownDirective { letter: 'u', pos: 4 })
		);
		assert_eq!(Spec::parse("p"), Err(ParseErr::ExpectedQuote { directive: 'p' }));
		assert_eq!(Spec::parse("px"), Err(ParseErr::ExpectedQuote { directive: 'p' }));
		assert_eq!(
			Spec::parse("s'abc"),
			Err(ParseErr::UnterminatedLiteral { directive: 's' })
		);
		assert_eq!(
			Spec::parse(r"s'abc\"),
			Err(ParseErr::UnterminatedLiteral { directive: 's' })
		);
		assert_eq!(Spec::parse("p'}'"), Err(ParseErr::UnexpectedBrace { pos: 2 }));
	}

	#[test]
	fn element_errors_surface() {
		let err = render(&one_to_five(), "f'x'").unwrap_err();
		assert_eq!(err, ParseErr::InvalidValueSpec { spec: "x".into() });
		assert!(render(&one_to_five(), "f'.2'").is_err());
		assert!(render(&["a"], "f'+'").is_err());
	}

	#[test]
	fn scalar_formats() {
		assert_eq!(render(&42, "").unwrap(), "42");
		assert_eq!(render(&42, "5").unwrap(), "   42");
		assert_eq!(render(&-42, "05").unwrap(), "-0042");
		assert_eq!(render(&42, "+").unwrap(), "+42");
		assert_eq!(render(&42, "*^6").unwrap(), "**42**");
		assert_eq!(render(&42, "<4").unwrap(), "42  ");
		assert_eq!(render(&3.14159, ".2").unwrap(), "3.14");
		assert_eq!(render(&-1.5f32, "+07.2").unwrap(), "-001.50");
		assert_eq!(render("abc", "5").unwrap(), "abc  ");
		assert_eq!(render("abcdef", ".3").unwrap(), "abc");
		assert_eq!(render(&'x', ">3").unwrap(), "  x");
		assert_eq!(render(&true, "").unwrap(), "true");
	}

	#[test]
	fn value_spec_fields() {
		let spec = ValueSpec::parse("_^+012.3").unwrap();
		assert_eq!(
			spec,
			ValueSpec {
				fill: '_',
				align: Some(Align::Center),
				plus: true,
				zero: true,
				width: 12,
				precision: Some(3),
			}
		);
		assert!(ValueSpec::parse("5.").is_err());
		assert!(ValueSpec::parse("99999999999999999999999").is_err());
		assert_eq!(ValueSpec::parse("65535").unwrap().width, MAX_WIDTH);
	}

	#[test]
	fn oversized_widths_are_rejected() {
		assert_eq!(
			render(&1, "9999999999999999999"),
			Err(ParseErr::InvalidValueSpec { spec: "9999999999999999999".into() })
		);
		assert!(matches!(
			render(&1, "\u{1F600}>9999999999999999999"),
			Err(ParseErr::InvalidValueSpec { .. })
		));
		assert!(render("x", ".65536").is_err());
		assert!(render(&1.0, "65536").is_err());

		let wide = render(&1, "\u{1F600}>300").unwrap();
		assert_eq!(wide.chars().count(), 300);
		assert!(wide.ends_with("\u{1F600}1"));
	}

	#[test]
	fn other_containers() {
		let v: BoundlessVec<u8> = [1, 2].into_iter().collect();
		assert_eq!(render(&v, "p'('s')'").unwrap(), "(1, 2)");

		#[derive(Clone, Copy, Debug)]
		enum Axis {
			X,
			Y,
		}
		crate::enumerated!(Axis { X, Y });
		let point = EnumArray::<Axis, f64, 2>::from_array([0.5, 2.0]);
		assert_eq!(render(&point, "f'.1'").unwrap(), "[0.5, 2.0]");
	}

	proptest! {
		#[test]
		fn default_matches_debug(v in proptest::collection::vec(any::<i64>(), 0..16)) {
			assert_eq!(render(&v, "").unwrap(), format!("{:?}", v));
		}

		#[test]
		fn width_is_a_minimum(n in any::<i32>(), width in 0usize..16) {
			let out = render(&n, &width.to_string()).unwrap();
			assert_eq!(out.trim_start(), n.to_string());
			assert_eq!(out.len(), width.max(n.to_string().len()));
		}
	}
}
