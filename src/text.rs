//! String flavours of the sequence algorithms, plus joining, trimming, case
//! folding and word wrapping.
//!
//! Everything works on `char`s rather than bytes, so results are always valid
//! UTF-8 and never split a code point.
use core::fmt;

use crate::seq;

/// Whitespace, plus vertical tab, form feed and backspace.
pub const DEFAULT_DELIMS: &str = " \t\r\n\x0c\x0b\x08";

fn chars(text: &str) -> Vec<char> {
	text.chars().collect()
}

fn string(chars: &[char]) -> String {
	chars.iter().collect()
}

fn strings(pieces: Vec<Vec<char>>) -> Vec<String> {
	pieces.iter().map(|piece| string(piece)).collect()
}

fn patterns<S: AsRef<str>>(patterns: &[S]) -> Vec<Vec<char>> {
	patterns.iter().map(|p| chars(p.as_ref())).collect()
}

pub fn filter_out_seq(text: &str, pattern: &str) -> String {
	string(&seq::filter_out_seq(&chars(text), &chars(pattern)))
}

/// Drops every character that appears in `characters`.
pub fn filter_out_occ(text: &str, characters: &str) -> String {
	text.chars().filter(|&c| !characters.contains(c)).collect()
}

pub fn filter_out_occ_seq<S: AsRef<str>>(text: &str, pats: &[S]) -> String {
	string(&seq::filter_out_occ_seq(&chars(text), &patterns(pats)))
}

pub fn filter_out(text: &str, c: char) -> String {
	string(&seq::filter_out(&chars(text), &c))
}

/// `seq::repeat` over characters: `repeat("abcd", 1.5)` is `"abcdab"`.
pub fn repeat<N: seq::Times>(text: &str, n: N) -> String {
	string(&seq::repeat(&chars(text), n))
}

pub fn split_seq(text: &str, pattern: &str) -> Vec<String> {
	strings(seq::split_seq(&chars(text), &chars(pattern)))
}

pub fn split_occ(text: &str, characters: &str) -> Vec<String> {
	strings(seq::split_occ(&chars(text), &chars(characters)))
}

pub fn split_occ_seq<S: AsRef<str>>(text: &str, pats: &[S]) -> Vec<String> {
	strings(seq::split_occ_seq(&chars(text), &patterns(pats)))
}

pub fn split(text: &str, c: char) -> Vec<String> {
	strings(seq::split(&chars(text), &c))
}

/// How `join` lays out its items.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Join<'a> {
	/// Between consecutive items.
	pub separator: &'a str,
	/// Before every item.
	pub prefix: &'a str,
	/// After every item.
	pub suffix: &'a str,
}

impl Default for Join<'_> {
	fn default() -> Self {
		Self { separator: ", ", prefix: "", suffix: "" }
	}
}

impl<'a> Join<'a> {
	/// Every item wrapped in `quote`, comma separated.
	pub fn quoted(quote: &'a str) -> Self {
		Self { prefix: quote, suffix: quote, ..Self::default() }
	}
}

pub fn join<I, F>(items: I, mut conv: F, style: &Join) -> String
where
	I: IntoIterator,
	F: FnMut(I::Item) -> String,
{
	let mut out = String::new();
	for (i, item) in items.into_iter().enumerate() {
		if i > 0 {
			out.push_str(style.separator);
		}
		out.push_str(style.prefix);
		out.push_str(&conv(item));
		out.push_str(style.suffix);
	}
	out
}

/// `join` using each item's `Display`.
pub fn join_display<I>(items: I, style: &Join) -> String
where
	I: IntoIterator,
	I::Item: fmt::Display,
{
	join(items, |item| item.to_string(), style)
}

pub fn trim_left<'a>(text: &'a str, delims: &str) -> &'a str {
	text.trim_start_matches(|c: char| delims.contains(c))
}

pub fn trim_right<'a>(text: &'a str, delims: &str) -> &'a str {
	text.trim_end_matches(|c: char| delims.contains(c))
}

pub fn trim<'a>(text: &'a str, delims: &str) -> &'a str {
	trim_left(trim_right(text, delims), delims)
}

pub fn to_upper(text: &str) -> String {
	text.to_ascii_uppercase()
}

pub fn to_lower(text: &str) -> String {
	text.to_ascii_lowercase()
}

pub fn eq_ignore_case(a: &str, b: &str) -> bool {
	a.eq_ignore_ascii_case(b)
}

/// Word wrapping options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Wrap<'a> {
	pub width: usize,
	/// Cut words longer than `width` instead of letting them overflow.
	pub force: bool,
	pub delims: &'a str,
}

impl Default for Wrap<'_> {
	fn default() -> Self {
		Self { width: 80, force: false, delims: DEFAULT_DELIMS }
	}
}

/// Breaks `text` into lines.
///
/// Each break replaces the last delimiter among the next `width + 1`
/// characters. When there is none, a forced wrap cuts exactly `width`
/// characters off, and an unforced one runs on to the next delimiter.
/// Text of `width + 1` characters or fewer is never broken.
pub fn word_wrap(text: &str, options: &Wrap) -> Vec<String> {
	let is_delim = |c: &char| options.delims.contains(*c);
	let window = options.width + 1;
	// a zero width cut would never make progress
	let cut = options.width.max(1);

	let all = chars(text);
	let mut rest = &all[..];
	let mut lines = vec![];

	while rest.len() > window {
		if let Some(pos) = rest[..window].iter().rposition(is_delim) {
			lines.push(string(&rest[..pos]));
			rest = &rest[pos + 1..];
		} else if options.force {
			lines.push(string(&rest[..cut]));
			rest = &rest[cut..];
		} else if let Some(offset) = rest[window..].iter().position(is_delim) {
			let pos = window + offset;
			lines.push(string(&rest[..pos]));
			rest = &rest[pos + 1..];
		} else {
			lines.push(string(rest));
			rest = &[];
		}
	}

	if !rest.is_empty() {
		lines.push(string(rest));
	}
	lines
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::test_utils::*;
	use pretty_assertions::assert_eq;
	use proptest::prelude::*;

	const THE_TEXT: &str = "This is the text with the once again a lot of the \
		words in the text as of the day I am writing the text as this is the \
		way to test the text";

	const LYRIC: &str = "Never gonna give you up, Never gonna let you down, \
		Never gonna run around and desert you. Never gonna make you cry, \
		Never gonna say Lopadotemachoselachogaleokranioleipsanodrimhypotrimmatosilphioparaomelitokatakechymenokichlepikossyphophattoperisteralektryonoptekephalliokigklopeleiolagoiosiraiobaphetraganopterygon, \
		Never gonna tell a lie and hurt you.";

	#[test]
	fn split_text_on_pattern() {
		let expected = vec![
			"This is ",
			"text with ",
			"once again a lot of ",
			"words in ",
			"text as of ",
			"day I am writing ",
			"text as this is ",
			"way to test ",
			"text",
		];
		assert_eq!(split_seq(THE_TEXT, "the "), expected);
	}

	#[test]
	fn split_text_on_char() {
		let words = split(THE_TEXT, ' ');
		assert_eq!(words.len(), 34);
		assert_eq!(words[..4], ["This", "is", "the", "text"]);
	}

	#[test]
	fn split_text_on_any() {
		assert_eq!(split_occ("a,b;c", ",;"), vec!["a", "b", "c"]);
		assert_eq!(split_occ_seq("a--b==c", &["--", "=="]), vec!["a", "b", "c"]);
	}

	#[test]
	fn filter_text() {
		let filtered = filter_out_seq(
			"This is the text with a lot of \"the\" words in the text",
			"the ",
		);
		assert_eq!(filtered, "This is text with a lot of \"the\" words in text");
		assert_eq!(
			filter_out_occ("This is a very unreadable text", " "),
			"Thisisaveryunreadabletext"
		);
		assert_eq!(filter_out("ünïcödé", 'ï'), "üncödé");
		assert_eq!(filter_out_occ_seq("aXXbYYc", &["XX", "YY"]), "abc");
	}

	#[test]
	fn repeat_text() {
		assert_eq!(repeat("Spam. ", 3), "Spam. Spam. Spam. ");
		assert_eq!(repeat("abcd", 1.5), "abcdab");
		assert_eq!(repeat("ab", -1), "");
	}

	#[test]
	fn join_with_affixes() {
		let quoted = join_display(["a", "b"], &Join::quoted("\""));
		assert_eq!(quoted, "\"a\", \"b\"");

		let style = Join { separator: "\n", prefix: "  ", suffix: ";" };
		assert_eq!(join_display(1..=3, &style), "  1;\n  2;\n  3;");
		assert_eq!(join(Vec::<u8>::new(), |b| b.to_string(), &style), "");
	}

	#[test]
	fn trimming() {
		let text = " \tAyo word \t";
		assert_eq!(trim_left(text, DEFAULT_DELIMS), "Ayo word \t");
		assert_eq!(trim_right(text, DEFAULT_DELIMS), " \tAyo word");
		assert_eq!(trim(text, DEFAULT_DELIMS), "Ayo word");
		assert_eq!(trim("xxhixx", "x"), "hi");
	}

	#[test]
	fn case_folding() {
		assert_eq!(to_upper("LaTeX"), "LATEX");
		assert_eq!(to_lower("LaTeX"), "latex");
		assert!(eq_ignore_case("LaTeX", "latex"));
		assert!(!eq_ignore_case("LaTeX", "lotex"));
	}

	#[test]
	fn wrap_runs_long_words_on() {
		let options = Wrap { width: 40, ..Wrap::default() };
		let expected = vec![
			"Never gonna give you up, Never gonna let",
			"you down, Never gonna run around and",
			"desert you. Never gonna make you cry,",
			"Never gonna say",
			"Lopadotemachoselachogaleokranioleipsanodrimhypotrimmatosilphioparaomelitokatakechymenokichlepikossyphophattoperisteralektryonoptekephalliokigklopeleiolagoiosiraiobaphetraganopterygon,",
			"Never gonna tell a lie and hurt you.",
		];
		assert_eq!(word_wrap(LYRIC, &options), expected);
	}

	#[test]
	fn wrap_forced_cuts_long_words() {
		let options = Wrap { width: 40, force: true, ..Wrap::default() };
		let expected = vec![
			"Never gonna give you up, Never gonna let",
			"you down, Never gonna run around and",
			"desert you. Never gonna make you cry,",
			"Never gonna say",
			"Lopadotemachoselachogaleokranioleipsanod",
			"rimhypotrimmatosilphioparaomelitokatakec",
			"hymenokichlepikossyphophattoperisteralek",
			"tryonoptekephalliokigklopeleiolagoiosira",
			"iobaphetraganopterygon, Never gonna tell",
			"a lie and hurt you.",
		];
		assert_eq!(word_wrap(LYRIC, &options), expected);
	}

	#[test]
	fn wrap_run_on_stops_at_delimiter_just_past_window() {
		// the space sits at index width + 1, right after the window
		let options = Wrap { width: 3, ..Wrap::default() };
		assert_eq!(word_wrap("abcd ef gh", &options), vec!["abcd", "ef", "gh"]);
		assert_eq!(word_wrap("abcd efgh", &options), vec!["abcd", "efgh"]);
	}

	#[test]
	fn wrap_without_any_delimiter() {
		let options = Wrap { width: 3, ..Wrap::default() };
		assert_eq!(word_wrap("abcdefgh", &options), vec!["abcdefgh"]);
		assert_eq!(word_wrap("", &options), Vec::<String>::new());
	}

	proptest! {
		#[test]
		fn forced_wrap_lines_fit(text in arb_text(64), width in 1usize..12) {
			let options = Wrap { width, force: true, ..Wrap::default() };
			let lines = word_wrap(&text, &options);
			let last = lines.len().saturating_sub(1);
			for (i, line) in lines.iter().enumerate() {
				let limit = if i == last { width + 1 } else { width };
				assert!(line.chars().count() <= limit);
			}
		}

		#[test]
		fn split_text_rejoins(text in arb_text(32).prop_filter("non-empty", |t| !t.is_empty())) {
			assert_eq!(split_seq(&text, "a").join("a"), text);
		}
	}
}
