//! Sequence arithmetic: combining, filtering, repeating and splitting.
//!
//! Every function borrows its inputs and returns a freshly allocated result.
//! Nothing here mutates the sequences it is given, and nothing here can fail:
//! the worst a degenerate input can do is produce an empty result.
//!
//! Patterns are matched as contiguous runs using `PartialEq`, scanning left to
//! right, and matches never overlap.

/// Copies `seq[first..last]` into a new sequence, clamping both ends.
pub fn sub<T: Clone>(seq: &[T], first: usize, last: usize) -> Vec<T> {
	let last = last.min(seq.len());
	let first = first.min(last);
	seq[first..last].to_vec()
}

/// Elements of `a` followed by the elements of `b`.
pub fn combine<T: Clone>(a: &[T], b: &[T]) -> Vec<T> {
	let mut result = Vec::with_capacity(a.len() + b.len());
	result.extend_from_slice(a);
	result.extend_from_slice(b);
	result
}

/// `combine` with a single trailing element.
pub fn append<T: Clone>(seq: &[T], value: &T) -> Vec<T> {
	combine(seq, core::slice::from_ref(value))
}

/// Start of the first occurrence of a non-empty `pattern`.
fn find<T: PartialEq>(seq: &[T], pattern: &[T]) -> Option<usize> {
	debug_assert!(!pattern.is_empty());
	seq.windows(pattern.len()).position(|window| window == pattern)
}

/// Removes every non-overlapping occurrence of `pattern`.
///
/// This is `split_seq` followed by concatenating the pieces, so an empty
/// pattern leaves the sequence untouched.
pub fn filter_out_seq<T>(seq: &[T], pattern: &[T]) -> Vec<T>
where
	T: Clone + PartialEq,
{
	split_seq(seq, pattern).concat()
}

/// Keeps only the elements that do not appear in `values`, in order.
pub fn filter_out_occ<T>(seq: &[T], values: &[T]) -> Vec<T>
where
	T: Clone + PartialEq,
{
	seq.iter().filter(|elem| !values.contains(elem)).cloned().collect()
}

/// Applies `filter_out_seq` once per pattern, in the order given.
///
/// Removing one pattern can create a new occurrence of an earlier one; that
/// occurrence survives.
pub fn filter_out_occ_seq<T, P>(seq: &[T], patterns: &[P]) -> Vec<T>
where
	T: Clone + PartialEq,
	P: AsRef<[T]>,
{
	patterns
		.iter()
		.fold(seq.to_vec(), |acc, pattern| filter_out_seq(&acc, pattern.as_ref()))
}

/// Removes every occurrence of a single value.
pub fn filter_out<T>(seq: &[T], value: &T) -> Vec<T>
where
	T: Clone + PartialEq,
{
	filter_out_seq(seq, core::slice::from_ref(value))
}

/// A repetition count: any primitive integer or float.
pub trait Times: Copy {
	/// Whole number of copies, and the fraction of one further copy.
	/// Negative counts (and NaN) are treated as zero.
	fn split_count(self) -> (usize, f64);
}

macro_rules! times_unsigned {
	($($t:ty),*) => {$(
		impl Times for $t {
			fn split_count(self) -> (usize, f64) {
				(usize::try_from(self).unwrap_or(usize::MAX), 0.0)
			}
		}
	)*};
}

macro_rules! times_signed {
	($($t:ty),*) => {$(
		impl Times for $t {
			fn split_count(self) -> (usize, f64) {
				if self <= 0 {
					return (0, 0.0);
				}
				(usize::try_from(self).unwrap_or(usize::MAX), 0.0)
			}
		}
	)*};
}

times_unsigned!(u8, u16, u32, u64, u128, usize);
times_signed!(i8, i16, i32, i64, i128, isize);

impl Times for f64 {
	fn split_count(self) -> (usize, f64) {
		// `>` is false for NaN, which lands on zero as well
		let n = if self > 0.0 { self } else { 0.0 };
		(n.trunc() as usize, n.fract())
	}
}

impl Times for f32 {
	fn split_count(self) -> (usize, f64) {
		f64::from(self).split_count()
	}
}

/// Concatenates `n` copies of `seq`.
///
/// A fractional count appends a prefix of `seq` after the whole copies:
/// `floor(fraction * seq.len())` elements. So `repeat(&[1, 2, 3, 4, 5], 3.6)`
/// is three copies followed by `[1, 2, 3]`.
///
/// # Panics
///
/// When the result length does not fit in a `usize`.
pub fn repeat<T: Clone, N: Times>(seq: &[T], n: N) -> Vec<T> {
	if seq.is_empty() {
		return Vec::new();
	}

	let (whole, fraction) = n.split_count();
	let partial = ((fraction * seq.len() as f64).floor() as usize).min(seq.len());

	let total = seq.len().checked_mul(whole).and_then(|len| len.checked_add(partial));
	let mut result = match total {
		Some(total) => Vec::with_capacity(total),
		None => panic!("repeat result exceeds capacity ({} copies of {})", whole, seq.len()),
	};
	for _ in 0..whole {
		result.extend_from_slice(seq);
	}
	result.extend_from_slice(&seq[..partial]);
	result
}

/// Splits at every non-overlapping occurrence of `pattern`, which is
/// consumed.
///
/// - A sequence without the pattern comes back as a single piece.
/// - Leading, trailing and adjacent occurrences produce empty pieces.
/// - An empty sequence produces no pieces at all.
/// - An empty pattern splits between every element.
pub fn split_seq<T>(seq: &[T], pattern: &[T]) -> Vec<Vec<T>>
where
	T: Clone + PartialEq,
{
	if pattern.is_empty() {
		return seq.iter().map(|elem| vec![elem.clone()]).collect();
	}

	if seq.is_empty() {
		return Vec::new();
	}

	let mut pieces = Vec::new();
	let mut rest = seq;
	while let Some(pos) = find(rest, pattern) {
		pieces.push(rest[..pos].to_vec());
		rest = &rest[pos + pattern.len()..];
	}
	pieces.push(rest.to_vec());
	pieces
}

/// Splits at every single element that is a member of `values`.
///
/// Each separator consumes exactly one element, so consecutive separators
/// give empty pieces. A final separator does not add a trailing empty piece.
pub fn split_occ<T>(seq: &[T], values: &[T]) -> Vec<Vec<T>>
where
	T: Clone + PartialEq,
{
	let mut pieces = Vec::new();
	let mut rest = seq;
	while !rest.is_empty() {
		match rest.iter().position(|elem| values.contains(elem)) {
			Some(pos) => {
				pieces.push(rest[..pos].to_vec());
				rest = &rest[pos + 1..];
			}
			None => {
				pieces.push(rest.to_vec());
				break;
			}
		}
	}
	pieces
}

/// Splits at the earliest occurrence of any of `patterns`, repeatedly.
///
/// When several patterns start at the same earliest position the first one
/// in `patterns` wins. Empty patterns never match. Like `split_occ`, a final
/// separator does not add a trailing empty piece.
pub fn split_occ_seq<T, P>(seq: &[T], patterns: &[P]) -> Vec<Vec<T>>
where
	T: Clone + PartialEq,
	P: AsRef<[T]>,
{
	let mut pieces = Vec::new();
	let mut rest = seq;
	while !rest.is_empty() {
		// min_by_key keeps the first of several equal minimums
		let earliest = patterns
			.iter()
			.map(AsRef::as_ref)
			.filter(|pattern| !pattern.is_empty())
			.filter_map(|pattern| find(rest, pattern).map(|pos| (pos, pattern.len())))
			.min_by_key(|&(pos, _)| pos);

		match earliest {
			Some((pos, len)) => {
				pieces.push(rest[..pos].to_vec());
				rest = &rest[pos + len..];
			}
			None => {
				pieces.push(rest.to_vec());
				break;
			}
		}
	}
	pieces
}

/// Splits at every occurrence of a single value.
pub fn split<T>(seq: &[T], value: &T) -> Vec<Vec<T>>
where
	T: Clone + PartialEq,
{
	split_seq(seq, core::slice::from_ref(value))
}
