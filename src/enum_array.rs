//! Fixed arrays indexed by the variants of a field-less enum.
//!
//! The enum declares its own variant list through `Enumerated` (usually via
//! the `enumerated!` macro), and the array checks once, when it's built, that
//! the variants map densely onto `0..N`.
use core::fmt;
use core::marker::PhantomData;
use core::ops;

/// A closed enumeration whose variants index `0..COUNT`.
pub trait Enumerated: Copy + 'static {
	/// Every variant.
	const ALL: &'static [Self];
	/// Number of valid indices.
	const COUNT: usize;

	fn index(self) -> usize;
}

/// Implements `Enumerated` for a field-less enum from its variant list.
///
/// ```
/// #[derive(Clone, Copy, Debug)]
/// enum Channel { Red, Green, Blue }
/// seqtools::enumerated!(Channel { Red, Green, Blue });
///
/// let mut levels = seqtools::enum_array::EnumArray::<Channel, u8, 3>::new();
/// levels[Channel::Green] = 200;
/// assert_eq!(levels.as_slice(), &[0, 200, 0]);
/// ```
#[macro_export]
macro_rules! enumerated {
	($name:ident { $($variant:ident),+ $(,)? }) => {
		impl $crate::enum_array::Enumerated for $name {
			const ALL: &'static [Self] = &[$($name::$variant),+];
			const COUNT: usize = Self::ALL.len();

			fn index(self) -> usize {
				self as usize
			}
		}
	};
}

/// Panics unless `E` maps its variants one-to-one onto `0..len`.
fn validate<E: Enumerated>(len: usize) {
	assert_eq!(len, E::COUNT, "array length must equal the variant count");

	let mut seen = vec![false; len];
	for variant in E::ALL {
		let i = variant.index();
		assert!(i < len && !seen[i], "variant index {} is out of place", i);
		seen[i] = true;
	}
	assert!(seen.iter().all(|&s| s), "variant indices must cover 0..{}", len);
}

/// The variant whose index is `i`. Only called after `validate`.
fn variant<E: Enumerated>(i: usize) -> E {
	E::ALL
		.iter()
		.copied()
		.find(|variant| variant.index() == i)
		.unwrap_or_else(|| unreachable!("validated enumeration has index {}", i))
}

pub struct EnumArray<E, T, const N: usize> {
	items: [T; N],
	_marker: PhantomData<E>,
}

impl<E: Enumerated, T, const N: usize> EnumArray<E, T, N> {
	pub fn from_array(items: [T; N]) -> Self {
		validate::<E>(N);
		Self { items, _marker: PhantomData }
	}

	pub fn from_fn(mut f: impl FnMut(E) -> T) -> Self {
		validate::<E>(N);
		let items = core::array::from_fn(|i| f(variant(i)));
		Self { items, _marker: PhantomData }
	}

	/// Checked access.
	pub fn get(&self, e: E) -> Option<&T> {
		self.items.get(e.index())
	}

	pub fn get_mut(&mut self, e: E) -> Option<&mut T> {
		self.items.get_mut(e.index())
	}

	#[inline]
	pub fn len(&self) -> usize {
		N
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		N == 0
	}

	pub fn as_slice(&self) -> &[T] {
		&self.items
	}

	pub fn as_mut_slice(&mut self) -> &mut [T] {
		&mut self.items
	}

	pub fn into_array(self) -> [T; N] {
		self.items
	}

	/// Pairs of variant and element, in the enum's declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (E, &T)> + '_ {
		E::ALL.iter().map(move |&e| (e, &self.items[e.index()]))
	}
}

impl<E: Enumerated, T: Default, const N: usize> EnumArray<E, T, N> {
	pub fn new() -> Self {
		Self::from_fn(|_| T::default())
	}
}

impl<E: Enumerated, T: Default, const N: usize> Default for EnumArray<E, T, N> {
	fn default() -> Self {
		Self::new()
	}
}

/// Unchecked access: panics like a plain array on a bad index.
impl<E: Enumerated, T, const N: usize> ops::Index<E> for EnumArray<E, T, N> {
	type Output = T;

	fn index(&self, e: E) -> &Self::Output {
		&self.items[e.index()]
	}
}

impl<E: Enumerated, T, const N: usize> ops::IndexMut<E> for EnumArray<E, T, N> {
	fn index_mut(&mut self, e: E) -> &mut Self::Output {
		&mut self.items[e.index()]
	}
}

impl<E, T: Clone, const N: usize> Clone for EnumArray<E, T, N> {
	fn clone(&self) -> Self {
		Self { items: self.items.clone(), _marker: PhantomData }
	}
}

impl<E, T: PartialEq, const N: usize> PartialEq for EnumArray<E, T, N> {
	fn eq(&self, other: &Self) -> bool {
		self.items == other.items
	}
}

impl<E, T, const N: usize> fmt::Debug for EnumArray<E, T, N>
where
	E: Enumerated + fmt::Debug,
	T: fmt::Debug,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_map().entries(self.iter()).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[derive(Clone, Copy, Debug, PartialEq)]
	enum Suit {
		Clubs,
		Diamonds,
		Hearts,
		Spades,
	}
	enumerated!(Suit { Clubs, Diamonds, Hearts, Spades });

	#[derive(Clone, Copy, Debug)]
	enum Gappy {
		First = 0,
		Third = 2,
	}
	enumerated!(Gappy { First, Third });

	#[test]
	fn index_by_variant() {
		let mut counts = EnumArray::<Suit, u32, 4>::new();
		counts[Suit::Hearts] += 3;
		counts[Suit::Clubs] = 1;
		assert_eq!(counts.as_slice(), &[1, 0, 3, 0]);
		assert_eq!(counts.get(Suit::Hearts), Some(&3));
		assert_eq!(Suit::COUNT, 4);
	}

	#[test]
	fn from_fn_sees_each_variant() {
		let names = EnumArray::<Suit, String, 4>::from_fn(|s| format!("{:?}", s));
		assert_eq!(names[Suit::Diamonds], "Diamonds");
		let order: Vec<Suit> = names.iter().map(|(s, _)| s).collect();
		assert_eq!(order, Suit::ALL.to_vec());
	}

	#[test]
	fn debug_lists_variants() {
		let a = EnumArray::<Suit, u8, 4>::from_array([1, 2, 3, 4]);
		assert_eq!(
			format!("{:?}", a),
			"{Clubs: 1, Diamonds: 2, Hearts: 3, Spades: 4}"
		);
	}

	#[test]
	#[should_panic(expected = "array length must equal the variant count")]
	fn wrong_length_is_rejected() {
		let _ = EnumArray::<Suit, u8, 3>::new();
	}

	#[test]
	#[should_panic(expected = "out of place")]
	fn sparse_enum_is_rejected() {
		let _ = EnumArray::<Gappy, u8, 2>::new();
	}
}
