//! Containers that never fail on an out-of-range index.
//!
//! `Boundless` wraps anything that can be viewed as a slice. In range it
//! behaves exactly like the slice. Out of range:
//! - a read sees `T::default()`
//! - a write lands in a scratch cell owned by the wrapper, reset to the
//!   default before every out-of-range access and never part of the contents
//!
//! So an out-of-range write is discarded, and the length and in-range
//! elements never change because of one.
use core::fmt;
use core::ops;

use tracing::trace;

pub struct Boundless<T, C> {
	inner: C,
	/// What shared out-of-range reads point at. Never handed out mutably.
	fallback: T,
	/// What out-of-range writes point at.
	scratch: T,
}

pub type BoundlessVec<T> = Boundless<T, Vec<T>>;
pub type BoundlessArray<T, const N: usize> = Boundless<T, [T; N]>;
pub type BoundlessSlice<'a, T> = Boundless<T, &'a [T]>;
pub type BoundlessSliceMut<'a, T> = Boundless<T, &'a mut [T]>;
/// Bytes of a string slice. Out of range reads are `0`.
pub type BoundlessStr<'a> = Boundless<u8, &'a str>;
/// Bytes of an owned string. Read only: `String` can't lend `&mut [u8]`, since
/// a byte write could leave it holding invalid UTF-8. Use `BoundlessChars` for
/// editable text.
pub type BoundlessString = Boundless<u8, String>;
/// Editable text, one `char` per element. Out of range reads are `'\0'`.
pub type BoundlessChars = Boundless<char, Vec<char>>;

impl BoundlessChars {
	pub fn from_text(text: &str) -> Self {
		text.chars().collect()
	}

	pub fn to_text(&self) -> String {
		self.iter().collect()
	}
}

impl<T: Default, C: AsRef<[T]>> Boundless<T, C> {
	pub fn new(inner: C) -> Self {
		Self { inner, fallback: T::default(), scratch: T::default() }
	}

	pub fn into_inner(self) -> C {
		self.inner
	}

	pub fn inner(&self) -> &C {
		&self.inner
	}

	#[inline]
	pub fn as_slice(&self) -> &[T] {
		self.inner.as_ref()
	}

	#[inline]
	pub fn len(&self) -> usize {
		self.as_slice().len()
	}

	#[inline]
	pub fn is_empty(&self) -> bool {
		self.as_slice().is_empty()
	}

	pub fn iter(&self) -> core::slice::Iter<'_, T> {
		self.as_slice().iter()
	}
}

impl<T: Default + Clone, C: AsRef<[T]>> Boundless<T, C> {
	/// Element at `index`, or the default past the end.
	pub fn get(&self, index: usize) -> T {
		self[index].clone()
	}

	pub fn front(&self) -> T {
		self.get(0)
	}

	pub fn back(&self) -> T {
		self.get(self.len().wrapping_sub(1))
	}
}

impl<T, C> Boundless<T, C>
where
	T: Default,
	C: AsRef<[T]> + AsMut<[T]>,
{
	/// Element at `index`, or a freshly reset scratch cell past the end.
	///
	/// The borrow ends before the next access, so nothing written to the
	/// scratch cell can be observed through a later one.
	pub fn get_mut(&mut self, index: usize) -> &mut T {
		let len = self.len();
		if index < len {
			return &mut self.inner.as_mut()[index];
		}

		trace!(index, len, "discarding out of range write");
		self.scratch = T::default();
		&mut self.scratch
	}

	pub fn front_mut(&mut self) -> &mut T {
		self.get_mut(0)
	}

	pub fn back_mut(&mut self) -> &mut T {
		let last = self.len().wrapping_sub(1);
		self.get_mut(last)
	}
}

impl<T: Default, C: AsRef<[T]>> ops::Index<usize> for Boundless<T, C> {
	type Output = T;

	fn index(&self, index: usize) -> &Self::Output {
		match self.as_slice().get(index) {
			Some(elem) => elem,
			None => {
				trace!(index, len = self.len(), "out of range read");
				&self.fallback
			}
		}
	}
}

impl<T, C> ops::IndexMut<usize> for Boundless<T, C>
where
	T: Default,
	C: AsRef<[T]> + AsMut<[T]>,
{
	fn index_mut(&mut self, index: usize) -> &mut Self::Output {
		self.get_mut(index)
	}
}

impl<T: Clone, C: Clone> Clone for Boundless<T, C> {
	fn clone(&self) -> Self {
		Self {
			inner: self.inner.clone(),
			fallback: self.fallback.clone(),
			scratch: self.fallback.clone(),
		}
	}
}

impl<T: Default, C: AsRef<[T]> + Default> Default for Boundless<T, C> {
	fn default() -> Self {
		Self::new(C::default())
	}
}

// Scratch is not part of the contents.
impl<T, C> PartialEq for Boundless<T, C>
where
	T: Default + PartialEq,
	C: AsRef<[T]>,
{
	fn eq(&self, other: &Self) -> bool {
		self.as_slice() == other.as_slice()
	}
}

impl<T: Default + fmt::Debug, C: AsRef<[T]>> fmt::Debug for Boundless<T, C> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_list().entries(self.iter()).finish()
	}
}

impl<T: Default> FromIterator<T> for BoundlessVec<T> {
	fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
		Self::new(iter.into_iter().collect())
	}
}

impl<'a, T: Default, C: AsRef<[T]>> IntoIterator for &'a Boundless<T, C> {
	type Item = &'a T;
	type IntoIter = core::slice::Iter<'a, T>;

	fn into_iter(self) -> Self::IntoIter {
		self.iter()
	}
}
