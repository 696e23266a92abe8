//! Values reached through accessor closures.
//!
//! Reads and writes are always explicit `get`/`set` calls. A getter and a
//! setter usually share their state through `Rc<Cell<_>>` or similar.
use core::fmt;

/// A value computed on every read.
pub struct ReadOnly<'a, T> {
	getter: Box<dyn Fn() -> T + 'a>,
}

impl<'a, T> ReadOnly<'a, T> {
	pub fn new(getter: impl Fn() -> T + 'a) -> Self {
		Self { getter: Box::new(getter) }
	}

	pub fn get(&self) -> T {
		(self.getter)()
	}
}

impl<T: fmt::Debug> fmt::Debug for ReadOnly<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("ReadOnly").field(&self.get()).finish()
	}
}

pub struct Property<'a, T> {
	getter: Box<dyn Fn() -> T + 'a>,
	setter: Box<dyn FnMut(T) + 'a>,
}

impl<'a, T> Property<'a, T> {
	pub fn new(getter: impl Fn() -> T + 'a, setter: impl FnMut(T) + 'a) -> Self {
		Self { getter: Box::new(getter), setter: Box::new(setter) }
	}

	pub fn get(&self) -> T {
		(self.getter)()
	}

	pub fn set(&mut self, value: T) {
		(self.setter)(value)
	}

	/// Reads, applies `f`, and writes the result back through the setter.
	pub fn update(&mut self, f: impl FnOnce(T) -> T) {
		let value = f(self.get());
		self.set(value);
	}

	/// Drops write access.
	pub fn read_only(self) -> ReadOnly<'a, T> {
		ReadOnly { getter: self.getter }
	}
}

impl<T: fmt::Debug> fmt::Debug for Property<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Property").field(&self.get()).finish()
	}
}

/// An owned value that reports every write to an observer.
pub struct Observable<'a, T> {
	value: T,
	observer: Box<dyn FnMut(&T) + 'a>,
}

impl<'a, T> Observable<'a, T> {
	pub fn new(value: T, observer: impl FnMut(&T) + 'a) -> Self {
		Self { value, observer: Box::new(observer) }
	}

	pub fn get(&self) -> &T {
		&self.value
	}

	/// Stores `value`, then calls the observer with it.
	pub fn set(&mut self, value: T) {
		self.value = value;
		(self.observer)(&self.value);
	}

	/// Changes the value in place and notifies once.
	pub fn update(&mut self, f: impl FnOnce(&mut T)) {
		f(&mut self.value);
		(self.observer)(&self.value);
	}

	pub fn into_inner(self) -> T {
		self.value
	}
}

impl<'a, T: Default> Observable<'a, T> {
	pub fn with_observer(observer: impl FnMut(&T) + 'a) -> Self {
		Self::new(T::default(), observer)
	}
}

impl<T: fmt::Debug> fmt::Debug for Observable<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Observable").field(&self.value).finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;
	use std::cell::{Cell, RefCell};
	use std::rc::Rc;

	#[test]
	fn read_only_sees_current_state() {
		let source = Cell::new(42);
		let prop = ReadOnly::new(|| source.get());
		assert_eq!(prop.get() + 1, 43);
		source.set(7);
		assert_eq!(prop.get(), 7);
		assert_eq!(format!("{:?}", prop), "ReadOnly(7)");
	}

	#[test]
	fn property_goes_through_setter() {
		let store = Rc::new(Cell::new(0i32));
		let writes = Rc::new(Cell::new(0));
		let mut prop = Property::new(
			{
				let store = store.clone();
				move || store.get()
			},
			{
				let (store, writes) = (store.clone(), writes.clone());
				move |v| {
					writes.set(writes.get() + 1);
					store.set(v);
				}
			},
		);

		prop.set(42);
		prop.update(|v| v * 2);
		prop.update(|v| v - 4);
		assert_eq!(prop.get(), 80);
		assert_eq!(store.get(), 80);
		assert_eq!(writes.get(), 3);

		let view = prop.read_only();
		store.set(1);
		assert_eq!(view.get(), 1);
	}

	#[test]
	fn setter_may_reject() {
		let store = Cell::new(10u8);
		let mut clamped = Property::new(|| store.get(), |v: u8| store.set(v.min(100)));
		clamped.set(250);
		assert_eq!(clamped.get(), 100);
	}

	#[test]
	fn observer_sees_every_write() {
		let seen = RefCell::new(vec![]);
		let mut counter = Observable::with_observer(|v: &i32| seen.borrow_mut().push(*v));
		counter.set(42);
		counter.update(|v| *v += 1);
		counter.update(|v| *v -= 1);
		counter.set(0);
		assert_eq!(*counter.get(), 0);
		drop(counter);
		assert_eq!(seen.into_inner(), vec![42, 43, 42, 0]);
	}

	#[test]
	fn observable_owns_its_value() {
		let mut name = Observable::new(String::from("a"), |_: &String| {});
		name.update(|s| s.push('b'));
		assert_eq!(name.into_inner(), "ab");
	}
}
