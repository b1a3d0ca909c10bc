//! Signal - shared reactive value
//!
//! `Signal<T>` holds a value behind `Rc<RefCell<T>>` and notifies its
//! subscribers after every write. Clones share the same value and the same
//! subscriber list.
//!
//! ## Example
//!
//! ```
//! use spidr_pages::reactive::Signal;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let count = Signal::new(0);
//! let seen = Rc::new(Cell::new(0));
//!
//! let seen_clone = seen.clone();
//! count.subscribe(move |n| seen_clone.set(*n));
//!
//! count.set(42);
//! count.update(|n| *n += 1);
//!
//! assert_eq!(count.get(), 43);
//! assert_eq!(seen.get(), 43);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

type Subscriber<T> = Rc<dyn Fn(&T)>;

/// A reactive value shared between clones
pub struct Signal<T: 'static> {
	/// The actual value, shared via reference counting
	value: Rc<RefCell<T>>,
	subscribers: Rc<RefCell<Vec<Subscriber<T>>>>,
}

impl<T: 'static> Signal<T> {
	/// Create a new Signal with the given initial value
	pub fn new(value: T) -> Self {
		Self {
			value: Rc::new(RefCell::new(value)),
			subscribers: Rc::new(RefCell::new(Vec::new())),
		}
	}

	/// Get a clone of the current value
	pub fn get(&self) -> T
	where
		T: Clone,
	{
		self.value.borrow().clone()
	}

	/// Read the current value through a closure without cloning it
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		f(&self.value.borrow())
	}

	/// Set the signal to a new value and notify subscribers
	pub fn set(&self, value: T)
	where
		T: Clone,
	{
		*self.value.borrow_mut() = value;
		self.notify();
	}

	/// Update the value in place, notifying subscribers once
	pub fn update<F>(&self, f: F)
	where
		F: FnOnce(&mut T),
		T: Clone,
	{
		f(&mut *self.value.borrow_mut());
		self.notify();
	}

	/// Register a callback run after every write
	pub fn subscribe(&self, f: impl Fn(&T) + 'static) {
		self.subscribers.borrow_mut().push(Rc::new(f));
	}

	fn notify(&self)
	where
		T: Clone,
	{
		// Subscribers receive a snapshot so they may write back to this signal.
		let subscribers: Vec<Subscriber<T>> = self.subscribers.borrow().clone();
		if subscribers.is_empty() {
			return;
		}
		let snapshot = self.get();
		for subscriber in subscribers {
			subscriber(&snapshot);
		}
	}
}

impl<T: 'static> Clone for Signal<T> {
	fn clone(&self) -> Self {
		Self {
			value: Rc::clone(&self.value),
			subscribers: Rc::clone(&self.subscribers),
		}
	}
}

impl<T: fmt::Debug + 'static> fmt::Debug for Signal<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Signal")
			.field("value", &*self.value.borrow())
			.field("subscribers", &self.subscribers.borrow().len())
			.finish()
	}
}
