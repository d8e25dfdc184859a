//! Scopes, shared by the analyzer and the interpreter.
//!
//! Frames live in an arena and point at their enclosing frame by index. Both
//! a block and a function call open a child of the frame that is current at
//! that moment, and close it on the way out, so the arena only ever grows and
//! shrinks at its end.

use indexmap::IndexMap;

use crate::parser::expression::Type;

/// Index of a frame in the arena.
pub type ScopeId = usize;

/// What a name is bound to, and the type it was declared with.
#[derive(Debug, Clone, PartialEq)]
pub struct Binding<V> {
	pub value:  V,
	/// `None` for functions.
	pub r#type: Option<Type>,
}

#[derive(Debug)]
struct Scope<'a, V> {
	bindings:  IndexMap<&'a str, Binding<V>>,
	enclosing: Option<ScopeId>,
}

impl<V> Scope<'_, V> {
	fn new(enclosing: Option<ScopeId>) -> Self { Self { bindings: IndexMap::new(), enclosing } }
}

#[derive(Debug)]
pub struct Environment<'a, V> {
	scopes:  Vec<Scope<'a, V>>,
	current: ScopeId,
}

impl<V> Default for Environment<'_, V> {
	fn default() -> Self { Self::new() }
}

impl<'a, V> Environment<'a, V> {
	/// An environment holding only the root frame.
	pub fn new() -> Self { Self { scopes: vec![Scope::new(None)], current: 0 } }

	/// Open a child of the current frame and make it current.
	pub fn push_scope(&mut self) -> ScopeId {
		self.scopes.push(Scope::new(Some(self.current)));
		self.current = self.scopes.len() - 1;
		tracing::trace!(scope = self.current, "push scope");
		self.current
	}

	/// Discard the current frame, its enclosing frame becomes current. The root
	/// frame stays.
	pub fn pop_scope(&mut self) {
		let Some(enclosing) = self.scopes[self.current].enclosing else {
			return;
		};
		tracing::trace!(scope = self.current, "pop scope");
		self.scopes.truncate(self.current);
		self.current = enclosing;
	}

	/// Number of open frames, the root included.
	#[cfg(test)]
	pub(crate) fn depth(&self) -> usize { self.scopes.len() }

	/// A declaration can also be used to redefine a name in the same frame.
	pub fn define(&mut self, name: &'a str, value: V, r#type: Option<Type>) {
		self.scopes[self.current].bindings.insert(name, Binding { value, r#type });
	}

	/// The innermost binding of `name`, searching outward.
	pub fn get(&self, name: &str) -> Option<&Binding<V>> {
		let id = self.resolve(name)?;
		self.scopes[id].bindings.get(name)
	}

	pub fn get_mut(&mut self, name: &str) -> Option<&mut Binding<V>> {
		let id = self.resolve(name)?;
		self.scopes[id].bindings.get_mut(name)
	}

	/// Replace the value of an existing binding, keeping its declared type.
	/// Returns `false` if the name isn't bound anywhere.
	pub fn assign(&mut self, name: &str, value: V) -> bool {
		match self.get_mut(name) {
			Some(binding) => {
				binding.value = value;
				true
			}
			None => false,
		}
	}

	#[cfg(test)]
	pub(crate) fn is_defined(&self, name: &str) -> bool { self.resolve(name).is_some() }

	/// The frame holding the innermost binding of `name`.
	fn resolve(&self, name: &str) -> Option<ScopeId> {
		let mut scope = Some(self.current);
		while let Some(id) = scope {
			if self.scopes[id].bindings.contains_key(name) {
				return Some(id);
			}
			scope = self.scopes[id].enclosing;
		}
		None
	}
}
