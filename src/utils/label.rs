use std::fmt::{Debug, Display};
use std::hash::Hash;

/// The trait for atom labels.
///
/// Atoms may be labeled by any type implementing some traits allowing their use in maps,
/// their display, and their ordering (witness tie-breaking and result export sort labels).
/// This trait is just a shortcut used to combine them.
///
/// Simple types like [usize] and [String] implement [LabelType].
pub trait LabelType: Clone + Debug + Display + Eq + Hash + Ord {}
impl<T: Clone + Debug + Display + Eq + Hash + Ord> LabelType for T {}
