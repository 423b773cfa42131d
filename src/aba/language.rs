use crate::utils::LabelType;
use anyhow::{anyhow, Result};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Handles an atom of the language.
///
/// Each atom has a label and an identifier which are unique in a language.
/// This uniqueness condition imposes atoms are made from [Language] objects, and not directly by the [Atom] struct.
///
/// The type of the labels must be [`LabelType`] instances.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Atom<T>
where
    T: LabelType,
{
    id: usize,
    label: T,
}

impl<T> Atom<T>
where
    T: LabelType,
{
    /// Returns the label of the atom.
    pub fn label(&self) -> &T {
        &self.label
    }

    /// Returns the id of the atom.
    pub fn id(&self) -> usize {
        self.id
    }
}

/// Handles the atoms that may be used in an ABA framework.
///
/// # Example
///
/// ```
/// # use abaplus::aba::Language;
/// let language = Language::new_with_labels(&["a", "b", "c", "p", "q", "r"]);
/// for (i, s) in language.iter().enumerate() {
///     assert_eq!(i, language.get_atom(s.label()).unwrap().id());
///     assert_eq!(s, language.get_atom_by_id(i));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Language<T>
where
    T: LabelType,
{
    atoms: Vec<Atom<T>>,
    label_to_id: HashMap<T, usize>,
}

impl<T> Language<T>
where
    T: LabelType,
{
    /// Builds a new language given the labels of the atoms.
    ///
    /// Each atom will be assigned an id equal to its index in the provided slice of atom labels.
    /// If a label appears multiple times, the first occurrence is the only one that is considered.
    pub fn new_with_labels(labels: &[T]) -> Self {
        let mut label_to_id = HashMap::new();
        let mut atoms = Vec::with_capacity(labels.len());
        for l in labels.iter() {
            match label_to_id.entry(l.clone()) {
                Entry::Occupied(_) => continue,
                Entry::Vacant(e) => {
                    e.insert(atoms.len());
                }
            }
            atoms.push(Atom {
                id: atoms.len(),
                label: l.clone(),
            });
        }
        Language { atoms, label_to_id }
    }

    /// Returns the number of atoms in the language.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    /// Returns `true` iff the language has no atom.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Returns `true` iff the provided label belongs to the language.
    pub fn contains(&self, label: &T) -> bool {
        self.label_to_id.contains_key(label)
    }

    /// Returns the atom associated to a label.
    ///
    /// An error is returned if no atom corresponds to the provided label.
    pub fn get_atom(&self, label: &T) -> Result<&Atom<T>> {
        self.label_to_id
            .get(label)
            .map(|i| &self.atoms[*i])
            .ok_or_else(|| anyhow!("no such atom: {}", label))
    }

    /// Returns the atom with the corresponding identifier.
    ///
    /// # Panics
    ///
    /// Panics if no atom has the corresponding identifier.
    pub fn get_atom_by_id(&self, id: usize) -> &Atom<T> {
        &self.atoms[id]
    }

    /// Provides an iterator to the atoms.
    pub fn iter(&self) -> impl Iterator<Item = &Atom<T>> {
        self.atoms.iter()
    }
}
