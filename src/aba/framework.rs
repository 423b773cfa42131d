use crate::aba::language::{Atom, Language};
use crate::utils::LabelType;
use anyhow::{anyhow, Context, Result};
use std::collections::HashSet;
use std::fmt::Display;

#[derive(Clone, Debug, PartialEq)]
enum AtomKind {
    NotAssumption,
    Assumption { contrary: Option<usize> },
}

/// The error raised when a raw framework does not meet the ABA well-formedness conditions.
///
/// Validation is exhaustive: the error carries one human-readable cause per violation
/// found in the raw data, so callers can display them all at once.
#[derive(Debug)]
pub struct MalformedFrameworkError {
    causes: Vec<String>,
}

impl MalformedFrameworkError {
    fn new(causes: Vec<String>) -> Self {
        Self { causes }
    }

    /// Returns the causes of the error, one per violation.
    pub fn causes(&self) -> &[String] {
        &self.causes
    }
}

impl Display for MalformedFrameworkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed ABA framework: {}", self.causes.join("; "))
    }
}

impl std::error::Error for MalformedFrameworkError {}

/// The raw collections an ABA framework is built from.
///
/// This is the external representation of a framework, as provided by a parser
/// or built programmatically. No well-formedness condition is enforced at this
/// level; everything is checked by [`ABAFramework::build_and_validate`].
#[derive(Debug, Clone, Default)]
pub struct RawFramework<T>
where
    T: LabelType,
{
    /// The literal universe.
    pub literals: Vec<T>,
    /// The defeasible literals.
    pub assumptions: Vec<T>,
    /// The (assumption, contrary) pairs of the partial contrary mapping.
    pub contraries: Vec<(T, T)>,
    /// The inference rules as (head, body) pairs; an empty body denotes a fact.
    pub rules: Vec<(T, Vec<T>)>,
    /// The (assumption, rank) pairs; lower rank means more preferred.
    pub preferences: Vec<(T, usize)>,
}

impl RawFramework<String> {
    /// Sets the preference ranks from a tiered textual expression.
    ///
    /// See [`crate::aba::parse_preference_expression`] for the expected syntax.
    pub fn set_preference_expression(&mut self, expression: &str) {
        self.preferences = crate::aba::parse_preference_expression(expression);
    }
}

/// A rule in an ABA framework.
pub struct Rule<'a, T>
where
    T: LabelType,
{
    rule_ids: &'a (usize, Vec<usize>),
    language: &'a Language<T>,
}

impl<'a, T> Rule<'a, T>
where
    T: LabelType,
{
    /// Returns the head of the rule.
    pub fn head(&self) -> &Atom<T> {
        self.language.get_atom_by_id(self.rule_ids.0)
    }

    /// Returns an iterator over the body of the rule.
    pub fn iter_body(&self) -> impl Iterator<Item = &Atom<T>> + '_ {
        self.rule_ids
            .1
            .iter()
            .map(|i| self.language.get_atom_by_id(*i))
    }

    /// Returns `true` iff the rule has an empty body.
    pub fn is_fact(&self) -> bool {
        self.rule_ids.1.is_empty()
    }

    pub(crate) fn head_id(&self) -> usize {
        self.rule_ids.0
    }

    pub(crate) fn body_ids(&self) -> &[usize] {
        &self.rule_ids.1
    }
}

/// Handles an ABA framework, that is the tuple (literals, assumptions, contraries, rules, preferences).
///
/// [ABAFramework] objects hold a language, the assumptions with their optional contrary and
/// optional preference rank, and the rules built on top of this language.
/// A framework is usually built from a [RawFramework] through [`ABAFramework::build_and_validate`];
/// it may also be assembled with the dedicated methods, which check labels one at a time.
///
/// Once built, a framework is read-only input to the derivation and attack engines.
/// The transformers of this crate return new frameworks instead of mutating their input.
///
/// # Example
///
/// ```
/// # use abaplus::aba::{ABAFramework, Language};
/// let language = Language::new_with_labels(&["a", "b", "c", "p", "q", "r", "s", "t"]);
/// let mut framework = ABAFramework::new_with_language(language);
/// for a in ["a", "b", "c"] {
///     framework.new_assumption(&a).unwrap();
/// }
/// framework.set_contrary(&"a", &"r").unwrap();
/// framework.new_rule(&"p", &[&"q", &"a"]).unwrap();
/// framework.new_rule(&"q", &[]).unwrap();
/// framework.new_rule(&"r", &[&"b", &"c"]).unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct ABAFramework<T>
where
    T: LabelType,
{
    language: Language<T>,
    atom_kind: Vec<AtomKind>,
    assumption_ids: Vec<usize>,
    rules: Vec<(usize, Vec<usize>)>,
    ranks: Vec<Option<usize>>,
}

impl<T> ABAFramework<T>
where
    T: LabelType,
{
    /// Builds an empty ABA framework given its associated language.
    pub fn new_with_language(language: Language<T>) -> Self {
        let language_len = language.len();
        ABAFramework {
            language,
            atom_kind: vec![AtomKind::NotAssumption; language_len],
            assumption_ids: Vec::new(),
            rules: Vec::new(),
            ranks: vec![None; language_len],
        }
    }

    /// Builds a framework from its raw collections, checking every ABA well-formedness condition.
    ///
    /// The whole raw data is inspected before returning: the error lists every violation,
    /// not just the first one.
    /// The conditions are: the literal and the assumption sets are nonempty, assumptions are
    /// literals, the contrary mapping has assumptions as keys (each at most once) and literals
    /// as values, rule heads and body elements are literals, and preference ranks are assigned
    /// to assumptions.
    pub fn build_and_validate(raw: &RawFramework<T>) -> Result<Self, MalformedFrameworkError> {
        let mut causes = Vec::new();
        if raw.literals.is_empty() {
            causes.push("the literal set is empty".to_string());
        }
        if raw.assumptions.is_empty() {
            causes.push("the assumption set is empty".to_string());
        }
        let language = Language::new_with_labels(&raw.literals);
        let assumption_labels: HashSet<&T> = raw.assumptions.iter().collect();
        for a in raw.assumptions.iter() {
            if !language.contains(a) {
                causes.push(format!("assumption '{}' is not a literal", a));
            }
        }
        let mut contrary_set: HashSet<&T> = HashSet::new();
        for (a, c) in raw.contraries.iter() {
            if !assumption_labels.contains(a) {
                causes.push(format!(
                    "a contrary is mapped for '{}', which is not an assumption",
                    a
                ));
            } else if !contrary_set.insert(a) {
                causes.push(format!("assumption '{}' has more than one contrary", a));
            }
            if !language.contains(c) {
                causes.push(format!("contrary '{}' of '{}' is not a literal", c, a));
            }
        }
        for (head, body) in raw.rules.iter() {
            if !language.contains(head) {
                causes.push(format!("rule head '{}' is not a literal", head));
            }
            for b in body.iter() {
                if !language.contains(b) {
                    causes.push(format!(
                        "body element '{}' of the rule with head '{}' is not a literal",
                        b, head
                    ));
                }
            }
        }
        for (a, _) in raw.preferences.iter() {
            if !assumption_labels.contains(a) || !language.contains(a) {
                causes.push(format!(
                    "a preference rank is assigned to '{}', which is not an assumption",
                    a
                ));
            }
        }
        if !causes.is_empty() {
            return Err(MalformedFrameworkError::new(causes));
        }
        let mut framework = ABAFramework::new_with_language(language);
        for a in raw.assumptions.iter() {
            let id = framework.language.get_atom(a).unwrap().id();
            if matches!(framework.atom_kind[id], AtomKind::NotAssumption) {
                framework.atom_kind[id] = AtomKind::Assumption { contrary: None };
                framework.assumption_ids.push(id);
            }
        }
        for (a, c) in raw.contraries.iter() {
            let a_id = framework.language.get_atom(a).unwrap().id();
            let c_id = framework.language.get_atom(c).unwrap().id();
            framework.atom_kind[a_id] = AtomKind::Assumption {
                contrary: Some(c_id),
            };
        }
        for (head, body) in raw.rules.iter() {
            let head_id = framework.language.get_atom(head).unwrap().id();
            let body_ids = body
                .iter()
                .map(|b| framework.language.get_atom(b).unwrap().id())
                .collect();
            framework.rules.push((head_id, body_ids));
        }
        for (a, rank) in raw.preferences.iter() {
            let id = framework.language.get_atom(a).unwrap().id();
            framework.ranks[id] = Some(*rank);
        }
        Ok(framework)
    }

    /// Sets a language atom as an assumption.
    ///
    /// An error is returned if the label does not refer to an existing atom
    /// or if the atom is already registered as an assumption.
    pub fn new_assumption(&mut self, assumption: &T) -> Result<()> {
        let index = self
            .language
            .get_atom(assumption)
            .with_context(|| format!("cannot set {:?} as an assumption", assumption))?
            .id();
        if matches!(self.atom_kind[index], AtomKind::Assumption { .. }) {
            return Err(anyhow!(
                "atom already registered as an assumption: {}",
                assumption
            ));
        }
        self.atom_kind[index] = AtomKind::Assumption { contrary: None };
        self.assumption_ids.push(index);
        Ok(())
    }

    /// Sets the contrary of an assumption; both atoms are given by their labels.
    ///
    /// An error is returned if a label does not refer to an existing atom or if the
    /// first one is not registered as an assumption.
    pub fn set_contrary(&mut self, assumption: &T, contrary: &T) -> Result<()> {
        let context = || {
            format!(
                "cannot set {:?} as the contrary of {:?}",
                contrary, assumption
            )
        };
        let assumption_index = self
            .language
            .get_atom(assumption)
            .with_context(context)?
            .id();
        let contrary_index = self.language.get_atom(contrary).with_context(context)?.id();
        match &mut self.atom_kind[assumption_index] {
            AtomKind::NotAssumption => Err(anyhow!("atom {:?} is not an assumption", assumption)),
            AtomKind::Assumption { contrary } => {
                *contrary = Some(contrary_index);
                Ok(())
            }
        }
    }

    /// Adds a rule to the framework.
    ///
    /// The atoms in the head and the body are given by their labels.
    /// If an atom is not part of the language of the framework, an error is returned.
    pub fn new_rule(&mut self, head: &T, body: &[&T]) -> Result<()> {
        let context = || {
            format!(
                "cannot add a rule with {:?} as head and {:?} as body",
                head, body
            )
        };
        let mut body_vec = Vec::with_capacity(body.len());
        for b in body {
            body_vec.push(self.language.get_atom(b).with_context(context)?.id());
        }
        let head_index = self.language.get_atom(head).with_context(context)?.id();
        self.rules.push((head_index, body_vec));
        Ok(())
    }

    /// Sets the preference rank of an assumption given by its label.
    ///
    /// Lower ranks denote more preferred assumptions.
    /// An error is returned if the label does not refer to an assumption.
    pub fn set_rank(&mut self, assumption: &T, rank: usize) -> Result<()> {
        let index = self
            .language
            .get_atom(assumption)
            .with_context(|| format!("cannot set a rank for {:?}", assumption))?
            .id();
        if matches!(self.atom_kind[index], AtomKind::NotAssumption) {
            return Err(anyhow!("atom {:?} is not an assumption", assumption));
        }
        self.ranks[index] = Some(rank);
        Ok(())
    }

    /// Sets an atom as an assumption, given its id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not refer to an atom of the language.
    pub(crate) fn set_as_assumption_by_id(&mut self, id: usize) {
        if matches!(self.atom_kind[id], AtomKind::NotAssumption) {
            self.atom_kind[id] = AtomKind::Assumption { contrary: None };
            self.assumption_ids.push(id);
        }
    }

    /// Sets the contrary of an assumption, both given by their ids.
    ///
    /// # Panics
    ///
    /// Panics if an id does not refer to an atom or if the first one is not an assumption.
    pub(crate) fn set_contrary_by_ids(&mut self, assumption: usize, contrary: usize) {
        match &mut self.atom_kind[assumption] {
            AtomKind::NotAssumption => panic!("atom id {} is not an assumption", assumption),
            AtomKind::Assumption { contrary: c } => *c = Some(contrary),
        }
    }

    /// Adds a rule given by atom ids.
    ///
    /// # Panics
    ///
    /// Panics if an id does not refer to an atom of the language.
    pub(crate) fn add_rule_by_ids(&mut self, head: usize, body: Vec<usize>) {
        debug_assert!(head < self.language.len());
        debug_assert!(body.iter().all(|b| *b < self.language.len()));
        self.rules.push((head, body));
    }

    /// Sets the preference rank of an assumption given by its id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not refer to an atom of the language.
    pub(crate) fn set_rank_by_id(&mut self, id: usize, rank: usize) {
        debug_assert!(matches!(self.atom_kind[id], AtomKind::Assumption { .. }));
        self.ranks[id] = Some(rank);
    }

    /// Returns the underlying language.
    pub fn language(&self) -> &Language<T> {
        &self.language
    }

    /// Returns the number of assumptions defined so far.
    pub fn n_assumptions(&self) -> usize {
        self.assumption_ids.len()
    }

    /// Returns `true` iff the provided atom (given by its label) corresponds to an assumption.
    ///
    /// An error is returned if the provided label does not refer to a language element.
    pub fn is_assumption(&self, s: &T) -> Result<bool> {
        let index = self
            .language
            .get_atom(s)
            .context("cannot check if the atom is an assumption")?
            .id();
        Ok(self.is_assumption_id(index))
    }

    /// Returns `true` iff the atom with the provided id is an assumption.
    pub(crate) fn is_assumption_id(&self, id: usize) -> bool {
        matches!(self.atom_kind[id], AtomKind::Assumption { .. })
    }

    /// Provides an iterator over the assumptions of the framework.
    pub fn iter_assumptions(&self) -> impl Iterator<Item = &Atom<T>> + '_ {
        self.assumption_ids
            .iter()
            .map(move |i| self.language.get_atom_by_id(*i))
    }

    /// Returns the assumption ids.
    pub(crate) fn assumption_ids(&self) -> &[usize] {
        self.assumption_ids.as_slice()
    }

    /// Returns the contrary of an assumption given by its label.
    ///
    /// An error is returned if the label does not refer to an assumption or if the
    /// assumption has no contrary.
    pub fn get_contrary(&self, s: &T) -> Result<&Atom<T>> {
        let index = self
            .language
            .get_atom(s)
            .context("cannot get the contrary of the assumption")?
            .id();
        match self.atom_kind[index] {
            AtomKind::NotAssumption => Err(anyhow!("atom {:?} is not an assumption", s)),
            AtomKind::Assumption { contrary: None } => {
                Err(anyhow!("assumption {:?} has no contrary", s))
            }
            AtomKind::Assumption {
                contrary: Some(contrary),
            } => Ok(self.language.get_atom_by_id(contrary)),
        }
    }

    /// Returns the id of the contrary of the atom with the provided id,
    /// or `None` if the atom is not an assumption or has no contrary.
    pub(crate) fn contrary_id_of(&self, id: usize) -> Option<usize> {
        match self.atom_kind[id] {
            AtomKind::NotAssumption => None,
            AtomKind::Assumption { contrary } => contrary,
        }
    }

    /// Returns the preference rank of the atom with the provided id, if any.
    pub(crate) fn rank_of_id(&self, id: usize) -> Option<usize> {
        self.ranks[id]
    }

    /// Returns the preference rank of the atom with the provided id, mapping
    /// unranked atoms to the maximally-unpreferred sentinel.
    pub(crate) fn rank_or_sentinel(&self, id: usize) -> usize {
        self.ranks[id].unwrap_or(usize::MAX)
    }

    /// Returns the number of rules of the framework.
    pub fn n_rules(&self) -> usize {
        self.rules.len()
    }

    /// Returns the rule at the given index.
    ///
    /// # Panics
    ///
    /// This method panics if the provided index does not refer to an existing rule.
    pub(crate) fn get_rule_by_id(&self, index: usize) -> Rule<T> {
        Rule {
            rule_ids: &self.rules[index],
            language: &self.language,
        }
    }

    /// Provides an iterator over the rules.
    pub fn iter_rules(&self) -> impl Iterator<Item = Rule<T>> + '_ {
        (0..self.rules.len()).map(|i| self.get_rule_by_id(i))
    }
}
