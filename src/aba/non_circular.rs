use crate::aba::framework::ABAFramework;
use crate::aba::language::{Atom, Language};
use crate::utils::LabelType;

/// A function building the label of a non-assumption literal copy at a given level.
///
/// Given an atom of the initial framework and a level in `1..k` (the top level `k`
/// keeps the original label and never goes through this function), it must output a
/// label which is unique in the transformed framework.
pub type LevelLabelFn<T> = dyn Fn(&Atom<T>, usize) -> T;

/// A transformer breaking the rule cycles of an ABA framework by stratification.
///
/// The non-assumption literals are unrolled into `k = max(1, |L \ A|)` levels.
/// Rules whose body contains only assumptions are copied at every level; the other
/// rules are copied at levels `2..k`, their non-assumption body literals referring
/// to the previous level. The top level keeps the original literal names, so the
/// conclusions of the initial framework keep their identity.
///
/// The transformed framework has no rule cycle by construction; assumptions,
/// contraries and preference ranks are carried over unchanged.
pub struct NonCircularizer<T>
where
    T: LabelType,
{
    level_label_fn: Box<LevelLabelFn<T>>,
}

impl NonCircularizer<String> {
    /// Creates a transformer for string-labelled frameworks, naming the copy of
    /// literal `s` at level `i` as `s@i`.
    pub fn new_for_strings() -> Self {
        NonCircularizer::new_with_level_label_fn(Box::new(|atom, level| {
            format!("{}@{}", atom.label(), level)
        }))
    }
}

impl<T> NonCircularizer<T>
where
    T: LabelType,
{
    /// Creates a transformer given the function used to label the level copies.
    pub fn new_with_level_label_fn(level_label_fn: Box<LevelLabelFn<T>>) -> Self {
        Self { level_label_fn }
    }

    /// Translates an input framework into a new one without rule cycles.
    ///
    /// The input framework is left untouched.
    pub fn transform(&self, framework: &ABAFramework<T>) -> ABAFramework<T> {
        let language = framework.language();
        let n_init = language.len();
        let non_assumptions: Vec<usize> = (0..n_init)
            .filter(|i| !framework.is_assumption_id(*i))
            .collect();
        let n_non = non_assumptions.len();
        let k = n_non.max(1);
        let mut non_index = vec![None; n_init];
        for (i, id) in non_assumptions.iter().enumerate() {
            non_index[*id] = Some(i);
        }
        let mut labels: Vec<T> = language.iter().map(|a| a.label().clone()).collect();
        for level in 1..k {
            for id in &non_assumptions {
                labels.push((self.level_label_fn)(language.get_atom_by_id(*id), level));
            }
        }
        // original ids double as the (unsuffixed) top level
        let atom_id_at = |id: usize, level: usize| match non_index[id] {
            Some(i) if level != k => n_init + (level - 1) * n_non + i,
            _ => id,
        };
        let mut new_framework = ABAFramework::new_with_language(Language::new_with_labels(&labels));
        for a in framework.assumption_ids() {
            new_framework.set_as_assumption_by_id(*a);
            if let Some(c) = framework.contrary_id_of(*a) {
                new_framework.set_contrary_by_ids(*a, c);
            }
            if let Some(r) = framework.rank_of_id(*a) {
                new_framework.set_rank_by_id(*a, r);
            }
        }
        for rule in framework.iter_rules() {
            let atomic = rule
                .body_ids()
                .iter()
                .all(|b| framework.is_assumption_id(*b));
            if atomic {
                for level in 1..=k {
                    new_framework
                        .add_rule_by_ids(atom_id_at(rule.head_id(), level), rule.body_ids().to_vec());
                }
            } else {
                for level in 2..=k {
                    let body = rule
                        .body_ids()
                        .iter()
                        .map(|b| {
                            if framework.is_assumption_id(*b) {
                                *b
                            } else {
                                atom_id_at(*b, level - 1)
                            }
                        })
                        .collect();
                    new_framework.add_rule_by_ids(atom_id_at(rule.head_id(), level), body);
                }
            }
        }
        new_framework
    }
}
