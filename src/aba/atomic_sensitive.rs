use crate::aba::framework::ABAFramework;
use crate::aba::language::{Atom, Language};
use crate::utils::LabelType;

/// A function building the label of an auxiliary assumption from the
/// non-assumption literal it stands for.
///
/// It must output a label which is unique in the transformed framework.
pub type SuffixLabelFn<T> = dyn Fn(&Atom<T>) -> T;

/// A transformer rewriting an ABA framework so that every rule body contains
/// only assumptions.
///
/// Each non-assumption literal `s` gets two auxiliary assumptions: a "defended"
/// one whose contrary is the "not defended" one, and the "not defended" one
/// whose contrary is `s` itself. In every rule whose body mentions at least one
/// non-assumption, the non-assumption body literals are replaced by their
/// defended counterparts; rules whose body is already made of assumptions only
/// (facts included) are copied untouched.
///
/// Assumptions, contraries and preference ranks of the initial framework are
/// carried over unchanged; the auxiliary assumptions are unranked.
pub struct AtomicSensitizer<T>
where
    T: LabelType,
{
    defended_label_fn: Box<SuffixLabelFn<T>>,
    undefended_label_fn: Box<SuffixLabelFn<T>>,
}

impl AtomicSensitizer<String> {
    /// Creates a transformer for string-labelled frameworks, naming the
    /// auxiliary assumptions of literal `s` as `s_d` and `s_nd`.
    pub fn new_for_strings() -> Self {
        AtomicSensitizer::new_with_label_fns(
            Box::new(|atom| format!("{}_d", atom.label())),
            Box::new(|atom| format!("{}_nd", atom.label())),
        )
    }
}

impl<T> AtomicSensitizer<T>
where
    T: LabelType,
{
    /// Creates a transformer given the functions used to label the defended and
    /// the not-defended auxiliary assumptions.
    pub fn new_with_label_fns(
        defended_label_fn: Box<SuffixLabelFn<T>>,
        undefended_label_fn: Box<SuffixLabelFn<T>>,
    ) -> Self {
        Self {
            defended_label_fn,
            undefended_label_fn,
        }
    }

    /// Translates an input framework into a new one in which all rule bodies
    /// are made of assumptions only.
    ///
    /// The input framework is left untouched.
    pub fn transform(&self, framework: &ABAFramework<T>) -> ABAFramework<T> {
        let language = framework.language();
        let n_init = language.len();
        let non_assumptions: Vec<usize> = (0..n_init)
            .filter(|i| !framework.is_assumption_id(*i))
            .collect();
        let mut defended_id = vec![None; n_init];
        let mut labels: Vec<T> = language.iter().map(|a| a.label().clone()).collect();
        for (i, id) in non_assumptions.iter().enumerate() {
            defended_id[*id] = Some(n_init + (i << 1));
            let atom = language.get_atom_by_id(*id);
            labels.push((self.defended_label_fn)(atom));
            labels.push((self.undefended_label_fn)(atom));
        }
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
        for id in &non_assumptions {
            let d = match defended_id[*id] {
                Some(d) => d,
                None => unreachable!(),
            };
            new_framework.set_as_assumption_by_id(d);
            new_framework.set_as_assumption_by_id(d + 1);
            new_framework.set_contrary_by_ids(d, d + 1);
            new_framework.set_contrary_by_ids(d + 1, *id);
        }
        for rule in framework.iter_rules() {
            let body = rule
                .body_ids()
                .iter()
                .map(|b| match defended_id[*b] {
                    Some(d) => d,
                    None => *b,
                })
                .collect();
            new_framework.add_rule_by_ids(rule.head_id(), body);
        }
        new_framework
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toni_tutorial_ex() -> ABAFramework<String> {
        let labels: Vec<String> = ["a", "b", "c", "p", "q", "r", "s", "t"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut f = ABAFramework::new_with_language(Language::new_with_labels(&labels));
        for a in ["a", "b", "c"] {
            f.new_assumption(&a.to_string()).unwrap();
        }
        f.set_contrary(&"a".to_string(), &"r".to_string()).unwrap();
        f.set_contrary(&"b".to_string(), &"s".to_string()).unwrap();
        f.set_contrary(&"c".to_string(), &"t".to_string()).unwrap();
        f.new_rule(&"p".to_string(), &[&"q".to_string(), &"a".to_string()])
            .unwrap();
        f.new_rule(&"q".to_string(), &[]).unwrap();
        f.new_rule(&"r".to_string(), &[&"b".to_string(), &"c".to_string()])
            .unwrap();
        f
    }

    #[test]
    fn test_auxiliary_assumptions() {
        let f = toni_tutorial_ex();
        let new_f = AtomicSensitizer::new_for_strings().transform(&f);
        assert_eq!(18, new_f.language().len());
        assert_eq!(13, new_f.n_assumptions());
        assert_eq!(
            "p_nd",
            new_f.get_contrary(&"p_d".to_string()).unwrap().label()
        );
        assert_eq!(
            "p",
            new_f.get_contrary(&"p_nd".to_string()).unwrap().label()
        );
        assert_eq!("r", new_f.get_contrary(&"a".to_string()).unwrap().label());
    }

    #[test]
    fn test_bodies_become_atomic() {
        let f = toni_tutorial_ex();
        let new_f = AtomicSensitizer::new_for_strings().transform(&f);
        assert_eq!(3, new_f.n_rules());
        for rule in new_f.iter_rules() {
            for atom in rule.iter_body() {
                assert!(new_f.is_assumption(atom.label()).unwrap());
            }
        }
        let p_rule = new_f
            .iter_rules()
            .find(|r| r.head().label() == "p")
            .unwrap();
        let body: Vec<String> = p_rule.iter_body().map(|a| a.label().clone()).collect();
        assert_eq!(vec!["q_d".to_string(), "a".to_string()], body);
    }

    #[test]
    fn test_atomic_rules_untouched() {
        let f = toni_tutorial_ex();
        let new_f = AtomicSensitizer::new_for_strings().transform(&f);
        let r_rule = new_f
            .iter_rules()
            .find(|r| r.head().label() == "r")
            .unwrap();
        let body: Vec<String> = r_rule.iter_body().map(|a| a.label().clone()).collect();
        assert_eq!(vec!["b".to_string(), "c".to_string()], body);
        let q_rule = new_f
            .iter_rules()
            .find(|r| r.head().label() == "q")
            .unwrap();
        assert!(q_rule.is_fact());
    }

    #[test]
    fn test_ranks_carried_over() {
        let mut f = toni_tutorial_ex();
        f.set_rank(&"a".to_string(), 0).unwrap();
        let new_f = AtomicSensitizer::new_for_strings().transform(&f);
        let a_id = new_f.language().get_atom(&"a".to_string()).unwrap().id();
        assert_eq!(Some(0), new_f.rank_of_id(a_id));
        let p_d_id = new_f.language().get_atom(&"p_d".to_string()).unwrap().id();
        assert_eq!(None, new_f.rank_of_id(p_d_id));
    }
}
