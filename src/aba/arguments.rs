use crate::aba::atom_support::AtomSupport;
use crate::aba::framework::ABAFramework;
use crate::utils::LabelType;

/// An argument of an ABA framework, that is a pair made of a minimal set of assumptions
/// (the support) and the literal this set derives (the conclusion).
///
/// Two arguments with the same support and conclusion are the same argument;
/// the derivation process never produces duplicates.
/// Atoms are referred to by their ids in the framework language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argument {
    id: usize,
    conclusion: usize,
    support: Vec<usize>,
}

impl Argument {
    /// Returns the id of the argument.
    ///
    /// Ids are dense and assigned in generation order; they have no meaning beyond
    /// providing a stable reference within one derivation result.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Returns the id of the conclusion atom.
    pub fn conclusion(&self) -> usize {
        self.conclusion
    }

    /// Returns the support as a sorted slice of assumption ids.
    pub fn support(&self) -> &[usize] {
        &self.support
    }
}

/// Computes the arguments of an ABA framework.
///
/// Every atom with at least one minimal support yields one argument per support;
/// in particular every assumption yields its self-supported argument and every fact
/// yields an argument with an empty support. Atoms with no derivation contribute
/// nothing.
///
/// The result is deterministic for a fixed framework: arguments are emitted by
/// increasing conclusion id, then by support order.
pub fn derive_arguments<T>(framework: &ABAFramework<T>) -> Vec<Argument>
where
    T: LabelType,
{
    let atom_supports = AtomSupport::compute(framework);
    let mut arguments = Vec::new();
    for (conclusion, supports) in atom_supports.iter_supports().enumerate() {
        for support in supports {
            arguments.push(Argument {
                id: arguments.len(),
                conclusion,
                support: support.clone(),
            });
        }
    }
    arguments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aba::language::Language;

    fn three_assumptions_ex() -> ABAFramework<&'static str> {
        let l = Language::new_with_labels(&["a", "b", "c", "p", "q", "r"]);
        let mut f = ABAFramework::new_with_language(l);
        f.new_assumption(&"a").unwrap();
        f.new_assumption(&"b").unwrap();
        f.new_assumption(&"c").unwrap();
        f.new_rule(&"p", &[&"a"]).unwrap();
        f.new_rule(&"q", &[]).unwrap();
        f.new_rule(&"r", &[&"b", &"c"]).unwrap();
        f
    }

    fn labeled(framework: &ABAFramework<&'static str>, a: &Argument) -> (Vec<String>, String) {
        let language = framework.language();
        (
            a.support()
                .iter()
                .map(|i| language.get_atom_by_id(*i).label().to_string())
                .collect(),
            language.get_atom_by_id(a.conclusion()).label().to_string(),
        )
    }

    #[test]
    fn test_derive_arguments() {
        let f = three_assumptions_ex();
        let arguments = derive_arguments(&f);
        let got: Vec<(Vec<String>, String)> = arguments.iter().map(|a| labeled(&f, a)).collect();
        let expected = vec![
            (vec!["a".to_string()], "a".to_string()),
            (vec!["b".to_string()], "b".to_string()),
            (vec!["c".to_string()], "c".to_string()),
            (vec!["a".to_string()], "p".to_string()),
            (vec![], "q".to_string()),
            (vec!["b".to_string(), "c".to_string()], "r".to_string()),
        ];
        assert_eq!(expected, got);
    }

    #[test]
    fn test_ids_are_dense() {
        let arguments = derive_arguments(&three_assumptions_ex());
        for (i, a) in arguments.iter().enumerate() {
            assert_eq!(i, a.id());
        }
    }

    #[test]
    fn test_self_support_for_assumptions() {
        let f = three_assumptions_ex();
        let arguments = derive_arguments(&f);
        for assumption in f.iter_assumptions() {
            assert!(arguments
                .iter()
                .any(|a| a.conclusion() == assumption.id() && a.support() == [assumption.id()]));
        }
    }

    #[test]
    fn test_underivable_atom_has_no_argument() {
        let l = Language::new_with_labels(&["a", "p"]);
        let mut f = ABAFramework::new_with_language(l);
        f.new_assumption(&"a").unwrap();
        let arguments = derive_arguments(&f);
        assert_eq!(1, arguments.len());
        assert_eq!(0, arguments[0].conclusion());
    }

    #[test]
    fn test_cyclic_rules_terminate() {
        let l = Language::new_with_labels(&["a", "p", "q"]);
        let mut f = ABAFramework::new_with_language(l);
        f.new_assumption(&"a").unwrap();
        f.new_rule(&"p", &[&"q"]).unwrap();
        f.new_rule(&"q", &[&"p"]).unwrap();
        let arguments = derive_arguments(&f);
        // the cycle derives nothing, only the self-support remains
        assert_eq!(1, arguments.len());
    }

    #[test]
    fn test_derivation_is_idempotent() {
        let f = three_assumptions_ex();
        assert_eq!(derive_arguments(&f), derive_arguments(&f));
    }
}
