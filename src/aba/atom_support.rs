use crate::aba::framework::ABAFramework;
use crate::utils::LabelType;
use permutator::CartesianProduct;

/// An object used to compute the sets of assumptions supporting the atoms of an ABA framework.
///
/// Supports are computed by forward chaining over the rules up to a least fixpoint:
/// every assumption supports itself, facts yield the empty support, and a rule whose
/// body atoms are all supported yields the unions of the body supports for its head.
/// Only minimal supports are kept; a support which is a strict superset of another
/// support of the same atom is discarded.
///
/// The fixpoint terminates on any finite framework, cyclic rules included, since a pass
/// only reports progress when an atom gains a genuinely new minimal support.
pub struct AtomSupport {
    supports: Vec<Vec<Vec<usize>>>,
}

impl AtomSupport {
    /// Computes the minimal supports of the atoms of an ABA framework.
    ///
    /// The result assigns to each atom id the list of its minimal supports,
    /// each given as a sorted vector of assumption ids.
    /// An atom that cannot be derived gets an empty list.
    pub fn compute<T>(framework: &ABAFramework<T>) -> Self
    where
        T: LabelType,
    {
        let mut supports: Vec<Vec<Vec<usize>>> = vec![Vec::new(); framework.language().len()];
        for a in framework.assumption_ids() {
            supports[*a].push(vec![*a]);
        }
        for rule in framework.iter_rules() {
            // seeds are not subject to minimality pruning; only rule application is
            if rule.is_fact() && !supports[rule.head_id()].iter().any(|s| s.is_empty()) {
                supports[rule.head_id()].push(Vec::new());
            }
        }
        let mut changed = true;
        while changed {
            changed = false;
            for rule in framework.iter_rules() {
                if rule.is_fact() {
                    continue;
                }
                if rule.body_ids().iter().any(|b| supports[*b].is_empty()) {
                    continue;
                }
                let candidates = {
                    let body_domains = rule
                        .body_ids()
                        .iter()
                        .map(|b| supports[*b].as_slice())
                        .collect::<Vec<&[Vec<usize>]>>();
                    body_domains
                        .as_slice()
                        .cart_prod()
                        .map(|p| {
                            let mut d = p.iter().fold(Vec::new(), |mut acc, x| {
                                acc.extend_from_slice(x.as_slice());
                                acc
                            });
                            d.sort_unstable();
                            d.dedup();
                            d
                        })
                        .collect::<Vec<Vec<usize>>>()
                };
                for candidate in candidates {
                    if merge_minimal(&mut supports[rule.head_id()], candidate) {
                        changed = true;
                    }
                }
            }
        }
        supports.iter_mut().for_each(|s| s.sort_unstable());
        AtomSupport { supports }
    }

    /// Iterates over the possible supports of each atom.
    ///
    /// Each element of the iterator concerns an atom; the first is the one of id 0,
    /// the second the one of id 1, and so on.
    /// An atom that cannot be derived is associated with an empty slice.
    pub fn iter_supports(&self) -> impl Iterator<Item = &[Vec<usize>]> {
        self.supports.iter().map(|s| s.as_slice())
    }

    /// Returns the minimal supports of the atom with the provided id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not refer to an atom of the underlying language.
    pub fn supports_of(&self, id: usize) -> &[Vec<usize>] {
        &self.supports[id]
    }
}

/// Adds a candidate support to a minimal-support collection.
///
/// The candidate is rejected if some present support is a subset of it (equality included).
/// When it is admitted, the present supports it strictly dominates are removed.
/// Returns `true` iff the collection changed.
fn merge_minimal(supports: &mut Vec<Vec<usize>>, candidate: Vec<usize>) -> bool {
    if supports.iter().any(|s| is_sorted_subset(s, &candidate)) {
        return false;
    }
    supports.retain(|s| !is_sorted_subset(&candidate, s));
    supports.push(candidate);
    true
}

/// Checks the inclusion of two sorted, deduplicated id vectors.
fn is_sorted_subset(sub: &[usize], sup: &[usize]) -> bool {
    let mut sup_iter = sup.iter();
    'outer: for x in sub {
        for y in sup_iter.by_ref() {
            if y == x {
                continue 'outer;
            }
            if y > x {
                return false;
            }
        }
        return false;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aba::language::Language;

    fn toni_tutorial_ex() -> ABAFramework<&'static str> {
        let l = Language::new_with_labels(&["a", "b", "c", "p", "q", "r", "s", "t"]);
        let mut framework = ABAFramework::new_with_language(l);
        framework.new_assumption(&"a").unwrap();
        framework.new_assumption(&"b").unwrap();
        framework.new_assumption(&"c").unwrap();
        framework.set_contrary(&"a", &"r").unwrap();
        framework.set_contrary(&"b", &"s").unwrap();
        framework.set_contrary(&"c", &"t").unwrap();
        framework.new_rule(&"p", &[&"q", &"a"]).unwrap();
        framework.new_rule(&"q", &[]).unwrap();
        framework.new_rule(&"r", &[&"b", &"c"]).unwrap();
        framework
    }

    #[test]
    fn test_is_sorted_subset() {
        assert!(is_sorted_subset(&[], &[]));
        assert!(is_sorted_subset(&[], &[1]));
        assert!(is_sorted_subset(&[1, 3], &[1, 2, 3]));
        assert!(!is_sorted_subset(&[1, 4], &[1, 2, 3]));
        assert!(!is_sorted_subset(&[1], &[]));
    }

    #[test]
    fn test_merge_minimal_rejects_superset() {
        let mut supports = vec![vec![0]];
        assert!(!merge_minimal(&mut supports, vec![0, 1]));
        assert_eq!(vec![vec![0]], supports);
    }

    #[test]
    fn test_merge_minimal_prunes_dominated() {
        let mut supports = vec![vec![0, 1], vec![2]];
        assert!(merge_minimal(&mut supports, vec![0]));
        assert_eq!(vec![vec![2], vec![0]], supports);
    }

    #[test]
    fn test_supports_computer() {
        let f = toni_tutorial_ex();
        let sc = AtomSupport::compute(&f);
        let expected: Vec<Vec<Vec<usize>>> = vec![
            vec![vec![0]],
            vec![vec![1]],
            vec![vec![2]],
            vec![vec![0]],
            vec![vec![]],
            vec![vec![1, 2]],
            vec![],
            vec![],
        ];
        assert_eq!(expected, sc.supports);
    }

    #[test]
    fn test_supports_with_loop() {
        let mut f = toni_tutorial_ex();
        f.new_rule(&"p", &[&"s"]).unwrap();
        f.new_rule(&"s", &[&"p"]).unwrap();
        let sc = AtomSupport::compute(&f);
        let expected: Vec<Vec<Vec<usize>>> = vec![
            vec![vec![0]],
            vec![vec![1]],
            vec![vec![2]],
            vec![vec![0]],
            vec![vec![]],
            vec![vec![1, 2]],
            vec![vec![0]],
            vec![],
        ];
        assert_eq!(expected, sc.supports);
    }

    #[test]
    fn test_minimality_discards_redundant_rule() {
        let l = Language::new_with_labels(&["a", "b", "p"]);
        let mut f = ABAFramework::new_with_language(l);
        f.new_assumption(&"a").unwrap();
        f.new_assumption(&"b").unwrap();
        f.new_rule(&"p", &[&"a"]).unwrap();
        f.new_rule(&"p", &[&"a", &"b"]).unwrap();
        let sc = AtomSupport::compute(&f);
        assert_eq!(vec![vec![0_usize]], sc.supports_of(2));
    }

    #[test]
    fn test_minimality_prunes_earlier_support() {
        let l = Language::new_with_labels(&["a", "b", "p"]);
        let mut f = ABAFramework::new_with_language(l);
        f.new_assumption(&"a").unwrap();
        f.new_assumption(&"b").unwrap();
        f.new_rule(&"p", &[&"a", &"b"]).unwrap();
        f.new_rule(&"p", &[&"a"]).unwrap();
        let sc = AtomSupport::compute(&f);
        assert_eq!(vec![vec![0_usize]], sc.supports_of(2));
    }

    #[test]
    fn test_alternative_supports_kept() {
        let l = Language::new_with_labels(&["a", "b", "p"]);
        let mut f = ABAFramework::new_with_language(l);
        f.new_assumption(&"a").unwrap();
        f.new_assumption(&"b").unwrap();
        f.new_rule(&"p", &[&"a"]).unwrap();
        f.new_rule(&"p", &[&"b"]).unwrap();
        let sc = AtomSupport::compute(&f);
        assert_eq!(vec![vec![0_usize], vec![1]], sc.supports_of(2));
    }

    #[test]
    fn test_chained_derivations() {
        let l = Language::new_with_labels(&[0usize, 1, 2, 3, 4, 5, 6, 7, 8]);
        let mut f = ABAFramework::new_with_language(l);
        f.new_assumption(&0).unwrap();
        f.new_assumption(&1).unwrap();
        f.set_contrary(&0, &5).unwrap();
        f.set_contrary(&1, &6).unwrap();
        f.new_rule(&4, &[&0]).unwrap();
        f.new_rule(&6, &[&4]).unwrap();
        f.new_rule(&7, &[&6]).unwrap();
        f.new_rule(&5, &[&7]).unwrap();
        f.new_rule(&7, &[&3, &5]).unwrap();
        f.new_rule(&3, &[&6]).unwrap();
        f.new_rule(&8, &[&7]).unwrap();
        f.new_rule(&6, &[&8, &3]).unwrap();
        let sc = AtomSupport::compute(&f);
        let expected: Vec<Vec<Vec<usize>>> = vec![
            vec![vec![0]],
            vec![vec![1]],
            vec![],
            vec![vec![0]],
            vec![vec![0]],
            vec![vec![0]],
            vec![vec![0]],
            vec![vec![0]],
            vec![vec![0]],
        ];
        assert_eq!(expected, sc.supports);
    }

    #[test]
    fn test_rule_order_does_not_matter() {
        let l1 = Language::new_with_labels(&["a", "b", "p", "q"]);
        let mut f1 = ABAFramework::new_with_language(l1.clone());
        let mut f2 = ABAFramework::new_with_language(l1);
        for f in [&mut f1, &mut f2] {
            f.new_assumption(&"a").unwrap();
            f.new_assumption(&"b").unwrap();
        }
        f1.new_rule(&"p", &[&"a"]).unwrap();
        f1.new_rule(&"q", &[&"p", &"b"]).unwrap();
        f2.new_rule(&"q", &[&"p", &"b"]).unwrap();
        f2.new_rule(&"p", &[&"a"]).unwrap();
        assert_eq!(
            AtomSupport::compute(&f1).supports,
            AtomSupport::compute(&f2).supports
        );
    }
}
