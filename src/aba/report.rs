use crate::aba::arguments::Argument;
use crate::aba::attacks::Attack;
use crate::aba::coalition_attacks::CoalitionAttack;
use crate::aba::framework::ABAFramework;
use crate::utils::LabelType;
use serde::Serialize;
use std::collections::BTreeMap;

/// An argument, rendered with the display form of its literals.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ArgumentReport {
    /// The argument identifier.
    pub id: usize,
    /// The conclusion literal.
    pub conclusion: String,
    /// The supporting assumptions, sorted by label.
    pub assumptions: Vec<String>,
}

/// A pairwise attack between two arguments.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct AttackReport {
    /// The identifier of the attacking argument.
    pub attacker: usize,
    /// The identifier of the attacked argument.
    pub target: usize,
    /// The attack kind (`normal` or `reverse`).
    pub kind: String,
    /// The assumption whose contrary grounds the attack.
    pub witness: String,
}

/// An attack between two assumption coalitions.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct CoalitionAttackReport {
    /// The attacking coalition, sorted by label.
    pub x: Vec<String>,
    /// The attacked coalition, sorted by label.
    pub y: Vec<String>,
    /// The attack kind (`normal`, `reverse` or `both`).
    pub kind: String,
    /// The assumption whose contrary grounds the attack.
    pub witness: String,
}

/// A rule, rendered with the display form of its literals.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct RuleReport {
    /// The head literal.
    pub head: String,
    /// The body literals, in rule order.
    pub body: Vec<String>,
}

/// The serializable outcome of a full reasoning run on a framework.
///
/// All literals appear under their display form, so the report stays readable
/// whatever the label type of the framework is. Collections are sorted to make
/// the output deterministic.
#[derive(Debug, Serialize)]
pub struct FrameworkReport {
    /// The literals of the framework, sorted.
    pub literals: Vec<String>,
    /// The assumptions, sorted.
    pub assumptions: Vec<String>,
    /// The contrary mapping, keyed by assumption.
    pub contraries: BTreeMap<String, String>,
    /// The rules, in declaration order.
    pub rules: Vec<RuleReport>,
    /// The preference ranks, keyed by assumption (lower is better).
    pub preferences: BTreeMap<String, usize>,
    /// The derived arguments, by increasing identifier.
    pub arguments: Vec<ArgumentReport>,
    /// The pairwise attacks.
    pub attacks: Vec<AttackReport>,
    /// The coalition attacks, when they were computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coalition_attacks: Option<Vec<CoalitionAttackReport>>,
}

impl FrameworkReport {
    /// Builds a report from a framework and the products of a reasoning run.
    pub fn new<T>(
        framework: &ABAFramework<T>,
        arguments: &[Argument],
        attacks: &[Attack],
        coalition_attacks: Option<&[CoalitionAttack]>,
    ) -> Self
    where
        T: LabelType,
    {
        let language = framework.language();
        let label_of = |id: usize| format!("{}", language.get_atom_by_id(id).label());
        let mut literals: Vec<String> = language.iter().map(|a| format!("{}", a.label())).collect();
        literals.sort_unstable();
        let mut assumptions: Vec<String> = framework
            .iter_assumptions()
            .map(|a| format!("{}", a.label()))
            .collect();
        assumptions.sort_unstable();
        let contraries = framework
            .iter_assumptions()
            .filter_map(|a| {
                framework
                    .contrary_id_of(a.id())
                    .map(|c| (format!("{}", a.label()), label_of(c)))
            })
            .collect();
        let rules = framework
            .iter_rules()
            .map(|r| RuleReport {
                head: format!("{}", r.head().label()),
                body: r.iter_body().map(|a| format!("{}", a.label())).collect(),
            })
            .collect();
        let preferences = framework
            .iter_assumptions()
            .filter_map(|a| {
                framework
                    .rank_of_id(a.id())
                    .map(|r| (format!("{}", a.label()), r))
            })
            .collect();
        let arguments = arguments
            .iter()
            .map(|arg| {
                let mut support: Vec<String> =
                    arg.support().iter().map(|id| label_of(*id)).collect();
                support.sort_unstable();
                ArgumentReport {
                    id: arg.id(),
                    conclusion: label_of(arg.conclusion()),
                    assumptions: support,
                }
            })
            .collect();
        let attacks = attacks
            .iter()
            .map(|att| AttackReport {
                attacker: att.attacker(),
                target: att.target(),
                kind: att.kind().to_string(),
                witness: label_of(att.witness()),
            })
            .collect();
        let coalition_attacks = coalition_attacks.map(|coalition_attacks| {
            coalition_attacks
                .iter()
                .map(|att| CoalitionAttackReport {
                    x: att.x().iter().map(|id| label_of(*id)).collect(),
                    y: att.y().iter().map(|id| label_of(*id)).collect(),
                    kind: att.kind().to_string(),
                    witness: label_of(att.witness()),
                })
                .collect()
        });
        FrameworkReport {
            literals,
            assumptions,
            contraries,
            rules,
            preferences,
            arguments,
            attacks,
            coalition_attacks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aba::arguments::derive_arguments;
    use crate::aba::attacks::compute_attacks;
    use crate::aba::language::Language;

    fn mutual_attack_ex() -> ABAFramework<String> {
        let labels: Vec<String> = ["a", "b", "p", "q"].iter().map(|s| s.to_string()).collect();
        let mut f = ABAFramework::new_with_language(Language::new_with_labels(&labels));
        f.new_assumption(&"a".to_string()).unwrap();
        f.new_assumption(&"b".to_string()).unwrap();
        f.set_contrary(&"a".to_string(), &"p".to_string()).unwrap();
        f.set_contrary(&"b".to_string(), &"q".to_string()).unwrap();
        f.new_rule(&"p".to_string(), &[&"b".to_string()]).unwrap();
        f.new_rule(&"q".to_string(), &[&"a".to_string()]).unwrap();
        f
    }

    #[test]
    fn test_report_content() {
        let f = mutual_attack_ex();
        let arguments = derive_arguments(&f);
        let attacks = compute_attacks(&f, &arguments, false);
        let report = FrameworkReport::new(&f, &arguments, &attacks, None);
        assert_eq!(vec!["a", "b", "p", "q"], report.literals);
        assert_eq!(vec!["a", "b"], report.assumptions);
        assert_eq!(Some(&"p".to_string()), report.contraries.get("a"));
        assert_eq!(2, report.rules.len());
        assert!(report.preferences.is_empty());
        assert_eq!(4, report.arguments.len());
        assert_eq!(4, report.attacks.len());
        assert!(report.coalition_attacks.is_none());
        assert!(report.attacks.iter().all(|a| a.kind == "normal"));
    }

    #[test]
    fn test_json_shape() {
        let f = mutual_attack_ex();
        let arguments = derive_arguments(&f);
        let attacks = compute_attacks(&f, &arguments, false);
        let report = FrameworkReport::new(&f, &arguments, &attacks, None);
        let json = serde_json::to_value(&report).unwrap();
        assert!(json.get("coalition_attacks").is_none());
        assert_eq!(4, json["literals"].as_array().unwrap().len());
        assert_eq!("normal", json["attacks"][0]["kind"]);
    }

    #[test]
    fn test_argument_support_sorted_by_label() {
        let labels: Vec<String> = ["b", "a", "p"].iter().map(|s| s.to_string()).collect();
        let mut f = ABAFramework::new_with_language(Language::new_with_labels(&labels));
        f.new_assumption(&"b".to_string()).unwrap();
        f.new_assumption(&"a".to_string()).unwrap();
        f.new_rule(&"p".to_string(), &[&"b".to_string(), &"a".to_string()])
            .unwrap();
        let arguments = derive_arguments(&f);
        let report = FrameworkReport::new(&f, &arguments, &[], None);
        let p_arg = report
            .arguments
            .iter()
            .find(|a| a.conclusion == "p")
            .unwrap();
        assert_eq!(vec!["a".to_string(), "b".to_string()], p_arg.assumptions);
    }
}
