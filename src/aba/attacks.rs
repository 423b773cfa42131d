use crate::aba::arguments::Argument;
use crate::aba::framework::ABAFramework;
use crate::utils::LabelType;
use std::collections::BTreeMap;
use strum_macros::{AsRefStr, Display, EnumString};

/// The kind of an argument-level attack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AttackKind {
    /// The attacker derives the contrary of an assumption of the target.
    Normal,
    /// The attack direction was inverted by the preference relation.
    Reverse,
}

/// A directed attack between two arguments, given by their ids.
///
/// The witness is the assumption of the attacked support whose contrary is the
/// conclusion of the attacking argument (for a reverse attack, the supports are
/// the ones of the pre-reversal attacker and target).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    attacker: usize,
    target: usize,
    kind: AttackKind,
    witness: usize,
}

impl Attack {
    /// Returns the id of the attacking argument.
    pub fn attacker(&self) -> usize {
        self.attacker
    }

    /// Returns the id of the attacked argument.
    pub fn target(&self) -> usize {
        self.target
    }

    /// Returns the kind of the attack.
    pub fn kind(&self) -> AttackKind {
        self.kind
    }

    /// Returns the witness assumption id.
    pub fn witness(&self) -> usize {
        self.witness
    }
}

#[derive(Default)]
struct PairWitnesses {
    normal: Vec<usize>,
    reverse: Vec<usize>,
}

/// Computes the attack relation between the provided arguments.
///
/// Without preferences, an argument attacks every argument whose support contains an
/// assumption whose contrary is the attacker conclusion.
/// With preferences, the attack is reversed when the attacker relies on an assumption
/// strictly less preferred than the witness; unranked assumptions are maximally
/// unpreferred, so they may be beaten by a ranked witness but never trigger a reversal
/// in their favor.
///
/// At most one attack is emitted per directed pair of argument ids: a normal edge is
/// preferred when both kinds have a witness, and ties between witnesses of the retained
/// kind are broken by the smallest label.
pub fn compute_attacks<T>(
    framework: &ABAFramework<T>,
    arguments: &[Argument],
    use_preferences: bool,
) -> Vec<Attack>
where
    T: LabelType,
{
    let mut pairs: BTreeMap<(usize, usize), PairWitnesses> = BTreeMap::new();
    for attacker in arguments {
        for target in arguments {
            for &witness in target.support() {
                if framework.contrary_id_of(witness) != Some(attacker.conclusion()) {
                    continue;
                }
                let reversed = use_preferences
                    && attacker.support().iter().any(|a| {
                        framework.rank_or_sentinel(*a) > framework.rank_or_sentinel(witness)
                    });
                if reversed {
                    pairs
                        .entry((target.id(), attacker.id()))
                        .or_default()
                        .reverse
                        .push(witness);
                } else {
                    pairs
                        .entry((attacker.id(), target.id()))
                        .or_default()
                        .normal
                        .push(witness);
                }
            }
        }
    }
    let smallest_label = |witnesses: &[usize]| {
        *witnesses
            .iter()
            .min_by_key(|w| framework.language().get_atom_by_id(**w).label())
            .unwrap()
    };
    pairs
        .into_iter()
        .map(|((attacker, target), witnesses)| {
            if witnesses.normal.is_empty() {
                Attack {
                    attacker,
                    target,
                    kind: AttackKind::Reverse,
                    witness: smallest_label(&witnesses.reverse),
                }
            } else {
                Attack {
                    attacker,
                    target,
                    kind: AttackKind::Normal,
                    witness: smallest_label(&witnesses.normal),
                }
            }
        })
        .collect()
}
