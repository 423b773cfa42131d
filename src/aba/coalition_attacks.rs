use crate::aba::arguments::Argument;
use crate::aba::framework::ABAFramework;
use crate::utils::LabelType;
use anyhow::{anyhow, Result};
use std::collections::HashMap;
use strum_macros::{AsRefStr, Display, EnumString};

/// The maximal number of assumptions accepted by [compute_coalition_attacks].
///
/// The computation enumerates every ordered pair of coalitions, that is `4^n` pairs
/// for `n` assumptions; past this bound the brute force becomes unreasonable.
pub const MAX_COALITION_ASSUMPTIONS: usize = 12;

/// The kind of an attack between two coalitions of assumptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum CoalitionAttackKind {
    /// The first coalition supports the contrary of a member of the second one.
    Normal,
    /// The attack comes from the second coalition but is inverted by the preferences.
    Reverse,
    /// Both kinds of evidence exist for the pair.
    Both,
}

/// An attack between two coalitions of assumptions.
///
/// Coalition members and the witness are given as atom ids; members are sorted
/// by their labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoalitionAttack {
    x: Vec<usize>,
    y: Vec<usize>,
    kind: CoalitionAttackKind,
    witness: usize,
}

impl CoalitionAttack {
    /// Returns the members of the attacking coalition.
    pub fn x(&self) -> &[usize] {
        &self.x
    }

    /// Returns the members of the attacked coalition.
    pub fn y(&self) -> &[usize] {
        &self.y
    }

    /// Returns the kind of the attack.
    pub fn kind(&self) -> CoalitionAttackKind {
        self.kind
    }

    /// Returns the witness assumption id.
    ///
    /// When both kinds of evidence exist, the witness is the normal one.
    pub fn witness(&self) -> usize {
        self.witness
    }
}

/// Computes the attack relation between every ordered pair of assumption coalitions.
///
/// For two coalitions `X` and `Y`:
/// - normal evidence is an assumption `y` of `Y` whose contrary is concluded by an
///   argument supported within `X`, with no support member strictly less preferred
///   than `y`;
/// - reverse evidence is an assumption `x` of `X` whose contrary is concluded by an
///   argument supported within `Y` relying on a member strictly less preferred than `x`.
///
/// One record is emitted per ordered pair having at least one kind of evidence;
/// its witness is the qualifying assumption with the smallest label (the normal one
/// when both kinds exist).
///
/// This pass is intentionally exponential (`4^n` coalition pairs) and meant for
/// teaching-scale frameworks; an error is returned when the framework has more than
/// [MAX_COALITION_ASSUMPTIONS] assumptions.
pub fn compute_coalition_attacks<T>(
    framework: &ABAFramework<T>,
    arguments: &[Argument],
) -> Result<Vec<CoalitionAttack>>
where
    T: LabelType,
{
    let n = framework.n_assumptions();
    if n > MAX_COALITION_ASSUMPTIONS {
        return Err(anyhow!(
            "cannot enumerate coalitions over {} assumptions (maximum is {})",
            n,
            MAX_COALITION_ASSUMPTIONS
        ));
    }
    let language = framework.language();
    let mut order = framework.assumption_ids().to_vec();
    order.sort_by(|a, b| {
        language
            .get_atom_by_id(*a)
            .label()
            .cmp(language.get_atom_by_id(*b).label())
    });
    let index_of: HashMap<usize, usize> =
        order.iter().enumerate().map(|(i, id)| (*id, i)).collect();
    // per assumption, the support masks of its contrary, split on the preference test:
    // a support with no member worse than the assumption is normal evidence, the
    // others are reverse evidence
    let mut normal_masks: Vec<Vec<u64>> = vec![Vec::new(); n];
    let mut reverse_masks: Vec<Vec<u64>> = vec![Vec::new(); n];
    for (ai, id) in order.iter().enumerate() {
        let contrary = match framework.contrary_id_of(*id) {
            Some(c) => c,
            None => continue,
        };
        let rank = framework.rank_or_sentinel(*id);
        for argument in arguments.iter().filter(|a| a.conclusion() == contrary) {
            let mask = argument
                .support()
                .iter()
                .fold(0u64, |m, s| m | 1 << index_of[s]);
            if argument
                .support()
                .iter()
                .any(|s| framework.rank_or_sentinel(*s) > rank)
            {
                reverse_masks[ai].push(mask);
            } else {
                normal_masks[ai].push(mask);
            }
        }
    }
    let members_of = |mask: u64| {
        (0..n)
            .filter(|ai| mask & (1 << ai) != 0)
            .map(|ai| order[ai])
            .collect::<Vec<usize>>()
    };
    let mut attacks = Vec::new();
    for x in 0..1u64 << n {
        for y in 0..1u64 << n {
            let normal_witness = (0..n).find(|ai| {
                y & (1 << ai) != 0 && normal_masks[*ai].iter().any(|m| m & !x == 0)
            });
            let reverse_witness = (0..n).find(|ai| {
                x & (1 << ai) != 0 && reverse_masks[*ai].iter().any(|m| m & !y == 0)
            });
            let (kind, witness) = match (normal_witness, reverse_witness) {
                (Some(w), Some(_)) => (CoalitionAttackKind::Both, w),
                (Some(w), None) => (CoalitionAttackKind::Normal, w),
                (None, Some(w)) => (CoalitionAttackKind::Reverse, w),
                (None, None) => continue,
            };
            attacks.push(CoalitionAttack {
                x: members_of(x),
                y: members_of(y),
                kind,
                witness: order[witness],
            });
        }
    }
    Ok(attacks)
}
