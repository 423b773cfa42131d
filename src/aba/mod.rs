//! A module containing the material needed to handle Assumption-based Argumentation (ABA+) frameworks.

mod arguments;
pub use arguments::derive_arguments;
pub use arguments::Argument;

mod atom_support;
pub use atom_support::AtomSupport;

mod atomic_sensitive;
pub use atomic_sensitive::AtomicSensitizer;
pub use atomic_sensitive::SuffixLabelFn;

mod attacks;
pub use attacks::compute_attacks;
pub use attacks::Attack;
pub use attacks::AttackKind;

mod coalition_attacks;
pub use coalition_attacks::compute_coalition_attacks;
pub use coalition_attacks::CoalitionAttack;
pub use coalition_attacks::CoalitionAttackKind;
pub use coalition_attacks::MAX_COALITION_ASSUMPTIONS;

mod cycle;
pub use cycle::has_rule_cycles;

mod framework;
pub use framework::ABAFramework;
pub use framework::MalformedFrameworkError;
pub use framework::RawFramework;
pub use framework::Rule;

mod io;
pub use io::ABAPlusReader;
pub use io::ResultsWriter;

mod language;
pub use language::Atom;
pub use language::Language;

mod non_circular;
pub use non_circular::LevelLabelFn;
pub use non_circular::NonCircularizer;

mod preferences;
pub use preferences::parse_preference_expression;

mod report;
pub use report::ArgumentReport;
pub use report::AttackReport;
pub use report::CoalitionAttackReport;
pub use report::FrameworkReport;
pub use report::RuleReport;
