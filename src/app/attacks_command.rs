use super::app_helper::logging_level_cli_arg;
use super::command::Command;
use super::common;
use abaplus::aba::{
    compute_attacks, compute_coalition_attacks, derive_arguments, AtomicSensitizer,
    FrameworkReport, NonCircularizer, ResultsWriter,
};
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "attacks";

const ARG_WITH_PREFERENCES: &str = "WITH_PREFERENCES";
const ARG_COALITIONS: &str = "COALITIONS";
const ARG_NON_CIRCULAR: &str = "NON_CIRCULAR";
const ARG_ATOMIC_SENSITIVE: &str = "ATOMIC_SENSITIVE";
const ARG_JSON: &str = "JSON";

pub(crate) struct AttacksCommand;

impl AttacksCommand {
    pub(crate) fn new() -> Self {
        AttacksCommand
    }
}

impl<'a> Command<'a> for AttacksCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the attacks between the arguments of an ABA framework")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::preferences_arg())
            .arg(
                Arg::with_name(ARG_WITH_PREFERENCES)
                    .long("with-preferences")
                    .takes_value(false)
                    .help("take the preference ranks into account, reversing the relevant attacks"),
            )
            .arg(
                Arg::with_name(ARG_COALITIONS)
                    .long("coalitions")
                    .takes_value(false)
                    .help("also compute the attacks between assumption coalitions"),
            )
            .arg(
                Arg::with_name(ARG_NON_CIRCULAR)
                    .long("non-circular")
                    .takes_value(false)
                    .help("break the rule cycles of the framework before the computation"),
            )
            .arg(
                Arg::with_name(ARG_ATOMIC_SENSITIVE)
                    .long("atomic-sensitive")
                    .takes_value(false)
                    .help("make the rule bodies atomic before the computation"),
            )
            .arg(
                Arg::with_name(ARG_JSON)
                    .long("json")
                    .takes_value(false)
                    .help("output the full report as JSON instead of plain text"),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut raw = common::read_raw_from_file(file)?;
        if let Some(expression) = arg_matches.value_of(common::ARG_PREFERENCES) {
            raw.set_preference_expression(expression);
        }
        let mut framework = common::build_framework(&raw)?;
        if arg_matches.is_present(ARG_NON_CIRCULAR) {
            framework = NonCircularizer::new_for_strings().transform(&framework);
            info!(
                "broke the rule cycles; the framework now has {} literal(s) and {} rule(s)",
                framework.language().len(),
                framework.n_rules(),
            );
        }
        if arg_matches.is_present(ARG_ATOMIC_SENSITIVE) {
            framework = AtomicSensitizer::new_for_strings().transform(&framework);
            info!(
                "made the rule bodies atomic; the framework now has {} literal(s) and {} assumption(s)",
                framework.language().len(),
                framework.n_assumptions(),
            );
        }
        let arguments = derive_arguments(&framework);
        info!("derived {} argument(s)", arguments.len());
        let with_preferences = arg_matches.is_present(ARG_WITH_PREFERENCES);
        let attacks = compute_attacks(&framework, &arguments, with_preferences);
        info!("computed {} attack(s)", attacks.len());
        let coalition_attacks = if arg_matches.is_present(ARG_COALITIONS) {
            let coalition_attacks = compute_coalition_attacks(&framework, &arguments)
                .context("while computing the coalition attacks")?;
            info!("computed {} coalition attack(s)", coalition_attacks.len());
            Some(coalition_attacks)
        } else {
            None
        };
        let report = FrameworkReport::new(
            &framework,
            &arguments,
            &attacks,
            coalition_attacks.as_deref(),
        );
        let mut out = std::io::stdout();
        if arg_matches.is_present(ARG_JSON) {
            serde_json::to_writer_pretty(&mut out, &report)
                .context("while writing the JSON report")?;
            println!();
            Ok(())
        } else {
            let writer = ResultsWriter::default();
            writer.write_arguments(&report, &mut out)?;
            writer.write_attacks(&report, &mut out)?;
            writer.write_coalition_attacks(&report, &mut out)
        }
    }
}
