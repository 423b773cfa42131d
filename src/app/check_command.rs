use super::app_helper::logging_level_cli_arg;
use super::command::Command;
use super::common;
use abaplus::aba::has_rule_cycles;
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{info, warn};

const CMD_NAME: &str = "check";

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks an input ABA framework file for errors")
            .setting(AppSettings::DisableVersion)
            .arg(common::input_args())
            .arg(common::preferences_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let file = arg_matches.value_of(common::ARG_INPUT).unwrap();
        let mut raw = common::read_raw_from_file(file)?;
        if let Some(expression) = arg_matches.value_of(common::ARG_PREFERENCES) {
            raw.set_preference_expression(expression);
        }
        let framework = common::build_framework(&raw)?;
        if has_rule_cycles(&framework) {
            warn!("the rules of the framework form a cycle; consider the non-circular translation");
        } else {
            info!("the rules of the framework are cycle-free");
        }
        Ok(())
    }
}
