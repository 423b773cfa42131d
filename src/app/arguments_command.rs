use super::app_helper::logging_level_cli_arg;
use super::command::Command;
use super::common;
use abaplus::aba::{derive_arguments, FrameworkReport, ResultsWriter};
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "arguments";

pub(crate) struct ArgumentsCommand;

impl ArgumentsCommand {
    pub(crate) fn new() -> Self {
        ArgumentsCommand
    }
}

impl<'a> Command<'a> for ArgumentsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Derives the arguments of an ABA framework")
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
        let arguments = derive_arguments(&framework);
        info!("derived {} argument(s)", arguments.len());
        let report = FrameworkReport::new(&framework, &arguments, &[], None);
        ResultsWriter::default().write_arguments(&report, &mut std::io::stdout())
    }
}
