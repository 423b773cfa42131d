mod app_helper;
pub(crate) use app_helper::AppHelper;

mod arguments_command;
pub(crate) use arguments_command::ArgumentsCommand;

mod attacks_command;
pub(crate) use attacks_command::AttacksCommand;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod command;
pub(crate) use command::Command;

pub(crate) mod common;
