use app::{AppHelper, ArgumentsCommand, AttacksCommand, AuthorsCommand, CheckCommand, Command};

mod app;

const AUTHORS: &str = "Maxime Verrier <maxime.verrier@mailo.com>";

fn main() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        AUTHORS,
        "Abaplus, an Assumption-Based Argumentation reasoner with preference handling.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, AUTHORS)),
        Box::new(CheckCommand::new()),
        Box::new(ArgumentsCommand::new()),
        Box::new(AttacksCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app.launch_app();
}
