use anyhow::Result;
use clap::Command;
use reqreplay::menu::Controller;

const LOG_FILE: &str = "app.log";

fn main() -> Result<()> {
    // no flags or arguments, just --help/--version
    Command::new("reqreplay")
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .get_matches();

    let controller = Controller::new(std::path::PathBuf::from(LOG_FILE))?;
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    controller.run(&mut input)?;

    // quitting from the menu deliberately reports a non-success status
    std::process::exit(1);
}
