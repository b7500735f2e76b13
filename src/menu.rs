use crate::errors::ReplayError;
use crate::http_executor::{execute, ExecutedResponse};
use crate::log_reader;
use anyhow::{Context, Result};
use std::io::BufRead;
use std::path::PathBuf;

/// Parsed menu selection. Anything that is not 1-4 redisplays the menu.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum MenuChoice {
    FreshRequest,
    ReplayLast,
    History,
    Exit,
    Redisplay,
}

/// Controller state, threaded explicitly through the loop instead of living
/// in shared mutable globals.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum MenuState {
    MenuIdle,
    AwaitingUrlInput,
    Executing(RequestSource),
    ShowingHistory,
    Terminated,
}

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum RequestSource {
    Fresh(String),
    Replay,
}

pub fn parse_choice(token: &str) -> MenuChoice {
    return match token.trim().parse::<i32>() {
        Ok(1) => MenuChoice::FreshRequest,
        Ok(2) => MenuChoice::ReplayLast,
        Ok(3) => MenuChoice::History,
        Ok(4) => MenuChoice::Exit,
        _ => MenuChoice::Redisplay,
    };
}

/// Transition out of the idle state for a given selection.
pub fn dispatch(choice: MenuChoice) -> MenuState {
    return match choice {
        MenuChoice::FreshRequest => MenuState::AwaitingUrlInput,
        MenuChoice::ReplayLast => MenuState::Executing(RequestSource::Replay),
        MenuChoice::History => MenuState::ShowingHistory,
        MenuChoice::Exit => MenuState::Terminated,
        MenuChoice::Redisplay => MenuState::MenuIdle,
    };
}

pub struct Controller {
    client: reqwest::blocking::Client,
    log_path: PathBuf,
}

impl Controller {
    pub fn new(log_path: PathBuf) -> Result<Controller> {
        // no request timeout: a GET runs to completion or transport failure
        let client = reqwest::blocking::Client::builder()
            .timeout(None::<std::time::Duration>)
            .build()
            .context("couldn't construct http client")?;
        return Ok(Controller { client, log_path });
    }

    /// Runs the menu loop until the user quits or stdin closes.
    ///
    /// Error policy is asymmetric on purpose: in the fresh-request path any
    /// failure is fatal and propagates out of the loop, while replay and
    /// history failures are printed and the menu redisplays.
    pub fn run(&self, input: &mut impl BufRead) -> Result<()> {
        let mut state = MenuState::MenuIdle;
        loop {
            state = match state {
                MenuState::MenuIdle => {
                    print_menu();
                    match read_token(input)? {
                        Some(token) => dispatch(parse_choice(&token)),
                        None => MenuState::Terminated,
                    }
                }
                MenuState::AwaitingUrlInput => {
                    println!("Enter URL:");
                    match read_token(input)? {
                        Some(url) => MenuState::Executing(RequestSource::Fresh(url)),
                        None => MenuState::Terminated,
                    }
                }
                MenuState::Executing(RequestSource::Fresh(url)) => {
                    let executed = execute(&self.client, &self.log_path, &url)?;
                    print_response(&executed);
                    MenuState::MenuIdle
                }
                MenuState::Executing(RequestSource::Replay) => {
                    match self.replay() {
                        Ok(executed) => print_response(&executed),
                        Err(reason) => println!("{}", reason),
                    }
                    MenuState::MenuIdle
                }
                MenuState::ShowingHistory => {
                    match log_reader::records(&self.log_path) {
                        Ok(lines) => {
                            for line in lines {
                                println!("{}", line);
                            }
                        }
                        Err(reason) => println!("{}", reason),
                    }
                    MenuState::MenuIdle
                }
                MenuState::Terminated => return Ok(()),
            };
        }
    }

    fn replay(&self) -> Result<ExecutedResponse, ReplayError> {
        let url = log_reader::last_url(&self.log_path)?;
        println!("Repeating request to {}", url);
        return execute(&self.client, &self.log_path, &url);
    }
}

// Skips leading blank lines and returns the first whitespace-delimited token,
// or None once stdin closes.
fn read_token(input: &mut impl BufRead) -> Result<Option<String>> {
    loop {
        let mut line = String::new();
        let read = input.read_line(&mut line).context("couldn't read input")?;
        if read == 0 {
            return Ok(None);
        }
        if let Some(token) = line.split_whitespace().next() {
            return Ok(Some(token.to_string()));
        }
    }
}

fn print_response(executed: &ExecutedResponse) {
    println!("{}", executed.status);
    println!("{}", executed.headers_text);
    println!("{}", executed.body_text);
}

fn print_menu() {
    println!("My Requests");
    println!("Menu");
    println!("1. Do request");
    println!("2. Repeat last request");
    println!("3. History");
    println!("4. Exit");
    use std::io::Write;
    // the prompt has no trailing newline
    print!("Choose: ");
    let _ = std::io::stdout().flush();
}
