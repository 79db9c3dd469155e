//! # Interactive Session
//!
//! The menu loop behind `stockroom interactive`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Session Loop                                         │
//! │                                                                         │
//! │  banner                                                                 │
//! │    │                                                                    │
//! │    ▼                                                                    │
//! │  ┌──► menu ──► read option ──► invalid? ──► warn ──┐                   │
//! │  │                 │                                 │                   │
//! │  │                 ▼                                 │                   │
//! │  │            dispatch ──► error? ──► print it       │                   │
//! │  │                 │                                 │                   │
//! │  │                 ├── Exit ──► farewell, return     │                   │
//! │  │                 ▼                                 │                   │
//! │  └──────── "Press Enter to continue" ◄──────────────┘                   │
//! │                                                                         │
//! │  End of input at any prompt ends the session cleanly.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use stockroom_core::validation::validate_menu_option;
use stockroom_core::{MenuCommand, MENU_FIRST_OPTION, MENU_LAST_OPTION};
use tracing::{debug, info};

use crate::commands::{self, Flow};
use crate::error::{ConsoleError, ConsoleResult};
use crate::output::Output;
use crate::prompt::Prompt;
use crate::state::AppState;

/// A menu-driven session over one [`AppState`].
pub struct Session<P: Prompt> {
    state: AppState,
    prompt: P,
    out: Output,
    pause_between_commands: bool,
}

impl<P: Prompt> Session<P> {
    pub fn new(state: AppState, prompt: P, out: Output) -> Self {
        Session {
            state,
            prompt,
            out,
            pause_between_commands: true,
        }
    }

    /// Skips the "Press Enter to continue" step (scripted runs).
    pub fn without_pause(mut self) -> Self {
        self.pause_between_commands = false;
        self
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn prompt(&self) -> &P {
        &self.prompt
    }

    pub fn into_state(self) -> AppState {
        self.state
    }

    /// Runs until the operator picks Exit or input ends.
    ///
    /// Command errors are shown and the loop continues; only a terminal
    /// failure other than end of input is returned.
    pub fn run(&mut self) -> ConsoleResult<()> {
        info!(products = self.state.inventory.len(), "Session started");
        self.banner();

        loop {
            match self.step() {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => {
                    self.farewell();
                    break;
                }
                Err(err) if err.is_input_closed() => {
                    debug!("Input closed, ending session");
                    self.out.blank();
                    break;
                }
                Err(err) => return Err(err),
            }
        }

        info!(products = self.state.inventory.len(), "Session ended");
        Ok(())
    }

    fn step(&mut self) -> ConsoleResult<Flow> {
        self.menu();
        let command = self.read_command()?;
        debug!(?command, "Menu command selected");

        if command == MenuCommand::Exit {
            return Ok(Flow::Exit);
        }

        self.out.rule('-');
        match commands::dispatch(command, &mut self.state, &mut self.prompt, &self.out) {
            Ok(flow) => {
                self.out.rule('-');
                self.pause()?;
                Ok(flow)
            }
            Err(err) if err.is_input_closed() => Err(err),
            Err(err) => {
                self.report(&err);
                self.out.rule('-');
                self.pause()?;
                Ok(Flow::Continue)
            }
        }
    }

    fn read_command(&mut self) -> ConsoleResult<MenuCommand> {
        loop {
            let raw = self.prompt.read_line("Select an option")?;
            let command = validate_menu_option(&raw, MENU_FIRST_OPTION, MENU_LAST_OPTION)
                .ok()
                .and_then(MenuCommand::from_option);

            match command {
                Some(command) => return Ok(command),
                None => {
                    self.out.warn(&format!(
                        "Invalid option. Enter a number from {} to {}.",
                        MENU_FIRST_OPTION, MENU_LAST_OPTION
                    ));
                    self.menu();
                }
            }
        }
    }

    fn pause(&mut self) -> ConsoleResult<()> {
        if self.pause_between_commands {
            self.prompt.read_line("Press Enter to continue")?;
        }
        Ok(())
    }

    fn report(&self, err: &ConsoleError) {
        debug!(code = ?err.code, "Command failed");
        self.out.error(&err.message);
        self.out.debug(&format!("error code {:?}", err.code));
    }

    fn banner(&self) {
        self.out.rule('=');
        self.out.line("STOCKROOM - PRODUCT MANAGEMENT");
        self.out.line("Inventory control for a technology retailer");
        self.out.rule('=');
    }

    fn menu(&self) {
        self.out.blank();
        self.out.rule('=');
        self.out.line("MAIN MENU");
        self.out.rule('=');
        for command in MenuCommand::ALL {
            if command == MenuCommand::CategoryReport {
                self.out.line("REPORTS");
            }
            if command == MenuCommand::Exit {
                self.out.blank();
            }
            self.out.line(&format!("{}. {}", command.option(), command.label()));
        }
        self.out.rule('=');
    }

    fn farewell(&self) {
        self.out.blank();
        self.out.success("Thank you for using Stockroom. Goodbye!");
    }
}
