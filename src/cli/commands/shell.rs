use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::shell::Shell;
use crate::errors::AppResult;
use crate::ui::messages::info;
use std::io;

/// Interactive session on stdin/stdout. State is dropped on exit.
pub fn handle(cfg: &Config) -> AppResult<()> {
    info("rTimecard shell. Type 'help' for commands, 'login <user> <password>' to start.");
    let mut shell = Shell::new(SystemClock, cfg.pay_validation);
    shell.run(io::stdin().lock(), io::stdout().lock())
}
