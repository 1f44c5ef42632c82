//! Interactive session: login gate, time tracking and pay calculator.
//!
//! Everything lives in memory and is gone when the session ends.

use crate::config::PayValidation;
use crate::core::auth::AuthGate;
use crate::core::calculator::pay::calculate_with;
use crate::core::clock::Clock;
use crate::core::report::{pay_lines, records_table, status_line};
use crate::core::tracker::{PunchOutcome, TimeTracker};
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{Level, header, render};
use std::io::{BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Login,
    Home,
    TrackTime,
    PayCalculator,
    EditProfile,
}

impl Page {
    pub fn name(&self) -> &'static str {
        match self {
            Page::Login => "login",
            Page::Home => "home",
            Page::TrackTime => "track",
            Page::PayCalculator => "pay",
            Page::EditProfile => "profile",
        }
    }
}

/// Output of one shell command.
#[derive(Debug, Default)]
pub struct Reply {
    pub lines: Vec<String>,
    pub quit: bool,
}

impl Reply {
    fn line(s: impl Into<String>) -> Self {
        Self {
            lines: vec![s.into()],
            quit: false,
        }
    }
}

const HELP: &[&str] = &[
    "login <user> <password>   open the session",
    "in | out                  punch in / punch out",
    "records                   list punch records",
    "status                    show whether you are punched in",
    "pay <hours> <rate> <deduction%>",
    "profile <user> [password] edit username and password",
    "home                      back to the home page",
    "logout                    sign out",
    "quit                      leave the shell",
];

pub struct Shell<C: Clock> {
    auth: AuthGate,
    tracker: TimeTracker<C>,
    validation: PayValidation,
    page: Page,
}

impl<C: Clock> Shell<C> {
    pub fn new(clock: C, validation: PayValidation) -> Self {
        Self {
            auth: AuthGate::default(),
            tracker: TimeTracker::with_clock(clock),
            validation,
            page: Page::Login,
        }
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn tracker(&self) -> &TimeTracker<C> {
        &self.tracker
    }

    pub fn prompt(&self) -> String {
        format!("rtimecard({})> ", self.page.name())
    }

    /// Run one command line.
    pub fn execute(&mut self, line: &str) -> AppResult<Reply> {
        let mut parts = line.split_whitespace();
        let Some(cmd) = parts.next() else {
            return Ok(Reply::default());
        };
        let args: Vec<&str> = parts.collect();

        match cmd {
            "help" | "?" => Ok(Reply {
                lines: HELP.iter().map(|s| s.to_string()).collect(),
                quit: false,
            }),
            "quit" | "exit" => Ok(Reply {
                lines: vec![render(Level::Info, "Bye.")],
                quit: true,
            }),
            "login" => self.login(&args),
            _ => {
                self.auth.require_login()?;
                self.logged_in_command(cmd, &args)
            }
        }
    }

    fn login(&mut self, args: &[&str]) -> AppResult<Reply> {
        let user = args.first().copied().unwrap_or("");
        let pass = args.get(1).copied().unwrap_or("");
        let name = self.auth.login(user, pass)?.to_string();
        self.page = Page::Home;
        Ok(Reply::line(header(format!("Welcome, {name}"))))
    }

    fn logged_in_command(&mut self, cmd: &str, args: &[&str]) -> AppResult<Reply> {
        match cmd {
            "home" | "back" => {
                self.page = Page::Home;
                Ok(Reply::line(header(format!(
                    "Welcome, {}",
                    self.auth.username().unwrap_or_default()
                ))))
            }
            "in" => {
                self.page = Page::TrackTime;
                Ok(Reply::line(match self.tracker.punch_in() {
                    PunchOutcome::PunchedIn(at) => render(
                        Level::Success,
                        format!("Punched in at {}", at.format("%H:%M")),
                    ),
                    _ => render(Level::Warning, "Already punched in."),
                }))
            }
            "out" => {
                self.page = Page::TrackTime;
                Ok(Reply::line(match self.tracker.punch_out() {
                    PunchOutcome::PunchedOut(_, rec) => render(
                        Level::Success,
                        format!(
                            "Punched out at {} ({})",
                            rec.out_str(),
                            rec.hours().map(|h| format!("{h:.2} hours")).unwrap_or_default()
                        ),
                    ),
                    _ => render(Level::Warning, "Not punched in."),
                }))
            }
            "records" | "list" => {
                self.page = Page::TrackTime;
                Ok(Reply {
                    lines: records_table(self.tracker.records())
                        .lines()
                        .map(str::to_string)
                        .collect(),
                    quit: false,
                })
            }
            "status" => {
                let now = self.tracker.clock().now();
                Ok(Reply::line(status_line(self.tracker.state(), now)))
            }
            "pay" => {
                self.page = Page::PayCalculator;
                if args.len() != 3 {
                    return Err(AppError::MissingInput(
                        "usage: pay <hours> <rate> <deduction%>",
                    ));
                }
                let result = calculate_with(args[0], args[1], args[2], self.validation)?;
                Ok(Reply {
                    lines: pay_lines(&result).to_vec(),
                    quit: false,
                })
            }
            "profile" => {
                self.page = Page::EditProfile;
                let saved = if args.is_empty() || args.len() > 2 {
                    Err(AppError::MissingInput("usage: profile <user> [password]"))
                } else {
                    self.auth
                        .edit_profile(args.first().copied(), args.get(1).copied())
                };
                // The profile page always hands back to Home, saved or not.
                self.page = Page::Home;
                saved?;
                Ok(Reply::line(render(Level::Success, "Profile saved.")))
            }
            "logout" | "signout" => {
                self.auth.sign_out();
                self.page = Page::Login;
                Ok(Reply::line(render(Level::Info, "Signed out.")))
            }
            other => Err(AppError::Other(format!(
                "unknown command '{other}' (type 'help')"
            ))),
        }
    }

    /// Read commands until `quit` or end of input. Errors are reported and the loop goes on.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> AppResult<()> {
        write!(out, "{}", self.prompt())?;
        out.flush()?;

        for line in input.lines() {
            let line = line?;
            match self.execute(&line) {
                Ok(reply) => {
                    for l in &reply.lines {
                        writeln!(out, "{l}")?;
                    }
                    if reply.quit {
                        return Ok(());
                    }
                }
                Err(e) => writeln!(out, "{}", render(Level::Error, e))?,
            }
            write!(out, "{}", self.prompt())?;
            out.flush()?;
        }

        writeln!(out)?;
        Ok(())
    }
}
