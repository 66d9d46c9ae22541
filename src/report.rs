// src/report.rs
//! User-facing output of a monitoring run.
//! The terminal implementation prints plain lines to stdout.

use std::io::{self, Stdout, Write};

use chrono::{DateTime, Local};

use crate::project::{Project, Reward, RewardId};
use crate::watch::WatchSet;

/// A watched reward seen with stock during a poll.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub at: DateTime<Local>,
    pub id: RewardId,
    pub available: u64,
    pub limit: u64,
    pub title_with_price: String,
}

impl Notification {
    pub fn new(at: DateTime<Local>, reward: &Reward) -> Self {
        Self {
            at,
            id: reward.id,
            available: reward.available,
            limit: reward.limit,
            title_with_price: reward.title_with_price.clone(),
        }
    }

    /// `3:04PM: 3/10 of reward "$25 Early bird" available!`
    pub fn line(&self) -> String {
        format!(
            "{}: {}/{} of reward \"{}\" available!",
            self.at.format("%-I:%M%p"),
            self.available,
            self.limit,
            self.title_with_price
        )
    }
}

pub trait Report {
    /// Summary of what is being watched, once setup is done.
    fn status(&mut self, _project: &Project, _watch: &WatchSet) {}

    /// A requested price matched no tracked reward.
    fn price_skipped(&mut self, _price: u64, _currency_symbol: &str) {}

    /// None of the requested prices matched; the user is asked instead.
    fn no_price_matched(&mut self, _prices: &[u64], _currency_symbol: &str) {}

    /// Nothing is sold out; the run ends here.
    fn nothing_to_watch(&mut self, _project: &Project) {}

    fn notify(&mut self, _notification: &Notification) {}

    /// A poll found nothing.
    fn heartbeat(&mut self) {}
}

/// A no-op report sink.
pub struct NullReport;
impl Report for NullReport {}

pub struct ConsoleReport<W: Write> {
    out: W,
}

impl ConsoleReport<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReport<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

// Output errors (closed pipe and such) are not worth killing the watch over.
impl<W: Write> Report for ConsoleReport<W> {
    fn status(&mut self, project: &Project, watch: &WatchSet) {
        let _ = writeln!(
            self.out,
            "Watching {} of {} sold-out reward(s) of \"{}\":",
            watch.len(),
            project.len(),
            project.name
        );
        for reward in watch.rewards(project) {
            let _ = writeln!(self.out, "  - {}", reward.choice_label());
        }
    }

    fn price_skipped(&mut self, price: u64, currency_symbol: &str) {
        let _ = writeln!(
            self.out,
            "There is no limited and unavailable reward priced at {price}{currency_symbol}, ignoring."
        );
    }

    fn no_price_matched(&mut self, prices: &[u64], currency_symbol: &str) {
        let listed: Vec<String> = prices.iter().map(|p| format!("{p}{currency_symbol}")).collect();
        let _ = writeln!(
            self.out,
            "No sold-out limited reward matches the requested price(s) {}; choose rewards to watch instead.",
            listed.join(", ")
        );
    }

    fn nothing_to_watch(&mut self, _project: &Project) {
        let _ = writeln!(self.out, "All of this project's rewards are currently available.");
    }

    fn notify(&mut self, notification: &Notification) {
        let _ = writeln!(self.out, "\n{}", notification.line());
    }

    fn heartbeat(&mut self) {
        let _ = write!(self.out, ".");
        let _ = self.out.flush();
    }
}
