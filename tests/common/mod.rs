// tests/common/mod.rs
//
// Canned pages, a recording report and a scripted picker.
#![allow(dead_code)]

use std::collections::VecDeque;

use reward_watch::Result;
use reward_watch::monitor::SnapshotSource;
use reward_watch::project::{self, Project, RawProject};
use reward_watch::prompt::Picker;
use reward_watch::report::{Notification, Report};
use reward_watch::watch::WatchSet;

/// One reward entry; `limit`/`remaining` of `None` leave the key out.
pub fn reward(id: u64, price: u64, limit: Option<u64>, remaining: Option<u64>) -> serde_json::Value {
    let mut r = serde_json::json!({
        "id": id,
        "title": format!("Tier {id}"),
        "title_for_backing_tier": format!("${price} Tier {id}"),
        "minimum": price,
    });
    if let Some(l) = limit {
        r["limit"] = l.into();
    }
    if let Some(n) = remaining {
        r["remaining"] = n.into();
    }
    r
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// A description page embedding the project the way the live site does.
pub fn page(rewards: Vec<serde_json::Value>) -> String {
    let project = serde_json::json!({
        "name": "Tabletop & Co",
        "currency_symbol": "$",
        "rewards": rewards,
    });
    format!(
        "<html><head><script>window.analytics = {{}};</script></head><body>\n\
         <script type=\"text/javascript\">\n  window.current_project = \"{}\";\n</script>\n\
         </body></html>",
        escape(&project.to_string())
    )
}

/// Serves pages in order, parsing them like the HTTP source does.
pub struct CannedSource {
    pages: VecDeque<String>,
}

impl CannedSource {
    pub fn new(pages: Vec<String>) -> Self {
        Self { pages: pages.into() }
    }
}

impl SnapshotSource for CannedSource {
    fn fetch(&mut self) -> Result<RawProject> {
        let page = self.pages.pop_front().expect("test ran out of canned pages");
        project::parse_page(&page)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum Event {
    Status { watched: usize, universe: usize },
    Skipped(u64),
    NoPriceMatched(Vec<u64>),
    NothingToWatch,
    Notify(String),
    Heartbeat,
}

#[derive(Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Recorder {
    pub fn notifications(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                Event::Notify(line) => Some(line.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Report for Recorder {
    fn status(&mut self, project: &Project, watch: &WatchSet) {
        self.events.push(Event::Status { watched: watch.len(), universe: project.len() });
    }
    fn price_skipped(&mut self, price: u64, _currency_symbol: &str) {
        self.events.push(Event::Skipped(price));
    }
    fn no_price_matched(&mut self, prices: &[u64], _currency_symbol: &str) {
        self.events.push(Event::NoPriceMatched(prices.to_vec()));
    }
    fn nothing_to_watch(&mut self, _project: &Project) {
        self.events.push(Event::NothingToWatch);
    }
    fn notify(&mut self, n: &Notification) {
        self.events.push(Event::Notify(n.line()));
    }
    fn heartbeat(&mut self) {
        self.events.push(Event::Heartbeat);
    }
}

/// Answers with fixed indices and counts how often it was asked.
pub struct Scripted {
    pub answer: Vec<usize>,
    pub asked: usize,
}

impl Scripted {
    pub fn new(answer: Vec<usize>) -> Self {
        Self { answer, asked: 0 }
    }

    pub fn never() -> Self {
        Self::new(Vec::new())
    }
}

impl Picker for Scripted {
    fn pick(&mut self, _message: &str, _choices: &[String]) -> Result<Vec<usize>> {
        self.asked += 1;
        Ok(self.answer.clone())
    }
}
