// src/monitor.rs
//
// Setup once, then wait → refresh → notify, forever.

use std::thread;
use std::time::Duration;

use chrono::Local;

use crate::config::options::Settings;
use crate::core::net::Fetcher;
use crate::error::Result;
use crate::project::{self, Project, RawProject};
use crate::prompt::Picker;
use crate::report::{Notification, Report};
use crate::watch::WatchSet;

/// Where snapshots come from. Any error is fatal to the run.
pub trait SnapshotSource {
    fn fetch(&mut self) -> Result<RawProject>;
}

/// Fetches and parses the project description page.
pub struct HttpSource {
    url: String,
    fetcher: Fetcher,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into(), fetcher: Fetcher::new() }
    }
}

impl SnapshotSource for HttpSource {
    fn fetch(&mut self) -> Result<RawProject> {
        let page = self.fetcher.get(&self.url)?;
        project::parse_page(&page)
    }
}

pub struct Monitor<S: SnapshotSource> {
    source: S,
    project: Project,
    watch: WatchSet,
    interval: Duration,
    quiet: bool,
}

impl<S: SnapshotSource> Monitor<S> {
    /// First fetch, universe and watch-set. `None` when nothing is sold out,
    /// which ends the run without polling.
    pub fn setup(
        mut source: S,
        settings: &Settings,
        picker: &mut dyn Picker,
        report: &mut dyn Report,
    ) -> Result<Option<Self>> {
        let raw = source.fetch()?;
        let project = Project::from_first(&raw)?;

        if project.is_empty() {
            logf!("Init: every reward of \"{}\" is available, nothing to watch", project.name);
            report.nothing_to_watch(&project);
            return Ok(None);
        }

        let watch = WatchSet::select(&project, &settings.selector, picker, report)?;
        report.status(&project, &watch);

        Ok(Some(Self {
            source,
            project,
            watch,
            interval: settings.interval,
            quiet: settings.quiet,
        }))
    }

    pub fn project(&self) -> &Project {
        &self.project
    }

    pub fn watch(&self) -> &WatchSet {
        &self.watch
    }

    /// One refresh + notify step. Returns what was reported.
    pub fn poll(&mut self, report: &mut dyn Report) -> Result<Vec<Notification>> {
        let raw = self.source.fetch()?;
        self.project.refresh(&raw)?;

        let now = Local::now();
        let found: Vec<Notification> = self
            .watch
            .available(&self.project)
            .map(|r| Notification::new(now, r))
            .collect();

        if found.is_empty() {
            if !self.quiet {
                report.heartbeat();
            }
        } else {
            for n in &found {
                logf!("Notify: {}/{} of reward {} ({})", n.available, n.limit, n.id, n.title_with_price);
                report.notify(n);
            }
        }
        Ok(found)
    }

    /// Poll every `interval` until a fetch or refresh fails.
    pub fn run(&mut self, report: &mut dyn Report) -> Result<()> {
        logf!("Run: polling every {:?}", self.interval);
        loop {
            logd!("Status: {:?} watching {:?}", self.project, self.watch);
            thread::sleep(self.interval);
            if let Err(e) = self.poll(report) {
                loge!("Run: poll failed: {e}");
                return Err(e);
            }
        }
    }
}
