// src/watch.rs
use std::collections::BTreeSet;

use crate::config::options::WatchSelector;
use crate::error::{Error, Result};
use crate::project::{Project, Reward, RewardId};
use crate::prompt::Picker;
use crate::report::Report;

const PICK_MESSAGE: &str = "Please select the rewards to watch:";

/// Rewards being watched. Holds ids only; counts are always read from the
/// project so refreshes show through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WatchSet {
    ids: BTreeSet<RewardId>,
}

impl WatchSet {
    /// Every tracked reward.
    pub fn all(project: &Project) -> Self {
        Self { ids: project.ids().collect() }
    }

    /// Every tracked reward at any of `prices`. Prices with no match are
    /// reported and skipped.
    pub fn by_prices(project: &Project, prices: &[u64], report: &mut dyn Report) -> Self {
        let mut ids = BTreeSet::new();
        for &price in prices {
            let found = project.find_by_price(price);
            if found.is_empty() {
                logf!("Watch: no tracked reward at {}{}, skipping", price, project.currency_symbol);
                report.price_skipped(price, &project.currency_symbol);
            } else {
                ids.extend(found);
            }
        }
        Self { ids }
    }

    /// Ask `picker` for a selection; indices follow `project.rewards()`.
    /// Out-of-range or empty answers are errors.
    pub fn pick(project: &Project, picker: &mut dyn Picker) -> Result<Self> {
        let rewards: Vec<&Reward> = project.rewards().collect();
        let choices: Vec<String> = rewards.iter().map(|r| r.choice_label()).collect();

        let mut ids = BTreeSet::new();
        for index in picker.pick(PICK_MESSAGE, &choices)? {
            let reward = rewards
                .get(index)
                .ok_or(Error::SelectionOutOfRange { index, count: rewards.len() })?;
            ids.insert(reward.id);
        }
        if ids.is_empty() {
            return Err(Error::EmptySelection);
        }
        Ok(Self { ids })
    }

    /// Resolve the watch-set for `selector`. A price list that matches nothing
    /// falls back to asking, so the result is never empty unless the project is.
    pub fn select(
        project: &Project,
        selector: &WatchSelector,
        picker: &mut dyn Picker,
        report: &mut dyn Report,
    ) -> Result<Self> {
        let watch = match selector {
            WatchSelector::All => Self::all(project),
            WatchSelector::Prices(prices) => {
                let watch = Self::by_prices(project, prices, report);
                if watch.is_empty() {
                    logf!("Watch: none of the requested prices matched, asking instead");
                    report.no_price_matched(prices, &project.currency_symbol);
                    Self::pick(project, picker)?
                } else {
                    watch
                }
            }
            WatchSelector::Interactive => Self::pick(project, picker)?,
        };

        logf!("Watch: {:?} -> {:?}", selector, watch.ids);
        Ok(watch)
    }

    pub fn ids(&self) -> impl Iterator<Item = RewardId> + '_ {
        self.ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Watched rewards with their current counts.
    pub fn rewards<'a>(&'a self, project: &'a Project) -> impl Iterator<Item = &'a Reward> + 'a {
        self.ids.iter().filter_map(move |id| project.get(*id))
    }

    /// Watched rewards that currently have stock.
    pub fn available<'a>(&'a self, project: &'a Project) -> impl Iterator<Item = &'a Reward> + 'a {
        self.rewards(project).filter(|r| r.is_available())
    }
}
