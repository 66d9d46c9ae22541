// src/config/options.rs
use std::time::Duration;

use super::consts::DEFAULT_INTERVAL;

/// How the watch-set is chosen once the first snapshot is in.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum WatchSelector {
    /// Every sold-out limited reward.
    All,
    /// Rewards matching any of these prices, in the project's currency.
    Prices(Vec<u64>),
    /// Ask on the terminal.
    #[default]
    Interactive,
}

impl WatchSelector {
    /// `--all` wins over `--rewards`; an empty price list means "ask".
    pub fn resolve(all: bool, prices: Vec<u64>) -> Self {
        if all {
            WatchSelector::All
        } else if !prices.is_empty() {
            WatchSelector::Prices(prices)
        } else {
            WatchSelector::Interactive
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Normalized project description URL
    pub url: String,
    pub interval: Duration,
    pub quiet: bool,
    pub selector: WatchSelector,
}

impl Settings {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            interval: DEFAULT_INTERVAL,
            quiet: false,
            selector: WatchSelector::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_priority() {
        assert_eq!(WatchSelector::resolve(true, vec![25]), WatchSelector::All);
        assert_eq!(WatchSelector::resolve(false, vec![25, 40]), WatchSelector::Prices(vec![25, 40]));
        assert_eq!(WatchSelector::resolve(false, vec![]), WatchSelector::Interactive);
    }

    #[test]
    fn settings_defaults() {
        let s = Settings::new("https://example.com/projects/a/b/description");
        assert_eq!(s.interval, Duration::from_secs(60));
        assert!(!s.quiet);
        assert_eq!(s.selector, WatchSelector::Interactive);
    }
}
