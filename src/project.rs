// src/project.rs
//
// Embedded project data and the reward universe built from it.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Deserializer, de::Error as _};

use crate::config::consts::PROJECT_VAR;
use crate::core::{html, sanitize};
use crate::error::{Error, Result};

pub type RewardId = u64;

/* ---------------- raw page data ---------------- */

/// Project object as embedded in the description page.
#[derive(Clone, Debug, Deserialize)]
pub struct RawProject {
    pub name: String,
    pub currency_symbol: String,
    #[serde(default)]
    pub rewards: Vec<RawReward>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct RawReward {
    pub id: RewardId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub title_for_backing_tier: String,
    #[serde(deserialize_with = "amount")]
    pub minimum: u64,
    /// Absent (or null) for unlimited rewards.
    #[serde(default, deserialize_with = "opt_amount")]
    pub limit: Option<u64>,
    #[serde(default, deserialize_with = "opt_amount")]
    pub remaining: Option<u64>,
}

impl RawReward {
    pub fn is_limited(&self) -> bool {
        self.limit.is_some()
    }

    fn remaining(&self) -> Result<u64> {
        self.remaining.ok_or(Error::MissingField { reward: self.id, field: "remaining" })
    }
}

// Amounts show up as either integers or floats depending on the project.
#[derive(Deserialize)]
#[serde(untagged)]
enum Amount {
    Int(u64),
    Float(f64),
}

impl Amount {
    fn into_u64(self) -> std::result::Result<u64, String> {
        match self {
            Amount::Int(n) => Ok(n),
            Amount::Float(f) if f.is_finite() && f >= 0.0 => Ok(f as u64),
            Amount::Float(f) => Err(format!("expected a non-negative amount, got {f}")),
        }
    }
}

fn amount<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<u64, D::Error> {
    Amount::deserialize(d)?.into_u64().map_err(D::Error::custom)
}

fn opt_amount<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Option<u64>, D::Error> {
    Option::<Amount>::deserialize(d)?
        .map(Amount::into_u64)
        .transpose()
        .map_err(D::Error::custom)
}

fn project_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        let pattern = format!(r#"{}\s*=\s*"(\{{.*\}})""#, regex::escape(PROJECT_VAR));
        Regex::new(&pattern).expect("project regex is valid")
    })
}

/// Pull the HTML-escaped project JSON out of the first script that assigns it,
/// already unescaped.
pub fn extract_project_json(page: &str) -> Result<String> {
    let re = project_regex();
    html::script_texts(page)
        .into_iter()
        .find_map(|text| re.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| sanitize::unescape_entities(m.as_str()))
        .ok_or(Error::MissingProjectData)
}

/// Extract and decode the project embedded in a description page.
pub fn parse_page(page: &str) -> Result<RawProject> {
    let json = extract_project_json(page)?;
    let raw: RawProject = serde_json::from_str(&json)?;
    logd!("Parse: project \"{}\" with {} rewards", raw.name, raw.rewards.len());
    Ok(raw)
}

/* ---------------- tracked state ---------------- */

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reward {
    pub id: RewardId,
    pub title: String,
    pub title_with_price: String,
    pub price: u64,
    pub available: u64,
    pub limit: u64,
}

impl Reward {
    fn seed(raw: &RawReward) -> Self {
        Self {
            id: raw.id,
            title: raw.title.clone(),
            title_with_price: raw.title_for_backing_tier.clone(),
            price: raw.minimum,
            available: 0,
            limit: 0,
        }
    }

    pub fn is_available(&self) -> bool {
        self.available > 0
    }

    /// Label shown when picking rewards to watch.
    pub fn choice_label(&self) -> String {
        format!("{} ({} backers)", self.title_with_price, self.limit)
    }
}

/// The project and its universe of trackable rewards.
///
/// The universe is every limited reward that was sold out in the first
/// snapshot. Limited rewards that were available at that point are never
/// tracked, even if they later sell out.
#[derive(Clone, Debug)]
pub struct Project {
    pub name: String,
    pub currency_symbol: String,
    rewards: BTreeMap<RewardId, Reward>,
}

impl Project {
    /// Build the universe from the first snapshot, then apply its counts.
    pub fn from_first(raw: &RawProject) -> Result<Self> {
        let mut rewards = BTreeMap::new();
        for r in raw.rewards.iter().filter(|r| r.is_limited()) {
            if r.remaining()? == 0 {
                rewards.insert(r.id, Reward::seed(r));
            }
        }

        let mut project = Self {
            name: raw.name.clone(),
            currency_symbol: raw.currency_symbol.clone(),
            rewards,
        };
        project.refresh(raw)?;

        logf!(
            "Init: project \"{}\", {} limited rewards, {} sold out",
            project.name,
            raw.rewards.iter().filter(|r| r.is_limited()).count(),
            project.len()
        );
        Ok(project)
    }

    /// Overwrite available/limit of every tracked reward from `raw`.
    ///
    /// A tracked reward missing from `raw` fails the refresh. A reward that no
    /// longer declares a limit keeps its previous one.
    pub fn refresh(&mut self, raw: &RawProject) -> Result<()> {
        let by_id: HashMap<RewardId, &RawReward> = raw.rewards.iter().map(|r| (r.id, r)).collect();

        for (id, reward) in self.rewards.iter_mut() {
            let fresh = by_id.get(id).ok_or(Error::VanishedReward { id: *id })?;
            reward.available = fresh.remaining()?;
            if let Some(limit) = fresh.limit {
                reward.limit = limit;
            }
        }
        Ok(())
    }

    pub fn get(&self, id: RewardId) -> Option<&Reward> {
        self.rewards.get(&id)
    }

    pub fn rewards(&self) -> impl Iterator<Item = &Reward> {
        self.rewards.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = RewardId> + '_ {
        self.rewards.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rewards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rewards.is_empty()
    }

    /// Every tracked reward at `price`. Prices are not unique.
    pub fn find_by_price(&self, price: u64) -> Vec<RewardId> {
        self.rewards.values().filter(|r| r.price == price).map(|r| r.id).collect()
    }
}
