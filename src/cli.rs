// src/cli.rs
use std::ffi::OsString;
use std::time::Duration;

use clap::{Parser, error::ErrorKind};
use url::Url;

use crate::config::consts::DESCRIPTION_SUFFIX;
use crate::config::options::{Settings, WatchSelector};
use crate::error::{Error, Result};
use crate::monitor::{HttpSource, Monitor};
use crate::prompt::TerminalPicker;
use crate::report::ConsoleReport;

#[derive(Parser, Debug)]
#[command(
    name = "reward_watch",
    version,
    about = "Get notified when sold-out limited rewards of a crowdfunding project are available again",
    override_usage = "reward_watch [OPTION] PROJECT_URL"
)]
pub struct Args {
    /// Comma-separated list of unavailable limited rewards to watch, identified by their price
    /// in the project's original currency. If multiple limited rewards share the same price,
    /// all are watched. Ignored if --all is set.
    #[arg(short, long, value_name = "PRICES", value_delimiter = ',')]
    pub rewards: Vec<u64>,

    /// Watch all unavailable limited rewards.
    #[arg(short, long)]
    pub all: bool,

    /// Interval between checks (e.g. 30s, 1m, 1m30s).
    #[arg(short, long, default_value = "1m", value_parser = parse_duration)]
    pub interval: Duration,

    /// Quiet mode: no "." after a check that found nothing.
    #[arg(short, long)]
    pub quiet: bool,

    /// Project page URL
    #[arg(value_name = "PROJECT_URL")]
    pub project_url: String,
}

impl TryFrom<Args> for Settings {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let mut settings = Settings::new(description_url(&args.project_url)?);
        settings.interval = args.interval;
        settings.quiet = args.quiet;
        settings.selector = WatchSelector::resolve(args.all, args.rewards);
        Ok(settings)
    }
}

/// Result of reading the command line.
#[derive(Debug)]
pub enum Invocation {
    Run(Settings),
    /// Help, version or a usage error was printed; exit with this code.
    Exit(i32),
}

/// Parse `args` (program name first). Usage errors print and map to exit 1,
/// help and version to exit 0.
pub fn parse<I, T>(args: I) -> Invocation
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args = match Args::try_parse_from(args) {
        Ok(a) => a,
        Err(e) => {
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    let _ = e.print();
                    Invocation::Exit(0)
                }
                _ => {
                    println!("Invalid argument.");
                    let _ = e.print();
                    Invocation::Exit(1)
                }
            };
        }
    };

    match Settings::try_from(args) {
        Ok(settings) => Invocation::Run(settings),
        Err(e) => {
            eprintln!("{e}");
            Invocation::Exit(1)
        }
    }
}

/// Watch the project described by `settings` on the terminal. Returns only when
/// there is nothing to watch or something failed.
pub fn run(settings: &Settings) -> Result<()> {
    logf!("Start: {} every {:?}", settings.url, settings.interval);

    let source = HttpSource::new(settings.url.as_str());
    let mut picker = TerminalPicker::stdio();
    let mut report = ConsoleReport::stdout();

    match Monitor::setup(source, settings, &mut picker, &mut report)? {
        Some(mut monitor) => monitor.run(&mut report),
        None => Ok(()),
    }
}

/// Drop query and fragment, make sure the path ends in `/description`.
pub fn description_url(input: &str) -> Result<String> {
    let invalid = |reason: String| Error::InvalidUrl { input: s!(input), reason };

    let mut url = Url::parse(input.trim()).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
    }
    if url.cannot_be_a_base() || url.host_str().is_none() {
        return Err(invalid(s!("missing host")));
    }
    url.set_query(None);
    url.set_fragment(None);

    let path = url.path().trim_end_matches('/').to_string();
    if !path.ends_with(DESCRIPTION_SUFFIX) {
        url.set_path(&format!("{path}{DESCRIPTION_SUFFIX}"));
    } else {
        url.set_path(&path);
    }
    Ok(url.to_string())
}

/// Go-style durations: `90s`, `1m30s`, `500ms`, `2h`. A bare number is seconds.
pub fn parse_duration(input: &str) -> Result<Duration> {
    let invalid = |reason: &str| Error::InvalidDuration { input: s!(input), reason: s!(reason) };

    let s = input.trim();
    if s.is_empty() {
        return Err(invalid("empty"));
    }
    if let Ok(secs) = s.parse::<u64>() {
        return match secs {
            0 => Err(invalid("must be greater than zero")),
            n => Ok(Duration::from_secs(n)),
        };
    }

    let mut total = Duration::ZERO;
    let mut rest = s;
    while !rest.is_empty() {
        let digits = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
        if digits == 0 {
            return Err(invalid("expected a number"));
        }
        let n: u64 = rest[..digits].parse().map_err(|_| invalid("number too large"))?;
        rest = &rest[digits..];

        let unit_len = rest.find(|c: char| c.is_ascii_digit()).unwrap_or(rest.len());
        let part = match &rest[..unit_len] {
            "ms" => Duration::from_millis(n),
            "s" => Duration::from_secs(n),
            "m" => Duration::from_secs(n.saturating_mul(60)),
            "h" => Duration::from_secs(n.saturating_mul(3600)),
            "" => return Err(invalid("missing unit")),
            _ => return Err(invalid("unknown unit (use ms, s, m or h)")),
        };
        total = total.saturating_add(part);
        rest = &rest[unit_len..];
    }

    if total.is_zero() {
        return Err(invalid("must be greater than zero"));
    }
    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("1m").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("2h").unwrap(), Duration::from_secs(7200));
        assert_eq!(parse_duration("45").unwrap(), Duration::from_secs(45));
        for bad in ["", "0", "0s", "m", "10x", "1.5m", "-1m"] {
            assert!(parse_duration(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn description_url_normalization() {
        assert_eq!(
            description_url("https://www.kickstarter.com/projects/me/game?ref=discovery").unwrap(),
            "https://www.kickstarter.com/projects/me/game/description"
        );
        assert_eq!(
            description_url("https://www.kickstarter.com/projects/me/game/description?ref=x#top").unwrap(),
            "https://www.kickstarter.com/projects/me/game/description"
        );
        assert_eq!(
            description_url("https://www.kickstarter.com/projects/me/game/").unwrap(),
            "https://www.kickstarter.com/projects/me/game/description"
        );
        assert!(matches!(description_url("not a url"), Err(Error::InvalidUrl { .. })));
        assert!(matches!(description_url("ftp://example.com/p"), Err(Error::InvalidUrl { .. })));
    }
}
