// src/bin/cli.rs
use color_eyre::eyre::WrapErr;
use reward_watch::cli::{self, Invocation};

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    reward_watch::log::init();

    let settings = match cli::parse(std::env::args_os()) {
        Invocation::Run(settings) => settings,
        Invocation::Exit(code) => std::process::exit(code),
    };

    cli::run(&settings).wrap_err_with(|| format!("Watching {} failed", settings.url))
}
