mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use codegrid_core::{assemble, Config, GitLister};
use log::info;

use cli::Cli;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // Load configuration, then let the command line override it
    let mut config = Config::load(cli.config.clone())?;
    cli.apply(&mut config);
    config.validate()?;

    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    let text = match &cli.text {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => assemble(&cli.repo, &GitLister, config.layout.line_char_limit)?,
    };
    info!("Corpus is {} bytes", text.len());

    let summary = codegrid_core::render(&text, &config)?;
    info!(
        "Done: {} lines in {} columns, {}x{} px{}",
        summary.wrapped_lines,
        summary.columns,
        summary.width,
        summary.height,
        if summary.degraded_font {
            " (fallback font)"
        } else {
            ""
        }
    );

    Ok(())
}
