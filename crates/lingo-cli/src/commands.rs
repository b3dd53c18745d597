use anyhow::Context;
use colored::Colorize;

use lingo_remote::SnapshotRemote;
use lingo_store::FsResourceStore;
use lingo_sync::{SyncReport, Syncer};

use crate::cli::{Cli, Command};
use crate::config::Config;

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = Config::load(cli.config.as_deref()).context("configuration")?;
    match cli.command {
        Command::Sync => cmd_sync(&config).await,
        Command::Clone => cmd_clone(&config).await,
        Command::Config => cmd_config(&config),
    }
}

fn build_syncer(config: &Config) -> Syncer<SnapshotRemote, FsResourceStore, FsResourceStore> {
    Syncer::new(
        SnapshotRemote::new(&config.remote_snapshot),
        FsResourceStore::new(&config.output_path),
        // Anchor directories may predate the current document format.
        FsResourceStore::with_legacy_cleanup(&config.anchor_path),
    )
}

async fn cmd_sync(config: &Config) -> anyhow::Result<()> {
    let report = build_syncer(config).sync().await?;

    for language in &report.languages {
        let marker = if report.conflicts.contains_key(language) {
            "⚠".yellow()
        } else {
            "✓".green()
        };
        println!("{} {}", marker, language.bold());
    }

    if report.is_clean() {
        println!(
            "{} {} language(s) in sync",
            "✓".green().bold(),
            report.languages.len()
        );
    } else {
        print_conflicts(&report);
    }
    Ok(())
}

async fn cmd_clone(config: &Config) -> anyhow::Result<()> {
    let languages = build_syncer(config).clone_remote().await?;
    for language in &languages {
        println!("{} {}", "✓".green(), language.bold());
    }
    println!(
        "{} cloned {} language(s) into {}",
        "✓".green().bold(),
        languages.len(),
        config.output_path.display()
    );
    Ok(())
}

fn cmd_config(config: &Config) -> anyhow::Result<()> {
    println!("config:  {}", config.source.display().to_string().bold());
    println!("output:  {}", config.output_path.display());
    println!("anchor:  {}", config.anchor_path.display());
    println!("remote:  {}", config.remote_snapshot.display());
    Ok(())
}

fn print_conflicts(report: &SyncReport) {
    println!();
    println!(
        "{}",
        "⚠ merge conflicts detected (auto-resolved):".yellow().bold()
    );
    for (language, conflicts) in &report.conflicts {
        println!("\n  [{}]", language.yellow());
        for conflict in conflicts {
            println!("    {}:", conflict.key.bold());
            println!("      local:  {}", render_value(&conflict.local_value, "(deleted)"));
            println!("      remote: {}", render_value(&conflict.remote_value, "(deleted)"));
            println!("      anchor: {}", render_value(&conflict.anchor_value, "(not exists)"));
        }
    }
    println!();
}

/// Values render quoted so empty strings stay visible; absences render as
/// the given marker, dimmed.
fn render_value(value: &Option<String>, absent: &str) -> String {
    match value {
        Some(value) => format!("{value:?}"),
        None => absent.dimmed().to_string(),
    }
}
