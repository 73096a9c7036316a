use std::fs;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use sward_db::GrassDb;
use sward_types::{GrassKey, GrassState, GrassStats};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Show(args) => cmd_show(args, cli.format),
        Command::Stats(args) => cmd_stats(args, cli.format),
        Command::Verify(args) => cmd_verify(args),
        Command::Merge(args) => cmd_merge(args),
    }
}

fn read_blob(path: &Path) -> anyhow::Result<String> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(raw.trim_end().to_string())
}

fn load_into_db(path: &Path) -> anyhow::Result<GrassDb> {
    let blob = read_blob(path)?;
    let db = GrassDb::new();
    db.load_serialized(&blob)
        .with_context(|| format!("cannot decode {}", path.display()))?;
    Ok(db)
}

#[derive(Serialize)]
struct EntryReport<'a> {
    scene: &'a str,
    name: &'a str,
    x: f32,
    y: f32,
    state: GrassState,
}

impl<'a> EntryReport<'a> {
    fn new(key: &'a GrassKey, state: GrassState) -> Self {
        Self {
            scene: key.scene(),
            name: key.name(),
            x: key.position().x(),
            y: key.position().y(),
            state,
        }
    }
}

fn sorted_entries(db: &GrassDb) -> Vec<(GrassKey, GrassState)> {
    let mut entries = db.entries();
    entries.sort_by(|(a, _), (b, _)| {
        (a.scene(), a.name()).cmp(&(b.scene(), b.name()))
    });
    entries
}

fn cmd_show(args: ShowArgs, format: OutputFormat) -> anyhow::Result<()> {
    let db = load_into_db(&args.file)?;
    let entries = sorted_entries(&db);

    match format {
        OutputFormat::Json => {
            let reports: Vec<EntryReport> = entries
                .iter()
                .map(|(key, state)| EntryReport::new(key, *state))
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            for (key, state) in &entries {
                let state_label = match state {
                    GrassState::Uncut => format!("{state}").red(),
                    GrassState::ShouldBeCut => format!("{state}").yellow(),
                    GrassState::Cut => format!("{state}").green(),
                };
                println!("{state_label:>13}  {key}");
            }
            println!("{} entries", entries.len().to_string().bold());
        }
    }
    Ok(())
}

#[derive(Serialize)]
struct SceneStatsReport {
    scene: String,
    uncut: u32,
    should_be_cut: u32,
    cut: u32,
    struck: u32,
    total: u32,
}

impl SceneStatsReport {
    fn new(scene: String, stats: GrassStats) -> Self {
        Self {
            scene,
            uncut: stats.count(GrassState::Uncut),
            should_be_cut: stats.count(GrassState::ShouldBeCut),
            cut: stats.count(GrassState::Cut),
            struck: stats.struck(),
            total: stats.total(),
        }
    }
}

fn cmd_stats(args: StatsArgs, format: OutputFormat) -> anyhow::Result<()> {
    let db = load_into_db(&args.file)?;
    let global = db.global_stats();

    match format {
        OutputFormat::Json => {
            let scenes: Vec<SceneStatsReport> = db
                .scene_names()
                .into_iter()
                .map(|scene| {
                    let stats = db.stats_for_scene(&scene);
                    SceneStatsReport::new(scene, stats)
                })
                .collect();
            let report = serde_json::json!({
                "scenes": scenes,
                "global": SceneStatsReport::new("*".to_string(), global),
            });
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => {
            for scene in db.scene_names() {
                let stats = db.stats_for_scene(&scene);
                println!(
                    "{:>5}{}{:<5}  {}  ({stats})",
                    stats.struck().to_string().green(),
                    "|".dimmed(),
                    stats.total(),
                    scene.bold(),
                );
            }
            println!(
                "{:>5}{}{:<5}  {}  ({global})",
                global.struck().to_string().green(),
                "|".dimmed(),
                global.total(),
                "global".bold(),
            );
        }
    }
    Ok(())
}

fn cmd_verify(args: VerifyArgs) -> anyhow::Result<()> {
    let blob = read_blob(&args.file)?;
    let decoder = sward_codec::Decoder::new(&blob)
        .with_context(|| format!("{} is corrupt", args.file.display()))?;
    let declared = decoder.remaining();
    for entry in decoder {
        entry.with_context(|| format!("{} is corrupt", args.file.display()))?;
    }
    println!(
        "{} {} is well-formed: {} entries",
        "✓".green().bold(),
        args.file.display(),
        declared.to_string().bold(),
    );
    Ok(())
}

fn cmd_merge(args: MergeArgs) -> anyhow::Result<()> {
    let db = GrassDb::new();
    for input in &args.inputs {
        let blob = read_blob(input)?;
        let applied = db
            .load_serialized(&blob)
            .with_context(|| format!("cannot decode {}", input.display()))?;
        println!(
            "  {} {} contributed {} entries",
            "+".green(),
            input.display(),
            applied.to_string().bold(),
        );
    }
    fs::write(&args.out, db.serialize())
        .with_context(|| format!("cannot write {}", args.out.display()))?;
    println!(
        "{} wrote {} keys across {} scenes to {}",
        "✓".green().bold(),
        db.global_stats().total().to_string().bold(),
        db.scene_names().len().to_string().bold(),
        args.out.display(),
    );
    Ok(())
}
