use std::{
    fs::File,
    io::{BufReader, Read as _},
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the schedule of one entrance request as JSON.
    Plan(PlanArgs),
    /// Replay a scenario frame by frame and print the report as JSON.
    Simulate(SimulateArgs),
    /// List the entrance variants and what each one animates.
    Variants,
}

#[derive(Parser, Debug)]
struct PlanArgs {
    /// Variant tag, e.g. `fade-up` or `stagger-left`.
    #[arg(long, default_value = "fade-up")]
    variant: String,

    /// Number of targets.
    #[arg(long, default_value_t = 1)]
    targets: u32,

    /// Per-target duration in ms.
    #[arg(long, default_value_t = 800)]
    duration: u64,

    /// Delay before the first target, in ms.
    #[arg(long, default_value_t = 0)]
    delay: u64,

    /// Gap between successive targets, in ms.
    #[arg(long, default_value_t = 100)]
    stagger: u64,

    /// Override the variant's curve, e.g. `easeOutElastic(1, .5)`.
    #[arg(long)]
    ease: Option<String>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Write the report here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Print only the final frame.
    #[arg(long)]
    last_only: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Plan(args) => cmd_plan(args),
        Command::Simulate(args) => cmd_simulate(args),
        Command::Variants => cmd_variants(),
    }
}

fn cmd_plan(args: PlanArgs) -> anyhow::Result<()> {
    let variant: reveal::AnimationVariant = args.variant.parse()?;
    let timing = reveal::Timing::new(
        reveal::Millis(args.duration),
        reveal::Millis(args.delay),
        reveal::Millis(args.stagger),
    );
    let targets = (0..args.targets).map(reveal::ElementId).collect();
    let mut request = reveal::AnimationRequest::variant(targets, variant, timing);
    if let Some(name) = &args.ease {
        let ease = reveal::Ease::parse(name).with_context(|| format!("parse ease '{name}'"))?;
        request = request.with_ease(ease);
    }

    let plan = reveal::schedule(&request);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

fn read_scenario(path: &Path) -> anyhow::Result<reveal::scenario::Scenario> {
    let f = File::open(path).with_context(|| format!("open scenario '{}'", path.display()))?;
    let mut json = String::new();
    BufReader::new(f)
        .read_to_string(&mut json)
        .with_context(|| format!("read scenario '{}'", path.display()))?;
    let scenario = reveal::scenario::Scenario::from_json(&json)
        .with_context(|| format!("load scenario '{}'", path.display()))?;
    Ok(scenario)
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let scenario = read_scenario(&args.in_path)?;
    let mut report = scenario.replay()?;
    if args.last_only {
        let tail = report.frames.pop();
        report.frames = tail.into_iter().collect();
    }

    let json = serde_json::to_string_pretty(&report)?;
    match &args.out {
        Some(out) => {
            if let Some(parent) = out.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(out, json)
                .with_context(|| format!("write report '{}'", out.display()))?;
            eprintln!(
                "wrote {} ({} fires, {} frames)",
                out.display(),
                report.fires.len(),
                report.frames.len()
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn cmd_variants() -> anyhow::Result<()> {
    for recipe in &reveal::RECIPES {
        let tracks: Vec<String> = recipe
            .tracks
            .iter()
            .map(|t| format!("{:?} {} -> {}", t.property, t.from, t.to))
            .collect();
        let targets = match recipe.targets {
            reveal::TargetPolicy::MarkedOrRoot => "items or root",
            reveal::TargetPolicy::MarkedOnly => "items only",
        };
        println!(
            "{:<14} {:<14} {:?}  [{}]",
            recipe.tag,
            targets,
            recipe.ease,
            tracks.join(", ")
        );
    }
    Ok(())
}
