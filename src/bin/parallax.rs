use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "parallax", version)]
struct Cli {
    /// Log filter (overrides `RUST_LOG`), e.g. `parallax=debug`.
    #[arg(long, global = true)]
    log: Option<String>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a carousel JSON file.
    Validate(ValidateArgs),
    /// Replay a script against a carousel and write a JSON report.
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input carousel JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Input carousel JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Script JSON with timed host actions.
    #[arg(long)]
    script: PathBuf,

    /// Output report path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Also record every processed scroll offset.
    #[arg(long, default_value_t = false)]
    offsets: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log.as_deref());
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Simulate(args) => cmd_simulate(args),
    }
}

fn init_tracing(filter: Option<&str>) {
    let filter = filter
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let def = parallax::CarouselDef::from_path(&args.in_path)?;
    def.validate()
        .with_context(|| format!("validate '{}'", args.in_path.display()))?;

    let master = def.master().map_or("?", |m| m.id.as_str());
    eprintln!(
        "ok: {} layers, master '{}', {} routes",
        def.layers.len(),
        master,
        def.routes.len()
    );
    Ok(())
}

fn cmd_simulate(args: SimulateArgs) -> anyhow::Result<()> {
    let def = parallax::CarouselDef::from_path(&args.in_path)?;
    let mut script = parallax::script::Script::from_path(&args.script)?;
    script.record_offsets |= args.offsets;

    let report = parallax::script::run(&def, &script)
        .with_context(|| format!("simulate '{}'", args.script.display()))?;
    let json = serde_json::to_string_pretty(&report).context("serialize report")?;

    match &args.out {
        Some(out) => {
            write_report(out, &json)?;
            eprintln!("wrote {}", out.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn write_report(out: &Path, json: &str) -> anyhow::Result<()> {
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(out, json).with_context(|| format!("write report '{}'", out.display()))
}
