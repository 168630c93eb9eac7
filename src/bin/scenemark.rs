use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "scenemark", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile an experience record into `{out-dir}/{id}.html`.
    Compile(CompileArgs),
    /// Normalize stored scene JSON and print the result.
    Normalize(NormalizeArgs),
    /// Print the resolved transform of every scene object.
    Resolve(ResolveArgs),
}

#[derive(Args, Debug)]
struct PolicyArgs {
    /// JSON policy file (partial files keep defaults for missing keys).
    #[arg(long)]
    policy: Option<PathBuf>,

    /// Uniform position scale factor.
    #[arg(long)]
    position_scale: Option<f64>,

    /// Disable the top-down orientation rules.
    #[arg(long)]
    no_top_down: bool,

    /// Minimum height for content resting on the marker.
    #[arg(long)]
    visibility_y_offset: Option<f64>,

    /// Generate missing ids as `obj_1`, `obj_2`, ... instead of time-based random ids.
    ///
    /// Required for reproducible output when stored scene objects or targets lack ids; without
    /// it, recompiling such a record yields a different document each run.
    #[arg(long)]
    sequential_ids: bool,
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input experience record JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory.
    #[arg(long)]
    out_dir: PathBuf,

    /// A-Frame script URL.
    #[arg(long)]
    aframe_src: Option<String>,

    /// MindAR A-Frame script URL.
    #[arg(long)]
    mindar_src: Option<String>,

    #[command(flatten)]
    policy: PolicyArgs,
}

#[derive(Parser, Debug)]
struct NormalizeArgs {
    /// Input scene JSON (a `contentConfig` object, or a target list with `--targets`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Treat the input as a multi-target list.
    #[arg(long)]
    targets: bool,

    /// Generate missing ids deterministically (reproducible output for inputs lacking ids).
    #[arg(long)]
    sequential_ids: bool,
}

#[derive(Parser, Debug)]
struct ResolveArgs {
    /// Input experience record JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[command(flatten)]
    policy: PolicyArgs,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Normalize(args) => cmd_normalize(args),
        Command::Resolve(args) => cmd_resolve(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> anyhow::Result<T> {
    let f = File::open(path).with_context(|| format!("open {what} '{}'", path.display()))?;
    let r = BufReader::new(f);
    serde_json::from_reader(r).with_context(|| format!("parse {what} JSON"))
}

fn load_policy(args: &PolicyArgs) -> anyhow::Result<scenemark::CompilerPolicy> {
    let base = match &args.policy {
        Some(p) => scenemark::CompilerPolicy::from_json_file(p)?,
        None => scenemark::CompilerPolicy::default(),
    };
    let mut policy = base.with_env_overrides()?;
    if let Some(v) = args.position_scale {
        policy.position_scale = v;
    }
    if args.no_top_down {
        policy.enforce_top_down = false;
    }
    if let Some(v) = args.visibility_y_offset {
        policy.visibility_y_offset = v;
    }
    policy.validate()?;
    Ok(policy)
}

fn id_source(sequential: bool) -> Box<dyn scenemark::IdSource> {
    if sequential {
        Box::new(scenemark::SequentialIdSource::new())
    } else {
        Box::new(scenemark::RandomIdSource)
    }
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let experience: scenemark::Experience = read_json(&args.in_path, "experience")?;
    let policy = load_policy(&args.policy)?;

    let mut options = scenemark::DocumentOptions::default();
    if let Some(src) = args.aframe_src {
        options.aframe_src = src;
    }
    if let Some(src) = args.mindar_src {
        options.mindar_src = src;
    }

    let mut ids = id_source(args.policy.sequential_ids);
    let compiled = scenemark::compile_experience(&experience, &policy, &options, ids.as_mut())
        .with_context(|| format!("compile experience '{}'", experience.id))?;
    for w in &compiled.warnings {
        tracing::warn!("{w}");
    }

    let path = scenemark::write_document(&args.out_dir, &experience.id, &compiled.html)
        .with_context(|| format!("write document to '{}'", args.out_dir.display()))?;

    eprintln!("wrote {} ({})", path.display(), compiled.fingerprint);
    Ok(())
}

fn cmd_normalize(args: NormalizeArgs) -> anyhow::Result<()> {
    let raw: serde_json::Value = read_json(&args.in_path, "scene")?;
    let mut ids = id_source(args.sequential_ids);
    let out = if args.targets {
        let targets = scenemark::normalize_targets(&raw, ids.as_mut());
        for w in &targets.warnings {
            tracing::warn!("{w}");
        }
        serde_json::to_string_pretty(&targets.value)?
    } else {
        let scene = scenemark::normalize_scene_config(&raw, ids.as_mut());
        serde_json::to_string_pretty(&scene)?
    };
    println!("{out}");
    Ok(())
}

fn cmd_resolve(args: ResolveArgs) -> anyhow::Result<()> {
    let experience: scenemark::Experience = read_json(&args.in_path, "experience")?;
    let policy = load_policy(&args.policy)?;
    let mut ids = id_source(args.policy.sequential_ids);

    let anchors: Vec<Vec<scenemark::SceneObject>> = if experience.is_multiple_targets {
        let raw = experience
            .targets_config
            .clone()
            .unwrap_or(serde_json::Value::Null);
        scenemark::normalize_targets(&raw, ids.as_mut())
            .value
            .into_iter()
            .map(|t| t.scene_objects)
            .collect()
    } else {
        let scene = scenemark::normalize_scene_config(&experience.content_config, ids.as_mut());
        vec![scene.scene_objects]
    };

    for (index, objects) in anchors.iter().enumerate() {
        for o in objects {
            let p = scenemark::resolve_placement(o, &policy);
            println!(
                "{index}\t{}\t{}\tposition=\"{}\"\trotation=\"{}\"\tscale=\"{}\"",
                o.id,
                o.kind().as_str(),
                p.position,
                p.rotation,
                p.scale
            );
        }
    }
    Ok(())
}
