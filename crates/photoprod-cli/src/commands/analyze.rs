use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use photoprod_core::rng::RngHandle;
use photoprod_recon::serde::summary_to_json;
use photoprod_recon::{reconstruct_path, ReconConfig};
use tracing::info;

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Simulator output to reconstruct.
    #[arg(default_value = "slight.out")]
    pub input: PathBuf,
    /// Optional YAML configuration overriding defaults.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Master seed for the pairing shuffle; overrides the configuration.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Write the summary here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &AnalyzeArgs) -> Result<(), Box<dyn Error>> {
    let mut config = match &args.config {
        Some(path) => ReconConfig::load(path)?,
        None => ReconConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let mut rng = RngHandle::from_optional_seed(config.seed);
    let reconstruction = reconstruct_path(&args.input, &mut rng, &config)?;
    let summary = reconstruction.summary(config.acceptance_eta);
    let json = summary_to_json(&summary)?;
    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, json)?;
            info!(path = %path.display(), "summary written");
        }
        None => println!("{json}"),
    }
    Ok(())
}
