use std::error::Error;

use clap::Args;
use photoprod_recon::serde::to_canonical_json_bytes;
use serde::Serialize;

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Emit the crate version and summary schema version as JSON.
    #[arg(long)]
    pub long: bool,
}

#[derive(Debug, Serialize)]
struct VersionInfo {
    version: String,
    schema: String,
}

pub fn run(args: &VersionArgs) -> Result<(), Box<dyn Error>> {
    if !args.long {
        println!("{}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let schema = photoprod_core::SchemaVersion::default();
    let info = VersionInfo {
        version: env!("CARGO_PKG_VERSION").into(),
        schema: format!("{}.{}.{}", schema.major, schema.minor, schema.patch),
    };
    let json = to_canonical_json_bytes(&info)?;
    println!("{}", String::from_utf8(json)?);
    Ok(())
}
