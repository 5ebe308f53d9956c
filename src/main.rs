//! Write a JSON manifest of every image file under the working directory.

use std::process::ExitCode;

use anyhow::{Context, Result};
use image_manifest::{CiContext, DEFAULT_CONFIG_FILE, init_logger, load_config, run_manifest};

fn run() -> Result<()> {
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    let args = load_config(&cwd).context("Failed to load image-manifest.toml")?;
    init_logger(args.verbose);

    let config_path = cwd.join(DEFAULT_CONFIG_FILE);
    if config_path.is_file() {
        tracing::debug!("Loaded config from {:?}", config_path);
    }

    let ci = CiContext::from_env();
    let report = run_manifest(&args, &ci)?;
    tracing::info!("{}", report.summary);
    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ 生成失败: {e:#}");
            ExitCode::from(1)
        }
    }
}
