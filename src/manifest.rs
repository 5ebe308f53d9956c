use serde::Deserialize;
use std::path::PathBuf;
use std::time::Instant;

use crate::ci::CiContext;
use crate::collector::PathCollector;
use crate::emit::{append_ci_outputs, extension_stat_lines, write_report};
use crate::error::Result;
use crate::group::group_by_extension;
use crate::report::{ReportDocument, build_report, timestamp_now};

/// Default name of the manifest written in the working directory
pub const DEFAULT_OUTPUT_FILE: &str = "image_paths.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ManifestArgs {
    /// Directory to scan
    pub root: PathBuf,

    /// Manifest destination, overwritten on every run
    pub output_file: PathBuf,

    /// Directory names pruned in addition to the built-in ignore set
    pub extra_ignore_dirs: Vec<String>,

    /// Show a spinner on stderr while walking
    pub progress: bool,

    /// Log every collected path
    pub verbose: bool,
}

impl Default for ManifestArgs {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            extra_ignore_dirs: vec![],
            progress: true,
            verbose: false,
        }
    }
}

/// Scan, build the report, write it and publish CI step outputs.
pub fn run_manifest(args: &ManifestArgs, ci: &CiContext) -> Result<ReportDocument> {
    run_manifest_at(args, ci, timestamp_now())
}

/// Same as [`run_manifest`] with a caller-provided `generated_at` value.
pub fn run_manifest_at(
    args: &ManifestArgs,
    ci: &CiContext,
    generated_at: String,
) -> Result<ReportDocument> {
    let start_time = Instant::now();
    println!("🚀 开始扫描图片文件...");

    let image_paths = PathCollector::new(&args.root)
        .with_extra_ignore_dirs(args.extra_ignore_dirs.iter().cloned())
        .with_progress(args.progress)
        .collect()?;

    if args.verbose {
        for path in &image_paths {
            tracing::debug!("Image: {}", path);
        }
    }

    if image_paths.is_empty() {
        println!("⚠️  未找到图片文件");
    } else {
        println!("📊 找到 {} 个图片文件", image_paths.len());
        println!("\n📁 按扩展名统计:");
        for line in extension_stat_lines(&group_by_extension(&image_paths)) {
            println!("{line}");
        }
    }

    let report = build_report(image_paths, ci, generated_at);

    let output_name = args.output_file.display().to_string();
    write_report(&report, &args.output_file)?;
    println!("\n✅ 成功生成 {}", output_name);
    println!("📝 总图片数: {}", report.metadata.total_images);

    if let Some(sink) = &ci.output_sink {
        append_ci_outputs(sink, report.metadata.total_images, &output_name)?;
        tracing::debug!("Appended step outputs to {:?}", sink);
    }

    tracing::info!("Total manifest time: {:.3?}", start_time.elapsed());
    Ok(report)
}
