use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{AppError, Result};
use crate::group::PathGroups;
use crate::report::ReportDocument;

/// Write the report as 2-space indented UTF-8 JSON, replacing any existing file.
pub fn write_report(report: &ReportDocument, output_file: &Path) -> Result<()> {
    let file = File::create(output_file)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    Ok(())
}

/// Append the `total_images` and `output_file` step outputs to the CI sink.
pub fn append_ci_outputs(sink: &Path, total_images: usize, output_file: &str) -> Result<()> {
    let sink_err = |e: std::io::Error| AppError::OutputSink(format!("{}: {}", sink.display(), e));

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(sink)
        .map_err(sink_err)?;
    write!(file, "total_images={total_images}\noutput_file={output_file}\n").map_err(sink_err)?;
    Ok(())
}

/// Per-extension count lines, sorted by extension.
pub fn extension_stat_lines(by_extension: &PathGroups) -> Vec<String> {
    let mut stats: Vec<(&str, usize)> = by_extension.iter().map(|(ext, p)| (ext, p.len())).collect();
    stats.sort_unstable_by(|a, b| a.0.cmp(b.0));
    stats
        .into_iter()
        .map(|(ext, count)| format!("  {ext}: {count} 个"))
        .collect()
}
