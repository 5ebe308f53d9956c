use chrono::Local;
use serde::Serialize;

use crate::ci::CiContext;
use crate::group::{GroupCounts, PathGroups, group_by_extension, group_by_folder, group_counts};

/// Summary used when no images were found
pub const EMPTY_SUMMARY: &str = "No image files found";

/// The manifest written to the output file
#[derive(Debug, Clone, Serialize)]
pub struct ReportDocument {
    pub metadata: Metadata,
    pub statistics: Statistics,
    pub images: Images,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    /// Local time of generation, ISO-8601 without offset
    pub generated_at: String,
    pub total_images: usize,
    pub repository: String,
    pub commit_sha: String,
    pub run_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Statistics {
    pub by_folder: GroupCounts,
    pub by_extension: GroupCounts,
}

#[derive(Debug, Clone, Serialize)]
pub struct Images {
    pub all_paths: Vec<String>,
    pub by_folder: PathGroups,
    pub by_extension: PathGroups,
}

/// Current local time, e.g. `2026-10-16T09:30:00.123456`
pub fn timestamp_now() -> String {
    Local::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
}

pub fn summary_line(total_images: usize, folder_count: usize) -> String {
    if total_images == 0 {
        return EMPTY_SUMMARY.to_string();
    }
    format!("Found {total_images} image files across {folder_count} folders")
}

/// Assemble the report from sorted image paths.
pub fn build_report(image_paths: Vec<String>, ci: &CiContext, generated_at: String) -> ReportDocument {
    let by_folder = group_by_folder(&image_paths);
    let by_extension = group_by_extension(&image_paths);
    let total_images = image_paths.len();

    ReportDocument {
        metadata: Metadata {
            generated_at,
            total_images,
            repository: ci.repository.clone(),
            commit_sha: ci.commit_sha.clone(),
            run_id: ci.run_id.clone(),
        },
        statistics: Statistics {
            by_folder: group_counts(&by_folder),
            by_extension: group_counts(&by_extension),
        },
        summary: summary_line(total_images, by_folder.len()),
        images: Images {
            all_paths: image_paths,
            by_folder,
            by_extension,
        },
    }
}

// -- tests
