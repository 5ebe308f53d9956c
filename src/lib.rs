mod ci;
mod collector;
mod emit;
mod error;
mod group;
mod logging;
mod manifest;
mod progress_bar;
mod report;
mod toml_utils;

pub use ci::CiContext;
pub use collector::{IGNORE_DIRS, ImageFormat, PathCollector, collect_image_paths};
pub use emit::{append_ci_outputs, write_report};
pub use error::{AppError, Result};
pub use group::{
    GroupCounts, NO_EXTENSION, OrderedMap, PathGroups, ROOT_FOLDER, group_by_extension,
    group_by_folder,
};
pub use logging::init_logger;
pub use report::{EMPTY_SUMMARY, Images, Metadata, ReportDocument, Statistics, build_report};
pub use toml_utils::{DEFAULT_CONFIG_FILE, load_config, parse_toml};

// Core pipeline
pub use manifest::{DEFAULT_OUTPUT_FILE, ManifestArgs, run_manifest, run_manifest_at};
