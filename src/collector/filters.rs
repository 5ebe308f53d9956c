use strum::{Display, EnumIter, EnumString, VariantNames};

/// Directory names that are never descended into.
pub const IGNORE_DIRS: &[&str] = &[
    ".git",
    ".github",
    ".vscode",
    "__pycache__",
    "node_modules",
    "venv",
    ".venv",
    "env",
    "dist",
    "build",
    ".next",
    ".nuxt",
    "out",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, Display, VariantNames, EnumIter)]
#[strum(ascii_case_insensitive)]
/// Supported image file extensions (without the leading dot)
pub enum ImageFormat {
    #[strum(serialize = "jpg")]
    Jpg,

    #[strum(serialize = "jpeg")]
    Jpeg,

    #[strum(serialize = "png")]
    Png,

    #[strum(serialize = "gif")]
    Gif,

    #[strum(serialize = "bmp")]
    Bmp,

    #[strum(serialize = "tiff")]
    Tiff,

    #[strum(serialize = "tif")]
    Tif,

    #[strum(serialize = "webp")]
    Webp,

    #[strum(serialize = "svg")]
    Svg,

    #[strum(serialize = "ico")]
    Ico,

    #[strum(serialize = "jfif")]
    Jfif,

    #[strum(serialize = "pjpeg")]
    Pjpeg,

    #[strum(serialize = "pjp")]
    Pjp,

    #[strum(serialize = "avif")]
    Avif,

    #[strum(serialize = "apng")]
    Apng,

    #[strum(serialize = "heic")]
    Heic,

    #[strum(serialize = "heif")]
    Heif,
}

impl ImageFormat {
    /// Match a dotted extension such as `.PNG`, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        ext.strip_prefix('.').and_then(|e| e.parse().ok())
    }

    /// The extension with its leading dot, e.g. `.png`
    pub fn dotted(&self) -> String {
        format!(".{self}")
    }
}

/// Final extension of a file name, dot included, in its original case.
///
/// A name whose only dot is the leading one (`.png`) or that ends in a dot
/// (`photo.`) has no extension.
pub fn extension_of(file_name: &str) -> Option<&str> {
    let idx = file_name.rfind('.')?;
    if idx == 0 || idx + 1 == file_name.len() {
        return None;
    }
    Some(&file_name[idx..])
}

pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

pub fn is_image_name(file_name: &str) -> bool {
    extension_of(file_name).is_some_and(|ext| ImageFormat::from_extension(ext).is_some())
}
