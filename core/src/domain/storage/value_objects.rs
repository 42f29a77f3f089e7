use std::{fmt, sync::LazyLock};

use regex::Regex;

use crate::domain::common::entities::app_errors::CoreError;

pub const ALLOWED_IMAGE_EXTENSIONS: [&str; 4] = ["png", "jpg", "jpeg", "gif"];

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.-]").expect("file name pattern is valid"));

/// A file name that is safe to use inside the upload directory and carries
/// an allowed image extension.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageFileName(String);

impl ImageFileName {
    /// Sanitizes a client supplied file name.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let sanitized = sanitize_file_name(raw);
        if has_allowed_extension(&sanitized) {
            Ok(Self(sanitized))
        } else {
            Err(CoreError::UnsupportedImageType)
        }
    }

    /// Accepts only names that are already in sanitized form, as produced by
    /// the storage when the image was saved.
    pub fn parse_stored(raw: &str) -> Result<Self, CoreError> {
        if sanitize_file_name(raw) == raw && has_allowed_extension(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(CoreError::NotFound)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn extension(&self) -> Option<String> {
        self.0
            .rsplit_once('.')
            .map(|(_, extension)| extension.to_lowercase())
    }

    pub fn content_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some("png") => "image/png",
            Some("jpg") | Some("jpeg") => "image/jpeg",
            Some("gif") => "image/gif",
            _ => "application/octet-stream",
        }
    }

    /// Prefixes the name, e.g. with an upload timestamp.
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self(format!("{}{}", prefix, self.0))
    }
}

impl fmt::Display for ImageFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Path separators and whitespace runs become `_`, anything outside
/// `[A-Za-z0-9_.-]` is dropped, and leading/trailing `.` and `_` are
/// stripped.
pub fn sanitize_file_name(raw: &str) -> String {
    let spaced = raw.replace(['/', '\\'], " ");
    let joined = WHITESPACE.replace_all(spaced.trim(), "_");
    let cleaned = UNSAFE_CHARS.replace_all(&joined, "");
    cleaned.trim_matches(|c| c == '.' || c == '_').to_string()
}

fn has_allowed_extension(file_name: &str) -> bool {
    file_name
        .rsplit_once('.')
        .map(|(_, extension)| {
            ALLOWED_IMAGE_EXTENSIONS.contains(&extension.to_lowercase().as_str())
        })
        .unwrap_or(false)
}
