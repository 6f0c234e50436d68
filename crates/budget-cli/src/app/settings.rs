use std::path::{Path, PathBuf};

use budget_core::ExportFormat;

use crate::config::DEFAULT_EXPORT_FILE;
use crate::helpers::resolve_export_path;

/// Resolved export preferences for one session.
#[derive(Debug, Clone)]
pub struct ExportSettings {
    pub directory: Option<PathBuf>,
    pub default_file: String,
    /// Forced format; `None` infers from the file extension
    pub format: Option<ExportFormat>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            directory: None,
            default_file: DEFAULT_EXPORT_FILE.to_string(),
            format: None,
        }
    }
}

impl ExportSettings {
    /// Turn the user's answer into a destination; blank means the default file.
    pub fn destination(&self, answer: &str) -> PathBuf {
        let name = if answer.trim().is_empty() {
            self.default_file.as_str()
        } else {
            answer.trim()
        };
        resolve_export_path(name, self.directory.as_deref())
    }

    pub fn format_for(&self, path: &Path) -> ExportFormat {
        self.format.unwrap_or_else(|| ExportFormat::from_path(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_answer_uses_default_file() {
        let settings = ExportSettings {
            directory: Some(PathBuf::from("/data")),
            ..ExportSettings::default()
        };
        assert_eq!(
            settings.destination("  "),
            PathBuf::from("/data").join(DEFAULT_EXPORT_FILE)
        );
    }

    #[test]
    fn test_format_inferred_unless_forced() {
        let mut settings = ExportSettings::default();
        assert_eq!(
            settings.format_for(Path::new("a.jsonl")),
            ExportFormat::JsonLines
        );
        settings.format = Some(ExportFormat::Csv);
        assert_eq!(settings.format_for(Path::new("a.jsonl")), ExportFormat::Csv);
    }
}
