use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Extension to category routing table.
///
/// Keys are file extensions including the leading dot, normalized to
/// lowercase. Files whose extension is absent from the table (or that have
/// no extension at all) route to `default_category`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RuleSet {
    #[serde(default = "default_mappings")]
    pub mappings: HashMap<String, String>,
    #[serde(rename = "others_folder_name", default = "default_category")]
    pub default_category: String,
}

impl Default for RuleSet {
    fn default() -> Self {
        Self {
            mappings: default_mappings(),
            default_category: default_category(),
        }
    }
}

impl RuleSet {
    /// Lowercases all mapping keys. Applied once at load time so that
    /// lookups only have to lowercase the probe extension.
    pub fn normalized(mut self) -> Self {
        self.mappings = self
            .mappings
            .into_iter()
            .map(|(k, v)| (k.to_lowercase(), v))
            .collect();
        self
    }

    /// Resolves the category for a file path by its extension.
    ///
    /// Matching is case-insensitive; paths without an extension resolve to
    /// the default category.
    pub fn category_for(&self, path: &Path) -> &str {
        let key = path
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()));

        match key {
            Some(key) => self
                .mappings
                .get(&key)
                .map(String::as_str)
                .unwrap_or(&self.default_category),
            None => &self.default_category,
        }
    }
}

fn default_category() -> String {
    "Others".to_string()
}

fn default_mappings() -> HashMap<String, String> {
    [
        (".gif", "Images"),
        (".jpeg", "Images"),
        (".jpg", "Images"),
        (".png", "Images"),
        (".webp", "Images"),
        (".mp4", "Video"),
        (".mkv", "Video"),
        (".zip", "Compressed"),
        (".tar", "Compressed"),
        (".gz", "Compressed"),
        (".mp3", "Music"),
        (".wav", "Music"),
        (".pdf", "Documents"),
        (".docx", "Documents"),
        (".doc", "Documents"),
        (".xlsx", "Documents"),
        (".csv", "Documents"),
        (".py", "Programs"),
        (".js", "Programs"),
        (".exe", "Programs"),
        (".ini", "System Files"),
        (".icc", "System Files"),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v.to_string()))
    .collect()
}
