use crate::domain::model::{CategoryMap, CategoryValue};
use crate::utils::error::Result;
use serde_json::Value;

pub const TAG_SEPARATOR: &str = ", ";

/// 會被替換成空白的標點符號
pub const FORBIDDEN_CHARS: &[char] = &[
    '/', '[', '`', '~', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '|', '+', '-', '=',
    '?', ';', ':', '\'', '"', ',', '.', '<', '>', '{', '}', ']', '\\',
];

pub fn is_forbidden(c: char) -> bool {
    FORBIDDEN_CHARS.contains(&c)
}

/// Replaces every forbidden punctuation character with a single space.
pub fn sanitize_category_name(name: &str) -> String {
    name.chars()
        .map(|c| if is_forbidden(c) { ' ' } else { c })
        .collect()
}

/// One term per category, in the map's order.
///
/// Empty categories (no tags, or an empty mapping) yield their sanitized
/// name; the rest yield their tags joined with `", "`.
pub fn extract_terms(categories: &CategoryMap) -> Vec<String> {
    categories
        .iter()
        .map(|(name, value)| match value {
            CategoryValue::Tags(tags) if !tags.is_empty() => {
                tracing::debug!("Category '{}' has {} tags", name, tags.len());
                tags.join(TAG_SEPARATOR)
            }
            _ => {
                tracing::debug!("Category '{}' is empty, using its name", name);
                sanitize_category_name(name)
            }
        })
        .collect()
}

/// 從未定型的 JSON 文件直接抽出 terms
pub fn extract_terms_from_json(document: &Value) -> Result<Vec<String>> {
    let categories = CategoryMap::from_json_value(document)?;
    Ok(extract_terms(&categories))
}
