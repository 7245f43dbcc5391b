use crate::utils::error::{ExtractError, Result};
use indexmap::IndexMap;
use serde_json::Value;

/// 單一分類的值：標籤清單，或空的 mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValue {
    Tags(Vec<String>),
    EmptyMapping,
}

impl CategoryValue {
    pub fn tags<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        CategoryValue::Tags(tags.into_iter().map(Into::into).collect())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            CategoryValue::Tags(tags) => tags.is_empty(),
            CategoryValue::EmptyMapping => true,
        }
    }

    /// 將未定型的 JSON 值轉為 CategoryValue，形狀不符時回傳 InvalidValueShape
    pub fn from_json(category: &str, value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => {
                let mut tags = Vec::with_capacity(items.len());
                for item in items {
                    match item {
                        Value::String(tag) => tags.push(tag.clone()),
                        other => {
                            return Err(ExtractError::InvalidValueShape {
                                category: category.to_string(),
                                found: format!("a list containing {}", describe(other)),
                            })
                        }
                    }
                }
                Ok(CategoryValue::Tags(tags))
            }
            Value::Object(map) if map.is_empty() => Ok(CategoryValue::EmptyMapping),
            other => Err(ExtractError::InvalidValueShape {
                category: category.to_string(),
                found: describe(other).to_string(),
            }),
        }
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(map) if map.is_empty() => "a mapping",
        Value::Object(_) => "a non-empty mapping",
    }
}

/// 依定義順序保存的分類表。鍵唯一，重複插入時就地取代值，位置不變。
#[derive(Debug, Clone, Default)]
pub struct CategoryMap {
    entries: IndexMap<String, CategoryValue>,
}

// IndexMap 的相等比較忽略順序，這裡順序也算
impl PartialEq for CategoryMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries.iter().eq(other.entries.iter())
    }
}

impl Eq for CategoryMap {}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in map used when the caller supplies no input.
    pub fn sample() -> Self {
        [
            ("ipo", CategoryValue::tags(Vec::<String>::new())),
            ("job_postings", CategoryValue::tags(Vec::<String>::new())),
            (
                "mergers_and_acquisitions",
                CategoryValue::tags(["fsi sandbox", "kaffeine"]),
            ),
            ("product_launch", CategoryValue::tags(["fsi sandbox", "kaffeine"])),
        ]
        .into_iter()
        .collect()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: CategoryValue) -> Option<CategoryValue> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<&CategoryValue> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// 從 JSON 物件建立分類表，整份輸入任一值不合法就整體拒絕
    pub fn from_json_value(document: &Value) -> Result<Self> {
        let object = document.as_object().ok_or_else(|| ExtractError::InvalidInput {
            message: format!(
                "expected a mapping of category names, found {}",
                describe(document)
            ),
        })?;

        let mut categories = CategoryMap {
            entries: IndexMap::with_capacity(object.len()),
        };
        for (name, value) in object {
            categories.insert(name.clone(), CategoryValue::from_json(name, value)?);
        }
        Ok(categories)
    }
}

impl<K: Into<String>> FromIterator<(K, CategoryValue)> for CategoryMap {
    fn from_iter<I: IntoIterator<Item = (K, CategoryValue)>>(iter: I) -> Self {
        let mut categories = CategoryMap::new();
        for (name, value) in iter {
            categories.insert(name, value);
        }
        categories
    }
}
