use crate::adapters::sink::OutputFormat;
use crate::domain::model::CategoryMap;
use crate::utils::error::{ExtractError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_one_of, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractorConfig {
    pub extractor: Option<ExtractorSection>,
    pub output: Option<OutputConfig>,
    pub categories: Option<toml::Table>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorSection {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
    pub pretty: Option<bool>,
}

impl ExtractorConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| ExtractError::TomlError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.extractor.as_ref().and_then(|e| e.name.as_deref())
    }

    pub fn output_format(&self) -> Result<OutputFormat> {
        match self.output.as_ref().and_then(|o| o.format.as_deref()) {
            Some(name) => OutputFormat::parse(name),
            None => Ok(OutputFormat::default()),
        }
    }

    pub fn pretty(&self) -> bool {
        self.output.as_ref().and_then(|o| o.pretty).unwrap_or(false)
    }

    /// 取得 `[categories]`，未設定時回傳 None
    pub fn categories(&self) -> Result<Option<CategoryMap>> {
        self.categories
            .as_ref()
            .map(categories_from_toml_table)
            .transpose()
    }
}

impl Validate for ExtractorConfig {
    fn validate(&self) -> Result<()> {
        if let Some(name) = self.extractor.as_ref().and_then(|e| e.name.as_deref()) {
            validate_non_empty_string("extractor.name", name)?;
        }

        if let Some(format) = self.output.as_ref().and_then(|o| o.format.as_deref()) {
            validate_one_of("output.format", &format.to_ascii_lowercase(), OutputFormat::NAMES)?;
        }

        // 形狀錯誤在載入時就回報，不要等到執行
        self.categories()?;
        Ok(())
    }
}

/// 替換環境變數 (例如 ${CATEGORY_TAG})，未定義的變數保持原樣
pub fn substitute_env_vars(content: &str) -> String {
    static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();
    let re = PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("placeholder pattern is valid")
    });

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}

pub fn categories_from_toml_table(table: &toml::Table) -> Result<CategoryMap> {
    let document = serde_json::to_value(table)?;
    CategoryMap::from_json_value(&document)
}
