use crate::domain::model::InputValue;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{
    validate_arity, validate_non_empty_string, validate_not_empty_list, validate_required_field,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

const BUILTIN_CASES: &str = include_str!("../../cases/coercion.toml");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseFile {
    pub suite: SuiteConfig,
    #[serde(default)]
    pub cases: Vec<CaseConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    pub name: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    Name,
    Hours,
}

impl CheckKind {
    pub fn arity(&self) -> usize {
        match self {
            CheckKind::Name => 1,
            CheckKind::Hours => 2,
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckKind::Name => f.write_str("name"),
            CheckKind::Hours => f.write_str("hours"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseConfig {
    pub check: CheckKind,
    pub args: Vec<InputValue>,
    pub expected: Option<bool>,
}

impl CaseFile {
    /// 從 TOML 檔案載入
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let case_file = toml::from_str(&processed_content)?;
        Ok(case_file)
    }

    /// 內建的練習案例
    pub fn builtin() -> Result<Self> {
        Self::from_toml_str(BUILTIN_CASES)
    }

    /// 替換環境變數 (例如 ${NAME})
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_case_file(&self) -> Result<()> {
        validate_non_empty_string("suite.name", &self.suite.name)?;
        validate_not_empty_list("cases", &self.cases)?;

        for (i, case) in self.cases.iter().enumerate() {
            validate_arity(&format!("cases[{}].args", i), &case.args, case.check.arity())?;
            validate_required_field(&format!("cases[{}].expected", i), &case.expected)?;
        }

        Ok(())
    }
}

impl Validate for CaseFile {
    fn validate(&self) -> Result<()> {
        self.validate_case_file()
    }
}
