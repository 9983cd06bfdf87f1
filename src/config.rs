use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::dual_mode::Mode;
use crate::render::ARROW;

/// 演示程序的配置，对应一个 JSON 文件，缺省字段使用默认值
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    /// 两用链表的模式，只能是 "stack" 或 "queue"
    pub mode: Mode,
    pub values: Vec<i64>,
    pub separator: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            mode: Mode::Stack,
            values: vec![1, 2, 3],
            separator: ARROW.to_string(),
        }
    }
}

impl DemoConfig {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Cannot parse demo config")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("Cannot read config file {}", path.display()))?;
        Self::from_json(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config = DemoConfig::from_json(r#"{ "mode": "queue" }"#).unwrap();
        assert_eq!(config.mode, Mode::Queue);
        assert_eq!(config.values, vec![1, 2, 3]);
        assert_eq!(config.separator, " -> ");

        assert_eq!(DemoConfig::from_json("{}").unwrap(), DemoConfig::default());
    }

    #[test]
    fn test_invalid_mode_is_rejected() {
        let err = DemoConfig::from_json(r#"{ "mode": "ring" }"#).unwrap_err();
        let message = format!("{:#}", err);
        assert!(message.contains("Cannot parse demo config"));
        assert!(message.contains("'ring'"));
    }

    #[test]
    fn test_missing_file() {
        let err = DemoConfig::load("/nonexistent/chains.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/chains.json"));
    }
}
