use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Mã SOL kiểm toán; tham số --sol ghi đè giá trị này.
    #[serde(default)]
    pub sol_code: Option<String>,
    /// Các cột ép kiểu text khi đọc file TTK (mặc định: ACC_NO).
    #[serde(default)]
    pub force_text_columns: Option<Vec<String>>,
}

pub fn load_config(path: &Path) -> Result<Config> {
    let text =
        fs::read_to_string(path).with_context(|| format!("Đọc cấu hình thất bại: {}", path.display()))?;
    let cfg: Config = serde_json::from_str(&text).context("Cấu hình JSON không hợp lệ")?;
    Ok(cfg)
}
