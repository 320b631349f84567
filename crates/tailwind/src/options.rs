use serde::{Deserialize, Serialize};

/// Tailwind 产物生成配置
///
/// 默认值即 Figma 文件约定的集合与模式名称，名称匹配忽略大小写和首尾空白
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TailwindOptions {
    /// 与模式无关的基础 token（字号、圆角、间距）
    pub tailwind_collection: String,
    /// 语义化间距别名
    pub theme_collection: String,
    /// 亮/暗色 token
    pub mode_collection: String,
    /// `tailwind_collection` 与 `theme_collection` 读取的模式
    pub default_mode: String,
    pub light_mode: String,
    pub dark_mode: String,
}

impl Default for TailwindOptions {
    fn default() -> Self {
        Self {
            tailwind_collection: "TailwindCSS".to_string(),
            theme_collection: "Theme".to_string(),
            mode_collection: "Mode".to_string(),
            default_mode: "Default".to_string(),
            light_mode: "Light".to_string(),
            dark_mode: "Dark".to_string(),
        }
    }
}
