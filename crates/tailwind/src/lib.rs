pub mod css;
pub mod flatten;
pub mod options;
pub mod templates;
pub mod value_map;

use figtok_core::CleanVariableExport;
use serde::Serialize;

// Re-export main types
pub use css::update_css_block;
pub use flatten::{flatten_mode, FlatTokens};
pub use options::TailwindOptions;
pub use value_map::{build_css_value_maps, CssValueMaps};

/// 生成的两个文件内容
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TailwindArtifacts {
    /// `tailwind.config.ts`
    pub tailwind_config: String,
    /// `main.css`
    pub main_css: String,
}

/// 使用默认集合/模式名称生成产物
pub fn generate_tailwind_artifacts(export: &CleanVariableExport) -> TailwindArtifacts {
    generate_tailwind_artifacts_with(export, &TailwindOptions::default())
}

/// 生成 `tailwind.config.ts` 与 `main.css`
///
/// 配置文件是固定模板；CSS 只替换亮/暗两段中能在导出数据里找到的变量值。
/// 缺失的集合、模式或键都不会报错，对应声明保留模板值
pub fn generate_tailwind_artifacts_with(
    export: &CleanVariableExport,
    options: &TailwindOptions,
) -> TailwindArtifacts {
    let maps = build_css_value_maps(export, options);
    let light_block = update_css_block(templates::LIGHT_BLOCK, &maps.light);
    let dark_block = update_css_block(templates::DARK_BLOCK, &maps.dark);

    let main_css = [
        templates::MAIN_CSS_PREFIX,
        light_block.as_str(),
        templates::MAIN_CSS_MIDDLE,
        dark_block.as_str(),
        templates::MAIN_CSS_SUFFIX,
    ]
    .concat();

    TailwindArtifacts {
        tailwind_config: templates::TAILWIND_CONFIG.to_string(),
        main_css,
    }
}
