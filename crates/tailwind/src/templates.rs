//! 固定模板
//!
//! `tailwind.config.ts` 原样输出；`main.css` 由五段拼接，只有 `:root` 与 `.dark`
//! 两段中的 `--name: value;` 声明会被替换。

/// `tailwind.config.ts`
pub const TAILWIND_CONFIG: &str = include_str!("../templates/tailwind.config.ts");

/// `:root {` 之前的部分（含 `:root {`）
pub const MAIN_CSS_PREFIX: &str = include_str!("../templates/main.prefix.css");

/// 亮色模式声明
pub const LIGHT_BLOCK: &str = include_str!("../templates/main.light.css");

/// `:root` 结束到 `.dark {`
pub const MAIN_CSS_MIDDLE: &str = include_str!("../templates/main.middle.css");

/// 暗色模式声明
pub const DARK_BLOCK: &str = include_str!("../templates/main.dark.css");

/// `.dark` 结束之后的部分
pub const MAIN_CSS_SUFFIX: &str = include_str!("../templates/main.suffix.css");

/// 按模板原样拼出的 `main.css`
pub fn default_main_css() -> String {
    [
        MAIN_CSS_PREFIX,
        LIGHT_BLOCK,
        MAIN_CSS_MIDDLE,
        DARK_BLOCK,
        MAIN_CSS_SUFFIX,
    ]
    .concat()
}
