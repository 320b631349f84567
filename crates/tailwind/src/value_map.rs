use figtok_core::CleanVariableExport;
use indexmap::IndexMap;
use phf::phf_map;

use crate::flatten::{mode_tokens, FlatTokens};
use crate::options::TailwindOptions;

/// Mode 集合中会写入 CSS 的前缀
const MODE_PREFIXES: [&str; 2] = ["base/", "alpha/"];

/// Tailwind 集合中与模式无关、去掉前缀后直接作为变量名的前缀
const SHARED_PREFIXES: [&str; 5] = [
    "font/size/",
    "font/line-height/",
    "font/letter-spacing/",
    "font/weight/",
    "radius/",
];

const SPACING_PREFIX: &str = "spacing/";

/// 语义化间距 → Theme 集合中的键
static SPACING_ALIASES: phf::Map<&'static str, &'static str> = phf_map! {
    "spacing-sm" => "spacing/spacing-small",
    "spacing-md" => "spacing/spacing-medium",
    "spacing-lg" => "spacing/spacing-large",
    "spacing-xl" => "spacing/spacing-extra-large",
};

/// 亮/暗两套 CSS 变量值（键不含 `--`）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssValueMaps {
    pub light: IndexMap<String, String>,
    pub dark: IndexMap<String, String>,
}

impl CssValueMaps {
    fn insert_shared(&mut self, name: String, value: &str) {
        self.light.insert(name.clone(), value.to_string());
        self.dark.insert(name, value.to_string());
    }
}

/// 从导出数据构建 CSS 变量替换表
///
/// 1. Mode/Light、Mode/Dark 中 `base/`、`alpha/` 开头的键去掉前缀后分别写入亮/暗表
/// 2. TailwindCSS/Default 中字体、圆角去掉前缀写入两张表
/// 3. TailwindCSS/Default 中 `spacing/x/y` → `spacing-x-y` 写入两张表
/// 4. Theme/Default 的语义化间距与 `spacing-0` 写入两张表
pub fn build_css_value_maps(export: &CleanVariableExport, options: &TailwindOptions) -> CssValueMaps {
    let mut maps = CssValueMaps::default();

    let light = mode_tokens(export, &options.mode_collection, &options.light_mode);
    let dark = mode_tokens(export, &options.mode_collection, &options.dark_mode);
    copy_mode_tokens(&light, &mut maps.light);
    copy_mode_tokens(&dark, &mut maps.dark);

    let tailwind = mode_tokens(export, &options.tailwind_collection, &options.default_mode);
    let theme = mode_tokens(export, &options.theme_collection, &options.default_mode);

    for (key, value) in &tailwind {
        if let Some(name) = strip_any_prefix(key, &SHARED_PREFIXES) {
            maps.insert_shared(name.to_string(), value);
        }
        if let Some(rest) = key.strip_prefix(SPACING_PREFIX) {
            maps.insert_shared(format!("spacing-{}", rest.replace('/', "-")), value);
        }
    }

    for (name, theme_key) in SPACING_ALIASES.entries() {
        if let Some(value) = theme.get(*theme_key) {
            maps.insert_shared(name.to_string(), value);
        }
    }

    let spacing_zero = theme
        .get("spacing/spacing-none")
        .or_else(|| tailwind.get("spacing/0"));
    if let Some(value) = spacing_zero {
        maps.insert_shared("spacing-0".to_string(), value);
    }

    maps
}

fn copy_mode_tokens(source: &FlatTokens, target: &mut IndexMap<String, String>) {
    for (key, value) in source {
        if let Some(name) = strip_any_prefix(key, &MODE_PREFIXES) {
            target.insert(name.to_string(), value.clone());
        }
    }
}

fn strip_any_prefix<'a>(key: &'a str, prefixes: &[&str]) -> Option<&'a str> {
    prefixes.iter().find_map(|prefix| key.strip_prefix(prefix))
}
