use figtok_core::{CategoryTokens, CleanMode, CleanTokenGroup, CleanVariableExport};
use indexmap::IndexMap;
use tracing::debug;

/// `a/b/c` 路径 → 字符串值
pub type FlatTokens = IndexMap<String, String>;

/// 深度优先展开一个模式下的全部分类，键以分类名开头
pub fn flatten_mode(mode: &CleanMode) -> FlatTokens {
    let mut flat = FlatTokens::new();
    for (category, tokens) in &mode.variables {
        flatten_category_tokens(category, tokens, &mut flat);
    }
    flat
}

/// 展开单个分类，同名键以后写入者为准
pub fn flatten_category_tokens(prefix: &str, tokens: &CategoryTokens, out: &mut FlatTokens) {
    match tokens {
        CategoryTokens::Groups(groups) => {
            for group in groups {
                flatten_group(prefix, group, out);
            }
        }
        CategoryTokens::Group(group) => flatten_group(prefix, group, out),
        CategoryTokens::TailwindColors(groups) => {
            for group in groups {
                for variant in &group.variants {
                    let key = join_path(&join_path(prefix, &group.name), &variant.name);
                    out.insert(key, variant.value.to_string());
                }
            }
        }
    }
}

fn flatten_group(prefix: &str, group: &CleanTokenGroup, out: &mut FlatTokens) {
    let path = join_path(prefix, &group.name);

    if let Some(value) = &group.value {
        out.insert(path.clone(), value.to_string());
    }

    for child in &group.groups {
        flatten_group(&path, child, out);
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// 取出指定集合、指定模式的扁平 token；缺失时返回空表
pub fn mode_tokens(export: &CleanVariableExport, collection: &str, mode: &str) -> FlatTokens {
    let Some(found) = export.collection(collection) else {
        debug!(collection, "collection not found, using template values");
        return FlatTokens::new();
    };

    match found.mode(mode) {
        Some(mode) => flatten_mode(mode),
        None => {
            debug!(collection, mode, "mode not found, using template values");
            FlatTokens::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figtok_core::{TailwindColorGroup, TailwindColorVariant, TokenValue};
    use pretty_assertions::assert_eq;

    fn text(value: &str) -> TokenValue {
        TokenValue::text(value)
    }

    #[test]
    fn test_flatten_nested_groups() {
        let tokens = CategoryTokens::Groups(vec![CleanTokenGroup::branch(
            "size",
            vec![
                CleanTokenGroup::leaf("text-sm", text("14px")),
                CleanTokenGroup::leaf("text-lg", text("18px")),
            ],
        )]);

        let mut flat = FlatTokens::new();
        flatten_category_tokens("font", &tokens, &mut flat);

        assert_eq!(flat.get("font/size/text-sm").map(String::as_str), Some("14px"));
        assert_eq!(flat.get("font/size/text-lg").map(String::as_str), Some("18px"));
        assert_eq!(flat.len(), 2);
    }

    #[test]
    fn test_flatten_single_group_shape() {
        let tokens = CategoryTokens::Group(CleanTokenGroup {
            name: "background".to_string(),
            value: Some(text("#fff")),
            groups: vec![CleanTokenGroup::leaf("muted", text("#eee"))],
        });

        let mut flat = FlatTokens::new();
        flatten_category_tokens("base", &tokens, &mut flat);

        assert_eq!(flat.get("base/background").map(String::as_str), Some("#fff"));
        assert_eq!(flat.get("base/background/muted").map(String::as_str), Some("#eee"));
    }

    #[test]
    fn test_flatten_booleans_and_tailwind_colors() {
        let mut flat = FlatTokens::new();
        flatten_category_tokens(
            "flags",
            &CategoryTokens::Groups(vec![CleanTokenGroup::leaf("rounded", TokenValue::Bool(true))]),
            &mut flat,
        );
        flatten_category_tokens(
            "tailwind-colors",
            &CategoryTokens::TailwindColors(vec![TailwindColorGroup {
                name: "slate".to_string(),
                variants: vec![TailwindColorVariant {
                    name: "500".to_string(),
                    value: text("#64748b"),
                }],
            }]),
            &mut flat,
        );

        assert_eq!(flat.get("flags/rounded").map(String::as_str), Some("true"));
        assert_eq!(
            flat.get("tailwind-colors/slate/500").map(String::as_str),
            Some("#64748b")
        );
    }

    #[test]
    fn test_missing_collection_yields_empty_map() {
        let export = CleanVariableExport::default();
        assert!(mode_tokens(&export, "Theme", "Default").is_empty());
    }
}
