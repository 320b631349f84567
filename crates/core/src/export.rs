use indexmap::IndexMap;
use tracing::debug;

use crate::error::{Error, Result};
use crate::format::format_variable_value;
use crate::naming::{compare_natural, format_token_label, sanitize_collection_name, split_variable_name};
use crate::resolve::{resolve_for_mode, variable_map, VariableMap};
use crate::tree::finalize_category_tokens;
use crate::types::{
    CategoryTokens, CleanCollection, CleanMode, CleanVariableExport, DocumentSnapshot, RawToken,
    Variable, VariableCollection,
};

/// 将一个集合在某个模式下的变量整理为 `分类 → token` 映射
///
/// 无法解析或格式化的变量直接跳过；分类键按自然顺序排列
pub fn group_variables_for_mode<'a>(
    collection_variables: &[&'a Variable],
    mode_id: &str,
    variables: &VariableMap<'a>,
) -> IndexMap<String, CategoryTokens> {
    let mut grouped: IndexMap<String, Vec<RawToken>> = IndexMap::new();

    for &variable in collection_variables {
        let split = split_variable_name(&variable.name);

        let Some(resolved) = resolve_for_mode(variable, mode_id, variables) else {
            debug!(variable = %variable.name, mode = mode_id, "no resolvable value, skipped");
            continue;
        };

        let Some(value) =
            format_variable_value(variable, resolved, &split.category_key, &split.segments)
        else {
            debug!(variable = %variable.name, mode = mode_id, "value does not match resolved type, skipped");
            continue;
        };

        let path = if split.segments.is_empty() {
            vec![format_token_label(&variable.name, &split.category_key)]
        } else {
            split.segments
        };

        grouped
            .entry(split.category_key)
            .or_default()
            .push(RawToken { path, value });
    }

    grouped.sort_by(|a, _, b, _| compare_natural(a, b));

    grouped
        .into_iter()
        .map(|(category, tokens)| {
            let finalized = finalize_category_tokens(&category, tokens);
            (category, finalized)
        })
        .collect()
}

/// 构建完整导出：集合与模式保持文档顺序，空模式和空集合被移除
pub fn build_clean_variable_export(
    collections: &[VariableCollection],
    variables: &[Variable],
) -> CleanVariableExport {
    let lookup = variable_map(variables);

    let collections = collections
        .iter()
        .filter_map(|collection| build_collection(collection, variables, &lookup))
        .collect();

    CleanVariableExport { collections }
}

fn build_collection<'a>(
    collection: &VariableCollection,
    variables: &'a [Variable],
    lookup: &VariableMap<'a>,
) -> Option<CleanCollection> {
    let members: Vec<&Variable> = variables
        .iter()
        .filter(|v| v.variable_collection_id == collection.id)
        .collect();

    let modes: Vec<CleanMode> = collection
        .modes
        .iter()
        .filter_map(|mode| {
            let grouped = group_variables_for_mode(&members, &mode.mode_id, lookup);
            if grouped.is_empty() {
                debug!(collection = %collection.name, mode = %mode.name, "mode has no variables, dropped");
                return None;
            }
            Some(CleanMode {
                name: mode.name.clone(),
                variables: grouped,
            })
        })
        .collect();

    if modes.is_empty() {
        debug!(collection = %collection.name, "collection has no variables, dropped");
        return None;
    }

    Some(CleanCollection {
        name: sanitize_collection_name(&collection.name),
        modes,
    })
}

impl DocumentSnapshot {
    /// 对整个快照执行提取
    pub fn to_clean_export(&self) -> CleanVariableExport {
        build_clean_variable_export(&self.collections, &self.variables)
    }
}

impl CleanVariableExport {
    /// 两空格缩进的 JSON（`variables.json` 的内容）
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(Error::Serialize)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::Parse)
    }

    /// 按名称查找集合（忽略大小写和首尾空白）
    pub fn collection(&self, name: &str) -> Option<&CleanCollection> {
        let name = name.trim();
        self.collections
            .iter()
            .find(|c| c.name.trim().eq_ignore_ascii_case(name))
    }
}

impl CleanCollection {
    /// 按名称查找模式（忽略大小写和首尾空白）
    pub fn mode(&self, name: &str) -> Option<&CleanMode> {
        let name = name.trim();
        self.modes
            .iter()
            .find(|m| m.name.trim().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        CleanTokenGroup, ConcreteValue, ResolvedType, Rgba, TokenValue, VariableMode, VariableValue,
    };
    use pretty_assertions::assert_eq;

    fn theme() -> VariableCollection {
        VariableCollection::new("c1", "Theme", vec![VariableMode::new("m1", "Default")])
    }

    #[test]
    fn test_category_keys_sorted_regardless_of_input_order() {
        let vars = vec![
            Variable::new("v1", "Spacing/sm", ResolvedType::Float, "c1")
                .with_value("m1", ConcreteValue::Float(4.0)),
            Variable::new("v2", "Item10/a", ResolvedType::Float, "c1")
                .with_value("m1", ConcreteValue::Float(1.0)),
            Variable::new("v3", "Colors/Primary", ResolvedType::Color, "c1")
                .with_value("m1", ConcreteValue::Color(Rgba::new(0.0, 0.0, 0.0, 1.0))),
            Variable::new("v4", "Item2/a", ResolvedType::Float, "c1")
                .with_value("m1", ConcreteValue::Float(1.0)),
        ];
        let lookup = variable_map(&vars);
        let members: Vec<&Variable> = vars.iter().collect();

        let grouped = group_variables_for_mode(&members, "m1", &lookup);
        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["color", "item2", "item10", "spacing"]);

        let mut reversed = members.clone();
        reversed.reverse();
        let grouped = group_variables_for_mode(&reversed, "m1", &lookup);
        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["color", "item2", "item10", "spacing"]);
    }

    #[test]
    fn test_unresolvable_and_mismatched_variables_dropped() {
        let vars = vec![
            Variable::new("a", "Spacing/a", ResolvedType::Float, "c1")
                .with_value("m1", VariableValue::alias("b")),
            Variable::new("b", "Spacing/b", ResolvedType::Float, "c1")
                .with_value("m1", VariableValue::alias("a")),
            Variable::new("c", "Colors/Bad", ResolvedType::Color, "c1")
                .with_value("m1", ConcreteValue::String("red".into())),
            Variable::new("d", "Spacing/ok", ResolvedType::Float, "c1")
                .with_value("m1", ConcreteValue::Float(2.0)),
        ];

        let export = build_clean_variable_export(&[theme()], &vars);
        let mode = &export.collections[0].modes[0];

        assert_eq!(mode.variables.len(), 1);
        assert_eq!(
            mode.variables["spacing"],
            CategoryTokens::Groups(vec![CleanTokenGroup::leaf("ok", TokenValue::text("2px"))])
        );
    }

    #[test]
    fn test_empty_modes_and_collections_dropped() {
        let collections = vec![
            VariableCollection::new(
                "c1",
                "Mode",
                vec![VariableMode::new("light", "Light"), VariableMode::new("dark", "Dark")],
            ),
            VariableCollection::new("c2", "Empty", vec![VariableMode::new("m", "Default")]),
        ];
        // 只有 light 模式有值，但 dark 会回退到 light
        let vars = vec![Variable::new("v", "Base/background", ResolvedType::Color, "c1")
            .with_value("light", ConcreteValue::Color(Rgba::new(1.0, 1.0, 1.0, 1.0)))];

        let export = build_clean_variable_export(&collections, &vars);

        assert_eq!(export.collections.len(), 1);
        assert_eq!(export.collections[0].name, "Mode");
        assert_eq!(export.collections[0].modes.len(), 2);
    }

    #[test]
    fn test_collection_name_sanitized() {
        let collections = vec![VariableCollection::new(
            "c1",
            "1. Colors",
            vec![VariableMode::new("m1", "Default")],
        )];
        let vars = vec![Variable::new("v", "Red/500", ResolvedType::Color, "c1")
            .with_value("m1", ConcreteValue::Color(Rgba::new(1.0, 0.0, 0.0, 1.0)))];

        let export = build_clean_variable_export(&collections, &vars);
        assert_eq!(export.collections[0].name, "color");
    }

    #[test]
    fn test_single_part_name_is_uncategorized_leaf() {
        let vars = vec![Variable::new("v", "Brand Primary", ResolvedType::String, "c1")
            .with_value("m1", ConcreteValue::String("Inter".into()))];

        let export = build_clean_variable_export(&[theme()], &vars);
        assert_eq!(
            export.collections[0].modes[0].variables["uncategorized"],
            CategoryTokens::Groups(vec![CleanTokenGroup::leaf(
                "brand-primary",
                TokenValue::text("Inter")
            )])
        );
    }

    #[test]
    fn test_lookup_helpers_ignore_case() {
        let vars = vec![Variable::new("v", "Spacing/sm", ResolvedType::Float, "c1")
            .with_value("m1", ConcreteValue::Float(4.0))];
        let export = build_clean_variable_export(&[theme()], &vars);

        let collection = export.collection(" theme ").expect("collection");
        assert!(collection.mode("DEFAULT").is_some());
        assert!(export.collection("Mode").is_none());
    }
}
