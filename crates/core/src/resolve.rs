use std::collections::{HashMap, HashSet};

use crate::types::{ConcreteValue, Variable, VariableValue};

/// 变量 id → 变量
pub type VariableMap<'a> = HashMap<&'a str, &'a Variable>;

/// 为整个文档构建 id 索引
pub fn variable_map(variables: &[Variable]) -> VariableMap<'_> {
    variables.iter().map(|v| (v.id.as_str(), v)).collect()
}

/// 解析变量在指定模式下的具体值
///
/// - 沿别名链递归，`visited` 记录本次顶层调用已访问的变量 id，遇到环直接返回 `None`
/// - 目标模式没有显式值时，按 `values_by_mode` 的插入顺序逐个尝试，取第一个能解析出的值
/// - 别名指向不存在的变量 → `None`
pub fn resolve_variable_value<'a>(
    variable: &'a Variable,
    mode_id: &str,
    variables: &VariableMap<'a>,
    visited: &mut HashSet<&'a str>,
) -> Option<&'a ConcreteValue> {
    if !visited.insert(variable.id.as_str()) {
        return None;
    }

    match variable.values_by_mode.get(mode_id) {
        Some(value) => resolve_raw_value(value, mode_id, variables, visited),
        None => variable
            .values_by_mode
            .values()
            .find_map(|value| resolve_raw_value(value, mode_id, variables, visited)),
    }
}

/// 以全新的 visited 集合解析一次
pub fn resolve_for_mode<'a>(
    variable: &'a Variable,
    mode_id: &str,
    variables: &VariableMap<'a>,
) -> Option<&'a ConcreteValue> {
    let mut visited = HashSet::new();
    resolve_variable_value(variable, mode_id, variables, &mut visited)
}

fn resolve_raw_value<'a>(
    value: &'a VariableValue,
    mode_id: &str,
    variables: &VariableMap<'a>,
    visited: &mut HashSet<&'a str>,
) -> Option<&'a ConcreteValue> {
    match value {
        VariableValue::Concrete(concrete) => Some(concrete),
        VariableValue::Alias(alias) => {
            let target = *variables.get(alias.id.as_str())?;
            resolve_variable_value(target, mode_id, variables, visited)
        }
    }
}
