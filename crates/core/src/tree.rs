use indexmap::IndexMap;

use crate::naming::{compare_natural, normalize_token_segment};
use crate::types::{
    CategoryTokens, CleanTokenGroup, RawToken, TailwindColorGroup, TailwindColorVariant, TokenValue,
};

/// 需要按色系扁平分组的分类
pub const TAILWIND_COLORS: &str = "tailwind-colors";

/// 构建中的可变树节点
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenGroupNode {
    pub name: String,
    pub value: Option<TokenValue>,
    pub children: IndexMap<String, TokenGroupNode>,
}

impl TokenGroupNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            children: IndexMap::new(),
        }
    }

    /// 沿路径插入值，逐级创建缺失节点；叶子已有值时保留先写入的值
    pub fn insert(&mut self, path: &[String], value: TokenValue) {
        let Some((head, rest)) = path.split_first() else {
            if self.value.is_none() {
                self.value = Some(value);
            }
            return;
        };

        self.children
            .entry(head.clone())
            .or_insert_with(|| TokenGroupNode::new(head.clone()))
            .insert(rest, value);
    }

    /// 转换为可序列化结构，子节点按自然顺序排序
    pub fn into_clean(self) -> CleanTokenGroup {
        CleanTokenGroup {
            name: self.name,
            value: self.value,
            groups: sorted_groups(self.children),
        }
    }
}

fn sorted_groups(children: IndexMap<String, TokenGroupNode>) -> Vec<CleanTokenGroup> {
    let mut groups: Vec<CleanTokenGroup> = children
        .into_values()
        .map(TokenGroupNode::into_clean)
        .collect();
    groups.sort_by(|a, b| compare_natural(&a.name, &b.name));
    groups
}

/// 将一个分类的原始 token 列表整理为最终结构
pub fn finalize_category_tokens(category: &str, tokens: Vec<RawToken>) -> CategoryTokens {
    if category == TAILWIND_COLORS {
        CategoryTokens::TailwindColors(build_tailwind_color_groups(tokens))
    } else {
        CategoryTokens::Groups(build_token_groups(tokens))
    }
}

/// 通用情况：按路径构建嵌套分组
pub fn build_token_groups(tokens: Vec<RawToken>) -> Vec<CleanTokenGroup> {
    let mut root = TokenGroupNode::default();

    for token in tokens {
        let path = expand_collapsed_path(token.path);
        root.insert(&path, token.value);
    }

    sorted_groups(root.children)
}

/// 单个片段里仍含 `/` 时重新拆分
fn expand_collapsed_path(path: Vec<String>) -> Vec<String> {
    match path.as_slice() {
        [only] if only.contains('/') => only
            .split('/')
            .filter(|part| !part.trim().is_empty())
            .map(normalize_token_segment)
            .collect(),
        _ => path,
    }
}

/// `tailwind-colors`：首段为色系，剩余路径以 `/` 连接作为色阶名
pub fn build_tailwind_color_groups(tokens: Vec<RawToken>) -> Vec<TailwindColorGroup> {
    let mut groups: IndexMap<String, IndexMap<String, TokenValue>> = IndexMap::new();

    for token in tokens {
        let (group_name, variant_name) = match token.path.split_first() {
            None => ("default".to_string(), "default".to_string()),
            Some((head, [])) => (head.clone(), head.clone()),
            Some((head, rest)) => (head.clone(), rest.join("/")),
        };

        groups
            .entry(group_name)
            .or_default()
            .entry(variant_name)
            .or_insert(token.value);
    }

    let mut result: Vec<TailwindColorGroup> = groups
        .into_iter()
        .map(|(name, variants)| {
            let mut variants: Vec<TailwindColorVariant> = variants
                .into_iter()
                .map(|(name, value)| TailwindColorVariant { name, value })
                .collect();
            variants.sort_by(|a, b| compare_natural(&a.name, &b.name));
            TailwindColorGroup { name, variants }
        })
        .collect();
    result.sort_by(|a, b| compare_natural(&a.name, &b.name));
    result
}
