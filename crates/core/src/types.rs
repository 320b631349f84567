use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── 文档快照（由插件宿主一次性读取） ─────────────────────────

/// 变量的解析类型（Figma `resolvedType`）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ResolvedType {
    Color,
    Float,
    Boolean,
    String,
    /// 其他未知类型，保留原始名称
    Other(String),
}

impl From<String> for ResolvedType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "COLOR" => ResolvedType::Color,
            "FLOAT" => ResolvedType::Float,
            "BOOLEAN" => ResolvedType::Boolean,
            "STRING" => ResolvedType::String,
            _ => ResolvedType::Other(raw),
        }
    }
}

impl From<ResolvedType> for String {
    fn from(ty: ResolvedType) -> Self {
        match ty {
            ResolvedType::Color => "COLOR".to_string(),
            ResolvedType::Float => "FLOAT".to_string(),
            ResolvedType::Boolean => "BOOLEAN".to_string(),
            ResolvedType::String => "STRING".to_string(),
            ResolvedType::Other(raw) => raw,
        }
    }
}

/// RGBA 颜色，各通道取值 0..=1
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }
}

/// 别名标记，线上格式固定为 `"VARIABLE_ALIAS"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AliasKind {
    #[serde(rename = "VARIABLE_ALIAS")]
    VariableAlias,
}

/// 指向另一个变量的引用：`{ "type": "VARIABLE_ALIAS", "id": "..." }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariableAlias {
    #[serde(rename = "type")]
    pub kind: AliasKind,
    pub id: String,
}

impl VariableAlias {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            kind: AliasKind::VariableAlias,
            id: id.into(),
        }
    }
}

/// 具体值
///
/// 反序列化顺序决定匹配优先级：布尔 → 数字 → 字符串 → RGBA → 其他任意 JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConcreteValue {
    Boolean(bool),
    Float(f64),
    String(String),
    Color(Rgba),
    Other(serde_json::Value),
}

/// 某个模式下的原始值：具体值或别名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariableValue {
    Alias(VariableAlias),
    Concrete(ConcreteValue),
}

impl VariableValue {
    pub fn alias(id: impl Into<String>) -> Self {
        VariableValue::Alias(VariableAlias::new(id))
    }
}

impl From<ConcreteValue> for VariableValue {
    fn from(value: ConcreteValue) -> Self {
        VariableValue::Concrete(value)
    }
}

/// Figma 变量
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variable {
    pub id: String,
    /// 以 `/` 分隔的层级名称，如 "Spacing/sm"
    pub name: String,
    pub resolved_type: ResolvedType,
    pub variable_collection_id: String,
    /// modeId → 值，保持插入顺序
    #[serde(default)]
    pub values_by_mode: IndexMap<String, VariableValue>,
}

impl Variable {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        resolved_type: ResolvedType,
        variable_collection_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            resolved_type,
            variable_collection_id: variable_collection_id.into(),
            values_by_mode: IndexMap::new(),
        }
    }

    /// 设置某个模式的值
    pub fn with_value(mut self, mode_id: impl Into<String>, value: impl Into<VariableValue>) -> Self {
        self.values_by_mode.insert(mode_id.into(), value.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableMode {
    pub mode_id: String,
    pub name: String,
}

impl VariableMode {
    pub fn new(mode_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            mode_id: mode_id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableCollection {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub modes: Vec<VariableMode>,
}

impl VariableCollection {
    pub fn new(id: impl Into<String>, name: impl Into<String>, modes: Vec<VariableMode>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            modes,
        }
    }
}

/// 一次提取所需的全部输入
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentSnapshot {
    #[serde(default)]
    pub collections: Vec<VariableCollection>,
    #[serde(default)]
    pub variables: Vec<Variable>,
}

// ── 导出结构 ──────────────────────────────────────────────────

/// 格式化后的 token 值
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TokenValue {
    Bool(bool),
    Text(String),
}

impl TokenValue {
    pub fn text(value: impl Into<String>) -> Self {
        TokenValue::Text(value.into())
    }
}

impl std::fmt::Display for TokenValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenValue::Bool(b) => write!(f, "{}", b),
            TokenValue::Text(s) => f.write_str(s),
        }
    }
}

/// 单个变量在某模式下的中间结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawToken {
    pub path: Vec<String>,
    pub value: TokenValue,
}

impl RawToken {
    pub fn new<S: Into<String>>(path: impl IntoIterator<Item = S>, value: TokenValue) -> Self {
        Self {
            path: path.into_iter().map(Into::into).collect(),
            value,
        }
    }
}

/// 可序列化的 token 分组
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanTokenGroup {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<TokenValue>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<CleanTokenGroup>,
}

impl CleanTokenGroup {
    pub fn leaf(name: impl Into<String>, value: TokenValue) -> Self {
        Self {
            name: name.into(),
            value: Some(value),
            groups: Vec::new(),
        }
    }

    pub fn branch(name: impl Into<String>, groups: Vec<CleanTokenGroup>) -> Self {
        Self {
            name: name.into(),
            value: None,
            groups,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindColorVariant {
    pub name: String,
    pub value: TokenValue,
}

/// `tailwind-colors` 分类的扁平分组：色系 → 色阶
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TailwindColorGroup {
    pub name: String,
    pub variants: Vec<TailwindColorVariant>,
}

/// 某个分类下的全部 token
///
/// `Group` 只在读回手工编辑过的导出文件时出现
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CategoryTokens {
    TailwindColors(Vec<TailwindColorGroup>),
    Groups(Vec<CleanTokenGroup>),
    Group(CleanTokenGroup),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanMode {
    pub name: String,
    pub variables: IndexMap<String, CategoryTokens>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanCollection {
    pub name: String,
    pub modes: Vec<CleanMode>,
}

/// 最终导出（`variables.json`）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanVariableExport {
    pub collections: Vec<CleanCollection>,
}
