pub mod error;
pub mod export;
pub mod format;
pub mod loader;
pub mod naming;
pub mod resolve;
pub mod tree;
pub mod types;

// Re-export commonly used types
pub use error::{Error, Result};
pub use export::{build_clean_variable_export, group_variables_for_mode};
pub use loader::load_snapshot;
pub use resolve::{resolve_for_mode, resolve_variable_value, variable_map, VariableMap};
pub use types::{
    CategoryTokens, CleanCollection, CleanMode, CleanTokenGroup, CleanVariableExport,
    ConcreteValue, DocumentSnapshot, ResolvedType, Rgba, TailwindColorGroup, TailwindColorVariant,
    TokenValue, Variable, VariableCollection, VariableMode, VariableValue,
};
