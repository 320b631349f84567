use crate::error::{Error, Result};
use crate::types::DocumentSnapshot;

/// 从 JSON 字符串加载文档快照
///
/// JSON 格式示例：
/// ```json
/// {
///   "collections": [
///     { "id": "c1", "name": "Theme", "modes": [{ "modeId": "m1", "name": "Default" }] }
///   ],
///   "variables": [
///     {
///       "id": "v1",
///       "name": "Spacing/sm",
///       "resolvedType": "FLOAT",
///       "variableCollectionId": "c1",
///       "valuesByMode": { "m1": 20 }
///     }
///   ]
/// }
/// ```
pub fn load_snapshot(json_str: &str) -> Result<DocumentSnapshot> {
    serde_json::from_str(json_str).map_err(Error::Parse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ConcreteValue, ResolvedType, VariableValue};

    #[test]
    fn test_load_snapshot_basic() {
        let json = r#"{
            "collections": [
                { "id": "c1", "name": "Theme", "modes": [{ "modeId": "m1", "name": "Default" }] }
            ],
            "variables": [
                {
                    "id": "v1",
                    "name": "Spacing/sm",
                    "resolvedType": "FLOAT",
                    "variableCollectionId": "c1",
                    "valuesByMode": { "m1": 20 }
                },
                {
                    "id": "v2",
                    "name": "Spacing/md",
                    "resolvedType": "FLOAT",
                    "variableCollectionId": "c1",
                    "valuesByMode": { "m1": { "type": "VARIABLE_ALIAS", "id": "v1" } }
                }
            ]
        }"#;

        let snapshot = load_snapshot(json).unwrap();

        assert_eq!(snapshot.collections.len(), 1);
        assert_eq!(snapshot.collections[0].modes[0].mode_id, "m1");
        assert_eq!(snapshot.variables.len(), 2);
        assert_eq!(snapshot.variables[0].resolved_type, ResolvedType::Float);
        assert_eq!(
            snapshot.variables[0].values_by_mode["m1"],
            VariableValue::Concrete(ConcreteValue::Float(20.0))
        );
        assert_eq!(snapshot.variables[1].values_by_mode["m1"], VariableValue::alias("v1"));
    }

    #[test]
    fn test_load_snapshot_preserves_mode_order() {
        let json = r#"{
            "variables": [
                {
                    "id": "v1",
                    "name": "Base/bg",
                    "resolvedType": "STRING",
                    "variableCollectionId": "c1",
                    "valuesByMode": { "zeta": "z", "alpha": "a" }
                }
            ]
        }"#;

        let snapshot = load_snapshot(json).unwrap();
        let modes: Vec<&str> = snapshot.variables[0]
            .values_by_mode
            .keys()
            .map(String::as_str)
            .collect();
        assert_eq!(modes, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_load_snapshot_invalid() {
        let result = load_snapshot("invalid json");
        assert!(matches!(result, Err(Error::Parse(_))));
    }
}
