use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};

use figtok_core::{CleanVariableExport, DocumentSnapshot};
use figtok_tailwind::{generate_tailwind_artifacts_with, TailwindArtifacts, TailwindOptions};

// ── JS 侧 serde 镜像类型 ──────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
struct JsTailwindOptions {
    tailwind_collection: Option<String>,
    theme_collection: Option<String>,
    mode_collection: Option<String>,
    default_mode: Option<String>,
    light_mode: Option<String>,
    dark_mode: Option<String>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsTailwindArtifacts {
    tailwind_config: String,
    main_css: String,
}

// ── 类型转换 ──────────────────────────────────────────────────

impl From<JsTailwindOptions> for TailwindOptions {
    fn from(opts: JsTailwindOptions) -> Self {
        let defaults = TailwindOptions::default();
        TailwindOptions {
            tailwind_collection: opts
                .tailwind_collection
                .unwrap_or(defaults.tailwind_collection),
            theme_collection: opts.theme_collection.unwrap_or(defaults.theme_collection),
            mode_collection: opts.mode_collection.unwrap_or(defaults.mode_collection),
            default_mode: opts.default_mode.unwrap_or(defaults.default_mode),
            light_mode: opts.light_mode.unwrap_or(defaults.light_mode),
            dark_mode: opts.dark_mode.unwrap_or(defaults.dark_mode),
        }
    }
}

impl From<TailwindArtifacts> for JsTailwindArtifacts {
    fn from(artifacts: TailwindArtifacts) -> Self {
        JsTailwindArtifacts {
            tailwind_config: artifacts.tailwind_config,
            main_css: artifacts.main_css,
        }
    }
}

fn parse_options(options: JsValue) -> Result<JsTailwindOptions, JsError> {
    if options.is_undefined() || options.is_null() {
        Ok(JsTailwindOptions::default())
    } else {
        serde_wasm_bindgen::from_value(options)
            .map_err(|e| JsError::new(&format!("Invalid options: {}", e)))
    }
}

fn parse_snapshot(snapshot: JsValue) -> Result<DocumentSnapshot, JsError> {
    serde_wasm_bindgen::from_value(snapshot).map_err(|e| {
        tracing::error!(error = %e, "invalid document snapshot");
        JsError::new(&format!("Failed to read variables: {}", e))
    })
}

fn serialize_artifacts(artifacts: TailwindArtifacts) -> Result<JsValue, JsError> {
    let js_artifacts = JsTailwindArtifacts::from(artifacts);
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    js_artifacts
        .serialize(&serializer)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

// ── 与宿主无关的核心流程 ───────────────────────────────────────

/// `extract-variables`：快照 → `variables.json` 内容
pub fn extract_variables_json(snapshot: &DocumentSnapshot) -> figtok_core::Result<String> {
    snapshot.to_clean_export().to_json_pretty()
}

/// `get-tailwind-config`：快照 → 导出 → Tailwind 产物
pub fn tailwind_artifacts_for(
    snapshot: &DocumentSnapshot,
    options: &TailwindOptions,
) -> TailwindArtifacts {
    let export = snapshot.to_clean_export();
    generate_tailwind_artifacts_with(&export, options)
}

// ── WASM 导出函数 ─────────────────────────────────────────────

/// 初始化 panic hook（自动调用）
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
}

/// 提取变量并生成 `variables.json`
///
/// @param snapshot - `{ collections, variables }`，字段沿用 Figma API 命名
/// @returns 两空格缩进的 JSON 字符串
#[wasm_bindgen(js_name = "extractVariables")]
pub fn extract_variables(snapshot: JsValue) -> Result<String, JsError> {
    let snapshot = parse_snapshot(snapshot)?;
    extract_variables_json(&snapshot).map_err(|e| {
        tracing::error!(error = %e, "variable export failed");
        JsError::new(&format!("Failed to extract variables: {}", e))
    })
}

/// 从快照直接生成 Tailwind 产物
///
/// @param snapshot - `{ collections, variables }`
/// @param options  - 集合/模式名称，可选
/// @returns `{ tailwindConfig, mainCss }`
#[wasm_bindgen(js_name = "getTailwindConfig")]
pub fn get_tailwind_config(snapshot: JsValue, options: JsValue) -> Result<JsValue, JsError> {
    let opts: TailwindOptions = parse_options(options)?.into();
    let snapshot = parse_snapshot(snapshot)?;
    serialize_artifacts(tailwind_artifacts_for(&snapshot, &opts))
}

/// 从已有的 `variables.json` 内容生成 Tailwind 产物
///
/// @param exportJson - `extractVariables` 的输出（允许手工编辑过）
/// @param options    - 集合/模式名称，可选
/// @returns `{ tailwindConfig, mainCss }`
#[wasm_bindgen(js_name = "generateTailwindArtifacts")]
pub fn generate_tailwind_artifacts(export_json: &str, options: JsValue) -> Result<JsValue, JsError> {
    let opts: TailwindOptions = parse_options(options)?.into();
    let export = CleanVariableExport::from_json(export_json).map_err(|e| {
        tracing::error!(error = %e, "invalid variables export");
        JsError::new(&format!("Failed to generate Tailwind config: {}", e))
    })?;
    serialize_artifacts(generate_tailwind_artifacts_with(&export, &opts))
}
