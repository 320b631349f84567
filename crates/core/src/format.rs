use phf::phf_set;

use crate::types::{ConcreteValue, ResolvedType, Rgba, TokenValue, Variable};

/// 数值一律带 px 的分类
static PX_CATEGORIES: phf::Set<&'static str> = phf_set! {
    "spacing",
    "breakpoint",
    "border-width",
    "width",
    "height",
    "size",
    "sizing",
    "max-width",
    "max-height",
    "min-width",
    "min-height",
    "radius",
    "padding",
    "margin",
    "gap",
};

/// 路径中出现即带 px 的片段
static PX_SEGMENTS: phf::Set<&'static str> = phf_set! {
    "font-size",
    "line-height",
    "opacity",
    "letter-spacing",
    "gap",
    "width",
    "height",
    "size",
};

/// 按 `resolved_type` 格式化解析后的值，类型不匹配返回 `None`
pub fn format_variable_value(
    variable: &Variable,
    resolved: &ConcreteValue,
    category_key: &str,
    segments: &[String],
) -> Option<TokenValue> {
    match variable.resolved_type {
        ResolvedType::Color => match resolved {
            ConcreteValue::Color(rgba) => Some(TokenValue::Text(format_color(rgba))),
            _ => None,
        },
        ResolvedType::Float => match resolved {
            ConcreteValue::Float(n) => Some(TokenValue::Text(format_numeric_value(
                *n,
                category_key,
                segments,
            ))),
            _ => None,
        },
        ResolvedType::Boolean => Some(TokenValue::Bool(coerce_bool(resolved))),
        ResolvedType::String => Some(TokenValue::Text(coerce_string(resolved))),
        ResolvedType::Other(_) => Some(TokenValue::Text(js_json_stringify(resolved))),
    }
}

/// RGBA → `#rrggbb`（不透明）或 `rgba(R, G, B, A.AAAA)`
pub fn format_color(rgba: &Rgba) -> String {
    let r = channel_to_byte(rgba.r);
    let g = channel_to_byte(rgba.g);
    let b = channel_to_byte(rgba.b);

    let alpha = clamp_unit(rgba.a);
    let alpha = to_fixed(alpha, 4).parse::<f64>().unwrap_or(alpha);

    if (alpha - 1.0).abs() < 0.0001 {
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    } else {
        format!("rgba({}, {}, {}, {})", r, g, b, to_fixed(alpha, 4))
    }
}

/// 数值格式化：0 → "0"，小数保留至多 4 位，按规则追加 px
pub fn format_numeric_value(value: f64, category_key: &str, segments: &[String]) -> String {
    if value == 0.0 {
        return "0".to_string();
    }

    let number = if value.fract() == 0.0 {
        js_number_to_string(value)
    } else {
        let rounded = to_fixed(value, 4).parse::<f64>().unwrap_or(value);
        js_number_to_string(rounded)
    };

    if should_append_px(category_key, segments) {
        format!("{}px", number)
    } else {
        number
    }
}

/// 判断数值是否需要 px 单位
///
/// `font` 分类只有 `font/size/...` 带单位，其余（如 weight）保持无单位
pub fn should_append_px(category_key: &str, segments: &[String]) -> bool {
    if PX_CATEGORIES.contains(category_key) {
        return true;
    }

    if category_key == "font" {
        return segments
            .first()
            .is_some_and(|first| first.eq_ignore_ascii_case("size"));
    }

    segments
        .iter()
        .any(|segment| PX_SEGMENTS.contains(segment.to_lowercase().as_str()))
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    value.clamp(0.0, 1.0)
}

fn channel_to_byte(value: f64) -> u8 {
    (clamp_unit(value) * 255.0).round() as u8
}

// ── 与 JS Number 行为保持一致的辅助函数 ──────────────────────

/// 等价于 `Number.prototype.toFixed(digits)`
///
/// 非中点时与 Rust 的精确格式化一致；恰好落在中点时取绝对值较大的一侧
/// 绝对值不小于 1e21 时与 JS 相同，退化为 `String(value)`
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() || value.abs() >= 1e21 {
        return js_number_to_string(value);
    }

    // 中点必然是二进制精确可表示的小数，位数有限，宽格式即可判定
    let exact = format!("{:.*}", digits + 40, value.abs());
    let dot = exact.find('.').unwrap_or(exact.len());
    let tail = &exact[dot + 1 + digits..];
    let is_tie = tail.starts_with('5') && tail[1..].bytes().all(|b| b == b'0');

    if !is_tie {
        return format!("{:.*}", digits, value);
    }

    let kept = &exact[..dot + 1 + digits];
    let rounded = increment_decimal(kept);
    if value.is_sign_negative() {
        format!("-{}", rounded)
    } else {
        rounded
    }
}

/// 十进制字符串末位加一（处理进位）
fn increment_decimal(digits: &str) -> String {
    let mut bytes: Vec<u8> = digits.bytes().collect();
    let mut carry = true;

    for byte in bytes.iter_mut().rev() {
        if !carry {
            break;
        }
        match *byte {
            b'.' => continue,
            b'9' => *byte = b'0',
            _ => {
                *byte += 1;
                carry = false;
            }
        }
    }

    let mut result = String::from_utf8(bytes).unwrap_or_default();
    if carry {
        result.insert(0, '1');
    }
    result.trim_end_matches('.').to_string()
}

/// 等价于 JS 的 `String(number)`
///
/// 绝对值 `>= 1e21` 或 `< 1e-6` 时使用指数形式，如 `1e+21`、`1.5e-7`
pub fn js_number_to_string(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        let text = if value > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else if value == 0.0 {
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        exponential_string(value)
    } else {
        format!("{}", value)
    }
}

/// Rust 的 `1.5e-7` / `1e21` → JS 的 `1.5e-7` / `1e+21`
fn exponential_string(value: f64) -> String {
    let text = format!("{:e}", value);
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => text,
    }
}

/// 等价于 `JSON.stringify(value)`：数值按 JS 规则输出，非有限数写作 `null`
fn js_json_stringify(value: &ConcreteValue) -> String {
    let mut out = String::new();
    match value {
        ConcreteValue::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        ConcreteValue::Float(n) => write_json_number(*n, &mut out),
        ConcreteValue::String(s) => write_json_string(s, &mut out),
        ConcreteValue::Color(rgba) => {
            let channels = [("r", rgba.r), ("g", rgba.g), ("b", rgba.b), ("a", rgba.a)];
            out.push('{');
            for (i, (key, channel)) in channels.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_string(key, &mut out);
                out.push(':');
                write_json_number(channel, &mut out);
            }
            out.push('}');
        }
        ConcreteValue::Other(other) => write_json_value(other, &mut out),
    }
    out
}

fn write_json_value(value: &serde_json::Value, out: &mut String) {
    match value {
        serde_json::Value::Null => out.push_str("null"),
        serde_json::Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        serde_json::Value::Number(n) => match n.as_f64() {
            Some(n) => write_json_number(n, out),
            None => out.push_str("null"),
        },
        serde_json::Value::String(s) => write_json_string(s, out),
        serde_json::Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_value(item, out);
            }
            out.push(']');
        }
        serde_json::Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_json_string(key, out);
                out.push(':');
                write_json_value(item, out);
            }
            out.push('}');
        }
    }
}

fn write_json_number(value: f64, out: &mut String) {
    if value.is_finite() {
        out.push_str(&js_number_to_string(value));
    } else {
        out.push_str("null");
    }
}

fn write_json_string(value: &str, out: &mut String) {
    // serde_json 的字符串转义与 JSON.stringify 一致
    out.push_str(&serde_json::Value::from(value).to_string());
}

/// JS `Boolean(value)`
fn coerce_bool(value: &ConcreteValue) -> bool {
    match value {
        ConcreteValue::Boolean(b) => *b,
        ConcreteValue::Float(n) => *n != 0.0 && !n.is_nan(),
        ConcreteValue::String(s) => !s.is_empty(),
        ConcreteValue::Color(_) => true,
        ConcreteValue::Other(other) => match other {
            serde_json::Value::Null => false,
            serde_json::Value::Bool(b) => *b,
            serde_json::Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
            serde_json::Value::String(s) => !s.is_empty(),
            _ => true,
        },
    }
}

/// JS `String(value)`
fn coerce_string(value: &ConcreteValue) -> String {
    match value {
        ConcreteValue::Boolean(b) => b.to_string(),
        ConcreteValue::Float(n) => js_number_to_string(*n),
        ConcreteValue::String(s) => s.clone(),
        ConcreteValue::Color(_) => "[object Object]".to_string(),
        ConcreteValue::Other(other) => match other {
            serde_json::Value::Null => "null".to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            serde_json::Value::Number(n) => n.as_f64().map(js_number_to_string).unwrap_or_default(),
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    serde_json::Value::Null => String::new(),
                    serde_json::Value::String(s) => s.clone(),
                    serde_json::Value::Object(_) => "[object Object]".to_string(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            serde_json::Value::Object(_) => "[object Object]".to_string(),
        },
    }
}
