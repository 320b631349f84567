use std::cmp::Ordering;

/// 没有分类的变量统一归入此键
pub const UNCATEGORIZED: &str = "uncategorized";

/// 变量名拆分结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitName {
    pub category_key: String,
    pub segments: Vec<String>,
}

/// 拆分变量名
///
/// - "Spacing/sm" → `spacing` + `["sm"]`
/// - "Primary" → `uncategorized` + `["primary"]`
/// - "" → `uncategorized` + `[]`
pub fn split_variable_name(name: &str) -> SplitName {
    let parts: Vec<&str> = name
        .trim()
        .split('/')
        .filter(|part| !part.is_empty())
        .collect();

    match parts.as_slice() {
        [] => SplitName {
            category_key: UNCATEGORIZED.to_string(),
            segments: Vec::new(),
        },
        [only] => SplitName {
            category_key: UNCATEGORIZED.to_string(),
            segments: vec![normalize_token_segment(only)],
        },
        [first, rest @ ..] => SplitName {
            category_key: normalize_category_key(first),
            segments: rest.iter().map(|s| normalize_token_segment(s)).collect(),
        },
    }
}

/// 去掉 "1. " 这类编号前缀
///
/// 只有数字后紧跟 `.` 时才视为前缀，如 "2xl" 保持不变
pub fn strip_numeric_prefix(raw: &str) -> &str {
    let digits = raw.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return raw;
    }
    match raw[digits..].strip_prefix('.') {
        Some(rest) => rest.trim_start(),
        None => raw,
    }
}

/// 规范化分类键，如 "1. Colors" → "color"，"Border Width" → "border-width"
pub fn normalize_category_key(raw: &str) -> String {
    let key = kebab_case(strip_numeric_prefix(raw.trim()));
    match key.as_str() {
        "" => UNCATEGORIZED.to_string(),
        "colors" => "color".to_string(),
        _ => key,
    }
}

/// 规范化路径片段，空结果回退为 "value"
pub fn normalize_token_segment(segment: &str) -> String {
    let normalized = kebab_case(segment);
    if normalized.is_empty() {
        "value".to_string()
    } else {
        normalized
    }
}

/// 为没有路径片段的变量生成叶子名称
pub fn format_token_label(name: &str, category_key: &str) -> String {
    let cleaned = strip_numeric_prefix(name.trim()).trim();

    let label = if cleaned.contains('/') {
        cleaned
            .rsplit('/')
            .find(|part| !part.trim().is_empty())
            .map(kebab_case)
            .unwrap_or_default()
    } else {
        kebab_case(cleaned)
    };

    if !label.is_empty() {
        label
    } else if !category_key.is_empty() {
        category_key.to_string()
    } else {
        "value".to_string()
    }
}

/// 集合名称清洗：去编号前缀，"Colors" 统一为 "color"，其余保持原样大小写
pub fn sanitize_collection_name(raw: &str) -> String {
    let cleaned = strip_numeric_prefix(raw.trim()).trim();
    if cleaned.is_empty() {
        raw.trim().to_string()
    } else if cleaned.eq_ignore_ascii_case("colors") {
        "color".to_string()
    } else {
        cleaned.to_string()
    }
}

/// 空白/下划线连续段替换为 `-`，合并重复的 `-`，转小写
fn kebab_case(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut pending_dash = false;

    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '_' || ch == '-' {
            pending_dash = true;
            continue;
        }
        if pending_dash {
            result.push('-');
            pending_dash = false;
        }
        result.extend(ch.to_lowercase());
    }

    if pending_dash {
        result.push('-');
    }

    result
}

/// 自然排序：忽略大小写逐字符比较，连续数字按数值比较（"item2" < "item10"）
///
/// 仅在忽略大小写后完全相等时才按原始字节区分，保证全序
pub fn compare_natural(a: &str, b: &str) -> Ordering {
    let mut left = a.chars().peekable();
    let mut right = b.chars().peekable();

    loop {
        match (left.peek().copied(), right.peek().copied()) {
            (None, None) => return compare_case_tiebreak(a, b),
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(l), Some(r)) if l.is_ascii_digit() && r.is_ascii_digit() => {
                let l_digits = take_digits(&mut left);
                let r_digits = take_digits(&mut right);
                let ordering = compare_digit_runs(&l_digits, &r_digits);
                if ordering != Ordering::Equal {
                    return ordering;
                }
            }
            (Some(l), Some(r)) => {
                let ordering = l.to_lowercase().cmp(r.to_lowercase());
                if ordering != Ordering::Equal {
                    return ordering;
                }
                left.next();
                right.next();
            }
        }
    }
}

/// 忽略大小写相等时的次序：同一位置小写在前，其余按码点
fn compare_case_tiebreak(a: &str, b: &str) -> Ordering {
    for (l, r) in a.chars().zip(b.chars()) {
        if l == r {
            continue;
        }
        return match (l.is_lowercase(), r.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => l.cmp(&r),
        };
    }
    a.len().cmp(&b.len())
}

fn take_digits(chars: &mut std::iter::Peekable<std::str::Chars<'_>>) -> String {
    let mut digits = String::new();
    while let Some(&ch) = chars.peek() {
        if !ch.is_ascii_digit() {
            break;
        }
        digits.push(ch);
        chars.next();
    }
    digits
}

fn compare_digit_runs(a: &str, b: &str) -> Ordering {
    let a_trimmed = a.trim_start_matches('0');
    let b_trimmed = b.trim_start_matches('0');
    a_trimmed
        .len()
        .cmp(&b_trimmed.len())
        .then_with(|| a_trimmed.cmp(b_trimmed))
}
