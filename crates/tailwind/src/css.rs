use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::trace;

/// 单行 CSS 自定义属性声明：缩进、名称、冒号及其后空白、值
static CSS_VARIABLE_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?m)^([ \t]*)--([A-Za-z0-9_-]+)(:[ \t]*)([^;\n]*);").expect("valid regex")
});

/// 替换模板中 `--name: value;` 的值
///
/// 表中没有的属性保持原样，缩进与冒号后的空白不变
pub fn update_css_block(template: &str, values: &IndexMap<String, String>) -> String {
    CSS_VARIABLE_LINE
        .replace_all(template, |caps: &Captures| match values.get(&caps[2]) {
            Some(value) => {
                trace!(property = &caps[2], from = &caps[4], to = %value, "css variable updated");
                format!("{}--{}{}{};", &caps[1], &caps[2], &caps[3], value)
            }
            None => caps[0].to_string(),
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_replace_known_property() {
        let template = "  --spacing-sm: 20px;\n";
        let result = update_css_block(template, &values(&[("spacing-sm", "24px")]));
        assert_eq!(result, "  --spacing-sm: 24px;\n");
    }

    #[test]
    fn test_unknown_property_untouched() {
        let template = "    --background: #ffffff;\n    --foreground:#000;\n";
        let result = update_css_block(template, &values(&[("background", "#fafafa")]));
        assert_eq!(result, "    --background: #fafafa;\n    --foreground:#000;\n");
    }

    #[test]
    fn test_preserves_separator_whitespace() {
        let template = "\t--radius-lg:\t8px;";
        let result = update_css_block(template, &values(&[("radius-lg", "12px")]));
        assert_eq!(result, "\t--radius-lg:\t12px;");
    }

    #[test]
    fn test_value_with_commas_and_parens() {
        let template = "  --overlay: rgba(0, 0, 0, 0.5000);\n";
        let result = update_css_block(
            template,
            &values(&[("overlay", "rgba(10, 20, 30, 0.2500)")]),
        );
        assert_eq!(result, "  --overlay: rgba(10, 20, 30, 0.2500);\n");
    }

    #[test]
    fn test_non_declaration_lines_untouched() {
        let template = "@layer base {\n  :root {\n    --ring: #000;\n  }\n}\n";
        let result = update_css_block(template, &values(&[("ring", "#111")]));
        assert_eq!(result, "@layer base {\n  :root {\n    --ring: #111;\n  }\n}\n");
    }

    #[test]
    fn test_empty_map_is_identity() {
        let template = "  --a: 1;\n  --b: 2;\n";
        assert_eq!(update_css_block(template, &IndexMap::new()), template);
    }
}
