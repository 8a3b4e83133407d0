//! Built-in home page shown in new tabs

const HOME_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>New Tab</title></head>
<body style="background:#121212;color:white;font-family:Segoe UI,sans-serif;text-align:center">
<h1>🌙 Moonshine</h1>
<input id="q" autofocus
  style="width:60%;padding:12px;font-size:18px;border-radius:8px;border:none"
  placeholder="Search or enter address">
<script>
const template = {{TEMPLATE}};
document.getElementById('q').addEventListener('keydown', (event) => {
  if (event.key === 'Enter' && event.target.value.trim()) {
    location = template.replace('%s', encodeURIComponent(event.target.value));
  }
});
</script>
</body>
</html>
"#;

/// Home page markup searching with `search_template`
pub fn home_markup(search_template: &str) -> String {
    // JSON string literal, with `<` escaped so it cannot close the script
    let literal = serde_json::to_string(search_template)
        .unwrap_or_else(|_| "\"\"".to_string())
        .replace('<', "\\u003c");
    HOME_TEMPLATE.replace("{{TEMPLATE}}", &literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_embedded() {
        let markup = home_markup("https://duckduckgo.com/?q=%s");
        assert!(markup.contains(r#"const template = "https://duckduckgo.com/?q=%s";"#));
        assert!(!markup.contains("{{TEMPLATE}}"));
    }

    #[test]
    fn test_template_cannot_break_out_of_script() {
        let markup = home_markup("https://x.test/?q=%s</script><b>");
        assert!(!markup.contains("%s</script>"));
        assert!(markup.contains("\\u003c/script>"));
    }
}
