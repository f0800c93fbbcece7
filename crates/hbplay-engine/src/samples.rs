//! Starter documents shown when the playground opens without files.

/// Sample template source for the Template tab.
pub const SAMPLE_TEMPLATE: &str = r#"<h1>{{title}}</h1>

<ul>
{{#each people}}
  <li>{{name}} ({{role}})</li>
{{/each}}
</ul>

{{#if show_footer}}
<p>{{footer}}</p>
{{/if}}
"#;

/// Sample JSON context for the Context tab.
pub const SAMPLE_CONTEXT: &str = r#"{
  "title": "hbplay",
  "people": [
    { "name": "Ada", "role": "engineer" },
    { "name": "Grace", "role": "admiral" }
  ],
  "show_footer": true,
  "footer": "Edit either pane; the preview follows."
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_context_is_valid_json() {
        let value: serde_json::Value = serde_json::from_str(SAMPLE_CONTEXT).unwrap();
        assert!(value.get("title").is_some());
    }
}
