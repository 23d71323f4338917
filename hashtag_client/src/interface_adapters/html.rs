use crate::domain::{Element, ElementKind};

// Render region contents as the HTML fragment a page would hold.
pub fn render_html(elements: &[Element]) -> String {
    elements
        .iter()
        .map(|element| {
            let tag = match element.kind {
                ElementKind::Chip => "span",
                ElementKind::Paragraph => "p",
            };
            format!(
                r#"<{tag} style="{}">{}</{tag}>"#,
                escape(&element.style.to_css()),
                escape(&element.text)
            )
        })
        .collect()
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
