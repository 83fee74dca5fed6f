//! Output rendering and input pre-processing.

use crate::config::DEFAULT_EMOTICON_HTML;
use regex::NoExpand;
use std::borrow::Cow;

/// How a matched emoticon is written to the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Substitute the identifier into the HTML template.
    #[default]
    Html,
    /// Bracketed name, e.g. `(wink)`.
    Text,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "txt" | "text" => Ok(Format::Text),
            _ => Err(format!("unknown format '{s}' (expected html or txt)")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Renderer {
    template: String,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(DEFAULT_EMOTICON_HTML)
    }
}

impl Renderer {
    pub fn new(template: impl Into<String>) -> Self {
        Self { template: template.into() }
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn render(&self, id: &str, format: Format) -> String {
        match format {
            Format::Html => regex!(r"\{EMOTICON\}").replace_all(&self.template, NoExpand(id)).into_owned(),
            Format::Text => format!("({id})"),
        }
    }
}

/// Decode `&lt;` and `&gt;`, which take part in literals such as `</3`.
pub fn decode_angle_entities(text: &str) -> Cow<'_, str> {
    regex!(r"&(lt|gt);").replace_all(text, |caps: &regex::Captures| if &caps[1] == "lt" { "<" } else { ">" })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn html_replaces_every_placeholder() {
        let r = Renderer::default();
        assert_eq!(r.render("happy", Format::Html), r#"<span class="emoticon-happy" title="happy"></span>"#);
    }

    #[test]
    fn identifier_is_inserted_literally() {
        let r = Renderer::new("<{EMOTICON}/>");
        assert_eq!(r.render("$1", Format::Html), "<$1/>");
    }

    #[test]
    fn template_without_placeholder_is_constant() {
        let r = Renderer::new("<img/>");
        assert_eq!(r.render("wink", Format::Html), "<img/>");
    }

    #[test]
    fn text_format_brackets_the_name() {
        assert_eq!(Renderer::default().render("wink", Format::Text), "(wink)");
    }

    #[test]
    fn format_parses_from_cli_names() {
        assert_eq!("html".parse::<Format>(), Ok(Format::Html));
        assert_eq!("TXT".parse::<Format>(), Ok(Format::Text));
        assert!("xml".parse::<Format>().is_err());
    }

    #[test]
    fn decodes_only_angle_entities() {
        assert_eq!(decode_angle_entities("&lt;/3 &amp; &gt;:("), "</3 &amp; >:(");
        assert!(matches!(decode_angle_entities("plain :)"), Cow::Borrowed(_)));
    }
}
