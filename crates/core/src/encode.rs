//! Context encoders for values interpolated into rendered documents.
//!
//! Each keeps the value the browser sees unchanged while preventing it from
//! closing the element it is written into.

use std::borrow::Cow;

use crate::error::CoreError;

/// Encodes a value for use inside a `<style>` element.
#[must_use]
pub fn css_text(raw: &str) -> String {
    html_escape::encode_style(raw).into_owned()
}

/// Encodes a value for use as HTML element text.
#[must_use]
pub fn html_text(raw: &str) -> Cow<'_, str> {
    html_escape::encode_text(raw)
}

/// Serializes a value as a JSON literal that is safe inside a `<script>` element.
pub fn js_literal<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, CoreError> {
    let json = serde_json::to_string(value)?;
    Ok(html_escape::encode_script(&json).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_text_keeps_ordinary_colours() {
        assert_eq!(css_text("#37352F"), "#37352F");
        assert_eq!(css_text("rgba(0, 0, 0, 0.5)"), "rgba(0, 0, 0, 0.5)");
    }

    #[test]
    fn css_text_cannot_close_style_element() {
        let encoded = css_text("red</style><script>alert(1)</script>");
        assert!(!encoded.to_ascii_lowercase().contains("</style"), "got {encoded}");
    }

    #[test]
    fn html_text_escapes_markup() {
        assert_eq!(html_text("New York"), "New York");
        assert_eq!(html_text("<b>Launch</b> & party"), "&lt;b&gt;Launch&lt;/b&gt; &amp; party");
    }

    #[test]
    fn js_literal_quotes_strings() {
        assert_eq!(js_literal("America/New_York").unwrap(), "\"America/New_York\"");
        assert_eq!(js_literal("say \"hi\"").unwrap(), r#""say \"hi\"""#);
    }

    #[test]
    fn js_literal_cannot_close_script_element() {
        let encoded = js_literal("</script><script>alert(1)//").unwrap();
        assert!(!encoded.to_ascii_lowercase().contains("</script"), "got {encoded}");
    }
}
