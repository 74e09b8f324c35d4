//! Document skeleton shared by every widget.

use std::fmt::{self, Write};

use crate::style::StyleParams;

/// How the widget body is placed inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Layout {
    /// Content centred both ways in the viewport.
    Centered,
    /// Content flows from the top-left corner.
    Flow,
}

/// Writes the doctype, head metadata, reset rules and the styled `body` rule,
/// leaving the `<style>` element open for widget-specific rules.
pub(crate) fn begin(out: &mut String, style: &StyleParams, layout: Layout) -> fmt::Result {
    let StyleParams { background, text_color, font_family, padding } = style;
    write!(
        out,
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <style>
    * {{ margin: 0; padding: 0; box-sizing: border-box; }}
    body {{
      font-family: {font_family};
      background: {background};
      color: {text_color};
      padding: {padding};
"#
    )?;
    if layout == Layout::Centered {
        out.push_str(
            "      display: flex;\n      align-items: center;\n      justify-content: center;\n",
        );
    }
    out.push_str("      min-height: 100vh;\n    }\n");
    Ok(())
}

/// Closes the `<style>` and `<head>` elements and opens `<body>`.
pub(crate) fn open_body(out: &mut String) {
    out.push_str("  </style>\n</head>\n<body>\n");
}

/// Closes `<body>` and `<html>`.
pub(crate) fn end(out: &mut String) {
    out.push_str("</body>\n</html>\n");
}
