//! Parameter normalizer for the styling shared by every widget.
//!
//! Both resolvers are total: unknown or empty names fall through to the
//! default rather than failing.

use crate::constants::{DEFAULT_BACKGROUND, DEFAULT_TEXT_COLOR};
use crate::encode::css_text;
use crate::params::WidgetParams;

pub const SANS_FONT_STACK: &str = "ui-sans-serif, -apple-system, BlinkMacSystemFont, 'Segoe UI', Helvetica, 'Apple Color Emoji', Arial, sans-serif, 'Segoe UI Emoji', 'Segoe UI Symbol'";
pub const SERIF_FONT_STACK: &str = "ui-serif, Georgia, Cambria, 'Times New Roman', Times, serif";
pub const MONO_FONT_STACK: &str = "ui-monospace, 'Cascadia Code', 'Source Code Pro', Menlo, Consolas, 'DejaVu Sans Mono', monospace";

pub const PADDING_SMALL: &str = "12px";
pub const PADDING_MEDIUM: &str = "20px";
pub const PADDING_LARGE: &str = "32px";

/// CSS font stack for a font choice (`serif`, `mono`, anything else is sans).
#[must_use]
pub fn resolve_font_family(name: &str) -> &'static str {
    match name {
        "serif" => SERIF_FONT_STACK,
        "mono" => MONO_FONT_STACK,
        _ => SANS_FONT_STACK,
    }
}

/// CSS length for a padding choice (`small`, `large`, anything else is medium).
#[must_use]
pub fn resolve_padding(name: &str) -> &'static str {
    match name {
        "small" => PADDING_SMALL,
        "large" => PADDING_LARGE,
        _ => PADDING_MEDIUM,
    }
}

/// Styling parameters consumed by all three renderers.
///
/// Colours are not validated as CSS; they are only encoded so they cannot
/// close the surrounding `<style>` element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleParams {
    pub background: String,
    pub text_color: String,
    pub font_family: &'static str,
    pub padding: &'static str,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self::from_params(&WidgetParams::new())
    }
}

impl StyleParams {
    #[must_use]
    pub fn from_params(params: &WidgetParams) -> Self {
        Self {
            background: css_text(params.get_or("bg", DEFAULT_BACKGROUND)),
            text_color: css_text(params.get_or("color", DEFAULT_TEXT_COLOR)),
            font_family: resolve_font_family(params.get_or("font", "sans")),
            padding: resolve_padding(params.get_or("padding", "medium")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn font_family_has_three_outputs() {
        assert_eq!(resolve_font_family("serif"), SERIF_FONT_STACK);
        assert_eq!(resolve_font_family("mono"), MONO_FONT_STACK);
        for other in ["", "sans", "Serif", "monospace", "comic", "🙂"] {
            assert_eq!(resolve_font_family(other), SANS_FONT_STACK, "input {other:?}");
        }
    }

    #[test]
    fn padding_has_three_outputs() {
        assert_eq!(resolve_padding("small"), "12px");
        assert_eq!(resolve_padding("large"), "32px");
        for other in ["", "medium", "LARGE", "huge", "12px"] {
            assert_eq!(resolve_padding(other), "20px", "input {other:?}");
        }
    }

    #[test]
    fn defaults_when_nothing_supplied() {
        let style = StyleParams::default();
        assert_eq!(style.background, "#ffffff");
        assert_eq!(style.text_color, "#37352F");
        assert_eq!(style.font_family, SANS_FONT_STACK);
        assert_eq!(style.padding, "20px");
    }

    #[test]
    fn colours_pass_through_unvalidated() {
        let params: WidgetParams =
            [("bg", "not-a-colour"), ("color", "rgb(1, 2, 3)"), ("font", "mono"), ("padding", "small")]
                .into_iter()
                .collect();
        let style = StyleParams::from_params(&params);
        assert_eq!(style.background, "not-a-colour");
        assert_eq!(style.text_color, "rgb(1, 2, 3)");
        assert_eq!(style.font_family, MONO_FONT_STACK);
        assert_eq!(style.padding, "12px");
    }
}
