//! Core types and renderers for widget-embed
//!
//! Widget kinds, query parameter normalization, and the HTML renderers for
//! the clock, weather and countdown widgets. Everything here is pure: no I/O,
//! no shared state.

pub mod constants;
pub mod encode;
pub mod env_config;
mod error;
mod params;
pub mod render;
pub mod style;
pub mod timezones;
mod widget_kind;

pub use constants::*;
pub use env_config::{env_parse_with_default, RenderSettings};
pub use error::*;
pub use params::*;
pub use render::{render_widget, render_widget_at};
pub use style::{resolve_font_family, resolve_padding, StyleParams};
pub use timezones::{find_timezone, TimezoneOption, TIMEZONES};
pub use widget_kind::WidgetKind;
