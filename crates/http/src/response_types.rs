//! Response types (Serialize)

use serde::Serialize;
use widget_embed_core::TimezoneOption;

#[derive(Debug, Serialize)]
pub struct VersionResponse {
    pub version: &'static str,
}

#[derive(Debug, Serialize)]
pub struct TimezonesResponse {
    pub timezones: &'static [TimezoneOption],
    pub default: &'static str,
}
