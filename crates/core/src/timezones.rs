//! Curated timezone catalogue offered to widget configurators.
//!
//! The clock widget accepts any zone name; this list only drives pickers and
//! the `/api/timezones` listing.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Americas,
    Europe,
    Asia,
    Pacific,
    Africa,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct TimezoneOption {
    /// IANA zone name used as the `tz` parameter.
    pub value: &'static str,
    pub label: &'static str,
    pub region: Region,
}

const fn tz(value: &'static str, label: &'static str, region: Region) -> TimezoneOption {
    TimezoneOption { value, label, region }
}

pub const TIMEZONES: &[TimezoneOption] = &[
    tz("America/New_York", "Eastern Time (EST/EDT)", Region::Americas),
    tz("America/Chicago", "Central Time (CST/CDT)", Region::Americas),
    tz("America/Denver", "Mountain Time (MST/MDT)", Region::Americas),
    tz("America/Los_Angeles", "Pacific Time (PST/PDT)", Region::Americas),
    tz("America/Anchorage", "Alaska Time (AKST/AKDT)", Region::Americas),
    tz("Pacific/Honolulu", "Hawaii Time (HST)", Region::Americas),
    tz("America/Toronto", "Toronto", Region::Americas),
    tz("America/Vancouver", "Vancouver", Region::Americas),
    tz("America/Mexico_City", "Mexico City", Region::Americas),
    tz("America/Sao_Paulo", "São Paulo", Region::Americas),
    tz("America/Buenos_Aires", "Buenos Aires", Region::Americas),
    tz("Europe/London", "London (GMT/BST)", Region::Europe),
    tz("Europe/Paris", "Paris (CET/CEST)", Region::Europe),
    tz("Europe/Berlin", "Berlin (CET/CEST)", Region::Europe),
    tz("Europe/Rome", "Rome (CET/CEST)", Region::Europe),
    tz("Europe/Madrid", "Madrid (CET/CEST)", Region::Europe),
    tz("Europe/Amsterdam", "Amsterdam (CET/CEST)", Region::Europe),
    tz("Europe/Brussels", "Brussels (CET/CEST)", Region::Europe),
    tz("Europe/Vienna", "Vienna (CET/CEST)", Region::Europe),
    tz("Europe/Stockholm", "Stockholm (CET/CEST)", Region::Europe),
    tz("Europe/Athens", "Athens (EET/EEST)", Region::Europe),
    tz("Europe/Istanbul", "Istanbul (TRT)", Region::Europe),
    tz("Europe/Moscow", "Moscow (MSK)", Region::Europe),
    tz("Asia/Dubai", "Dubai (GST)", Region::Asia),
    tz("Asia/Kolkata", "India (IST)", Region::Asia),
    tz("Asia/Bangkok", "Bangkok (ICT)", Region::Asia),
    tz("Asia/Singapore", "Singapore (SGT)", Region::Asia),
    tz("Asia/Hong_Kong", "Hong Kong (HKT)", Region::Asia),
    tz("Asia/Shanghai", "Shanghai (CST)", Region::Asia),
    tz("Asia/Tokyo", "Tokyo (JST)", Region::Asia),
    tz("Asia/Seoul", "Seoul (KST)", Region::Asia),
    tz("Australia/Sydney", "Sydney (AEDT/AEST)", Region::Pacific),
    tz("Australia/Melbourne", "Melbourne (AEDT/AEST)", Region::Pacific),
    tz("Australia/Brisbane", "Brisbane (AEST)", Region::Pacific),
    tz("Australia/Perth", "Perth (AWST)", Region::Pacific),
    tz("Pacific/Auckland", "Auckland (NZDT/NZST)", Region::Pacific),
    tz("Africa/Cairo", "Cairo (EET)", Region::Africa),
    tz("Africa/Johannesburg", "Johannesburg (SAST)", Region::Africa),
    tz("Africa/Lagos", "Lagos (WAT)", Region::Africa),
];

#[must_use]
pub fn find_timezone(value: &str) -> Option<&'static TimezoneOption> {
    TIMEZONES.iter().find(|option| option.value == value)
}
