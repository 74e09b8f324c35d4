//! Countdown widget: days, hours, minutes and seconds until a calendar date.

use std::fmt::Write;

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::constants::{DEFAULT_EVENT_NAME, EVENT_PASSED_MESSAGE, FAST_REFRESH_MS};
use crate::encode::{html_text, js_literal};
use crate::error::CoreError;
use crate::params::WidgetParams;
use crate::render::document::{self, Layout};
use crate::style::StyleParams;

const MS_PER_SECOND: i64 = 1000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// Hour (UTC) of the target date at which local midnight has passed in every
/// timezone down to UTC-12.
const LAST_MIDNIGHT_UTC_HOUR: u32 = 12;

/// One unit of the countdown grid and how it is cut from the millisecond distance.
#[derive(Debug, Clone, Copy)]
struct UnitSplit {
    id: &'static str,
    label: &'static str,
    /// Larger unit removed first; `None` for the largest unit.
    modulus: Option<i64>,
    divisor: i64,
}

impl UnitSplit {
    const fn apply(&self, distance: i64) -> i64 {
        match self.modulus {
            Some(modulus) => (distance % modulus) / self.divisor,
            None => distance / self.divisor,
        }
    }

    /// The same split as a script expression over `distance`.
    fn script_expression(&self) -> String {
        let divisor = self.divisor;
        match self.modulus {
            Some(modulus) => format!("Math.floor((distance % {modulus}) / {divisor})"),
            None => format!("Math.floor(distance / {divisor})"),
        }
    }
}

const UNIT_SPLITS: [UnitSplit; 4] = [
    UnitSplit { id: "days", label: "Days", modulus: None, divisor: MS_PER_DAY },
    UnitSplit { id: "hours", label: "Hours", modulus: Some(MS_PER_DAY), divisor: MS_PER_HOUR },
    UnitSplit { id: "minutes", label: "Minutes", modulus: Some(MS_PER_HOUR), divisor: MS_PER_MINUTE },
    UnitSplit { id: "seconds", label: "Seconds", modulus: Some(MS_PER_MINUTE), divisor: MS_PER_SECOND },
];

/// Time left until a target, split into whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    pub days: i64,
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
}

impl Remaining {
    /// Splits a millisecond distance by truncating division, exactly as the
    /// widget script does.
    ///
    /// Returns `None` once the distance is negative: the target has passed.
    #[must_use]
    pub const fn from_millis(distance: i64) -> Option<Self> {
        if distance < 0 {
            return None;
        }
        Some(Self {
            days: UNIT_SPLITS[0].apply(distance),
            hours: UNIT_SPLITS[1].apply(distance),
            minutes: UNIT_SPLITS[2].apply(distance),
            seconds: UNIT_SPLITS[3].apply(distance),
        })
    }

    #[must_use]
    pub fn between(now: DateTime<Utc>, target: DateTime<Utc>) -> Option<Self> {
        Self::from_millis((target - now).num_milliseconds())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountdownParams {
    pub event_name: String,
    /// Raw date string handed to the browser's date parser.
    pub date: String,
    pub style: StyleParams,
}

impl CountdownParams {
    /// Resolves parameters; a missing date defaults to the UTC date one day after `now`.
    #[must_use]
    pub fn from_params(params: &WidgetParams, now: DateTime<Utc>) -> Self {
        let date = params.get("date").map_or_else(|| default_date(now), str::to_owned);
        Self {
            event_name: params.get_or("event", DEFAULT_EVENT_NAME).to_owned(),
            date,
            style: StyleParams::from_params(params),
        }
    }

    /// Parsed target date, if the raw value is a plain `YYYY-MM-DD` date.
    #[must_use]
    pub fn target_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// True once local midnight of the target date is behind every timezone.
    ///
    /// Unparseable dates are never considered passed here; the browser decides.
    #[must_use]
    pub fn has_passed_everywhere(&self, now: DateTime<Utc>) -> bool {
        self.target_date()
            .and_then(|date| date.and_hms_opt(LAST_MIDNIGHT_UTC_HOUR, 0, 0))
            .is_some_and(|latest| Remaining::between(now, latest.and_utc()).is_none())
    }
}

fn default_date(now: DateTime<Utc>) -> String {
    (now + TimeDelta::days(1)).format("%Y-%m-%d").to_string()
}

pub fn render(params: &CountdownParams, now: DateTime<Utc>) -> Result<String, CoreError> {
    let mut out = String::with_capacity(4096);
    document::begin(&mut out, &params.style, Layout::Centered)?;
    out.push_str(COUNTDOWN_CSS);
    document::open_body(&mut out);

    if params.has_passed_everywhere(now) {
        tracing::debug!(date = %params.date, "countdown target already passed, rendering final state");
        write!(
            out,
            r#"  <div class="countdown-container">
    <div class="event-name">{EVENT_PASSED_MESSAGE}</div>
  </div>
"#
        )?;
        document::end(&mut out);
        return Ok(out);
    }

    let event_name = html_text(&params.event_name);
    write!(
        out,
        r#"  <div class="countdown-container">
    <div class="event-name">{event_name}</div>
    <div class="countdown-grid">
"#
    )?;
    for UnitSplit { id, label, .. } in UNIT_SPLITS {
        write!(
            out,
            r#"      <div class="countdown-item">
        <div class="countdown-value" id="{id}">0</div>
        <div class="countdown-label">{label}</div>
      </div>
"#
        )?;
    }
    out.push_str(
        r#"    </div>
    <div class="event-date" id="event-date"></div>
  </div>
"#,
    );

    let event_date = js_literal(&params.date)?;
    let passed_html = js_literal(&format!(r#"<div class="event-name">{EVENT_PASSED_MESSAGE}</div>"#))?;
    let mut unit_updates = String::new();
    for split in &UNIT_SPLITS {
        let id = split.id;
        let expression = split.script_expression();
        writeln!(unit_updates, "      document.getElementById('{id}').textContent = {expression};")?;
    }
    write!(
        out,
        r#"  <script>
    const eventDate = {event_date};
    const targetDate = new Date(eventDate + "T00:00:00").getTime();

    function updateCountdown() {{
      const distance = targetDate - new Date().getTime();

      if (distance < 0) {{
        document.querySelector('.countdown-container').innerHTML = {passed_html};
        return;
      }}

{unit_updates}    }}

    document.getElementById('event-date').textContent = new Date(eventDate).toLocaleDateString("en-US", {{
      weekday: 'long',
      year: 'numeric',
      month: 'long',
      day: 'numeric'
    }});

    updateCountdown();
    setInterval(updateCountdown, {FAST_REFRESH_MS});
  </script>
"#
    )?;
    document::end(&mut out);
    Ok(out)
}

const COUNTDOWN_CSS: &str = r#"    .countdown-container {
      text-align: center;
      max-width: 500px;
    }
    .event-name {
      font-size: 24px;
      font-weight: 600;
      margin-bottom: 24px;
    }
    .countdown-grid {
      display: grid;
      grid-template-columns: repeat(4, 1fr);
      gap: 16px;
      margin-bottom: 16px;
    }
    .countdown-item {
      display: flex;
      flex-direction: column;
      align-items: center;
    }
    .countdown-value {
      font-size: 48px;
      font-weight: 700;
      line-height: 1;
    }
    .countdown-label {
      font-size: 14px;
      opacity: 0.7;
      margin-top: 8px;
      text-transform: uppercase;
      letter-spacing: 0.05em;
    }
    .event-date {
      font-size: 16px;
      opacity: 0.6;
      margin-top: 12px;
    }
"#;

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 10, 9, 0, 0).unwrap()
    }

    fn params_with(pairs: &[(&str, &str)]) -> CountdownParams {
        let params: WidgetParams = pairs.iter().copied().collect();
        CountdownParams::from_params(&params, fixed_now())
    }

    #[test]
    fn two_days_three_hours_has_no_remainder() {
        let now = fixed_now();
        let target = now + TimeDelta::days(2) + TimeDelta::hours(3);
        let remaining = Remaining::between(now, target).unwrap();
        assert_eq!(remaining, Remaining { days: 2, hours: 3, minutes: 0, seconds: 0 });
    }

    #[test]
    fn decomposition_truncates_partial_seconds() {
        let distance = MS_PER_DAY + 5 * MS_PER_HOUR + 7 * MS_PER_MINUTE + 9 * MS_PER_SECOND + 999;
        assert_eq!(
            Remaining::from_millis(distance),
            Some(Remaining { days: 1, hours: 5, minutes: 7, seconds: 9 })
        );
        assert_eq!(
            Remaining::from_millis(0),
            Some(Remaining { days: 0, hours: 0, minutes: 0, seconds: 0 })
        );
    }

    #[test]
    fn negative_distance_is_passed() {
        assert_eq!(Remaining::from_millis(-1), None);
        let now = fixed_now();
        assert_eq!(Remaining::between(now, now - TimeDelta::seconds(1)), None);
    }

    #[test]
    fn defaults_to_event_tomorrow() {
        let params = params_with(&[]);
        assert_eq!(params.event_name, "Event");
        assert_eq!(params.date, "2026-03-11");
        assert!(!params.has_passed_everywhere(fixed_now()));
    }

    #[test]
    fn pending_countdown_renders_grid_and_script() {
        let params = params_with(&[("event", "Launch"), ("date", "2026-03-12")]);
        let doc = render(&params, fixed_now()).unwrap();
        assert!(doc.contains(r#"<div class="event-name">Launch</div>"#));
        for id in ["days", "hours", "minutes", "seconds"] {
            assert!(doc.contains(&format!(r#"id="{id}""#)), "missing {id}");
        }
        assert!(doc.contains(r#"const eventDate = "2026-03-12";"#));
        assert!(doc.contains("Math.floor(distance / 86400000)"));
        assert!(doc.contains("setInterval(updateCountdown, 1000)"));
    }

    #[test]
    fn past_date_renders_final_message() {
        let params = params_with(&[("event", "Launch"), ("date", "2020-01-01")]);
        let doc = render(&params, fixed_now()).unwrap();
        assert!(doc.contains("Event has passed!"));
        assert!(!doc.contains("countdown-grid\">"));
        assert!(!doc.contains("<script>"));
    }

    #[test]
    fn target_day_is_not_passed_until_midnight_everywhere() {
        let params = params_with(&[("date", "2026-03-10")]);
        let last_midnight = Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap();
        assert!(!params.has_passed_everywhere(last_midnight - TimeDelta::seconds(1)));
        assert!(!params.has_passed_everywhere(last_midnight));
        assert!(params.has_passed_everywhere(last_midnight + TimeDelta::milliseconds(1)));
    }

    /// Evaluates one emitted `Math.floor(...)` unit expression for `distance`.
    fn eval_unit_expression(expression: &str, distance: i64) -> i64 {
        let numbers: Vec<i64> = expression
            .split(|c: char| !c.is_ascii_digit())
            .filter(|part| !part.is_empty())
            .map(|part| part.parse().unwrap())
            .collect();
        match numbers.as_slice() {
            [divisor] if expression.starts_with("Math.floor(distance / ") => distance / divisor,
            [modulus, divisor] if expression.starts_with("Math.floor((distance % ") => {
                (distance % modulus) / divisor
            }
            _ => panic!("unexpected unit expression: {expression}"),
        }
    }

    #[test]
    fn script_unit_expressions_match_server_decomposition() {
        let params = params_with(&[("date", "2026-03-12")]);
        let doc = render(&params, fixed_now()).unwrap();
        let expression_for = |id: &str| {
            let prefix = format!("document.getElementById('{id}').textContent = ");
            let start = doc.find(&prefix).unwrap_or_else(|| panic!("no update for {id}")) + prefix.len();
            let end = start + doc[start..].find(';').unwrap();
            doc[start..end].to_owned()
        };

        assert_eq!(expression_for("days"), format!("Math.floor(distance / {MS_PER_DAY})"));
        assert_eq!(expression_for("hours"), format!("Math.floor((distance % {MS_PER_DAY}) / {MS_PER_HOUR})"));
        assert_eq!(
            expression_for("minutes"),
            format!("Math.floor((distance % {MS_PER_HOUR}) / {MS_PER_MINUTE})")
        );
        assert_eq!(
            expression_for("seconds"),
            format!("Math.floor((distance % {MS_PER_MINUTE}) / {MS_PER_SECOND})")
        );

        let two_days_three_hours = 2 * MS_PER_DAY + 3 * MS_PER_HOUR;
        for distance in [0, 999, two_days_three_hours, MS_PER_DAY + 5 * MS_PER_HOUR + 7 * MS_PER_MINUTE + 9_999] {
            let expected = Remaining::from_millis(distance).unwrap();
            let from_script = Remaining {
                days: eval_unit_expression(&expression_for("days"), distance),
                hours: eval_unit_expression(&expression_for("hours"), distance),
                minutes: eval_unit_expression(&expression_for("minutes"), distance),
                seconds: eval_unit_expression(&expression_for("seconds"), distance),
            };
            assert_eq!(from_script, expected, "distance {distance}");
        }
    }

    #[test]
    fn unparseable_date_is_left_to_the_browser() {
        let params = params_with(&[("date", "someday")]);
        assert_eq!(params.target_date(), None);
        assert!(!params.has_passed_everywhere(fixed_now()));
        let doc = render(&params, fixed_now()).unwrap();
        assert!(doc.contains(r#"const eventDate = "someday";"#));
    }
}
