//! Clock widget: analog face or digital readout for a timezone.

use std::fmt::Write;

use crate::constants::{DEFAULT_CLOCK_TYPE, DEFAULT_TIMEZONE, FAST_REFRESH_MS};
use crate::encode::js_literal;
use crate::error::CoreError;
use crate::params::WidgetParams;
use crate::render::document::{self, Layout};
use crate::style::StyleParams;
use crate::timezones::find_timezone;

/// Face drawn by the clock widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockFace {
    Analog,
    Digital,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClockParams {
    /// IANA zone name, passed to the browser unvalidated.
    pub timezone: String,
    pub face: ClockFace,
    /// Only the literal `12h` clock type selects a 12-hour readout.
    pub hour12: bool,
    pub show_seconds: bool,
    pub style: StyleParams,
}

impl ClockParams {
    #[must_use]
    pub fn from_params(params: &WidgetParams) -> Self {
        let timezone = params.get_or("tz", DEFAULT_TIMEZONE);
        if find_timezone(timezone).is_none() {
            tracing::debug!(timezone, "timezone outside the curated catalogue, passing through");
        }
        let clock_type = params.get_or("clockType", DEFAULT_CLOCK_TYPE);
        Self {
            timezone: timezone.to_owned(),
            face: if clock_type == "analog" { ClockFace::Analog } else { ClockFace::Digital },
            hour12: clock_type == "12h",
            show_seconds: params.flag("seconds"),
            style: StyleParams::from_params(params),
        }
    }
}

pub fn render(params: &ClockParams) -> Result<String, CoreError> {
    let mut out = String::with_capacity(4096);
    let layout = Layout::Centered;
    document::begin(&mut out, &params.style, layout)?;
    match params.face {
        ClockFace::Analog => write_analog(&mut out, params)?,
        ClockFace::Digital => write_digital(&mut out, params)?,
    }
    document::end(&mut out);
    Ok(out)
}

fn write_analog(out: &mut String, params: &ClockParams) -> Result<(), CoreError> {
    let text = &params.style.text_color;
    write!(
        out,
        r#"    .clock-container {{
      display: flex;
      flex-direction: column;
      align-items: center;
      gap: 12px;
    }}
    .analog-clock {{
      width: 200px;
      height: 200px;
      position: relative;
    }}
    .clock-face {{
      width: 100%;
      height: 100%;
      border: 2px solid {text};
      border-radius: 50%;
      position: relative;
    }}
    .hand {{
      position: absolute;
      bottom: 50%;
      left: 50%;
      transform-origin: bottom center;
      background: {text};
      border-radius: 10px;
    }}
    .hour-hand {{
      width: 4px;
      height: 50px;
      margin-left: -2px;
    }}
    .minute-hand {{
      width: 3px;
      height: 70px;
      margin-left: -1.5px;
    }}
    .second-hand {{
      width: 2px;
      height: 80px;
      margin-left: -1px;
      background: {text}80;
    }}
    .center-dot {{
      position: absolute;
      top: 50%;
      left: 50%;
      width: 12px;
      height: 12px;
      background: {text};
      border-radius: 50%;
      transform: translate(-50%, -50%);
    }}
    .digital-time {{
      font-size: 18px;
      font-weight: 500;
      opacity: 0.8;
    }}
"#
    )?;
    document::open_body(out);
    out.push_str(
        r#"  <div class="clock-container">
    <div class="analog-clock">
      <div class="clock-face">
        <div class="hand hour-hand" id="hour"></div>
        <div class="hand minute-hand" id="minute"></div>
"#,
    );
    if params.show_seconds {
        out.push_str("        <div class=\"hand second-hand\" id=\"second\"></div>\n");
    }
    out.push_str(
        r#"        <div class="center-dot"></div>
      </div>
    </div>
    <div class="digital-time" id="time"></div>
  </div>
"#,
    );

    let time_zone = js_literal(&params.timezone)?;
    let second_option = second_option(params.show_seconds);
    let second_hand = if params.show_seconds {
        "\n      document.getElementById('second').style.transform = 'rotate(' + secondDeg + 'deg)';"
    } else {
        ""
    };
    let hour12 = params.hour12;
    write!(
        out,
        r#"  <script>
    const timeZone = {time_zone};

    function updateClock() {{
      const now = new Date(new Date().toLocaleString("en-US", {{ timeZone: timeZone }}));
      const hours = now.getHours();
      const minutes = now.getMinutes();
      const seconds = now.getSeconds();

      const hourDeg = (hours % 12) * 30 + minutes * 0.5;
      const minuteDeg = minutes * 6;
      const secondDeg = seconds * 6;

      document.getElementById('hour').style.transform = 'rotate(' + hourDeg + 'deg)';
      document.getElementById('minute').style.transform = 'rotate(' + minuteDeg + 'deg)';{second_hand}

      document.getElementById('time').textContent = now.toLocaleTimeString("en-US", {{
        hour: '2-digit',
        minute: '2-digit',{second_option}
        hour12: {hour12}
      }});
    }}

    updateClock();
    setInterval(updateClock, {FAST_REFRESH_MS});
  </script>
"#
    )?;
    Ok(())
}

fn write_digital(out: &mut String, params: &ClockParams) -> Result<(), CoreError> {
    out.push_str(
        r#"    .clock {
      font-size: 48px;
      font-weight: 600;
      letter-spacing: 0.02em;
      text-align: center;
    }
    .date {
      font-size: 16px;
      font-weight: 400;
      opacity: 0.7;
      margin-top: 8px;
    }
"#,
    );
    document::open_body(out);
    out.push_str(
        r#"  <div>
    <div class="clock" id="clock"></div>
    <div class="date" id="date"></div>
  </div>
"#,
    );

    let time_zone = js_literal(&params.timezone)?;
    let second_option = second_option(params.show_seconds);
    let hour12 = params.hour12;
    // `now` is already shifted into the target zone, so the date line is
    // formatted without a second timeZone conversion.
    write!(
        out,
        r#"  <script>
    const timeZone = {time_zone};

    function updateClock() {{
      const now = new Date(new Date().toLocaleString("en-US", {{ timeZone: timeZone }}));

      document.getElementById('clock').textContent = now.toLocaleTimeString("en-US", {{
        hour: '2-digit',
        minute: '2-digit',{second_option}
        hour12: {hour12}
      }});
      document.getElementById('date').textContent = now.toLocaleDateString("en-US", {{
        weekday: 'long',
        year: 'numeric',
        month: 'long',
        day: 'numeric'
      }});
    }}

    updateClock();
    setInterval(updateClock, {FAST_REFRESH_MS});
  </script>
"#
    )?;
    Ok(())
}

fn second_option(show_seconds: bool) -> &'static str {
    if show_seconds { "\n        second: '2-digit'," } else { "" }
}
