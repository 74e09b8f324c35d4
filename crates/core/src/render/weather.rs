//! Weather widget with static demo data.
//!
//! No forecast service is queried. The script fills the placeholder from an
//! embedded demo payload and refreshes on a long interval.

use std::fmt::Write;

use serde::Serialize;

use crate::constants::{
    DEFAULT_CITY, DEFAULT_FORECAST, DEFAULT_UNITS, WEATHER_ERROR_MESSAGE, WEATHER_REFRESH_MS,
};
use crate::encode::{html_text, js_literal};
use crate::error::CoreError;
use crate::params::WidgetParams;
use crate::render::document::{self, Layout};
use crate::style::StyleParams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Units {
    Celsius,
    Fahrenheit,
}

impl Units {
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match *self {
            Self::Celsius => "°C",
            Self::Fahrenheit => "°F",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForecastMode {
    Today,
    ThreeDay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherParams {
    pub city: String,
    pub units: Units,
    pub forecast: ForecastMode,
    pub style: StyleParams,
}

impl WeatherParams {
    #[must_use]
    pub fn from_params(params: &WidgetParams) -> Self {
        let units = match params.get_or("units", DEFAULT_UNITS) {
            "celsius" => Units::Celsius,
            _ => Units::Fahrenheit,
        };
        let forecast = match params.get_or("forecast", DEFAULT_FORECAST) {
            "3day" => ForecastMode::ThreeDay,
            _ => ForecastMode::Today,
        };
        Self {
            city: params.get_or("city", DEFAULT_CITY).to_owned(),
            units,
            forecast,
            style: StyleParams::from_params(params),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastDay {
    pub day: &'static str,
    pub temp: i32,
}

/// Payload embedded in the weather script.
#[derive(Debug, Serialize)]
pub struct DemoWeather {
    pub temp: i32,
    pub condition: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forecast: Vec<ForecastDay>,
}

impl DemoWeather {
    #[must_use]
    pub fn new(units: Units, forecast: ForecastMode) -> Self {
        let (today, tomorrow, wed) = match units {
            Units::Celsius => (22, 24, 20),
            Units::Fahrenheit => (72, 75, 68),
        };
        let forecast = match forecast {
            ForecastMode::ThreeDay => vec![
                ForecastDay { day: "Today", temp: today },
                ForecastDay { day: "Tomorrow", temp: tomorrow },
                ForecastDay { day: "Wed", temp: wed },
            ],
            ForecastMode::Today => Vec::new(),
        };
        Self { temp: today, condition: "Partly Cloudy", forecast }
    }
}

pub fn render(params: &WeatherParams) -> Result<String, CoreError> {
    let mut out = String::with_capacity(4096);
    document::begin(&mut out, &params.style, Layout::Flow)?;
    let text = &params.style.text_color;
    write!(
        out,
        r#"    .weather-container {{
      max-width: 400px;
    }}
    .city-name {{
      font-size: 24px;
      font-weight: 600;
      margin-bottom: 16px;
    }}
    .current-weather {{
      display: flex;
      align-items: center;
      gap: 16px;
      margin-bottom: 20px;
    }}
    .temp {{
      font-size: 56px;
      font-weight: 700;
      line-height: 1;
    }}
    .condition {{
      font-size: 18px;
      opacity: 0.8;
    }}
    .forecast-grid {{
      display: grid;
      grid-template-columns: repeat(3, 1fr);
      gap: 12px;
      margin-top: 20px;
    }}
    .forecast-day {{
      text-align: center;
      padding: 12px;
      border: 1px solid {text}20;
      border-radius: 8px;
    }}
    .day-name {{
      font-size: 14px;
      font-weight: 500;
      margin-bottom: 8px;
    }}
    .day-temp {{
      font-size: 20px;
      font-weight: 600;
    }}
    .loading {{
      font-size: 16px;
      opacity: 0.6;
    }}
    .error {{
      color: #ef4444;
      font-size: 14px;
    }}
"#
    )?;
    document::open_body(&mut out);

    let city = html_text(&params.city);
    write!(
        out,
        r#"  <div class="weather-container">
    <div class="city-name">{city}</div>
    <div id="weather-content" class="loading">Loading weather data...</div>
  </div>
"#
    )?;

    let demo = js_literal(&DemoWeather::new(params.units, params.forecast))?;
    let unit = js_literal(params.units.symbol())?;
    let error_html = js_literal(&format!(r#"<div class="error">{WEATHER_ERROR_MESSAGE}</div>"#))?;
    write!(
        out,
        r#"  <script>
    const demoData = {demo};
    const unitSymbol = {unit};

    function updateWeather() {{
      const content = document.getElementById('weather-content');
      try {{
        let html = `
          <div class="current-weather">
            <div class="temp">${{demoData.temp}}${{unitSymbol}}</div>
            <div class="condition">${{demoData.condition}}</div>
          </div>
        `;

        if (demoData.forecast) {{
          html += '<div class="forecast-grid">';
          demoData.forecast.forEach(day => {{
            html += `
              <div class="forecast-day">
                <div class="day-name">${{day.day}}</div>
                <div class="day-temp">${{day.temp}}${{unitSymbol}}</div>
              </div>
            `;
          }});
          html += '</div>';
        }}

        content.innerHTML = html;
      }} catch (error) {{
        content.innerHTML = {error_html};
      }}
    }}

    updateWeather();
    setInterval(updateWeather, {WEATHER_REFRESH_MS});
  </script>
"#
    )?;
    document::end(&mut out);
    Ok(out)
}
