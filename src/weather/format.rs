//! Render OpenWeatherMap payloads as display text.
//!
//! Payloads are untrusted and may be partial. The fallback policy has two
//! tiers: a missing required sub-object (`main`, `weather[0]`, `wind`, the
//! forecast `list`) collapses the whole render into a fixed error string,
//! while a missing leaf field degrades to `"N/A"` and rendering continues.

use serde_json::Value;

use crate::render::field;

/// Forecast periods rendered regardless of how many the API returns.
const FORECAST_PERIODS: usize = 5;

/// Percentage for a probability in [0, 1], truncated toward zero.
fn rain_chance(pop: f64) -> i64 {
    (pop * 100.0) as i64
}

/// The sub-objects every snapshot must carry to be renderable.
fn snapshot_parts(entry: &Value) -> Option<(&Value, &Value)> {
    let main = entry.get("main")?;
    let weather = entry.get("weather")?.get(0)?;
    Some((main, weather))
}

/// Format a current-weather payload.
///
/// `pop` is the precipitation probability recovered from a separate
/// forecast call. When it is absent the chance-of-rain line is omitted
/// entirely rather than rendered with a placeholder; forecast entries
/// behave differently (see [`format_forecast`]).
pub fn format_current(data: Option<&Value>, pop: Option<f64>) -> String {
    let data = match data {
        None | Some(Value::Null) => return "Unable to fetch weather data.".to_string(),
        Some(data) if data.as_object().is_some_and(|map| map.is_empty()) => {
            return "Unable to fetch weather data.".to_string();
        }
        Some(data) => data,
    };

    let (main, weather) = match snapshot_parts(data) {
        Some(parts) => parts,
        None => return "Error formatting weather data.".to_string(),
    };
    let wind = match data.get("wind") {
        Some(wind) => wind,
        None => return "Error formatting weather data.".to_string(),
    };

    let pop_text = match pop {
        Some(pop) => format!("\nChance of Rain: {}%", rain_chance(pop)),
        None => String::new(),
    };

    format!(
        "\nCurrent Weather:\nTemperature: {}°C\nFeels Like: {}°C\nCondition: {} - {}\nHumidity: {}%\nWind Speed: {} m/s\nPressure: {} hPa{}\n",
        field(main, "temp"),
        field(main, "feels_like"),
        field(weather, "main"),
        field(weather, "description"),
        field(main, "humidity"),
        field(wind, "speed"),
        field(main, "pressure"),
        pop_text,
    )
}

/// Format a forecast payload: the first five periods in upstream order,
/// joined with a `---` separator line.
///
/// One malformed period spoils the whole batch; there is no per-entry
/// skip. Unlike the current-weather render, every period prints a
/// chance-of-rain line, defaulting to 0% when `pop` is absent.
pub fn format_forecast(data: Option<&Value>) -> String {
    let entries = match data.and_then(|data| data.get("list")).and_then(Value::as_array) {
        Some(entries) => entries,
        None => return "Unable to fetch forecast data.".to_string(),
    };

    let mut blocks = Vec::new();
    for entry in entries.iter().take(FORECAST_PERIODS) {
        let (main, weather) = match snapshot_parts(entry) {
            Some(parts) => parts,
            None => return "Error formatting forecast data.".to_string(),
        };
        let pop = entry.get("pop").and_then(Value::as_f64).unwrap_or(0.0);

        blocks.push(format!(
            "\nTime: {}\nTemperature: {}°C\nCondition: {} - {}\nHumidity: {}%\nChance of Rain: {}%\n",
            field(entry, "dt_txt"),
            field(main, "temp"),
            field(weather, "main"),
            field(weather, "description"),
            field(main, "humidity"),
            rain_chance(pop),
        ));
    }

    blocks.join("\n---\n")
}
