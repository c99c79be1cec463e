use serde_json::{json, Value};

use sahayak_server::weather::format::{format_current, format_forecast};

fn sample_weather() -> Value {
    json!({
        "main": { "temp": 25, "feels_like": 26, "humidity": 60, "pressure": 1012 },
        "weather": [{ "main": "Clear", "description": "clear sky" }],
        "wind": { "speed": 3.1 }
    })
}

#[test]
fn test_current_absent_payload() {
    assert_eq!(format_current(None, None), "Unable to fetch weather data.");
    assert_eq!(
        format_current(Some(&json!({})), None),
        "Unable to fetch weather data."
    );
    assert_eq!(
        format_current(Some(&Value::Null), None),
        "Unable to fetch weather data."
    );
}

#[test]
fn test_current_full_render() {
    let report = format_current(Some(&sample_weather()), None);
    assert_eq!(
        report,
        "\nCurrent Weather:\nTemperature: 25°C\nFeels Like: 26°C\nCondition: Clear - clear sky\nHumidity: 60%\nWind Speed: 3.1 m/s\nPressure: 1012 hPa\n"
    );
}

#[test]
fn test_current_omits_rain_line_without_pop() {
    let report = format_current(Some(&sample_weather()), None);
    assert!(!report.contains("Chance of Rain"));
}

#[test]
fn test_current_appends_rain_line_with_pop() {
    let report = format_current(Some(&sample_weather()), Some(0.42));
    assert!(report.ends_with("Pressure: 1012 hPa\nChance of Rain: 42%\n"));
}

#[test]
fn test_rain_percentage_truncates_toward_zero() {
    let report = format_current(Some(&sample_weather()), Some(0.425));
    assert!(report.contains("Chance of Rain: 42%"));
    let report = format_current(Some(&sample_weather()), Some(0.0));
    assert!(report.contains("Chance of Rain: 0%"));
}

#[test]
fn test_current_missing_subobject_aborts_whole_render() {
    // wind gone
    let mut data = sample_weather();
    data.as_object_mut().unwrap().remove("wind");
    assert_eq!(
        format_current(Some(&data), None),
        "Error formatting weather data."
    );

    // weather list empty
    let mut data = sample_weather();
    data["weather"] = json!([]);
    assert_eq!(
        format_current(Some(&data), Some(0.5)),
        "Error formatting weather data."
    );
}

#[test]
fn test_current_missing_leaf_renders_placeholder() {
    let mut data = sample_weather();
    data["main"].as_object_mut().unwrap().remove("temp");
    let report = format_current(Some(&data), None);
    assert!(report.contains("Temperature: N/A°C"));
    assert!(report.contains("Feels Like: 26°C"));
}

fn forecast_entry(time: &str) -> Value {
    json!({
        "dt_txt": time,
        "main": { "temp": 18.5, "humidity": 70 },
        "weather": [{ "main": "Rain", "description": "light rain" }],
        "pop": 0.8
    })
}

#[test]
fn test_forecast_absent_payload() {
    assert_eq!(format_forecast(None), "Unable to fetch forecast data.");
    assert_eq!(
        format_forecast(Some(&json!({}))),
        "Unable to fetch forecast data."
    );
    assert_eq!(
        format_forecast(Some(&json!({ "list": "oops" }))),
        "Unable to fetch forecast data."
    );
}

#[test]
fn test_forecast_caps_at_five_entries_in_order() {
    let entries: Vec<Value> = (0..7)
        .map(|i| forecast_entry(&format!("2026-08-0{} 12:00:00", i + 1)))
        .collect();
    let report = format_forecast(Some(&json!({ "list": entries })));

    assert_eq!(report.matches("Time:").count(), 5);
    assert_eq!(report.matches("\n---\n").count(), 4);
    assert!(report.starts_with("\nTime: 2026-08-01 12:00:00\n"));
    assert!(report.contains("2026-08-05"));
    assert!(!report.contains("2026-08-06"));
}

#[test]
fn test_forecast_block_layout() {
    let report = format_forecast(Some(&json!({ "list": [forecast_entry("2026-08-06 09:00:00")] })));
    assert_eq!(
        report,
        "\nTime: 2026-08-06 09:00:00\nTemperature: 18.5°C\nCondition: Rain - light rain\nHumidity: 70%\nChance of Rain: 80%\n"
    );
}

#[test]
fn test_forecast_pop_defaults_to_zero() {
    let mut entry = forecast_entry("2026-08-06 09:00:00");
    entry.as_object_mut().unwrap().remove("pop");
    let report = format_forecast(Some(&json!({ "list": [entry] })));
    assert!(report.contains("Chance of Rain: 0%"));
}

#[test]
fn test_forecast_one_bad_entry_spoils_the_batch() {
    let mut entries: Vec<Value> = (0..5)
        .map(|i| forecast_entry(&format!("2026-08-0{} 12:00:00", i + 1)))
        .collect();
    entries[2].as_object_mut().unwrap().remove("weather");

    assert_eq!(
        format_forecast(Some(&json!({ "list": entries }))),
        "Error formatting forecast data."
    );
}

#[test]
fn test_forecast_missing_timestamp_renders_placeholder() {
    let mut entry = forecast_entry("ignored");
    entry.as_object_mut().unwrap().remove("dt_txt");
    let report = format_forecast(Some(&json!({ "list": [entry] })));
    assert!(report.starts_with("\nTime: N/A\n"));
}

#[test]
fn test_formatting_is_idempotent() {
    let data = sample_weather();
    assert_eq!(
        format_current(Some(&data), Some(0.3)),
        format_current(Some(&data), Some(0.3))
    );

    let forecast = json!({ "list": [forecast_entry("2026-08-06 09:00:00")] });
    assert_eq!(
        format_forecast(Some(&forecast)),
        format_forecast(Some(&forecast))
    );
}
