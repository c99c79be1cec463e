//! Render IRCTC train-search payloads as display text.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::render::{field, field_or, join_names};

lazy_static! {
    static ref TRAIN_NUMBER: Regex = Regex::new(r"^\d{4,5}$").expect("train number pattern");
}

/// True iff the string is exactly 4 or 5 decimal digits. No trimming, no
/// partial matches.
pub fn validate_train_number(train_number: &str) -> bool {
    TRAIN_NUMBER.is_match(train_number)
}

/// Format a train-search response body into an itinerary.
///
/// The error staging is deliberate: a missing or empty `body` container
/// and a missing `trains` list report different conditions. An absent or
/// empty schedule still renders the schedule header with no stop lines.
pub fn format_train_details(data: &Value) -> String {
    let results = match data.get("body").and_then(Value::as_array) {
        Some(results) if !results.is_empty() => results,
        _ => return "No data found for this train.".to_string(),
    };

    let trains = match results[0].get("trains").and_then(Value::as_array) {
        Some(trains) if !trains.is_empty() => trains,
        _ => return "Train details not found.".to_string(),
    };
    let train = &trains[0];

    let mut result = format!(
        "\nTrain Details:\nNumber: {}\nName: {}\nFrom: {}\nTo: {}\nType: {}\nClasses: {}\n\nSchedule:",
        field(train, "trainNumber"),
        field(train, "trainName"),
        field(train, "origin"),
        field(train, "destination"),
        join_names(train.get("train_type")),
        join_names(train.get("journeyClasses")),
    );

    if let Some(schedule) = train.get("schedule").and_then(Value::as_array) {
        for stop in schedule {
            result.push_str(&format!(
                "\n• {} ({})\n  Arrival: {} | Departure: {}\n  Distance: {} km",
                field(stop, "stationName"),
                field(stop, "stationCode"),
                field_or(stop, "arrivalTime", "--"),
                field_or(stop, "departureTime", "--"),
                field(stop, "distance"),
            ));
        }
    }

    result
}

/// Format a station-suggest response body into a match list.
pub fn format_station_matches(data: &Value) -> String {
    let stations = match data.get("body").and_then(Value::as_array) {
        Some(stations) if !stations.is_empty() => stations,
        _ => return "No stations found.".to_string(),
    };

    let mut result = format!("\nFound {} matching stations:", stations.len());
    for station in stations {
        result.push_str(&format!(
            "\n• {} ({})",
            field(station, "name"),
            field(station, "code"),
        ));
        if station.get("state").is_some() {
            result.push_str(&format!("\n  State: {}", field(station, "state")));
        }
    }

    result
}
