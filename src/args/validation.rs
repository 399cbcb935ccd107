use serde_json::Value;
use std::{fs, path::PathBuf};

use crate::model::match_play::HOLES_PER_MATCH;

/// # Errors
///
/// Will return `Err` if the file is not readable
pub fn check_readable_file(file: &str) -> Result<String, String> {
    // split by semi-colon
    let files = file.split(';');
    for file in files {
        let path = PathBuf::from(file);
        if !path.is_file() || fs::metadata(&path).is_err() {
            return Err(format!("The sql startup script '{file}' is not readable."));
        }
    }
    Ok(file.to_string())
}

/// # Errors
///
/// Will return `Err` if the file is not readable or is not valid json
///
/// # Panics
///
/// Will panic if the file is not found or the json is not in the correct format
pub fn check_readable_file_and_json(file: &str) -> Result<Value, String> {
    let path = PathBuf::from(file);
    if !path.is_file() || fs::metadata(&path).is_err() {
        return Err(format!("The json file '{file}' is not readable."));
    }
    let contents = fs::read_to_string(&path).unwrap();
    let json: Value = serde_json::from_str(&contents).unwrap();
    validate_json_format(&json)?;
    Ok(json)
}

/// Validate the json file format
/// format we expect is this:
/// [{ "date": "Feb 14 26", "holes": [[4, 5], [3, 3], ... 18 pairs total ...] }, ...]
///
/// # Errors
///
/// Will return `Err` if the json is not in the correct format
///
/// # Panics
///
/// Will panic if the json is not in the correct format
fn validate_json_format(json: &Value) -> Result<(), String> {
    if !json.is_array() {
        return Err("The json file is not in the correct format.".to_string());
    }

    let expected_keys = vec!["date", "holes"];
    for element in json.as_array().unwrap() {
        for key in element.as_object().unwrap().keys() {
            if !expected_keys.contains(&key.as_str()) {
                return Err(format!(
                    "The json file is not in the correct format. Expected keys: {expected_keys:?}"
                ));
            }
        }

        let date = &element["date"];
        if !date.is_string() {
            return Err(
                "The json key date is not in the correct format. Expected a string.".to_string(),
            );
        }

        let holes = &element["holes"];
        if !holes.is_array() {
            return Err(
                "The json key holes is not in the correct format. Expected an array.".to_string(),
            );
        }
        let holes = holes.as_array().unwrap();
        if holes.len() != HOLES_PER_MATCH {
            return Err(format!(
                "The json key holes is not in the correct format. Expected {HOLES_PER_MATCH} score pairs."
            ));
        }
        for pair in holes {
            let ok = pair
                .as_array()
                .is_some_and(|p| p.len() == 2 && p.iter().all(Value::is_u64));
            if !ok {
                return Err(
                    "The json key holes is not in the correct format. Expected pairs of non-negative numbers."
                        .to_string(),
                );
            }
        }
    }

    Ok(())
}
