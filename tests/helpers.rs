//! Test utility functions for shrub

#![allow(dead_code)]

use serde_json::Value;
use shrub::Configuration;

/// Render the configuration as JSON and parse it back into a value
pub fn document(config: &Configuration) -> Value {
    let json = config.to_json().expect("configuration should render");
    serde_json::from_str(&json).expect("rendered JSON should parse")
}

/// The `commands` list of the named task in a rendered document
pub fn task_commands<'a>(doc: &'a Value, name: &str) -> &'a Vec<Value> {
    doc["tasks"]
        .as_array()
        .expect("document should have tasks")
        .iter()
        .find(|t| t["name"] == name)
        .unwrap_or_else(|| panic!("task '{}' not in document", name))["commands"]
        .as_array()
        .expect("task should have commands")
}

/// The step key (`func` or `command`) and name of each step
pub fn step_names(steps: &[Value]) -> Vec<String> {
    steps
        .iter()
        .map(|step| {
            step["func"]
                .as_str()
                .or_else(|| step["command"].as_str())
                .unwrap_or_default()
                .to_string()
        })
        .collect()
}
