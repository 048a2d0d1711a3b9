//! Shared helpers for fsq end-to-end tests

#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::{json, Value};
use std::path::Path;

/// Environment variables the CLI reads; cleared so the host setup never leaks in
const FSQ_VARS: &[&str] = &[
    "FSQ_CLIENT_ID",
    "FSQ_CLIENT_SECRET",
    "FSQ_API_URL",
    "FSQ_API_VERSION",
    "FSQ_ICON_BASE_URL",
    "FSQ_CATEGORIES_FILE",
    "FSQ_OUTPUT_DIR",
    "FSQ_CATEGORY_IDS",
    "FSQ_TIMEOUT_SECS",
    "LOG_LEVEL",
    "LOG_OUTPUT",
];

/// `fsq` running in `dir` with a clean environment
pub fn fsq(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("fsq").expect("fsq binary should be built");
    cmd.current_dir(dir);
    for var in FSQ_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// `fsq` pointed at a mock server for both the API and icon images
pub fn fsq_with_server(dir: &Path, server_uri: &str) -> Command {
    let mut cmd = fsq(dir);
    cmd.env("FSQ_CLIENT_ID", "test-id")
        .env("FSQ_CLIENT_SECRET", "test-secret")
        .env("FSQ_API_VERSION", "20140806")
        .env("FSQ_API_URL", format!("{}/v2", server_uri))
        .env("FSQ_ICON_BASE_URL", format!("{}/img/categories_v2/", server_uri));
    cmd
}

fn category(id: &str, name: &str, icon_path: &str, children: Vec<Value>) -> Value {
    json!({
        "id": id,
        "name": name,
        "pluralName": name,
        "shortName": name,
        "icon": {
            "prefix": format!("https://ss3.4sqi.net/img/categories_v2/{}", icon_path),
            "suffix": ".png"
        },
        "categories": children
    })
}

/// A trimmed-down copy of the real taxonomy
///
/// Food has its own icon plus two children sharing the branch default icon
/// with Food itself, Nightlife Spot is selected by default, Outdoors is not.
pub fn sample_taxonomy() -> Value {
    json!({
        "categories": [
            category("4d4b7105d754a06374d81259", "Food", "food/default_", vec![
                category("4bf58dd8d48988d10a941735", "Ethiopian Restaurant", "food/ethiopian_", vec![]),
                category("4bf58dd8d48988d1c4941735", "Restaurant", "food/default_", vec![]),
                category("4bf58dd8d48988d142941735", "Asian Restaurant", "food/asian_", vec![
                    category("4bf58dd8d48988d1d2941735", "Sushi Restaurant", "food/sushi_", vec![]),
                ]),
            ]),
            category("4d4b7105d754a06376d81259", "Nightlife Spot", "nightlife/default_", vec![
                category("4bf58dd8d48988d11f941735", "Nightclub", "nightlife/nightclub_", vec![]),
            ]),
            category("4d4b7105d754a06377d81259", "Outdoors & Recreation", "parks_outdoors/default_", vec![
                category("4bf58dd8d48988d163941735", "Park", "parks_outdoors/park_", vec![]),
            ]),
        ]
    })
}

/// Full API envelope around `sample_taxonomy`
pub fn categories_response() -> Value {
    json!({
        "meta": {"code": 200, "requestId": "59a45921351e3d43b07028b5"},
        "response": sample_taxonomy()
    })
}

/// Write `sample_taxonomy` as the cache file in `dir`
pub fn write_cache(dir: &Path) {
    let content = serde_json::to_string_pretty(&sample_taxonomy()).expect("serializable");
    std::fs::write(dir.join("categories.json"), content).expect("cache should be writable");
}
