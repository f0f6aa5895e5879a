use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::{Value, json};
use url::Url;

/// Id of the database written by [`write_workspace`].
pub const LISTINGS: &str = "listings";

/// Run the CLI against a workspace with an isolated HOME and config.
pub fn run_cli_with_env(args: &[&str], home: &Path, api: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_spotmap"));
    cmd.args(args);
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join("config"));
    cmd.env_remove("SPOTMAP_CONFIG");
    cmd.env_remove("RUST_LOG");
    cmd.env("SPOTMAP_API", api);
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_with_env_success(args: &[&str], home: &Path, api: &str) -> String {
    let output = run_cli_with_env(args, home, api);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

pub fn workspace_url(path: &Path) -> String {
    Url::from_directory_path(path)
        .expect("Failed to convert path to file URL")
        .to_string()
}

fn write(path: PathBuf, value: Value) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, serde_json::to_vec_pretty(&value).unwrap()).unwrap();
}

/// An exported workspace with one database of three listings:
/// one with stored coordinates, one found on the qualified retry, and one
/// that cannot be located.
pub fn write_workspace(root: &Path) {
    write(
        root.join("databases.json"),
        json!([
            { "object": "database", "id": LISTINGS, "title": [{ "plain_text": "Listings" }], "archived": false },
            { "object": "database", "id": "old", "title": [{ "plain_text": "Old" }], "archived": true },
            { "object": "database", "id": LISTINGS, "title": [{ "plain_text": "Listings" }], "archived": false }
        ]),
    );

    let db = root.join("databases").join(LISTINGS);
    write(
        db.join("schema.json"),
        json!({
            "Address": { "id": "title", "name": "Address", "type": "title", "title": {} },
            "Latitude": { "id": "a", "name": "Latitude", "type": "rich_text", "rich_text": {} },
            "Longitude": { "id": "b", "name": "Longitude", "type": "rich_text", "rich_text": {} },
            "Status": { "id": "c", "name": "Status", "type": "select", "select": { "options": [] } },
            "Sqft": { "id": "d", "name": "Sqft", "type": "number", "number": { "format": "number" } }
        }),
    );
    write(
        db.join("pages.json"),
        json!([
            { "object": "page", "id": "stored", "properties": {
                "Address": { "type": "title", "title": [{ "plain_text": "1 Ferry Building" }] },
                "Latitude": { "type": "rich_text", "rich_text": [{ "plain_text": "37.7955" }] },
                "Longitude": { "type": "rich_text", "rich_text": [{ "plain_text": "-122.3937" }] },
                "Sqft": { "type": "number", "number": 1200 }
            }},
            { "object": "page", "id": "retried", "properties": {
                "Address": { "type": "title", "title": [{ "plain_text": "600 Guerrero St" }] },
                "Status": { "type": "select", "select": { "name": "off market", "color": "red" } }
            }},
            { "object": "page", "id": "lost", "properties": {
                "Address": { "type": "title", "title": [{ "plain_text": "Atlantis" }] }
            }}
        ]),
    );

    write(
        root.join("geocode.json"),
        json!({ "600 Guerrero St, CA, USA": { "lat": 37.7613, "lon": -122.4243 } }),
    );
}
