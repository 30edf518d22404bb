//! Build script for duotone-host
//!
//! Validates the bundled face.toml at compile time so a broken default
//! configuration never ships.

use std::fs;
use std::path::Path;

/// Script events understood by the host runtime
const SCRIPT_EVENTS: [&str; 10] = [
    "visibility",
    "ambient",
    "interruption_filter",
    "properties",
    "insets",
    "system_time_zone",
    "connection_suspended",
    "connection_failed",
    "data_changed",
    "destroy",
];

const FILTERS: [&str; 5] = ["unknown", "all", "priority", "none", "alarms"];
const SHAPES: [&str; 2] = ["square", "round"];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    validate_config();
}

/// Validate face.toml configuration at compile time
fn validate_config() {
    println!("cargo:rerun-if-changed=face.toml");

    let config_path = Path::new("face.toml");
    if !config_path.exists() {
        fail(
            "face.toml not found",
            &["The host ships a default face.toml next to Cargo.toml".to_string()],
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => fail("Failed to read face.toml", &[e.to_string()]),
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let lines: Vec<String> = e.to_string().lines().map(str::to_string).collect();
            fail("Invalid TOML syntax in face.toml", &lines);
        }
    };

    let mut errors = Vec::new();
    validate_face(&config, &mut errors);
    validate_host(&config, &mut errors);
    validate_script(&config, &mut errors);

    if !errors.is_empty() {
        fail("Invalid configuration in face.toml", &errors);
    }

    println!("cargo:warning=face.toml validated successfully");
}

/// Abort the build with a boxed error report
fn fail(title: &str, errors: &[String]) -> ! {
    let body = errors
        .iter()
        .map(|e| {
            let truncated = if e.len() > 62 {
                format!("{}...", &e[..59])
            } else {
                e.clone()
            };
            format!("║  • {:<62} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n");

    panic!(
        "\n\
        ╔══════════════════════════════════════════════════════════════════╗\n\
        ║  ERROR: {:<56} ║\n\
        ╠══════════════════════════════════════════════════════════════════╣\n\
        {}\n\
        ╚══════════════════════════════════════════════════════════════════╝\n",
        title, body
    );
}

fn integer(table: &toml::Table, key: &str) -> Option<i64> {
    table.get(key).and_then(|v| v.as_integer())
}

/// Validate the [face] section
fn validate_face(config: &toml::Value, errors: &mut Vec<String>) {
    let face = match config.get("face") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[face] must be a table".to_string());
            return;
        }
        None => return,
    };

    let normal = integer(face, "normal_update_rate_ms").unwrap_or(1_000);
    let mute = integer(face, "mute_update_rate_ms").unwrap_or(60_000);
    if normal <= 0 || mute <= 0 {
        errors.push("[face] update rates must be positive".to_string());
    } else if mute < normal {
        errors.push("[face] mute_update_rate_ms must be >= normal rate".to_string());
    }

    let normal_alpha = integer(face, "normal_alpha").unwrap_or(255);
    let mute_alpha = integer(face, "mute_alpha").unwrap_or(100);
    if !(0..=255).contains(&normal_alpha) || !(0..=255).contains(&mute_alpha) {
        errors.push("[face] alphas must be 0-255".to_string());
    } else if mute_alpha > normal_alpha {
        errors.push("[face] mute_alpha must be <= normal_alpha".to_string());
    }

    if let Some(toml::Value::Table(text)) = face.get("text") {
        for key in ["size_square", "size_round"] {
            if let Some(size) = integer(text, key) {
                if !(1..=i64::from(u16::MAX)).contains(&size) {
                    errors.push(format!("[face.text] {} must be 1-65535", key));
                }
            }
        }
    }

    if let Some(toml::Value::String(policy)) = face.get("time_zone_registration") {
        if !["legacy", "guarded"].contains(&policy.as_str()) {
            errors.push("[face] time_zone_registration must be 'legacy' or 'guarded'".to_string());
        }
    }
}

/// Validate the [host] section
fn validate_host(config: &toml::Value, errors: &mut Vec<String>) {
    let host = match config.get("host") {
        Some(toml::Value::Table(t)) => t,
        Some(_) => {
            errors.push("[host] must be a table".to_string());
            return;
        }
        None => return,
    };

    for key in ["width", "height"] {
        if let Some(px) = integer(host, key) {
            if !(1..=4096).contains(&px) {
                errors.push(format!("[host] {} must be 1-4096", key));
            }
        }
    }

    if let Some(toml::Value::String(shape)) = host.get("shape") {
        if !SHAPES.contains(&shape.as_str()) {
            errors.push("[host] shape must be 'square' or 'round'".to_string());
        }
    }

    if let Some(offset) = integer(host, "utc_offset_minutes") {
        if !(-14 * 60..=14 * 60).contains(&offset) {
            errors.push("[host] utc_offset_minutes must be within +/-14h".to_string());
        }
    }
}

/// Validate the [[script]] steps
fn validate_script(config: &toml::Value, errors: &mut Vec<String>) {
    let steps = match config.get("script") {
        Some(toml::Value::Array(steps)) => steps,
        Some(_) => {
            errors.push("[[script]] must be an array of tables".to_string());
            return;
        }
        None => return,
    };

    for (i, step) in steps.iter().enumerate() {
        let step = match step.as_table() {
            Some(t) => t,
            None => {
                errors.push(format!("[[script]] step {} must be a table", i));
                continue;
            }
        };

        match integer(step, "at_ms") {
            Some(at) if at >= 0 => {}
            Some(_) => errors.push(format!("[[script]] step {} at_ms must be >= 0", i)),
            None => errors.push(format!("[[script]] step {} missing 'at_ms'", i)),
        }

        let name = match step.get("event") {
            Some(toml::Value::String(name)) => name.clone(),
            Some(toml::Value::Table(t)) if t.len() == 1 => match t.iter().next() {
                Some((name, value)) => {
                    validate_event_value(i, name, value, errors);
                    name.clone()
                }
                None => continue,
            },
            Some(_) => {
                errors.push(format!("[[script]] step {} event must be a name or 1-key table", i));
                continue;
            }
            None => {
                errors.push(format!("[[script]] step {} missing 'event'", i));
                continue;
            }
        };

        if !SCRIPT_EVENTS.contains(&name.as_str()) {
            errors.push(format!("[[script]] step {} unknown event '{}'", i, name));
        }
    }
}

fn validate_event_value(i: usize, name: &str, value: &toml::Value, errors: &mut Vec<String>) {
    match name {
        "interruption_filter" => {
            if !value.as_str().is_some_and(|f| FILTERS.contains(&f)) {
                errors.push(format!("[[script]] step {} unknown interruption filter", i));
            }
        }
        "insets" => {
            if !value.as_str().is_some_and(|s| SHAPES.contains(&s)) {
                errors.push(format!("[[script]] step {} insets must be a shape", i));
            }
        }
        "visibility" | "ambient" => {
            if !value.is_bool() {
                errors.push(format!("[[script]] step {} {} must be true/false", i, name));
            }
        }
        _ => {}
    }
}
