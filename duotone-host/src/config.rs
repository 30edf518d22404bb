//! Host configuration loading
//!
//! `face.toml` has three parts:
//!
//! - `[face]`: [`FaceConfig`], every key optional
//! - `[host]`: the simulated device (viewport, shape, zone, run length)
//! - `[[script]]`: timed host callbacks played back after creation
//!
//! A missing file is not an error; the host runs the stock face with an
//! empty script.

use std::io::ErrorKind;
use std::path::Path;

use duotone_core::config::FaceConfig;
use duotone_core::state::{DataLayerEvent, DeviceProperties, Event, InterruptionFilter, ScreenShape};
use heapless::Vec;
use log::{info, warn};
use serde::Deserialize;

use crate::error::HostError;

/// Default config path when none is given on the command line
pub const DEFAULT_CONFIG_PATH: &str = "face.toml";

/// Maximum number of script steps
pub const MAX_SCRIPT_STEPS: usize = 32;

/// Largest supported viewport edge
const MAX_VIEWPORT_PX: u32 = 4096;

/// Simulated device settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HostSettings {
    /// Viewport width in pixels
    pub width: u32,
    /// Viewport height in pixels
    pub height: u32,
    /// Screen outline reported through the window insets
    pub shape: ScreenShape,
    /// Initial system time zone
    pub utc_offset_minutes: i32,
    /// Destroy the face after this long; `None` runs until interrupted
    pub run_ms: Option<u64>,
    /// Fixed wall-clock start (ms since the Unix epoch) for reproducible runs
    pub start_epoch_ms: Option<u64>,
    /// Write the last presented frame here as a binary PPM
    pub snapshot_path: Option<String>,
}

impl Default for HostSettings {
    fn default() -> Self {
        Self {
            width: 320,
            height: 320,
            shape: ScreenShape::Square,
            utc_offset_minutes: 0,
            run_ms: None,
            start_epoch_ms: None,
            snapshot_path: None,
        }
    }
}

/// A host callback the script can trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScriptEvent {
    Visibility(bool),
    Ambient(bool),
    InterruptionFilter(InterruptionFilter),
    Properties(DeviceProperties),
    Insets(ScreenShape),
    /// Change the system zone (minutes east of UTC)
    SystemTimeZone(i32),
    ConnectionSuspended(i32),
    ConnectionFailed,
    DataChanged,
    Destroy,
}

impl ScriptEvent {
    /// Event to deliver to the face
    ///
    /// Zone changes return `None`: they update the environment, which only
    /// notifies the face while a listener is registered.
    pub fn to_event(self) -> Option<Event> {
        match self {
            ScriptEvent::Visibility(visible) => Some(Event::VisibilityChanged(visible)),
            ScriptEvent::Ambient(ambient) => Some(Event::AmbientModeChanged(ambient)),
            ScriptEvent::InterruptionFilter(filter) => Some(Event::InterruptionFilterChanged(filter)),
            ScriptEvent::Properties(properties) => Some(Event::PropertiesChanged(properties)),
            ScriptEvent::Insets(shape) => Some(Event::ApplyWindowInsets(shape)),
            ScriptEvent::SystemTimeZone(_) => None,
            ScriptEvent::ConnectionSuspended(cause) => {
                Some(Event::DataLayer(DataLayerEvent::ConnectionSuspended(cause)))
            }
            ScriptEvent::ConnectionFailed => Some(Event::DataLayer(DataLayerEvent::ConnectionFailed)),
            ScriptEvent::DataChanged => Some(Event::DataLayer(DataLayerEvent::DataChanged)),
            ScriptEvent::Destroy => Some(Event::Destroy),
        }
    }
}

/// One timed script entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ScriptStep {
    /// Offset from face creation
    pub at_ms: u64,
    pub event: ScriptEvent,
}

/// Raw file layout before bounds checking
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    face: FaceConfig,
    host: HostSettings,
    script: std::vec::Vec<ScriptStep>,
}

/// Complete host configuration
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HostConfig {
    pub face: FaceConfig,
    pub host: HostSettings,
    /// Script steps ordered by `at_ms`
    pub script: Vec<ScriptStep, MAX_SCRIPT_STEPS>,
}

impl HostConfig {
    /// Load from a file, falling back to defaults when it does not exist
    pub fn load(path: &Path) -> Result<Self, HostError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let config = Self::parse(&content)?;
                info!(
                    "Loaded {} ({} script steps)",
                    path.display(),
                    config.script.len()
                );
                Ok(config)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!("{} not found, using default configuration", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(HostError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Parse and validate TOML content
    pub fn parse(content: &str) -> Result<Self, HostError> {
        let raw: RawConfig = toml::from_str(content)?;
        raw.face.validate()?;
        validate_host(&raw.host)?;

        let mut steps = raw.script;
        if steps.len() > MAX_SCRIPT_STEPS {
            return Err(HostError::ScriptTooLong(MAX_SCRIPT_STEPS));
        }
        // Stable: steps sharing a time keep file order
        steps.sort_by_key(|step| step.at_ms);

        let mut script = Vec::new();
        for step in steps {
            script
                .push(step)
                .map_err(|_| HostError::ScriptTooLong(MAX_SCRIPT_STEPS))?;
        }

        Ok(Self {
            face: raw.face,
            host: raw.host,
            script,
        })
    }
}

fn validate_host(host: &HostSettings) -> Result<(), HostError> {
    if host.width == 0 || host.height == 0 {
        return Err(HostError::InvalidHost("viewport must not be empty"));
    }
    if host.width > MAX_VIEWPORT_PX || host.height > MAX_VIEWPORT_PX {
        return Err(HostError::InvalidHost("viewport larger than 4096 px"));
    }
    if host.utc_offset_minutes.abs() > 14 * 60 {
        return Err(HostError::InvalidHost("UTC offset beyond +/-14h"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use duotone_core::config::{ConfigError, TimeZoneRegistration};
    use duotone_core::paint::Typeface;

    #[test]
    fn test_empty_file_is_default() {
        let config = HostConfig::parse("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.face, FaceConfig::default());
        assert!(config.script.is_empty());
    }

    #[test]
    fn test_face_section_overrides() {
        let config = HostConfig::parse(
            r#"
            [face]
            mute_alpha = 80
            time_zone_registration = "guarded"

            [face.text]
            size_round = 24
            hour_typeface = "regular"
            "#,
        )
        .unwrap();

        assert_eq!(config.face.mute_alpha, 80);
        assert_eq!(config.face.normal_alpha, 255);
        assert_eq!(config.face.time_zone_registration, TimeZoneRegistration::Guarded);
        assert_eq!(config.face.text.size_round, 24);
        assert_eq!(config.face.text.hour_typeface, Typeface::Regular);
    }

    #[test]
    fn test_host_section() {
        let config = HostConfig::parse(
            r#"
            [host]
            width = 454
            height = 454
            shape = "round"
            utc_offset_minutes = -300
            run_ms = 5000
            start_epoch_ms = 1709474829250
            "#,
        )
        .unwrap();

        assert_eq!(config.host.width, 454);
        assert_eq!(config.host.shape, ScreenShape::Round);
        assert_eq!(config.host.utc_offset_minutes, -300);
        assert_eq!(config.host.run_ms, Some(5000));
        assert_eq!(config.host.start_epoch_ms, Some(1_709_474_829_250));
        assert_eq!(config.host.snapshot_path, None);
    }

    #[test]
    fn test_script_is_sorted() {
        let config = HostConfig::parse(
            r#"
            [[script]]
            at_ms = 3000
            event = "destroy"

            [[script]]
            at_ms = 0
            event = { visibility = true }

            [[script]]
            at_ms = 1000
            event = { interruption_filter = "none" }

            [[script]]
            at_ms = 1000
            event = { properties = { burn_in_protection = true } }
            "#,
        )
        .unwrap();

        let events: std::vec::Vec<ScriptEvent> =
            config.script.iter().map(|step| step.event).collect();
        assert_eq!(
            events,
            [
                ScriptEvent::Visibility(true),
                ScriptEvent::InterruptionFilter(InterruptionFilter::None),
                ScriptEvent::Properties(DeviceProperties {
                    low_bit_ambient: false,
                    burn_in_protection: true,
                }),
                ScriptEvent::Destroy,
            ]
        );
    }

    #[test]
    fn test_invalid_face_rejected() {
        let result = HostConfig::parse(
            r#"
            [face]
            normal_alpha = 50
            mute_alpha = 100
            "#,
        );
        assert!(matches!(
            result,
            Err(HostError::InvalidFace(ConfigError::MuteAlphaAboveNormal))
        ));
    }

    #[test]
    fn test_invalid_host_rejected() {
        let result = HostConfig::parse("[host]\nwidth = 0\n");
        assert!(matches!(result, Err(HostError::InvalidHost(_))));

        let result = HostConfig::parse("[host]\nutc_offset_minutes = 1000\n");
        assert!(matches!(result, Err(HostError::InvalidHost(_))));
    }

    #[test]
    fn test_unknown_event_is_parse_error() {
        let result = HostConfig::parse("[[script]]\nat_ms = 0\nevent = \"explode\"\n");
        assert!(matches!(result, Err(HostError::Parse(_))));
    }

    #[test]
    fn test_script_too_long() {
        let mut content = std::string::String::new();
        for i in 0..=MAX_SCRIPT_STEPS {
            content.push_str(&format!("[[script]]\nat_ms = {}\nevent = \"data_changed\"\n", i));
        }
        assert!(matches!(
            HostConfig::parse(&content),
            Err(HostError::ScriptTooLong(MAX_SCRIPT_STEPS))
        ));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let config = HostConfig::load(Path::new("/nonexistent/duotone/face.toml")).unwrap();
        assert_eq!(config, HostConfig::default());
    }

    #[test]
    fn test_script_event_mapping() {
        assert_eq!(
            ScriptEvent::Visibility(false).to_event(),
            Some(Event::VisibilityChanged(false))
        );
        assert_eq!(
            ScriptEvent::Insets(ScreenShape::Round).to_event(),
            Some(Event::ApplyWindowInsets(ScreenShape::Round))
        );
        assert_eq!(
            ScriptEvent::ConnectionSuspended(2).to_event(),
            Some(Event::DataLayer(DataLayerEvent::ConnectionSuspended(2)))
        );
        assert_eq!(ScriptEvent::Destroy.to_event(), Some(Event::Destroy));
        assert_eq!(ScriptEvent::SystemTimeZone(60).to_event(), None);
    }

    #[test]
    fn test_bundled_config_parses() {
        let config = HostConfig::parse(include_str!("../face.toml")).unwrap();
        assert!(!config.script.is_empty());
        assert!(config
            .script
            .windows(2)
            .all(|pair| pair[0].at_ms <= pair[1].at_ms));
    }
}
