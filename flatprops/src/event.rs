//! Telemetry events: a message, a level, and flat properties.
//!
//! This module builds the property bag a backend receives. It does not gate
//! on level and does not send anything; [`EventSink`] implementations do.

use std::{fmt, panic::Location, path::Path, str::FromStr};

use crate::{
    flatten::{FlatMap, Flattener},
    value::{Describe, SensitivityClassifier},
};

/// Property holding the event level.
pub const LOG_LEVEL_KEY: &str = "Telemetry.LogLevel";
/// Property holding the event message.
pub const SUMMARY_MESSAGE_KEY: &str = "Telemetry.SummaryMessage";
/// Property holding the file name of the call site.
pub const FILE_PATH_KEY: &str = "Telemetry.FilePath";
/// Property holding the line of the call site.
pub const LINE_NUMBER_KEY: &str = "Telemetry.LineNumber";
/// Property holding an explicit event name.
pub const EVENT_NAME_KEY: &str = "Telemetry.EventName";

/// Event severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Level {
    Trace,
    Debug,
    Information,
    Warning,
    Error,
    Critical,
}

impl Level {
    pub fn as_str(self) -> &'static str {
        match self {
            Level::Trace => "Trace",
            Level::Debug => "Debug",
            Level::Information => "Information",
            Level::Warning => "Warning",
            Level::Error => "Error",
            Level::Critical => "Critical",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown level `{0}`")]
pub struct ParseLevelError(String);

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "trace" | "verbose" => Ok(Level::Trace),
            "debug" => Ok(Level::Debug),
            "information" | "info" => Ok(Level::Information),
            "warning" | "warn" => Ok(Level::Warning),
            "error" => Ok(Level::Error),
            "critical" | "fatal" => Ok(Level::Critical),
            _ => Err(ParseLevelError(value.to_string())),
        }
    }
}

/// One event ready to be handed to a sink.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TelemetryEvent {
    level: Level,
    message: String,
    location: &'static Location<'static>,
    properties: FlatMap,
}

impl TelemetryEvent {
    /// Creates an event attributed to the caller's source location.
    #[track_caller]
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            location: Location::caller(),
            properties: FlatMap::new(),
        }
    }

    /// Merges `properties`; existing keys are replaced.
    #[must_use]
    pub fn with_properties(mut self, properties: FlatMap) -> Self {
        self.properties.extend(properties);
        self
    }

    /// Flattens `value` and merges the result.
    #[must_use]
    pub fn with_object<T, C>(self, value: &T, flattener: &Flattener<C>) -> Self
    where
        T: Describe + ?Sized,
        C: SensitivityClassifier,
    {
        let properties = flattener.flatten(value);
        self.with_properties(properties)
    }

    #[must_use]
    pub fn with_event_name(mut self, name: impl Into<String>) -> Self {
        self.properties.insert(EVENT_NAME_KEY.to_string(), name.into());
        self
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Caller-provided properties only.
    pub fn properties(&self) -> &FlatMap {
        &self.properties
    }

    /// Caller properties plus the `Telemetry.*` defaults.
    ///
    /// Defaults never overwrite a key the caller already set.
    pub fn into_properties(self) -> FlatMap {
        let mut properties = self.properties;
        let file_name = Path::new(self.location.file())
            .file_name()
            .map_or_else(|| self.location.file().to_string(), |name| {
                name.to_string_lossy().into_owned()
            });

        let defaults = [
            (LOG_LEVEL_KEY, Some(self.level.to_string())),
            (
                SUMMARY_MESSAGE_KEY,
                (!self.message.is_empty()).then(|| self.message.clone()),
            ),
            (FILE_PATH_KEY, Some(file_name)),
            (LINE_NUMBER_KEY, Some(self.location.line().to_string())),
        ];
        for (key, value) in defaults {
            if let Some(value) = value {
                properties.entry(key.to_string()).or_insert(value);
            }
        }
        properties
    }
}

/// Receives finished events and forwards them to a backend.
///
/// Sinks own level filtering; [`TelemetryEvent`] never drops anything.
pub trait EventSink {
    fn emit(&self, event: TelemetryEvent);
}

impl<S> EventSink for &S
where
    S: EventSink + ?Sized,
{
    fn emit(&self, event: TelemetryEvent) {
        (**self).emit(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_round_trips_through_strings() {
        for level in [
            Level::Trace,
            Level::Debug,
            Level::Information,
            Level::Warning,
            Level::Error,
            Level::Critical,
        ] {
            assert_eq!(level.as_str().parse::<Level>().unwrap(), level);
        }
        assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
        assert!("loud".parse::<Level>().is_err());
    }

    #[test]
    fn levels_are_ordered_by_severity() {
        assert!(Level::Trace < Level::Information);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn defaults_are_added_without_overwriting() {
        let mut caller = FlatMap::new();
        caller.insert(LOG_LEVEL_KEY.to_string(), "custom".to_string());
        let event = TelemetryEvent::new(Level::Warning, "disk almost full").with_properties(caller);
        let line = event.location().line().to_string();

        let properties = event.into_properties();
        assert_eq!(properties[LOG_LEVEL_KEY], "custom");
        assert_eq!(properties[SUMMARY_MESSAGE_KEY], "disk almost full");
        assert_eq!(properties[FILE_PATH_KEY], "event.rs");
        assert_eq!(properties[LINE_NUMBER_KEY], line);
    }

    #[test]
    fn empty_message_has_no_summary() {
        let properties = TelemetryEvent::new(Level::Debug, "").into_properties();
        assert!(!properties.contains_key(SUMMARY_MESSAGE_KEY));
    }
}
