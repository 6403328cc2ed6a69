//! Adapters for emitting flat properties through `slog`.
//!
//! `slog` keys are `&'static str`, while flat property keys are built at
//! runtime. The adapters here therefore emit a whole [`FlatMap`] as one
//! nested serde value via `slog`'s nested-value support.
//!
//! It is responsible for:
//! - Ensuring the logged representation comes from a flatten call with
//!   redaction enabled, not from the original value.
//! - Bridging [`TelemetryEvent`] to `slog` levels through [`SlogSink`].
//!
//! It does not configure `slog` drains or filter by level.

use slog::{Key, Logger, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{
    event::{EventSink, Level, TelemetryEvent},
    flatten::{FlatMap, FlattenOptions, Flattener},
    value::Describe,
};

/// A `slog::Value` that emits a flat map as a nested structured value.
#[derive(Clone, Debug)]
pub struct FlatMapValue {
    properties: FlatMap,
}

impl FlatMapValue {
    pub fn new(properties: FlatMap) -> Self {
        Self { properties }
    }

    pub fn properties(&self) -> &FlatMap {
        &self.properties
    }
}

impl SlogValue for FlatMapValue {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        let nested = slog::Serde(self.properties.clone());
        SlogValue::serialize(&nested, record, key, serializer)
    }
}

/// Converts described values into a `slog::Value` of their flat properties.
///
/// ## Example
/// ```ignore
/// use flatprops::slog::IntoFlatProperties;
///
/// info!(logger, "order placed"; "order" => order.flat_properties());
/// ```
pub trait IntoFlatProperties: Describe {
    /// Flattens with redaction enabled and the `.` delimiter.
    fn flat_properties(&self) -> FlatMapValue {
        let options = logging_options();
        FlatMapValue::new(crate::flatten(self, &options))
    }

    /// Flattens through a caller-chosen flattener.
    fn flat_properties_with<C>(&self, flattener: &Flattener<C>) -> FlatMapValue
    where
        C: crate::SensitivityClassifier,
    {
        FlatMapValue::new(flattener.flatten(self))
    }
}

impl<T> IntoFlatProperties for T where T: Describe + ?Sized {}

/// Options used when values are logged without an explicit flattener.
pub fn logging_options() -> FlattenOptions {
    FlattenOptions::dotted().with_redaction(true)
}

/// An [`EventSink`] writing to a `slog::Logger`.
///
/// Each event becomes one record at the mapped level, with its properties
/// under the `"properties"` key.
#[derive(Clone)]
pub struct SlogSink {
    logger: Logger,
}

impl SlogSink {
    pub fn new(logger: Logger) -> Self {
        Self { logger }
    }
}

impl EventSink for SlogSink {
    fn emit(&self, event: TelemetryEvent) {
        let level = event.level();
        let message = event.message().to_string();
        let properties = FlatMapValue::new(event.into_properties());
        let logger = &self.logger;
        match level {
            Level::Trace => slog::trace!(logger, "{}", message; "properties" => properties),
            Level::Debug => slog::debug!(logger, "{}", message; "properties" => properties),
            Level::Information => slog::info!(logger, "{}", message; "properties" => properties),
            Level::Warning => slog::warn!(logger, "{}", message; "properties" => properties),
            Level::Error => slog::error!(logger, "{}", message; "properties" => properties),
            Level::Critical => slog::crit!(logger, "{}", message; "properties" => properties),
        }
    }
}

impl From<Level> for slog::Level {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace => slog::Level::Trace,
            Level::Debug => slog::Level::Debug,
            Level::Information => slog::Level::Info,
            Level::Warning => slog::Level::Warning,
            Level::Error => slog::Level::Error,
            Level::Critical => slog::Level::Critical,
        }
    }
}
