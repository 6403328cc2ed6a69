//! Integration tests for telemetry events and sinks.

use std::cell::RefCell;

use flatprops::{
    event::{
        EventSink, Level, TelemetryEvent, EVENT_NAME_KEY, FILE_PATH_KEY, LINE_NUMBER_KEY,
        LOG_LEVEL_KEY, SUMMARY_MESSAGE_KEY,
    },
    Describe, FlatMap, FlattenOptions, Flattener, REDACTION_MARKER,
};

#[derive(Describe)]
#[describe(rename_all = "PascalCase")]
struct Checkout {
    order_id: u64,
    #[sensitive(flatprops::CreditCard)]
    card_number: String,
}

fn checkout() -> Checkout {
    Checkout {
        order_id: 981,
        card_number: "4111111111111111".into(),
    }
}

/// Collects every emitted event, keeping only those at or above `minimum`.
struct RecordingSink {
    minimum: Level,
    events: RefCell<Vec<(Level, String, FlatMap)>>,
}

impl RecordingSink {
    fn new(minimum: Level) -> Self {
        Self {
            minimum,
            events: RefCell::new(Vec::new()),
        }
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: TelemetryEvent) {
        if event.level() < self.minimum {
            return;
        }
        let level = event.level();
        let message = event.message().to_string();
        self.events
            .borrow_mut()
            .push((level, message, event.into_properties()));
    }
}

fn forward<S: EventSink>(sink: S, event: TelemetryEvent) {
    sink.emit(event);
}

#[test]
fn test_event_carries_default_properties() {
    let line = line!() + 1;
    let event = TelemetryEvent::new(Level::Warning, "payment retried");
    let properties = event.into_properties();

    assert_eq!(properties[LOG_LEVEL_KEY], "Warning");
    assert_eq!(properties[SUMMARY_MESSAGE_KEY], "payment retried");
    assert_eq!(properties[FILE_PATH_KEY], "integration_event.rs");
    assert_eq!(properties[LINE_NUMBER_KEY], line.to_string());
    assert!(!properties.contains_key(EVENT_NAME_KEY));
}

#[test]
fn test_empty_message_has_no_summary() {
    let properties = TelemetryEvent::new(Level::Information, "").into_properties();
    assert!(!properties.contains_key(SUMMARY_MESSAGE_KEY));
    assert_eq!(properties[LOG_LEVEL_KEY], "Information");
}

#[test]
fn test_caller_properties_win_over_defaults() {
    let mut custom = FlatMap::new();
    custom.insert(LOG_LEVEL_KEY.to_string(), "Custom".to_string());
    let properties = TelemetryEvent::new(Level::Error, "boom")
        .with_properties(custom)
        .with_event_name("CheckoutFailed")
        .into_properties();

    assert_eq!(properties[LOG_LEVEL_KEY], "Custom");
    assert_eq!(properties[EVENT_NAME_KEY], "CheckoutFailed");
}

#[test]
fn test_with_object_merges_flattened_properties() {
    let flattener = Flattener::new(
        FlattenOptions::new()
            .with_redaction(true)
            .with_key_prefix("Checkout"),
    );
    let event =
        TelemetryEvent::new(Level::Information, "checkout").with_object(&checkout(), &flattener);

    assert_eq!(event.properties().len(), 2);
    assert_eq!(event.properties()["Checkout:OrderId"], "981");
    assert_eq!(event.properties()["Checkout:CardNumber"], REDACTION_MARKER);
}

#[test]
fn test_sink_filters_by_level() {
    let sink = RecordingSink::new(Level::Warning);
    sink.emit(TelemetryEvent::new(Level::Debug, "ignored"));
    sink.emit(TelemetryEvent::new(Level::Critical, "kept"));
    forward(&sink, TelemetryEvent::new(Level::Warning, "kept too"));

    let events = sink.events.borrow();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].0, Level::Critical);
    assert_eq!(events[1].1, "kept too");
    assert_eq!(events[1].2[LOG_LEVEL_KEY], "Warning");
}

#[test]
fn test_level_parsing_accepts_common_aliases() {
    assert_eq!("info".parse::<Level>().unwrap(), Level::Information);
    assert_eq!("FATAL".parse::<Level>().unwrap(), Level::Critical);
    assert_eq!("verbose".parse::<Level>().unwrap(), Level::Trace);
    let err = "loud".parse::<Level>().unwrap_err();
    assert!(err.to_string().contains("loud"));
    assert!(Level::Trace < Level::Critical);
}
