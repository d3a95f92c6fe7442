//! Access to the events emitted by each message of a transaction response.

use huahua_types::{Coin, CoinError, RawTransaction};
use serde_json::Value;

/// Attributes of one log event, in emission order.
pub(crate) type Attributes<'a> = Vec<(&'a str, &'a str)>;

/// Events emitted while executing a single message.
#[derive(Debug, Clone)]
pub(crate) struct MessageLog<'a> {
    events: Vec<&'a Value>,
}

impl<'a> MessageLog<'a> {
    /// Returns the events of message `index`.
    ///
    /// Reads the per-message `logs` first. Newer nodes leave `logs` empty
    /// and tag the top-level `events` with a `msg_index` attribute instead.
    /// The result is empty when neither source has anything for `index`.
    pub(crate) fn for_message(tx: &'a RawTransaction, index: usize) -> Self {
        let logs = tx
            .field("logs")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default();
        let log = logs
            .iter()
            .find(|log| msg_index(log) == index)
            .or_else(|| logs.get(index));
        let logged = log
            .and_then(|log| log.get("events"))
            .and_then(Value::as_array)
            .filter(|events| !events.is_empty());
        if let Some(events) = logged {
            return Self {
                events: events.iter().collect(),
            };
        }

        let events = tx
            .field("events")
            .and_then(Value::as_array)
            .map(|events| {
                events
                    .iter()
                    .filter(|event| event_msg_index(event) == Some(index))
                    .collect()
            })
            .unwrap_or_default();
        Self { events }
    }

    /// Returns true if no events were found for the message.
    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the attributes of every event of the given type.
    pub(crate) fn events(&self, kind: &str) -> Vec<Attributes<'a>> {
        self.events
            .iter()
            .copied()
            .filter(|event| event.get("type").and_then(Value::as_str) == Some(kind))
            .map(|event| {
                event
                    .get("attributes")
                    .and_then(Value::as_array)
                    .map(|attrs| attrs.iter().map(attribute).collect())
                    .unwrap_or_default()
            })
            .collect()
    }

    /// Returns the coins credited to `receiver` by `coin_received` events.
    pub(crate) fn received_by(&self, receiver: &str) -> Result<Vec<Coin>, CoinError> {
        let mut coins = Vec::new();
        for attrs in self.events("coin_received") {
            let mut current = None;
            for (key, value) in attrs {
                match key {
                    "receiver" => current = Some(value),
                    "amount" if current == Some(receiver) => coins.extend(Coin::parse_list(value)?),
                    _ => {}
                }
            }
        }
        Ok(coins)
    }
}

/// Returns the first value of `key` in an attribute list.
pub(crate) fn attr<'a>(attrs: &Attributes<'a>, key: &str) -> Option<&'a str> {
    attrs.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn attribute(value: &Value) -> (&str, &str) {
    (text(value, "key"), text(value, "value"))
}

fn text<'a>(value: &'a Value, name: &str) -> &'a str {
    value.get(name).and_then(Value::as_str).unwrap_or_default()
}

/// Returns the `msg_index` attribute of a top-level event, if it has one.
fn event_msg_index(event: &Value) -> Option<usize> {
    event
        .get("attributes")?
        .as_array()?
        .iter()
        .find(|attr| text(attr, "key") == "msg_index")
        .and_then(|attr| text(attr, "value").parse().ok())
}

// Proto JSON omits zero-valued fields, so a missing index means message 0.
fn msg_index(log: &Value) -> usize {
    match log.get("msg_index") {
        Some(Value::Number(n)) => n.as_u64().map_or(usize::MAX, |n| n as usize),
        Some(Value::String(s)) => s.parse().unwrap_or(usize::MAX),
        _ => 0,
    }
}
