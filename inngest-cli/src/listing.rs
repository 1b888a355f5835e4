use serde_json::Value;

/// The shapes a collection endpoint is known to answer with.
#[derive(Debug, PartialEq)]
pub enum Listing<'a> {
    /// A top-level JSON array.
    Bare(&'a [Value]),
    /// `{"data": [...]}`
    Data(&'a [Value]),
    /// `{"<key>": [...]}`, e.g. `events` or `runs`.
    Keyed(&'a str, &'a [Value]),
    Unrecognized,
}

impl<'a> Listing<'a> {
    /// Tries bare array, then `data`, then `key`. A present `data` key
    /// decides the outcome even when it does not hold an array.
    pub fn classify(value: &'a Value, key: &'a str) -> Self {
        if let Some(items) = value.as_array() {
            return Listing::Bare(items);
        }
        if let Some(data) = value.get("data") {
            return match data.as_array() {
                Some(items) => Listing::Data(items),
                None => Listing::Unrecognized,
            };
        }
        if let Some(items) = value.get(key).and_then(Value::as_array) {
            return Listing::Keyed(key, items);
        }
        Listing::Unrecognized
    }

    pub fn items(&self) -> &'a [Value] {
        match self {
            Listing::Bare(items) | Listing::Data(items) | Listing::Keyed(_, items) => items,
            Listing::Unrecognized => &[],
        }
    }
}
