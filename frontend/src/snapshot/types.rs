use std::{collections::HashMap, fmt};

use serde::{Deserialize, Deserializer, de::DeserializeOwned};
use serde_json::Value;

/// Opaque display text captured verbatim from the scan artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayValue(String);

impl DisplayValue {
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Keep strings and numbers as the artifact wrote them. Anything without a
    /// sensible textual form is treated as absent.
    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::String(text) if text.trim().is_empty() => None,
            Value::String(text) => Some(Self(text)),
            Value::Number(number) => Some(Self(number.to_string())),
            Value::Bool(flag) => Some(Self(flag.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DisplayValue {
    fn from(source: &str) -> Self {
        Self::new(source)
    }
}

// Every field below the result list goes through `Value` first, so a field of
// the wrong type degrades to "absent" instead of failing the whole snapshot.

fn lenient_display<'de, D>(deserializer: D) -> Result<Option<DisplayValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(DisplayValue::from_json))
}

fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }))
}

/// Nested descriptors must be JSON objects; serde would otherwise accept an
/// array as a struct in sequence form.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw
        .filter(Value::is_object)
        .and_then(|value| serde_json::from_value(value).ok()))
}

fn lenient_labels<'de, D>(deserializer: D) -> Result<Vec<DisplayValue>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(items)) => items.into_iter().filter_map(DisplayValue::from_json).collect(),
        Some(other) => DisplayValue::from_json(other).into_iter().collect(),
        None => Vec::new(),
    })
}

fn lenient_entries<'de, D>(deserializer: D) -> Result<Vec<Entry>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Vec::<Value>::deserialize(deserializer)?;
    Ok(raw.into_iter().map(Entry::from_json).collect())
}

/// Result of one daily scan, as published by the scan job.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Snapshot {
    #[serde(default, deserialize_with = "lenient_display")]
    pub last_updated: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_scanned: Option<u64>,
    #[serde(rename = "stocks", alias = "results", deserialize_with = "lenient_entries")]
    pub results: Vec<Entry>,
}

impl Snapshot {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Tickers that appear more than once, in first-seen order.
    pub fn duplicate_tickers(&self) -> Vec<&str> {
        let mut seen: HashMap<&str, usize> = HashMap::new();
        let mut duplicates = Vec::new();
        for ticker in self.results.iter().filter_map(|entry| entry.ticker.as_ref()) {
            let count = seen.entry(ticker.as_str()).or_default();
            *count += 1;
            if *count == 2 {
                duplicates.push(ticker.as_str());
            }
        }
        duplicates
    }
}

/// One ticker that passed the scan.
///
/// Two producer layouts are understood: `cpr` / `camarilla` / `signal`, and
/// the scan job's `daily` levels with a `strategies` list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Entry {
    #[serde(default, deserialize_with = "lenient_display")]
    pub ticker: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub price: Option<DisplayValue>,
    #[serde(default, rename = "cpr", alias = "range", deserialize_with = "lenient_object")]
    pub range: Option<PivotRange>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub center: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub camarilla: Option<CamarillaLevels>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub daily: Option<DailyLevels>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub signal: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient_labels")]
    pub strategies: Vec<DisplayValue>,
}

impl Entry {
    /// A list element that is not an object still gets a (placeholder) card.
    fn from_json(value: Value) -> Self {
        if value.is_object() {
            serde_json::from_value(value).unwrap_or_default()
        } else {
            Entry::default()
        }
    }

    /// Reference level; a flat `center` wins over the nested ones.
    pub fn center(&self) -> Option<&DisplayValue> {
        self.center
            .as_ref()
            .or_else(|| self.camarilla.as_ref()?.center.as_ref())
            .or_else(|| self.daily.as_ref()?.cam_center.as_ref())
    }

    pub fn width_pct(&self) -> Option<&DisplayValue> {
        self.range
            .as_ref()
            .and_then(|range| range.width_pct.as_ref())
            .or_else(|| self.daily.as_ref()?.cpr_width.as_ref())
    }

    pub fn pivot(&self) -> Option<&DisplayValue> {
        self.range
            .as_ref()
            .and_then(|range| range.pivot.as_ref())
            .or_else(|| self.daily.as_ref()?.pivot.as_ref())
    }

    /// Recommendation text, or the matched strategy names joined as-is.
    pub fn signal(&self) -> Option<DisplayValue> {
        if let Some(signal) = &self.signal {
            return Some(signal.clone());
        }
        if self.strategies.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.strategies.iter().map(DisplayValue::as_str).collect();
        Some(DisplayValue::new(names.join(", ")))
    }
}

/// Central pivot range descriptor computed upstream.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PivotRange {
    #[serde(default, deserialize_with = "lenient_display")]
    pub width_pct: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub pivot: Option<DisplayValue>,
}

/// Camarilla levels; only the center is published to the dashboard.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CamarillaLevels {
    #[serde(default, deserialize_with = "lenient_display")]
    pub center: Option<DisplayValue>,
}

/// Daily levels block written by the scan job.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DailyLevels {
    #[serde(default, deserialize_with = "lenient_display")]
    pub cpr_width: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub cam_center: Option<DisplayValue>,
    #[serde(default, deserialize_with = "lenient_display")]
    pub pivot: Option<DisplayValue>,
}
