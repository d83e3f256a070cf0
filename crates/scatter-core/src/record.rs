// File: crates/scatter-core/src/record.rs
// Summary: Raw input record as published in the cyclist dataset.

use serde::{de, Deserialize, Deserializer, Serialize};

/// One climb as it appears in the source JSON. Immutable once loaded.
///
/// `Doping` is an empty string when the rider has no allegation, otherwise a
/// free-text description. `Place`, `Seconds` and `URL` are carried by the
/// upstream file but are not required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Record {
    pub time: String,
    #[serde(deserialize_with = "year_from_json")]
    pub year: i32,
    pub name: String,
    pub nationality: String,
    pub doping: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seconds: Option<u32>,
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl Record {
    /// Build a record with only the plotted fields set.
    pub fn new(
        name: impl Into<String>,
        nationality: impl Into<String>,
        year: i32,
        time: impl Into<String>,
        doping: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            year,
            name: name.into(),
            nationality: nationality.into(),
            doping: doping.into(),
            place: None,
            seconds: None,
            url: None,
        }
    }

    pub fn has_allegation(&self) -> bool {
        !self.doping.is_empty()
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(i32),
    Text(String),
}

/// `Year` is numerically coerced: both `1994` and `"1994"` are accepted.
fn year_from_json<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i32, D::Error> {
    match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(n) => Ok(n),
        NumberOrText::Text(s) => s
            .trim()
            .parse::<i32>()
            .map_err(|_| de::Error::custom(format!("Year {s:?} is not an integer"))),
    }
}
