//! Coercion of loosely typed input (form text, hand edited snapshots) into record fields.
//!
//! Numbers follow the "leading integer or nothing" rule: surrounding whitespace is
//! ignored, an optional sign and a run of ASCII digits are taken and any tail is dropped.
//! Whatever does not yield a number becomes 0.

pub const MAX_RATING: u8 = 5;

/// Leading integer of the text, `None` if the text does not start with one
pub fn parse_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, digits) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }
    let value: i64 = digits[..end].parse().ok()?;
    Some(if negative { -value } else { value })
}

pub fn clamp_count(value: i64) -> u32 {
    value.clamp(0, u32::MAX as i64) as u32
}

pub fn clamp_rating(value: i64) -> u8 {
    value.clamp(0, MAX_RATING as i64) as u8
}

pub fn count(text: &str) -> u32 {
    parse_int(text).map(clamp_count).unwrap_or(0)
}

pub fn rating(text: &str) -> u8 {
    parse_int(text).map(clamp_rating).unwrap_or(0)
}

pub fn optional_text(text: &str) -> Option<String> {
    let text = text.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// serde helpers, so snapshots written by hand or by older versions still load
pub mod lenient {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Loose {
        Int(i64),
        Float(f64),
        Text(String),
        Bool(#[allow(dead_code)] bool),
    }

    impl Loose {
        fn into_int(self) -> Option<i64> {
            match self {
                Loose::Int(n) => Some(n),
                Loose::Float(f) if f.is_finite() => Some(f.trunc() as i64),
                Loose::Float(_) => None,
                Loose::Text(s) => super::parse_int(&s),
                Loose::Bool(_) => None,
            }
        }
    }

    fn loose_int<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<i64>, D::Error> {
        let value = Option::<Loose>::deserialize(deserializer)?;
        Ok(value.and_then(Loose::into_int))
    }

    pub fn count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
        Ok(loose_int(deserializer)?.map(super::clamp_count).unwrap_or(0))
    }

    pub fn rating<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        Ok(loose_int(deserializer)?.map(super::clamp_rating).unwrap_or(0))
    }

    pub fn optional_text<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<String>, D::Error> {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(value.as_deref().and_then(super::optional_text))
    }

    /// Absent text is written as empty string
    pub fn serialize_optional_text<S: Serializer>(
        value: &Option<String>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(value.as_deref().unwrap_or(""))
    }
}
