use serde::{Deserialize, Deserializer};

/// `MM/DD/YYYY` dates.
pub(super) mod mdy_date {
    use crate::utils::date::DATE_FORMAT;
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&date.format(DATE_FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(d)?;
        NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
            .map_err(|_| de::Error::custom(format!("invalid date '{}', expected MM/DD/YYYY", raw)))
    }
}

/// Scanner serials are numbers on the device but compared as text.
pub(super) fn string_or_number<'de, D: Deserializer<'de>>(d: D) -> Result<String, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        Int(i64),
    }

    Ok(match Raw::deserialize(d)? {
        Raw::Str(s) => s.trim().to_string(),
        Raw::Int(n) => n.to_string(),
    })
}
