// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serde adapters for the plain `YYYY-MM-DD` and `HH:MM` strings used on the wire.

/// `time::Date` as `YYYY-MM-DD`.
pub mod iso_date {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};
    use time::Date;
    use time::macros::format_description;

    /// Serializes a date as `YYYY-MM-DD`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(date: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(date)
    }

    /// Deserializes a `YYYY-MM-DD` string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not a valid calendar date.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        Date::parse(&raw, format_description!("[year]-[month]-[day]")).map_err(D::Error::custom)
    }
}

/// `Option<time::Time>` as `HH:MM`.
pub mod clock_time_opt {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::Time;
    use time::macros::format_description;

    /// Serializes an optional time of day as `HH:MM` or `null`.
    ///
    /// # Errors
    ///
    /// Returns an error if formatting fails.
    #[allow(clippy::ref_option)]
    pub fn serialize<S: Serializer>(time: &Option<Time>, serializer: S) -> Result<S::Ok, S::Error> {
        match time {
            Some(t) => {
                let text: String = t
                    .format(format_description!("[hour]:[minute]"))
                    .map_err(S::Error::custom)?;
                serializer.serialize_some(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes an optional `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns an error if a present string is not a valid clock time.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Time>, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        raw.map(|s| {
            Time::parse(&s, format_description!("[hour]:[minute]")).map_err(D::Error::custom)
        })
        .transpose()
    }
}
