use std::ops::RangeInclusive;

use chrono::{
  DateTime,
  Datelike,
  Local,
  LocalResult,
  NaiveDate,
  NaiveDateTime,
  SecondsFormat,
  SubsecRound,
  TimeZone,
  Utc
};

pub const DISPLAY_FORMAT: &str =
  "%d-%m-%Y %H:%M";
pub const INPUT_FORMAT: &str =
  "%Y-%m-%dT%H:%M";

pub const DEFAULT_DEADLINE_YEARS:
  RangeInclusive<i32> = 2000..=2030;

const NAIVE_DATETIME_FORMATS: [&str;
  4] = [
  "%Y-%m-%dT%H:%M:%S%.f",
  "%Y-%m-%dT%H:%M",
  "%Y-%m-%d %H:%M:%S%.f",
  "%Y-%m-%d %H:%M"
];

/// Parses the timestamp shapes that
/// reach the tracker: RFC 3339 strings
/// written by the store, `datetime-local`
/// input values (local wall time) and
/// bare dates (UTC midnight).
#[must_use]
pub fn parse_timestamp(
  input: &str
) -> Option<DateTime<Utc>> {
  let token = input.trim();
  if token.is_empty() {
    return None;
  }

  if let Ok(dt) =
    DateTime::parse_from_rfc3339(token)
  {
    return Some(dt.with_timezone(&Utc));
  }

  for format in NAIVE_DATETIME_FORMATS {
    if let Ok(naive) =
      NaiveDateTime::parse_from_str(
        token, format
      )
    {
      return to_utc_from_local(
        naive, token
      );
    }
  }

  NaiveDate::parse_from_str(
    token, "%Y-%m-%d"
  )
  .ok()
  .and_then(|date| {
    date.and_hms_opt(0, 0, 0)
  })
  .map(|naive| {
    DateTime::<Utc>::from_naive_utc_and_offset(
      naive, Utc
    )
  })
}

fn to_utc_from_local(
  local_naive: NaiveDateTime,
  context: &str
) -> Option<DateTime<Utc>> {
  match Local
    .from_local_datetime(&local_naive)
  {
    | LocalResult::Single(local_dt) => {
      Some(local_dt.with_timezone(&Utc))
    }
    | LocalResult::Ambiguous(
      first,
      second
    ) => {
      tracing::debug!(
        context,
        first = %first,
        second = %second,
        "ambiguous local datetime; using earliest"
      );
      let chosen = if first <= second {
        first
      } else {
        second
      };
      Some(chosen.with_timezone(&Utc))
    }
    | LocalResult::None => {
      tracing::warn!(
        context,
        "local datetime does not exist \
         in this timezone"
      );
      None
    }
  }
}

/// `DD-MM-YYYY HH:MM` in local time.
#[must_use]
pub fn format_datetime(
  dt: DateTime<Utc>
) -> String {
  dt.with_timezone(&Local)
    .format(DISPLAY_FORMAT)
    .to_string()
}

/// Formats a raw timestamp for display.
///
/// Empty input yields an empty string;
/// input that does not parse is returned
/// unchanged.
#[must_use]
pub fn format_timestamp(
  input: &str
) -> String {
  if input.is_empty() {
    return String::new();
  }

  match parse_timestamp(input) {
    | Some(dt) => format_datetime(dt),
    | None => input.to_string()
  }
}

#[must_use]
pub fn local_year(
  dt: DateTime<Utc>
) -> i32 {
  dt.with_timezone(&Local).year()
}

#[must_use]
pub fn is_valid_deadline_year(
  input: &str,
  years: &RangeInclusive<i32>
) -> bool {
  parse_timestamp(input)
    .map(|dt| {
      years.contains(&local_year(dt))
    })
    .unwrap_or(false)
}

#[must_use]
pub fn is_valid_deadline_year_default(
  input: &str
) -> bool {
  is_valid_deadline_year(
    input,
    &DEFAULT_DEADLINE_YEARS
  )
}

/// Earliest value offered by the
/// deadline picker. Advisory only: saves
/// do not enforce it.
#[must_use]
pub fn min_selectable_deadline(
  now: DateTime<Utc>
) -> String {
  to_input_value(now)
}

/// Local `YYYY-MM-DDTHH:MM`, the value
/// shape of a `datetime-local` input.
#[must_use]
pub fn to_input_value(
  dt: DateTime<Utc>
) -> String {
  dt.with_timezone(&Local)
    .format(INPUT_FORMAT)
    .to_string()
}

/// Drops sub-millisecond digits, which
/// the stored form does not carry.
#[must_use]
pub fn to_storage_precision(
  dt: DateTime<Utc>
) -> DateTime<Utc> {
  dt.trunc_subsecs(3)
}

#[must_use]
pub fn to_storage_string(
  dt: &DateTime<Utc>
) -> String {
  dt.to_rfc3339_opts(
    SecondsFormat::Millis,
    true
  )
}

pub mod timestamp_serde {
  use chrono::{
    DateTime,
    Utc
  };
  use serde::{
    Deserialize,
    Deserializer,
    Serializer
  };

  pub fn serialize<S>(
    dt: &DateTime<Utc>,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    serializer.serialize_str(
      &super::to_storage_string(dt)
    )
  }

  pub fn deserialize<'de, D>(
    deserializer: D
  ) -> Result<DateTime<Utc>, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw = String::deserialize(
      deserializer
    )?;
    super::parse_timestamp(&raw)
      .ok_or_else(|| {
        serde::de::Error::custom(
          format!(
            "invalid timestamp: {raw}"
          )
        )
      })
  }

  pub mod option {
    use chrono::{
      DateTime,
      Utc
    };
    use serde::{
      Deserialize,
      Deserializer,
      Serializer
    };

    pub fn serialize<S>(
      dt: &Option<DateTime<Utc>>,
      serializer: S
    ) -> Result<S::Ok, S::Error>
    where
      S: Serializer
    {
      match dt {
        | Some(value) => {
          super::serialize(
            value, serializer
          )
        }
        | None => {
          serializer.serialize_none()
        }
      }
    }

    pub fn deserialize<'de, D>(
      deserializer: D
    ) -> Result<
      Option<DateTime<Utc>>,
      D::Error
    >
    where
      D: Deserializer<'de>
    {
      let opt =
        Option::<String>::deserialize(
          deserializer
        )?;
      match opt.as_deref().map(str::trim)
      {
        | None | Some("") => Ok(None),
        | Some(raw) => {
          crate::datetime::parse_timestamp(
            raw
          )
          .map(Some)
          .ok_or_else(|| {
            serde::de::Error::custom(
              format!(
                "invalid timestamp: \
                 {raw}"
              )
            )
          })
        }
      }
    }
  }
}
