//! Session identifiers and schedule parsing.
//!
//! The probe asks an Ergast-compatible API for the schedule of a single
//! round (`<base>/<year>/<round>.json`) and confirms the requested session
//! is listed for that event.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use super::error::ConnectionError;

/// A session within a race weekend.
///
/// Serialized as its short code; parsing accepts the code in any case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SessionCode {
    #[serde(rename = "FP1")]
    Practice1,
    #[serde(rename = "FP2")]
    Practice2,
    #[serde(rename = "FP3")]
    Practice3,
    #[serde(rename = "Q")]
    Qualifying,
    #[serde(rename = "SQ")]
    SprintQualifying,
    #[serde(rename = "S")]
    Sprint,
    #[serde(rename = "R")]
    Race,
}

impl FromStr for SessionCode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "FP1" => Ok(Self::Practice1),
            "FP2" => Ok(Self::Practice2),
            "FP3" => Ok(Self::Practice3),
            "Q" => Ok(Self::Qualifying),
            "SQ" => Ok(Self::SprintQualifying),
            "S" => Ok(Self::Sprint),
            "R" => Ok(Self::Race),
            _ => Err(format!(
                "unknown session code '{}', expected one of FP1, FP2, FP3, Q, SQ, S, R",
                s
            )),
        }
    }
}

impl<'de> Deserialize<'de> for SessionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        code.parse().map_err(de::Error::custom)
    }
}

impl SessionCode {
    /// Short code as used in timing data (`FP1`, `Q`, ...).
    pub fn code(self) -> &'static str {
        match self {
            Self::Practice1 => "FP1",
            Self::Practice2 => "FP2",
            Self::Practice3 => "FP3",
            Self::Qualifying => "Q",
            Self::SprintQualifying => "SQ",
            Self::Sprint => "S",
            Self::Race => "R",
        }
    }

    /// Human-readable session name.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Practice1 => "Practice 1",
            Self::Practice2 => "Practice 2",
            Self::Practice3 => "Practice 3",
            Self::Qualifying => "Qualifying",
            Self::SprintQualifying => "Sprint Qualifying",
            Self::Sprint => "Sprint",
            Self::Race => "Race",
        }
    }

    /// Schedule keys on a race object that mark this session as scheduled.
    ///
    /// Empty for the race itself, which is the race object.
    fn schedule_keys(self) -> &'static [&'static str] {
        match self {
            Self::Practice1 => &["FirstPractice"],
            Self::Practice2 => &["SecondPractice"],
            Self::Practice3 => &["ThirdPractice"],
            Self::Qualifying => &["Qualifying"],
            Self::SprintQualifying => &["SprintQualifying", "SprintShootout"],
            Self::Sprint => &["Sprint"],
            Self::Race => &[],
        }
    }
}

impl fmt::Display for SessionCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Identifies one session: season, round number and session code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionKey {
    pub year: u16,
    pub round: u8,
    pub session: SessionCode,
}

impl SessionKey {
    /// Create a new session key.
    pub fn new(year: u16, round: u8, session: SessionCode) -> Self {
        Self {
            year,
            round,
            session,
        }
    }

    /// Path of the round's schedule relative to the API base.
    pub fn schedule_path(&self) -> String {
        format!("/{}/{}.json", self.year, self.round)
    }
}

impl fmt::Display for SessionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} round {} {}", self.year, self.round, self.session)
    }
}

/// What the probe learned about the requested session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionInfo {
    /// Event name, e.g. "Bahrain Grand Prix".
    pub event_name: String,
    /// Session name, e.g. "Practice 1".
    pub session_name: String,
}

#[derive(Debug, Deserialize)]
struct ScheduleResponse {
    #[serde(rename = "MRData")]
    mr_data: MrData,
}

#[derive(Debug, Deserialize)]
struct MrData {
    #[serde(rename = "RaceTable")]
    race_table: RaceTable,
}

#[derive(Debug, Deserialize)]
struct RaceTable {
    #[serde(rename = "Races", default)]
    races: Vec<Race>,
}

#[derive(Debug, Deserialize)]
struct Race {
    #[serde(rename = "raceName")]
    race_name: String,
    #[serde(flatten)]
    rest: HashMap<String, serde_json::Value>,
}

/// Parse a round schedule and locate the session named by `key`.
pub fn parse_schedule(
    body: &str,
    key: &SessionKey,
    url: &str,
) -> Result<SessionInfo, ConnectionError> {
    let response: ScheduleResponse =
        serde_json::from_str(body).map_err(|e| ConnectionError::MalformedResponse {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    let race = response
        .mr_data
        .race_table
        .races
        .into_iter()
        .next()
        .ok_or(ConnectionError::EventNotFound {
            year: key.year,
            round: key.round,
        })?;

    let keys = key.session.schedule_keys();
    let scheduled = keys.is_empty() || keys.iter().any(|k| race.rest.contains_key(*k));
    if !scheduled {
        return Err(ConnectionError::SessionNotScheduled {
            event: race.race_name,
            session: key.session.display_name().to_string(),
        });
    }

    Ok(SessionInfo {
        event_name: race.race_name,
        session_name: key.session.display_name().to_string(),
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) const BAHRAIN_2023: &str = r#"{
  "MRData": {
    "series": "f1",
    "RaceTable": {
      "season": "2023",
      "round": "1",
      "Races": [
        {
          "season": "2023",
          "round": "1",
          "raceName": "Bahrain Grand Prix",
          "date": "2023-03-05",
          "FirstPractice": { "date": "2023-03-03", "time": "11:30:00Z" },
          "SecondPractice": { "date": "2023-03-03", "time": "15:00:00Z" },
          "ThirdPractice": { "date": "2023-03-04", "time": "11:30:00Z" },
          "Qualifying": { "date": "2023-03-04", "time": "15:00:00Z" }
        }
      ]
    }
  }
}"#;

    fn key(session: SessionCode) -> SessionKey {
        SessionKey::new(2023, 1, session)
    }

    #[test]
    fn parses_event_and_session_names() {
        let info = parse_schedule(BAHRAIN_2023, &key(SessionCode::Practice1), "u").unwrap();
        assert_eq!(info.event_name, "Bahrain Grand Prix");
        assert_eq!(info.session_name, "Practice 1");
    }

    #[test]
    fn race_is_always_scheduled() {
        let info = parse_schedule(BAHRAIN_2023, &key(SessionCode::Race), "u").unwrap();
        assert_eq!(info.session_name, "Race");
    }

    #[test]
    fn missing_session_is_reported() {
        let err = parse_schedule(BAHRAIN_2023, &key(SessionCode::Sprint), "u").unwrap_err();
        match err {
            ConnectionError::SessionNotScheduled { event, session } => {
                assert_eq!(event, "Bahrain Grand Prix");
                assert_eq!(session, "Sprint");
            }
            other => panic!("Expected SessionNotScheduled, got {:?}", other),
        }
    }

    #[test]
    fn sprint_shootout_counts_as_sprint_qualifying() {
        let body = r#"{"MRData":{"RaceTable":{"Races":[
            {"raceName":"Azerbaijan Grand Prix","SprintShootout":{"date":"2023-04-29"}}
        ]}}}"#;
        let info = parse_schedule(body, &key(SessionCode::SprintQualifying), "u").unwrap();
        assert_eq!(info.session_name, "Sprint Qualifying");
    }

    #[test]
    fn empty_race_table_is_event_not_found() {
        let body = r#"{"MRData":{"RaceTable":{"season":"2023","Races":[]}}}"#;
        let err = parse_schedule(body, &SessionKey::new(2023, 40, SessionCode::Race), "u")
            .unwrap_err();
        assert!(matches!(
            err,
            ConnectionError::EventNotFound {
                year: 2023,
                round: 40
            }
        ));
    }

    #[test]
    fn invalid_json_is_malformed() {
        let err = parse_schedule(
            "<html>busy</html>",
            &key(SessionCode::Race),
            "http://x/2023/1.json",
        )
        .unwrap_err();
        match err {
            ConnectionError::MalformedResponse { url, .. } => {
                assert_eq!(url, "http://x/2023/1.json")
            }
            other => panic!("Expected MalformedResponse, got {:?}", other),
        }
    }

    #[test]
    fn session_codes_deserialize_either_case() {
        let upper: SessionCode = serde_yaml::from_str("FP1").unwrap();
        let lower: SessionCode = serde_yaml::from_str("sq").unwrap();
        assert_eq!(upper, SessionCode::Practice1);
        assert_eq!(lower, SessionCode::SprintQualifying);
    }

    #[test]
    fn session_codes_deserialize_mixed_case() {
        let fp1: SessionCode = serde_yaml::from_str("Fp1").unwrap();
        let sq: SessionCode = serde_yaml::from_str("Sq").unwrap();
        assert_eq!(fp1, SessionCode::Practice1);
        assert_eq!(sq, SessionCode::SprintQualifying);
    }

    #[test]
    fn unknown_session_code_is_rejected() {
        let err = serde_yaml::from_str::<SessionCode>("FP4").unwrap_err();
        assert!(err.to_string().contains("unknown session code 'FP4'"));
    }

    #[test]
    fn session_code_serializes_as_short_code() {
        let yaml = serde_yaml::to_string(&SessionCode::SprintQualifying).unwrap();
        assert_eq!(yaml.trim(), "SQ");
    }

    #[test]
    fn session_key_builds_schedule_path() {
        let key = SessionKey::new(2023, 1, SessionCode::Practice1);
        assert_eq!(key.schedule_path(), "/2023/1.json");
        assert_eq!(key.to_string(), "2023 round 1 FP1");
    }
}
