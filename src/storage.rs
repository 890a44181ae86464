use crate::errors::AppError;
use crate::models::{AppData, DayBucket, Habit, Ledger};
use serde::Deserialize;
use serde_json::Value;
use std::{collections::BTreeMap, env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::{error, warn};

pub const DEFAULT_DATA_PATH: &str = "data/habits.json";

pub fn resolve_data_path() -> PathBuf {
    match env::var("APP_DATA_PATH") {
        Ok(path) if !path.trim().is_empty() => PathBuf::from(path),
        _ => PathBuf::from(DEFAULT_DATA_PATH),
    }
}

/// Early data files stored bare habit names.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredHabit {
    Full(Habit),
    Legacy(String),
}

/// Early data files seeded every viewed day with an empty list.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredBucket {
    Flags(DayBucket),
    Legacy(Vec<Value>),
}

pub async fn load_data(path: &Path) -> AppData {
    match fs::read(path).await {
        Ok(bytes) => parse_data(&bytes),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => AppData::default(),
        Err(err) => {
            error!("failed to read data file: {err}");
            AppData::default()
        }
    }
}

/// Decodes a data file. Each record falls back to empty on its own, so a
/// corrupt ledger does not discard the habit list or the other way round.
pub fn parse_data(bytes: &[u8]) -> AppData {
    let mut root = match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(root)) => root,
        Ok(_) => {
            error!("data file is not a JSON object");
            return AppData::default();
        }
        Err(err) => {
            error!("failed to parse data file: {err}");
            return AppData::default();
        }
    };

    let habits = match root.remove("habits") {
        None | Some(Value::Null) => Vec::new(),
        Some(value) => match serde_json::from_value::<Vec<StoredHabit>>(value) {
            Ok(stored) => stored.into_iter().filter_map(upgrade_habit).collect(),
            Err(err) => {
                error!("failed to parse habits record: {err}");
                Vec::new()
            }
        },
    };

    let tracking = match root.remove("tracking") {
        None | Some(Value::Null) => Ledger::new(),
        Some(value) => match serde_json::from_value::<BTreeMap<String, StoredBucket>>(value) {
            Ok(stored) => stored
                .into_iter()
                .map(|(key, bucket)| match bucket {
                    StoredBucket::Flags(flags) => (key, flags),
                    StoredBucket::Legacy(_) => (key, DayBucket::new()),
                })
                .collect(),
            Err(err) => {
                error!("failed to parse tracking record: {err}");
                Ledger::new()
            }
        },
    };

    AppData { habits, tracking }
}

fn upgrade_habit(stored: StoredHabit) -> Option<Habit> {
    match stored {
        StoredHabit::Full(habit) => Some(habit),
        StoredHabit::Legacy(name) => {
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            warn!("upgrading legacy habit entry '{name}'");
            Some(Habit {
                id: uuid::Uuid::new_v4().to_string(),
                name: name.to_string(),
                color: None,
                created_at: 0,
            })
        }
    }
}

/// Writes the whole document to a sibling temp file, then renames it over `path`.
pub async fn persist_data(path: &Path, data: &AppData) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(data).map_err(AppError::internal)?;
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);
    fs::write(&tmp, payload).await?;
    fs::rename(&tmp, path).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_legacy_layout() {
        let raw = br#"{"habits":["Read","  ","Run"],"tracking":{"2024-01-01":[]}}"#;
        let data = parse_data(raw);
        assert_eq!(data.habits.len(), 2);
        assert_eq!(data.habits[0].name, "Read");
        assert_eq!(data.habits[1].name, "Run");
        assert_ne!(data.habits[0].id, data.habits[1].id);
        assert!(data.tracking["2024-01-01"].is_empty());
    }

    #[test]
    fn corrupt_records_fall_back_independently() {
        let raw = br#"{"habits":[{"id":"a","name":"Read","createdAt":5}],"tracking":"oops"}"#;
        let data = parse_data(raw);
        assert_eq!(data.habits.len(), 1);
        assert!(data.tracking.is_empty());

        assert_eq!(parse_data(b"not json"), AppData::default());
        assert_eq!(parse_data(b"[1,2,3]"), AppData::default());
    }

    #[tokio::test]
    async fn persist_then_load_round_trips() {
        let mut path = std::env::temp_dir();
        path.push(format!("habit_tracker_storage_{}.json", std::process::id()));

        let mut data = AppData::default();
        data.habits.push(Habit {
            id: "h1".to_string(),
            name: "Stretch".to_string(),
            color: Some("#ff6b4a".to_string()),
            created_at: 1_700_000_000_000,
        });
        data.tracking
            .entry("2024-01-01".to_string())
            .or_default()
            .insert("h1".to_string(), true);

        persist_data(&path, &data).await.unwrap();
        let loaded = load_data(&path).await;
        let _ = std::fs::remove_file(&path);

        assert_eq!(loaded, data);
    }

    #[tokio::test]
    async fn missing_file_loads_empty() {
        let path = std::env::temp_dir().join("habit_tracker_missing_file_does_not_exist.json");
        assert_eq!(load_data(&path).await, AppData::default());
    }
}
