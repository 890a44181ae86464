use crate::calendar::{date_key, parse_date_key};
use crate::errors::{AppError, ImportError};
use crate::models::{AppData, ExportDocument, Habit, HabitUpdate, ImportSummary};
use crate::storage::{load_data, persist_data};
use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Owns the habit list and ledger. Every mutator writes the full document
/// before returning.
#[derive(Debug)]
pub struct HabitStore {
    data_path: PathBuf,
    data: AppData,
}

impl HabitStore {
    pub async fn load(data_path: PathBuf) -> Self {
        let data = load_data(&data_path).await;
        info!(
            habits = data.habits.len(),
            days = data.tracking.len(),
            "loaded habit data from {}",
            data_path.display()
        );
        Self { data_path, data }
    }

    pub async fn save(&self) -> Result<(), AppError> {
        persist_data(&self.data_path, &self.data).await
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// Returns `None` without touching storage when the name is blank.
    pub async fn add_habit(
        &mut self,
        name: &str,
        color: Option<String>,
    ) -> Result<Option<Habit>, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Ok(None);
        }

        let habit = Habit {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.to_string(),
            color: normalize_color(color),
            created_at: Utc::now().timestamp_millis(),
        };
        self.data.habits.push(habit.clone());
        self.save().await?;

        info!(id = %habit.id, "added habit '{}'", habit.name);
        Ok(Some(habit))
    }

    /// Applies name and color changes. Unknown ids and blank names leave the store untouched.
    pub async fn update_habit(
        &mut self,
        id: &str,
        update: HabitUpdate,
    ) -> Result<Option<Habit>, AppError> {
        let name = match update.name.as_deref().map(str::trim) {
            Some("") => return Ok(None),
            other => other.map(str::to_string),
        };
        let Some(habit) = self.data.habits.iter_mut().find(|habit| habit.id == id) else {
            return Ok(None);
        };

        if let Some(name) = name {
            habit.name = name;
        }
        if update.color.is_some() {
            habit.color = normalize_color(update.color);
        }
        let updated = habit.clone();
        self.save().await?;

        debug!(id, "updated habit");
        Ok(Some(updated))
    }

    /// Removes the habit and every ledger entry that refers to it.
    pub async fn delete_habit(&mut self, id: &str) -> Result<bool, AppError> {
        let before = self.data.habits.len();
        self.data.habits.retain(|habit| habit.id != id);
        if self.data.habits.len() == before {
            return Ok(false);
        }

        for bucket in self.data.tracking.values_mut() {
            bucket.remove(id);
        }
        self.save().await?;

        info!(id, "deleted habit");
        Ok(true)
    }

    /// Flips completion for one day and returns the new value, or `None` for an unknown habit.
    pub async fn toggle_completion(
        &mut self,
        habit_id: &str,
        date: NaiveDate,
    ) -> Result<Option<bool>, AppError> {
        if self.data.habit(habit_id).is_none() {
            return Ok(None);
        }

        let key = date_key(date);
        let done = {
            let entry = self
                .data
                .tracking
                .entry(key.clone())
                .or_default()
                .entry(habit_id.to_string())
                .or_insert(false);
            *entry = !*entry;
            *entry
        };
        self.save().await?;

        debug!(habit_id, date = %key, done, "toggled completion");
        Ok(Some(done))
    }

    pub async fn reset(&mut self) -> Result<(), AppError> {
        self.data = AppData::default();
        self.save().await?;
        info!("reset all habit data");
        Ok(())
    }

    pub fn export(&self) -> ExportDocument {
        ExportDocument {
            exported_at: Utc::now().to_rfc3339(),
            habits: self.data.habits.clone(),
            tracking: self.data.tracking.clone(),
        }
    }

    /// Merges an exported document by habit name.
    ///
    /// Habits whose name already exists are skipped. An imported habit keeps
    /// its id and its tracking rows only when that id is not already taken;
    /// otherwise it gets a fresh id and its rows are dropped.
    pub async fn import(&mut self, bytes: &[u8]) -> Result<ImportSummary, AppError> {
        let document = parse_import(bytes)?;

        let mut names: HashSet<String> =
            self.data.habits.iter().map(|habit| habit.name.clone()).collect();
        let mut ids: HashSet<String> =
            self.data.habits.iter().map(|habit| habit.id.clone()).collect();

        let mut summary = ImportSummary::default();
        let mut carried = Vec::new();
        let mut additions = Vec::new();
        for mut habit in document.habits {
            habit.name = habit.name.trim().to_string();
            if !names.insert(habit.name.clone()) {
                summary.skipped += 1;
                continue;
            }
            if habit.id.is_empty() || ids.contains(&habit.id) {
                habit.id = uuid::Uuid::new_v4().to_string();
            } else {
                carried.push(habit.id.clone());
            }
            ids.insert(habit.id.clone());
            habit.color = normalize_color(habit.color);
            additions.push(habit);
            summary.imported += 1;
        }

        if additions.is_empty() {
            return Ok(summary);
        }

        for (key, bucket) in &document.tracking {
            for id in &carried {
                if let Some(done) = bucket.get(id) {
                    self.data
                        .tracking
                        .entry(key.clone())
                        .or_default()
                        .insert(id.clone(), *done);
                }
            }
        }
        self.data.habits.extend(additions);
        self.save().await?;

        info!(
            imported = summary.imported,
            skipped = summary.skipped,
            "imported habits"
        );
        Ok(summary)
    }
}

/// Validates the whole document before anything is applied.
fn parse_import(bytes: &[u8]) -> Result<ExportDocument, ImportError> {
    let document: ExportDocument = serde_json::from_slice(bytes)?;
    if document.habits.iter().any(|habit| habit.name.trim().is_empty()) {
        return Err(ImportError::EmptyName);
    }
    if let Some(key) = document.tracking.keys().find(|key| parse_date_key(key).is_none()) {
        return Err(ImportError::InvalidDateKey(key.clone()));
    }
    Ok(document)
}

fn normalize_color(color: Option<String>) -> Option<String> {
    color
        .map(|color| color.trim().to_string())
        .filter(|color| !color.is_empty())
}
