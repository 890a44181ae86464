use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Completion flags for one calendar day, keyed by habit id.
pub type DayBucket = BTreeMap<String, bool>;

/// Date key (`YYYY-MM-DD`) to day bucket. Missing entries read as not completed.
pub type Ledger = BTreeMap<String, DayBucket>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Milliseconds since the Unix epoch.
    #[serde(default)]
    pub created_at: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppData {
    pub habits: Vec<Habit>,
    pub tracking: Ledger,
}

impl AppData {
    pub fn habit(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|habit| habit.id == id)
    }

    pub fn is_done(&self, habit_id: &str, key: &str) -> bool {
        self.tracking
            .get(key)
            .and_then(|bucket| bucket.get(habit_id))
            .copied()
            .unwrap_or(false)
    }

    /// Habits ordered newest first.
    pub fn habits_newest_first(&self) -> Vec<&Habit> {
        let mut habits: Vec<&Habit> = self.habits.iter().collect();
        habits.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        habits
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct HabitUpdate {
    pub name: Option<String>,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewHabitRequest {
    pub name: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleResponse {
    pub habit_id: String,
    pub date: String,
    pub done: bool,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakResponse {
    pub habit_id: String,
    pub as_of: String,
    pub current: u32,
    pub longest: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitDayView {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub done: bool,
    pub streak: u32,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub date: String,
    pub label: String,
    pub is_today: bool,
    pub can_go_forward: bool,
    pub completed: usize,
    pub total: usize,
    pub ratio: f64,
    pub habits: Vec<HabitDayView>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayState {
    Past,
    Today,
    Future,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WeekDay {
    pub date: String,
    pub weekday: String,
    pub ratio: f64,
    pub state: DayState,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekGrid {
    pub week: String,
    pub start_date: String,
    pub end_date: String,
    pub days: Vec<WeekDay>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MonthDay {
    pub day: u32,
    pub date: String,
    pub ratio: f64,
    pub state: DayState,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub label: String,
    /// Blank cells before day 1 under a Sunday-first header.
    pub leading_blanks: u32,
    pub days: Vec<MonthDay>,
}

impl MonthGrid {
    /// Grid cells in header order, `None` for the leading placeholders.
    pub fn cells(&self) -> Vec<Option<&MonthDay>> {
        let mut cells: Vec<Option<&MonthDay>> = vec![None; self.leading_blanks as usize];
        cells.extend(self.days.iter().map(Some));
        cells
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    #[serde(default)]
    pub exported_at: String,
    pub habits: Vec<Habit>,
    #[serde(default)]
    pub tracking: Ledger,
}

#[derive(Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImportSummary {
    pub imported: usize,
    pub skipped: usize,
}
