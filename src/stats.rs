use crate::calendar::{date_key, format_label_at, parse_date_key, today};
use crate::models::{
    AppData, DayState, DaySummary, HabitDayView, MonthDay, MonthGrid, WeekDay, WeekGrid,
};
use chrono::{Datelike, Duration, NaiveDate};

/// Consecutive completed days ending at `as_of`, stopping at the first gap.
pub fn streak_for(data: &AppData, habit_id: &str, as_of: NaiveDate) -> u32 {
    let mut streak = 0;
    let mut date = as_of;
    while data.is_done(habit_id, &date_key(date)) {
        streak += 1;
        match date.pred_opt() {
            Some(previous) => date = previous,
            None => break,
        }
    }
    streak
}

/// Best run of consecutive completed calendar days across the whole ledger.
///
/// Walks every calendar day between the earliest and latest ledger keys, so a
/// day with no bucket at all breaks a run just like an explicit `false`.
pub fn longest_streak(data: &AppData, habit_id: &str) -> u32 {
    let mut dates = data.tracking.keys().filter_map(|key| parse_date_key(key));
    let Some(first) = dates.next() else {
        return 0;
    };
    let (start, end) = dates.fold((first, first), |(lo, hi), date| (lo.min(date), hi.max(date)));

    let mut best = 0;
    let mut run = 0;
    let mut date = start;
    loop {
        if data.is_done(habit_id, &date_key(date)) {
            run += 1;
            best = best.max(run);
        } else {
            run = 0;
        }
        match date.succ_opt() {
            Some(next) if next <= end => date = next,
            _ => break,
        }
    }
    best
}

/// Number of existing habits marked done on `key`.
pub fn completed_count(data: &AppData, key: &str) -> usize {
    data.habits
        .iter()
        .filter(|habit| data.is_done(&habit.id, key))
        .count()
}

/// Share of habits done on `key`, in `[0, 1]`; zero when there are no habits.
pub fn completion_ratio(data: &AppData, key: &str) -> f64 {
    if data.habits.is_empty() {
        return 0.0;
    }
    completed_count(data, key) as f64 / data.habits.len() as f64
}

pub fn day_summary(data: &AppData, viewing: NaiveDate) -> DaySummary {
    day_summary_at(today(), data, viewing)
}

pub fn day_summary_at(today: NaiveDate, data: &AppData, viewing: NaiveDate) -> DaySummary {
    let key = date_key(viewing);
    let habits = data
        .habits_newest_first()
        .into_iter()
        .map(|habit| HabitDayView {
            id: habit.id.clone(),
            name: habit.name.clone(),
            color: habit.color.clone(),
            done: data.is_done(&habit.id, &key),
            streak: streak_for(data, &habit.id, viewing),
        })
        .collect();

    DaySummary {
        label: format_label_at(today, viewing),
        is_today: viewing == today,
        can_go_forward: viewing < today,
        completed: completed_count(data, &key),
        total: data.habits.len(),
        ratio: completion_ratio(data, &key),
        date: key,
        habits,
    }
}

pub fn week_grid(data: &AppData, center: NaiveDate) -> WeekGrid {
    week_grid_at(today(), data, center)
}

/// Monday to Sunday of the week containing `center`.
pub fn week_grid_at(today: NaiveDate, data: &AppData, center: NaiveDate) -> WeekGrid {
    let start = week_start(center);
    let end = start.checked_add_signed(Duration::days(6)).unwrap_or(NaiveDate::MAX);

    let days = (0..7)
        .filter_map(|offset| start.checked_add_signed(Duration::days(offset)))
        .map(|date| {
            let key = date_key(date);
            WeekDay {
                weekday: date.format("%a").to_string(),
                ratio: completion_ratio(data, &key),
                state: day_state(today, date),
                date: key,
            }
        })
        .collect();

    WeekGrid {
        week: week_label(start),
        start_date: date_key(start),
        end_date: date_key(end),
        days,
    }
}

pub fn month_grid(data: &AppData, center: NaiveDate) -> MonthGrid {
    month_grid_at(today(), data, center)
}

pub fn month_grid_at(today: NaiveDate, data: &AppData, center: NaiveDate) -> MonthGrid {
    let first = center.with_day(1).unwrap_or(center);
    let days = (0..days_in_month(first))
        .filter_map(|offset| first.checked_add_signed(Duration::days(i64::from(offset))))
        .map(|date| {
            let key = date_key(date);
            MonthDay {
                day: date.day(),
                ratio: completion_ratio(data, &key),
                state: day_state(today, date),
                date: key,
            }
        })
        .collect();

    MonthGrid {
        year: first.year(),
        month: first.month(),
        label: first.format("%B %Y").to_string(),
        leading_blanks: first.weekday().num_days_from_sunday(),
        days,
    }
}

fn day_state(today: NaiveDate, date: NaiveDate) -> DayState {
    if date < today {
        DayState::Past
    } else if date == today {
        DayState::Today
    } else {
        DayState::Future
    }
}

fn days_in_month(first: NaiveDate) -> u32 {
    let next_month = if first.month() == 12 {
        NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)
    };
    next_month
        .map(|next| (next - first).num_days() as u32)
        .unwrap_or(31)
}

/// Monday of the week containing `date`, clamped to the earliest representable day.
fn week_start(date: NaiveDate) -> NaiveDate {
    date.checked_sub_signed(Duration::days(date.weekday().num_days_from_monday() as i64))
        .unwrap_or(NaiveDate::MIN)
}

fn week_label(date: NaiveDate) -> String {
    let iso = date.iso_week();
    format!("{}-W{:02}", iso.year(), iso.week())
}
