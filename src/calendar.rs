use chrono::{DateTime, Datelike, Local, NaiveDate, TimeZone};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Key of the local calendar day containing `instant`; time of day is ignored.
pub fn date_key_of<Tz: TimeZone>(instant: &DateTime<Tz>) -> String {
    date_key(instant.date_naive())
}

/// Accepts only canonical four-digit-year keys, so every parsed key maps back
/// to the exact ledger bucket it names.
pub fn parse_date_key(key: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(key, "%Y-%m-%d").ok()?;
    if !(0..=9999).contains(&date.year()) || date_key(date) != key {
        return None;
    }
    Some(date)
}

pub fn ordinal_suffix(day: u32) -> &'static str {
    if day % 10 == 1 && day != 11 {
        "st"
    } else if day % 10 == 2 && day != 12 {
        "nd"
    } else if day % 10 == 3 && day != 13 {
        "rd"
    } else {
        "th"
    }
}

pub fn format_label(date: NaiveDate) -> String {
    format_label_at(today(), date)
}

/// `"Today"`, or e.g. `"Sat 21st Oct"`.
pub fn format_label_at(today: NaiveDate, date: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    let day = date.day();
    format!(
        "{} {}{} {}",
        date.format("%a"),
        day,
        ordinal_suffix(day),
        date.format("%b")
    )
}

pub fn is_today(date: NaiveDate) -> bool {
    date == today()
}

/// Owns the viewing date. The cursor never moves past the real current day.
#[derive(Debug, Clone)]
pub struct Navigator {
    viewing: NaiveDate,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self { viewing: today() }
    }

    pub fn starting_at(viewing: NaiveDate) -> Self {
        Self { viewing }
    }

    pub fn viewing(&self) -> NaiveDate {
        self.viewing
    }

    pub fn viewing_key(&self) -> String {
        date_key(self.viewing)
    }

    pub fn go_to_previous_day(&mut self) {
        if let Some(previous) = self.viewing.pred_opt() {
            self.viewing = previous;
        }
    }

    pub fn go_to_next_day(&mut self) -> bool {
        self.go_to_next_day_at(today())
    }

    pub fn go_to_next_day_at(&mut self, today: NaiveDate) -> bool {
        let Some(next) = self.viewing.succ_opt() else {
            return false;
        };
        if next > today {
            return false;
        }
        self.viewing = next;
        true
    }

    /// Jumps to `date`; refused when `date` is after today.
    pub fn go_to(&mut self, date: NaiveDate) -> bool {
        self.go_to_at(today(), date)
    }

    pub fn go_to_at(&mut self, today: NaiveDate, date: NaiveDate) -> bool {
        if date > today {
            return false;
        }
        self.viewing = date;
        true
    }

    pub fn reset_to_today(&mut self) {
        self.viewing = today();
    }

    pub fn can_go_forward(&self) -> bool {
        self.can_go_forward_at(today())
    }

    pub fn can_go_forward_at(&self, today: NaiveDate) -> bool {
        self.viewing < today
    }

    pub fn is_viewing_today(&self) -> bool {
        self.is_viewing_today_at(today())
    }

    pub fn is_viewing_today_at(&self, today: NaiveDate) -> bool {
        self.viewing == today
    }

    pub fn label_at(&self, today: NaiveDate) -> String {
        format_label_at(today, self.viewing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn ordinal_suffix_handles_teens() {
        assert_eq!(ordinal_suffix(1), "st");
        assert_eq!(ordinal_suffix(2), "nd");
        assert_eq!(ordinal_suffix(3), "rd");
        assert_eq!(ordinal_suffix(4), "th");
        assert_eq!(ordinal_suffix(11), "th");
        assert_eq!(ordinal_suffix(12), "th");
        assert_eq!(ordinal_suffix(13), "th");
        assert_eq!(ordinal_suffix(21), "st");
        assert_eq!(ordinal_suffix(22), "nd");
        assert_eq!(ordinal_suffix(23), "rd");
        assert_eq!(ordinal_suffix(31), "st");
    }

    #[test]
    fn label_uses_today_or_short_form() {
        let today = day(2024, 10, 25);
        assert_eq!(format_label_at(today, today), "Today");
        assert_eq!(format_label_at(today, day(2024, 10, 11)), "Fri 11th Oct");
        assert_eq!(format_label_at(today, day(2024, 10, 21)), "Mon 21st Oct");
        assert_eq!(format_label_at(today, day(2024, 9, 13)), "Fri 13th Sep");
        assert_eq!(format_label_at(today, day(2024, 10, 2)), "Wed 2nd Oct");
    }

    #[test]
    fn date_key_ignores_time_of_day() {
        let morning = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 0, 0, 1).unwrap();
        let night = chrono::Utc.with_ymd_and_hms(2024, 3, 9, 23, 59, 59).unwrap();
        assert_eq!(date_key_of(&morning), "2024-03-09");
        assert_eq!(date_key_of(&morning), date_key_of(&night));
        assert_eq!(parse_date_key("2024-03-09"), Some(day(2024, 3, 9)));
        assert_eq!(parse_date_key("not-a-date"), None);
    }

    #[test]
    fn parse_date_key_rejects_non_canonical_keys() {
        assert_eq!(parse_date_key("2024-1-5"), None);
        assert_eq!(parse_date_key(" 2024-01-06"), None);
        assert_eq!(parse_date_key("2024-01-06 "), None);
        assert_eq!(parse_date_key("+262142-12-31"), None);
        assert_eq!(parse_date_key("-262143-01-01"), None);
        assert_eq!(parse_date_key("0000-01-01"), Some(day(0, 1, 1)));
        assert_eq!(parse_date_key("9999-12-31"), Some(day(9999, 12, 31)));
    }

    #[test]
    fn next_day_at_calendar_limit_is_refused() {
        let mut nav = Navigator::starting_at(NaiveDate::MAX);
        assert!(!nav.go_to_next_day_at(NaiveDate::MAX));
        assert_eq!(nav.viewing(), NaiveDate::MAX);

        let mut nav = Navigator::starting_at(NaiveDate::MIN);
        nav.go_to_previous_day();
        assert_eq!(nav.viewing(), NaiveDate::MIN);
    }

    #[test]
    fn fresh_navigator_starts_on_today() {
        let nav = Navigator::new();
        assert!(is_today(nav.viewing()));
        assert!(nav.is_viewing_today());
        assert!(!nav.can_go_forward());
        assert_eq!(format_label(nav.viewing()), "Today");
    }

    #[test]
    fn next_day_is_refused_when_viewing_today() {
        let today = day(2024, 1, 2);
        let mut nav = Navigator::starting_at(today);
        assert!(nav.is_viewing_today_at(today));
        assert!(!nav.can_go_forward_at(today));
        assert!(!nav.go_to_next_day_at(today));
        assert_eq!(nav.viewing(), today);
    }

    #[test]
    fn navigation_moves_back_freely_and_forward_up_to_today() {
        let today = day(2024, 3, 1);
        let mut nav = Navigator::starting_at(today);
        nav.go_to_previous_day();
        nav.go_to_previous_day();
        assert_eq!(nav.viewing(), day(2024, 2, 28));
        assert!(nav.can_go_forward_at(today));
        assert_eq!(nav.label_at(today), "Wed 28th Feb");

        assert!(nav.go_to_next_day_at(today));
        assert_eq!(nav.viewing(), day(2024, 2, 29));
        assert!(nav.go_to_next_day_at(today));
        assert!(nav.is_viewing_today_at(today));
        assert!(!nav.go_to_next_day_at(today));
        assert_eq!(nav.viewing_key(), "2024-03-01");
    }

    #[test]
    fn go_to_rejects_future_dates() {
        let today = day(2024, 5, 5);
        let mut nav = Navigator::starting_at(day(2024, 5, 1));
        assert!(!nav.go_to_at(today, day(2024, 5, 6)));
        assert_eq!(nav.viewing(), day(2024, 5, 1));
        assert!(nav.go_to_at(today, day(2023, 12, 31)));
        assert_eq!(nav.viewing(), day(2023, 12, 31));
    }
}
