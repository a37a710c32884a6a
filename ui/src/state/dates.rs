use chrono::{Duration, Local, NaiveDate};

/// `<input type="date">` value format.
const ISO: &str = "%Y-%m-%d";

pub const DEFAULT_NIGHTS: i64 = 3;

fn parse(iso: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(iso.trim(), ISO).ok()
}

/// Today in the viewer's local timezone, `YYYY-MM-DD`.
pub fn today_iso() -> String {
    Local::now().date_naive().format(ISO).to_string()
}

/// Calendar arithmetic on an ISO date. Empty or garbage input falls back to today.
pub fn add_days_iso(iso: &str, days: i64) -> String {
    let Some(date) = parse(iso) else {
        return today_iso();
    };

    date.checked_add_signed(Duration::days(days))
        .unwrap_or(date)
        .format(ISO)
        .to_string()
}

/// `YYYY-MM-DD` -> `dd.mm.yyyy`, empty for anything unparsable.
pub fn format_dd_mm_yyyy(iso: &str) -> String {
    parse(iso)
        .map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_default()
}

/// Short variant for tight layouts: `dd.mm`.
pub fn format_dd_mm(iso: &str) -> String {
    parse(iso)
        .map(|d| d.format("%d.%m").to_string())
        .unwrap_or_default()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateRange {
    pub check_in: String,
    pub check_out: String,
}

pub fn default_range(today: &str) -> DateRange {
    DateRange {
        check_in: today.to_owned(),
        check_out: add_days_iso(today, DEFAULT_NIGHTS),
    }
}

impl DateRange {
    pub fn is_empty(&self) -> bool {
        self.check_in.is_empty() && self.check_out.is_empty()
    }

    /// Fills empty fields with the default stay, keeps whatever the guest picked
    /// unless the day has rolled past it.
    pub fn fill_defaults(&mut self, today: &str) {
        if self.check_in.is_empty() || self.check_in.as_str() < today {
            *self = default_range(today);
        } else if self.check_out.is_empty() {
            self.check_out = add_days_iso(&self.check_in, DEFAULT_NIGHTS);
        }
    }

    /// A check-out on or before the new check-in is cleared, not shifted,
    /// so the guest has to pick it again. Past dates are ignored, returns false.
    pub fn set_check_in(&mut self, value: &str, today: &str) -> bool {
        if !value.is_empty() && value < self.min_check_in(today) {
            return false;
        }
        self.check_in = value.to_owned();

        if !self.check_out.is_empty() && self.check_out.as_str() <= value {
            self.check_out.clear();
        }
        true
    }

    /// Returns false when the value sits before `min_check_out` and was ignored.
    pub fn set_check_out(&mut self, value: &str, today: &str) -> bool {
        if !value.is_empty() && value < self.min_check_out(today) {
            return false;
        }
        self.check_out = value.to_owned();
        true
    }

    pub fn min_check_in<'a>(&self, today: &'a str) -> &'a str {
        today
    }

    pub fn min_check_out<'a>(&'a self, today: &'a str) -> &'a str {
        today.max(self.check_in.as_str())
    }

    pub fn is_valid(&self, today: &str) -> bool {
        let not_past = |d: &str| d.is_empty() || d >= today;
        let ordered = self.check_in.is_empty()
            || self.check_out.is_empty()
            || self.check_out >= self.check_in;

        not_past(&self.check_in) && not_past(&self.check_out) && ordered
    }

    /// `dd.mm.yyyy — dd.mm.yyyy` once both ends are picked.
    pub fn display(&self) -> Option<String> {
        if self.check_in.is_empty() || self.check_out.is_empty() {
            return None;
        }
        Some(format!(
            "{} — {}",
            format_dd_mm_yyyy(&self.check_in),
            format_dd_mm_yyyy(&self.check_out)
        ))
    }

    pub fn display_short(&self) -> Option<String> {
        if self.check_in.is_empty() || self.check_out.is_empty() {
            return None;
        }
        Some(format!(
            "{} — {}",
            format_dd_mm(&self.check_in),
            format_dd_mm(&self.check_out)
        ))
    }
}
