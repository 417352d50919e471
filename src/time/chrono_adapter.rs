use chrono::{DateTime, Datelike, Months, NaiveDate, NaiveDateTime, Timelike, Utc, Weekday};

use crate::time::{DateAdapter, TimeUnit};

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;
const MS_PER_WEEK: i64 = 7 * MS_PER_DAY;

/// Moment-style format tokens understood by [`ChronoDateAdapter::format`].
///
/// Ordered longest-first so the scanner matches `YYYY` before `Y` would ever
/// be considered. `[...]` brackets escape literal text.
const FORMAT_TOKENS: &[&str] = &[
    "YYYY", "MMM", "SSS", "mm", "ss", "H", "h", "D", "A", "a", "Q",
];

/// Default date adapter over `chrono`, working in UTC epoch milliseconds.
///
/// Parsing accepts RFC 3339, `%Y-%m-%d %H:%M:%S`, bare `%Y-%m-%d` dates and
/// plain epoch-millisecond strings. Calendar results that fall outside the
/// representable range leave the input unchanged rather than panicking.
#[derive(Debug, Default, Clone, Copy)]
pub struct ChronoDateAdapter;

impl DateAdapter for ChronoDateAdapter {
    fn parse(&self, value: &str, _format: Option<&str>) -> Option<i64> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
            return Some(dt.timestamp_millis());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
            return Some(dt.and_utc().timestamp_millis());
        }
        if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
            return date
                .and_hms_opt(0, 0, 0)
                .map(|dt| dt.and_utc().timestamp_millis());
        }
        value.parse::<i64>().ok()
    }

    fn format(&self, time_ms: i64, format: &str) -> String {
        let Some(dt) = datetime_utc(time_ms) else {
            return time_ms.to_string();
        };

        let mut out = String::with_capacity(format.len());
        let mut rest = format;
        'scan: while !rest.is_empty() {
            if let Some(stripped) = rest.strip_prefix('[') {
                match stripped.find(']') {
                    Some(end) => {
                        out.push_str(&stripped[..end]);
                        rest = &stripped[end + 1..];
                    }
                    None => {
                        out.push_str(stripped);
                        rest = "";
                    }
                }
                continue;
            }

            for token in FORMAT_TOKENS {
                if let Some(stripped) = rest.strip_prefix(token) {
                    out.push_str(&render_token(&dt, token));
                    rest = stripped;
                    continue 'scan;
                }
            }

            // Not a token; copy the character through as a literal.
            let mut chars = rest.chars();
            if let Some(ch) = chars.next() {
                out.push(ch);
            }
            rest = chars.as_str();
        }
        out
    }

    fn add(&self, time_ms: i64, amount: i64, unit: TimeUnit) -> i64 {
        match unit {
            TimeUnit::Millisecond => time_ms.saturating_add(amount),
            TimeUnit::Second => time_ms.saturating_add(amount.saturating_mul(MS_PER_SECOND)),
            TimeUnit::Minute => time_ms.saturating_add(amount.saturating_mul(MS_PER_MINUTE)),
            TimeUnit::Hour => time_ms.saturating_add(amount.saturating_mul(MS_PER_HOUR)),
            TimeUnit::Day => time_ms.saturating_add(amount.saturating_mul(MS_PER_DAY)),
            TimeUnit::Week => time_ms.saturating_add(amount.saturating_mul(MS_PER_WEEK)),
            TimeUnit::Month => add_months(time_ms, amount),
            TimeUnit::Quarter => add_months(time_ms, amount.saturating_mul(3)),
            TimeUnit::Year => add_months(time_ms, amount.saturating_mul(12)),
        }
    }

    fn diff(&self, max_ms: i64, min_ms: i64, unit: TimeUnit) -> i64 {
        let span = max_ms.saturating_sub(min_ms);
        match unit {
            TimeUnit::Millisecond => span,
            TimeUnit::Second => span / MS_PER_SECOND,
            TimeUnit::Minute => span / MS_PER_MINUTE,
            TimeUnit::Hour => span / MS_PER_HOUR,
            TimeUnit::Day => span / MS_PER_DAY,
            TimeUnit::Week => span / MS_PER_WEEK,
            TimeUnit::Month => whole_month_diff(max_ms, min_ms),
            TimeUnit::Quarter => whole_month_diff(max_ms, min_ms) / 3,
            TimeUnit::Year => whole_month_diff(max_ms, min_ms) / 12,
        }
    }

    fn start_of(&self, time_ms: i64, unit: TimeUnit, weekday: Option<Weekday>) -> i64 {
        let Some(dt) = datetime_utc(time_ms) else {
            return time_ms;
        };

        match unit {
            TimeUnit::Millisecond => time_ms,
            TimeUnit::Second => time_ms.div_euclid(MS_PER_SECOND) * MS_PER_SECOND,
            TimeUnit::Minute => time_ms.div_euclid(MS_PER_MINUTE) * MS_PER_MINUTE,
            TimeUnit::Hour => time_ms.div_euclid(MS_PER_HOUR) * MS_PER_HOUR,
            TimeUnit::Day => midnight_ms(&dt).unwrap_or(time_ms),
            TimeUnit::Week => {
                let week_start = weekday.unwrap_or(Weekday::Sun);
                let days_back = (dt.weekday().num_days_from_sunday() + 7
                    - week_start.num_days_from_sunday())
                    % 7;
                midnight_ms(&dt)
                    .map(|midnight| midnight - i64::from(days_back) * MS_PER_DAY)
                    .unwrap_or(time_ms)
            }
            TimeUnit::Month => month_start_ms(dt.year(), dt.month()).unwrap_or(time_ms),
            TimeUnit::Quarter => {
                let quarter_month = dt.month0() / 3 * 3 + 1;
                month_start_ms(dt.year(), quarter_month).unwrap_or(time_ms)
            }
            TimeUnit::Year => month_start_ms(dt.year(), 1).unwrap_or(time_ms),
        }
    }

    fn end_of(&self, time_ms: i64, unit: TimeUnit) -> i64 {
        match unit {
            TimeUnit::Millisecond => time_ms,
            _ => self
                .add(self.start_of(time_ms, unit, None), 1, unit)
                .saturating_sub(1),
        }
    }

    fn create(&self, value: &serde_json::Value) -> Option<i64> {
        match value {
            serde_json::Value::Number(n) => {
                let raw = n.as_f64()?;
                raw.is_finite().then_some(raw as i64)
            }
            serde_json::Value::String(s) => self.parse(s, None),
            _ => None,
        }
    }
}

fn datetime_utc(time_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(time_ms)
}

fn midnight_ms(dt: &DateTime<Utc>) -> Option<i64> {
    dt.date_naive()
        .and_hms_opt(0, 0, 0)
        .map(|naive| naive.and_utc().timestamp_millis())
}

fn month_start_ms(year: i32, month: u32) -> Option<i64> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc().timestamp_millis())
}

/// Calendar month shift with day-of-month clamping (Jan 31 + 1 month lands on
/// the last day of February). Unrepresentable results return the input.
fn add_months(time_ms: i64, months: i64) -> i64 {
    let Some(dt) = datetime_utc(time_ms) else {
        return time_ms;
    };
    let magnitude = match u32::try_from(months.unsigned_abs()) {
        Ok(m) => Months::new(m),
        Err(_) => return time_ms,
    };
    let shifted = if months >= 0 {
        dt.checked_add_months(magnitude)
    } else {
        dt.checked_sub_months(magnitude)
    };
    shifted.map_or(time_ms, |dt| dt.timestamp_millis())
}

/// Whole calendar months between two instants, truncated toward zero: the
/// raw year/month delta, pulled back by one when the trailing partial month
/// is incomplete.
fn whole_month_diff(max_ms: i64, min_ms: i64) -> i64 {
    let (max, min) = match (datetime_utc(max_ms), datetime_utc(min_ms)) {
        (Some(max), Some(min)) => (max, min),
        _ => return 0,
    };

    let mut months = i64::from(max.year() - min.year()) * 12
        + (i64::from(max.month()) - i64::from(min.month()));
    let anchor = add_months(min_ms, months);
    if months > 0 && anchor > max_ms {
        months -= 1;
    } else if months < 0 && anchor < max_ms {
        months += 1;
    }
    months
}

fn render_token(dt: &DateTime<Utc>, token: &str) -> String {
    match token {
        "YYYY" => format!("{:04}", dt.year()),
        "MMM" => dt.format("%b").to_string(),
        "SSS" => format!("{:03}", dt.timestamp_subsec_millis()),
        "mm" => format!("{:02}", dt.minute()),
        "ss" => format!("{:02}", dt.second()),
        "H" => dt.hour().to_string(),
        "h" => dt.hour12().1.to_string(),
        "D" => dt.day().to_string(),
        "A" => if dt.hour12().0 { "PM" } else { "AM" }.to_owned(),
        "a" => if dt.hour12().0 { "pm" } else { "am" }.to_owned(),
        "Q" => (dt.month0() / 3 + 1).to_string(),
        other => other.to_owned(),
    }
}
