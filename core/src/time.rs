use chrono::{Datelike, NaiveDate, TimeDelta, Weekday};
use anyhow::{anyhow, Result};

/// Resolves a due-date expression relative to `today`.
///
/// Blank input means `today`. Also understands `today`/`tod`,
/// `tomorrow`/`tom`, `+Nd`/`+Nw`, weekday names (`fri`, `2:fri`) and
/// `YYYY-MM-DD`.
pub fn parse_due_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(today);
    }

    // 1. Reserved keywords
    match input.to_lowercase().as_str() {
        "today" | "tod" => return Ok(today),
        "tomorrow" | "tom" => {
            return today
                .succ_opt()
                .ok_or_else(|| anyhow!("Date out of range: {}", input))
        }
        _ => {}
    }

    // 2. Relative format (+Nd, +Nw)
    if let Some(rest) = input.strip_prefix('+') {
        let (unit_at, unit) = rest
            .char_indices()
            .last()
            .ok_or_else(|| anyhow!("Invalid relative format: {}", input))?;
        let count: i64 = rest[..unit_at]
            .parse()
            .map_err(|_| anyhow!("Invalid relative format: {}", input))?;

        let delta = match unit.to_ascii_lowercase() {
            'd' => TimeDelta::try_days(count),
            'w' => TimeDelta::try_weeks(count),
            _ => return Err(anyhow!("Unknown unit in relative date: {}", unit)),
        };
        return delta
            .and_then(|d| today.checked_add_signed(d))
            .ok_or_else(|| anyhow!("Date out of range: {}", input));
    }

    // 3. Fixed format
    if let Ok(d) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(d);
    }

    // 4. Weekday format (fri, 2:fri)
    if let Some((count, day_str)) = parse_weekday_token(input) {
        if count > 0 {
            if let Ok(target) = parse_weekday_str(day_str) {
                let mut days_needed = target.num_days_from_sunday() as i64
                    - today.weekday().num_days_from_sunday() as i64;
                if days_needed <= 0 {
                    days_needed += 7;
                }
                // count = 1 is the next occurrence, 2 the one after that
                return (count - 1)
                    .checked_mul(7)
                    .and_then(|extra| extra.checked_add(days_needed))
                    .and_then(TimeDelta::try_days)
                    .and_then(|d| today.checked_add_signed(d))
                    .ok_or_else(|| anyhow!("Date out of range: {}", input));
            }
        }
    }

    Err(anyhow!("Could not parse date: {}", input))
}

fn parse_weekday_token(input: &str) -> Option<(i64, &str)> {
    match input.split_once(':') {
        Some((count, day)) => count.parse::<i64>().ok().map(|c| (c, day)),
        None => Some((1, input)),
    }
}

fn parse_weekday_str(s: &str) -> Result<Weekday> {
    match s.to_lowercase().as_str() {
        "mon" | "monday" => Ok(Weekday::Mon),
        "tue" | "tuesday" => Ok(Weekday::Tue),
        "wed" | "wednesday" => Ok(Weekday::Wed),
        "thu" | "thursday" => Ok(Weekday::Thu),
        "fri" | "friday" => Ok(Weekday::Fri),
        "sat" | "saturday" => Ok(Weekday::Sat),
        "sun" | "sunday" => Ok(Weekday::Sun),
        _ => Err(anyhow!("Invalid weekday")),
    }
}
