use chrono::{Datelike, Local};

/// Format a slider value as a percent label: multiply by 100, floor, append
/// "%". Floors toward negative infinity, so 0.999 gives "99%" and -0.2
/// gives "-20%". Input range is not validated.
pub fn slider_percent(val: f64) -> String {
    let pct = (val * 100.0).floor() as i64;
    format!("{}%", pct)
}

/// Default value for the usage-month selector, from the current local date.
///
/// Note the quirk: although this feeds a "previous month" field, the mapping
/// keeps the current month's zero-based index (0 = January .. 11 = December)
/// for every month except January, which wraps to 12. It never subtracts
/// one. The selector options were built against this mapping, so it stays.
pub fn month_val() -> u32 {
    month_val_for(Local::now().month0())
}

/// The month mapping itself, separated from the clock read
pub fn month_val_for(month0: u32) -> u32 {
    if month0 == 0 { 12 } else { month0 }
}
