//! Dates are stored as `YYYY-MM-DD` and shown as `MM-DD-YYYY`.
//!
//! Both directions are plain slicing with no calendar checks; a value that
//! is too short yields empty pieces instead of failing.

pub fn to_display(stored: &str) -> String {
    if stored.is_empty() {
        return String::new();
    }
    let year = stored.get(0..4).unwrap_or_default();
    let month = stored.get(5..7).unwrap_or_default();
    let day = stored.get(8..10).unwrap_or_default();
    format!("{month}-{day}-{year}")
}

pub fn to_storage(display: &str) -> String {
    if display.is_empty() {
        return String::new();
    }
    let year = display.get(6..10).unwrap_or_default();
    let month = display.get(0..2).unwrap_or_default();
    let day = display.get(3..5).unwrap_or_default();
    format!("{year}-{month}-{day}")
}
