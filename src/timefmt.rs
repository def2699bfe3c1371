//! Relative Time Formatting
//!
//! Coarsest-single-unit elapsed-time labels for listing cards, plus clock
//! access for the rest of the app.

/// Current wall-clock time in epoch milliseconds
pub fn now_ms() -> i64 {
    js_sys::Date::now() as i64
}

/// Current calendar year, for the footer
pub fn current_year() -> i32 {
    js_sys::Date::new_0().get_full_year() as i32
}

/// Elapsed-time label: `45s ago`, `12m ago`, `3h ago`, `2d ago`
///
/// Always one unit, integer-truncated; a timestamp in the future clamps
/// to zero seconds.
pub fn time_ago(now_ms: i64, ts_ms: i64) -> String {
    let s = ((now_ms - ts_ms) / 1000).max(0);
    if s < 60 {
        return format!("{s}s ago");
    }
    let m = s / 60;
    if m < 60 {
        return format!("{m}m ago");
    }
    let h = m / 60;
    if h < 24 {
        return format!("{h}h ago");
    }
    format!("{}d ago", h / 24)
}
