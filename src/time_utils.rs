// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar dates.

use chrono::{Datelike, Local, NaiveDate};

/// Current calendar date in the local timezone.
pub fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date as a short "dd.mm" chart label.
pub fn format_day_month(date: NaiveDate) -> String {
    format!("{:02}.{:02}", date.day(), date.month())
}
