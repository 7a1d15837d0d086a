// Wall clock helpers shared by both todo models.
//
// Purpose
// - Give every mutation a timestamp that never repeats or moves backwards for the same record.
//
// Notes
// - Coarse system clocks can return the same instant twice in a row. `advance` nudges the
//   previous value by one nanosecond in that case, so `updated_at` is strictly increasing.

use chrono::{DateTime, TimeDelta, Utc};

pub fn now() -> DateTime<Utc> {
    Utc::now()
}

pub fn advance(previous: DateTime<Utc>) -> DateTime<Utc> {
    let current = now();
    if current > previous {
        current
    } else {
        previous + TimeDelta::nanoseconds(1)
    }
}
