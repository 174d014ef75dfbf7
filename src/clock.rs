use time::OffsetDateTime;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const WALL_CLOCK: &[BorrowedFormatItem<'static>] =
    format_description!("[hour]:[minute]:[second]");

pub fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}

/// `HH:mm:ss`, server local time when the offset is known, UTC otherwise.
pub fn wall_clock() -> String {
    let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
    now.format(WALL_CLOCK).expect("in-memory formatting")
}
