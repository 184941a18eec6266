//! The synthesized system preamble.
//!
//! Embeds the current wall-clock time in the two home time zones so the
//! model can resolve zone-naive reminder expressions to absolute times,
//! plus the fixed texting-tone instructions. The preamble is rebuilt per
//! invocation and never stored in the conversation log.

use chrono::{DateTime, Utc};
use chrono_tz::America::{Chicago, Los_Angeles};

/// Builds the system preamble for one model invocation.
#[must_use]
pub fn build_preamble(now: DateTime<Utc>) -> String {
    let california_time = now.with_timezone(&Los_Angeles).to_rfc3339();
    let chicago_time = now.with_timezone(&Chicago).to_rfc3339();

    format!(
        "Current date and time: California - {california_time}, Chicago - {chicago_time}. \
         Only use the take_note function when the user specifically asks you to write \
         something down or remember something. Use the set_reminder function when the user \
         wants to set a reminder. Otherwise, use a normal response. Your conversations with \
         the user are through text message, so respond in a way that's appropriate for back \
         and forth texting; try not to give super long responses unless the user explicitly \
         asks you to explain something in more detail. Also never respond in markdown and \
         never use ** or * to bold text."
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn preamble_embeds_both_zone_times() {
        let now = Utc.with_ymd_and_hms(2025, 1, 15, 18, 0, 0).single().expect("valid");
        let preamble = build_preamble(now);

        // 18:00 UTC is 10:00 PST and 12:00 CST.
        assert!(preamble.contains("California - 2025-01-15T10:00:00-08:00"));
        assert!(preamble.contains("Chicago - 2025-01-15T12:00:00-06:00"));
    }

    #[test]
    fn preamble_carries_tool_instructions() {
        let preamble = build_preamble(Utc::now());
        assert!(preamble.contains("take_note"));
        assert!(preamble.contains("set_reminder"));
        assert!(preamble.contains("text message"));
    }
}
