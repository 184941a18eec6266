//! In-process reminder scheduling for the pony-express texting assistant.
//!
//! Reminders live only in memory: a process restart loses every pending
//! reminder. This is an accepted limitation of the system, not a defect.

pub mod reminder;

pub use reminder::{ReminderScheduler, ReminderSink, ScheduledReminder};
