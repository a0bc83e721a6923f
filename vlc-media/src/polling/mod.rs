//! Recurring status polling
//!
//! This module drives the fetch → parse → normalize → emit cycle on a fixed
//! interval and hands every resulting status to the subscribers.

pub mod scheduler;

pub use scheduler::{PollScheduler, PollSchedulerStats};
