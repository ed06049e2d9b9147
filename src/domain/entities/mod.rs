pub mod submission_status;
pub mod waitlist_entry;
