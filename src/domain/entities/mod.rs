pub mod user_type;
pub mod waitlist_entry;
