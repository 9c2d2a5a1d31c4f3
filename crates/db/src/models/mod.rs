pub mod activity_log;
pub mod case;
pub mod case_type;
pub mod client;
pub mod document;
pub mod invoice;
pub mod message;
pub mod schedule;
pub mod user;
