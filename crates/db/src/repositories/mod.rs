pub mod activity_log_repo;
pub mod case_repo;
pub mod case_type_repo;
pub mod client_repo;
pub mod document_repo;
pub mod invoice_repo;
pub mod message_repo;
pub mod schedule_repo;
pub mod user_repo;

pub use activity_log_repo::ActivityLogRepo;
pub use case_repo::CaseRepo;
pub use case_type_repo::CaseTypeRepo;
pub use client_repo::ClientRepo;
pub use document_repo::DocumentRepo;
pub use invoice_repo::InvoiceRepo;
pub use message_repo::MessageRepo;
pub use schedule_repo::ScheduleRepo;
pub use user_repo::UserRepo;
