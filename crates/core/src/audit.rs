//! Activity log vocabulary.
//!
//! This module lives in `core` (zero internal deps) so both the API layer and
//! any future CLI tooling agree on action codes. Codes are `entity.verb`
//! strings; the set below must stay in sync with what the handlers record.

/// Known action codes for activity log entries.
pub mod actions {
    pub const LOGIN: &str = "auth.login";

    pub const USER_CREATE: &str = "user.create";
    pub const USER_UPDATE: &str = "user.update";
    pub const USER_DELETE: &str = "user.delete";

    pub const CLIENT_CREATE: &str = "client.create";
    pub const CLIENT_UPDATE: &str = "client.update";
    pub const CLIENT_DELETE: &str = "client.delete";

    pub const CASE_TYPE_CREATE: &str = "case_type.create";
    pub const CASE_TYPE_UPDATE: &str = "case_type.update";
    pub const CASE_TYPE_DELETE: &str = "case_type.delete";

    pub const CASE_CREATE: &str = "case.create";
    pub const CASE_UPDATE: &str = "case.update";
    pub const CASE_DELETE: &str = "case.delete";

    pub const DOCUMENT_UPLOAD: &str = "document.upload";
    pub const DOCUMENT_UPDATE: &str = "document.update";
    pub const DOCUMENT_DELETE: &str = "document.delete";

    pub const SCHEDULE_CREATE: &str = "schedule.create";
    pub const SCHEDULE_UPDATE: &str = "schedule.update";
    pub const SCHEDULE_DELETE: &str = "schedule.delete";

    pub const MESSAGE_SEND: &str = "message.send";
    pub const MESSAGE_DELETE: &str = "message.delete";

    pub const INVOICE_CREATE: &str = "invoice.create";
    pub const INVOICE_UPDATE: &str = "invoice.update";
    pub const INVOICE_DELETE: &str = "invoice.delete";

    pub const PROFILE_UPDATE: &str = "profile.update";
    pub const PROFILE_PICTURE_UPLOAD: &str = "profile.picture_upload";
    pub const PASSWORD_CHANGE: &str = "profile.password_change";
}

/// Entity type labels recorded next to an entry's `entity_id`.
pub mod entities {
    pub const USER: &str = "user";
    pub const CLIENT: &str = "client";
    pub const CASE_TYPE: &str = "case_type";
    pub const CASE: &str = "case";
    pub const DOCUMENT: &str = "document";
    pub const SCHEDULE: &str = "schedule";
    pub const MESSAGE: &str = "message";
    pub const INVOICE: &str = "invoice";
}
