pub mod case;
pub mod case_document;
pub mod case_status_update;
pub mod fee;
pub mod lawyer;
pub mod lawyer_review;
pub mod user;
