//! In-memory mock fixtures. The dashboard has no backend; every page
//! reads from these statics and mutates copies in local component state.

pub mod dashboard;
pub mod features;
pub mod finance;
pub mod offers;
pub mod orders;
pub mod requests;
pub mod support;
pub mod users;
pub mod vouchers;
