pub mod feature;
pub mod finance;
pub mod offer;
pub mod order;
pub mod request;
pub mod support;
pub mod user;
pub mod voucher;
