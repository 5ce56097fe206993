pub mod export_button;
pub mod modal;
pub mod page_header;
pub mod search_input;
pub mod stat_card;
pub mod status_badge;
pub mod toggle;

pub use export_button::ExportButton;
pub use modal::Modal;
pub use page_header::PageHeader;
pub use search_input::SearchInput;
pub use stat_card::StatCard;
pub use status_badge::StatusBadge;
pub use toggle::Toggle;
