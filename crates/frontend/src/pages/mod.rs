mod clients;
mod dashboard;
mod features;
mod finance;
mod login;
mod offers;
mod orders;
mod partners;
mod requests;
mod support;
mod vouchers;

pub use clients::ClientsPage;
pub use dashboard::DashboardPage;
pub use features::FeaturesPage;
pub use finance::FinancePage;
pub use login::LoginPage;
pub use offers::OffersPage;
pub use orders::OrdersPage;
pub use partners::PartnersPage;
pub use requests::RequestsPage;
pub use support::SupportPage;
pub use vouchers::VouchersPage;
