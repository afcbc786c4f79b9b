pub mod dashboard;
pub mod graphs;
pub mod info;
pub mod login;
pub mod pricing;
pub mod register;
pub mod workspace;

pub use dashboard::DashboardPage;
pub use graphs::{ChartNamePage, GraphManagerPage};
pub use info::{ApiDocsPage, MaintenancePage, NotFoundPage};
pub use login::LoginPage;
pub use pricing::PricingPage;
pub use register::RegisterPage;
pub use workspace::{ChartContainerPage, WorkspacePage};
