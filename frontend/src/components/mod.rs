pub mod banner;
pub mod error;
pub mod footer;
pub mod loading;
pub mod navbar;

pub use banner::LoginSuccessBanner;
pub use error::FormError;
pub use footer::Footer;
pub use loading::Loading;
pub use navbar::Navbar;
