pub mod auth;
pub mod banner;
pub mod splash;
pub mod subscription;
pub mod theme;
