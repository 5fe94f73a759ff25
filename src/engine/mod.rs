pub mod clock;
pub mod route;
pub mod timeline;
