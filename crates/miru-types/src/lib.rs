pub mod fetch;
pub mod model;
pub mod session;
