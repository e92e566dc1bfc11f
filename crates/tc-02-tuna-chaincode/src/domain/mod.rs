pub mod config;
pub mod entities;
pub mod operation;
pub mod request;
pub mod seed;

pub use config::*;
pub use entities::*;
pub use operation::*;
pub use request::*;
pub use seed::*;
