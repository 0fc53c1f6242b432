pub mod client;
pub mod convert;
pub mod handlers;

pub use client::*;
pub use convert::*;
pub use handlers::*;
