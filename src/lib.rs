pub mod analytics;
pub mod args;
pub mod error;
pub mod model;
pub mod storage;
pub mod controller {
    pub mod analytics;
    pub mod prefill;
    pub mod profile;
    pub mod rounds;
    pub mod scan;
}
pub mod view {
    pub mod analytics;
    pub mod index;
    pub mod rounds;
}

const HTMX_PATH: &str = "https://unpkg.com/htmx.org@1.9.12";

pub use error::CoreError;
