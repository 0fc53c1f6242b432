pub mod bands;
pub mod basic;
pub mod buckets;
pub mod extract;
pub mod period;
pub mod summary;

pub use bands::*;
pub use basic::*;
pub use buckets::*;
pub use extract::*;
pub use period::*;
pub use summary::*;
