pub mod profile;
pub mod round;
pub mod types;
pub mod utils;

pub use profile::*;
pub use round::*;
pub use types::*;
pub use utils::*;
