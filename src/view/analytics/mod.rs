pub mod conditions;
pub mod distance;
pub mod mental;
pub mod summary;
pub mod template;
pub mod utils;

pub use conditions::*;
pub use distance::*;
pub use mental::*;
pub use summary::*;
pub use template::*;
