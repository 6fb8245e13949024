pub mod generation;
pub mod presets;
pub mod session;
pub mod upload;

pub use generation::*;
pub use presets::*;
pub use session::*;
pub use upload::*;
