pub mod capability;
pub mod chase;
pub mod constants;
pub mod easing;
pub mod effects;
pub mod error;
pub mod scroll;
pub mod timeline;
pub mod transform;

pub use capability::*;
pub use chase::*;
pub use constants::*;
pub use easing::*;
pub use effects::*;
pub use error::*;
pub use scroll::*;
pub use timeline::*;
pub use transform::*;
