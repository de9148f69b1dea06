pub mod dataset;
pub mod input;
pub mod options;
pub mod virtual_keys;

pub use dataset::*;
pub use input::*;
pub use options::*;
pub use virtual_keys::*;
