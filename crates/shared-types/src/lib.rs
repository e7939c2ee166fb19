pub mod error;
pub mod settings;
pub mod work_item;

pub use error::*;
pub use settings::*;
pub use work_item::*;
