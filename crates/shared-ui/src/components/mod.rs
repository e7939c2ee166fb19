// Standalone components (no primitives)
pub mod button;
pub mod card;
pub mod form;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod textarea;

// Primitive wrappers
pub mod separator;
pub mod toast;

// Re-exports for convenience
pub use button::*;
pub use card::*;
pub use form::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use textarea::*;
pub use toast::*;
