mod create;
pub mod submit;

pub use create::WorkItemCreate;
