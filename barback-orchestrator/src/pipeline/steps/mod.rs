//! Pipeline steps
//!
//! The four steps of a run, in execution order. Each step is constructed with
//! exactly the capability handles it needs; the text step never sees the
//! secret store, the persistence step never sees the generation gateway.

mod generate_image;
mod generate_text;
mod notify;
mod persist;

pub use generate_image::GenerateImageStep;
pub use generate_text::GenerateTextStep;
pub use notify::NotifyStep;
pub use persist::PersistStep;
