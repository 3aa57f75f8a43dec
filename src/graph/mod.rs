pub mod attributes;
pub mod conversion;
pub mod definition;
pub mod kind;
pub mod model;
pub mod text;

pub use attributes::Attributes;
pub use conversion::*;
pub use definition::*;
pub use kind::*;
pub use model::*;
pub use text::plain_text;
