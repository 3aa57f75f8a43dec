mod formatter;
mod record;

pub use formatter::TraceFormatter;
pub use record::{IdentifierTier, ResolutionTrace};
