mod formatter;
mod humanreadable;
mod writer;

pub use formatter::Formatter;
pub use humanreadable::HumanReadableFormatter;
pub use writer::{LineWriter, Writer};
