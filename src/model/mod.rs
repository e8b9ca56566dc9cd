mod dictionary;
mod record;
mod tag;
mod timer;

pub use dictionary::Dictionary;
pub use record::Record;
pub use tag::{format_tags, Tag};
pub use timer::{reconstruct_timers, Timer};
