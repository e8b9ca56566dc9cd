use crate::error::Result;
use crate::model::Record;

pub trait Formatter {
    fn format(&self, record: &Record) -> Result<Vec<u8>>;
}
