use super::formatter::Formatter;
use crate::error::Result;
use crate::model::{format_tags, Record, Timer};

pub struct HumanReadableFormatter {
    verbose: bool,
}

impl HumanReadableFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }

    fn format_record(&self, record: &Record, lines: &mut Vec<String>) {
        lines.push(format!(
            "{:>15} {:>30}: {:.2}{}",
            record.server_name(),
            record.script_name(),
            record.request_time(),
            record.attributes(),
        ));

        if self.verbose {
            lines.push(self.format_details(record));
        }

        for timer in record.timers() {
            lines.push(self.format_timer(timer));
        }

        for nested in record.requests() {
            self.format_record(nested, lines);
        }
    }

    fn format_details(&self, record: &Record) -> String {
        format!(
            "\thost={} schema={} requests={} doc_size={} mem_peak={} mem_footprint={} ru_utime={:.4} ru_stime={:.4}",
            record.hostname(),
            record.schema().unwrap_or("-"),
            record.request_count(),
            record.document_size(),
            record.memory_peak(),
            record
                .memory_footprint()
                .map_or_else(|| "-".to_string(), |m| m.to_string()),
            record.ru_utime(),
            record.ru_stime(),
        )
    }

    fn format_timer(&self, timer: &Timer) -> String {
        format!(
            "\tVal: {:.4} Hit: {} CPU: {:.4} Tags:{}",
            timer.value(),
            timer.hit_count(),
            timer.cpu_time(),
            format_tags(timer.tags()),
        )
    }
}

impl Formatter for HumanReadableFormatter {
    fn format(&self, record: &Record) -> Result<Vec<u8>> {
        let mut lines = Vec::new();
        self.format_record(record, &mut lines);
        Ok(lines.join("\n").into_bytes())
    }
}
