use super::dictionary::Dictionary;
use super::tag::{format_tags, Tag};
use super::timer::{reconstruct_timers, Timer};
use crate::input::Request;

/// A single monitored request with its tags and timers resolved against the
/// request's own dictionary.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    hostname: String,
    server_name: String,
    script_name: String,
    schema: Option<String>,
    request_count: u32,
    document_size: u32,
    memory_peak: u32,
    memory_footprint: Option<u32>,
    request_time: f32,
    ru_utime: f32,
    ru_stime: f32,
    status: Option<u32>,
    tags: Vec<Tag>,
    timers: Vec<Timer>,
    requests: Vec<Record>,
}

impl Record {
    pub fn from_request(request: &Request) -> Self {
        let dict = Dictionary::new(&request.dictionary);

        Self {
            hostname: request.hostname.clone(),
            server_name: request.server_name.clone(),
            script_name: request.script_name.clone(),
            schema: request.schema.clone(),
            request_count: request.request_count,
            document_size: request.document_size,
            memory_peak: request.memory_peak,
            memory_footprint: request.memory_footprint,
            request_time: request.request_time,
            ru_utime: request.ru_utime,
            ru_stime: request.ru_stime,
            status: request.status,
            tags: dict.resolve_pairs(&request.tag_name, &request.tag_value),
            timers: reconstruct_timers(request, dict),
            requests: request.requests.iter().map(Record::from_request).collect(),
        }
    }

    #[inline]
    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    #[inline]
    pub fn server_name(&self) -> &str {
        &self.server_name
    }

    #[inline]
    pub fn script_name(&self) -> &str {
        &self.script_name
    }

    #[inline]
    pub fn schema(&self) -> Option<&str> {
        self.schema.as_deref()
    }

    #[inline]
    pub fn request_count(&self) -> u32 {
        self.request_count
    }

    #[inline]
    pub fn document_size(&self) -> u32 {
        self.document_size
    }

    #[inline]
    pub fn memory_peak(&self) -> u32 {
        self.memory_peak
    }

    #[inline]
    pub fn memory_footprint(&self) -> Option<u32> {
        self.memory_footprint
    }

    #[inline]
    pub fn request_time(&self) -> f32 {
        self.request_time
    }

    #[inline]
    pub fn ru_utime(&self) -> f32 {
        self.ru_utime
    }

    #[inline]
    pub fn ru_stime(&self) -> f32 {
        self.ru_stime
    }

    #[inline]
    pub fn status(&self) -> Option<u32> {
        self.status
    }

    #[inline]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    #[inline]
    pub fn timers(&self) -> &[Timer] {
        &self.timers
    }

    /// Nested requests batched into the same datagram.
    #[inline]
    pub fn requests(&self) -> &[Record] {
        &self.requests
    }

    /// Request-level attributes: ` status=<code>` first (when present), then
    /// ` name=value` per tag in wire order. Empty when there are neither.
    pub fn attributes(&self) -> String {
        let mut attrs = String::new();
        if let Some(status) = self.status {
            attrs.push_str(&format!(" status={}", status));
        }
        attrs.push_str(&format_tags(&self.tags));
        attrs
    }
}
