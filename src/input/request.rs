/// Pinba `Request` message as it travels over the wire.
///
/// Timers are stored column-wise: `timer_value[i]`, `timer_hit_count[i]`,
/// `timer_tag_count[i]` (and optionally `timer_ru_utime[i]`/`timer_ru_stime[i]`)
/// describe timer `i`, while the tags of all timers are concatenated in
/// `timer_tag_name`/`timer_tag_value`. Every tag index points into
/// `dictionary`. See `model::Record` for the reconstructed form.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Request {
    #[prost(string, required, tag = "1")]
    pub hostname: String,
    #[prost(string, required, tag = "2")]
    pub server_name: String,
    #[prost(string, required, tag = "3")]
    pub script_name: String,
    #[prost(uint32, required, tag = "4")]
    pub request_count: u32,
    #[prost(uint32, required, tag = "5")]
    pub document_size: u32,
    #[prost(uint32, required, tag = "6")]
    pub memory_peak: u32,
    #[prost(float, required, tag = "7")]
    pub request_time: f32,
    #[prost(float, required, tag = "8")]
    pub ru_utime: f32,
    #[prost(float, required, tag = "9")]
    pub ru_stime: f32,
    #[prost(uint32, repeated, packed = "false", tag = "10")]
    pub timer_hit_count: Vec<u32>,
    #[prost(float, repeated, packed = "false", tag = "11")]
    pub timer_value: Vec<f32>,
    #[prost(uint32, repeated, packed = "false", tag = "12")]
    pub timer_tag_count: Vec<u32>,
    #[prost(uint32, repeated, packed = "false", tag = "13")]
    pub timer_tag_name: Vec<u32>,
    #[prost(uint32, repeated, packed = "false", tag = "14")]
    pub timer_tag_value: Vec<u32>,
    #[prost(string, repeated, tag = "15")]
    pub dictionary: Vec<String>,
    #[prost(uint32, optional, tag = "16")]
    pub status: Option<u32>,
    #[prost(uint32, optional, tag = "17")]
    pub memory_footprint: Option<u32>,
    #[prost(message, repeated, tag = "18")]
    pub requests: Vec<Request>,
    #[prost(string, optional, tag = "19")]
    pub schema: Option<String>,
    #[prost(uint32, repeated, packed = "false", tag = "20")]
    pub tag_name: Vec<u32>,
    #[prost(uint32, repeated, packed = "false", tag = "21")]
    pub tag_value: Vec<u32>,
    #[prost(float, repeated, packed = "false", tag = "22")]
    pub timer_ru_utime: Vec<f32>,
    #[prost(float, repeated, packed = "false", tag = "23")]
    pub timer_ru_stime: Vec<f32>,
}
