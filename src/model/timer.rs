use std::ops::Range;

use super::dictionary::Dictionary;
use super::tag::Tag;
use crate::input::Request;

#[derive(Debug, Clone, PartialEq)]
pub struct Timer {
    value: f32,
    hit_count: u32,
    cpu_time: f32,
    tags: Vec<Tag>,
}

impl Timer {
    pub fn new(value: f32, hit_count: u32, cpu_time: f32, tags: Vec<Tag>) -> Self {
        Self {
            value,
            hit_count,
            cpu_time,
            tags,
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn hit_count(&self) -> u32 {
        self.hit_count
    }

    /// User plus system CPU time, or 0 when the request carries no usable
    /// per-timer rusage.
    #[inline]
    pub fn cpu_time(&self) -> f32 {
        self.cpu_time
    }

    #[inline]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }
}

/// Rebuilds the timers of `request` from its column-wise arrays.
///
/// Timer `i` owns the window of the flattened tag arrays starting at the sum
/// of the preceding tag counts. Windows running past the end of the arrays are
/// clipped, and tag pairs that don't resolve in `dict` are dropped.
pub fn reconstruct_timers(request: &Request, dict: Dictionary) -> Vec<Timer> {
    let names = &request.timer_tag_name;
    let values = &request.timer_tag_value;
    let rusage = timer_rusage(request);

    let windows = tag_windows(
        &request.timer_tag_count,
        request.timer_value.len(),
        names.len(),
    );

    request
        .timer_value
        .iter()
        .zip(windows)
        .enumerate()
        .map(|(i, (&value, window))| {
            let paired = window.start.min(values.len())..window.end.min(values.len());
            let tags = dict.resolve_pairs(&names[window], &values[paired]);

            let hit_count = request.timer_hit_count.get(i).copied().unwrap_or(0);
            let cpu_time = match rusage {
                Some((utime, stime)) => utime[i] + stime[i],
                None => 0.0,
            };

            Timer::new(value, hit_count, cpu_time, tags)
        })
        .collect()
}

// Per-timer rusage is all-or-nothing: both columns must match the timers.
fn timer_rusage(request: &Request) -> Option<(&[f32], &[f32])> {
    let timers = request.timer_value.len();
    if request.timer_ru_utime.len() == timers && request.timer_ru_stime.len() == timers {
        Some((&request.timer_ru_utime, &request.timer_ru_stime))
    } else {
        None
    }
}

fn tag_windows(counts: &[u32], timers: usize, available: usize) -> Vec<Range<usize>> {
    let mut offset = 0usize;
    (0..timers)
        .map(|i| {
            let count = counts.get(i).copied().unwrap_or(0) as usize;
            let window = offset.min(available)..offset.saturating_add(count).min(available);
            offset = offset.saturating_add(count);
            window
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(dictionary: &[&str]) -> Request {
        Request {
            dictionary: dictionary.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn tags(timer: &Timer) -> Vec<String> {
        timer.tags().iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_reconstruct_timers_windows() {
        let mut req = request(&["a", "b", "c"]);
        req.timer_value = vec![0.5, 1.5];
        req.timer_hit_count = vec![1, 4];
        req.timer_tag_count = vec![2, 1];
        req.timer_tag_name = vec![0, 1, 2];
        req.timer_tag_value = vec![1, 0, 2];

        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert_eq!(timers.len(), 2);
        assert_eq!(tags(&timers[0]), vec!["a=b", "b=a"]);
        assert_eq!(tags(&timers[1]), vec!["c=c"]);
        assert_eq!(timers[0].value(), 0.5);
        assert_eq!(timers[1].hit_count(), 4);
    }

    #[test]
    fn test_reconstruct_timers_skips_unresolved_pairs() {
        let mut req = request(&["a", "b", "c"]);
        req.timer_value = vec![1.0];
        req.timer_hit_count = vec![1];
        req.timer_tag_count = vec![3];
        req.timer_tag_name = vec![0, 1, 2];
        req.timer_tag_value = vec![1, 99, 2];

        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert_eq!(tags(&timers[0]), vec!["a=b", "c=c"]);
    }

    #[test]
    fn test_reconstruct_timers_zero_count() {
        let mut req = request(&["a", "b"]);
        req.timer_value = vec![1.0, 2.0];
        req.timer_hit_count = vec![1, 1];
        req.timer_tag_count = vec![0, 1];
        req.timer_tag_name = vec![0];
        req.timer_tag_value = vec![1];

        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert!(timers[0].tags().is_empty());
        assert_eq!(tags(&timers[1]), vec!["a=b"]);
    }

    #[test]
    fn test_reconstruct_timers_short_flattened_arrays() {
        let mut req = request(&["a", "b", "c"]);
        req.timer_value = vec![1.0, 2.0, 3.0];
        req.timer_hit_count = vec![1, 1];
        req.timer_tag_count = vec![2, 5, 4];
        req.timer_tag_name = vec![0, 1, 2, 0];
        req.timer_tag_value = vec![1, 0, 2];

        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert_eq!(timers.len(), 3);
        assert_eq!(tags(&timers[0]), vec!["a=b", "b=a"]);
        // Name at position 3 has no paired value.
        assert_eq!(tags(&timers[1]), vec!["c=c"]);
        assert!(timers[2].tags().is_empty());
        assert_eq!(timers[2].hit_count(), 0);
    }

    #[test]
    fn test_reconstruct_timers_short_count_array() {
        let mut req = request(&["a", "b"]);
        req.timer_value = vec![1.0, 2.0];
        req.timer_tag_count = vec![1];
        req.timer_tag_name = vec![0, 1];
        req.timer_tag_value = vec![1, 0];

        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert_eq!(tags(&timers[0]), vec!["a=b"]);
        assert!(timers[1].tags().is_empty());
    }

    #[test]
    fn test_reconstruct_timers_cpu_time() {
        let mut req = request(&[]);
        req.timer_value = vec![1.0, 2.0];
        req.timer_hit_count = vec![1, 1];
        req.timer_ru_utime = vec![0.25, 0.5];
        req.timer_ru_stime = vec![0.125, 0.25];

        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert_eq!(timers[0].cpu_time(), 0.375);
        assert_eq!(timers[1].cpu_time(), 0.75);
    }

    #[test]
    fn test_reconstruct_timers_cpu_time_fallback() {
        let mut req = request(&[]);
        req.timer_value = vec![1.0, 2.0];
        req.timer_hit_count = vec![1, 1];

        // Only stime matches.
        req.timer_ru_utime = vec![0.25];
        req.timer_ru_stime = vec![0.125, 0.25];
        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert!(timers.iter().all(|t| t.cpu_time() == 0.0));

        // Only utime matches.
        req.timer_ru_utime = vec![0.25, 0.5];
        req.timer_ru_stime = vec![];
        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert!(timers.iter().all(|t| t.cpu_time() == 0.0));

        // Neither present.
        req.timer_ru_utime = vec![];
        let timers = reconstruct_timers(&req, Dictionary::new(&req.dictionary));
        assert!(timers.iter().all(|t| t.cpu_time() == 0.0));
    }

    #[test]
    fn test_tag_windows_cover_flattened_array() {
        let cases: &[&[u32]] = &[&[], &[0], &[3], &[2, 1], &[0, 0, 4, 0, 1], &[1, 1, 1, 1]];

        for counts in cases {
            let total = counts.iter().sum::<u32>() as usize;
            let windows = tag_windows(counts, counts.len(), total);

            let mut expected_start = 0;
            for (window, &count) in windows.iter().zip(counts.iter()) {
                assert_eq!(window.start, expected_start, "counts {:?}", counts);
                assert_eq!(window.len(), count as usize, "counts {:?}", counts);
                expected_start = window.end;
            }
            assert_eq!(expected_start, total, "counts {:?}", counts);
        }
    }

    #[test]
    fn test_tag_windows_clipped() {
        assert_eq!(tag_windows(&[2, 5, 4], 3, 4), vec![0..2, 2..4, 4..4]);
        assert_eq!(tag_windows(&[u32::MAX, 1], 2, 3), vec![0..3, 3..3]);
    }
}
