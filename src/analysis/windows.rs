//! Window reconstruction.
//!
//! Feed-view samples only record when a view *began*; the display window of
//! each view is recovered from the start of its successor. The most recent
//! view has no successor, so its end is synthesized with a fixed grace
//! period.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::store::models::TimelineSample;

/// A reconstructed display window: the interval during which one feed view
/// was (assumed) on screen.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Window {
    pub id: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Pure fold from `expected` ascending samples to `expected` contiguous
/// windows. Window *i* ends where sample *i+1* starts; the last window ends
/// `start + grace`.
///
/// Fails with [`Error::InsufficientSamples`] when fewer samples exist, since
/// the terminal synthesis is undefined without the full count.
pub fn reconstruct(
    samples: &[TimelineSample],
    expected: usize,
    grace: Duration,
) -> Result<Vec<Window>> {
    if samples.len() < expected {
        return Err(Error::InsufficientSamples {
            expected,
            actual: samples.len(),
        });
    }

    let samples = &samples[..expected];
    let windows = samples
        .iter()
        .enumerate()
        .map(|(i, sample)| {
            let end = match samples.get(i + 1) {
                Some(next) => next.start_time,
                None => sample.start_time + grace,
            };
            Window {
                id: sample.id.clone(),
                start: sample.start_time,
                end,
            }
        })
        .collect();

    Ok(windows)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample(id: &str, start: DateTime<Utc>) -> TimelineSample {
        TimelineSample {
            id: id.to_string(),
            user_id: 1,
            start_time: start,
        }
    }

    fn hourly_samples(n: usize) -> Vec<TimelineSample> {
        let t0 = Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap();
        (0..n)
            .map(|i| sample(&format!("tl-{i}"), t0 + Duration::hours(i as i64)))
            .collect()
    }

    #[test]
    fn six_hourly_samples_make_six_contiguous_windows() {
        let samples = hourly_samples(6);
        let windows = reconstruct(&samples, 6, Duration::minutes(10)).unwrap();

        assert_eq!(windows.len(), 6);
        for i in 0..5 {
            assert_eq!(windows[i].end, windows[i + 1].start);
        }
        assert_eq!(
            windows[5].end,
            windows[5].start + Duration::minutes(10)
        );
    }

    #[test]
    fn window_count_matches_for_any_positive_count() {
        for n in 1..=8 {
            let samples = hourly_samples(n);
            let windows = reconstruct(&samples, n, Duration::minutes(10)).unwrap();
            assert_eq!(windows.len(), n);
            for i in 0..n.saturating_sub(1) {
                assert_eq!(windows[i].end, windows[i + 1].start);
            }
        }
    }

    #[test]
    fn single_sample_gets_only_the_synthetic_end() {
        let samples = hourly_samples(1);
        let windows = reconstruct(&samples, 1, Duration::minutes(10)).unwrap();
        assert_eq!(windows[0].end, windows[0].start + Duration::minutes(10));
    }

    #[test]
    fn too_few_samples_fail_instead_of_shrinking() {
        let samples = hourly_samples(4);
        let err = reconstruct(&samples, 6, Duration::minutes(10)).unwrap_err();
        assert!(matches!(
            err,
            Error::InsufficientSamples {
                expected: 6,
                actual: 4,
            }
        ));
    }

    #[test]
    fn extra_samples_beyond_the_requested_count_are_ignored() {
        let samples = hourly_samples(8);
        let windows = reconstruct(&samples, 6, Duration::minutes(10)).unwrap();
        assert_eq!(windows.len(), 6);
        assert_eq!(windows[5].id, "tl-5");
    }

    #[test]
    fn windows_keep_the_sample_ids() {
        let samples = hourly_samples(3);
        let windows = reconstruct(&samples, 3, Duration::minutes(10)).unwrap();
        let ids: Vec<&str> = windows.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, vec!["tl-0", "tl-1", "tl-2"]);
    }
}
