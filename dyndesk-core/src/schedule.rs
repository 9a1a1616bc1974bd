//! Time-of-day schedule construction.
//!
//! Frames are spread evenly over a 24-hour day using integer minutes. The
//! remainder of `1440 / frame_count` is dropped, so the last frame's slot runs
//! slightly long and no entry ever reaches `24:00`.

use serde::{Serialize, Serializer};
use std::path::{Path, PathBuf};

/// Minutes in one day.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// One wallpaper change: show `image` from `time` onwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduleEntry {
    /// Clock time as `HH:MM` (24-hour)
    pub time: String,
    /// Extracted frame to display; written lossily if not valid UTF-8
    #[serde(serialize_with = "serialize_path_lossy")]
    pub image: PathBuf,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleResult {
    pub schedule: Vec<ScheduleEntry>,
    pub extracted_dir: PathBuf,
    pub image_count: usize,
    pub source_heic: PathBuf,
}

/// Evenly spaced `HH:MM` times for `frame_count` frames, starting at midnight.
///
/// Non-positive counts yield a single `00:00` entry.
///
/// # Examples
///
/// ```rust
/// use dyndesk_core::schedule::create_time_schedule;
///
/// assert_eq!(create_time_schedule(4), vec!["00:00", "06:00", "12:00", "18:00"]);
/// assert_eq!(create_time_schedule(0), vec!["00:00"]);
/// ```
pub fn create_time_schedule(frame_count: i64) -> Vec<String> {
    if frame_count <= 0 {
        return vec![format_clock_time(0)];
    }

    let minutes_per_image = MINUTES_PER_DAY / frame_count;
    (0..frame_count)
        .map(|i| format_clock_time(i * minutes_per_image))
        .collect()
}

/// Pairs each time with the frame at the same position.
///
/// The result is as long as the shorter of the two inputs.
pub fn build_schedule(times: Vec<String>, images: &[PathBuf]) -> Vec<ScheduleEntry> {
    times
        .into_iter()
        .zip(images.iter().cloned())
        .map(|(time, image)| ScheduleEntry { time, image })
        .collect()
}

fn serialize_path_lossy<S>(path: &Path, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&path.to_string_lossy())
}

fn format_clock_time(total_minutes: i64) -> String {
    format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sixteen_frames_every_ninety_minutes() {
        let times = create_time_schedule(16);
        assert_eq!(times.len(), 16);
        assert_eq!(times[0], "00:00");
        assert_eq!(times[1], "01:30");
        assert_eq!(times[2], "03:00");
        assert_eq!(times[15], "22:30");
    }

    #[test]
    fn test_remainder_minutes_are_dropped() {
        // 1440 / 7 = 205 remainder 5
        let times = create_time_schedule(7);
        assert_eq!(
            times,
            vec!["00:00", "03:25", "06:50", "10:15", "13:40", "17:05", "20:30"]
        );
    }

    #[test]
    fn test_non_positive_counts() {
        assert_eq!(create_time_schedule(0), vec!["00:00"]);
        assert_eq!(create_time_schedule(-3), vec!["00:00"]);
    }

    #[test]
    fn test_single_frame() {
        assert_eq!(create_time_schedule(1), vec!["00:00"]);
    }

    #[test]
    fn test_build_schedule_zips_in_order() {
        let images = vec![PathBuf::from("a_00.png"), PathBuf::from("a_01.png")];
        let entries = build_schedule(create_time_schedule(2), &images);
        assert_eq!(
            entries,
            vec![
                ScheduleEntry {
                    time: "00:00".into(),
                    image: PathBuf::from("a_00.png"),
                },
                ScheduleEntry {
                    time: "12:00".into(),
                    image: PathBuf::from("a_01.png"),
                },
            ]
        );
    }

    #[test]
    fn test_entry_serializes_as_time_and_image() {
        let entry = ScheduleEntry {
            time: "06:00".into(),
            image: PathBuf::from("/tmp/.a_extracted/a_01.png"),
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            r#"{"time":"06:00","image":"/tmp/.a_extracted/a_01.png"}"#
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_image_path_serializes_lossily() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let entry = ScheduleEntry {
            time: "00:00".into(),
            image: PathBuf::from(OsStr::from_bytes(b"/walls\xff/Mojave_00.png")),
        };
        assert_eq!(
            serde_json::to_string(&entry).unwrap(),
            "{\"time\":\"00:00\",\"image\":\"/walls\u{FFFD}/Mojave_00.png\"}"
        );
    }
}
