use chrono::Duration;

use super::TimeRange;

/// The `index`-th of `count` equal slices of `window`.
///
/// Slice boundaries are offsets from the window start at millisecond
/// precision, so consecutive slices share their boundary exactly and the last
/// slice ends on `window.end`. Together the slices tile the window.
pub fn estimate_range(window: TimeRange, index: usize, count: usize) -> TimeRange {
    debug_assert!(index < count, "slice {index} of {count}");
    let count = count.max(1) as i64;
    let len = window.duration().num_milliseconds();
    let boundary = |i: i64| window.start + Duration::milliseconds(len * i / count);
    let index = index as i64;
    TimeRange::new(boundary(index), boundary(index + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Daypart;
    use crate::tests::common::{at, date};

    #[test]
    fn single_slice_is_the_whole_window() {
        let window = Daypart::Morning.window(date(2025, 8, 15));
        assert_eq!(estimate_range(window, 0, 1), window);
    }

    #[test]
    fn three_slices_of_the_morning() {
        let d = date(2025, 8, 15);
        let window = Daypart::Morning.window(d);
        assert_eq!(
            estimate_range(window, 1, 3),
            TimeRange::new(at(d, 8, 0), at(d, 10, 0))
        );
    }

    #[test]
    fn uneven_slices_still_tile_the_window() {
        let window = Daypart::Night.window(date(2025, 8, 15));
        for count in [1, 3, 7, 11, 60, 301] {
            let ranges: Vec<TimeRange> = (0..count)
                .map(|i| estimate_range(window, i, count))
                .collect();
            assert_eq!(ranges[0].start, window.start);
            assert_eq!(ranges[count - 1].end, window.end);
            for pair in ranges.windows(2) {
                assert_eq!(pair[0].end, pair[1].start);
            }
            assert!(ranges.iter().all(|r| r.start < r.end));
        }
    }
}
