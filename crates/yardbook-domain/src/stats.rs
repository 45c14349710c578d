//! Range statistics - dispersion summary for a set of logged shots

/// Summary statistics for a range session
///
/// All fields are zero for an empty session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RangeStats {
    /// Longest logged carry
    pub max: u32,

    /// Nearest-rank 75th percentile
    pub percentile75: u32,

    /// Middle carry; integer mean of the two middle values for even counts
    pub median: u32,

    /// Number of logged shots
    pub count: usize,
}

impl RangeStats {
    /// Compute statistics over a set of carry distances (any order)
    ///
    /// # Examples
    ///
    /// ```
    /// use yardbook_domain::RangeStats;
    ///
    /// let stats = RangeStats::from_distances(&[160, 165, 155]);
    /// assert_eq!(stats.median, 160);
    /// assert_eq!(stats.max, 165);
    /// assert_eq!(stats.count, 3);
    /// ```
    pub fn from_distances(distances: &[u32]) -> Self {
        let mut sorted = distances.to_vec();
        sorted.sort_unstable();

        let count = sorted.len();
        match sorted.last() {
            None => Self::default(),
            Some(&max) => Self {
                max,
                percentile75: percentile(&sorted, 0.75),
                median: median(&sorted),
                count,
            },
        }
    }
}

/// Median of an ascending, non-empty slice
///
/// Even counts use integer (floor) division of the two middle values.
fn median(sorted: &[u32]) -> u32 {
    let count = sorted.len();
    if count % 2 == 0 {
        let lower = u64::from(sorted[count / 2 - 1]);
        let upper = u64::from(sorted[count / 2]);
        ((lower + upper) / 2) as u32
    } else {
        sorted[count / 2]
    }
}

/// Value at index `floor((count - 1) * fraction)` of an ascending, non-empty slice
fn percentile(sorted: &[u32], fraction: f64) -> u32 {
    let index = ((sorted.len() - 1) as f64 * fraction) as usize;
    sorted[index.min(sorted.len() - 1)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(RangeStats::from_distances(&[]), RangeStats::default());
        let stats = RangeStats::from_distances(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.max, 0);
    }

    #[test]
    fn test_odd_count_median() {
        let stats = RangeStats::from_distances(&[160, 165, 155]);
        assert_eq!(stats.max, 165);
        assert_eq!(stats.median, 160);
        assert_eq!(stats.count, 3);
    }

    #[test]
    fn test_even_count_median_truncates() {
        let stats = RangeStats::from_distances(&[155, 160, 165, 170]);
        assert_eq!(stats.median, 162);
    }

    #[test]
    fn test_percentile75_nearest_rank() {
        let stats = RangeStats::from_distances(&[150, 155, 160, 162, 165, 168, 170, 175]);
        assert_eq!(stats.percentile75, 168);
        assert_eq!(stats.max, 175);
        assert_eq!(stats.count, 8);
    }

    #[test]
    fn test_single_shot() {
        let stats = RangeStats::from_distances(&[142]);
        assert_eq!(stats.max, 142);
        assert_eq!(stats.median, 142);
        assert_eq!(stats.percentile75, 142);
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn test_unsorted_input() {
        let stats = RangeStats::from_distances(&[175, 150, 170, 155]);
        // sorted: 150 155 170 175; index floor(3*0.75)=2
        assert_eq!(stats.percentile75, 170);
        assert_eq!(stats.median, 162);
    }
}
