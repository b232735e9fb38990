use std::collections::BTreeMap;

use serde::Serialize;

/// Degree histogram buckets, in ascending order
pub const DEGREE_BUCKETS: [&str; 7] = [
    "1-5", "6-10", "11-50", "51-100", "101-500", "501-1000", "1000+",
];

/// Histogram label for a node degree. Degree 0 lands in the first bucket.
pub fn degree_bucket(degree: usize) -> &'static str {
    match degree {
        0..=5 => DEGREE_BUCKETS[0],
        6..=10 => DEGREE_BUCKETS[1],
        11..=50 => DEGREE_BUCKETS[2],
        51..=100 => DEGREE_BUCKETS[3],
        101..=500 => DEGREE_BUCKETS[4],
        501..=1000 => DEGREE_BUCKETS[5],
        _ => DEGREE_BUCKETS[6],
    }
}

/// Counters accumulated over one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExpansionStats {
    pub nodes_expanded: usize,
    pub edges_traversed: usize,
    pub iterations: usize,
    pub degree_distribution: BTreeMap<String, usize>,
}

impl ExpansionStats {
    /// Account for one popped node of the given degree
    pub fn record_pop(&mut self, degree: usize) {
        self.iterations += 1;
        self.nodes_expanded += 1;
        *self
            .degree_distribution
            .entry(degree_bucket(degree).to_string())
            .or_insert(0) += 1;
    }

    pub fn record_edge(&mut self) {
        self.edges_traversed += 1;
    }

    /// Histogram entries in bucket order, skipping empty buckets
    pub fn histogram(&self) -> impl Iterator<Item = (&'static str, usize)> + '_ {
        DEGREE_BUCKETS.iter().filter_map(|&bucket| {
            self.degree_distribution
                .get(bucket)
                .map(|&count| (bucket, count))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(degree_bucket(0), "1-5");
        assert_eq!(degree_bucket(5), "1-5");
        assert_eq!(degree_bucket(6), "6-10");
        assert_eq!(degree_bucket(50), "11-50");
        assert_eq!(degree_bucket(51), "51-100");
        assert_eq!(degree_bucket(500), "101-500");
        assert_eq!(degree_bucket(1000), "501-1000");
        assert_eq!(degree_bucket(1001), "1000+");
    }

    #[test]
    fn test_record_pop_and_histogram_order() {
        let mut stats = ExpansionStats::default();
        stats.record_pop(2000);
        stats.record_pop(3);
        stats.record_pop(4);
        stats.record_edge();

        assert_eq!(stats.iterations, 3);
        assert_eq!(stats.nodes_expanded, 3);
        assert_eq!(stats.edges_traversed, 1);
        let histogram: Vec<_> = stats.histogram().collect();
        assert_eq!(histogram, vec![("1-5", 2), ("1000+", 1)]);
    }
}
