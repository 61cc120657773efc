//! Counters accumulated over one deduplication pass.

/// Disposition counts for a processed stream.
///
/// Every record lands in exactly one bucket, so
/// `admitted + duplicates + media` always equals the number of records
/// consumed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DedupeStats {
    /// First-seen crawl documents written to the output.
    pub admitted: u64,
    /// Crawl documents dropped because their key was already present.
    pub duplicates: u64,
    /// Media records passed through without keying.
    pub media: u64,
}

impl DedupeStats {
    /// Total records consumed from the input.
    pub fn records(&self) -> u64 {
        self.admitted + self.duplicates + self.media
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_sums_all_buckets() {
        let stats = DedupeStats {
            admitted: 3,
            duplicates: 2,
            media: 1,
        };
        assert_eq!(stats.records(), 6);
        assert_eq!(DedupeStats::default().records(), 0);
    }
}
