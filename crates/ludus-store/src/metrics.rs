//! Metrics collected during a build

use std::collections::BTreeMap;

use ludus_gatekeeper::RejectionReason;

/// Counts collected during one build pass
///
/// Tracks every record seen, why filtered records were dropped, and how
/// duplicates were resolved.
#[derive(Debug, Clone, Default)]
pub struct BuildMetrics {
    /// Records offered to the build
    pub processed: usize,

    /// Records that passed the filter
    pub accepted: usize,

    /// Rejected records per reason kind (a record can carry several reasons)
    pub rejected_by_reason: BTreeMap<&'static str, usize>,

    /// Rejected records
    pub rejected: usize,

    /// Lexicon lines the loader skipped as malformed
    pub malformed: usize,

    /// Entries created
    pub added: usize,

    /// Duplicates that replaced a stored entry
    pub replaced: usize,

    /// Duplicates that were dropped
    pub discarded: usize,
}

impl BuildMetrics {
    /// Create new empty metrics
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a record entering the pipeline
    pub fn record_processed(&mut self) {
        self.processed += 1;
    }

    /// Record a record that passed the filter
    pub fn record_accepted(&mut self) {
        self.accepted += 1;
    }

    /// Record a filtered record
    pub fn record_rejection(&mut self, reasons: &[RejectionReason]) {
        self.rejected += 1;
        for reason in reasons {
            *self.rejected_by_reason.entry(reason.kind()).or_insert(0) += 1;
        }
    }

    /// Record a new entry
    pub fn record_added(&mut self) {
        self.added += 1;
    }

    /// Record a duplicate that replaced its entry
    pub fn record_replaced(&mut self) {
        self.replaced += 1;
    }

    /// Record a duplicate that was dropped
    pub fn record_discarded(&mut self) {
        self.discarded += 1;
    }

    /// Set the malformed-line count reported by the loader
    pub fn set_malformed(&mut self, count: usize) {
        self.malformed = count;
    }

    /// Total duplicates seen
    pub fn total_duplicates(&self) -> usize {
        self.replaced + self.discarded
    }

    /// Reset all metrics
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Generate a summary report of metrics
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Build Metrics Summary".to_string(),
            "=====================".to_string(),
            format!("Records processed: {}", self.processed),
            format!("Malformed lines: {}", self.malformed),
            format!("Accepted: {}", self.accepted),
            format!("Rejected: {}", self.rejected),
            String::new(),
        ];

        if !self.rejected_by_reason.is_empty() {
            lines.push("Rejections by reason:".to_string());
            for (kind, count) in &self.rejected_by_reason {
                lines.push(format!("  {}: {}", kind, count));
            }
            lines.push(String::new());
        }

        lines.push(format!("Entries added: {}", self.added));
        lines.push(format!("Duplicates replaced: {}", self.replaced));
        lines.push(format!("Duplicates discarded: {}", self.discarded));

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = BuildMetrics::new();
        assert_eq!(metrics.processed, 0);
        assert_eq!(metrics.total_duplicates(), 0);
        assert!(metrics.rejected_by_reason.is_empty());
    }

    #[test]
    fn test_record_rejection_counts_each_reason() {
        let mut metrics = BuildMetrics::new();
        metrics.record_rejection(&[RejectionReason::EmptyGloss, RejectionReason::PlaceholderHead]);
        metrics.record_rejection(&[RejectionReason::EmptyGloss]);

        assert_eq!(metrics.rejected, 2);
        assert_eq!(metrics.rejected_by_reason["empty_gloss"], 2);
        assert_eq!(metrics.rejected_by_reason["placeholder_head"], 1);
    }

    #[test]
    fn test_duplicates() {
        let mut metrics = BuildMetrics::new();
        metrics.record_replaced();
        metrics.record_discarded();
        metrics.record_discarded();
        assert_eq!(metrics.total_duplicates(), 3);
    }

    #[test]
    fn test_reset() {
        let mut metrics = BuildMetrics::new();
        metrics.record_processed();
        metrics.record_added();
        metrics.set_malformed(4);
        metrics.reset();
        assert_eq!(metrics.processed, 0);
        assert_eq!(metrics.added, 0);
        assert_eq!(metrics.malformed, 0);
    }

    #[test]
    fn test_summary() {
        let mut metrics = BuildMetrics::new();
        metrics.record_processed();
        metrics.record_processed();
        metrics.record_accepted();
        metrics.record_added();
        metrics.record_rejection(&[RejectionReason::AllPlaceholders]);

        let summary = metrics.summary();
        assert!(summary.contains("Records processed: 2"));
        assert!(summary.contains("all_placeholders: 1"));
        assert!(summary.contains("Entries added: 1"));
    }
}
