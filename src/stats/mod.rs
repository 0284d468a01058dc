use chrono::{DateTime, Duration, Utc};
use parking_lot::RwLock;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Clone, Serialize)]
pub struct ScrapeStats {
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub total_requests: usize,
    pub retry_count: usize,
    pub bytes_downloaded: usize,
    pub status_codes: HashMap<u16, usize>,
    pub records_extracted: usize,
    pub partial_entries: usize,
    pub average_response_time: f64, // in milliseconds
}

#[derive(Debug, Clone)]
pub struct StatsTracker {
    stats: Arc<RwLock<ScrapeStats>>,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self {
            stats: Arc::new(RwLock::new(ScrapeStats {
                start_time: Utc::now(),
                end_time: None,
                total_requests: 0,
                retry_count: 0,
                bytes_downloaded: 0,
                status_codes: HashMap::new(),
                records_extracted: 0,
                partial_entries: 0,
                average_response_time: 0.0,
            })),
        }
    }

    pub fn record_request(&self, status: u16, size: usize, duration: Duration, retries: usize) {
        let mut stats = self.stats.write();
        stats.total_requests += 1;
        stats.retry_count += retries;
        *stats.status_codes.entry(status).or_insert(0) += 1;
        stats.bytes_downloaded += size;

        let current_total = stats.average_response_time * (stats.total_requests - 1) as f64;
        let new_duration = duration.num_milliseconds() as f64;
        stats.average_response_time = (current_total + new_duration) / stats.total_requests as f64;
    }

    pub fn record_extraction(&self, records: usize, partial_entries: usize) {
        let mut stats = self.stats.write();
        stats.records_extracted += records;
        stats.partial_entries += partial_entries;
    }

    pub fn finish(&self) {
        self.stats.write().end_time = Some(Utc::now());
    }

    pub fn get_stats(&self) -> ScrapeStats {
        self.stats.read().clone()
    }

    pub fn print_summary(&self) {
        let stats = self.stats.read();
        let duration = stats
            .end_time
            .unwrap_or_else(Utc::now)
            .signed_duration_since(stats.start_time);

        println!("\nScraping Statistics:");
        println!("===================");
        println!("Duration: {} seconds", duration.num_seconds());
        println!("Total Requests: {}", stats.total_requests);
        println!("Retry Count: {}", stats.retry_count);
        println!(
            "Data Downloaded: {:.2} KB",
            stats.bytes_downloaded as f64 / 1_000.0
        );
        println!(
            "Average Response Time: {:.2}ms",
            stats.average_response_time
        );
        println!("Records Extracted: {}", stats.records_extracted);
        if stats.partial_entries > 0 {
            println!("Partial Entries Skipped: {}", stats.partial_entries);
        }

        println!("\nStatus Codes:");
        for (code, count) in &stats.status_codes {
            println!("  {}: {}", code, count);
        }
    }
}

impl Default for StatsTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_request_tracks_totals() {
        let tracker = StatsTracker::new();
        tracker.record_request(200, 1024, Duration::milliseconds(40), 2);
        tracker.record_request(503, 64, Duration::milliseconds(20), 0);

        let stats = tracker.get_stats();
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.retry_count, 2);
        assert_eq!(stats.bytes_downloaded, 1088);
        assert_eq!(stats.status_codes.get(&200), Some(&1));
        assert_eq!(stats.status_codes.get(&503), Some(&1));
        assert!((stats.average_response_time - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_extraction_accumulates() {
        let tracker = StatsTracker::new();
        tracker.record_extraction(50, 1);

        let stats = tracker.get_stats();
        assert_eq!(stats.records_extracted, 50);
        assert_eq!(stats.partial_entries, 1);
    }
}
