use crate::scan_view::domain::canonical_row::UNKNOWN_TOOL;
use crate::scan_view::domain::{CanonicalRow, RawRecord, RerunFlag};
use crate::scan_view::policies::{parse_timestamp, TimestampFormat};

/// RecordNormalizer service turning raw records into canonical rows
///
/// Normalization is total and order-preserving: every raw record yields
/// exactly one row, and any missing or malformed optional field falls back
/// to its default instead of failing.
#[derive(Debug, Clone, Copy, Default)]
pub struct RecordNormalizer {
    timestamp_format: TimestampFormat,
}

impl RecordNormalizer {
    pub fn new(timestamp_format: TimestampFormat) -> Self {
        Self { timestamp_format }
    }

    pub fn normalize(&self, records: &[RawRecord]) -> Vec<CanonicalRow> {
        records.iter().map(|r| self.normalize_record(r)).collect()
    }

    pub fn normalize_record(&self, record: &RawRecord) -> CanonicalRow {
        let updates_raw = record.updates.as_deref().and_then(parse_timestamp);
        let updates = updates_raw
            .as_ref()
            .map(|instant| self.timestamp_format.format(instant))
            .unwrap_or_default();

        let sast_tool = match record.sast_tool.as_deref() {
            Some(tool) if !tool.is_empty() => tool.to_string(),
            _ => UNKNOWN_TOOL.to_string(),
        };

        CanonicalRow {
            name: record.name.clone(),
            vulnerabilities: record.vulnerabilities.unwrap_or(0.0),
            updates,
            updates_raw,
            sast_tool,
            rerun: RerunFlag::from(record.rerun),
            url: record.repo_url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan_view::policies::parse_utc_offset;
    use chrono::{TimeZone, Utc};

    fn full_record() -> RawRecord {
        RawRecord {
            name: "a".to_string(),
            vulnerabilities: Some(3.0),
            updates: Some("2024-01-01T10:00:00Z".to_string()),
            sast_tool: Some("Semgrep".to_string()),
            rerun: Some(true),
            repo_url: "https://github.com/acme/a".to_string(),
        }
    }

    #[test]
    fn test_normalize_full_record() {
        let row = RecordNormalizer::default().normalize_record(&full_record());

        assert_eq!(row.name, "a");
        assert_eq!(row.vulnerabilities, 3.0);
        assert_eq!(row.updates, "01/01/2024 10:00");
        assert_eq!(
            row.updates_raw,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
        assert_eq!(row.sast_tool, "Semgrep");
        assert_eq!(row.rerun, RerunFlag::Yes);
        assert_eq!(row.url, "https://github.com/acme/a");
    }

    #[test]
    fn test_normalize_empty_record_uses_defaults() {
        let row = RecordNormalizer::default().normalize_record(&RawRecord::default());

        assert_eq!(row.vulnerabilities, 0.0);
        assert_eq!(row.updates, "");
        assert!(row.updates_raw.is_none());
        assert_eq!(row.sast_tool, "N/A");
        assert_eq!(row.rerun, RerunFlag::No);
    }

    #[test]
    fn test_each_missing_field_gets_its_own_default() {
        let normalizer = RecordNormalizer::default();

        let mut record = full_record();
        record.sast_tool = None;
        assert_eq!(normalizer.normalize_record(&record).sast_tool, "N/A");

        let mut record = full_record();
        record.sast_tool = Some(String::new());
        assert_eq!(normalizer.normalize_record(&record).sast_tool, "N/A");

        let mut record = full_record();
        record.rerun = Some(false);
        assert_eq!(normalizer.normalize_record(&record).rerun, RerunFlag::No);

        let mut record = full_record();
        record.updates = None;
        let row = normalizer.normalize_record(&record);
        assert_eq!(row.updates, "");
        assert!(row.updates_raw.is_none());
        assert_eq!(row.name, "a");
        assert_eq!(row.vulnerabilities, 3.0);
    }

    #[test]
    fn test_unparseable_timestamp_is_treated_as_absent() {
        let mut record = full_record();
        record.updates = Some("not a date".to_string());

        let row = RecordNormalizer::default().normalize_record(&record);
        assert_eq!(row.updates, "");
        assert!(row.updates_raw.is_none());
    }

    #[test]
    fn test_vulnerability_count_is_kept_as_given() {
        let normalizer = RecordNormalizer::default();
        let mut record = full_record();

        record.vulnerabilities = Some(2.4);
        assert_eq!(normalizer.normalize_record(&record).vulnerabilities, 2.4);
        record.vulnerabilities = Some(-3.0);
        assert_eq!(normalizer.normalize_record(&record).vulnerabilities, -3.0);
        record.vulnerabilities = None;
        assert_eq!(normalizer.normalize_record(&record).vulnerabilities, 0.0);
    }

    #[test]
    fn test_display_offset_is_applied() {
        let offset = parse_utc_offset("-05:00").unwrap();
        let row = RecordNormalizer::new(TimestampFormat::new(offset)).normalize_record(&full_record());
        assert_eq!(row.updates, "01/01/2024 05:00");
        // the raw instant is unaffected by display settings
        assert_eq!(
            row.updates_raw,
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_normalize_preserves_order_and_count() {
        let records: Vec<RawRecord> = ["x", "y", "z"]
            .iter()
            .map(|name| RawRecord {
                name: name.to_string(),
                ..RawRecord::default()
            })
            .collect();

        let rows = RecordNormalizer::default().normalize(&records);
        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let normalizer = RecordNormalizer::default();
        let records = vec![full_record(), RawRecord::default()];
        assert_eq!(normalizer.normalize(&records), normalizer.normalize(&records));
    }
}
