use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::models::MatchRecord;

/// Aggregate counts over a batch of match records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MatchSummary {
    pub matches: usize,
    pub submatches: usize,
    pub files: usize,
    pub directories: usize,
    /// Path with the most match records and its count. Ties go to the path
    /// seen first.
    pub busiest_file: Option<(String, usize)>,
}

impl MatchSummary {
    pub fn from_records(records: &[MatchRecord]) -> Self {
        let mut per_file: HashMap<&str, usize> = HashMap::new();
        let mut file_order: Vec<&str> = Vec::new();
        let mut directories: HashSet<String> = HashSet::new();
        let mut submatches = 0;

        for record in records {
            let count = per_file.entry(record.path.as_str()).or_insert_with(|| {
                file_order.push(record.path.as_str());
                0
            });
            *count += 1;
            directories.insert(record.directory());
            submatches += record.submatches.len();
        }

        let mut busiest_file: Option<(&str, usize)> = None;
        for &path in &file_order {
            let count = per_file[path];
            if busiest_file.is_none_or(|(_, best)| count > best) {
                busiest_file = Some((path, count));
            }
        }

        Self {
            matches: records.len(),
            submatches,
            files: file_order.len(),
            directories: directories.len(),
            busiest_file: busiest_file.map(|(path, count)| (path.to_string(), count)),
        }
    }
}
