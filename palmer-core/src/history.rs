use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::NotationError;
use crate::result::AnalysisResult;

/// Most entries kept; older ones fall off the end.
pub const MAX_HISTORY: usize = 100;

/// A correction the user made to a recognition result.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    /// Milliseconds since the Unix epoch, supplied by the caller.
    pub timestamp: u64,
    pub image_name: String,
    pub original_result: AnalysisResult,
    pub corrected_result: AnalysisResult,
}

/// In-memory log of corrections for one session, newest first.
#[derive(Clone, Debug, Default)]
pub struct HistoryLog {
    items: Vec<HistoryItem>,
    seq: u64,
}

impl HistoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a correction. The log is trimmed to [`MAX_HISTORY`].
    pub fn record(
        &mut self,
        image_name: &str,
        original: AnalysisResult,
        corrected: AnalysisResult,
        timestamp: u64,
    ) -> &HistoryItem {
        self.seq += 1;
        let item = HistoryItem {
            id: format!("{}-{}", timestamp, self.seq),
            timestamp,
            image_name: image_name.to_string(),
            original_result: original,
            corrected_result: corrected,
        };
        self.items.insert(0, item);
        self.items.truncate(MAX_HISTORY);
        debug!("history: recorded {:?} ({} items)", image_name, self.items.len());
        &self.items[0]
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Pretty JSON array of all items, for the training data export.
    pub fn to_json(&self) -> Result<String, NotationError> {
        Ok(serde_json::to_string_pretty(&self.items)?)
    }

    pub fn from_json(text: &str) -> Result<Self, NotationError> {
        let mut items: Vec<HistoryItem> = serde_json::from_str(text)?;
        items.truncate(MAX_HISTORY);
        let seq = items.len() as u64;
        Ok(HistoryLog { items, seq })
    }
}

/// File name of the exported dataset for a `YYYY-MM-DD` date.
pub fn dataset_file_name(date: &str) -> String {
    format!("dental_ai_training_data_{date}.json")
}
