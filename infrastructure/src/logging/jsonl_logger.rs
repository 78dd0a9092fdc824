//! JSONL transcript of model calls.
//!
//! Each [`ConversationEvent`] becomes one JSON line carrying its payload
//! fields plus `type` and `timestamp`. The file is opened in append mode,
//! so a resumed run extends the transcript of the interrupted one.

use chrono::{SecondsFormat, Utc};
use debate_application::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// Appends one JSON object per event. Flushes after every line and on `Drop`.
pub struct JsonlConversationLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript and its parent directories.
    ///
    /// Returns `None` after a warning when the file cannot be opened; the run
    /// then proceeds without a transcript.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match Self::open(path) {
            Ok(file) => Some(Self {
                writer: Mutex::new(BufWriter::new(file)),
                path: path.to_path_buf(),
            }),
            Err(e) => {
                warn!("Transcript disabled, cannot open {}: {}", path.display(), e);
                None
            }
        }
    }

    fn open(path: &Path) -> std::io::Result<File> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        OpenOptions::new().create(true).append(true).open(path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Merge `type` and `timestamp` into object payloads; wrap anything else
/// under `data`.
fn record(event: ConversationEvent, timestamp: String) -> Value {
    let mut map = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    map.insert("type".to_string(), Value::from(event.event_type));
    map.insert("timestamp".to_string(), Value::String(timestamp));
    Value::Object(map)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let Ok(line) = serde_json::to_string(&record(event, timestamp)) else {
            return;
        };
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line).and_then(|_| writer.flush());
        }
    }
}

impl Drop for JsonlConversationLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    fn read(path: &Path) -> String {
        let mut content = String::new();
        File::open(path)
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        content
    }

    #[test]
    fn test_writes_one_line_per_model_call() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transcripts").join("run.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "model_call",
            serde_json::json!({
                "model": "phi3:3.8b",
                "role": "proponent",
                "round": 1,
                "success": true
            }),
        ));
        logger.log(ConversationEvent::new(
            "evaluation_call",
            serde_json::json!({"axis": "coherence", "success": false}),
        ));
        drop(logger);

        let content = read(&path);
        let lines: Vec<serde_json::Value> = content
            .trim()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|v| v.get("timestamp").is_some()));
        assert_eq!(lines[0]["type"], "model_call");
        assert_eq!(lines[0]["model"], "phi3:3.8b");
        assert_eq!(lines[0]["round"], 1);
        assert_eq!(lines[1]["type"], "evaluation_call");
        assert_eq!(lines[1]["success"], false);
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        let logger = JsonlConversationLogger::new(&path).unwrap();

        logger.log(ConversationEvent::new(
            "unit_saved",
            serde_json::json!("baseline phi3:3.8b"),
        ));
        drop(logger);

        let value: serde_json::Value = serde_json::from_str(read(&path).trim()).unwrap();
        assert_eq!(value["type"], "unit_saved");
        assert_eq!(value["data"], "baseline phi3:3.8b");
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.jsonl");
        for round in 1..=2 {
            let logger = JsonlConversationLogger::new(&path).unwrap();
            logger.log(ConversationEvent::new(
                "model_call",
                serde_json::json!({"round": round}),
            ));
        }
        assert_eq!(read(&path).trim().lines().count(), 2);
    }

    #[test]
    fn test_uncreatable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();
        assert!(JsonlConversationLogger::new(blocker.join("run.jsonl")).is_none());
    }
}
