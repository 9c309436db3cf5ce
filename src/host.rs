//! In-memory store for saved editor text.

use scribe3d_core::{SaveMeta, SavePayload, SaveSink};
use std::convert::Infallible;
use std::io::{self, Write};
use tracing::info;

/// Saved texts in the order they were saved. Lives for the process only.
#[derive(Debug, Default)]
pub struct SavedTexts {
    entries: Vec<SavePayload>,
}

impl SavedTexts {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[SavePayload] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append an entry and log the new count.
    pub fn record(&mut self, text: &str, meta: &SaveMeta) {
        info!(text, ?meta, "Text saved");
        self.entries.push(SavePayload {
            text: text.to_string(),
            meta: *meta,
        });
        info!("Saved texts: {}", self.entries.len());
    }

    /// Write every entry as one JSON object per line.
    pub fn write_json_lines<W: Write>(&self, mut out: W) -> io::Result<()> {
        for entry in &self.entries {
            serde_json::to_writer(&mut out, entry)?;
            out.write_all(b"\n")?;
        }
        out.flush()
    }
}

impl SaveSink for SavedTexts {
    type Error = Infallible;

    fn save(&mut self, text: &str, meta: &SaveMeta) -> Result<(), Infallible> {
        self.record(text, meta);
        Ok(())
    }
}
