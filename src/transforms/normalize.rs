use anyhow::Result;

use crate::batch::Transform;
use crate::domain::ContentRecord;

/// Collapses runs of whitespace in the title and body to single spaces and
/// trims the ends. Already-clean records come out unchanged, so the driver
/// skips their persist.
pub struct NormalizeWhitespace;

impl Transform for NormalizeWhitespace {
    fn apply(&mut self, record: &mut ContentRecord) -> Result<()> {
        record.title = normalize(&record.title);
        record.body = normalize(&record.body);
        Ok(())
    }
}

fn normalize(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
