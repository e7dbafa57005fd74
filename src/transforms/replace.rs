use anyhow::{Context, Result};
use regex::Regex;

use crate::batch::Transform;
use crate::domain::ContentRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetField {
    Title,
    Body,
    Both,
}

enum Matcher {
    Literal(String),
    Pattern(Regex),
}

/// Replaces text in the targeted field(s), either literally or via a regex
/// pattern with the usual `$1` capture references in the replacement.
pub struct TextReplace {
    matcher: Matcher,
    replacement: String,
    field: TargetField,
}

impl TextReplace {
    pub fn literal(find: &str, replacement: &str, field: TargetField) -> Self {
        Self {
            matcher: Matcher::Literal(find.to_string()),
            replacement: replacement.to_string(),
            field,
        }
    }

    pub fn pattern(pattern: &str, replacement: &str, field: TargetField) -> Result<Self> {
        let regex = Regex::new(pattern)
            .with_context(|| format!("Invalid replacement pattern {pattern:?}"))?;

        Ok(Self {
            matcher: Matcher::Pattern(regex),
            replacement: replacement.to_string(),
            field,
        })
    }

    fn rewrite(&self, text: &str) -> String {
        match &self.matcher {
            Matcher::Literal(find) => text.replace(find, &self.replacement),
            Matcher::Pattern(regex) => regex.replace_all(text, self.replacement.as_str()).into_owned(),
        }
    }
}

impl Transform for TextReplace {
    fn apply(&mut self, record: &mut ContentRecord) -> Result<()> {
        if matches!(self.field, TargetField::Title | TargetField::Both) {
            record.title = self.rewrite(&record.title);
        }
        if matches!(self.field, TargetField::Body | TargetField::Both) {
            record.body = self.rewrite(&record.body);
        }
        Ok(())
    }
}
