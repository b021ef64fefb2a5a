use std::fmt;

use crate::FieldPath;

/// How the update target was chosen among the records matching a slug.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one record matched.
    Only,
    /// Several matched and the preferred record was among them.
    Preferred,
    /// The caller named the record with `--id`.
    Explicit,
    /// Several matched, none preferred; the first in store order was taken.
    FirstOfMany,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Applied {
    pub slug: String,
    pub matches: usize,
    pub target_id: String,
    pub resolution: Resolution,
    pub path: FieldPath,
    pub label: &'static str,
    pub value: String,
    pub modified: bool,
    /// What the record holds at `path` after the update, if it is a string.
    pub current: Option<String>,
}

/// Result of a run that did not fail. Its `Display` is the report printed
/// for the operator.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    NotFound { slug: String, id: Option<String> },
    Applied(Applied),
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::NotFound { slug, id: None } => {
                writeln!(f, "No documents found with slug: {}", slug)
            }
            Outcome::NotFound { slug, id: Some(id) } => {
                writeln!(f, "No document with ID {} found with slug: {}", id, slug)
            }
            Outcome::Applied(applied) => write!(f, "{}", applied),
        }
    }
}

impl fmt::Display for Applied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Found {} document(s) with slug: {}", self.matches, self.slug)?;
        writeln!(f, "Selected document with ID: {}", self.target_id)?;
        writeln!(f, "Applying update: $set {} = {}", self.path, self.value)?;

        if self.modified {
            writeln!(f, "Successfully updated document with ID: {}", self.target_id)?;
        } else {
            writeln!(f, "Document found but no changes were made")?;
        }

        writeln!(f)?;
        writeln!(f, "Verifying update - {} after update:", self.label)?;
        writeln!(
            f,
            "{}: {}",
            self.path.relative(),
            self.current.as_deref().unwrap_or("Not found")
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{Field, Language};

    fn applied(modified: bool, current: Option<&str>) -> Applied {
        let field = Field::RegionalVideo(Language::Tamil);

        Applied {
            slug: "fpktnk.json".to_string(),
            matches: 2,
            target_id: "775a846c8c5442458ea4860111b28c57".to_string(),
            resolution: Resolution::Preferred,
            path: field.path(),
            label: field.label(),
            value: "https://www.youtube.com/watch?v=example".to_string(),
            modified,
            current: current.map(|s| s.to_string()),
        }
    }

    #[test]
    fn reports_successful_update() {
        let report = Outcome::Applied(applied(
            true,
            Some("https://www.youtube.com/watch?v=example"),
        ))
        .to_string();

        assert_eq!(
            report,
            "Found 2 document(s) with slug: fpktnk.json\n\
             Selected document with ID: 775a846c8c5442458ea4860111b28c57\n\
             Applying update: $set data.ta.media.video = https://www.youtube.com/watch?v=example\n\
             Successfully updated document with ID: 775a846c8c5442458ea4860111b28c57\n\
             \n\
             Verifying update - YouTube link after update:\n\
             ta.media.video: https://www.youtube.com/watch?v=example\n"
        );
    }

    #[test]
    fn reports_unchanged_and_missing_value() {
        let report = Outcome::Applied(applied(false, None)).to_string();

        assert!(report.contains("Document found but no changes were made\n"));
        assert!(report.ends_with("ta.media.video: Not found\n"));
    }

    #[test]
    fn reports_not_found() {
        let outcome = Outcome::NotFound {
            slug: "nothing.json".to_string(),
            id: None,
        };
        assert_eq!(outcome.to_string(), "No documents found with slug: nothing.json\n");
    }
}
