use std::fmt;

use mongodb::bson::{Bson, Document};

use crate::Language;

/// A dotted path to a value nested inside a record, e.g. `data.en.media.video`.
/// The leaf is kept apart from its parents so a path always names a value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldPath {
    parents: Vec<String>,
    leaf: String,
}

impl FieldPath {
    fn from_segments(parents: &[&str], leaf: &str) -> Self {
        Self {
            parents: parents.iter().map(|s| s.to_string()).collect(),
            leaf: leaf.to_string(),
        }
    }

    /// Documents that must be walked through to reach the leaf.
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    pub fn leaf(&self) -> &str {
        &self.leaf
    }

    /// The path as MongoDB expects it in an update document.
    pub fn dotted(&self) -> String {
        join(&self.parents, &self.leaf)
    }

    /// The path without its leading `data.` segment, which is how values are
    /// labelled when the update is verified.
    pub fn relative(&self) -> String {
        match self.parents.split_first() {
            Some((first, rest)) if first == "data" => join(rest, &self.leaf),
            _ => self.dotted(),
        }
    }

    /// Walks `doc` along the path. Any missing key or non-document level
    /// along the way yields `None`.
    pub fn lookup<'a>(&self, doc: &'a Document) -> Option<&'a Bson> {
        let mut current = doc;
        for segment in &self.parents {
            current = current.get_document(segment).ok()?;
        }

        current.get(&self.leaf)
    }

    pub fn lookup_str<'a>(&self, doc: &'a Document) -> Option<&'a str> {
        self.lookup(doc).and_then(Bson::as_str)
    }
}

fn join(parents: &[String], leaf: &str) -> String {
    parents
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(leaf))
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

/// The fields the updaters are allowed to write.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    ApplicationLink,
    RegionalVideo(Language),
}

impl Field {
    pub fn path(&self) -> FieldPath {
        match self {
            Field::ApplicationLink => {
                FieldPath::from_segments(&["data", "en", "application_link"], "value")
            }
            Field::RegionalVideo(language) => {
                FieldPath::from_segments(&["data", language.code(), "media"], "video")
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::ApplicationLink => "Application Link",
            Field::RegionalVideo(_) => "YouTube link",
        }
    }
}
