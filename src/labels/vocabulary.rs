use std::ops::Deref;

use crate::error::StartupError;

/// Ordered class names, index-aligned with classifier output.
///
/// Built once at startup and never mutated; share it behind an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelVocabulary {
    labels: Vec<String>,
}

impl LabelVocabulary {
    pub fn new(labels: Vec<String>) -> Self {
        LabelVocabulary { labels }
    }

    /// Parses newline-delimited text, one label per line.
    ///
    /// LF and CRLF endings are both accepted and a final line terminator does
    /// not add an empty label. Blank lines in the middle are kept so that line
    /// `i` stays label `i`.
    pub fn parse(text: &str) -> Self {
        let labels = text.lines().map(|line| line.to_owned()).collect();
        LabelVocabulary { labels }
    }

    /// Reads and parses a label file. Fails if the file is missing or yields
    /// no labels.
    pub fn load(path: &str) -> Result<Self, StartupError> {
        let text = std::fs::read_to_string(path).map_err(|source| StartupError::Io {
            what: "label file",
            path: path.to_owned(),
            source,
        })?;
        let vocab = Self::parse(&text);
        if vocab.is_empty() {
            return Err(StartupError::EmptyLabels { path: path.to_owned() });
        }
        Ok(vocab)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }
}

impl Deref for LabelVocabulary {
    type Target = [String];

    fn deref(&self) -> &[String] {
        &self.labels
    }
}

impl From<Vec<String>> for LabelVocabulary {
    fn from(labels: Vec<String>) -> Self {
        LabelVocabulary::new(labels)
    }
}

impl<'a> FromIterator<&'a str> for LabelVocabulary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        LabelVocabulary::new(iter.into_iter().map(str::to_owned).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn trailing_newline_adds_nothing() {
        let v = LabelVocabulary::parse("tench\ngoldfish\ngreat white shark\n");
        assert_eq!(v.len(), 3);
        assert_eq!(v.get(2), Some("great white shark"));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn crlf_is_stripped() {
        let v = LabelVocabulary::parse("cat\r\ndog\r\n");
        assert_eq!(v.as_slice(), ["cat", "dog"]);
    }

    #[test]
    fn interior_blank_lines_keep_alignment() {
        let v = LabelVocabulary::parse("a\n\nc");
        assert_eq!(v.as_slice(), ["a", "", "c"]);
    }

    #[test]
    fn loads_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "cat\ndog\nbird\n").unwrap();
        let v = LabelVocabulary::load(file.path().to_str().unwrap()).unwrap();
        assert_eq!(v.as_slice(), ["cat", "dog", "bird"]);
    }

    #[test]
    fn missing_file_is_a_startup_error() {
        let err = LabelVocabulary::load("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, StartupError::Io { what: "label file", .. }));
    }

    #[test]
    fn empty_file_is_a_startup_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let err = LabelVocabulary::load(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, StartupError::EmptyLabels { .. }));
    }
}
