//! Corpus file readers.
//!
//! The source corpora (Czech and English newspaper text) are
//! ISO-8859-2 encoded, so both readers decode through `encoding_rs`
//! rather than assuming UTF-8.

use crate::error::{CorpusError, Result};
use compact_str::CompactString;
use encoding_rs::ISO_8859_2;
use std::fs;
use std::path::Path;

/// Sentence delimiter line in `.ptg` tagged corpora.
const SENTENCE_DELIMITER: &str = "###/###";

/// Tag marking punctuation tokens in the tagged corpora.
const PUNCTUATION_TAG: &str = "Z:-------------";

/// One `token/tag` entry of a tagged corpus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: CompactString,
    pub tag: CompactString,
}

fn read_latin2(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|err| CorpusError::Io {
        path: path.to_path_buf(),
        err,
    })?;
    let (text, _, _) = ISO_8859_2.decode(&bytes);
    Ok(text.into_owned())
}

/// Read a one-word-per-line word list.
///
/// Each line is trimmed of trailing whitespace and kept otherwise
/// verbatim, so blank lines become empty words exactly as they appear
/// in the file.
pub fn read_word_list(path: impl AsRef<Path>) -> Result<Vec<CompactString>> {
    let text = read_latin2(path.as_ref())?;
    Ok(text
        .lines()
        .map(|line| CompactString::new(line.trim_end()))
        .collect())
}

/// Read a `.ptg` tagged corpus into sentences of tagged tokens.
///
/// The first line of the file is a header and is skipped. Sentences
/// are separated by `###/###` lines; empty sentences and sentences
/// consisting solely of punctuation tokens are dropped. A line without
/// a `/` separator is a [`CorpusError::MalformedLine`].
pub fn read_tagged_corpus(path: impl AsRef<Path>) -> Result<Vec<Vec<TaggedToken>>> {
    let path = path.as_ref();
    let text = read_latin2(path)?;

    let mut sentences = Vec::new();
    let mut sentence = Vec::new();

    for (index, line) in text.lines().enumerate().skip(1) {
        let line = line.trim_end();
        if line == SENTENCE_DELIMITER {
            if !sentence.is_empty() {
                sentences.push(std::mem::take(&mut sentence));
            }
            continue;
        }

        let (token, tag) = line.split_once('/').ok_or_else(|| CorpusError::MalformedLine {
            path: path.to_path_buf(),
            line: index + 1,
            content: line.to_string(),
        })?;
        sentence.push(TaggedToken {
            token: CompactString::new(token),
            tag: CompactString::new(tag),
        });
    }
    if !sentence.is_empty() {
        sentences.push(sentence);
    }

    // The Czech corpus contains "sentences" that are nothing but
    // punctuation; they carry no distributional information.
    sentences.retain(|sentence| !sentence.iter().all(|entry| entry.tag == PUNCTUATION_TAG));

    Ok(sentences)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_latin2(bytes: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(bytes).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_read_word_list() {
        let file = write_latin2(b"the\ncat\nsat\n");
        let words = read_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["the", "cat", "sat"]);
    }

    #[test]
    fn test_read_word_list_decodes_latin2() {
        // 0xE8 is U+010D LATIN SMALL LETTER C WITH CARON in ISO-8859-2
        let file = write_latin2(b"\xE8as\n");
        let words = read_word_list(file.path()).unwrap();
        assert_eq!(words, vec!["\u{10d}as"]);
    }

    #[test]
    fn test_read_tagged_corpus() {
        let file = write_latin2(
            b"header\n\
              ###/###\n\
              Je/VB-S---3P-AA---\n\
              to/PDNS1----------\n\
              ###/###\n\
              -/Z:-------------\n\
              ###/###\n",
        );
        let sentences = read_tagged_corpus(file.path()).unwrap();

        // The punctuation-only sentence is filtered out
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].len(), 2);
        assert_eq!(sentences[0][0].token, "Je");
        assert_eq!(sentences[0][1].tag, "PDNS1----------");
    }

    #[test]
    fn test_read_tagged_corpus_rejects_malformed_line() {
        let file = write_latin2(b"header\n###/###\nno-separator\n");
        let err = read_tagged_corpus(file.path()).unwrap_err();
        assert!(matches!(err, CorpusError::MalformedLine { line: 3, .. }));
    }
}
