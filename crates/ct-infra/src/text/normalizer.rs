use anyhow::Result;
use ct_core::ports::TextNormalizerPort;
use regex::Regex;

/// Cleans up text copied out of PDFs and wrapped documents.
///
/// - `\r\n` and lone `\r` become `\n`
/// - a word hyphenated across a line break is joined (`transla-\ntion`)
/// - single line breaks inside a paragraph become spaces
/// - blank lines separate paragraphs and are kept as one empty line
/// - runs of spaces and tabs collapse to one space; the result is trimmed
pub struct WhitespaceNormalizer {
    hyphen_break: Regex,
    paragraph_break: Regex,
    line_break: Regex,
    blanks: Regex,
}

impl WhitespaceNormalizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            hyphen_break: Regex::new(r"(\w)-[ \t]*\n[ \t]*(\w)")?,
            paragraph_break: Regex::new(r"\n[ \t]*\n\s*")?,
            line_break: Regex::new(r"[ \t]*\n[ \t]*")?,
            blanks: Regex::new(r"[ \t]+")?,
        })
    }
}

impl TextNormalizerPort for WhitespaceNormalizer {
    fn normalize(&self, raw: &str) -> String {
        let text = raw.replace("\r\n", "\n").replace('\r', "\n");
        let text = self.hyphen_break.replace_all(&text, "$1$2");

        self.paragraph_break
            .split(text.trim())
            .map(|paragraph| {
                let joined = self.line_break.replace_all(paragraph, " ");
                self.blanks.replace_all(&joined, " ").trim().to_string()
            })
            .filter(|paragraph| !paragraph.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}
