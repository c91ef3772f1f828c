use crate::Sentence;
use anyhow::Result;
use unicode_segmentation::UnicodeSegmentation;

/// Parse plain text into sentences, one line at a time. A sentence never
/// spans a line break; each one is attributed to its line number.
pub fn parse(content: &str) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();

    for (line_num, line) in content.lines().enumerate() {
        let line_num = line_num + 1;
        segment_into(line, line_num, &mut sentences);
    }

    Ok(sentences)
}

/// Split one chunk of prose at sentence boundaries (UAX #29) and append the
/// non-blank pieces.
pub fn segment_into(text: &str, line: usize, sentences: &mut Vec<Sentence>) {
    for raw in text.split_sentence_bounds() {
        let sentence = raw.trim();
        if !sentence.is_empty() {
            sentences.push(Sentence::new(sentence, line));
        }
    }
}
