use crate::parser::plaintext::segment_into;
use crate::Sentence;
use anyhow::Result;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

/// Parse markdown and extract prose sentences (skip code blocks, inline
/// code, and raw HTML). Line numbers are tracked approximately through soft
/// and hard breaks; every sentence in a block gets the block's start line.
pub fn parse(content: &str) -> Result<Vec<Sentence>> {
    let mut sentences = Vec::new();
    let parser = Parser::new(content);

    let mut in_code_block = false;
    let mut current_line = 1;
    let mut block = String::new();
    let mut block_line = 1;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_)) => {
                in_code_block = true;
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Start(Tag::Paragraph | Tag::Heading { .. } | Tag::Item) => {
                block.clear();
                block_line = current_line;
            }
            Event::End(TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item) => {
                segment_into(&block, block_line, &mut sentences);
                block.clear();
            }
            Event::Text(text) => {
                if !in_code_block {
                    block.push_str(&text);
                }
                current_line += text.matches('\n').count();
            }
            Event::SoftBreak | Event::HardBreak => {
                block.push(' ');
                current_line += 1;
            }
            _ => {}
        }
    }

    Ok(sentences)
}
