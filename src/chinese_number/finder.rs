use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;

use crate::{
    chinese_number::{
        parser::parse_number_tokens, pattern::find_spans, renderer::render_parsed_number,
        tokenizer::tokenize_number,
    },
    utility::str::trim_token_space,
};

static LONE_YI: &str = "一";

#[derive(Debug, Clone, Default)]
pub struct FinderOptions {
    // 単独の "一" を 1 と訳すか
    pub translate_yi: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumberSpan {
    pub start: usize,
    pub end: usize,
    pub english: Vec<String>,
}

pub fn convert_chinese_number(text: &str) -> Result<Vec<String>> {
    let parsed = tokenize_number(text)
        .and_then(|tokens| {
            debug!("{:?}: {:?}", text, tokens);
            parse_number_tokens(&tokens)
        })
        .with_context(|| format!("couldn't decode number {}", text))?;

    render_parsed_number(&parsed)
        .with_context(|| format!("couldn't encode {:?} (original: {})", parsed, text))
}

// 1 行の中の数字表現を左から順に英訳する
// 変換できないものは警告を出して読み飛ばす
pub fn find_chinese_numbers(line: &str, options: &FinderOptions) -> Vec<NumberSpan> {
    let mut result = Vec::new();

    for span in find_spans(line) {
        let english = match convert_chinese_number(span.text) {
            Ok(english) => english,
            Err(err) => {
                warn!("{:#}", err);
                continue;
            }
        };

        let (start, end) = trim_token_space(line, span.start, span.end);

        if &line[start..end] == LONE_YI && !options.translate_yi {
            continue;
        }
        if english.is_empty() {
            continue;
        }

        debug!("{:?} -> {:?}", &line[start..end], english);
        result.push(NumberSpan {
            start,
            end,
            english,
        });
    }

    result
}
