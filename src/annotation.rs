use anyhow::{bail, Result};
use serde::Serialize;
use std::io;

use crate::chinese_number::finder::NumberSpan;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Json, // 行ごとの JSON 配列
    Sgml,  // <X feature='num' english='...'>...</X> で囲む
    Spans, // 位置と訳の候補をすべて出す
}

impl OutputFormat {
    pub fn of(name: &str) -> Result<Self> {
        match name {
            "json" => Ok(Self::Json),
            "sgml" => Ok(Self::Sgml),
            "spans" => Ok(Self::Spans),
            name => bail!("Unknown output format: {}", name),
        }
    }
}

// 数字は 1 文字ずつ別のトークンにする
pub fn tokenize_digits(english: &str) -> Vec<String> {
    let mut spaced = String::new();
    for c in english.chars() {
        if c.is_ascii_digit() {
            spaced.push(' ');
            spaced.push(c);
            spaced.push(' ');
        } else {
            spaced.push(c);
        }
    }
    spaced.split_whitespace().map(|s| s.to_owned()).collect()
}

// 配列の要素を ", " で区切る
struct SpacedFormatter;

impl serde_json::ser::Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }
}

// 先頭の訳だけを使う
pub fn render_json_line(spans: &[NumberSpan]) -> Result<String> {
    let tokens: Vec<Vec<String>> = spans
        .iter()
        .filter_map(|span| span.english.first())
        .map(|english| tokenize_digits(english))
        .collect();

    let mut buffer = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, SpacedFormatter);
    tokens.serialize(&mut serializer)?;

    Ok(String::from_utf8(buffer)?)
}

pub fn render_spans_line(spans: &[NumberSpan]) -> Result<String> {
    Ok(serde_json::to_string(spans)?)
}

fn escape_sgml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn render_sgml_line(line: &str, spans: &[NumberSpan]) -> String {
    let mut rendered = String::with_capacity(line.len());
    let mut pos = 0;

    for span in spans {
        let english = match span.english.first() {
            Some(english) => english,
            None => continue,
        };

        rendered.push_str(&escape_sgml(&line[pos..span.start]));
        rendered.push_str(&format!(
            "<X feature='num' english='{}'>{}</X>",
            escape_sgml(english),
            escape_sgml(&line[span.start..span.end])
        ));
        pos = span.end;
    }
    rendered.push_str(&escape_sgml(&line[pos..]));

    rendered
}
