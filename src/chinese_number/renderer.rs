use anyhow::{ensure, Context, Result};

use crate::{
    chinese_number::{
        parser::{CalendarDate, ParsedNumber},
        symbol::{english_cardinal, english_month, english_ordinal, SCALE_WORDS},
    },
    utility::decimal::format_decimal,
};

// 英訳の候補を並べる（先頭が既定の訳）
pub fn render_parsed_number(parsed: &ParsedNumber) -> Result<Vec<String>> {
    match parsed {
        ParsedNumber::Number(value) => render_number(*value),
        ParsedNumber::Date(date) => render_date(date),
    }
}

pub fn render_number(value: f64) -> Result<Vec<String>> {
    ensure!(value.is_finite(), "Cannot render magnitude: {}", value);

    let mut english = vec![render_magnitude(value)];
    if let Some(word) = english_cardinal(value) {
        english.push(word.to_owned());
    }
    Ok(english)
}

// million 以上は大きい方から単位語を使う
pub fn render_magnitude(value: f64) -> String {
    match SCALE_WORDS.iter().find(|&&(scale, _)| value >= scale) {
        Some(&(scale, word)) => format!("{} {}", format_decimal(value / scale), word),
        None => format_decimal(value),
    }
}

// 年がなく日があるときは月を落として "the 3rd" / "on the 3rd" とする
// 落とす月は範囲外（十三月 など）でもエラーにしない
pub fn render_date(date: &CalendarDate) -> Result<Vec<String>> {
    if let (Some(day), None) = (date.day, date.year) {
        let ordinal = english_ordinal(day);
        return Ok(vec![
            format!("the {}", ordinal),
            format!("on the {}", ordinal),
        ]);
    }

    let mut parts = Vec::new();

    if let Some(month) = date.month {
        let name = english_month(month).with_context(|| format!("Unknown month: {}", month))?;
        parts.push(name.to_owned());
    }
    if let Some(day) = date.day {
        parts.push(day.to_string());
    }
    if date.day.is_some() && date.year.is_some() {
        parts.push(",".to_owned());
    }
    if let Some(year) = date.year {
        parts.push(year.to_string());
    }

    if parts.is_empty() {
        return Ok(Vec::new());
    }
    Ok(vec![parts.join(" ")])
}
