use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use crate::{
    chinese_number::symbol::{
        ARABIC_POINTS, CALENDAR_UNITS, CHINESE_POINTS, DIGITS, GLYPH_ROLES,
        HUNDREDS_AND_THOUSANDS, SCALE_EXPONENTS, TENS, ZEROS,
    },
    utility::str::is_token_space,
};

// 数字表現の中に挟まってよい空白
const SPACE: &str = r"[ \t\n\x0B\x0C\r]";

fn char_class<I: IntoIterator<Item = char>>(chars: I) -> String {
    let chars: String = chars
        .into_iter()
        .map(|c| regex::escape(&c.to_string()))
        .collect();
    format!("[{}]", chars)
}

fn digit_class() -> String {
    char_class(DIGITS.iter().map(|&(c, _)| c))
}

fn digit_or_zero_class() -> String {
    char_class(DIGITS.iter().map(|&(c, _)| c).chain(ZEROS.iter().copied()))
}

fn zero_class() -> String {
    char_class(ZEROS.iter().copied())
}

fn ten_class() -> String {
    char_class(TENS.iter().map(|&(c, _)| c))
}

fn place_value_class() -> String {
    char_class(
        HUNDREDS_AND_THOUSANDS
            .iter()
            .chain(TENS.iter())
            .map(|&(c, _)| c),
    )
}

fn scale_class() -> String {
    char_class(SCALE_EXPONENTS.iter().map(|&(c, _)| c))
}

fn calendar_class() -> String {
    char_class(CALENDAR_UNITS.iter().map(|&(c, _)| c))
}

// 1,234,567 / 1234 / 0
pub fn arabic_decimal() -> String {
    format!(
        r"(?:[1-9]{s}*(?:[0-9]{s}*){{0,2}}(?:,{s}*(?:[0-9]{s}*){{3}})+|[1-9]{s}*(?:[0-9]{s}*)*|0)",
        s = SPACE
    )
}

// 一九九七: 2 桁の並びはたいてい数ではないので 3 桁以上
pub fn chinese_digit_run() -> String {
    format!(r"(?:{d}{s}*){{3,}}", d = digit_or_zero_class(), s = SPACE)
}

// 三千五百二十, 二十萬零五 の "二十" など
pub fn chinese_positional() -> String {
    format!(
        r"(?:(?:{d}{s}*{p}|{t}){s}*)+(?:{z}?{s}*{d}{s}*)?",
        d = digit_class(),
        p = place_value_class(),
        t = ten_class(),
        z = zero_class(),
        s = SPACE
    )
}

pub fn bare_digit() -> String {
    digit_class()
}

pub fn bare_place_value() -> String {
    place_value_class()
}

// 萬・億 を挟まない 1 単位分
pub fn below_ten_thousand() -> String {
    format!(
        "(?:{}|{}|{}|{}|{})",
        arabic_decimal(),
        chinese_digit_run(),
        chinese_positional(),
        bare_digit(),
        bare_place_value()
    )
}

// .14 / 點一四
pub fn fraction_suffix() -> String {
    format!(
        r"(?:{ap}(?:{s}*[0-9])+|{cp}{s}*(?:{dz}{s}*)+)",
        ap = char_class(ARABIC_POINTS.iter().copied()),
        cp = char_class(CHINESE_POINTS.iter().copied()),
        dz = digit_or_zero_class(),
        s = SPACE
    )
}

pub fn decimal_fraction() -> String {
    format!(
        r"{n}{s}*{f}(?:{s}*{e})?",
        n = below_ten_thousand(),
        f = fraction_suffix(),
        e = scale_class(),
        s = SPACE
    )
}

// 六月三日
pub fn calendar_sequence() -> String {
    format!(
        r"(?:{n}{s}*{u}{s}*)*{n}{s}*{u}",
        n = below_ten_thousand(),
        u = calendar_class(),
        s = SPACE
    )
}

// 三億五千萬 / 一百
pub fn scaled_sequence() -> String {
    format!(
        r"(?:{n}{s}*{e}{s}*)*{n}(?:{s}*{e})?",
        n = below_ten_thousand(),
        e = scale_class(),
        s = SPACE
    )
}

pub fn bare_scale() -> String {
    scale_class()
}

// 先に書いたものが優先される
pub fn number_expression() -> String {
    format!(
        "(?:{}|{}|{}|{})",
        decimal_fraction(),
        calendar_sequence(),
        scaled_sequence(),
        bare_scale()
    )
}

// 前後が空白か行端であるトークン全体にだけマッチさせる
// 開始位置の境界は find_spans で確かめる
pub fn whole_token(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!(r"^({})(?:$|{})", pattern, SPACE))
        .size_limit(1 << 25)
        .build()
}

pub static SPAN_MATCHER: Lazy<Regex> = Lazy::new(|| whole_token(&number_expression()).unwrap());

pub static TOKEN_SCANNER: Lazy<Regex> =
    Lazy::new(|| Regex::new(&char_class(GLYPH_ROLES.keys().copied())).unwrap());

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanMatch<'a> {
    pub start: usize,
    pub end: usize,
    pub text: &'a str,
}

fn token_starts(line: &str) -> impl Iterator<Item = usize> + '_ {
    std::iter::once(0).chain(
        line.char_indices()
            .filter(|&(_, c)| is_token_space(c))
            .map(|(i, c)| i + c.len_utf8()),
    )
}

// 重ならないマッチを左から順に探す
pub fn find_spans(line: &str) -> Vec<SpanMatch<'_>> {
    let mut spans = Vec::new();
    let mut pos = 0;

    for start in token_starts(line) {
        if start < pos {
            continue;
        }

        let matched = SPAN_MATCHER
            .captures(&line[start..])
            .and_then(|c| c.get(1));

        if let Some(m) = matched {
            let end = start + m.end();
            spans.push(SpanMatch {
                start,
                end,
                text: &line[start..end],
            });
            pos = end;
        }
    }

    spans
}
