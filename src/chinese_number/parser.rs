use anyhow::{ensure, Result};

use crate::chinese_number::symbol::{CalendarField, GlyphRole};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CalendarDate {
    pub year: Option<i64>,
    pub month: Option<i64>,
    pub day: Option<i64>,
}

impl CalendarDate {
    pub fn is_empty(&self) -> bool {
        self.year.is_none() && self.month.is_none() && self.day.is_none()
    }

    fn set(&mut self, field: CalendarField, value: i64) {
        match field {
            CalendarField::Year => self.year = Some(value),
            CalendarField::Month => self.month = Some(value),
            CalendarField::Day => self.day = Some(value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ParsedNumber {
    Number(f64),
    Date(CalendarDate),
}

// 位取り
// exact は十・百・千 などの整数の位取りを表し，10 で割るときは切り捨てる
// 桁送りの判定に使う「既定の 1」は exact な 1 だけ（零の後の 1 は該当しない）
#[derive(Debug, Clone, Copy, PartialEq)]
struct PlaceValue {
    value: f64,
    exact: bool,
}

impl PlaceValue {
    const UNIT: Self = Self {
        value: 1.0,
        exact: true,
    };

    fn exact(value: u64) -> Self {
        Self {
            value: value as f64,
            exact: true,
        }
    }

    fn inexact(value: f64) -> Self {
        Self {
            value,
            exact: false,
        }
    }

    fn is_unit(&self) -> bool {
        self.exact && self.value == 1.0
    }

    fn shrink(self) -> Self {
        if self.exact {
            Self::exact(self.value as u64 / 10)
        } else {
            Self::inexact(self.value / 10.0)
        }
    }
}

// total: 萬・億 などで確定した値
// sub_total: 確定前の 0..10000 の値
// pending_digit: 位取りがまだ決まっていない数字
// sub_total と pending_digit は None（未設定）と Some(0.0)（零）を区別する
#[derive(Debug)]
struct Accumulator {
    total: f64,
    sub_total: Option<f64>,
    pending_digit: Option<f64>,
    place: PlaceValue,
    date: CalendarDate,
}

impl Accumulator {
    fn new() -> Self {
        Self {
            total: 0.0,
            sub_total: None,
            pending_digit: None,
            place: PlaceValue::UNIT,
            date: CalendarDate::default(),
        }
    }

    // 毎トークンの最初に pending_digit を今の位取りで sub_total に繰り入れる
    fn fold(&mut self) {
        match self.pending_digit {
            Some(digit) => {
                self.sub_total = Some(self.sub_total.unwrap_or(0.0) + digit * self.place.value);
            }
            None if !self.place.exact => {
                self.sub_total = Some(self.sub_total.unwrap_or(0.0));
            }
            None => {}
        }
    }

    // 数字が 2 つ続いたとき: 左を 10 倍するか，右の位を 1 つ下げる
    fn shift(&mut self) {
        if self.place.is_unit() {
            if let Some(sub_total) = self.sub_total.as_mut() {
                *sub_total *= 10.0;
            }
        } else {
            self.place = self.place.shrink();
        }
    }

    fn push(&mut self, token: GlyphRole) {
        if let GlyphRole::PlaceValue(value) = token {
            // "十" は "一十"
            self.pending_digit.get_or_insert(1.0);
            self.place = PlaceValue::exact(value as u64);
        }

        self.fold();

        match token {
            GlyphRole::Digit(d) | GlyphRole::RawDigit(d) if d > 0 => {
                if self.pending_digit.is_some() {
                    self.shift();
                }
                self.pending_digit = Some(d as f64);
            }

            GlyphRole::Zero | GlyphRole::RawDigit(_) => {
                if self.pending_digit.is_some() {
                    self.shift();
                    self.pending_digit = Some(0.0);
                } else {
                    // 位取りの後の零は次の位取りを決めつけないための印
                    self.place = PlaceValue::inexact(1.0);
                }
            }

            _ => {
                self.pending_digit = None;

                match token {
                    GlyphRole::DecimalPoint => {
                        self.place = PlaceValue::inexact(0.1);
                    }

                    GlyphRole::PlaceValue(value) => {
                        self.place = PlaceValue::exact(value as u64).shrink();
                    }

                    GlyphRole::ScaleExponent(exponent) => {
                        let exponent = exponent as f64;
                        self.total += exponent * self.sub_total.unwrap_or(1.0);
                        self.sub_total = None;
                        // 萬 の直後の数字は千の位
                        self.place = PlaceValue::inexact(exponent / 10.0);
                    }

                    GlyphRole::CalendarUnit(field) => {
                        self.date.set(field, self.sub_total.unwrap_or(0.0) as i64);
                        self.sub_total = None;
                        self.place = PlaceValue::UNIT;
                    }

                    _ => {}
                }
            }
        }
    }

    fn finish(self) -> ParsedNumber {
        if !self.date.is_empty() {
            return ParsedNumber::Date(self.date);
        }

        let rest =
            self.sub_total.unwrap_or(0.0) + self.pending_digit.unwrap_or(0.0) * self.place.value;
        ParsedNumber::Number(self.total + rest)
    }
}

// 構文解析
pub fn parse_number_tokens(tokens: &[GlyphRole]) -> Result<ParsedNumber> {
    ensure!(!tokens.is_empty(), "Cannot parse empty array");

    let mut accumulator = Accumulator::new();
    for &token in tokens {
        accumulator.push(token);
    }

    Ok(accumulator.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chinese_number::tokenizer::tokenize_number;

    fn parse(text: &str) -> ParsedNumber {
        parse_number_tokens(&tokenize_number(text).unwrap()).unwrap()
    }

    fn number(text: &str) -> f64 {
        match parse(text) {
            ParsedNumber::Number(n) => n,
            date => panic!("expected number, got {:?}", date),
        }
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(number("一"), 1.0);
        assert_eq!(number("九"), 9.0);
        assert_eq!(number("零"), 0.0);
        assert_eq!(number("7"), 7.0);
    }

    #[test]
    fn test_tens() {
        assert_eq!(number("十"), 10.0);
        assert_eq!(number("十五"), 15.0);
        assert_eq!(number("二十"), 20.0);
        assert_eq!(number("九十九"), 99.0);
        assert_eq!(number("廿"), 20.0);
        assert_eq!(number("卅"), 30.0);
    }

    #[test]
    fn test_place_value_truncates() {
        // 廿 の後の数字は 20 / 10 = 2 の位に入る
        assert_eq!(number("廿三"), 26.0);
        assert_eq!(number("卅一"), 33.0);
    }

    #[test]
    fn test_digits_after_placeholder_zero() {
        // 零 の後の 1.0 は桁送りせず，位を下げる
        assert_eq!(number("一百零五五"), 105.5);
    }

    #[test]
    fn test_hundreds_and_thousands() {
        assert_eq!(number("一百二十三"), 123.0);
        assert_eq!(number("一百二"), 120.0);
        assert_eq!(number("三百零七"), 307.0);
        assert_eq!(number("一千零三十二"), 1032.0);
        assert_eq!(number("九千九百九十九"), 9999.0);
        assert_eq!(number("佰"), 100.0);
    }

    #[test]
    fn test_scale_exponents() {
        assert_eq!(number("一万"), 10_000.0);
        assert_eq!(number("萬"), 10_000.0);
        assert_eq!(number("一万二"), 12_000.0);
        assert_eq!(number("三万五千"), 35_000.0);
        assert_eq!(number("二十萬零五"), 200_005.0);
        assert_eq!(number("一百万"), 1_000_000.0);
        assert_eq!(number("三億五千萬"), 350_000_000.0);
        assert_eq!(number("兆"), 1e12);
        assert_eq!(number("80 万"), 800_000.0);
    }

    #[test]
    fn test_explicit_zero_before_scale() {
        // 零 の後では sub_total は 0 として扱われ，暗黙の 1 にならない
        assert_eq!(number("0萬"), 0.0);
    }

    #[test]
    fn test_digit_runs() {
        assert_eq!(number("一九九七"), 1997.0);
        assert_eq!(number("二〇〇八"), 2008.0);
        assert_eq!(number("1997"), 1997.0);
        assert_eq!(number("12,345"), 12_345.0);
    }

    #[test]
    fn test_decimal_fraction() {
        assert_eq!(number("三点一四"), 3.14);
        assert_eq!(number("零點五"), 0.5);
        assert_eq!(number("3.5"), 3.5);
        assert_eq!(number("1.5万"), 15_000.0);
    }

    #[test]
    fn test_minus_is_ignored() {
        assert_eq!(
            parse_number_tokens(&[GlyphRole::Minus, GlyphRole::Digit(5)]).unwrap(),
            ParsedNumber::Number(5.0)
        );
    }

    #[test]
    fn test_date() {
        assert_eq!(
            parse("六月三日"),
            ParsedNumber::Date(CalendarDate {
                year: None,
                month: Some(6),
                day: Some(3),
            })
        );
        assert_eq!(
            parse("十二月"),
            ParsedNumber::Date(CalendarDate {
                year: None,
                month: Some(12),
                day: None,
            })
        );
        assert_eq!(
            parse("三十一日"),
            ParsedNumber::Date(CalendarDate {
                year: None,
                month: None,
                day: Some(31),
            })
        );
    }

    #[test]
    fn test_empty() {
        assert!(parse_number_tokens(&[]).is_err());
    }
}
