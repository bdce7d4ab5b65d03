use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CalendarField {
    Year,
    Month,
    Day,
}

// 走査で切り出した 1 文字の役割
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphRole {
    Digit(u8),
    Zero,
    PlaceValue(u32),
    ScaleExponent(u64),
    DecimalPoint,
    CalendarUnit(CalendarField),
    RawDigit(u8), // ASCII

    // 表にはあるが値には反映しない
    Minus,
}

pub static ARABIC_POINTS: &[char] = &[
    '.',
    '·', // U+00B7, Big5 A1 50 is not normalized
];

pub static CHINESE_POINTS: &[char] = &[
    '點', // dian (trad)
    '点', // dian (simp)
];

pub static MINUS: &[char] = &[
    '負', // trad
    '负', // simp
];

pub static ZEROS: &[char] = &[
    '0', // normalized ideographic zero
    '零',
    '〇', // ideographic zero
];

pub static DIGITS: &[(char, u8)] = &[
    ('一', 1),
    ('二', 2),
    ('兩', 2), // liang (trad)
    ('两', 2), // liang (simp)
    ('三', 3),
    ('四', 4),
    ('五', 5),
    ('六', 6),
    ('七', 7),
    ('八', 8),
    ('九', 9),
];

pub static TENS: &[(char, u32)] = &[
    ('十', 10),
    ('卄', 20), // trad
    ('廿', 20), // simp
    ('卅', 30),
];

pub static HUNDREDS_AND_THOUSANDS: &[(char, u32)] = &[
    ('百', 100),
    ('佰', 100), // variant
    ('千', 1000),
    ('仟', 1000), // variant
];

pub static SCALE_EXPONENTS: &[(char, u64)] = &[
    ('萬', 10_000), // trad
    ('万', 10_000), // simp
    ('億', 100_000_000), // trad
    ('亿', 100_000_000), // simp
    ('兆', 1_000_000_000_000),
];

// 年 は基数と序数の区別が難しいので扱わない
pub static CALENDAR_UNITS: &[(char, CalendarField)] = &[
    ('日', CalendarField::Day),
    ('月', CalendarField::Month),
];

pub static GLYPH_ROLES: Lazy<HashMap<char, GlyphRole>> = Lazy::new(|| {
    let mut roles = HashMap::new();

    roles.extend(MINUS.iter().map(|&c| (c, GlyphRole::Minus)));
    roles.extend(ARABIC_POINTS.iter().map(|&c| (c, GlyphRole::DecimalPoint)));
    roles.extend(CHINESE_POINTS.iter().map(|&c| (c, GlyphRole::DecimalPoint)));
    roles.extend(ZEROS.iter().map(|&c| (c, GlyphRole::Zero)));
    roles.extend(DIGITS.iter().map(|&(c, d)| (c, GlyphRole::Digit(d))));
    roles.extend(TENS.iter().map(|&(c, v)| (c, GlyphRole::PlaceValue(v))));
    roles.extend(
        HUNDREDS_AND_THOUSANDS
            .iter()
            .map(|&(c, v)| (c, GlyphRole::PlaceValue(v))),
    );
    roles.extend(
        SCALE_EXPONENTS
            .iter()
            .map(|&(c, e)| (c, GlyphRole::ScaleExponent(e))),
    );
    roles.extend(
        CALENDAR_UNITS
            .iter()
            .map(|&(c, f)| (c, GlyphRole::CalendarUnit(f))),
    );

    // ASCII の 0 は RawDigit(0) で上書きする（累積では零として扱う）
    roles.extend(('0'..='9').map(|c| (c, GlyphRole::RawDigit(c as u8 - b'0'))));

    roles
});

pub fn lookup_glyph(c: char) -> Option<GlyphRole> {
    GLYPH_ROLES.get(&c).copied()
}

pub static SCALE_WORDS: &[(f64, &str)] = &[
    (1e12, "trillion"),
    (1e9, "billion"),
    (1e6, "million"),
];

static ENGLISH_MONTHS: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

static ENGLISH_CARDINALS: [&str; 10] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
];

pub fn english_month(month: i64) -> Option<&'static str> {
    if !(1..=12).contains(&month) {
        return None;
    }
    Some(ENGLISH_MONTHS[(month - 1) as usize])
}

// 1..=10 の整数のみ
pub fn english_cardinal(value: f64) -> Option<&'static str> {
    if value.fract() != 0.0 || !(1.0..=10.0).contains(&value) {
        return None;
    }
    Some(ENGLISH_CARDINALS[value as usize - 1])
}

pub fn english_ordinal(n: i64) -> String {
    let suffix = match (n.rem_euclid(100), n.rem_euclid(10)) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variant_glyphs_share_value() {
        assert_eq!(lookup_glyph('百'), Some(GlyphRole::PlaceValue(100)));
        assert_eq!(lookup_glyph('佰'), Some(GlyphRole::PlaceValue(100)));
        assert_eq!(lookup_glyph('萬'), lookup_glyph('万'));
        assert_eq!(lookup_glyph('億'), Some(GlyphRole::ScaleExponent(100_000_000)));
        assert_eq!(lookup_glyph('兩'), Some(GlyphRole::Digit(2)));
        assert_eq!(lookup_glyph('两'), Some(GlyphRole::Digit(2)));
        assert_eq!(lookup_glyph('廿'), Some(GlyphRole::PlaceValue(20)));
    }

    #[test]
    fn test_ascii_glyphs() {
        assert_eq!(lookup_glyph('0'), Some(GlyphRole::RawDigit(0)));
        assert_eq!(lookup_glyph('7'), Some(GlyphRole::RawDigit(7)));
        assert_eq!(lookup_glyph('.'), Some(GlyphRole::DecimalPoint));
        assert_eq!(lookup_glyph('〇'), Some(GlyphRole::Zero));
        assert_eq!(lookup_glyph(','), None);
        assert_eq!(lookup_glyph('a'), None);
    }

    #[test]
    fn test_minus_is_tabulated() {
        assert_eq!(lookup_glyph('负'), Some(GlyphRole::Minus));
        assert_eq!(lookup_glyph('負'), Some(GlyphRole::Minus));
    }

    #[test]
    fn test_english_ordinal() {
        assert_eq!(english_ordinal(1), "1st");
        assert_eq!(english_ordinal(2), "2nd");
        assert_eq!(english_ordinal(3), "3rd");
        assert_eq!(english_ordinal(4), "4th");
        assert_eq!(english_ordinal(11), "11th");
        assert_eq!(english_ordinal(12), "12th");
        assert_eq!(english_ordinal(13), "13th");
        assert_eq!(english_ordinal(21), "21st");
        assert_eq!(english_ordinal(22), "22nd");
        assert_eq!(english_ordinal(31), "31st");
        assert_eq!(english_ordinal(111), "111th");
        assert_eq!(english_ordinal(0), "0th");
    }

    #[test]
    fn test_english_cardinal() {
        assert_eq!(english_cardinal(1.0), Some("one"));
        assert_eq!(english_cardinal(10.0), Some("ten"));
        assert_eq!(english_cardinal(0.0), None);
        assert_eq!(english_cardinal(11.0), None);
        assert_eq!(english_cardinal(2.5), None);
    }

    #[test]
    fn test_english_month() {
        assert_eq!(english_month(1), Some("january"));
        assert_eq!(english_month(6), Some("june"));
        assert_eq!(english_month(12), Some("december"));
        assert_eq!(english_month(0), None);
        assert_eq!(english_month(13), None);
    }
}
