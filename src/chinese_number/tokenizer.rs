use anyhow::{ensure, Context, Result};

use crate::chinese_number::{
    pattern::TOKEN_SCANNER,
    symbol::{lookup_glyph, GlyphRole},
};

// 字句解析: 区切りのカンマや空白は読み飛ばす
pub fn tokenize_number(text: &str) -> Result<Vec<GlyphRole>> {
    let tokens = TOKEN_SCANNER
        .find_iter(text)
        .map(|m| {
            let glyph = m.as_str();
            glyph
                .chars()
                .next()
                .and_then(lookup_glyph)
                .with_context(|| format!("Unknown glyph: {:?}", glyph))
        })
        .collect::<Result<Vec<_>>>()?;

    ensure!(!tokens.is_empty(), "No numeral glyph in {:?}", text);

    Ok(tokens)
}
