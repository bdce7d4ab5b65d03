// 空白区切りのテキストから中国語の数字表現（算用数字を含む）を探し，英訳を付ける
//
// 1 行ごとに
// - pattern: トークン全体が数字表現であるものを探す
// - tokenizer: 1 文字ずつ役割を与える
// - parser: 位取りに従って数値または月日に畳み込む
// - renderer: 英語にする
//
// 既知の不具合は直さずそのままにしている：
// - 三分之二 のような分数
// - 第一 のような序数
// - 五十几，数十万，八千七百多万 のような概数
// - 三四百 のような幅のある数
// - 1997 年 のような年

pub mod finder;
pub mod parser;
pub mod pattern;
pub mod renderer;
pub mod symbol;
pub mod tokenizer;
