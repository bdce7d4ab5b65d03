pub mod decimal;
pub mod str;
