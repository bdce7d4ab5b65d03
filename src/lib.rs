pub mod annotation;
pub mod chinese_number;
pub mod utility;
