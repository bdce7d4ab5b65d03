const SIGNIFICANT_DIGITS: usize = 10;

// value = digits × 10^exponent
#[derive(Debug, PartialEq)]
struct DecimalDigits {
    negative: bool,
    digits: Vec<u8>,
    exponent: i32,
}

impl DecimalDigits {
    // f64 の最短表現から作る
    fn of(value: f64) -> Self {
        let repr = format!("{}", value.abs());
        let (int_part, frac_part) = repr.split_once('.').unwrap_or((&repr, ""));

        let mut digits: Vec<u8> = int_part
            .bytes()
            .chain(frac_part.bytes())
            .skip_while(|&b| b == b'0')
            .collect();
        if digits.is_empty() {
            digits.push(b'0');
        }

        Self {
            negative: value < 0.0,
            digits,
            exponent: -(frac_part.len() as i32),
        }
    }

    // 偶数丸め，丸めで生じた末尾の 0 は残す
    fn round_significant(mut self, precision: usize) -> Self {
        if self.digits.len() <= precision {
            return self;
        }

        let tail = self.digits.split_off(precision);
        self.exponent += tail.len() as i32;

        let rest_is_zero = tail[1..].iter().all(|&b| b == b'0');
        let last_is_odd = self.digits.last().map_or(false, |&b| (b - b'0') % 2 == 1);
        let round_up = tail[0] > b'5' || (tail[0] == b'5' && (!rest_is_zero || last_is_odd));

        if round_up {
            let mut carry = true;
            for b in self.digits.iter_mut().rev() {
                if *b == b'9' {
                    *b = b'0';
                } else {
                    *b += 1;
                    carry = false;
                    break;
                }
            }
            if carry {
                // 999.. → 1000..，桁数は precision に保つ
                self.digits.insert(0, b'1');
                self.digits.pop();
                self.exponent += 1;
            }
        }

        self
    }

    // 指数表記を使わない固定小数点表記
    fn to_fixed(&self) -> String {
        let digits: String = self.digits.iter().map(|&b| b as char).collect();

        if self.exponent >= 0 {
            return format!("{}{}", digits, "0".repeat(self.exponent as usize));
        }

        let point = digits.len() as i32 + self.exponent;
        if point <= 0 {
            format!("0.{}{}", "0".repeat((-point) as usize), digits)
        } else {
            let (int_part, frac_part) = digits.split_at(point as usize);
            format!("{}.{}", int_part, frac_part)
        }
    }
}

// 4 桁以下は区切らない（年や時刻を崩さないため）
fn group_thousands(int_part: &str) -> String {
    if int_part.len() <= 4 {
        return int_part.to_owned();
    }

    let head = int_part.len() % 3;
    let mut groups = Vec::new();
    if head > 0 {
        groups.push(&int_part[..head]);
    }
    for i in (head..int_part.len()).step_by(3) {
        groups.push(&int_part[i..i + 3]);
    }
    groups.join(",")
}

pub fn format_decimal(value: f64) -> String {
    let decimal = DecimalDigits::of(value).round_significant(SIGNIFICANT_DIGITS);
    let fixed = decimal.to_fixed();

    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((&fixed, "0"));
    let sign = if decimal.negative { "-" } else { "" };
    let int_part = group_thousands(int_part);

    if frac_part == "0" {
        format!("{}{}", sign, int_part)
    } else {
        format!("{}{}.{}", sign, int_part, frac_part)
    }
}
