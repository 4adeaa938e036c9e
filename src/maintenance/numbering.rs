//! Work order numbering

use std::cmp::Ordering;

/// Width of the zero-padded order number
const NUMBER_WIDTH: usize = 4;

/// Numeric part of an identifier without leading zeros ("OS-0007" -> "7"),
/// `None` without digits. Zero is the empty string.
fn numeric_value(id: &str) -> Option<String> {
    let digits: String = id.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    Some(digits.trim_start_matches('0').to_string())
}

/// Ordering of two digit strings without leading zeros, by numeric value
fn numeric_cmp(a: &str, b: &str) -> Ordering {
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Decimal increment of a digit string without leading zeros
fn increment(digits: &str) -> String {
    let mut out: Vec<u8> = digits.bytes().rev().collect();
    let mut carry = true;
    for d in out.iter_mut() {
        if !carry {
            break;
        }
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            carry = false;
        }
    }
    if carry {
        out.push(b'1');
    }
    out.into_iter().rev().map(char::from).collect()
}

/// Next order number after every existing work order and schedule task id.
///
/// Takes the largest numeric value found and returns it plus one, padded to
/// four digits.
pub fn next_order_number<I, S>(ids: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let max = ids
        .into_iter()
        .filter_map(|id| numeric_value(id.as_ref()))
        .max_by(|a, b| numeric_cmp(a, b))
        .unwrap_or_default();
    format!("{:0>width$}", increment(&max), width = NUMBER_WIDTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_after_max() {
        assert_eq!(next_order_number(["OS-0007", "OS-0003"]), "0008");
    }

    #[test]
    fn test_empty_corpus() {
        assert_eq!(next_order_number(Vec::<String>::new()), "0001");
    }

    #[test]
    fn test_ignores_ids_without_digits() {
        assert_eq!(next_order_number(["legacy", "OS-12", "task-a"]), "0013");
    }

    #[test]
    fn test_wider_than_padding() {
        assert_eq!(next_order_number(["OS-12345"]), "12346");
    }

    #[test]
    fn test_numbers_beyond_u64() {
        let ids = ["OS-99999999999999999999", "OS-0005"];
        assert_eq!(next_order_number(ids), "100000000000000000000");
        assert_eq!(next_order_number(["OS-18446744073709551616"]), "18446744073709551617");
    }

    #[test]
    fn test_leading_zeros_do_not_win() {
        assert_eq!(next_order_number(["OS-000009", "OS-10"]), "0011");
        assert_eq!(next_order_number(["OS-0000"]), "0001");
    }

    #[test]
    fn test_digits_are_concatenated() {
        // "T2-05" strips to "205"
        assert_eq!(next_order_number(["T2-05", "OS-0100"]), "0206");
    }
}
