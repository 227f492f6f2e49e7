//! Digital-root reduction with master-number preservation.
//!
//! Every calculator funnels its raw sum through [`reduce_to_single_digit`].
//! The master numbers 11, 22 and 33 are checked on the original input and
//! again after every digit-sum pass, so 29 stops at 11 instead of reaching 2.

/// The three master numbers, exempt from further reduction.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Returns true iff `n` is 11, 22 or 33.
pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

/// Sum of the decimal digits of `n`.
pub fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to a single digit, stopping early on a master number.
///
/// `0` stays `0`; every other result lies in `1..=9` or is a master number.
pub fn reduce_to_single_digit(n: u32) -> u32 {
    let mut current = n;
    while current > 9 && !is_master_number(current) {
        current = digit_sum(current);
    }
    current
}

/// Birthday number for a day of month. Days outside `1..=31` yield 0.
pub fn birthday_number(day: u32) -> u32 {
    if (1..=31).contains(&day) {
        reduce_to_single_digit(day)
    } else {
        0
    }
}

/// `|a - b|` on unsigned operands.
pub fn absolute_difference(a: u32, b: u32) -> u32 {
    a.abs_diff(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_digits_are_fixed_points() {
        for n in 0..=9 {
            assert_eq!(reduce_to_single_digit(n), n);
        }
    }

    #[test]
    fn master_numbers_are_not_reduced() {
        assert_eq!(reduce_to_single_digit(11), 11);
        assert_eq!(reduce_to_single_digit(22), 22);
        assert_eq!(reduce_to_single_digit(33), 33);
    }

    #[test]
    fn master_number_reached_mid_reduction_stops() {
        assert_eq!(reduce_to_single_digit(29), 11);
        assert_eq!(reduce_to_single_digit(38), 11);
        assert_eq!(reduce_to_single_digit(47), 11);
        // 499 -> 22
        assert_eq!(reduce_to_single_digit(499), 22);
        // 3999 -> 30 -> 3, never passes through 33
        assert_eq!(reduce_to_single_digit(3999), 3);
    }

    #[test]
    fn non_master_two_digit_sums_keep_reducing() {
        assert_eq!(reduce_to_single_digit(67), 4);
        assert_eq!(reduce_to_single_digit(30), 3);
        assert_eq!(reduce_to_single_digit(100), 1);
        assert_eq!(reduce_to_single_digit(44), 8);
    }

    #[test]
    fn multi_pass_reduction() {
        // 9999 -> 36 -> 9
        assert_eq!(reduce_to_single_digit(9999), 9);
        // 1993 -> 22
        assert_eq!(reduce_to_single_digit(1993), 22);
    }

    #[test]
    fn birthday_number_bounds() {
        assert_eq!(birthday_number(0), 0);
        assert_eq!(birthday_number(32), 0);
        assert_eq!(birthday_number(1), 1);
        assert_eq!(birthday_number(22), 22);
        assert_eq!(birthday_number(29), 11);
        assert_eq!(birthday_number(31), 4);
    }

    #[test]
    fn absolute_difference_is_symmetric() {
        assert_eq!(absolute_difference(5, 1990), 1985);
        assert_eq!(absolute_difference(1990, 5), 1985);
        assert_eq!(absolute_difference(7, 7), 0);
    }

    #[test]
    fn master_number_set() {
        assert!(is_master_number(11));
        assert!(is_master_number(33));
        assert!(!is_master_number(44));
        assert!(!is_master_number(0));
    }
}
