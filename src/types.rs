use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_COMMON_YEAR, DAYS_IN_LEAP_YEAR, DAYS_IN_MONTH, FEBRUARY,
    FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE, MAX_MONTH,
};

// Calendar helpers

/// Gregorian leap-year rule: a century is leap only on a 400-year boundary,
/// any other year is leap when divisible by 4.
pub const fn is_leap_year(year: u16) -> bool {
    if year % CENTURY_CYCLE == 0 {
        year % GREGORIAN_CYCLE == 0
    } else {
        year % LEAP_YEAR_CYCLE == 0
    }
}

/// Number of days in `year`: 366 for leap years, 365 otherwise.
pub const fn days_in_year(year: u16) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// 1-based ordinal of the date within its year.
///
/// Sums the common-year lengths of every month before `month`, adds `day`,
/// then adds the leap day once February is behind us. Months past December
/// sum the whole table and month 0 sums nothing, so unchecked input never
/// indexes out of bounds.
pub fn day_of_year(year: u16, month: u8, day: u8) -> u16 {
    let preceding: u16 = DAYS_IN_MONTH
        .iter()
        .skip(1)
        .take(usize::from(month.saturating_sub(1)))
        .map(|&days| u16::from(days))
        .sum();

    let mut ordinal = preceding + u16::from(day);
    if is_leap_year(year) && month > FEBRUARY {
        ordinal += 1;
    }
    ordinal
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1984,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        1983,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        1600,
                is_leap:     true,
                description: "divisible by 400",
            },
            TestCase {
                year:        0,
                is_leap:     true,
                description: "year zero is a 400-year boundary",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_days_in_year() {
        assert_eq!(days_in_year(1983), 365);
        assert_eq!(days_in_year(1984), 366);
        assert_eq!(days_in_year(1900), 365);
        assert_eq!(days_in_year(2000), 366);
    }

    #[test]
    fn test_days_in_month_february() {
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(1900, 2), 28, "Century year not divisible by 400");
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29, "Century year divisible by 400");
    }

    #[test]
    fn test_days_in_month_sums_to_year_length() {
        for year in [1900, 1983, 1984, 2000] {
            let total: u16 = (1..=12).map(|m| u16::from(days_in_month(year, m))).sum();
            assert_eq!(total, days_in_year(year), "Year {year}");
        }
    }

    #[test]
    fn test_day_of_year_common_year() {
        assert_eq!(day_of_year(1983, 1, 1), 1);
        assert_eq!(day_of_year(1983, 2, 28), 59);
        assert_eq!(day_of_year(1983, 3, 1), 60);
        assert_eq!(day_of_year(1983, 6, 2), 153);
        assert_eq!(day_of_year(1983, 12, 31), 365);
    }

    #[test]
    fn test_day_of_year_leap_year() {
        assert_eq!(day_of_year(2000, 2, 28), 59);
        // Leap day itself is not patched, it is simply day 29 of February
        assert_eq!(day_of_year(2000, 2, 29), 60);
        assert_eq!(day_of_year(2000, 3, 1), 61);
        assert_eq!(day_of_year(1984, 7, 4), 186);
        assert_eq!(day_of_year(2000, 12, 31), 366);
    }

    #[test]
    fn test_day_of_year_unchecked_components() {
        // Month 0 contributes no preceding months
        assert_eq!(day_of_year(1983, 0, 5), 5);
        // Months beyond December sum the whole table
        assert_eq!(day_of_year(1983, 13, 1), 366);
        assert_eq!(day_of_year(1983, 99, 99), 464);
        assert_eq!(day_of_year(1984, 99, 99), 465);
        // Day 31 in April overlaps 1 May
        assert_eq!(day_of_year(1983, 4, 31), day_of_year(1983, 5, 1));
    }
}
