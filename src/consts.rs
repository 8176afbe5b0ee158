/// Maximum valid month (December), used by strict validation
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Days in each month of a common year (index 0 is unused, months are 1-indexed).
/// February is always 28 here; the leap day is patched in afterwards.
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Length of a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Length of a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator in `DD-MM-YYYY`
pub const DATE_SEPARATOR: char = '-';
/// Separator used when displaying a span
pub const SPAN_SEPARATOR: char = '/';

/// Digit widths of the `DD-MM-YYYY` groups
pub(crate) const DAY_DIGITS: usize = 2;
pub(crate) const MONTH_DIGITS: usize = 2;
pub(crate) const YEAR_DIGITS: usize = 4;

/// Length of the matched `DD-MM-YYYY` prefix
pub const DATE_TEXT_LEN: usize = DAY_DIGITS + 1 + MONTH_DIGITS + 1 + YEAR_DIGITS;
