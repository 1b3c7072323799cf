/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds and rollover
pub const MIN_DAY: u8 = 1;

/// Month number for January
pub const JANUARY: u8 = 1;
/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for December
pub const DECEMBER: u8 = 12;

/// Days in February; the leap day is always allowed
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Number of zodiac signs, one per boundary month
pub const SIGN_COUNT: usize = 12;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February is fixed at 29 days, there is no year to check against
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,                  // index 0 unused (months are 1-indexed)
    31,                 // January
    FEBRUARY_DAYS_LEAP, // February
    31,                 // March
    30,                 // April
    31,                 // May
    30,                 // June
    31,                 // July
    31,                 // August
    30,                 // September
    31,                 // October
    30,                 // November
    31,                 // December
];

/// Range separator (`MM-DD/MM-DD`)
pub const RANGE_SEPARATOR: char = '/';
