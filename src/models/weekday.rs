//! Weekday enumeration.
//!
//! Days are numbered Monday=1 through Sunday=7 (ISO-8601 ordering) and
//! carry a 3-letter wire code (`MON`..`SUN`). Both mappings are pure
//! lookups on the enum — no process-wide tables.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week, Monday=1 through Sunday=7.
///
/// Serializes as its 3-letter code (`"MON"`, `"TUE"`, ...), matching the
/// public API representation of schedule slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Weekday {
    Mon = 1,
    Tue = 2,
    Wed = 3,
    Thu = 4,
    Fri = 5,
    Sat = 6,
    Sun = 7,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    /// ISO index of this day (Mon=1 .. Sun=7).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Looks up a day by ISO index (1..=7).
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index.checked_sub(1)? as usize).copied()
    }

    /// 3-letter wire code (`"MON"` .. `"SUN"`).
    pub fn code(self) -> &'static str {
        match self {
            Weekday::Mon => "MON",
            Weekday::Tue => "TUE",
            Weekday::Wed => "WED",
            Weekday::Thu => "THU",
            Weekday::Fri => "FRI",
            Weekday::Sat => "SAT",
            Weekday::Sun => "SUN",
        }
    }

    /// Looks up a day by its 3-letter wire code.
    pub fn from_code(code: &str) -> Option<Self> {
        Weekday::ALL.iter().copied().find(|d| d.code() == code)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
