//! Fiscal period types.
//!
//! Months carry their calendar position so that report outputs sort
//! chronologically (Jan..Dez), never lexically ("Abr" before "Jan" would
//! be a correctness bug in every monthly report).

use serde::{Deserialize, Serialize};

/// A fiscal year (e.g., 2024).
pub type FiscalYear = i32;

/// Calendar month with chronological ordering.
///
/// Display labels are the three-letter Portuguese abbreviations used in
/// the source dashboard data ("Jan", "Fev", ..., "Dez").
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    /// January
    Jan,
    /// February
    Fev,
    /// March
    Mar,
    /// April
    Abr,
    /// May
    Mai,
    /// June
    Jun,
    /// July
    Jul,
    /// August
    Ago,
    /// September
    Set,
    /// October
    Out,
    /// November
    Nov,
    /// December
    Dez,
}

impl Month {
    /// All twelve months in calendar order.
    pub const ALL: [Self; 12] = [
        Self::Jan,
        Self::Fev,
        Self::Mar,
        Self::Abr,
        Self::Mai,
        Self::Jun,
        Self::Jul,
        Self::Ago,
        Self::Set,
        Self::Out,
        Self::Nov,
        Self::Dez,
    ];

    /// Returns the 1-based calendar position (Jan = 1, Dez = 12).
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8 + 1
    }

    /// Returns the month at the given 1-based calendar position.
    #[must_use]
    pub fn from_ordinal(ordinal: u8) -> Option<Self> {
        Self::ALL.get(ordinal.checked_sub(1)? as usize).copied()
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Jan => "Jan",
            Self::Fev => "Fev",
            Self::Mar => "Mar",
            Self::Abr => "Abr",
            Self::Mai => "Mai",
            Self::Jun => "Jun",
            Self::Jul => "Jul",
            Self::Ago => "Ago",
            Self::Set => "Set",
            Self::Out => "Out",
            Self::Nov => "Nov",
            Self::Dez => "Dez",
        };
        write!(f, "{label}")
    }
}

impl std::str::FromStr for Month {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jan" => Ok(Self::Jan),
            "fev" => Ok(Self::Fev),
            "mar" => Ok(Self::Mar),
            "abr" => Ok(Self::Abr),
            "mai" => Ok(Self::Mai),
            "jun" => Ok(Self::Jun),
            "jul" => Ok(Self::Jul),
            "ago" => Ok(Self::Ago),
            "set" => Ok(Self::Set),
            "out" => Ok(Self::Out),
            "nov" => Ok(Self::Nov),
            "dez" => Ok(Self::Dez),
            _ => Err(format!("Unknown month: {s}")),
        }
    }
}
