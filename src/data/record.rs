use serde::{Deserialize, Serialize};
use std::fmt;

/// One World Cup edition as loaded from the dataset.
///
/// Statistic fields keep the loader's permissive numeric coercion: a blank
/// cell is `0.0` and a non-numeric cell is NaN. Downstream stages tolerate
/// NaN instead of rejecting the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorldCupRecord {
    pub year: i32,
    pub edition: String,
    pub winner: String,
    pub teams: f64,
    pub matches: f64,
    pub goals: f64,
    pub average_goals: f64,
    pub average_attendance: f64,
}

impl WorldCupRecord {
    /// Value of the given plottable attribute for this edition.
    #[must_use]
    pub fn value_of(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Goals => self.goals,
            Attribute::Matches => self.matches,
            Attribute::Teams => self.teams,
            Attribute::AverageGoals => self.average_goals,
            Attribute::AverageAttendance => self.average_attendance,
        }
    }
}

/// Closed set of plottable dataset attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Attribute {
    Goals,
    Matches,
    Teams,
    AverageGoals,
    AverageAttendance,
}

impl Attribute {
    pub const ALL: [Attribute; 5] = [
        Attribute::Goals,
        Attribute::Matches,
        Attribute::Teams,
        Attribute::AverageGoals,
        Attribute::AverageAttendance,
    ];

    /// Dataset column name for this attribute.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::Goals => "GOALS",
            Attribute::Matches => "MATCHES",
            Attribute::Teams => "TEAMS",
            Attribute::AverageGoals => "AVERAGE_GOALS",
            Attribute::AverageAttendance => "AVERAGE_ATTENDANCE",
        }
    }

    /// Resolves a selector option name; unknown names are rejected.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Attribute> {
        Attribute::ALL
            .into_iter()
            .find(|attribute| attribute.as_str() == name)
    }
}

impl Default for Attribute {
    fn default() -> Self {
        Attribute::Goals
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Permissive numeric coercion for statistic cells.
///
/// Blank cells coerce to `0.0`, anything unparseable to NaN, so a single bad
/// cell never drops the whole record.
#[must_use]
pub fn coerce_stat(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Formats a statistic for display, keeping whole numbers free of a
/// fractional tail.
#[must_use]
pub fn format_stat(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        return format!("{}", value as i64);
    }
    format!("{value}")
}

#[cfg(test)]
mod tests {
    use super::{Attribute, WorldCupRecord, coerce_stat, format_stat};

    #[test]
    fn blank_cell_coerces_to_zero() {
        assert_eq!(coerce_stat(""), 0.0);
        assert_eq!(coerce_stat("   "), 0.0);
    }

    #[test]
    fn non_numeric_cell_coerces_to_nan() {
        assert!(coerce_stat("n/a").is_nan());
        assert!(coerce_stat("12 goals").is_nan());
    }

    #[test]
    fn numeric_cell_keeps_its_value() {
        assert_eq!(coerce_stat("171"), 171.0);
        assert_eq!(coerce_stat(" 2.78 "), 2.78);
    }

    #[test]
    fn attribute_names_round_trip() {
        for attribute in Attribute::ALL {
            assert_eq!(Attribute::from_name(attribute.as_str()), Some(attribute));
        }
        assert_eq!(Attribute::from_name("POINTS"), None);
    }

    #[test]
    fn whole_stats_display_without_fraction() {
        assert_eq!(format_stat(171.0), "171");
        assert_eq!(format_stat(2.78), "2.78");
        assert_eq!(format_stat(f64::NAN), "NaN");
    }

    #[test]
    fn value_of_selects_the_matching_field() {
        let record = WorldCupRecord {
            year: 1998,
            edition: "France 1998".to_string(),
            winner: "France".to_string(),
            teams: 32.0,
            matches: 64.0,
            goals: 171.0,
            average_goals: 2.67,
            average_attendance: 43517.0,
        };
        assert_eq!(record.value_of(Attribute::Goals), 171.0);
        assert_eq!(record.value_of(Attribute::AverageAttendance), 43517.0);
    }
}
