//! Meeting-time parsing
//!
//! A meeting is written as `"<days> <start>-<end>"`, for example
//! `"MWF 9:00-9:50"` or `"TuTh 14:00-15:20"`. Days are a run of the tokens
//! `M`, `Tu`, `W`, `Th`, `F`, `Sa`, `Su` with no separators and times are
//! 24-hour `H:MM` or `HH:MM`.
//!
//! Parsing is lenient: anything that cannot be read as a meeting yields
//! `None`, which callers treat as "no fixed meeting time".

use std::collections::BTreeSet;
use std::fmt;

/// A weekday token as it appears in meeting strings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    /// Token match order: two-letter tokens come first so `TuTh` never
    /// splits into stray single letters
    const TOKEN_ORDER: [Day; 7] = [
        Day::Tuesday,
        Day::Thursday,
        Day::Saturday,
        Day::Sunday,
        Day::Monday,
        Day::Wednesday,
        Day::Friday,
    ];

    /// The token used for this day in meeting strings
    pub fn token(&self) -> &'static str {
        match self {
            Day::Monday => "M",
            Day::Tuesday => "Tu",
            Day::Wednesday => "W",
            Day::Thursday => "Th",
            Day::Friday => "F",
            Day::Saturday => "Sa",
            Day::Sunday => "Su",
        }
    }

    /// Match a day token at the start of `s`, returning the day and the
    /// number of bytes consumed
    pub(crate) fn match_prefix(s: &str) -> Option<(Day, usize)> {
        Self::TOKEN_ORDER
            .iter()
            .find(|day| s.starts_with(day.token()))
            .map(|day| (*day, day.token().len()))
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.token())
    }
}

/// The set of days a course meets on
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DaySet(BTreeSet<Day>);

impl DaySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, day: Day) -> bool {
        self.0.insert(day)
    }

    pub fn contains(&self, day: &Day) -> bool {
        self.0.contains(day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate days in calendar order
    pub fn iter(&self) -> impl Iterator<Item = &Day> {
        self.0.iter()
    }
}

impl FromIterator<Day> for DaySet {
    fn from_iter<I: IntoIterator<Item = Day>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for DaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for day in &self.0 {
            write!(f, "{}", day)?;
        }
        Ok(())
    }
}

/// A weekly recurring meeting
///
/// `start` and `end` are minutes since midnight and always satisfy
/// `start < end`. The time range is half-open: `[start, end)`.
/// Meetings are only built by [`parse_meeting`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Meeting {
    days: DaySet,
    start: u16,
    end: u16,
}

impl Meeting {
    /// Build a meeting, refusing ranges that do not start before they end
    pub(crate) fn new(days: DaySet, start: u16, end: u16) -> Option<Self> {
        (start < end).then_some(Self { days, start, end })
    }

    /// Days the meeting occurs on (may be empty)
    pub fn days(&self) -> &DaySet {
        &self.days
    }

    /// Start time in minutes since midnight
    pub fn start(&self) -> u16 {
        self.start
    }

    /// End time in minutes since midnight
    pub fn end(&self) -> u16 {
        self.end
    }

    /// Length of one occurrence in minutes
    pub fn duration(&self) -> u16 {
        self.end - self.start
    }
}

/// Prints the canonical `"MWF 9:00-9:50"` form
///
/// An empty day set prints only the time range. That output is for display
/// and does not parse back into a meeting.
impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.days.is_empty() {
            write!(f, "{} ", self.days)?;
        }
        write!(f, "{}-{}", format_hhmm(self.start), format_hhmm(self.end))
    }
}

/// Parse a meeting string such as `"MWF 9:00-9:50"`
///
/// Returns `None` for empty or whitespace-only input, for input missing
/// either the day run or the time range, for malformed times, and for
/// ranges whose start is not strictly before the end.
pub fn parse_meeting(text: &str) -> Option<Meeting> {
    let mut parts = text.split_whitespace();
    let day_str = parts.next()?;
    let time_str = parts.next()?;

    let days = parse_days(day_str);

    let mut range = time_str.split('-');
    let start_str = range.next().filter(|s| !s.is_empty())?;
    let end_str = range.next().filter(|s| !s.is_empty())?;

    let start = parse_hhmm(start_str)?;
    let end = parse_hhmm(end_str)?;

    Meeting::new(days, start, end)
}

/// Turn a day run like `"MWF"` or `"TuTh"` into a set of days
///
/// Characters that do not start a day token are skipped.
pub fn parse_days(day_str: &str) -> DaySet {
    let mut days = DaySet::new();
    let mut rest = day_str;

    while let Some(c) = rest.chars().next() {
        match Day::match_prefix(rest) {
            Some((day, len)) => {
                days.insert(day);
                rest = &rest[len..];
            }
            None => rest = &rest[c.len_utf8()..],
        }
    }

    days
}

/// Parse `H:MM` or `HH:MM` into minutes since midnight
///
/// Hours must be in `0..=23` and minutes in `0..=59`, with exactly two
/// minute digits.
pub fn parse_hhmm(hhmm: &str) -> Option<u16> {
    let (hours, minutes) = hhmm.split_once(':')?;

    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let h: u16 = hours.parse().ok()?;
    let m: u16 = minutes.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }

    Some(h * 60 + m)
}

/// Format minutes since midnight as `H:MM`
pub fn format_hhmm(minutes: u16) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}
