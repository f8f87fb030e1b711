//! Meets command - show how meeting strings are interpreted

use clap::Args;
use courseplan_core::schedule::format_hhmm;
use courseplan_core::validate::validate_meets;
use courseplan_core::{parse_meeting, Meeting};

/// Parse meeting-time strings such as "MWF 9:00-9:50"
#[derive(Args, Debug)]
pub struct MeetsArgs {
    /// Meeting strings to parse (quote each one)
    #[arg(required = true)]
    pub texts: Vec<String>,

    /// Also apply the strict rules used when editing courses
    #[arg(long)]
    pub strict: bool,
}

impl MeetsArgs {
    /// Execute the meets command
    pub fn execute(&self) -> anyhow::Result<()> {
        for text in &self.texts {
            println!("{:?}", text);
            match parse_meeting(text) {
                Some(meeting) => println!("  {}", describe_meeting(&meeting)),
                None => println!("  no fixed meeting (never conflicts)"),
            }

            if self.strict {
                match validate_meets(text) {
                    Ok(()) => println!("  strict: ok"),
                    Err(e) => println!("  strict: {}", e.message),
                }
            }
        }

        Ok(())
    }
}

/// Human-readable breakdown of a parsed meeting
pub fn describe_meeting(meeting: &Meeting) -> String {
    let days = if meeting.days().is_empty() {
        "no recognised days".to_string()
    } else {
        meeting
            .days()
            .iter()
            .map(|d| d.token())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "days: {}; time: {}-{} ({} min)",
        days,
        format_hhmm(meeting.start()),
        format_hhmm(meeting.end()),
        meeting.duration()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_meeting() {
        let meeting = parse_meeting("TuTh 14:00-15:20").unwrap();
        assert_eq!(
            describe_meeting(&meeting),
            "days: Tu, Th; time: 14:00-15:20 (80 min)"
        );
    }

    #[test]
    fn test_describe_meeting_without_days() {
        let meeting = parse_meeting("X 9:00-9:50").unwrap();
        assert_eq!(
            describe_meeting(&meeting),
            "days: no recognised days; time: 9:00-9:50 (50 min)"
        );
    }
}
