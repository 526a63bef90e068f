//! Output formatting for self-tests and solver results

use crate::runner::{DayReport, PartOutcome};
use aoc_runner::{Day, FactoryInfo, SelfTestOutcome};
use chrono::TimeDelta;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn print_self_test(&self, day: Day, outcome: &SelfTestOutcome) {
        match outcome {
            SelfTestOutcome::NotImplemented => {
                println!("No self-test implemented for day {day}");
            }
            SelfTestOutcome::Passed(checks) if !self.quiet => {
                println!("Self-test passed for day {day} ({} examples)", checks.len());
            }
            SelfTestOutcome::Passed(_) => {}
        }
    }

    /// Print every part of a report; answers go to stdout, errors to stderr
    pub fn print_report(&self, report: &DayReport) {
        for outcome in &report.parts {
            match self.format_part(report, outcome) {
                Ok(line) => println!("{line}"),
                Err(line) => eprintln!("{line}"),
            }
        }
    }

    fn format_part(&self, report: &DayReport, outcome: &PartOutcome) -> Result<String, String> {
        let prefix = format!("Day {} Part {}", report.day, outcome.part);
        match &outcome.result {
            Ok(result) if self.quiet => Ok(result.answer.to_string()),
            Ok(result) => {
                Ok(format!(
                    "{}: {} (parse: {}, solve: {})",
                    prefix,
                    result.answer,
                    format_duration(report.parse_duration),
                    format_duration(result.duration())
                ))
            }
            Err(e) => Err(format!("Error running {prefix}: {e}")),
        }
    }

    /// Print one line per registered day
    pub fn print_registry(&self, infos: impl IntoIterator<Item = FactoryInfo>) {
        let mut any = false;
        for info in infos {
            any = true;
            println!("{}", format_info(&info));
        }
        if !any {
            println!("No solutions registered.");
        }
    }
}

fn format_info(info: &FactoryInfo) -> String {
    let mut line = format!("Day {}: {} part(s)", info.day, info.parts);
    if !info.tags.is_empty() {
        line.push_str(&format!(" [{}]", info.tags.join(", ")));
    }
    if !info.has_self_test {
        line.push_str(" (no self-test)");
    }
    line
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PartError;
    use aoc_runner::{SolveResult, SolverError, Timing};
    use chrono::{TimeZone, Utc};

    fn day(n: u8) -> Day {
        Day::new(n).unwrap()
    }

    fn solved(part: u8, answer: i64, micros: i64) -> SolveResult {
        let start = Utc.with_ymd_and_hms(2023, 12, 1, 5, 0, 0).unwrap();
        SolveResult {
            part,
            answer,
            timing: Timing {
                start,
                end: start + TimeDelta::microseconds(micros),
            },
        }
    }

    fn report() -> DayReport {
        DayReport {
            day: day(1),
            parse_duration: TimeDelta::microseconds(12),
            parts: vec![
                PartOutcome {
                    part: 1,
                    result: Ok(solved(1, 142, 2_500)),
                },
                PartOutcome {
                    part: 2,
                    result: Err(PartError::Panicked("boom".to_string())),
                },
            ],
        }
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(TimeDelta::microseconds(999)), "999µs");
        assert_eq!(format_duration(TimeDelta::microseconds(2_500)), "2.50ms");
        assert_eq!(format_duration(TimeDelta::seconds(3)), "3.00s");
        assert_eq!(format_duration(TimeDelta::microseconds(-5)), "-5µs");
    }

    #[test]
    fn test_format_part() {
        let report = report();
        let full = OutputFormatter::new(false);
        assert_eq!(
            full.format_part(&report, &report.parts[0]),
            Ok("Day 01 Part 1: 142 (parse: 12µs, solve: 2.50ms)".to_string())
        );
        assert_eq!(
            full.format_part(&report, &report.parts[1]),
            Err("Error running Day 01 Part 2: panicked: boom".to_string())
        );

        let quiet = OutputFormatter::new(true);
        assert_eq!(
            quiet.format_part(&report, &report.parts[0]),
            Ok("142".to_string())
        );
    }

    #[test]
    fn test_format_part_error_names_the_part() {
        let report = DayReport {
            day: day(3),
            parse_duration: TimeDelta::zero(),
            parts: vec![PartOutcome {
                part: 1,
                result: Err(SolverError::NotFound(day(3)).into()),
            }],
        };
        let line = OutputFormatter::new(true)
            .format_part(&report, &report.parts[0])
            .unwrap_err();
        assert!(line.starts_with("Error running Day 03 Part 1: "), "{line}");
    }

    #[test]
    fn test_format_info() {
        let info = FactoryInfo {
            day: day(2),
            parts: 2,
            has_self_test: true,
            tags: &["parsing", "grid"],
        };
        assert_eq!(format_info(&info), "Day 02: 2 part(s) [parsing, grid]");

        let bare = FactoryInfo {
            day: day(12),
            parts: 1,
            has_self_test: false,
            tags: &[],
        };
        assert_eq!(format_info(&bare), "Day 12: 1 part(s) (no self-test)");
    }
}
