// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::path::{Path, PathBuf};

use calparse_ical::{ErrorCode, Validate, parse_file};
use clap::{ArgMatches, Command, ValueHint, arg, value_parser};
use colored::Colorize;

use crate::util::describe;

#[derive(Debug, Clone)]
pub struct CmdValidate {
    pub files: Vec<PathBuf>,
}

impl CmdValidate {
    pub const NAME: &str = "validate";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("check")
            .about("Parse calendar files and check their structure")
            .arg(
                arg!(files: <FILE> ... "Paths to the .ics files")
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let files = matches
            .get_many::<PathBuf>("files")
            .map(|files| files.cloned().collect())
            .unwrap_or_default();
        Self { files }
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(files = self.files.len(), "validating calendars...");
        let mut failed = 0;
        for file in &self.files {
            let code = check(file);
            let outcome = describe(code);
            if code.is_ok() {
                println!("{}: {}", file.display(), outcome.green());
            } else {
                failed += 1;
                println!("{}: {}", file.display(), outcome.red());
            }
        }

        match failed {
            0 => Ok(()),
            1 => Err("1 file failed validation".into()),
            n => Err(format!("{n} files failed validation").into()),
        }
    }
}

/// Parse a file and validate the result, reporting the first problem found.
fn check(file: &Path) -> ErrorCode {
    let code = ErrorCode::from(parse_file(file).and_then(|calendar| calendar.validate()));
    tracing::debug!(file = %file.display(), code = code.name(), "checked");
    code
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const VALID: &str = "\
BEGIN:VCALENDAR\r
VERSION:2.0\r
PRODID:calparse\r
BEGIN:VEVENT\r
UID:evt-1\r
DTSTAMP:20171029T101010Z\r
END:VEVENT\r
END:VCALENDAR\r
";

    #[test]
    fn parses_many_files() {
        let cmd = Command::new("test").subcommand(CmdValidate::command());
        let matches = cmd
            .try_get_matches_from(["test", "validate", "a.ics", "b.ics"])
            .unwrap();
        let sub_matches = matches.subcommand_matches(CmdValidate::NAME).unwrap();
        let parsed = CmdValidate::from(sub_matches);
        assert_eq!(
            parsed.files,
            vec![PathBuf::from("a.ics"), PathBuf::from("b.ics")]
        );
    }

    #[test]
    fn requires_at_least_one_file() {
        let cmd = Command::new("test").subcommand(CmdValidate::command());
        assert!(cmd.try_get_matches_from(["test", "validate"]).is_err());
    }

    #[test]
    fn reports_first_problem_per_file() {
        let temp_dir = TempDir::new().unwrap();
        let valid = temp_dir.path().join("valid.ics");
        fs::write(&valid, VALID).unwrap();
        let bad_stamp = temp_dir.path().join("bad_stamp.ics");
        fs::write(&bad_stamp, VALID.replace("20171029T", "2017102T")).unwrap();
        let wrong_name = temp_dir.path().join("valid.txt");
        fs::write(&wrong_name, VALID).unwrap();

        assert_eq!(check(&valid), ErrorCode::Ok);
        assert_eq!(check(&bad_stamp), ErrorCode::InvalidCreationDateTime);
        assert_eq!(check(&wrong_name), ErrorCode::InvalidFile);
        assert_eq!(check(&temp_dir.path().join("missing.ics")), ErrorCode::InvalidFile);
    }

    #[test]
    fn fails_when_any_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let valid = temp_dir.path().join("valid.ics");
        fs::write(&valid, VALID).unwrap();

        let cmd = CmdValidate {
            files: vec![valid.clone()],
        };
        assert!(cmd.run().is_ok());

        let cmd = CmdValidate {
            files: vec![valid, temp_dir.path().join("missing.ics")],
        };
        let err = cmd.run().unwrap_err();
        assert_eq!(err.to_string(), "1 file failed validation");
    }
}
