use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::age::{self, AgeResult};
use crate::config::OutputFormat;
use crate::display;
use crate::form::DateBounds;
use crate::svg::{self, Theme};

const PROMPT: &str = "Date of Birth (YYYY-MM-DD, q to quit): ";

/// Everything a submission needs besides the birth date itself.
pub struct App {
    pub bounds: DateBounds,
    pub format: OutputFormat,
    pub svg_dir: Option<PathBuf>,
}

impl App {
    /// Computes and renders the result for one accepted birth date.
    pub fn submit<W: Write>(&self, birthdate: NaiveDate, out: &mut W) -> Result<AgeResult> {
        let today = self.bounds.today;
        let result = age::breakdown(birthdate, today);
        debug!("Computed {:?} for {} as of {}", result, birthdate, today);

        match self.format {
            OutputFormat::Text => write!(out, "{}", display::render_text(birthdate, &result))?,
            OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(&result)?)?,
        }

        if let Some(dir) = &self.svg_dir {
            self.write_svgs(dir, birthdate, &result)?;
        }

        Ok(result)
    }

    fn write_svgs(&self, dir: &Path, birthdate: NaiveDate, result: &AgeResult) -> Result<()> {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))?;

        for theme in [Theme::Dark, Theme::Light] {
            let path = dir.join(theme.file_name());
            std::fs::write(&path, svg::generate_svg(birthdate, result, theme))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!("Wrote {}", path.display());
        }

        Ok(())
    }

    /// Prompt loop: every line is a submission. Invalid input prints the
    /// validation message and leaves the last result as it was.
    pub fn run_interactive<R: BufRead, W: Write>(
        &self,
        input: R,
        out: &mut W,
    ) -> Result<Option<AgeResult>> {
        let mut current = None;
        let mut lines = input.lines();

        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let Some(line) = lines.next() else {
                writeln!(out)?;
                break;
            };
            let line = line.context("Failed to read input")?;
            let trimmed = line.trim();

            if matches!(trimmed, "q" | "quit" | "exit") {
                break;
            }

            match self.bounds.validate(Some(trimmed)) {
                Ok(birthdate) => {
                    writeln!(out)?;
                    current = Some(self.submit(birthdate, &mut *out)?);
                    writeln!(out)?;
                }
                Err(e) => {
                    debug!("Rejected input {:?}: {}", trimmed, e);
                    writeln!(out, "  {e}")?;
                }
            }
        }

        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn app(format: OutputFormat) -> App {
        App {
            bounds: DateBounds::new(1900, ymd(2024, 1, 1)),
            format,
            svg_dir: None,
        }
    }

    #[test]
    fn test_submit_json() {
        let mut out = Vec::new();
        app(OutputFormat::Json)
            .submit(ymd(2000, 6, 15), &mut out)
            .unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"years\":23,\"months\":6,\"days\":17,\"nextBirthday\":{\"months\":5,\"days\":14,\"isToday\":false}}\n"
        );
    }

    #[test]
    fn test_submit_writes_both_svg_themes() {
        let dir = tempfile::tempdir().unwrap();
        let app = App {
            svg_dir: Some(dir.path().join("cards")),
            ..app(OutputFormat::Text)
        };

        let mut out = Vec::new();
        app.submit(ymd(2000, 1, 1), &mut out).unwrap();

        let dark = std::fs::read_to_string(dir.path().join("cards/age_dark.svg")).unwrap();
        let light = std::fs::read_to_string(dir.path().join("cards/age_light.svg")).unwrap();
        assert!(dark.contains("Happy Birthday!"));
        assert!(light.contains("#ffffff"));
    }

    #[test]
    fn test_interactive_keeps_latest_result() {
        let input = Cursor::new("\n2030-01-01\nnot a date\n2000-06-15\n2000-01-01\nq\n1990-01-01\n");
        let mut out = Vec::new();

        let latest = app(OutputFormat::Text)
            .run_interactive(input, &mut out)
            .unwrap()
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("A date of birth is required."));
        assert!(text.contains("Date of birth cannot be in the future."));
        assert!(text.contains("Invalid date 'not a date'"));
        assert!(text.contains("Next Birthday\n5 Months 14 Days"));
        assert!(text.contains("Happy Birthday!"));
        // Input after "q" is never read.
        assert!(!text.contains("1990"));

        assert_eq!((latest.years, latest.months, latest.days), (24, 0, 0));
    }

    #[test]
    fn test_interactive_quit_words() {
        for word in ["q", "quit", "exit", "  exit  "] {
            let input = Cursor::new(format!("{word}\n2000-06-15\n"));
            let mut out = Vec::new();

            let latest = app(OutputFormat::Text)
                .run_interactive(input, &mut out)
                .unwrap();

            assert!(latest.is_none(), "{word:?}");
            assert_eq!(String::from_utf8(out).unwrap(), PROMPT, "{word:?}");
        }
    }

    #[test]
    fn test_interactive_eof_without_input() {
        let mut out = Vec::new();
        let latest = app(OutputFormat::Text)
            .run_interactive(Cursor::new(""), &mut out)
            .unwrap();

        assert!(latest.is_none());
        assert_eq!(String::from_utf8(out).unwrap(), format!("{PROMPT}\n"));
    }
}
