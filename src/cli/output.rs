//! Output formatting for counting reports
//!
//! Successful entries go to stdout, failures to stderr, both in input order.

use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::domain::{CountSelection, Stats};
use crate::engine::AggregateReport;

const RULE: &str = "──────────────────────────────";
const CSV_HEADER: &str = "name,letters,words,bytes,lines";

/// Output helper for consistent formatting
pub struct Output {
    format: OutputFormat,
    shown: CountSelection,
}

impl Output {
    /// `shown` limits the fields printed in text mode; json and csv always
    /// carry every field
    pub fn new(format: OutputFormat, shown: CountSelection) -> Self {
        Self { format, shown }
    }

    /// Prints a report to the process's stdout and stderr
    pub fn report(&self, report: &AggregateReport) -> io::Result<()> {
        let stdout = io::stdout();
        let stderr = io::stderr();
        self.write_report(report, &mut stdout.lock(), &mut stderr.lock())
    }

    /// Writes a report: one entry per input, then the total for several inputs
    pub fn write_report(
        &self,
        report: &AggregateReport,
        out: &mut impl Write,
        err: &mut impl Write,
    ) -> io::Result<()> {
        if self.format == OutputFormat::Csv {
            writeln!(out, "{}", CSV_HEADER)?;
        }

        for result in &report.per_file {
            match &result.error {
                None => self.write_stats(out, &result.stats, false)?,
                Some(error) => {
                    out.flush()?;
                    self.write_error(err, &result.stats.name, &error.to_string())?;
                    err.flush()?;
                }
            }
        }

        if report.has_total() {
            if self.format == OutputFormat::Text {
                writeln!(out)?;
            }
            self.write_stats(out, &report.total, true)?;
        }

        out.flush()
    }

    /// Writes one error entry
    pub fn write_error(&self, err: &mut impl Write, name: &str, message: &str) -> io::Result<()> {
        match self.format {
            OutputFormat::Json => writeln!(
                err,
                "{}",
                serde_json::json!({
                    "name": name,
                    "success": false,
                    "error": message,
                })
            ),
            OutputFormat::Text | OutputFormat::Csv => writeln!(err, "Error: {}", message),
        }
    }

    fn write_stats(&self, out: &mut impl Write, stats: &Stats, is_total: bool) -> io::Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(out, stats, is_total),
            OutputFormat::Json => {
                let json = serde_json::to_string(stats).map_err(io::Error::other)?;
                writeln!(out, "{}", json)
            }
            OutputFormat::Csv => writeln!(
                out,
                "{},{},{},{},{}",
                csv_field(&stats.name),
                stats.letters,
                stats.words,
                stats.bytes,
                stats.lines
            ),
        }
    }

    fn write_text(&self, out: &mut impl Write, stats: &Stats, is_total: bool) -> io::Result<()> {
        if is_total {
            writeln!(out, "Total:")?;
        } else {
            writeln!(out, "File:    {}", stats.name)?;
        }
        if self.shown.letters {
            writeln!(out, "Letters: {}", stats.letters)?;
        }
        if self.shown.words {
            writeln!(out, "Words:   {}", stats.words)?;
        }
        if self.shown.bytes {
            writeln!(out, "Bytes:   {}", stats.bytes)?;
        }
        if self.shown.lines {
            writeln!(out, "Lines:   {}", stats.lines)?;
        }
        writeln!(out, "{}", RULE)
    }
}

/// Quotes a CSV field when it holds a delimiter, quote or line break
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CountSelection, Counter};
    use crate::engine::Aggregator;
    use crate::input::InputSource;
    use std::fs;
    use std::io::Cursor;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn render(output: &Output, report: &AggregateReport) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        output.write_report(report, &mut out, &mut err).unwrap();
        (String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    fn stdin_report(input: &str) -> AggregateReport {
        Aggregator::new(Counter::default(), 1).run_source(InputSource::from_reader(
            "stdin",
            Cursor::new(input.as_bytes().to_vec()),
        ))
    }

    fn files_report(dir: &TempDir) -> (AggregateReport, Vec<PathBuf>) {
        let a = dir.path().join("a.txt");
        let b = dir.path().join("b.txt");
        fs::write(&a, "hello world\n").unwrap();
        fs::write(&b, "foo\n").unwrap();
        let paths = vec![a, dir.path().join("gone.txt"), b];
        let report = Aggregator::new(Counter::default(), 0).run(&paths).unwrap();
        (report, paths)
    }

    #[test]
    fn text_single_source() {
        let output = Output::new(OutputFormat::Text, CountSelection::ALL);
        let (out, err) = render(&output, &stdin_report("hello world\nfoo-bar\n"));

        let expected = format!(
            "File:    stdin\nLetters: 16\nWords:   3\nBytes:   20\nLines:   2\n{}\n",
            RULE
        );
        assert_eq!(out, expected);
        assert!(err.is_empty());
    }

    #[test]
    fn text_respects_shown_fields() {
        let output = Output::new(OutputFormat::Text, CountSelection::LINES);
        let (out, _) = render(&output, &stdin_report("a\nb\n"));

        assert_eq!(out, format!("File:    stdin\nLines:   2\n{}\n", RULE));
    }

    #[test]
    fn text_multi_file_has_total_and_errors() {
        let dir = TempDir::new().unwrap();
        let (report, _) = files_report(&dir);
        let output = Output::new(OutputFormat::Text, CountSelection::ALL);
        let (out, err) = render(&output, &report);

        assert!(out.contains("a.txt"));
        assert!(out.contains("\nTotal:\nLetters: 13\nWords:   3\nBytes:   16\nLines:   2\n"));
        assert!(err.starts_with("Error: cannot open "));
        assert!(err.contains("gone.txt"));
    }

    #[test]
    fn json_one_object_per_line() {
        let dir = TempDir::new().unwrap();
        let (report, paths) = files_report(&dir);
        let output = Output::new(OutputFormat::Json, CountSelection::LINES);
        let (out, err) = render(&output, &report);

        let objects: Vec<serde_json::Value> = out
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(objects.len(), 3);
        assert_eq!(objects[0]["name"], paths[0].to_string_lossy().as_ref());
        assert_eq!(objects[0]["words"], 2);
        assert_eq!(objects[2]["name"], "total");
        assert_eq!(objects[2]["letters"], 13);

        let error: serde_json::Value = serde_json::from_str(err.trim()).unwrap();
        assert_eq!(error["success"], false);
        assert_eq!(error["name"], paths[1].to_string_lossy().as_ref());
    }

    #[test]
    fn csv_header_then_rows() {
        let output = Output::new(OutputFormat::Csv, CountSelection::ALL);
        let (out, _) = render(&output, &stdin_report("hello world\nfoo-bar\n"));

        assert_eq!(out, "name,letters,words,bytes,lines\nstdin,16,3,20,2\n");
    }

    #[test]
    fn csv_quotes_awkward_names() {
        assert_eq!(csv_field("plain.txt"), "plain.txt");
        assert_eq!(csv_field("a,b.txt"), "\"a,b.txt\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
    }
}
