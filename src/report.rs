use crate::constants::report;
use crate::prober::ProbeResult;

use std::io::{self, Write};

/// Writes the plaintext support report.
///
/// Output is exactly `2 + N` lines for `N` results: a fixed banner, a
/// separator, then one `"<url>: <Supported|Not Supported>"` line per result
/// in the order the results were produced.
#[derive(Default)]
pub struct Reporter;

impl Reporter {
    pub fn write_report<W: Write>(
        &self,
        results: &[ProbeResult],
        writer: &mut W,
    ) -> io::Result<()> {
        writeln!(writer, "{}", report::HEADER)?;
        writeln!(writer, "{}", report::SEPARATOR)?;

        for result in results {
            writeln!(writer, "{result}")?;
        }

        Ok(())
    }

    pub fn print_report(&self, results: &[ProbeResult]) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_report(results, &mut lock)
    }
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use crate::prober::ProbeResult;

    fn render(results: &[ProbeResult]) -> String {
        let mut buffer = Vec::new();
        Reporter
            .write_report(results, &mut buffer)
            .expect("write to Vec cannot fail");
        String::from_utf8(buffer).expect("report is valid UTF-8")
    }

    #[test]
    fn test_report__renders_results_in_order() {
        let results = vec![
            ProbeResult::supported("https://a.test/".to_string()),
            ProbeResult::not_supported("https://b.test/".to_string()),
        ];

        let expected = "HTTP/3 Support Report:\n\
                        -----------------------\n\
                        https://a.test/: Supported\n\
                        https://b.test/: Not Supported\n";

        assert_eq!(render(&results), expected);
    }

    #[test]
    fn test_report__when_empty__only_header_lines() {
        let expected = "HTTP/3 Support Report:\n-----------------------\n";

        assert_eq!(render(&[]), expected);
    }

    #[test]
    fn test_report__check_failed_renders_as_not_supported() {
        let results = vec![ProbeResult::check_failed(
            "https://unreachable.invalid/".to_string(),
            "connection refused".to_string(),
        )];

        let output = render(&results);

        assert!(output.ends_with("https://unreachable.invalid/: Not Supported\n"));
        // The failure reason never leaks into the report
        assert!(!output.contains("connection refused"));
    }

    #[test]
    fn test_report__line_count_is_two_plus_n() {
        let results: Vec<ProbeResult> = (0..5)
            .map(|i| ProbeResult::supported(format!("https://site{i}.test/")))
            .collect();

        let output = render(&results);

        assert_eq!(output.lines().count(), 2 + results.len());
    }
}
