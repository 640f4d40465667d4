//! Human-readable report lines.

use crate::estimator::ElapsedResult;
use core::fmt::Write;

/// Capacity of a formatted report line. Fits the longest elapsed-time line
/// (ten-digit seconds value) with room to spare.
pub const REPORT_LINE_CAPACITY: usize = 64;

/// A formatted report line.
pub type ReportLine = heapless::String<REPORT_LINE_CAPACITY>;

/// Line printed when the interval could not be measured.
pub const OVERFLOW_MESSAGE: &str = "Counter overflow detected";

/// ANSI sequence that clears the terminal and homes the cursor.
pub const CLEAR_SCREEN: &str = "\x1b[2J\x1b[;H";

/// Startup banner, printed after [`CLEAR_SCREEN`].
pub const BANNER: [&str; 3] = [
    "Cascaded Counter Press Timer",
    "----------------------------",
    "Counter initialization is complete. Press the user button to display time stamps.",
];

/// Trait for abstracting the text output.
///
/// Implement this for a UART, RTT channel or any other line-oriented sink.
/// Line terminators are the sink's responsibility.
pub trait ReportSink {
    /// Writes one line of text.
    fn write_line(&mut self, line: &str);
}

/// Formats an estimator result as the line shown to the operator.
pub fn format_result(result: &ElapsedResult) -> ReportLine {
    let mut line = ReportLine::new();
    match result {
        ElapsedResult::Elapsed { seconds } => {
            // Cannot overflow: the longest line is well under capacity.
            let _ = write!(
                line,
                "The time between two presses of user button = {}s",
                seconds
            );
        }
        ElapsedResult::Overflow => {
            let _ = line.push_str(OVERFLOW_MESSAGE);
        }
    }
    line
}

/// Writes the clear-screen sequence and startup banner to a sink.
pub fn write_banner<S: ReportSink>(sink: &mut S) {
    sink.write_line(CLEAR_SCREEN);
    for line in BANNER {
        sink.write_line(line);
    }
}
