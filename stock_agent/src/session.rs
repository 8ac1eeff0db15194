//! Interactive read-answer loop.
//!
//! Reads one request per line until `exit`/`quit` (any case) or end of input. Blank lines
//! are skipped. A line that is not valid UTF-8 is reported as `An error occurred: ...` and
//! the session goes on; any other read failure ends the session with that error.
use std::io::{BufRead, ErrorKind, Write};

use log::{error, info};
use stock_common::Result;

use crate::agent::StockAgent;

const EXIT_WORDS: [&str; 2] = ["exit", "quit"];

/// Run the loop over `input`, writing prompts and answers to `output`.
pub fn run<R: BufRead, W: Write>(
    agent: &StockAgent<'_>,
    mut input: R,
    output: &mut W,
) -> Result<()> {
    writeln!(output, "--- Stock Agent ---")?;
    writeln!(
        output,
        "Enter a query like 'quote MSFT' or 'TSLA past 5 days'. (Type 'exit' to quit)"
    )?;

    let mut line = String::new();
    loop {
        write!(output, "\nUser: ")?;
        output.flush()?;

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            // The undecodable line has been consumed, so the next read makes progress.
            Err(e) if e.kind() == ErrorKind::InvalidData => {
                error!("Failed to read request: {}", e);
                writeln!(output, "An error occurred: {}", e)?;
                continue;
            }
            Err(e) => {
                error!("Input closed with error: {}", e);
                writeln!(output, "An error occurred: {}", e)?;
                return Err(e.into());
            }
        }

        let request = line.trim();
        if is_exit(request) {
            break;
        }
        if request.is_empty() {
            continue;
        }

        let response = agent.handle_request(request);
        writeln!(output, "Agent:\n{}", response)?;
    }

    info!("Session ended");
    Ok(())
}

fn is_exit(request: &str) -> bool {
    EXIT_WORDS.iter().any(|word| request.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};
    use std::sync::Arc;

    use stock_common::{AppError, Bar, Interval, Period, ProviderError};
    use stock_server::{MarketDataProvider, StockServer};

    struct NoData;

    impl MarketDataProvider for NoData {
        fn fetch(&self, _: &str, _: Period, _: Interval) -> Result<Vec<Bar>, ProviderError> {
            Ok(Vec::new())
        }
    }

    /// Reader whose every read fails, like a terminal that went away.
    struct BrokenInput;

    impl Read for BrokenInput {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("EIO"))
        }
    }

    #[test]
    fn persistent_read_error_ends_session() {
        let server = StockServer::new(Arc::new(NoData));
        let agent = StockAgent::new(&server);
        let mut output = Vec::new();

        let result = run(&agent, BufReader::new(BrokenInput), &mut output);

        assert!(matches!(result, Err(AppError::Io(ref e)) if e.to_string() == "EIO"));
        let text = String::from_utf8(output).unwrap();
        assert_eq!(text.matches("An error occurred: EIO").count(), 1);
    }

    #[test]
    fn exit_words_ignore_case() {
        assert!(is_exit("exit"));
        assert!(is_exit("QUIT"));
        assert!(!is_exit("exit now"));
    }
}
