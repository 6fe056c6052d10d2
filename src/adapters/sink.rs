use crate::core::{Calculation, ResultSink};
use crate::utils::logger::LOGGER_NAME;
use std::io::Write;

/// Emits `"<Operation> result: <value>"` as an INFO event under the fixed logger name.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl ResultSink for TracingSink {
    fn report(&mut self, calculation: &Calculation) {
        tracing::info!(
            target: LOGGER_NAME,
            "{} result: {}",
            calculation.operation.display_name(),
            calculation.result
        );
    }
}

/// Writes one result line per calculation to any writer (stdout in the binary).
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> ResultSink for WriterSink<W> {
    fn report(&mut self, calculation: &Calculation) {
        // Write failures are logged, never propagated to the calculation.
        if let Err(e) = writeln!(self.writer, "{}", calculation) {
            tracing::warn!("Failed to write result line: {}", e);
        }
    }
}

/// Collects every calculation in memory.
#[derive(Debug, Default, Clone)]
pub struct MemorySink {
    calculations: Vec<Calculation>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calculations(&self) -> &[Calculation] {
        &self.calculations
    }

    pub fn lines(&self) -> Vec<String> {
        self.calculations.iter().map(ToString::to_string).collect()
    }
}

impl ResultSink for MemorySink {
    fn report(&mut self, calculation: &Calculation) {
        self.calculations.push(*calculation);
    }
}

/// Fans every report out to both sinks, first `A` then `B`.
impl<A: ResultSink, B: ResultSink> ResultSink for (A, B) {
    fn report(&mut self, calculation: &Calculation) {
        self.0.report(calculation);
        self.1.report(calculation);
    }
}

impl<S: ResultSink + ?Sized> ResultSink for &mut S {
    fn report(&mut self, calculation: &Calculation) {
        (**self).report(calculation);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ComplexNumber, OperationKind};
    use std::sync::{Arc, Mutex};

    fn sample() -> Calculation {
        Calculation {
            operation: OperationKind::Multiply,
            lhs: ComplexNumber::new(1.0, 2.0),
            rhs: ComplexNumber::new(3.0, 4.0),
            result: ComplexNumber::new(-5.0, 10.0),
        }
    }

    #[test]
    fn test_writer_sink_writes_result_line() {
        let mut sink = WriterSink::new(Vec::new());
        sink.report(&sample());

        let out = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(out, "Multiplication result: -5 + 10i\n");
    }

    #[test]
    fn test_pair_sink_reports_to_both() {
        let mut pair = (MemorySink::new(), MemorySink::new());
        pair.report(&sample());

        assert_eq!(pair.0.calculations().len(), 1);
        assert_eq!(pair.1.lines(), vec!["Multiplication result: -5 + 10i"]);
    }

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_tracing_sink_emits_info_event_under_logger_name() {
        let buffer = SharedBuffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .with_target(true)
            .with_max_level(tracing::Level::TRACE)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            TracingSink.report(&sample());
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        let line = output.trim();
        assert!(line.starts_with("INFO"), "unexpected line: {line}");
        assert!(
            line.ends_with("ComplexCalculator: Multiplication result: -5 + 10i"),
            "unexpected line: {line}"
        );
        assert_eq!(output.lines().count(), 1);
    }
}
