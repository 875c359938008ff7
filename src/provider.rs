/// A destination for human readable diagnostics.
///
/// The default run routes every record to the system log, `--check` and `--dry`
/// print them to the terminal. Any `Fn(&str)` is a sink as well, which keeps
/// the domain code free of a concrete logger.
pub(crate) trait LogSink {
    fn record(&self, message: &str);
}

impl<F> LogSink for F
where
    F: Fn(&str),
{
    fn record(&self, message: &str) {
        self(message)
    }
}
