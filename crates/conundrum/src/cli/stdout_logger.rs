use std::io::{self, Write};

use log::Log;

pub(crate) struct StdoutLogger;

impl Log for StdoutLogger {
    fn enabled(&self, metadata: &log::Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &log::Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let stdout = io::stdout();
        let _ = write_record(&mut stdout.lock(), record);
    }

    fn flush(&self) {
        let _ = io::stdout().flush();
    }
}

/// Write a single log line as `<level>: <message>`.
pub(crate) fn write_record<O>(out: &mut O, record: &log::Record) -> io::Result<()>
where
    O: ?Sized + Write,
{
    writeln!(out, "{}: {}", record.level(), record.args())
}
