//! Output targets for printing resolved options.
//!

use std::fs::File;
use std::io::{Error, ErrorKind, Result, Write};

/// Where printed output goes
#[derive(Default)]
pub(crate) enum PrintTarget {
    #[default]
    Stdout,
    File(File),
    Buffer(Vec<u8>),
    Stream(Box<dyn Write + Send + Sync>),
    Sink,
}

impl PrintTarget {
    // Buffer is handled by the Vec<u8> writer and
    // Sink by io::sink, so every target is a plain Write
    fn writer(&mut self) -> Box<dyn Write + '_> {
        match self {
            PrintTarget::Stdout => Box::new(std::io::stdout().lock()),
            PrintTarget::File(file) => Box::new(file),
            PrintTarget::Buffer(buffer) => Box::new(buffer),
            PrintTarget::Stream(stream) => Box::new(stream),
            PrintTarget::Sink => Box::new(std::io::sink()),
        }
    }
}

impl std::fmt::Debug for PrintTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PrintTarget::Stdout => "Stdout",
            PrintTarget::File(_) => "File",
            PrintTarget::Buffer(_) => "Buffer",
            PrintTarget::Stream(_) => "Stream",
            PrintTarget::Sink => "Sink",
        };
        write!(f, "PrintTarget::{}", name)
    }
}

impl Write for PrintTarget {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.writer().flush()
    }
}

/// Trait implemented by types that allow configurable print targets
pub trait ConfigurablePrintTarget {
    /// redirect print output to stdout
    fn print_to_stdout(&mut self);
    /// redirect print output to a file
    fn print_to_file(&mut self, file: File);
    /// redirect print output to a stream
    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>);
    /// discard all print output
    fn print_to_sink(&mut self);
    /// redirect print output to an internal buffer
    fn print_to_buffer(&mut self);
    /// get the contents of the internal print buffer
    fn get_print_buffer(&mut self) -> Result<String>;
}

impl ConfigurablePrintTarget for PrintTarget {
    fn print_to_stdout(&mut self) {
        *self = PrintTarget::Stdout;
    }

    fn print_to_file(&mut self, file: File) {
        *self = PrintTarget::File(file);
    }

    fn print_to_stream(&mut self, stream: Box<dyn Write + Send + Sync>) {
        *self = PrintTarget::Stream(stream);
    }

    fn print_to_sink(&mut self) {
        *self = PrintTarget::Sink;
    }

    fn print_to_buffer(&mut self) {
        *self = PrintTarget::Buffer(Vec::new());
    }

    fn get_print_buffer(&mut self) -> Result<String> {
        match self {
            PrintTarget::Buffer(buffer) => Ok(String::from_utf8_lossy(buffer).to_string()),
            _ => Err(Error::new(
                ErrorKind::Other,
                "Print buffering is not configured.",
            )),
        }
    }
}

#[test]
fn test_print_target_buffer() {
    let mut target = PrintTarget::default();
    assert!(target.get_print_buffer().is_err());

    target.print_to_buffer();
    write!(target, "MSK_IPAR_OPTIMIZER").unwrap();
    writeln!(target, " = 0").unwrap();
    assert_eq!(
        target.get_print_buffer().unwrap(),
        "MSK_IPAR_OPTIMIZER = 0\n"
    );

    target.print_to_sink();
    write!(target, "dropped").unwrap();
    assert!(target.get_print_buffer().is_err());
    assert_eq!(format!("{:?}", target), "PrintTarget::Sink");
}
