/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{GeneratorError, Request};

/**
 * Writes scenario lines to the output file and echoes them as progress.
 *
 * The file and the echo are independent sinks. A failing echo is only logged,
 * and a failing file write is still echoed before the error is returned.
 *
 * # Fields
 * - `sink`:    Append-only destination of the scenario, one line per request.
 * - `echo`:    Optional progress output receiving the same lines.
 * - `path`:    Name of the sink, used in error reports.
 * - `lines`:   Number of lines written to the sink so far.
 */
pub struct Emitter<W: Write, E: Write> {
    sink: W,
    echo: Option<E>,
    path: PathBuf,
    lines: u32,
}

/// Renders a request as a scenario line, newline included.
pub fn format_line(request: &Request) -> String {
    format!("{}\n", request)
}

impl<E: Write> Emitter<BufWriter<File>, E> {
    /// Creates (or truncates) the scenario file at `path`.
    pub fn create(path: &Path, echo: Option<E>) -> Result<Self, GeneratorError> {
        let file = File::create(path).map_err(|source| GeneratorError::Sink {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Emitter::new(BufWriter::new(file), echo, path))
    }
}

impl<W: Write, E: Write> Emitter<W, E> {
    pub fn new(sink: W, echo: Option<E>, path: &Path) -> Emitter<W, E> {
        Emitter {
            sink,
            echo,
            path: path.to_path_buf(),
            lines: 0,
        }
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn emit(&mut self, request: &Request) -> Result<(), GeneratorError> {
        let line = format_line(request);

        let written = self.sink.write_all(line.as_bytes());

        if let Some(echo) = self.echo.as_mut() {
            if let Err(e) = echo.write_all(line.as_bytes()).and_then(|_| echo.flush()) {
                warn!("Failed to echo progress: {}", e);
            }
        }

        written.map_err(|source| self.sink_error(source))?;
        self.lines += 1;
        Ok(())
    }

    /// Flushes the sink and hands it back.
    pub fn finish(mut self) -> Result<W, GeneratorError> {
        if let Err(source) = self.sink.flush() {
            return Err(self.sink_error(source));
        }
        Ok(self.sink)
    }

    fn sink_error(&self, source: io::Error) -> GeneratorError {
        GeneratorError::Sink {
            path: self.path.clone(),
            source,
        }
    }
}
