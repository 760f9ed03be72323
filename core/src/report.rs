//! # Trip Report
//!
//! Walks the planned fleet once and hands every record to any number of
//! [`ReportSink`]s, so the console and the persisted listing are produced
//! from the same pass. Styling belongs to the sink; the records are plain.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use skyhaul_common::models::Drone;

/// Separator between location names on a trip line.
pub const TRIP_DELIMITER: &str = ",";

/// Receives report records in drone order, then trip order.
pub trait ReportSink {
    /// Starts the block for a drone.
    fn drone(&mut self, name: &str) -> io::Result<()>;

    /// One trip of the current drone. `index` starts at 1.
    fn trip(&mut self, index: usize, names: &[&str]) -> io::Result<()>;

    /// Called once after the last drone.
    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn trip_header(index: usize) -> String {
    format!("Trip #{index}")
}

pub fn trip_line(names: &[&str]) -> String {
    names.join(TRIP_DELIMITER)
}

/// Emits the report for `drones` to every sink in `sinks`.
///
/// Stops at the first sink error.
pub fn render(drones: &[Drone], sinks: &mut [&mut dyn ReportSink]) -> io::Result<()> {
    for drone in drones {
        for sink in sinks.iter_mut() {
            sink.drone(drone.name())?;
        }

        for (idx, trip) in drone.trips().iter().enumerate() {
            let names = trip.names();
            for sink in sinks.iter_mut() {
                sink.trip(idx + 1, &names)?;
            }
        }
    }

    for sink in sinks.iter_mut() {
        sink.finish()?;
    }
    Ok(())
}

/// Renders the plain listing into a `String`.
pub fn render_to_string(drones: &[Drone]) -> String {
    let mut sink = WriterSink::new(Vec::new());
    render(drones, &mut [&mut sink as &mut dyn ReportSink])
        .expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&sink.into_inner()).into_owned()
}

/// Plain-text sink: the format persisted to disk.
///
/// ```text
/// DroneA
/// Trip #1
/// LocationA,LocationB
/// ```
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

impl WriterSink<BufWriter<File>> {
    /// Creates (or truncates) the listing at `path`.
    pub fn create(path: &Path) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> ReportSink for WriterSink<W> {
    fn drone(&mut self, name: &str) -> io::Result<()> {
        writeln!(self.writer, "{name}")
    }

    fn trip(&mut self, index: usize, names: &[&str]) -> io::Result<()> {
        writeln!(self.writer, "{}", trip_header(index))?;
        writeln!(self.writer, "{}", trip_line(names))
    }

    fn finish(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
