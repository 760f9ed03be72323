use std::io;

use colored::*;
use skyhaul_core::report::{ReportSink, trip_header, trip_line};

use crate::terminal::{colors, print};

/// Colored, interactive counterpart of the persisted listing.
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn drone(&mut self, name: &str) -> io::Result<()> {
        print::print(&format!("{}", name.color(colors::DRONE).bold()));
        Ok(())
    }

    fn trip(&mut self, index: usize, names: &[&str]) -> io::Result<()> {
        print::print(&format!("{}", trip_header(index).color(colors::TRIP)));
        print::print(&format!("{}", trip_line(names).color(colors::LOCATIONS)));
        Ok(())
    }
}
