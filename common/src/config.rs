use std::path::PathBuf;

pub struct Config {
    /// Manifest to read the fleet and the delivery locations from.
    pub input: PathBuf,

    /// Where the plain-text trip listing is persisted.
    ///
    /// `None` keeps the report on the console only.
    pub output: Option<PathBuf>,

    /// Hides headers and the summary line when greater than zero.
    pub quiet: u8,

    /// Report the feasible part of the plan even when some locations
    /// cannot be carried by any drone.
    pub skip_infeasible: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("input.txt"),
            output: Some(PathBuf::from("Output.txt")),
            quiet: 0,
            skip_infeasible: false,
        }
    }
}
