pub struct Config {
    /// Name of the stops table inside a zip archive.
    pub stops_file_name: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            stops_file_name: "stops.csv".into(),
        }
    }
}
