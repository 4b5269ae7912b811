//! Export helpers for CSV and JSON artifacts.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod json {
    use serde::Serialize;
    use std::io::{self, Write};

    /// Write any serializable artifact as pretty JSON followed by a newline.
    pub fn write_pretty<T: Serialize>(writer: &mut dyn Write, value: &T) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *writer, value)?;
        writeln!(writer)?;
        writer.flush()
    }
}

pub mod sweep {
    use serde::Serialize;
    use std::io::{self, Write};

    /// CSV row emitted by the impactor-mass sweep exporter.
    #[derive(Debug, Clone, Serialize)]
    pub struct Record<'a> {
        pub impactor_mass_kg: u32,
        pub spacecraft_dry_mass_kg: f64,
        pub propellant_mass_kg: f64,
        #[serde(serialize_with = "three_places")]
        pub delta_v_m_s: f64,
        pub total_prep_days: u32,
        #[serde(serialize_with = "three_places")]
        pub total_reliability: f64,
        pub total_mission_days: Option<u32>,
        pub feasible: bool,
        pub status: &'a str,
    }

    fn three_places<S: serde::Serializer>(value: &f64, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&format!("{:.3}", value))
    }

    /// Write sweep rows with a header to `writer`.
    pub fn write_records(writer: &mut dyn Write, records: &[Record<'_>]) -> io::Result<()> {
        let mut csv = csv::Writer::from_writer(writer);
        for record in records {
            csv.serialize(record).map_err(io::Error::other)?;
        }
        csv.flush()
    }
}
