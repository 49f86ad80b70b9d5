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

pub mod trace {
    use std::io::Write;

    pub const HEADER_2D: [&str; 3] = ["index", "x_km", "y_km"];
    pub const HEADER_3D: [&str; 4] = ["index", "x_km", "y_km", "z_km"];

    /// Write a planar trace. The coordinate slices must have equal length.
    pub fn write_planar<W: Write>(writer: W, x: &[f64], y: &[f64]) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(HEADER_2D)?;
        for (i, (x, y)) in x.iter().zip(y).enumerate() {
            out.write_record([i.to_string(), format!("{x:.6}"), format!("{y:.6}")])?;
        }
        out.flush()?;
        Ok(())
    }

    /// Write a trace with the out-of-plane component.
    pub fn write_spatial<W: Write>(writer: W, x: &[f64], y: &[f64], z: &[f64]) -> csv::Result<()> {
        let mut out = csv::Writer::from_writer(writer);
        out.write_record(HEADER_3D)?;
        for (i, ((x, y), z)) in x.iter().zip(y).zip(z).enumerate() {
            out.write_record([
                i.to_string(),
                format!("{x:.6}"),
                format!("{y:.6}"),
                format!("{z:.6}"),
            ])?;
        }
        out.flush()?;
        Ok(())
    }
}

pub mod report {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::io::{self, Write};

    /// Envelope around a single analysis result.
    #[derive(Debug, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Report<'a, T: Serialize> {
        pub generated_at: String,
        pub analysis: &'a str,
        pub result: &'a T,
    }

    impl<'a, T: Serialize> Report<'a, T> {
        pub fn new(analysis: &'a str, result: &'a T) -> Self {
            Self {
                generated_at: chrono::Utc::now().to_rfc3339(),
                analysis,
                result,
            }
        }
    }

    /// Pretty-print any serializable value followed by a newline.
    pub fn write_json<W: Write, T: Serialize + ?Sized>(mut writer: W, value: &T) -> io::Result<()> {
        to_writer_pretty(&mut writer, value)?;
        writeln!(writer)?;
        writer.flush()
    }

    /// Wrap `result` in a [`Report`] and write it.
    pub fn write_report<W: Write, T: Serialize>(
        writer: W,
        analysis: &str,
        result: &T,
    ) -> io::Result<()> {
        write_json(writer, &Report::new(analysis, result))
    }
}
