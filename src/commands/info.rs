use std::path::Path;

use anyhow::{Result, bail};
use ramadan_core::inspect::{self, Inspection};

use crate::render::Render;

pub fn run(file: &Path) -> Result<Inspection> {
    let inspection = match inspect::inspect(file) {
        Ok(inspection) => inspection,
        Err(ramadan_core::ConvertError::UnsupportedFormat(path)) => bail!(
            "Unsupported file format - {}\nSupported formats: .csv, .ics",
            path.display()
        ),
        Err(e) => return Err(e.into()),
    };

    if let Inspection::Csv { rows: 0, .. } = inspection {
        bail!("No valid prayer times found in CSV file");
    }

    println!("{}", inspection.render());
    Ok(inspection)
}
