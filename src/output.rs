//! CSV output, one file per category

use crate::error::Result;
use crate::product::{FIELDS, Product};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Write `products` to `<dir>/<name>.csv`, replacing any existing file.
///
/// The header row is always written, even for an empty list.
pub fn write_csv(dir: &Path, name: &str, products: &[Product]) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;

    let path = dir.join(format!("{}.csv", name));
    let file = fs::File::create(&path)?;
    write_products(file, products)?;

    log::debug!("Wrote {} rows to {}", products.len(), path.display());
    Ok(path)
}

/// Serialize products as CSV to any writer
pub fn write_products<W: io::Write>(writer: W, products: &[Product]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(writer);

    // Written by hand so an empty category still gets a header
    wtr.write_record(FIELDS)?;
    for product in products {
        wtr.serialize(product)?;
    }

    wtr.flush()?;
    Ok(())
}
