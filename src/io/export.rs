//! CSV export for simulation hour records.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::HourRecord;

/// Schema v1 column header for CSV telemetry export.
const HEADER: &str = "hour,solar_kw,hotel_left_kw,aux_left_kw,prop_left_kw,\
                      prop1_kw,prop2_kw,batt_out_kw,charged_kw,unmet_kw,excess_kw,\
                      start_soc_kwh,end_soc_kwh,m1_fuel_l,m1_grid_kw,m2_fuel_l,m2_grid_kw,\
                      dg1_fuel_l,dg1_grid_kw,dg2_fuel_l,dg2_grid_kw,fuel_used_l";

/// Exports simulation results to a CSV file at the given path.
///
/// Writes a header row followed by one data row per hour using the schema
/// v1 column layout. Produces deterministic output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(results: &[HourRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(results, buf)
}

/// Writes simulation results as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(results: &[HourRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    // Header
    wtr.write_record(HEADER.split(',').map(str::trim))?;

    // Data rows
    for r in results {
        let mut record = vec![
            r.hour.to_string(),
            format!("{:.4}", r.solar_kw),
            format!("{:.4}", r.hotel_left_kw),
            format!("{:.4}", r.aux_left_kw),
            format!("{:.4}", r.prop_left_kw),
            format!("{:.4}", r.prop1_supplied_kw),
            format!("{:.4}", r.prop2_supplied_kw),
            format!("{:.4}", r.batt_out_kw),
            format!("{:.4}", r.charged_kw),
            format!("{:.4}", r.unmet_load_kw),
            format!("{:.4}", r.excess_kw),
            format!("{:.4}", r.start_soc_kwh),
            format!("{:.4}", r.end_soc_kwh),
        ];
        for d in &r.devices {
            record.push(format!("{:.4}", d.fuel_l));
            record.push(format!("{:.4}", d.grid_out_kw));
        }
        record.push(format!("{:.4}", r.fuel_used_l));
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}
