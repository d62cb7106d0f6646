// src/output.rs
use crate::models::SimulationRun;
use std::fs::File;
use std::io::{self, Write};

/// Write the first `count` simulated paths as CSV, one row per time step:
/// `step,path_0,path_1,...`. Intended for host-side plotting tools.
pub fn write_paths_to_csv(filename: &str, run: &SimulationRun, count: usize) -> io::Result<()> {
    let mut file = File::create(filename)?;
    let selected = &run.paths()[..count.min(run.num_paths())];

    let header: Vec<String> = (0..selected.len()).map(|i| format!("path_{}", i)).collect();
    writeln!(file, "step,{}", header.join(","))?;

    for step in 0..run.path_length() {
        let row: Vec<String> = selected.iter().map(|p| p[step].to_string()).collect();
        writeln!(file, "{},{}", step, row.join(","))?;
    }
    Ok(())
}

/// Write a key/value pricing summary as CSV
pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, String)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
