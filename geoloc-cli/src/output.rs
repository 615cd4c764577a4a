use std::fmt::Write;

use geoloc_core::LocationRecord;

/// Human-readable rendering: one block per location, each preceded by a blank line.
pub fn render_text(records: &[LocationRecord]) -> String {
    let mut out = String::new();

    for record in records {
        let _ = writeln!(out, "\nLocation: {}", record.input());
        match record {
            LocationRecord::Success(r) => {
                let _ = writeln!(out, "Name: {}", r.name);
                let _ = writeln!(out, "Latitude: {}", r.latitude);
                let _ = writeln!(out, "Longitude: {}", r.longitude);
                if let Some(state) = r.state.as_deref().filter(|s| !s.is_empty()) {
                    let _ = writeln!(out, "State: {state}");
                }
            }
            LocationRecord::Failure(e) => {
                let _ = writeln!(out, "Error: {}", e.error);
            }
        }
    }

    out.trim_end().to_string()
}
