use solarkit::{init_logging, wire_report, LayoutState, VERSION};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("SolarKit {}", VERSION);
        eprintln!("Usage: solarkit <project.json>");
        eprintln!();
        eprintln!("Prints the wire length report for a saved project.");
        return Ok(());
    };

    let mut state = LayoutState::new();
    state.load_from_file(&path)?;

    println!("Project: {}", state.name);
    println!(
        "{} panels, {} combiner boxes, {} strings",
        state.panels().len(),
        state.combiner_boxes().len(),
        state.strings().len()
    );

    let report = wire_report(&state);
    if report.is_empty() {
        println!("No intact strings to report.");
        return Ok(());
    }
    for row in report {
        println!("String {}: {}", row.string_number, row.lengths);
    }

    Ok(())
}
