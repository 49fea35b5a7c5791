use std::io::{self, BufRead, Write};
use std::path::Path;

use route_balancer::organizer::{copied_count, organize_week_files, WeekStatus, WEEKS};

// Destination the weekly files are collected into
const DEST_DIR: &str = "data/weeks";

fn main() -> io::Result<()> {
    print!("Enter the directory holding the 52 weekly result files: ");
    io::stdout().flush()?;

    let mut source = String::new();
    io::stdin().lock().read_line(&mut source)?;
    let source_dir = Path::new(source.trim());

    println!(
        "Copying files from {} to {}...",
        source_dir.display(),
        DEST_DIR
    );

    let reports = organize_week_files(source_dir, Path::new(DEST_DIR))?;

    for report in &reports {
        match &report.status {
            WeekStatus::Copied { from } => {
                println!("Copied: week {} (from {})", report.week, from.display())
            }
            WeekStatus::NotFound => println!("Not found: week {}", report.week),
        }
    }

    let copied = copied_count(&reports);
    println!("\nDone: {}/{} files copied", copied, WEEKS);
    if copied == 0 {
        println!("No files were found. Check the path and file names.");
    }

    Ok(())
}
