// Weekly results file organizer: copies per-week spreadsheet files
// into the canonical naming scheme

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Number of week slots probed per run
pub const WEEKS: u32 = 52;

/// Per-week organizer result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WeekStatus {
    /// A candidate file was found and copied from this source path
    Copied { from: PathBuf },

    /// No candidate file existed for the week
    NotFound,
}

/// Report line for a single week
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekReport {
    pub week: u32,
    pub status: WeekStatus,
}

/// The canonical destination name for a week's file
pub fn canonical_name(week: u32) -> String {
    format!("resultado_{}_69_K.xlsx", week)
}

/// Accepted source name patterns for a week, probed in order; the
/// first existing file wins
pub fn candidate_names(week: u32) -> [String; 4] {
    [
        format!("resultado_{}_69_K.xlsx", week),
        format!("Resultado_{}_69_K.xlsx", week),
        format!("resultado_semana_{}_69.xlsx", week),
        format!("semana_{}_participacion_69.xlsx", week),
    ]
}

/// Copies every available weekly file from `source_dir` into
/// `dest_dir` under its canonical name, carrying the source's
/// modification time onto the copy. The destination directory is
/// created if absent; source files are never modified. Weeks without
/// a matching file are recorded and skipped; a failed copy aborts the
/// run with the underlying I/O error.
pub fn organize_week_files(source_dir: &Path, dest_dir: &Path) -> io::Result<Vec<WeekReport>> {
    fs::create_dir_all(dest_dir)?;

    let mut reports = Vec::with_capacity(WEEKS as usize);
    for week in 1..=WEEKS {
        let source = candidate_names(week)
            .into_iter()
            .map(|name| source_dir.join(name))
            .find(|path| path.exists());

        let status = match source {
            Some(from) => {
                copy_with_mtime(&from, &dest_dir.join(canonical_name(week)))?;
                WeekStatus::Copied { from }
            }
            None => WeekStatus::NotFound,
        };
        reports.push(WeekReport { week, status });
    }

    Ok(reports)
}

// `fs::copy` carries permissions but stamps a fresh mtime; restore
// the source's so the weekly files keep their original timestamps
fn copy_with_mtime(from: &Path, to: &Path) -> io::Result<()> {
    fs::copy(from, to)?;
    let modified = fs::metadata(from)?.modified()?;
    fs::OpenOptions::new()
        .write(true)
        .open(to)?
        .set_modified(modified)?;
    Ok(())
}

/// Number of weeks that were copied
pub fn copied_count(reports: &[WeekReport]) -> usize {
    reports
        .iter()
        .filter(|r| matches!(r.status, WeekStatus::Copied { .. }))
        .count()
}
