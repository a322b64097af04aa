/// How a single file left the processing loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Text was found and the file now lives in the destination folder
    Moved,
    /// Only spaces and newlines were found; the file stays where it was
    Blank,
    /// Loading, OCR or the move failed
    Failed,
}

/// Running counters for one batch run.
///
/// `total` is fixed when the file list is snapshotted. Blank files count
/// towards neither `moved` nor `errors`, but they are part of `total`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    pub total: usize,
    pub moved: usize,
    pub blank: usize,
    pub errors: usize,
}

impl BatchStats {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn record(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Moved => self.moved += 1,
            FileOutcome::Blank => self.blank += 1,
            FileOutcome::Failed => self.errors += 1,
        }
    }

    /// Number of files that went through the loop so far
    pub fn processed(&self) -> usize {
        self.moved + self.blank + self.errors
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary::from_stats(self)
    }
}

/// The single line reported once the loop is over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunSummary {
    NoneMoved,
    Partial { moved: usize, total: usize },
    AllMoved,
}

impl RunSummary {
    /// Nothing moved wins over everything else; any blank or failed file
    /// turns a success into a partial one.
    pub fn from_stats(stats: &BatchStats) -> Self {
        if stats.moved == 0 {
            Self::NoneMoved
        } else if stats.errors > 0 || stats.blank > 0 {
            Self::Partial {
                moved: stats.moved,
                total: stats.total,
            }
        } else {
            Self::AllMoved
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::NoneMoved => {
                " \u{25A0} None of the files were moved to the destination folder. \u{25A0}".to_string()
            }
            Self::Partial { moved, total } => format!(
                " \u{25A0} Few files({}/{}) are moved to the destination folder successfully. \u{25A0}",
                moved, total
            ),
            Self::AllMoved => {
                " \u{25A0} Files are moved to the destination folder successfully. \u{25A0}".to_string()
            }
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::AllMoved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(moved: usize, errors: usize, blank: usize) -> BatchStats {
        BatchStats {
            total: moved + errors + blank,
            moved,
            blank,
            errors,
        }
    }

    #[test]
    fn test_record_updates_matching_counter() {
        let mut stats = BatchStats::new(3);
        stats.record(FileOutcome::Moved);
        stats.record(FileOutcome::Blank);
        stats.record(FileOutcome::Failed);

        assert_eq!(stats, BatchStats { total: 3, moved: 1, blank: 1, errors: 1 });
        assert_eq!(stats.processed(), 3);
    }

    #[test]
    fn test_none_moved_regardless_of_errors() {
        assert_eq!(stats(0, 0, 0).summary(), RunSummary::NoneMoved);
        assert_eq!(stats(0, 4, 0).summary(), RunSummary::NoneMoved);
        assert_eq!(stats(0, 0, 2).summary(), RunSummary::NoneMoved);
    }

    #[test]
    fn test_partial_on_errors() {
        assert_eq!(
            stats(2, 1, 0).summary(),
            RunSummary::Partial { moved: 2, total: 3 }
        );
    }

    #[test]
    fn test_partial_on_blank_files_only() {
        assert_eq!(
            stats(1, 0, 1).summary(),
            RunSummary::Partial { moved: 1, total: 2 }
        );
    }

    #[test]
    fn test_all_moved() {
        let summary = stats(5, 0, 0).summary();
        assert_eq!(summary, RunSummary::AllMoved);
        assert!(summary.is_success());
    }

    #[test]
    fn test_partial_message_contains_ratio() {
        let message = RunSummary::Partial { moved: 3, total: 7 }.message();
        assert!(message.contains("(3/7)"));
    }
}
