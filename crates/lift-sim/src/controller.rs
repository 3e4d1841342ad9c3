//! The strategy seam shared by both controllers.

use crate::observer::SimObserver;
use crate::report::RunReport;

/// A dispatch strategy that can drive a run to termination.
///
/// Both controllers implement this so runners and output writers can treat
/// them interchangeably.
pub trait Controller {
    /// Short strategy name for logs, reports, and CSV rows.
    fn label(&self) -> &'static str;

    /// Drive the run to termination, reporting every tick to `observer`.
    fn run_with(self, observer: &mut dyn SimObserver) -> RunReport;
}
