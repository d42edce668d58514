//! Side effects returned by the reducer, executed by the console shell.

use crate::app::column_sizes::ColumnSizes;
use crate::app::device_limit::{PlanChangeRequest, PreviewOrder};
use crate::app::preauth::PreauthRequest;

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    FetchDevices {
        page: usize,
        per_page: usize,
    },
    /// Selected rows, in selection order, for bulk-action enablement.
    SelectionChanged {
        rows: Vec<usize>,
    },
    PersistColumnSizes {
        table: String,
        sizes: ColumnSizes,
    },
    FetchBillingPreview(PreviewOrder),
    RequestPlanChange(PlanChangeRequest),
    SubmitPreauth {
        request: PreauthRequest,
        add_another: bool,
    },
    ShowError(String),
}
