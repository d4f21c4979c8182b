pub mod handlers;

pub use handlers::{
    AnalyzeRequest, fix_query_value, is_read_only_method, render_report, run_analysis,
    write_report,
};
