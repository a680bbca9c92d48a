#![warn(clippy::uninlined_format_args)]

pub mod dataset_presenter;
pub mod error_presenter;
pub mod external_presenter;
pub mod report_presenter;

pub use dataset_presenter::DatasetPresenter;
pub use error_presenter::format_error;
pub use external_presenter::ExternalSolvePresenter;
pub use report_presenter::ReportPresenter;

fn join_values<T: std::fmt::Display>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
