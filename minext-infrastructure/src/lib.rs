#![warn(clippy::uninlined_format_args)]

pub mod minizinc;
pub mod model_data;
pub mod optimizer;
pub mod parser;

pub use minizinc::MiniZincRunner;
pub use model_data::DznModelDataWriter;
pub use optimizer::GoodLpPlanSolver;
pub use parser::TextDatasetParser;
