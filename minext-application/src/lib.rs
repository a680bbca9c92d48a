#![warn(clippy::uninlined_format_args)]

pub mod error;
pub mod external;
pub mod ports;
pub mod processor;
pub mod session;

pub use error::{DatasetFormatError, FileKind, MinExtError, SolverProcessError};
pub use external::{ExternalSolveOutcome, ExternalSolveReport, ExternalSolveService};
pub use ports::{DatasetParser, ExternalSolver, ModelDataWriter, PlanSolver};
pub use processor::{MinExtProcessor, SolveReport};
pub use session::Session;
