#![warn(clippy::uninlined_format_args)]

pub mod model;
pub mod services;
pub mod solution;

pub use model::{
    DatasetError, DatasetInput, GlobalCaps, MovementPlan, OpinionBin, OpinionDataset,
    TransferCost, Transfer,
};
pub use services::{
    InterpretedResult, MetricsCalculator, ResultInterpreter, SolveMetrics, distribution_extremism,
    final_distribution, movement_used, weighted_cost,
};
pub use solution::{Solution, SolveStatus};
