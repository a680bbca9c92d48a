pub mod metrics_calculator;
pub mod plan_evaluator;
pub mod result_interpreter;

pub use metrics_calculator::{MetricsCalculator, SolveMetrics};
pub use plan_evaluator::{
    distribution_extremism, final_distribution, movement_used, weighted_cost,
};
pub use result_interpreter::{InterpretedResult, ResultInterpreter};
