#[cfg(all(feature = "en", feature = "es"))]
compile_error!("Cannot enable both 'en' and 'es' features at the same time");

#[cfg(feature = "es")]
pub mod strings {
    pub const DATASET_HEADER: &str = "Datos del archivo seleccionado:";
    pub const TOTAL_PEOPLE: &str = "Total de personas (n)";
    pub const OPINION_COUNT: &str = "Número de opiniones (m)";
    pub const INITIAL_DISTRIBUTION: &str = "Distribución inicial p";
    pub const EXTREMISM_LEVELS: &str = "Nivel de extremismo ext";
    pub const EXTRA_COSTS: &str = "Costos extra cei";
    pub const COST_MATRIX: &str = "Matriz de costos c";
    pub const MAX_TOTAL_COST: &str = "Costo total máximo permitido";
    pub const MAX_MOVEMENTS: &str = "Máx. número de movimientos";
    pub const RESULTS: &str = "RESULTADOS:";
    pub const SOLUTION_STATUS: &str = "Estado de la solución";
    pub const MIN_EXTREMISM: &str = "Extremismo mínimo alcanzado";
    pub const SUGGESTED_MOVES: &str = "Movimientos sugeridos:";
    pub const NO_MOVES: &str = "Sin movimientos";
    pub const FINAL_DISTRIBUTION: &str = "Distribución final";
    pub const SUMMARY: &str = "Resumen Final:";
    pub const EXTREMISM_INITIAL: &str = "Extremismo Inicial";
    pub const EXTREMISM_FINAL: &str = "Extremismo Final";
    pub const COST_INITIAL: &str = "Costo Inicial";
    pub const COST_FINAL: &str = "Costo Final";
    pub const MOVEMENT_CAP: &str = "Movimientos (máx)";
    pub const MOVEMENT_USED: &str = "Movimientos (usados)";
    pub const SOLVE_TIME: &str = "Tiempo de resolución (s)";
    pub const NOT_AVAILABLE: &str = "n/d";
    pub const STATUS_OPTIMAL: &str = "Óptimo";
    pub const STATUS_INFEASIBLE: &str = "Infactible";
    pub const STATUS_UNBOUNDED: &str = "No acotado";
    pub const STATUS_NOT_SOLVED: &str = "No resuelto";
    pub const STATUS_ERROR: &str = "Error";
    pub const EXTERNAL_RESULT: &str = "Resultado MiniZinc:";
    pub const EXTERNAL_SOLVER_WARNING: &str = "La ejecución del solver terminó con errores.";
    pub const EXTERNAL_INFEASIBLE: &str = "El modelo no tiene solución.";
    pub const EXTERNAL_UNBOUNDED: &str = "El modelo no está acotado.";
    pub const EXTERNAL_INCOMPLETE: &str = "Búsqueda no completada; se muestran las soluciones encontradas.";
    pub const NO_DATASET: &str = "Primero selecciona y carga un archivo válido.";
    pub const DATASET_FILE: &str = "archivo de datos";
    pub const MODEL_FILE: &str = "archivo MiniZinc";
    pub const MODEL_DATA_FILE: &str = "archivo de datos DZN";
    pub const READ_FAILED: &str = "No se pudo leer el archivo";
}

#[cfg(not(feature = "es"))]
pub mod strings {
    pub const DATASET_HEADER: &str = "Data from the selected file:";
    pub const TOTAL_PEOPLE: &str = "Total people (n)";
    pub const OPINION_COUNT: &str = "Number of opinions (m)";
    pub const INITIAL_DISTRIBUTION: &str = "Initial distribution p";
    pub const EXTREMISM_LEVELS: &str = "Extremism level ext";
    pub const EXTRA_COSTS: &str = "Extra costs cei";
    pub const COST_MATRIX: &str = "Cost matrix c";
    pub const MAX_TOTAL_COST: &str = "Maximum total cost allowed";
    pub const MAX_MOVEMENTS: &str = "Max. number of movements";
    pub const RESULTS: &str = "RESULTS:";
    pub const SOLUTION_STATUS: &str = "Solution status";
    pub const MIN_EXTREMISM: &str = "Minimum extremism reached";
    pub const SUGGESTED_MOVES: &str = "Suggested moves:";
    pub const NO_MOVES: &str = "No moves";
    pub const FINAL_DISTRIBUTION: &str = "Final distribution";
    pub const SUMMARY: &str = "Final summary:";
    pub const EXTREMISM_INITIAL: &str = "Initial extremism";
    pub const EXTREMISM_FINAL: &str = "Final extremism";
    pub const COST_INITIAL: &str = "Initial cost";
    pub const COST_FINAL: &str = "Final cost";
    pub const MOVEMENT_CAP: &str = "Movement cap";
    pub const MOVEMENT_USED: &str = "Movement used";
    pub const SOLVE_TIME: &str = "Solve time (s)";
    pub const NOT_AVAILABLE: &str = "n/a";
    pub const STATUS_OPTIMAL: &str = "Optimal";
    pub const STATUS_INFEASIBLE: &str = "Infeasible";
    pub const STATUS_UNBOUNDED: &str = "Unbounded";
    pub const STATUS_NOT_SOLVED: &str = "Not Solved";
    pub const STATUS_ERROR: &str = "Error";
    pub const EXTERNAL_RESULT: &str = "MiniZinc result:";
    pub const EXTERNAL_SOLVER_WARNING: &str = "The solver run finished with errors.";
    pub const EXTERNAL_INFEASIBLE: &str = "The model is unsatisfiable.";
    pub const EXTERNAL_UNBOUNDED: &str = "The model is unbounded.";
    pub const EXTERNAL_INCOMPLETE: &str = "Search did not complete; showing the solutions found.";
    pub const NO_DATASET: &str = "Select and load a valid file first.";
    pub const DATASET_FILE: &str = "dataset file";
    pub const MODEL_FILE: &str = "MiniZinc file";
    pub const MODEL_DATA_FILE: &str = "DZN data file";
    pub const READ_FAILED: &str = "Could not read the file";
}

pub use strings::*;

#[cfg(feature = "es")]
pub fn move_people(count: u64, from: usize, to: usize) -> String {
    format!("Mover {count} persona(s) de opinión {from} a {to}")
}

#[cfg(feature = "es")]
pub fn keep_people(count: u64, bin: usize) -> String {
    format!("Mantener {count} persona(s) en opinión {bin}")
}

#[cfg(feature = "es")]
pub fn model_data_created(name: impl std::fmt::Display) -> String {
    format!("Archivo '{name}' creado correctamente.")
}

#[cfg(feature = "es")]
pub fn missing_file(kind: impl std::fmt::Display, path: impl std::fmt::Display) -> String {
    format!("No se encontró el {kind}: {path}")
}

#[cfg(feature = "es")]
pub fn solver_timed_out(seconds: f64) -> String {
    format!("El solver excedió el tiempo límite de {seconds} s.")
}

#[cfg(feature = "es")]
pub fn solver_launch_failed(program: impl std::fmt::Display, message: impl std::fmt::Display) -> String {
    format!("No se pudo ejecutar '{program}': {message}")
}

#[cfg(feature = "es")]
pub fn solver_inconclusive(marker: impl std::fmt::Display) -> String {
    format!("El solver terminó sin resultado ({marker}).")
}

#[cfg(not(feature = "es"))]
pub fn move_people(count: u64, from: usize, to: usize) -> String {
    format!("Move {count} person(s) from opinion {from} to {to}")
}

#[cfg(not(feature = "es"))]
pub fn keep_people(count: u64, bin: usize) -> String {
    format!("Keep {count} person(s) in opinion {bin}")
}

#[cfg(not(feature = "es"))]
pub fn model_data_created(name: impl std::fmt::Display) -> String {
    format!("File '{name}' created successfully.")
}

#[cfg(not(feature = "es"))]
pub fn missing_file(kind: impl std::fmt::Display, path: impl std::fmt::Display) -> String {
    format!("Could not find the {kind}: {path}")
}

#[cfg(not(feature = "es"))]
pub fn solver_timed_out(seconds: f64) -> String {
    format!("The solver timed out after {seconds} s.")
}

#[cfg(not(feature = "es"))]
pub fn solver_launch_failed(program: impl std::fmt::Display, message: impl std::fmt::Display) -> String {
    format!("Could not run '{program}': {message}")
}

#[cfg(not(feature = "es"))]
pub fn solver_inconclusive(marker: impl std::fmt::Display) -> String {
    format!("The solver finished without a result ({marker}).")
}

#[cfg(feature = "es")]
pub fn dataset_syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Error de sintaxis en la línea {line}: {detail}")
}

#[cfg(feature = "es")]
pub fn malformed_dataset(detail: impl std::fmt::Display) -> String {
    format!("Archivo de datos mal formado: {detail}")
}

#[cfg(feature = "es")]
pub fn length_mismatch(field: &str, expected: usize, found: usize) -> String {
    format!("El campo `{field}` tiene {found} valores, se esperaban {expected}")
}

#[cfg(feature = "es")]
pub fn cost_row_length(row: usize, expected: usize, found: usize) -> String {
    format!("La fila {row} de la matriz de costos tiene {found} valores, se esperaban {expected}")
}

#[cfg(feature = "es")]
pub fn non_finite(field: &str, index: usize) -> String {
    format!("El campo `{field}` contiene un valor no finito en la posición {index}")
}

#[cfg(feature = "es")]
pub fn population_overflow(max: i64) -> String {
    format!("La suma de `p` supera {max}")
}

#[cfg(feature = "es")]
pub const NO_OPINIONS: &str = "El archivo debe tener al menos una opinión (m = 0)";
#[cfg(feature = "es")]
pub const NON_POSITIVE_TOTAL: &str = "El total de personas n debe ser positivo";

#[cfg(not(feature = "es"))]
pub fn dataset_syntax_error(line: usize, detail: impl std::fmt::Display) -> String {
    format!("Syntax error at line {line}: {detail}")
}

#[cfg(not(feature = "es"))]
pub fn malformed_dataset(detail: impl std::fmt::Display) -> String {
    format!("Malformed dataset: {detail}")
}

#[cfg(not(feature = "es"))]
pub fn length_mismatch(field: &str, expected: usize, found: usize) -> String {
    format!("Field `{field}` has {found} values, expected {expected}")
}

#[cfg(not(feature = "es"))]
pub fn cost_row_length(row: usize, expected: usize, found: usize) -> String {
    format!("Row {row} of the cost matrix has {found} values, expected {expected}")
}

#[cfg(not(feature = "es"))]
pub fn non_finite(field: &str, index: usize) -> String {
    format!("Field `{field}` contains a non-finite value at position {index}")
}

#[cfg(not(feature = "es"))]
pub fn population_overflow(max: i64) -> String {
    format!("Total of `p` exceeds {max}")
}

#[cfg(not(feature = "es"))]
pub const NO_OPINIONS: &str = "Dataset must contain at least one opinion (m = 0)";
#[cfg(not(feature = "es"))]
pub const NON_POSITIVE_TOTAL: &str = "Total population n must be positive";
