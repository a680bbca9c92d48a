#[cfg(all(feature = "en", feature = "es"))]
compile_error!("Cannot enable both 'en' and 'es' features at the same time");

#[cfg(feature = "es")]
pub fn expected(kind: impl std::fmt::Display) -> String {
    format!("se esperaba {kind}")
}

#[cfg(feature = "es")]
pub fn unparsed_input(input: impl std::fmt::Display) -> String {
    format!("entrada no reconocida: {input}")
}

#[cfg(feature = "es")]
pub fn missing_line(field: impl std::fmt::Display, line: impl std::fmt::Display) -> String {
    format!("Falta el valor de `{field}` (línea de datos {line}).")
}

#[cfg(feature = "es")]
pub fn syntax_error(
    line: impl std::fmt::Display,
    field: impl std::fmt::Display,
    detail: impl std::fmt::Display,
) -> String {
    format!("Error de sintaxis en la línea {line} (`{field}`): {detail}")
}

#[cfg(feature = "es")]
pub fn missing_field(field: impl std::fmt::Display) -> String {
    format!("Falta la asignación de `{field}`.")
}

#[cfg(feature = "es")]
pub fn invalid_value(field: impl std::fmt::Display, detail: impl std::fmt::Display) -> String {
    format!("Valor no válido para `{field}`: {detail}")
}

#[cfg(feature = "es")]
pub const INTEGER: &str = "un entero no negativo";
#[cfg(feature = "es")]
pub const REAL: &str = "un número real";
#[cfg(feature = "es")]
pub const INTEGER_LIST: &str = "enteros no negativos separados por comas";
#[cfg(feature = "es")]
pub const REAL_LIST: &str = "números reales separados por comas";

#[cfg(not(feature = "es"))]
pub fn expected(kind: impl std::fmt::Display) -> String {
    format!("expected {kind}")
}

#[cfg(not(feature = "es"))]
pub fn unparsed_input(input: impl std::fmt::Display) -> String {
    format!("unparsed input: {input}")
}

#[cfg(not(feature = "es"))]
pub fn missing_line(field: impl std::fmt::Display, line: impl std::fmt::Display) -> String {
    format!("Missing value for `{field}` (expected at data line {line}).")
}

#[cfg(not(feature = "es"))]
pub fn syntax_error(
    line: impl std::fmt::Display,
    field: impl std::fmt::Display,
    detail: impl std::fmt::Display,
) -> String {
    format!("Syntax error at line {line} (`{field}`): {detail}")
}

#[cfg(not(feature = "es"))]
pub fn missing_field(field: impl std::fmt::Display) -> String {
    format!("Missing assignment for `{field}`.")
}

#[cfg(not(feature = "es"))]
pub fn invalid_value(field: impl std::fmt::Display, detail: impl std::fmt::Display) -> String {
    format!("Invalid value for `{field}`: {detail}")
}

#[cfg(not(feature = "es"))]
pub const INTEGER: &str = "a non-negative integer";
#[cfg(not(feature = "es"))]
pub const REAL: &str = "a real number";
#[cfg(not(feature = "es"))]
pub const INTEGER_LIST: &str = "comma-separated non-negative integers";
#[cfg(not(feature = "es"))]
pub const REAL_LIST: &str = "comma-separated real numbers";
