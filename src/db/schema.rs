// src/db/schema.rs
// Operation log schema

/// Table layout shared with earlier releases: no primary key, `fecha` is the
/// natural ordering key and `resultado` is textual.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS Calculadora (
    fecha TEXT,
    num_1 DOUBLE,
    operador TEXT(1),
    num_2 DOUBLE,
    resultado TEXT
);

CREATE INDEX IF NOT EXISTS idx_calculadora_fecha ON Calculadora(fecha);
"#;

/// Column list in the order expected by `parse_operation_row`
pub const COLUMNS: &str = "fecha, num_1, operador, num_2, resultado";
