//! Formato de moneda para presentación
//!
//! Los montos del dominio son pesos colombianos enteros. Las pantallas
//! anteriores mezclaban "—" y "$0" para valores vacíos; aquí el criterio es
//! uno solo: ausente → "—", presente (incluido el cero) → pesos formateados.

/// Formatea un monto en pesos con separador de miles: `$ 1.234.567`.
pub fn format_pesos(monto: i64) -> String {
    let negativo = monto < 0;
    let digitos = monto.unsigned_abs().to_string();

    let mut grupos = Vec::new();
    let bytes = digitos.as_bytes();
    let mut fin = bytes.len();
    while fin > 3 {
        grupos.push(&digitos[fin - 3..fin]);
        fin -= 3;
    }
    grupos.push(&digitos[..fin]);
    grupos.reverse();

    let cuerpo = grupos.join(".");
    if negativo {
        format!("-$ {}", cuerpo)
    } else {
        format!("$ {}", cuerpo)
    }
}

/// Formato estándar para montos opcionales del desglose.
pub fn format_monto(monto: Option<i64>) -> String {
    match monto {
        Some(m) => format_pesos(m),
        None => "—".to_string(),
    }
}
