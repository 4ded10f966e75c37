//! DTO del desglose de costos
//!
//! Aplana el desglose del motor para las tablas de resumen, los PDF y el
//! payload de facturación. Los montos van como enteros opcionales y además
//! como strings ya formateados con el criterio único de presentación.

use serde::Serialize;

use crate::pricing::{Desglose, Variante};
use crate::utils::currency::format_monto;

#[derive(Debug, Serialize)]
pub struct DesgloseResponse {
    pub codigo_credito: String,
    pub variante: Option<Variante>,

    pub vehiculo_neto: Option<i64>,
    pub vehiculo_iva: Option<i64>,
    pub vehiculo_bruto: Option<i64>,

    pub soat: Option<i64>,
    pub matricula: Option<i64>,
    pub impuestos: Option<i64>,
    pub subtotal_documentos: Option<i64>,

    pub accesorios_neto: Option<i64>,
    pub accesorios_iva: Option<i64>,
    pub accesorios_bruto: Option<i64>,

    pub seguros: Option<i64>,
    pub seguros_y_extras: Option<i64>,
    pub descuentos: Option<i64>,
    pub gran_total: Option<i64>,

    pub display: DesgloseDisplay,
}

/// Montos formateados para presentación: ausente → "—", cero → "$ 0".
#[derive(Debug, Serialize)]
pub struct DesgloseDisplay {
    pub vehiculo_neto: String,
    pub vehiculo_iva: String,
    pub vehiculo_bruto: String,
    pub soat: String,
    pub matricula: String,
    pub impuestos: String,
    pub subtotal_documentos: String,
    pub accesorios_bruto: String,
    pub seguros: String,
    pub descuentos: String,
    pub gran_total: String,
}

impl DesgloseResponse {
    pub fn from_desglose(codigo_credito: String, d: &Desglose) -> Self {
        // Seguros y extras combinados, como los espera el payload de
        // facturación; ausente solo si ambos lo están
        let seguros_y_extras = match (d.seguros, d.extras.bruto) {
            (None, None) => None,
            (s, e) => Some(s.unwrap_or(0) + e.unwrap_or(0)),
        };

        Self {
            codigo_credito,
            variante: d.variante,
            vehiculo_neto: d.vehiculo.neto,
            vehiculo_iva: d.vehiculo.iva,
            vehiculo_bruto: d.vehiculo.bruto,
            soat: d.soat,
            matricula: d.matricula,
            impuestos: d.impuestos,
            subtotal_documentos: d.subtotal_documentos,
            accesorios_neto: d.extras.neto,
            accesorios_iva: d.extras.iva,
            accesorios_bruto: d.extras.bruto,
            seguros: d.seguros,
            seguros_y_extras,
            descuentos: d.descuentos,
            gran_total: d.gran_total,
            display: DesgloseDisplay {
                vehiculo_neto: format_monto(d.vehiculo.neto),
                vehiculo_iva: format_monto(d.vehiculo.iva),
                vehiculo_bruto: format_monto(d.vehiculo.bruto),
                soat: format_monto(d.soat),
                matricula: format_monto(d.matricula),
                impuestos: format_monto(d.impuestos),
                subtotal_documentos: format_monto(d.subtotal_documentos),
                accesorios_bruto: format_monto(d.extras.bruto),
                seguros: format_monto(d.seguros),
                descuentos: format_monto(d.descuentos),
                gran_total: format_monto(d.gran_total),
            },
        }
    }
}
