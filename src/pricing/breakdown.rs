//! Composición del desglose total
//!
//! Junta todas las piezas del motor: normaliza los tres registros, elige la
//! variante financiada, resuelve cada campo por su cadena de candidatos,
//! agrega seguros, descompone IVA y arma el gran total.
//!
//! El valor bruto de la moto se resuelve en este orden:
//! 1. Totales explícitos de la solicitud de facturación.
//! 2. Top-down: precio total precalculado de la cotización menos documentos,
//!    extras y seguros (preferido cuando el total existe).
//! 3. Bottom-up: precio base de la variante, o valor de producto del crédito.
//! Ambas estrategias deben producir el mismo gran total para entradas
//! consistentes; los tests lo verifican.

use serde_json::Value;

use super::insurance::aggregate_insurance;
use super::normalizer::{CreditFields, InvoicingFields, QuoteFields, VariantFields};
use super::resolver::resolve_first;
use super::tax::{decompose, TaxRate, TaxSplit};
use super::variant::{select_variant, Variante};

/// Desglose canónico de costos de una moto financiada.
///
/// Efímero: es función pura de sus entradas, no se persiste ni se muta.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Desglose {
    pub variante: Option<Variante>,
    pub vehiculo: TaxSplit,
    pub soat: Option<i64>,
    pub matricula: Option<i64>,
    pub impuestos: Option<i64>,
    pub subtotal_documentos: Option<i64>,
    pub extras: TaxSplit,
    pub seguros: Option<i64>,
    pub descuentos: Option<i64>,
    pub gran_total: Option<i64>,
}

/// Suma tolerante a ausencias: los faltantes cuentan 0, pero si todos
/// faltan el agregado también queda ausente.
fn sum_present(partes: &[Option<i64>]) -> Option<i64> {
    if partes.iter().all(Option::is_none) {
        None
    } else {
        Some(partes.iter().flatten().sum())
    }
}

/// Extras gravables de una variante: accesorios más adicionales (el total
/// precalculado, o la suma de los cinco renglones si no existe).
fn extras_variante(v: &VariantFields) -> Option<i64> {
    let adicionales = v.total_adicionales.or_else(|| sum_present(&v.adicionales));
    sum_present(&[v.accesorios, adicionales])
}

/// Deriva el desglose completo a partir de los payloads crudos y la tasa.
///
/// Nunca falla: entradas ausentes o malformadas degradan a campos ausentes.
pub fn derive_breakdown(
    cotizacion: Option<&Value>,
    credito: Option<&Value>,
    solicitud: Option<&Value>,
    tasa: TaxRate,
) -> Desglose {
    let quote = QuoteFields::from_raw(cotizacion);
    let credit = CreditFields::from_raw(credito);
    let sol = InvoicingFields::from_raw(solicitud);

    let variante = select_variant(&quote, &credit);

    // Sin variante seleccionada, los campos por variante quedan ausentes
    let vacia = VariantFields::default();
    let (sel, otra) = match variante {
        Some(Variante::A) => (&quote.variante_a, &quote.variante_b),
        Some(Variante::B) => (&quote.variante_b, &quote.variante_a),
        None => (&vacia, &vacia),
    };

    let soat = resolve_first(&[sol.soat, sel.soat, otra.soat]);
    let matricula = resolve_first(&[sol.matricula, sel.matricula, otra.matricula]);
    let impuestos = resolve_first(&[sol.impuestos, sel.impuestos, otra.impuestos]);
    let subtotal_documentos = sum_present(&[soat, matricula, impuestos]);

    let extras_base = resolve_first(&[
        sol.accesorios,
        extras_variante(sel),
        extras_variante(otra),
        credit.total_accesorios,
    ]);
    // Los extras siempre llegan sin IVA incluido
    let extras = decompose(None, extras_base, None, tasa);

    let seguros = resolve_first(&[
        aggregate_insurance(sel.seguros_raw.as_deref(), sel.otros_seguros),
        aggregate_insurance(otra.seguros_raw.as_deref(), otra.otros_seguros),
        credit.valor_seguro,
    ]);

    let vehiculo = resolver_vehiculo(
        &sol,
        sel,
        otra,
        &credit,
        subtotal_documentos,
        extras.bruto,
        seguros,
        tasa,
    );

    let descuento_cotizacion = resolve_first(&[sel.descuento, otra.descuento]);
    let descuentos = sum_present(&[
        descuento_cotizacion,
        sol.descuento_autorizado,
        sol.saldo_contraentrega,
    ]);

    let cargos = sum_present(&[vehiculo.bruto, subtotal_documentos, extras.bruto, seguros]);
    let gran_total = match (cargos, descuentos) {
        (None, None) => None,
        _ => Some(cargos.unwrap_or(0) - descuentos.unwrap_or(0)),
    };

    Desglose {
        variante,
        vehiculo,
        soat,
        matricula,
        impuestos,
        subtotal_documentos,
        extras,
        seguros,
        descuentos,
        gran_total,
    }
}

#[allow(clippy::too_many_arguments)]
fn resolver_vehiculo(
    sol: &InvoicingFields,
    sel: &VariantFields,
    otra: &VariantFields,
    credit: &CreditFields,
    subtotal_documentos: Option<i64>,
    extras_bruto: Option<i64>,
    seguros: Option<i64>,
    tasa: TaxRate,
) -> TaxSplit {
    // 1. Totales autorizados en la solicitud de facturación
    if sol.valor_moto_bruto.is_some() || sol.valor_moto_neto.is_some() {
        return decompose(
            sol.valor_moto_bruto,
            sol.valor_moto_neto,
            sol.valor_moto_iva,
            tasa,
        );
    }

    // 2. Top-down: aislar el valor de la moto restando del precio total los
    //    componentes que la cotización ya traía desglosados
    if let Some(precio_total) = resolve_first(&[sel.precio_total, otra.precio_total]) {
        let bruto = precio_total
            - subtotal_documentos.unwrap_or(0)
            - extras_bruto.unwrap_or(0)
            - seguros.unwrap_or(0);
        return decompose(Some(bruto), None, None, tasa);
    }

    // 3. Bottom-up: precio base de variante o valor de producto del crédito,
    //    ambos con IVA incluido
    let valor = resolve_first(&[sel.precio_base, otra.precio_base, credit.valor_producto]);
    decompose(valor, None, None, tasa)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tasa19() -> TaxRate {
        TaxRate::general()
    }

    #[test]
    fn test_desglose_completo_desde_cotizacion() {
        let cotizacion = json!({
            "marca_a": "YAMAHA",
            "linea_a": "FZ 2.0",
            "precio_total_a": 5_000_000,
            "soat_a": 150_000,
            "matricula_a": 80_000,
            "impuestos_a": 70_000,
            "accesorios_a": 0
        });
        let credito = json!({ "producto": "YAMAHA FZ 2.0" });

        let d = derive_breakdown(Some(&cotizacion), Some(&credito), None, tasa19());

        assert_eq!(d.variante, Some(Variante::A));
        assert_eq!(d.subtotal_documentos, Some(300_000));
        assert_eq!(d.vehiculo.bruto, Some(4_700_000));
        assert_eq!(d.vehiculo.neto, Some(3_949_580));
        assert_eq!(d.vehiculo.iva, Some(750_420));
        assert_eq!(d.extras.bruto, Some(0));
        assert_eq!(d.seguros, None);
        assert_eq!(d.descuentos, None);
        assert_eq!(d.gran_total, Some(5_000_000));
    }

    #[test]
    fn test_solicitud_tiene_prioridad() {
        let cotizacion = json!({
            "marca_a": "YAMAHA",
            "linea_a": "FZ 2.0",
            "precio_total_a": 5_000_000,
            "soat_a": 150_000
        });
        let credito = json!({ "producto": "yamaha fz 2.0" });
        let solicitud = json!({
            "soat": 160_000,
            "valor_moto_neto": 4_000_000,
            "valor_moto_iva": 760_000
        });

        let d = derive_breakdown(Some(&cotizacion), Some(&credito), Some(&solicitud), tasa19());

        assert_eq!(d.soat, Some(160_000));
        assert_eq!(d.vehiculo.neto, Some(4_000_000));
        assert_eq!(d.vehiculo.iva, Some(760_000));
        assert_eq!(d.vehiculo.bruto, Some(4_760_000));
    }

    #[test]
    fn test_descuentos_de_ambos_flujos() {
        let cotizacion = json!({
            "marca_a": "AKT",
            "linea_a": "NKD 125",
            "precio_total_a": 6_000_000,
            "descuento_a": 200_000
        });
        let credito = json!({ "producto": "AKT NKD 125" });
        let solicitud = json!({
            "descuento_autorizado": 100_000,
            "saldo_contraentrega": 50_000
        });

        let d = derive_breakdown(Some(&cotizacion), Some(&credito), Some(&solicitud), tasa19());

        assert_eq!(d.descuentos, Some(350_000));
        assert_eq!(d.gran_total, Some(6_000_000 - 350_000));
    }

    #[test]
    fn test_extras_siempre_se_gravan_desde_base() {
        let cotizacion = json!({
            "marca_b": "HONDA",
            "linea_b": "CB 125",
            "precio_base_b": 7_000_000,
            "accesorios_b": 100_000,
            "adicional1_b": 50_000,
            "adicional2_b": 30_000
        });
        let credito = json!({ "producto": "HONDA CB 125" });

        let d = derive_breakdown(Some(&cotizacion), Some(&credito), None, tasa19());

        // 100.000 + (50.000 + 30.000) = 180.000 de base
        assert_eq!(d.extras.neto, Some(180_000));
        assert_eq!(d.extras.iva, Some(34_200));
        assert_eq!(d.extras.bruto, Some(214_200));
    }

    #[test]
    fn test_total_adicionales_precalculado_gana_a_la_suma() {
        let cotizacion = json!({
            "marca_a": "BAJAJ",
            "linea_a": "PULSAR",
            "precio_base_a": 8_000_000,
            "accesorios_a": 0,
            "adicional1_a": 50_000,
            "total_adicionales_a": 45_000
        });
        let credito = json!({ "producto": "BAJAJ PULSAR" });

        let d = derive_breakdown(Some(&cotizacion), Some(&credito), None, tasa19());
        assert_eq!(d.extras.neto, Some(45_000));
    }

    #[test]
    fn test_fallback_a_credito_sin_cotizacion() {
        let credito = json!({
            "producto": "SUZUKI GN 125",
            "valor_producto": 6_500_000,
            "total_accesorios": 120_000,
            "valor_seguro": 300_000
        });

        let d = derive_breakdown(None, Some(&credito), None, tasa19());

        assert_eq!(d.variante, None);
        assert_eq!(d.vehiculo.bruto, Some(6_500_000));
        assert_eq!(d.extras.neto, Some(120_000));
        assert_eq!(d.seguros, Some(300_000));
        assert_eq!(d.subtotal_documentos, None);
    }

    #[test]
    fn test_equivalencia_top_down_bottom_up() {
        // Entradas consistentes: precio_total == base + documentos + extras
        let docs = 150_000 + 80_000 + 70_000;
        let extras_base = 100_000;
        let extras_bruto = 119_000;
        let base = 4_700_000;
        let total = base + docs + extras_bruto;

        let top_down = json!({
            "marca_a": "YAMAHA", "linea_a": "MT 03",
            "precio_total_a": total,
            "soat_a": 150_000, "matricula_a": 80_000, "impuestos_a": 70_000,
            "accesorios_a": extras_base
        });
        let bottom_up = json!({
            "marca_a": "YAMAHA", "linea_a": "MT 03",
            "precio_base_a": base,
            "soat_a": 150_000, "matricula_a": 80_000, "impuestos_a": 70_000,
            "accesorios_a": extras_base
        });
        let credito = json!({ "producto": "YAMAHA MT 03" });

        let d1 = derive_breakdown(Some(&top_down), Some(&credito), None, tasa19());
        let d2 = derive_breakdown(Some(&bottom_up), Some(&credito), None, tasa19());

        assert_eq!(d1.vehiculo.bruto, Some(base));
        assert_eq!(d1.gran_total, d2.gran_total);
        assert_eq!(d1.gran_total, Some(total));
    }

    #[test]
    fn test_todo_ausente() {
        let d = derive_breakdown(None, None, None, tasa19());
        assert_eq!(d, Desglose::default());
    }

    #[test]
    fn test_payloads_malformados_no_fallan() {
        let cotizacion = json!({ "precio_total_a": "no disponible", "seguros_a": "{roto" });
        let credito = json!("texto suelto");
        let solicitud = json!(42);

        let d = derive_breakdown(Some(&cotizacion), Some(&credito), Some(&solicitud), tasa19());
        assert_eq!(d.gran_total, None);
    }

    #[test]
    fn test_variante_alterna_como_fallback() {
        // A seleccionada pero sin SOAT propio: aplica el de B
        let cotizacion = json!({
            "marca_a": "YAMAHA", "linea_a": "FZ",
            "precio_total_a": 5_000_000,
            "marca_b": "YAMAHA", "linea_b": "FZ 2.0",
            "soat_b": 140_000
        });
        let credito = json!({ "producto": "YAMAHA FZ" });

        let d = derive_breakdown(Some(&cotizacion), Some(&credito), None, tasa19());
        assert_eq!(d.variante, Some(Variante::A));
        assert_eq!(d.soat, Some(140_000));
    }
}
