//! Descomposición de IVA
//!
//! El dominio maneja precios en pesos colombianos enteros, casi siempre con
//! IVA incluido. Este módulo convierte entre total con IVA (bruto), base sin
//! IVA (neto) y el IVA mismo, según qué datos existan. La aritmética de
//! redondeo usa `rust_decimal` para no arrastrar errores binarios.

use rust_decimal::prelude::*;
use rust_decimal::RoundingStrategy;

/// Tasa de IVA como fracción decimal (0.19 = 19%).
///
/// Se construye desde el porcentaje que publica el servicio externo; si ese
/// servicio no responde, aplica la tasa por defecto vigente.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaxRate(Decimal);

impl TaxRate {
    /// Tasa general vigente: 19%.
    pub fn general() -> Self {
        TaxRate(Decimal::new(19, 2))
    }

    /// Desde una fracción (`0.19`). Fracciones negativas se llevan a cero.
    pub fn from_fraction(fraccion: Decimal) -> Self {
        TaxRate(fraccion.max(Decimal::ZERO))
    }

    /// Desde el porcentaje externo (`19.00` → `0.19`).
    pub fn from_percentage(porcentaje: Decimal) -> Self {
        Self::from_fraction(porcentaje / Decimal::ONE_HUNDRED)
    }

    pub fn as_fraction(&self) -> Decimal {
        self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        Self::general()
    }
}

/// Descomposición neto/IVA/bruto de un monto. Todos opcionales: lo que no
/// se pudo derivar queda ausente.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaxSplit {
    pub neto: Option<i64>,
    pub iva: Option<i64>,
    pub bruto: Option<i64>,
}

fn redondear(d: Decimal) -> i64 {
    d.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

/// Deriva la descomposición según qué entradas existen, en orden de
/// prioridad:
///
/// a. base + IVA explícito → bruto = base + IVA.
/// b. total + base → IVA = max(total − base, 0), bruto = total.
/// c. solo total → neto = round(total / (1 + tasa)), IVA es el residuo,
///    de modo que neto + IVA == total exacto.
/// d. solo base → IVA = round(base × tasa), bruto = base + IVA.
/// e. nada → todo ausente.
pub fn decompose(
    total: Option<i64>,
    base: Option<i64>,
    iva_explicito: Option<i64>,
    tasa: TaxRate,
) -> TaxSplit {
    match (total, base, iva_explicito) {
        (_, Some(base), Some(iva)) => TaxSplit {
            neto: Some(base),
            iva: Some(iva),
            bruto: Some(base + iva),
        },
        (Some(total), Some(base), None) => TaxSplit {
            neto: Some(base),
            iva: Some((total - base).max(0)),
            bruto: Some(total),
        },
        // Un IVA explícito sin base no alcanza para la ruta (a); el total
        // manda y el IVA se deriva como residuo
        (Some(total), None, _) => {
            let divisor = Decimal::ONE + tasa.as_fraction();
            let neto = redondear(Decimal::from(total) / divisor);
            TaxSplit {
                neto: Some(neto),
                iva: Some((total - neto).max(0)),
                bruto: Some(total),
            }
        }
        (None, Some(base), None) => {
            let iva = redondear(Decimal::from(base) * tasa.as_fraction());
            TaxSplit {
                neto: Some(base),
                iva: Some(iva),
                bruto: Some(base + iva),
            }
        }
        (None, None, _) => TaxSplit::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tasa19() -> TaxRate {
        TaxRate::general()
    }

    #[test]
    fn test_base_mas_iva_explicito() {
        let split = decompose(None, Some(3_949_580), Some(750_420), tasa19());
        assert_eq!(split.neto, Some(3_949_580));
        assert_eq!(split.iva, Some(750_420));
        assert_eq!(split.bruto, Some(4_700_000));
    }

    #[test]
    fn test_total_y_base() {
        let split = decompose(Some(4_700_000), Some(4_000_000), None, tasa19());
        assert_eq!(split.neto, Some(4_000_000));
        assert_eq!(split.iva, Some(700_000));
        assert_eq!(split.bruto, Some(4_700_000));
    }

    #[test]
    fn test_total_y_base_iva_nunca_negativo() {
        let split = decompose(Some(4_000_000), Some(4_700_000), None, tasa19());
        assert_eq!(split.iva, Some(0));
        assert_eq!(split.bruto, Some(4_000_000));
    }

    #[test]
    fn test_solo_total_cuadra_exacto() {
        let split = decompose(Some(4_700_000), None, None, tasa19());
        assert_eq!(split.neto, Some(3_949_580));
        assert_eq!(split.iva, Some(750_420));
        assert_eq!(split.bruto, Some(4_700_000));
        assert_eq!(split.neto.unwrap() + split.iva.unwrap(), 4_700_000);
    }

    #[test]
    fn test_solo_total_propiedad_neto_mas_iva() {
        for total in [1i64, 99, 1_000, 150_001, 4_700_000, 25_999_999] {
            let split = decompose(Some(total), None, None, tasa19());
            assert_eq!(
                split.neto.unwrap() + split.iva.unwrap(),
                total,
                "neto + iva debe reconstruir el total para {}",
                total
            );
        }
    }

    #[test]
    fn test_solo_base() {
        let split = decompose(None, Some(1_000_000), None, tasa19());
        assert_eq!(split.neto, Some(1_000_000));
        assert_eq!(split.iva, Some(190_000));
        assert_eq!(split.bruto, Some(1_190_000));
    }

    #[test]
    fn test_solo_base_con_redondeo() {
        // 333 * 0.19 = 63.27 → 63
        let split = decompose(None, Some(333), None, tasa19());
        assert_eq!(split.iva, Some(63));
        assert_eq!(split.bruto, Some(396));
    }

    #[test]
    fn test_sin_entradas() {
        assert_eq!(decompose(None, None, None, tasa19()), TaxSplit::default());
    }

    #[test]
    fn test_tasa_cero() {
        let tasa = TaxRate::from_percentage(Decimal::ZERO);
        let split = decompose(Some(1_000_000), None, None, tasa);
        assert_eq!(split.neto, Some(1_000_000));
        assert_eq!(split.iva, Some(0));
    }

    #[test]
    fn test_from_percentage() {
        let tasa = TaxRate::from_percentage(Decimal::new(1900, 2));
        assert_eq!(tasa, TaxRate::general());
    }

    #[test]
    fn test_tasa_negativa_se_trunca_a_cero() {
        let tasa = TaxRate::from_percentage(Decimal::new(-500, 2));
        assert_eq!(tasa.as_fraction(), Decimal::ZERO);
    }
}
