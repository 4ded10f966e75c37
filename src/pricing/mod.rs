//! Motor de reconciliación de precios
//!
//! Este módulo deriva el desglose canónico de costos (neto/IVA/bruto) de una
//! moto financiada a partir de tres registros de origen con formas
//! inconsistentes: la cotización (dos variantes A/B), el crédito y la
//! solicitud de facturación (opcional), más la tasa de IVA vigente.
//!
//! El motor es puro y síncrono: no hace I/O, no guarda estado y nunca falla
//! por problemas de calidad de datos — los campos que no se pueden resolver
//! quedan ausentes.

pub mod breakdown;
pub mod insurance;
pub mod normalizer;
pub mod resolver;
pub mod tax;
pub mod variant;

pub use breakdown::{derive_breakdown, Desglose};
pub use normalizer::{CreditFields, InvoicingFields, QuoteFields, VariantFields};
pub use tax::{TaxRate, TaxSplit};
pub use variant::Variante;
