//! Dashboard aggregates, computed client-side over the full list.

use crate::models::Beneficio;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    /// Sum of the balances of active benefits.
    pub total: Decimal,
    /// Number of active benefits.
    pub active_count: usize,
    /// `total / active_count`, or zero when nothing is active.
    pub average: Decimal,
}

impl Summary {
    pub fn from_beneficios(beneficios: &[Beneficio]) -> Self {
        let (total, active_count) = beneficios
            .iter()
            .filter(|b| b.is_active())
            .fold((Decimal::ZERO, 0usize), |(sum, n), b| (sum + b.valor, n + 1));
        let average = if active_count > 0 {
            total / Decimal::from(active_count)
        } else {
            Decimal::ZERO
        };
        Self {
            total,
            active_count,
            average,
        }
    }
}
