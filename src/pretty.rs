//! Text formatting shared by the CLI output and the terminal views.

use crate::models::Beneficio;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Brazilian reais: `R$ 1.234,56`.
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    format!(
        "{}R$ {},{}",
        if negative { "-" } else { "" },
        grouped,
        frac_part
    )
}

/// "Ativo" / "Inativo".
pub fn status_label(beneficio: &Beneficio) -> &'static str {
    if beneficio.is_active() {
        "Ativo"
    } else {
        "Inativo"
    }
}

/// Cuts `text` to `max` characters, marking the cut with an ellipsis.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}

/// Plain-text table of benefits for the CLI.
pub fn beneficio_table(beneficios: &[Beneficio]) -> String {
    if beneficios.is_empty() {
        return "Nenhum benefício encontrado.".to_string();
    }

    let header = format!(
        "{:<6} {:<30} {:<30} {:>16} {:<8}",
        "ID", "Nome", "Descrição", "Valor", "Status"
    );
    let mut lines = vec![header.clone(), "-".repeat(header.chars().count())];
    for b in beneficios {
        lines.push(format!(
            "{:<6} {:<30} {:<30} {:>16} {:<8}",
            format!("#{}", b.id),
            truncate(&b.nome, 30),
            truncate(b.descricao.as_deref().unwrap_or("-"), 30),
            format_brl(b.valor),
            status_label(b)
        ));
    }
    lines.join("\n")
}
