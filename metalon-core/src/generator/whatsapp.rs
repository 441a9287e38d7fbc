//! WhatsApp message generation for finished quotes.
//!
//! Produces the pt-BR plain-text summary the shop owner pastes into a chat.
//! Every cost shown here comes from [`QuoteTotals`] or the line items'
//! derived fields; the formatter never prices anything itself.

use crate::model::{BarItem, GenericProduct, Quote, QuoteTotals};
use std::fmt::Write;

use super::currency::format_currency;

/// Generate the shareable WhatsApp text for a priced quote.
pub fn generate_whatsapp_text(quote: &Quote, totals: &QuoteTotals) -> String {
    let mut output = String::new();

    generate_header_section(&mut output, quote);
    generate_items_section(&mut output, &quote.items);
    generate_pricing_section(&mut output, quote, totals);
    generate_products_section(&mut output, &quote.products, totals);
    generate_footer_section(&mut output, quote, totals);

    output
}

/// Generate the title and client lines.
fn generate_header_section(output: &mut String, quote: &Quote) {
    writeln!(output, "*ORÇAMENTO — Estrutura Metalon*").unwrap();
    writeln!(output).unwrap();

    let client_name = quote
        .client_name
        .as_deref()
        .unwrap_or("Cliente não informado");
    writeln!(output, "*Cliente:* {}", client_name).unwrap();
}

/// Generate one block per bar line item.
fn generate_items_section(output: &mut String, items: &[BarItem]) {
    writeln!(output, "*Itens:*").unwrap();

    for item in items {
        writeln!(
            output,
            "- {} — {} barras x {}m = {}m",
            item.profile_name, item.quantity, item.length_per_bar, item.total_length
        )
        .unwrap();
        writeln!(
            output,
            "  Pintura: {}",
            if item.paint { "Sim" } else { "Não" }
        )
        .unwrap();
        writeln!(
            output,
            "  Custo material: {}",
            format_currency(item.combined_cost)
        )
        .unwrap();
    }

    writeln!(output).unwrap();
}

/// Generate the material subtotal, markup and per-service lines.
fn generate_pricing_section(output: &mut String, quote: &Quote, totals: &QuoteTotals) {
    writeln!(
        output,
        "*Subtotal material (c/ pintura):* {}",
        format_currency(totals.material_with_paint)
    )
    .unwrap();
    writeln!(
        output,
        "*Pontuação aplicada:* x{} → {}",
        quote.markup,
        format_currency(totals.material_with_markup)
    )
    .unwrap();
    writeln!(output).unwrap();

    // One automatic cut and weld per bar, plus manual extras
    let total_cuts: u32 = quote.items.iter().map(|i| i.cut_count()).sum();
    let total_welds: u32 = quote.items.iter().map(|i| i.weld_count()).sum();

    writeln!(
        output,
        "*Cortes:* {} un. = {}",
        total_cuts,
        format_currency(totals.cut_cost)
    )
    .unwrap();
    writeln!(
        output,
        "*Soldas:* {} un. = {}",
        total_welds,
        format_currency(totals.weld_cost)
    )
    .unwrap();
    writeln!(
        output,
        "*Transporte:* {} km = {}",
        quote.distance_km,
        format_currency(totals.transport_cost)
    )
    .unwrap();
}

/// Generate the generic products subtotal and detail lines.
fn generate_products_section(
    output: &mut String,
    products: &[GenericProduct],
    totals: &QuoteTotals,
) {
    writeln!(
        output,
        "*Produtos/Outros:* {}",
        format_currency(totals.generic_cost)
    )
    .unwrap();

    if products.is_empty() {
        writeln!(output, "Detalhe produtos: Nenhum").unwrap();
    } else {
        writeln!(output, "Detalhe produtos:").unwrap();
        for product in products {
            writeln!(
                output,
                "- {} ({}x) = {}",
                product.description,
                product.quantity,
                format_currency(product.total)
            )
            .unwrap();
        }
    }

    writeln!(output).unwrap();
}

/// Generate final value, profit, validity and notes.
fn generate_footer_section(output: &mut String, quote: &Quote, totals: &QuoteTotals) {
    writeln!(
        output,
        "*VALOR FINAL: {}*",
        format_currency(totals.final_price)
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(
        output,
        "Lucro estimado: {} ({:.1}%)",
        format_currency(totals.absolute_profit),
        totals.profit_percentage
    )
    .unwrap();
    writeln!(output).unwrap();

    writeln!(output, "Validade: {} dias", quote.validity_days).unwrap();
    writeln!(output, "Prazo: a combinar").unwrap();
    writeln!(output).unwrap();

    writeln!(output, "Obs: {}", quote.notes).unwrap();
}
