//! Quote pricing walkthrough

use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use quote_pricing::{
    calculate_gst, format_gst_number, format_inr, format_inr_compact, utils::validate_draft,
    validate_gst_number, GstRate, GstSlab, PricingContext, QuoteDraft,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("🧾 Quote Pricing - GST Quote Walkthrough\n");

    // 1. Standard slabs
    println!("📊 Standard GST Slabs:");
    for slab in GstSlab::ALL {
        println!("  {:?}: {}%", slab, slab.rate());
    }
    println!();

    // 2. One amount under both regimes
    let amount = BigDecimal::from(100000);
    let rate = GstSlab::Higher.rate();
    let intra = calculate_gst(&amount, &rate, false);
    let inter = calculate_gst(&amount, &rate, true);

    println!("🏢 Intra-state on {}:", format_inr(&amount));
    println!("  CGST: {}", format_inr(&intra.cgst));
    println!("  SGST: {}", format_inr(&intra.sgst));
    println!("  Total GST: {}", format_inr(&intra.total));
    println!();

    println!("🌍 Inter-state on {}:", format_inr(&amount));
    println!("  IGST: {}", format_inr(&inter.igst));
    println!("  Total GST: {}", format_inr(&inter.total));
    println!();

    // 3. A hospital equipment quote
    let context = PricingContext::new("Karnataka");
    let customer_state = "Tamil Nadu";
    let mut draft = QuoteDraft::new(
        &context,
        customer_state,
        NaiveDate::from_ymd_opt(2024, 6, 1).ok_or("invalid date")?,
    );

    draft.add_line(context.default_line(
        "Patient monitor",
        BigDecimal::from(4),
        BigDecimal::from(85000),
    ));
    draft.add_line(
        context
            .default_line(
                "Disposable ECG electrodes (box)",
                BigDecimal::from(50),
                BigDecimal::from(1200),
            )
            .with_gst_rate(GstSlab::Standard.rate())
            .with_uom("boxes"),
    );
    draft.add_line(
        context
            .default_line("Extended warranty", BigDecimal::from(1), BigDecimal::from(45000))
            .with_optional(true),
    );
    draft.set_discount(BigDecimal::from(5));
    validate_draft(&draft)?;

    println!(
        "📋 Quote for a customer in {} (company in {}):",
        customer_state, context.company_state
    );
    for line in &draft.lines {
        println!(
            "  {:<34} {:>4} {:<6} @ {:>10}  GST {}%{}",
            line.description,
            line.quantity,
            line.uom,
            format_inr(&line.unit_price),
            line.gst_rate,
            if line.optional { "  (optional)" } else { "" }
        );
    }
    println!();

    let totals = draft.totals();
    println!("💰 Quote Summary:");
    println!("  Subtotal:       {}", format_inr(&totals.subtotal));
    println!("  Discount ({}%):  -{}", draft.discounts_pct, format_inr(&totals.discount_amount));
    println!("  Taxable Amount: {}", format_inr(&totals.taxable_amount));
    if draft.is_inter_state {
        println!("  IGST:           {}", format_inr(&totals.igst));
    } else {
        println!("  CGST:           {}", format_inr(&totals.cgst));
        println!("  SGST:           {}", format_inr(&totals.sgst));
    }
    println!("  Total Tax:      {}", format_inr(&totals.total_tax));
    println!(
        "  Grand Total:    {} ({})",
        format_inr(&totals.grand_total),
        format_inr_compact(&totals.grand_total)
    );
    println!();

    let label_rate =
        GstRate::for_jurisdiction(context.default_gst_rate.clone(), draft.is_inter_state);
    label_rate.validate()?;
    println!(
        "  {} transaction at the default rate: CGST {}% / SGST {}% / IGST {}%",
        if draft.is_inter_state { "Inter-state" } else { "Intra-state" },
        label_rate.cgst_rate,
        label_rate.sgst_rate,
        label_rate.igst_rate
    );
    println!();

    // 4. GSTIN display
    let gstin = "29ABCDE1234F1Z5";
    println!("🪪 Customer GSTIN: {}", format_gst_number(gstin));
    println!("  Valid format: {}", validate_gst_number(gstin));

    Ok(())
}
