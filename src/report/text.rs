use crate::report::ReportContext;

pub fn render_report_text(ctx: &ReportContext) -> String {
    let mut out = String::new();

    out.push_str("Intellectual Humility Assessment\n");
    out.push_str("================================\n\n");

    out.push_str("1. Result\n");
    out.push_str(&format!(
        "Your Intellectual Humility Score: {}\n",
        ctx.score_display
    ));
    out.push_str(&format!("Band: {}\n", ctx.band_name));
    out.push_str(&format!(
        "Scale: {} (total {} of {})\n\n",
        ctx.scale_mode, ctx.total, ctx.max_total
    ));

    out.push_str("2. Recommendation\n");
    out.push_str(ctx.recommendation);
    out.push_str("\n\n");

    out.push_str("3. Per-question breakdown\n");
    let width = ctx
        .contributions
        .iter()
        .map(|row| row.id.len())
        .max()
        .unwrap_or(0);
    for row in &ctx.contributions {
        let marker = if row.reversed {
            "  (reverse-scored)"
        } else {
            ""
        };
        out.push_str(&format!(
            "Q{:<2} {:<width$}  raw={}  counted={}{}\n",
            row.position, row.id, row.raw, row.contribution, marker,
        ));
    }
    out.push('\n');

    out.push_str(&format!("Answers source: {}\n", ctx.answers_source));

    out
}
