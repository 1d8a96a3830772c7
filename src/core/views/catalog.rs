//! Public catalog view
//!
//! The landing page: platform banner, domain filter chips, and the list
//! of open opportunities matching the active search and domain filters.

use crate::core::catalog;
use crate::core::views::{format_stipend, Render, ViewContext};
use std::fmt::Write;

/// Catalog page with its active filters
#[derive(Debug, Clone, Default)]
pub struct CatalogView {
    /// Free-text search string
    pub query: String,
    /// Selected domain chip, if any
    pub domain: Option<String>,
}

impl CatalogView {
    /// Create an unfiltered catalog view
    #[must_use]
    pub const fn new(query: String, domain: Option<String>) -> Self {
        Self { query, domain }
    }

    fn render_banner(ctx: &ViewContext, out: &mut String) {
        out.push_str("=== InternHub — Launch Your Career with Remote Internships ===\n");
        out.push_str(
            "Connect with top companies, track your progress, and build real-world\n\
             experience with guided mentorship and professional feedback.\n\n",
        );

        let _ = writeln!(
            out,
            "Opportunities: {} | Active Interns: 150+ | Success Rate: 95% | Avg. Stipend: ₹15K",
            ctx.store.opportunities.len()
        );
    }

    fn render_chips(&self, ctx: &ViewContext, out: &mut String) {
        let chips = catalog::domains(&ctx.store.opportunities);
        out.push_str("Domains: ");
        if self.domain.is_none() {
            out.push_str("[All Domains]");
        } else {
            out.push_str("All Domains");
        }
        for chip in chips {
            out.push_str(" | ");
            if self.domain.as_deref() == Some(chip) {
                let _ = write!(out, "[{chip}]");
            } else {
                out.push_str(chip);
            }
        }
        out.push('\n');
    }
}

impl Render for CatalogView {
    fn render(&self, ctx: &ViewContext) -> String {
        let mut out = String::new();

        Self::render_banner(ctx, &mut out);
        self.render_chips(ctx, &mut out);

        let matches = catalog::filter(
            &ctx.store.opportunities,
            &self.query,
            self.domain.as_deref(),
        );

        let _ = writeln!(out, "\n=== Available Opportunities ({}) ===", matches.len());

        if matches.is_empty() {
            out.push_str(
                "\nNo opportunities found\n\
                 Try adjusting your search or filter to find what you're looking for.\n",
            );
            return out;
        }

        for opp in matches {
            let _ = writeln!(out, "\n  {}", opp.title);
            let _ = writeln!(
                out,
                "    {} — {} [{}]",
                opp.company, opp.domain, opp.status
            );
            let _ = writeln!(out, "    {}", opp.description);

            let _ = write!(out, "    Duration: {} weeks", opp.duration_weeks);
            if let Some(stipend) = opp.stipend {
                let _ = write!(out, " | Stipend: {}/month", format_stipend(stipend));
            }
            if let Some(location) = &opp.location {
                let _ = write!(out, " | {location}");
            }
            out.push('\n');

            if let Some(requirements) = &opp.requirements {
                let _ = writeln!(out, "    Requirements: {}", requirements.join(", "));
            }
        }

        out
    }
}
