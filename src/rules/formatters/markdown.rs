use crate::rules::types::SunAdvisory;
use crate::service::ExposureResult;

/// Markdown formatter for sun advisories
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format a garden's exposure summary and its advisories as markdown
    pub fn format(exposure: &ExposureResult, advisories: &[SunAdvisory]) -> String {
        let mut md = String::with_capacity(1024);

        md.push_str(&format!("# Sun Exposure - Garden {}\n\n", exposure.garden_id));

        match (exposure.seasonal_exposure_score, exposure.exposure_category) {
            (Some(score), Some(category)) => {
                md.push_str(&format!(
                    "**Exposure:** {} (score {:.2})\n\n",
                    category.display_text(),
                    score
                ));
            }
            _ => md.push_str("**Exposure:** unavailable\n\n"),
        }

        if let Some(shading) = &exposure.seasonal_shading {
            md.push_str("| Season | Shaded | Category | Shadows |\n");
            md.push_str("|---|---|---|---|\n");
            for (season, info) in shading {
                md.push_str(&format!(
                    "| {} | {:.0}% | {} | {} |\n",
                    season,
                    info.shaded_percentage,
                    info.exposure_category.display_text(),
                    info.affected_by_count
                ));
            }
            md.push('\n');
        }

        if !exposure.warnings.is_empty() {
            md.push_str("## Notes\n\n");
            for warning in &exposure.warnings {
                md.push_str(&format!("- {}\n", warning));
            }
            md.push('\n');
        }

        if advisories.is_empty() {
            md.push_str("No sun advisories for this garden.\n");
            return md;
        }

        md.push_str("## Advisories\n\n");
        for advisory in advisories {
            md.push_str(&format!(
                "### {} {} [{}]\n\n",
                advisory.severity.icon(),
                advisory.title,
                advisory.severity.display_text()
            ));
            md.push_str(&format!("{}  \n", advisory.explanation));
            md.push_str(&format!("*Suggested:* {}\n\n", advisory.suggested_action));
            if !advisory.affected_trees.is_empty() {
                let trees: Vec<String> = advisory.affected_trees.iter().map(|t| t.to_string()).collect();
                md.push_str(&format!("*Trees involved:* {}\n\n", trees.join(", ")));
            }
        }

        md
    }
}
