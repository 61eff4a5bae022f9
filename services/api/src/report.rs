use crate::infra::load_catalog;
use clap::Args;
use lift_advisor::error::AppError;
use lift_advisor::workflows::catalog::{CatalogStore, EquipmentSpec};
use lift_advisor::workflows::recommendation::{
    RawJobRequirement, Recommendation, RecommendationService,
};
use std::path::PathBuf;

/// Job requirement flags. Values are passed to the normalizer untouched, so blank or
/// unparsable input is treated as unspecified rather than rejected.
#[derive(Args, Debug, Default)]
pub(crate) struct RequirementArgs {
    /// Required working height in metres
    #[arg(long)]
    pub(crate) height: Option<String>,
    /// Required horizontal outreach in metres
    #[arg(long)]
    pub(crate) outreach: Option<String>,
    /// Access type: door, corridor, gate or elevator
    #[arg(long)]
    pub(crate) access: Option<String>,
    /// Narrowest access width in centimetres
    #[arg(long)]
    pub(crate) access_width: Option<String>,
    /// Lowest access height in centimetres
    #[arg(long)]
    pub(crate) access_height: Option<String>,
    /// Elevator load limit in kilograms
    #[arg(long)]
    pub(crate) elevator_max_kg: Option<String>,
    /// Elevator cab width in centimetres
    #[arg(long)]
    pub(crate) elevator_cab_width: Option<String>,
    /// Elevator cab depth in centimetres
    #[arg(long)]
    pub(crate) elevator_cab_depth: Option<String>,
    /// Terrain: flat, mixed or irregular
    #[arg(long)]
    pub(crate) terrain: Option<String>,
    /// The job is indoors
    #[arg(long)]
    pub(crate) indoor: bool,
    /// Job type: maintenance, installation, construction or inspection
    #[arg(long)]
    pub(crate) job_type: Option<String>,
    /// Free-text notes for the quote
    #[arg(long)]
    pub(crate) notes: Option<String>,
    /// The site restricts emissions or noise
    #[arg(long)]
    pub(crate) emissions_restricted: bool,
    /// The basket must reach below the outrigger level
    #[arg(long)]
    pub(crate) negative_access: bool,
    /// Ground slope value
    #[arg(long)]
    pub(crate) slope: Option<String>,
    /// Unit for --slope: deg or pct
    #[arg(long)]
    pub(crate) slope_unit: Option<String>,
}

impl RequirementArgs {
    pub(crate) fn to_raw(&self) -> RawJobRequirement {
        let flag = |set: bool| set.then(|| "yes".to_string());
        RawJobRequirement {
            height_m: self.height.clone(),
            outreach_m: self.outreach.clone(),
            access_type: self.access.clone(),
            access_width_cm: self.access_width.clone(),
            access_height_cm: self.access_height.clone(),
            elevator_max_kg: self.elevator_max_kg.clone(),
            elevator_cab_width_cm: self.elevator_cab_width.clone(),
            elevator_cab_depth_cm: self.elevator_cab_depth.clone(),
            terrain: self.terrain.clone(),
            indoor: flag(self.indoor),
            job_type: self.job_type.clone(),
            notes: self.notes.clone(),
            emissions_restriction: flag(self.emissions_restricted),
            needs_negative_access: flag(self.negative_access),
            slope_value: self.slope.clone(),
            slope_unit: self.slope_unit.clone(),
        }
    }
}

#[derive(Args, Debug, Default)]
pub(crate) struct RecommendArgs {
    #[command(flatten)]
    pub(crate) requirement: RequirementArgs,
    /// CSV catalog export to rank instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the recommendation as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// CSV catalog export to list instead of the built-in catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

pub(crate) fn run_recommendation(args: RecommendArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    let service = RecommendationService::new(catalog);
    let recommendation = service.recommend(&args.requirement.to_raw());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&recommendation)?);
    } else {
        println!("{}", recommendation_report(&recommendation));
    }

    Ok(())
}

pub(crate) fn run_catalog_listing(args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load_catalog(args.catalog.as_deref())?;
    println!("{}", catalog_report(&catalog));
    Ok(())
}

pub(crate) fn recommendation_report(recommendation: &Recommendation) -> String {
    let job = &recommendation.requirement;
    let mut lines = vec![
        "Job requirement".to_string(),
        format!("- Working height: {} m", job.height_m),
    ];

    if let Some(outreach) = job.outreach_m {
        lines.push(format!("- Outreach: {outreach} m"));
    }
    lines.push(format!(
        "- Access: {} ({} cm wide)",
        job.access.label(),
        job.access_width_cm
    ));
    if let Some(height) = job.access_height_cm {
        lines.push(format!("- Access height: {height} cm"));
    }
    if let Some(elevator) = job.elevator() {
        let describe = |value: Option<f64>, unit: &str| match value {
            Some(value) => format!("{value} {unit}"),
            None => "n/a".to_string(),
        };
        lines.push(format!(
            "- Elevator: max {} | cab {} x {}",
            describe(elevator.max_load_kg, "kg"),
            describe(elevator.cab_width_cm, "cm"),
            describe(elevator.cab_depth_cm, "cm")
        ));
    }
    lines.push(format!(
        "- {} | {} | terrain {}",
        job.job_type.label(),
        if job.indoor { "Indoor" } else { "Outdoor" },
        job.terrain.label()
    ));
    if let Some(slope) = job.slope_deg {
        lines.push(format!("- Slope: {slope:.1}°"));
    }

    match recommendation.top() {
        None => lines.push("\nNo equipment in the catalog.".to_string()),
        Some(top) => {
            if top.has_warnings() {
                lines.push(
                    "\nNo model meets every constraint; showing the best available options."
                        .to_string(),
                );
            }

            lines.push("\nRecommended equipment".to_string());
            for (position, candidate) in recommendation.candidates.iter().enumerate() {
                lines.push(format!(
                    "{}. {} (score {:.1})",
                    position + 1,
                    candidate.equipment.name,
                    candidate.score
                ));
                lines.extend(candidate.reasons.iter().map(|reason| format!("   + {reason}")));
                lines.extend(
                    candidate
                        .warnings
                        .iter()
                        .map(|warning| format!("   ! {warning}")),
                );
            }
        }
    }

    lines.join("\n")
}

pub(crate) fn catalog_report(catalog: &CatalogStore) -> String {
    let mut lines = vec![format!("Equipment catalog ({} models)", catalog.len())];
    lines.extend(catalog.models().iter().map(catalog_line));
    lines.join("\n")
}

fn catalog_line(model: &EquipmentSpec) -> String {
    let negative = if model.supports_negative_access {
        " | negative access"
    } else {
        ""
    };
    format!(
        "- {} | {} m height | {} m outreach | {} cm access | {} kg | {}{}",
        model.name,
        model.max_working_height_m,
        model.max_outreach_m,
        model.min_access_width_cm,
        model.weight_kg,
        model.power_description,
        negative
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use lift_advisor::workflows::catalog::standard_catalog;

    fn recommend(args: RequirementArgs) -> Recommendation {
        RecommendationService::new(standard_catalog()).recommend(&args.to_raw())
    }

    #[test]
    fn report_lists_candidates_with_findings() {
        let recommendation = recommend(RequirementArgs {
            height: Some("16".to_string()),
            access_width: Some("80".to_string()),
            ..RequirementArgs::default()
        });

        let report = recommendation_report(&recommendation);

        assert!(report.contains("1. PSO-18BL (score 62.6)"));
        assert!(report.contains("   + Reaches the working height"));
        assert!(report.contains("   ! Does not fit through the access"));
        assert!(!report.contains("No model meets every constraint"));
    }

    #[test]
    fn report_flags_best_effort_results() {
        let recommendation = recommend(RequirementArgs {
            height: Some("40".to_string()),
            access_width: Some("120".to_string()),
            ..RequirementArgs::default()
        });

        let report = recommendation_report(&recommendation);

        assert!(report.contains("No model meets every constraint"));
        assert_eq!(recommendation.candidates.len(), 3);
    }

    #[test]
    fn report_keeps_section_order() {
        let recommendation = recommend(RequirementArgs {
            height: Some("9".to_string()),
            access_width: Some("100".to_string()),
            slope: Some("3".to_string()),
            ..RequirementArgs::default()
        });

        let report = recommendation_report(&recommendation);
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines[0], "Job requirement");
        assert_eq!(lines[1], "- Working height: 9 m");
        assert!(lines.contains(&"- Slope: 3.0°"));
        let header = lines
            .iter()
            .position(|line| *line == "Recommended equipment")
            .expect("candidates section");
        assert!(lines[header + 1].starts_with("1. "));
        assert!(!report.ends_with('\n'));
    }

    #[test]
    fn report_handles_empty_catalog() {
        let empty = CatalogStore::new(Vec::new()).expect("empty catalog is valid");
        let recommendation =
            RecommendationService::new(empty).recommend(&RawJobRequirement::default());

        assert!(recommendation_report(&recommendation).contains("No equipment in the catalog."));
    }

    #[test]
    fn catalog_report_marks_negative_access() {
        let report = catalog_report(&standard_catalog());

        assert!(report.starts_with("Equipment catalog (6 models)"));
        assert!(report.contains("- PSO-11BL | 10.8 m height"));
        assert_eq!(report.matches("negative access").count(), 1);
    }
}
