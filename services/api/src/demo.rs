use std::path::PathBuf;
use std::sync::Arc;

use chrono::SecondsFormat;
use clap::Args;

use crate::infra::{InMemoryMatchLedger, InMemoryProfileDirectory};
use devmatch::error::AppError;
use devmatch::matching::{
    intake, score_match, DeveloperRecord, DeveloperSubmission, MatchService, ProjectSubmission,
    RecommendationPolicy, RequirementSubmission, SkillSubmission,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Number of recommendations to display (defaults to the policy default)
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Skip the acceptance portion of the demo
    #[arg(long)]
    pub(crate) skip_acceptance: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a developer JSON document
    #[arg(long)]
    pub(crate) developer: PathBuf,
    /// Path to a project JSON document
    #[arg(long)]
    pub(crate) project: PathBuf,
}

pub(crate) fn run_score_report(args: ScoreArgs) -> Result<(), AppError> {
    let developer_payload = std::fs::read_to_string(&args.developer)?;
    let project_payload = std::fs::read_to_string(&args.project)?;

    let developer = intake::developer_from_json(&developer_payload)?;
    let project = intake::project_from_json(&project_payload)?;

    let outcome = score_match(
        &developer.profile,
        &developer.skills,
        &project.minimums,
        &project.requirements,
    );

    println!(
        "Scoring {} against {} at {}",
        developer.profile.name, project.project_name, project.company_name
    );
    println!(
        "Decision: {} | score {} ({})",
        outcome.decision.summary(),
        outcome.score,
        outcome.band().label()
    );
    println!("\n{}", outcome.explanation());

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        limit,
        skip_acceptance,
    } = args;

    println!("Developer match demo");

    let directory = Arc::new(InMemoryProfileDirectory::default());
    let ledger = Arc::new(InMemoryMatchLedger::default());
    let service = MatchService::new(directory, ledger, RecommendationPolicy::default());

    let project = match service.register_project(demo_project()) {
        Ok(project) => project,
        Err(err) => {
            println!("  Project rejected: {err}");
            return Ok(());
        }
    };
    println!(
        "\nProject {} at {} ({})",
        project.project_name, project.company_name, project.id
    );
    println!(
        "Minimum total career: {:.1} years",
        project.minimums.min_total_career
    );
    println!("Requirements:");
    for requirement in &project.requirements {
        let kind = if requirement.mandatory {
            "mandatory"
        } else {
            "optional"
        };
        println!(
            "  - {} ({}): level {}+, years {:.1}+, weight {}, {}",
            requirement.skill,
            requirement.category.label(),
            requirement.min_level,
            requirement.min_years,
            requirement.weight,
            kind
        );
    }

    println!();
    let mut registered: Vec<DeveloperRecord> = Vec::new();
    for submission in demo_candidates() {
        match service.register_developer(submission) {
            Ok(record) => {
                println!(
                    "Registered {} [{}] with {} skills ({})",
                    record.profile.name,
                    record.profile.role,
                    record.skills.len(),
                    record.id
                );
                registered.push(record);
            }
            Err(err) => println!("  Candidate rejected: {err}"),
        }
    }

    let ranked = match service.recommend(&project.id, limit) {
        Ok(ranked) => ranked,
        Err(err) => {
            println!("  Recommendations unavailable: {err}");
            return Ok(());
        }
    };

    println!("\nRecommendations for {}", project.project_name);
    if ranked.is_empty() {
        println!("  No eligible candidates");
    }
    for (position, candidate) in ranked.iter().enumerate() {
        let view = candidate.view();
        println!(
            "  {}. {} [{}] -> score {} ({})",
            position + 1,
            view.name,
            view.role,
            view.score,
            view.band
        );
        for line in view.explanation.lines().skip(1) {
            println!("       {line}");
        }
    }

    let excluded: Vec<&DeveloperRecord> = registered
        .iter()
        .filter(|record| {
            !ranked
                .iter()
                .any(|candidate| candidate.developer.id == record.id)
        })
        .collect();
    println!("\nExcluded candidates");
    if excluded.is_empty() {
        println!("  none");
    }
    for record in &excluded {
        let outcome = score_match(
            &record.profile,
            &record.skills,
            &project.minimums,
            &project.requirements,
        );
        println!(
            "  - {}: {}",
            record.profile.name,
            outcome.decision.summary()
        );
    }

    if skip_acceptance {
        return Ok(());
    }

    println!("\nAcceptance");
    if let Some(best) = ranked.first() {
        match service.accept_match(&project.id, &best.developer.id) {
            Ok(record) => println!(
                "  Accepted {} -> score {} recorded at {}",
                best.developer.profile.name,
                record.score,
                record.recorded_at.to_rfc3339_opts(SecondsFormat::Secs, true)
            ),
            Err(err) => println!("  Acceptance failed: {err}"),
        }
    }
    if let Some(ineligible) = excluded.first() {
        match service.accept_match(&project.id, &ineligible.id) {
            Ok(_) => println!("  Unexpectedly accepted {}", ineligible.profile.name),
            Err(err) => println!("  Refused {}: {err}", ineligible.profile.name),
        }
    }

    match service.saved_matches() {
        Ok(saved) => match serde_json::to_string_pretty(&saved) {
            Ok(json) => println!("\nSaved matches payload:\n{json}"),
            Err(err) => println!("  Saved matches payload unavailable: {err}"),
        },
        Err(err) => println!("  Ledger unavailable: {err}"),
    }

    Ok(())
}

fn demo_project() -> ProjectSubmission {
    ProjectSubmission {
        company_name: "Hanbit Retail".to_string(),
        industry: Some("commerce".to_string()),
        project_name: "Commerce API Revamp".to_string(),
        description: "Rebuild the storefront order APIs before peak season.".to_string(),
        min_total_career: 3.0,
        requirements: vec![
            requirement("Java", "language", 4, 3.0, 5, true),
            requirement("Spring Boot", "framework", 3, 2.0, 3, true),
            requirement("PostgreSQL", "db", 3, 2.0, 2, true),
            requirement("Kubernetes", "tool", 2, 1.0, 2, false),
            requirement("Kafka", "tool", 2, 1.0, 1, false),
        ],
    }
}

fn demo_candidates() -> Vec<DeveloperSubmission> {
    vec![
        candidate(
            "Ji-won Park",
            "backend",
            7.0,
            Some("Order platform lead"),
            vec![
                skill("Java", "language", 5, 6.0, true),
                skill("Spring Boot", "framework", 4, 4.0, false),
                skill("PostgreSQL", "db", 4, 5.0, false),
                skill("Kubernetes", "tool", 3, 2.0, false),
                skill("Kafka", "tool", 3, 2.0, false),
            ],
        ),
        candidate(
            "Sofia Brandt",
            "backend",
            6.0,
            None,
            vec![
                skill("Java", "language", 4, 4.0, true),
                skill("Spring Boot", "framework", 3, 3.0, false),
                skill("PostgreSQL", "db", 3, 2.0, false),
                skill("Kafka", "tool", 2, 1.0, false),
            ],
        ),
        candidate(
            "Marcus Lee",
            "backend",
            4.0,
            None,
            vec![
                skill("Java", "language", 4, 3.0, true),
                skill("Spring Boot", "framework", 3, 2.0, false),
                skill("PostgreSQL", "db", 3, 2.0, false),
            ],
        ),
        candidate(
            "Priya Nair",
            "backend",
            2.0,
            Some("Fast-rising junior"),
            vec![
                skill("Java", "language", 4, 2.0, true),
                skill("Spring Boot", "framework", 3, 1.5, false),
            ],
        ),
        candidate(
            "Tom Ochieng",
            "data",
            8.0,
            None,
            vec![
                skill("Python", "language", 5, 8.0, true),
                skill("PostgreSQL", "db", 5, 7.0, false),
            ],
        ),
        candidate(
            "Elena Vasquez",
            "backend",
            6.0,
            None,
            vec![
                skill("Java", "language", 3, 4.0, true),
                skill("Spring Boot", "framework", 3, 3.0, false),
                skill("PostgreSQL", "db", 4, 4.0, false),
            ],
        ),
    ]
}

fn candidate(
    name: &str,
    role: &str,
    total_career_years: f64,
    headline: Option<&str>,
    skills: Vec<SkillSubmission>,
) -> DeveloperSubmission {
    DeveloperSubmission {
        name: name.to_string(),
        role: role.to_string(),
        total_career_years,
        headline: headline.map(str::to_string),
        skills,
    }
}

fn skill(
    name: &str,
    category: &str,
    level: i64,
    experience_years: f64,
    is_primary: bool,
) -> SkillSubmission {
    SkillSubmission {
        name: name.to_string(),
        category: category.to_string(),
        level,
        experience_years,
        is_primary,
    }
}

fn requirement(
    skill: &str,
    category: &str,
    min_level: i64,
    min_years: f64,
    weight: i64,
    mandatory: bool,
) -> RequirementSubmission {
    RequirementSubmission {
        skill: skill.to_string(),
        category: category.to_string(),
        min_level,
        min_years,
        weight,
        mandatory,
    }
}
