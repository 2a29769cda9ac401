//! Terminal and JSON rendering of reports.

use gitmentor_mentor::{ProfileFeedback, Roadmap, StudyPlan};
use gitmentor_scoring::{
    ActivityBreakdown, AnalysisResult, DetailedAnalysis, LanguageBreakdown, ProjectBreakdown,
    RepositoryContribution,
};
use serde::Serialize;

use crate::pipeline::Report;

const PLACEHOLDER: &str = "not provided";

fn or_placeholder(value: &str) -> &str {
    if value.trim().is_empty() {
        PLACEHOLDER
    } else {
        value
    }
}

fn push_list(lines: &mut Vec<String>, title: &str, items: &[String]) {
    lines.push(format!("{title}:"));
    if items.is_empty() {
        lines.push(format!("  - {PLACEHOLDER}"));
    }
    for item in items {
        lines.push(format!("  - {item}"));
    }
}

/// Score report with optional factor explanation.
pub fn analysis_text(username: Option<&str>, details: &DetailedAnalysis, explain: bool) -> String {
    let result = &details.result;
    let mut lines = Vec::new();

    if let Some(username) = username {
        lines.push(format!("GitHub profile: {username}"));
    }
    lines.push(format!(
        "Skill level: {} ({} / 10)",
        result.final_skill_level, result.final_score
    ));
    lines.push(String::new());
    lines.push("Scores:".to_string());
    lines.push(format!("  Language  {:>6.2}", result.language_score.value()));
    lines.push(format!("  Activity  {:>6.2}", result.activity_score.value()));
    lines.push(format!("  Projects  {:>6.2}", result.project_score.value()));
    lines.push(format!("  Final     {:>6.2}", result.final_score.value()));
    lines.push(String::new());
    push_main_languages(&mut lines, result);
    lines.push(format!(
        "Repositories analyzed: {}",
        result.total_repositories
    ));

    if explain {
        lines.push(String::new());
        lines.push("Score factors:".to_string());
        push_language_factors(&mut lines, &details.language);
        push_activity_factors(&mut lines, &details.activity);
        push_project_factors(&mut lines, &details.project);
        lines.push(format!(
            "  Final: 0.4 x language + 0.3 x activity + 0.3 x projects = {:.4}",
            details.unrounded_final_score
        ));
    }

    lines.join("\n")
}

fn push_main_languages(lines: &mut Vec<String>, result: &AnalysisResult) {
    lines.push("Main languages:".to_string());
    if result.main_languages.is_empty() {
        lines.push("  (none detected)".to_string());
    }
    for (rank, language) in result.main_languages.iter().enumerate() {
        lines.push(format!(
            "  {}. {} ({} repositories)",
            rank + 1,
            language.name,
            language.count
        ));
    }
}

fn push_language_factors(lines: &mut Vec<String>, language: &LanguageBreakdown) {
    lines.push(format!(
        "  Language: {} languages over {} repositories, depth {:.2}, diversity {:.2}",
        language.distinct_languages,
        language.total_usage,
        language.depth_factor,
        language.diversity_factor
    ));
}

fn push_activity_factors(lines: &mut Vec<String>, activity: &ActivityBreakdown) {
    lines.push(format!(
        "  Activity: {} of {} recent weeks active, {:.2} commits per week (consistency {:.2}, volume {:.2})",
        activity.active_weeks,
        activity.window_weeks,
        activity.average_commits,
        activity.consistency,
        activity.commit_score
    ));
}

fn push_project_factors(lines: &mut Vec<String>, project: &ProjectBreakdown) {
    lines.push(format!(
        "  Projects: average quality {:.2} over {} repositories",
        project.average_quality,
        project.contributions.len()
    ));
    for contribution in &project.contributions {
        lines.push(format!("    - {}", contribution_line(contribution)));
    }
}

fn contribution_line(contribution: &RepositoryContribution) -> String {
    let signals: Vec<&str> = [
        (contribution.large, "large"),
        (contribution.documented, "readme"),
        (contribution.tested, "tests"),
        (contribution.engaged, "open issues"),
    ]
    .into_iter()
    .filter_map(|(present, label)| present.then_some(label))
    .collect();
    let signals = if signals.is_empty() {
        "no signals".to_string()
    } else {
        signals.join(", ")
    };
    format!(
        "{}: {} (+{:.1})",
        contribution.name.as_deref().unwrap_or("(unnamed)"),
        signals,
        contribution.value
    )
}

pub fn feedback_text(feedback: &ProfileFeedback) -> String {
    let mut lines = vec![
        "Profile feedback".to_string(),
        format!("Summary: {}", or_placeholder(&feedback.summary)),
    ];
    push_list(&mut lines, "Technical strengths", &feedback.technical_strengths);
    push_list(&mut lines, "Points to improve", &feedback.improvement_points);
    push_list(
        &mut lines,
        "Short-term suggestions (7-30 days)",
        &feedback.short_term_suggestions,
    );

    lines.push("Career paths:".to_string());
    if feedback.career_paths.is_empty() {
        lines.push(format!("  - {PLACEHOLDER}"));
    }
    for path in &feedback.career_paths {
        lines.push(format!(
            "  * {} (compatibility: {})",
            or_placeholder(&path.title),
            or_placeholder(&path.compatibility)
        ));
        lines.push(format!(
            "      To develop: {}",
            or_placeholder(&path.required_development)
        ));
        lines.push(format!(
            "      Opportunities: {}",
            or_placeholder(&path.market_opportunities)
        ));
    }
    lines.join("\n")
}

pub fn roadmap_text(roadmap: &Roadmap) -> String {
    let mut lines = vec![format!(
        "Learning roadmap: {}",
        or_placeholder(&roadmap.career_goal)
    )];
    push_list(
        &mut lines,
        "Essential fundamentals",
        &roadmap.essential_fundamentals,
    );

    lines.push("Essential tools:".to_string());
    if roadmap.essential_tools.is_empty() {
        lines.push(format!("  - {PLACEHOLDER}"));
    }
    for tool in &roadmap.essential_tools {
        lines.push(format!(
            "  * {} [priority: {}, when: {}]",
            or_placeholder(&tool.name),
            or_placeholder(&tool.priority),
            or_placeholder(&tool.when_to_learn)
        ));
        lines.push(format!(
            "      Market relevance: {}",
            or_placeholder(&tool.market_relevance)
        ));
    }

    lines.push("Practical projects:".to_string());
    if roadmap.practical_projects.is_empty() {
        lines.push(format!("  - {PLACEHOLDER}"));
    }
    for project in &roadmap.practical_projects {
        lines.push(format!("  * {}", or_placeholder(&project.title)));
        lines.push(format!(
            "      Objective: {}",
            or_placeholder(&project.objective)
        ));
        lines.push(format!(
            "      Skills: {}",
            or_placeholder(&project.skills_developed)
        ));
    }

    for (days, plan) in roadmap.plans() {
        push_plan(&mut lines, days, plan);
    }

    lines.push(format!(
        "Expected outcome after 90 days: {}",
        or_placeholder(&roadmap.expected_outcome)
    ));
    lines.join("\n")
}

fn push_plan(lines: &mut Vec<String>, days: u32, plan: Option<&StudyPlan>) {
    lines.push(format!("{days}-day plan:"));
    let Some(plan) = plan else {
        lines.push(format!("  {PLACEHOLDER}"));
        return;
    };
    lines.push("  Objectives:".to_string());
    if plan.objectives.is_empty() {
        lines.push(format!("    - {PLACEHOLDER}"));
    }
    for objective in &plan.objectives {
        lines.push(format!("    - {objective}"));
    }
    lines.push("  Activities:".to_string());
    if plan.activities.is_empty() {
        lines.push(format!("    - {PLACEHOLDER}"));
    }
    for activity in &plan.activities {
        lines.push(format!("    - {activity}"));
    }
}

/// Full text report: scores, then whatever narrative is present.
pub fn report_text(report: &Report, explain: bool) -> String {
    let mut sections = vec![analysis_text(
        report.username.as_deref(),
        &report.details,
        explain,
    )];
    if let Some(feedback) = &report.feedback {
        sections.push(feedback_text(feedback));
    }
    if let Some(roadmap) = &report.roadmap {
        sections.push(roadmap_text(roadmap));
    }
    sections.join("\n\n")
}

#[derive(Serialize)]
struct JsonReport<'a> {
    analysis: &'a AnalysisResult,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Breakdown<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    feedback: Option<&'a ProfileFeedback>,
    #[serde(skip_serializing_if = "Option::is_none")]
    roadmap: Option<&'a Roadmap>,
}

#[derive(Serialize)]
struct Breakdown<'a> {
    language: &'a LanguageBreakdown,
    activity: &'a ActivityBreakdown,
    project: &'a ProjectBreakdown,
    unrounded_final_score: f64,
}

/// `{ "analysis": ..., "feedback": ..., "roadmap": ... }` with absent parts omitted.
pub fn report_json(report: &Report, explain: bool) -> Result<String, serde_json::Error> {
    let details = &report.details;
    let doc = JsonReport {
        analysis: &details.result,
        breakdown: explain.then_some(Breakdown {
            language: &details.language,
            activity: &details.activity,
            project: &details.project,
            unrounded_final_score: details.unrounded_final_score,
        }),
        feedback: report.feedback.as_ref(),
        roadmap: report.roadmap.as_ref(),
    };
    serde_json::to_string_pretty(&doc)
}

pub fn roadmap_json(roadmap: &Roadmap) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&serde_json::json!({ "roadmap": roadmap }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use gitmentor_mentor::{CareerPath, EssentialTool, PracticalProject};
    use gitmentor_scoring::{analyze_detailed, ProfileSnapshot, RepositoryFacts};
    use serde_json::Value;

    fn sample_details() -> DetailedAnalysis {
        let mut snapshot = ProfileSnapshot::new();
        snapshot.languages.insert("Python".into(), 8);
        snapshot.languages.insert("Go".into(), 2);
        snapshot
            .repositories
            .push(RepositoryFacts::new(300, 0, true, false).with_name("api"));
        snapshot.weekly_commit_activity = vec![0, 0, 0, 0, 5, 5, 5, 5, 10, 10, 10, 10];
        analyze_detailed(&snapshot)
    }

    #[test]
    fn analysis_text_lists_scores_and_languages() {
        let text = analysis_text(Some("octocat"), &sample_details(), false);
        assert!(text.starts_with("GitHub profile: octocat\nSkill level: Intermediate (6.16 / 10)"));
        assert!(text.contains("  Language    6.40"));
        assert!(text.contains("  1. Python (8 repositories)"));
        assert!(text.contains("  2. Go (2 repositories)"));
        assert!(text.contains("Repositories analyzed: 1"));
        assert!(!text.contains("Score factors"));
    }

    #[test]
    fn analysis_text_explains_factors() {
        let text = analysis_text(None, &sample_details(), true);
        assert!(!text.contains("GitHub profile"));
        assert!(text.contains("2 languages over 10 repositories, depth 0.80, diversity 0.40"));
        assert!(text.contains("8 of 12 recent weeks active, 5.00 commits per week"));
        assert!(text.contains("    - api: large, readme (+0.6)"));
        assert!(text.contains("= 6.1600"));
    }

    #[test]
    fn empty_profile_renders_without_languages() {
        let details = analyze_detailed(&ProfileSnapshot::new());
        let text = analysis_text(Some("ghost"), &details, true);
        assert!(text.contains("Skill level: Beginner (0.00 / 10)"));
        assert!(text.contains("(none detected)"));
    }

    #[test]
    fn feedback_text_uses_placeholders() {
        let feedback = ProfileFeedback {
            technical_strengths: vec!["Python".into()],
            career_paths: vec![CareerPath {
                title: "Backend".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let text = feedback_text(&feedback);
        assert!(text.contains("Summary: not provided"));
        assert!(text.contains("Technical strengths:\n  - Python"));
        assert!(text.contains("Points to improve:\n  - not provided"));
        assert!(text.contains("  * Backend (compatibility: not provided)"));
    }

    #[test]
    fn roadmap_text_renders_all_sections() {
        let roadmap = Roadmap {
            career_goal: "Backend Python".into(),
            essential_tools: vec![EssentialTool {
                name: "FastAPI".into(),
                priority: "High".into(),
                when_to_learn: "Day 30".into(),
                market_relevance: "Common in startups".into(),
            }],
            practical_projects: vec![PracticalProject {
                title: "Todo API".into(),
                ..Default::default()
            }],
            plan_30_days: Some(StudyPlan {
                objectives: vec!["HTTP basics".into()],
                activities: vec![],
            }),
            ..Default::default()
        };
        let text = roadmap_text(&roadmap);
        assert!(text.starts_with("Learning roadmap: Backend Python"));
        assert!(text.contains("  * FastAPI [priority: High, when: Day 30]"));
        assert!(text.contains("      Objective: not provided"));
        assert!(text.contains("30-day plan:\n  Objectives:\n    - HTTP basics\n  Activities:\n    - not provided"));
        assert!(text.contains("60-day plan:\n  not provided"));
        assert!(text.contains("Expected outcome after 90 days: not provided"));
    }

    #[test]
    fn report_json_omits_absent_parts() {
        let report = Report::from_details(Some("octocat".into()), sample_details());
        let value: Value = serde_json::from_str(&report_json(&report, false).unwrap()).unwrap();
        let object = value.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(value["analysis"]["final_score"], 6.16);
        assert_eq!(value["analysis"]["final_skill_level"], "Intermediate");
    }

    #[test]
    fn report_json_includes_narrative_and_breakdown() {
        let mut report = Report::from_details(None, sample_details());
        report.feedback = Some(ProfileFeedback::default());
        report.roadmap = Some(Roadmap {
            career_goal: "Data".into(),
            ..Default::default()
        });
        let value: Value = serde_json::from_str(&report_json(&report, true).unwrap()).unwrap();
        assert!(value.get("feedback").is_some());
        assert_eq!(value["roadmap"]["career_goal"], "Data");
        assert_eq!(value["breakdown"]["activity"]["active_weeks"], 8);
    }
}
