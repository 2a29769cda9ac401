use gitmentor_app::pipeline::{read_snapshot, run_pipeline, write_snapshot, Report};
use gitmentor_app::render::{report_json, report_text};
use gitmentor_collector::{CollectorConfig, GitHubCollector};
use gitmentor_mentor::{GeminiGenerator, MentorConfig};
use gitmentor_scoring::analyze_detailed;
use gitmentor_test_utils::{commit_activity_json, gemini_reply, repo_json};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn github_server() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("api", Some("Python"), 300, 0, true),
            repo_json("cli", Some("Go"), 50, 4, false),
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/octocat/api/stats/commit_activity"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(commit_activity_json(&[0, 0, 0, 0, 5, 5, 5, 5, 10, 10, 10, 10])),
        )
        .mount(&server)
        .await;
    // Statistics still being computed: contributes no series.
    Mock::given(method("GET"))
        .and(path("/repos/octocat/cli/stats/commit_activity"))
        .respond_with(ResponseTemplate::new(202).set_body_json(json!({})))
        .mount(&server)
        .await;
    server
}

async fn gemini_server() -> MockServer {
    let server = MockServer::start().await;
    let feedback = json!({
        "summary": "Python-first developer",
        "technical_strengths": ["Python"],
        "career_paths": [{ "title": "Backend Python", "compatibility": "High" }]
    });
    let roadmap = json!({
        "career_goal": "Backend Python",
        "essential_fundamentals": ["HTTP"],
        "plan_30_days": { "objectives": ["Build a REST API"], "activities": ["Daily katas"] }
    });
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(body_string_contains("Evaluate this profile analysis"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&feedback.to_string())))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(body_string_contains("learning roadmap for the career goal"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_reply(&roadmap.to_string())))
        .expect(1)
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn analyze_pipeline_end_to_end() {
    let github = github_server().await;
    let gemini = gemini_server().await;

    let collector =
        GitHubCollector::new(CollectorConfig::default().with_api_base(github.uri())).unwrap();
    let generator = GeminiGenerator::new(
        MentorConfig::new("test-key")
            .unwrap()
            .with_base_url(&gemini.uri())
            .unwrap()
            .with_model("gemini-test"),
    )
    .unwrap();

    let (snapshot, report) = run_pipeline(
        &collector,
        Some(&generator),
        "octocat",
        Some("Backend Python"),
        None,
    )
    .await
    .unwrap();

    assert_eq!(snapshot.weekly_commit_activity.len(), 12);
    let analysis = report.analysis();
    assert_eq!(analysis.total_repositories, 2);
    // one repo per language: depth 0.5, diversity 0.4
    assert!((analysis.language_score.value() - 4.6).abs() < 1e-9);
    assert!((analysis.activity_score.value() - 6.0).abs() < 1e-9);
    // api: 0.4 + 0.2, cli: 0.1
    assert!((analysis.project_score.value() - 3.5).abs() < 1e-9);

    let value: Value = serde_json::from_str(&report_json(&report, false).unwrap()).unwrap();
    assert_eq!(value["analysis"]["final_skill_level"], "Intermediate");
    assert_eq!(value["feedback"]["summary"], "Python-first developer");
    assert_eq!(value["roadmap"]["plan_30_days"]["objectives"][0], "Build a REST API");
    assert!(value["roadmap"]["plan_60_days"].is_null());

    let text = report_text(&report, false);
    assert!(text.contains("GitHub profile: octocat"));
    assert!(text.contains("  * Backend Python (compatibility: High)"));
    assert!(text.contains("60-day plan:\n  not provided"));
}

#[test]
fn offline_scoring_from_saved_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("octocat.json");
    std::fs::write(
        &path,
        r#"{
            "languages": {"Python": 8, "Go": 2},
            "repositories": [{"size": 300, "open_issue_count": 0, "has_readme": true, "has_tests": false}],
            "weekly_commit_activity": [0, 0, 0, 0, 5, 5, 5, 5, 10, 10, 10, 10]
        }"#,
    )
    .unwrap();

    let snapshot = read_snapshot(&path).unwrap();
    let report = Report::from_details(None, analyze_detailed(&snapshot));
    assert_eq!(report.analysis().final_score.value(), 6.16);

    let rewritten = dir.path().join("copy.json");
    write_snapshot(&rewritten, &snapshot).unwrap();
    assert_eq!(read_snapshot(&rewritten).unwrap(), snapshot);
}

#[test]
fn snapshot_with_missing_containers_scores_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    std::fs::write(&path, "{}").unwrap();

    let snapshot = read_snapshot(&path).unwrap();
    let details = analyze_detailed(&snapshot);
    assert_eq!(details.result.final_score.value(), 0.0);
    assert_eq!(details.result.total_repositories, 0);
}
