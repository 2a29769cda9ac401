use gitmentor_collector::{CollectorConfig, GitHubCollector, ProfileSource};
use gitmentor_scoring::{analyze, SkillLevel};
use gitmentor_test_utils::{commit_activity_json, repo_json};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn collected_profile_scores_end_to_end() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            repo_json("service", Some("Rust"), 900, 3, true),
            repo_json("service-tests", Some("Rust"), 400, 0, true),
        ])))
        .mount(&server)
        .await;
    for repo in ["service", "service-tests"] {
        Mock::given(method("GET"))
            .and(path(format!("/repos/octocat/{repo}/stats/commit_activity")))
            .respond_with(ResponseTemplate::new(200).set_body_json(commit_activity_json(&[6; 52])))
            .mount(&server)
            .await;
    }

    let collector =
        GitHubCollector::new(CollectorConfig::default().with_api_base(server.uri())).unwrap();
    let snapshot = collector.collect_profile("octocat").await.unwrap();

    assert_eq!(snapshot.weekly_commit_activity.len(), 52);
    assert!(snapshot.weekly_commit_activity.iter().all(|&w| w == 12));

    let result = analyze(&snapshot);
    assert_eq!(result.total_repositories, 2);
    assert_eq!(result.main_languages.len(), 1);
    assert_eq!(result.main_languages[0].count, 2);
    // every recent week active with 12 commits
    assert!((result.activity_score.value() - 10.0).abs() < 1e-9);
    // (0.4 + 0.2 + 0.1) and (0.4 + 0.2 + 0.3) average to 0.8
    assert!((result.project_score.value() - 8.0).abs() < 1e-9);
    // one language: 0.6 * 1.0 + 0.4 * 0.2
    assert!((result.language_score.value() - 6.8).abs() < 1e-9);
    assert_eq!(result.final_skill_level, SkillLevel::Advanced);
}
