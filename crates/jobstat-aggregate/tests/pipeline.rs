use jobstat_aggregate::StatsAggregator;
use jobstat_fetch::{HeadHunter, HeadHunterConfig, HttpClient, PageThrottle, SuperJob, SuperJobConfig};
use jobstat_languages::LanguageRegistry;
use jobstat_types::{JobstatError, LanguageStats};
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init() {
    let _ = pretty_env_logger::formatted_timed_builder()
        .filter_level(log::LevelFilter::Trace)
        .is_test(true)
        .try_init();
}

fn registry() -> LanguageRegistry {
    LanguageRegistry::from_json(
        r#"{"languages": ["Python", "Go"], "aliases": {"Go": ["Go", "Golang"]}}"#,
    )
    .unwrap()
}

async fn mount_hh(server: &MockServer, text: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(query_param("text", text))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn headhunter_report_for_python_and_go() {
    init();
    let server = MockServer::start().await;
    mount_hh(
        &server,
        "Python",
        json!({
            "found": 50,
            "pages": 1,
            "items": [
                {"id": "1", "salary": {"from": 80000, "to": 120000, "currency": "RUR"}},
                {"id": "2", "salary": {"from": null, "to": 125000, "currency": "RUR"}},
                {"id": "3", "salary": null}
            ]
        }),
    )
    .await;
    mount_hh(
        &server,
        "Go",
        json!({
            "found": 20,
            "pages": 1,
            "items": [
                {"id": "10", "salary": {"from": 200000, "to": 300000, "currency": "RUR"}},
                {"id": "11", "salary": {"from": 3000, "to": 5000, "currency": "USD"}}
            ]
        }),
    )
    .await;
    mount_hh(
        &server,
        "Golang",
        json!({
            "found": 5,
            "pages": 1,
            "items": [
                {"id": "10", "salary": {"from": 200000, "to": 300000, "currency": "RUR"}},
                {"id": "12", "salary": {"from": 150000, "to": null, "currency": "RUR"}}
            ]
        }),
    )
    .await;

    let config = HeadHunterConfig {
        base_url: server.uri(),
        ..HeadHunterConfig::default()
    };
    let source = HeadHunter::new(HttpClient::with_defaults().unwrap(), config);
    let registry = registry();
    let report = StatsAggregator::new(&source, &registry)
        .with_throttle(PageThrottle::none())
        .run(registry.languages())
        .await
        .unwrap();

    assert_eq!(report.provider, "HeadHunter");
    assert_eq!(
        report.get("Python"),
        Some(&LanguageStats {
            vacancies_found: 50,
            vacancies_processed: 2,
            average_salary: 100_000,
        })
    );
    // 250_000 and 180_000 from the merged, deduplicated Go vacancies.
    assert_eq!(
        report.get("Go"),
        Some(&LanguageStats {
            vacancies_found: 25,
            vacancies_processed: 2,
            average_salary: 215_000,
        })
    );
}

#[tokio::test]
async fn superjob_failure_yields_no_report() {
    init();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut config = SuperJobConfig::new("key");
    config.base_url = server.uri();
    let source = SuperJob::new(HttpClient::with_defaults().unwrap(), config);
    let registry = registry();
    let result = StatsAggregator::new(&source, &registry)
        .with_throttle(PageThrottle::none())
        .run(registry.languages())
        .await;

    match result {
        Err(JobstatError::Fetch(message)) => {
            assert!(message.contains("SuperJob"));
            assert!(message.contains("500"));
        }
        other => panic!("unexpected result: {other:?}"),
    }
}
