use anyhow::Result;
use httpmock::prelude::*;
use sample_ops::core::sum::read_numbers_csv;
use sample_ops::utils::validation::Validate;
use sample_ops::{
    checked_sum, get_user_name, save_data, sum, AppConfig, AppError, HttpApi, JsonFileUserStore,
    RemoteApi,
};
use tempfile::TempDir;

#[tokio::test]
async fn test_user_lookup_from_configured_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let users_path = temp_dir.path().join("users.json");
    tokio::fs::write(
        &users_path,
        r#"[
            {"id": 1, "name": "Ada Lovelace", "role": "admin"},
            {"id": 2, "email": "anon@example.com"},
            {"id": 5, "name": {"given": "Grace"}}
        ]"#,
    )
    .await?;

    let config_content = format!(
        "[store]\nusers_file = \"{}\"\n",
        users_path.to_str().unwrap().replace('\\', "/")
    );
    let config = AppConfig::from_toml_str(&config_content)?;
    config.validate()?;

    let store = JsonFileUserStore::load(&config.store.users_file).await?;

    assert_eq!(
        get_user_name(&store, "1").await?.as_deref(),
        Some("Ada Lovelace")
    );
    assert_eq!(get_user_name(&store, "2").await?, None);
    assert_eq!(get_user_name(&store, "3").await?, None);
    assert_eq!(
        get_user_name(&store, "5").await?.as_deref(),
        Some(r#"{"given":"Grace"}"#)
    );
    Ok(())
}

#[tokio::test]
async fn test_save_data_end_to_end_with_config() -> Result<()> {
    std::env::set_var("SAMPLE_OPS_IT_TOKEN", "t0ken");

    let server = MockServer::start();
    let payload = serde_json::json!({"title": "report", "values": [1, 2, 3]});

    let api_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/save")
            .header("authorization", "Bearer t0ken")
            .json_body(payload.clone());
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({"id": "abc", "stored": true}));
    });

    let config_content = format!(
        r#"
[api]
endpoint = "{}"
timeout_seconds = 5
headers = {{ "authorization" = "Bearer ${{SAMPLE_OPS_IT_TOKEN}}" }}
"#,
        server.url("/save")
    );
    let config = AppConfig::from_toml_str(&config_content)?;
    config.validate()?;

    let api = HttpApi::new(config.api.clone());
    let response = save_data(&api, &payload).await?;

    api_mock.assert();
    assert_eq!(response, serde_json::json!({"id": "abc", "stored": true}));

    std::env::remove_var("SAMPLE_OPS_IT_TOKEN");
    Ok(())
}

#[tokio::test]
async fn test_save_data_through_boxed_api_reports_rejection() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(POST).path("/save");
        then.status(409).body("duplicate");
    });

    let config = AppConfig::from_toml_str(&format!(
        "[api]\nendpoint = \"{}\"\nretry_attempts = 3\nretry_delay_seconds = 0\n",
        server.url("/save")
    ))?;
    let api: Box<dyn RemoteApi> = Box::new(HttpApi::new(config.api));

    let err = save_data(api.as_ref(), &serde_json::json!({"k": "v"}))
        .await
        .unwrap_err();

    api_mock.assert_hits(1);
    assert!(matches!(err, AppError::ApiStatusError { status: 409, .. }));
    assert_eq!(err.exit_code(), 1);
    Ok(())
}

#[tokio::test]
async fn test_save_data_unreachable_endpoint() -> Result<()> {
    let config = AppConfig::from_toml_str(
        "[api]\nendpoint = \"http://127.0.0.1:1/save\"\nretry_attempts = 1\nretry_delay_seconds = 0\n",
    )?;
    let api = HttpApi::new(config.api);

    let err = save_data(&api, &serde_json::json!({})).await.unwrap_err();

    assert!(matches!(err, AppError::ApiError(_)));
    assert_eq!(err.exit_code(), 2);
    Ok(())
}

#[tokio::test]
async fn test_sum_numbers_from_csv_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let csv_path = temp_dir.path().join("numbers.csv");
    tokio::fs::write(&csv_path, "value\n1\n2\n3\n4\n").await?;

    let content = tokio::fs::read(&csv_path).await?;
    let numbers = read_numbers_csv(content.as_slice())?;

    assert_eq!(sum(&numbers), 10.0);
    Ok(())
}

#[test]
fn test_sum_properties() {
    assert_eq!(sum(&[1, 2, 3, 4]), 10);
    assert_eq!(sum::<i64>(&[]), 0);
    assert_eq!(sum(&[-5, 5]), 0);

    let values: Vec<i64> = (1..=100).collect();
    let mut shuffled = values.clone();
    shuffled.rotate_left(37);
    shuffled.swap(0, 99);
    assert_eq!(sum(&values), 5050);
    assert_eq!(sum(&values), sum(&shuffled));
    assert_eq!(checked_sum(&values).unwrap(), 5050);
}
