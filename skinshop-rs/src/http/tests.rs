#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::module_inception)]
mod tests {
    use std::path::Path;

    use anyhow::Result;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};
    use tempfile::tempdir;
    use tokio::fs;

    use crate::http::{router, AppState};

    fn test_app_state(data_dir: &Path, assets_root: &Path) -> AppState {
        AppState {
            data_dir: data_dir.to_path_buf(),
            assets_root: assets_root.to_path_buf(),
        }
    }

    async fn write_catalog(data_dir: &Path, file_name: &str, document: &Value) -> Result<()> {
        fs::write(data_dir.join(file_name), serde_json::to_vec(document)?).await?;
        Ok(())
    }

    #[tokio::test]
    async fn health_reports_catalog_entry_counts() -> Result<()> {
        let dir = tempdir()?;
        write_catalog(dir.path(), "countries.json", &json!([{ "id": "us" }])).await?;
        write_catalog(
            dir.path(),
            "skins.json",
            &json!([{ "id": 1 }, { "id": 2 }]),
        )
        .await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body.get("status"), Some(&Value::String("ok".into())));
        assert_eq!(body.get("countries"), Some(&Value::Number(1_u64.into())));
        assert_eq!(body.get("skins"), Some(&Value::Number(2_u64.into())));
        Ok(())
    }

    #[tokio::test]
    async fn health_omits_counts_for_unreadable_catalogs() -> Result<()> {
        let dir = tempdir()?;
        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;

        let response = server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body.get("status"), Some(&Value::String("ok".into())));
        assert!(body.get("countries").is_none());
        assert!(body.get("skins").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn countries_returns_backing_file_verbatim() -> Result<()> {
        let dir = tempdir()?;
        let document = json!([{
            "id": "us",
            "logo": "/us.png",
            "title": "United States",
            "payments": [{ "id": "visa", "image": "/visa.png", "type": "CARD" }]
        }]);
        write_catalog(dir.path(), "countries.json", &document).await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let response = server.get("/api/countries").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body, document);
        Ok(())
    }

    #[tokio::test]
    async fn skins_preserves_absent_optional_exterior() -> Result<()> {
        let dir = tempdir()?;
        let document = json!([{
            "id": 1,
            "name": "AK-47 | Redline",
            "price": 12.5,
            "image": "/ak.png"
        }]);
        write_catalog(dir.path(), "skins.json", &document).await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let response = server.get("/api/skins").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body, document);
        assert!(body[0].get("exterior").is_none());
        Ok(())
    }

    #[tokio::test]
    async fn unknown_catalog_fields_pass_through_unchanged() -> Result<()> {
        let dir = tempdir()?;
        let document = json!([{
            "id": 2,
            "name": "AWP | Asiimov",
            "price": 84.9,
            "image": "/awp.png",
            "stattrak": true
        }]);
        write_catalog(dir.path(), "skins.json", &document).await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let body: Value = server.get("/api/skins").await.json();
        assert_eq!(body[0].get("stattrak"), Some(&Value::Bool(true)));
        Ok(())
    }

    #[tokio::test]
    async fn missing_catalog_file_is_service_unavailable() -> Result<()> {
        let dir = tempdir()?;
        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;

        let response = server.get("/api/skins").await;
        assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);

        let body: Value = response.json();
        assert!(body.get("error").is_some());
        Ok(())
    }

    #[tokio::test]
    async fn malformed_catalog_file_is_internal_error() -> Result<()> {
        let dir = tempdir()?;
        fs::write(dir.path().join("countries.json"), b"[{\"id\": \"us\",]").await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let response = server.get("/api/countries").await;
        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: Value = response.json();
        assert!(body.get("error").is_some());
        Ok(())
    }

    #[tokio::test]
    async fn repeated_reads_are_idempotent() -> Result<()> {
        let dir = tempdir()?;
        let document = json!([{ "id": 1, "name": "M4A4 | Howl", "price": 3999.0, "image": "/howl.png" }]);
        write_catalog(dir.path(), "skins.json", &document).await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let first = server.get("/api/skins").await;
        let second = server.get("/api/skins").await;

        assert_eq!(first.status_code(), StatusCode::OK);
        assert_eq!(first.text(), second.text());
        Ok(())
    }

    #[tokio::test]
    async fn catalog_changes_are_visible_without_restart() -> Result<()> {
        let dir = tempdir()?;
        write_catalog(dir.path(), "skins.json", &json!([])).await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let before: Value = server.get("/api/skins").await.json();
        assert_eq!(before, json!([]));

        write_catalog(
            dir.path(),
            "skins.json",
            &json!([{ "id": 1, "name": "Glock-18 | Fade", "price": 900.0, "image": "/glock.png" }]),
        )
        .await?;

        let after: Value = server.get("/api/skins").await.json();
        assert_eq!(after.as_array().map(Vec::len), Some(1));
        Ok(())
    }

    #[tokio::test]
    async fn alias_routes_serve_the_same_catalog() -> Result<()> {
        let dir = tempdir()?;
        let document = json!([{ "id": "de", "logo": "/de.png", "title": "Germany", "payments": [] }]);
        write_catalog(dir.path(), "countries.json", &document).await?;

        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;
        let api: Value = server.get("/api/countries").await.json();
        let alias: Value = server.get("/countries").await.json();
        assert_eq!(api, alias);
        Ok(())
    }

    #[tokio::test]
    async fn sort_options_lists_the_canonical_pair() -> Result<()> {
        let dir = tempdir()?;
        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;

        let response = server.get("/api/sort-options").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        let options = body.as_array().cloned().unwrap_or_default();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].get("value"), Some(&Value::String("ASC".into())));
        assert_eq!(options[1].get("value"), Some(&Value::String("DESC".into())));
        Ok(())
    }

    #[tokio::test]
    async fn payment_stages_follow_wizard_order() -> Result<()> {
        let dir = tempdir()?;
        let server = TestServer::new(router(test_app_state(dir.path(), dir.path())))?;

        let response = server.get("/api/payment-stages").await;
        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        let values = body
            .as_array()
            .cloned()
            .unwrap_or_default()
            .iter()
            .filter_map(|stage| stage.get("value").and_then(Value::as_str).map(String::from))
            .collect::<Vec<_>>();
        assert_eq!(values, vec!["METHOD", "DETAILS", "CONFIRMATION", "TRANSFER"]);
        Ok(())
    }

    #[tokio::test]
    async fn asset_is_served_with_immutable_cache_headers() -> Result<()> {
        let data = tempdir()?;
        let assets = tempdir()?;
        fs::create_dir_all(assets.path().join("skins")).await?;
        fs::write(assets.path().join("skins/ak47-redline.svg"), b"<svg/>").await?;

        let server = TestServer::new(router(test_app_state(data.path(), assets.path())))?;
        let response = server.get("/assets/skins/ak47-redline.svg").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header("content-type"), "image/svg+xml");
        assert_eq!(
            response.header("cache-control"),
            "public, max-age=604800, immutable"
        );
        assert_eq!(response.text(), "<svg/>");
        Ok(())
    }

    #[tokio::test]
    async fn asset_traversal_is_rejected() -> Result<()> {
        let data = tempdir()?;
        let assets = tempdir()?;
        fs::write(assets.path().join("flag.svg"), b"<svg/>").await?;

        let server = TestServer::new(router(test_app_state(data.path(), assets.path())))?;
        let response = server.get("/assets/%2e%2e/flag.svg").await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn missing_asset_is_not_found() -> Result<()> {
        let data = tempdir()?;
        let assets = tempdir()?;

        let server = TestServer::new(router(test_app_state(data.path(), assets.path())))?;
        let response = server.get("/assets/skins/nope.svg").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        Ok(())
    }
}
