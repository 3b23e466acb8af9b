use axum::{extract::State, response::IntoResponse, Json};

use crate::{
    database::location_ops,
    error::Result,
    AppState, LocationsResponse,
};

// Health check endpoint
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "locanda-backend",
        "timestamp": chrono::Utc::now()
    }))
}

// Location listing endpoint: one SELECT, all rows, named JSON fields
pub async fn list_locations(State(state): State<AppState>) -> Result<Json<LocationsResponse>> {
    let locations = location_ops::list_locations(&state.db)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    Ok(Json(LocationsResponse { locations }))
}

#[cfg(test)]
mod tests {
    use crate::{config::Config, create_app, AppState};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
    use tower::ServiceExt;

    fn test_config() -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            server_address: "127.0.0.1:0".to_string(),
        }
    }

    async fn seeded_db(rows: &[(&str, &str)]) -> DatabaseConnection {
        // One pooled connection: each in-memory sqlite connection is its
        // own database, so the seeded table must stay on the connection
        // that created it.
        let mut opt = ConnectOptions::new("sqlite::memory:".to_string());
        opt.max_connections(1);

        let db = Database::connect(opt).await.unwrap();

        db.execute_unprepared(
            "CREATE TABLE locations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                address TEXT NOT NULL
            )",
        )
        .await
        .unwrap();

        for (name, address) in rows {
            db.execute_unprepared(&format!(
                "INSERT INTO locations (name, address) VALUES ('{}', '{}')",
                name, address
            ))
            .await
            .unwrap();
        }

        db
    }

    async fn get_locations(db: DatabaseConnection) -> (StatusCode, serde_json::Value) {
        let app = create_app(AppState {
            db,
            config: test_config(),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/locations")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn lists_all_rows_with_named_fields_in_order() {
        let db = seeded_db(&[
            ("Trattoria da Enzo", "Via dei Vascellari 29"),
            ("Le Chateaubriand", "129 Avenue Parmentier"),
            ("Katz''s Delicatessen", "205 E Houston St"),
        ])
        .await;

        let (status, body) = get_locations(db).await;

        assert_eq!(status, StatusCode::OK);

        let locations = body["locations"].as_array().unwrap();
        assert_eq!(locations.len(), 3);
        assert_eq!(locations[0]["name"], "Trattoria da Enzo");
        assert_eq!(locations[0]["address"], "Via dei Vascellari 29");
        assert_eq!(locations[1]["name"], "Le Chateaubriand");
        assert_eq!(locations[2]["name"], "Katz's Delicatessen");
    }

    #[tokio::test]
    async fn response_has_exactly_the_locations_key() {
        let db = seeded_db(&[("Noma", "Refshalevej 96")]).await;

        let (_, body) = get_locations(db).await;

        let object = body.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert!(object.contains_key("locations"));
    }

    #[tokio::test]
    async fn empty_table_returns_empty_array() {
        let db = seeded_db(&[]).await;

        let (status, body) = get_locations(db).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, serde_json::json!({ "locations": [] }));
    }

    #[tokio::test]
    async fn repeated_gets_are_identical() {
        let db = seeded_db(&[("Osteria Francescana", "Via Stella 22")]).await;

        let app = create_app(AppState {
            db,
            config: test_config(),
        });

        let mut bodies = Vec::new();
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(
                    Request::builder()
                        .uri("/locations")
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap();
            bodies.push(response.into_body().collect().await.unwrap().to_bytes());
        }

        assert_eq!(bodies[0], bodies[1]);
    }

    #[tokio::test]
    async fn missing_table_surfaces_as_server_error() {
        // No schema created: the query fails at the database layer
        let db = Database::connect("sqlite::memory:").await.unwrap();

        let (status, body) = get_locations(db).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Database error");
        assert!(body["message"].is_string());
    }

    #[tokio::test]
    async fn health_check_reports_healthy() {
        let db = seeded_db(&[]).await;

        let app = create_app(AppState {
            db,
            config: test_config(),
        });

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body = response.into_body().collect().await.unwrap().to_bytes();
        let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body["status"], "healthy");
    }
}
