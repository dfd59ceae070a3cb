use std::net::SocketAddr;

use configs::{AppConfig, DatabaseConfig};
use reqwest::StatusCode;
use serde_json::{json, Value};
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
    client: reqwest::Client,
}

impl TestApp {
    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post(&self, path: &str, body: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.post(self.url(path)).json(&body).send().await?)
    }

    async fn patch(&self, path: &str, ops: Value) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.patch(self.url(path)).json(&ops).send().await?)
    }

    async fn get(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.get(self.url(path)).send().await?)
    }

    async fn delete(&self, path: &str) -> anyhow::Result<reqwest::Response> {
        Ok(self.client.delete(self.url(path)).send().await?)
    }

    async fn create(&self, path: &str, body: Value) -> anyhow::Result<Value> {
        let res = self.post(path, body).await?;
        assert_eq!(res.status(), StatusCode::CREATED, "POST {path}");
        Ok(res.json().await?)
    }
}

/// Every test gets its own server and its own in-memory database.
async fn start_server() -> anyhow::Result<TestApp> {
    let cfg = AppConfig { database: DatabaseConfig::in_memory(), ..AppConfig::default() };
    let db = server::startup::prepare_database(&cfg).await?;
    let app = server::startup::build_app(db);

    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url: format!("http://{}", addr), client: reqwest::Client::new() })
}

async fn customer(app: &TestApp, name: &str) -> anyhow::Result<i64> {
    let body = app.create("/api/customers", json!({ "name": name })).await?;
    Ok(body["id"].as_i64().expect("id"))
}

async fn location(app: &TestApp, customer_id: i64, name: &str) -> anyhow::Result<i64> {
    let body = app
        .create("/api/service-locations", json!({ "customerId": customer_id, "name": name, "address": "1 Elm St" }))
        .await?;
    Ok(body["id"].as_i64().expect("id"))
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.get("/health").await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert_eq!(body, json!({ "status": "ok" }));
    Ok(())
}

#[tokio::test]
async fn e2e_openapi_document_is_served() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.get("/api-docs/openapi.json").await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await?;
    assert!(body["paths"]["/api/service-locations/{locationId}/features"].is_object());
    Ok(())
}

#[tokio::test]
async fn e2e_customer_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.post("/api/customers", json!({ "name": "Jane Smith" })).await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let id = {
        let location = res.headers()["location"].to_str()?.to_string();
        let body: Value = res.json().await?;
        let id = body["id"].as_i64().expect("id");
        assert!(id > 0);
        assert_eq!(body["name"], "Jane Smith");
        assert_eq!(location, format!("/api/customers/{}", id));
        id
    };

    let list: Vec<Value> = app.get("/api/customers").await?.json().await?;
    assert_eq!(list.len(), 1);

    let res = app.patch(&format!("/api/customers/{id}"), json!([{ "op": "replace", "path": "/name", "value": "Jane Doe" }])).await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let body: Value = app.get(&format!("/api/customers/{id}")).await?.json().await?;
    assert_eq!(body, json!({ "id": id, "name": "Jane Doe" }));

    let res = app.delete(&format!("/api/customers/{id}")).await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = app.get(&format!("/api/customers/{id}")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_admin_names_are_business_rule_violations() -> anyhow::Result<()> {
    let app = start_server().await?;

    for name in ["admin", "Site Administrator", "ADMIN team"] {
        let res = app.post("/api/contractors", json!({ "name": name })).await?;
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY, "{name}");
        let body: Value = res.json().await?;
        assert_eq!(body["status"], 422);
        assert_eq!(body["errors"]["name"][0], "Name cannot contain 'admin'");
    }

    let id = app.create("/api/contractors", json!({ "name": "Green Thumb" })).await?["id"].as_i64().expect("id");
    let res = app.patch(&format!("/api/contractors/{id}"), json!([{ "op": "replace", "path": "/name", "value": "admin" }])).await?;
    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: Value = app.get(&format!("/api/contractors/{id}")).await?.json().await?;
    assert_eq!(body["name"], "Green Thumb");
    Ok(())
}

#[tokio::test]
async fn e2e_customers_and_contractors_are_separate() -> anyhow::Result<()> {
    let app = start_server().await?;
    let contractor = app.create("/api/contractors", json!({ "name": "John's Landscaping" })).await?;
    let id = contractor["id"].as_i64().expect("id");

    let res = app.get(&format!("/api/customers/{id}")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], format!("User with ID {} not found.", id));
    assert_eq!(body["instance"], format!("/api/customers/{}", id));

    let customers: Vec<Value> = app.get("/api/customers").await?.json().await?;
    assert!(customers.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_structural_validation_and_bad_input() -> anyhow::Result<()> {
    let app = start_server().await?;

    let res = app.post("/api/customers", json!({ "name": null })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["errors"]["name"][0], "Name is required");

    let res = app.post("/api/customers", json!({ "name": "x".repeat(101) })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.post("/api/customers", json!({ "name": "Jane", "nickname": "JJ" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let res = app.post("/api/customers", json!({ "name": "   " })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["errors"]["name"][0], "Name is required");

    let res = app.get("/api/customers/not-a-number").await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["title"], "Bad Request");
    Ok(())
}

#[tokio::test]
async fn e2e_service_location_validation_and_create() -> anyhow::Result<()> {
    let app = start_server().await?;
    let jane = customer(&app, "Jane Smith").await?;

    let res = app.post("/api/service-locations", json!({ "customerId": jane, "name": null, "address": "1 Elm St" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["errors"]["name"][0], "Name is required");

    let res = app.post("/api/service-locations", json!({ "customerId": jane, "name": "Home", "address": null })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["errors"]["address"][0], "Address is required");

    let created = app
        .create("/api/service-locations", json!({ "customerId": jane, "name": "Home", "address": "1 Elm St" }))
        .await?;
    assert!(created["id"].as_i64().expect("id") > 0);
    assert_eq!(created["customerId"], jane);
    assert_eq!(created["name"], "Home");
    assert_eq!(created["address"], "1 Elm St");

    let res = app.post("/api/service-locations", json!({ "customerId": 9999, "name": "Ghost", "address": "0 Void Rd" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["title"], "Invalid Operation");
    Ok(())
}

#[tokio::test]
async fn e2e_locations_filter_by_customer() -> anyhow::Result<()> {
    let app = start_server().await?;
    let jane = customer(&app, "Jane Smith").await?;
    let bob = customer(&app, "Bob").await?;
    let carol = customer(&app, "Carol").await?;
    let home = location(&app, jane, "Home").await?;
    let cabin = location(&app, jane, "Cabin").await?;
    location(&app, bob, "Office").await?;

    let janes: Vec<Value> = app.get(&format!("/api/service-locations?customerId={jane}")).await?.json().await?;
    let ids: Vec<i64> = janes.iter().map(|l| l["id"].as_i64().expect("id")).collect();
    assert_eq!(ids, vec![home, cabin]);

    let none: Vec<Value> = app.get(&format!("/api/service-locations?customerId={carol}")).await?.json().await?;
    assert!(none.is_empty());

    let all: Vec<Value> = app.get("/api/service-locations").await?.json().await?;
    assert_eq!(all.len(), 3);
    Ok(())
}

#[tokio::test]
async fn e2e_feature_patch_persists_changed_members_only() -> anyhow::Result<()> {
    let app = start_server().await?;
    let jane = customer(&app, "Jane Smith").await?;
    let loc = location(&app, jane, "Home").await?;
    let base = format!("/api/service-locations/{loc}/features");

    let res = app
        .post(&base, json!({ "featureType": "Trees", "measurement": 3, "unit": "Count", "description": "oaks" }))
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    assert!(res.headers()["location"].to_str()?.starts_with(&base));
    let feature: Value = res.json().await?;
    let fid = feature["id"].as_i64().expect("id");
    assert_eq!(feature["locationId"], loc);

    let res = app
        .patch(
            &format!("{base}/{fid}"),
            json!([
                { "op": "replace", "path": "/measurement", "value": 5.5 },
                { "op": "replace", "path": "/description", "value": "oaks and maples" }
            ]),
        )
        .await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let after: Value = app.get(&format!("{base}/{fid}")).await?.json().await?;
    assert_eq!(after["measurement"], 5.5);
    assert_eq!(after["description"], "oaks and maples");
    assert_eq!(after["featureType"], "Trees");
    assert_eq!(after["unit"], "Count");
    assert_eq!(after["locationId"], loc);
    Ok(())
}

#[tokio::test]
async fn e2e_rejected_patch_persists_nothing() -> anyhow::Result<()> {
    let app = start_server().await?;
    let jane = customer(&app, "Jane Smith").await?;
    let loc = location(&app, jane, "Home").await?;
    let path = format!("/api/service-locations/{loc}");

    let failed_test = json!([
        { "op": "replace", "path": "/name", "value": "Changed" },
        { "op": "test", "path": "/address", "value": "somewhere else" }
    ]);
    assert_eq!(app.patch(&path, failed_test).await?.status(), StatusCode::BAD_REQUEST);

    let id_change = json!([{ "op": "replace", "path": "/id", "value": 99 }]);
    assert_eq!(app.patch(&path, id_change).await?.status(), StatusCode::BAD_REQUEST);

    let blank = json!([{ "op": "replace", "path": "/address", "value": "" }]);
    assert_eq!(app.patch(&path, blank).await?.status(), StatusCode::BAD_REQUEST);

    let body: Value = app.get(&path).await?.json().await?;
    assert_eq!(body["id"], loc);
    assert_eq!(body["name"], "Home");
    assert_eq!(body["address"], "1 Elm St");

    let res = app.patch("/api/service-locations/4040", json!([{ "op": "replace", "path": "/name", "value": "x" }])).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn e2e_feature_delete_and_scoping() -> anyhow::Result<()> {
    let app = start_server().await?;
    let jane = customer(&app, "Jane Smith").await?;
    let front = location(&app, jane, "Front").await?;
    let back = location(&app, jane, "Back").await?;

    let feature = app
        .create(
            &format!("/api/service-locations/{front}/features"),
            json!({ "featureType": "Driveway", "measurement": 400, "unit": "SquareFeet" }),
        )
        .await?;
    let fid = feature["id"].as_i64().expect("id");

    let res = app.get(&format!("/api/service-locations/{back}/features/{fid}")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let res = app.delete(&format!("/api/service-locations/{back}/features/{fid}")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app.delete(&format!("/api/service-locations/{front}/features/{fid}")).await?;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);
    let res = app.get(&format!("/api/service-locations/{front}/features/{fid}")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["detail"], format!("LocationFeature with ID {} not found.", fid));

    let res = app.delete(&format!("/api/service-locations/{front}/features/{fid}")).await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = app
        .post("/api/service-locations/777/features", json!({ "featureType": "Beds", "measurement": 10, "unit": "SquareFeet" }))
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let empty: Vec<Value> = app.get("/api/service-locations/777/features").await?.json().await?;
    assert!(empty.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_delete_missing_location_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.delete("/api/service-locations/12345").await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = res.json().await?;
    assert_eq!(body["status"], 404);
    assert_eq!(body["title"], "Not Found");
    assert_eq!(body["detail"], "ServiceLocation with ID 12345 not found.");
    assert_eq!(body["instance"], "/api/service-locations/12345");
    Ok(())
}

#[tokio::test]
async fn e2e_overflowing_measurement_is_rejected() -> anyhow::Result<()> {
    let app = start_server().await?;
    let jane = customer(&app, "Jane Smith").await?;
    let loc = location(&app, jane, "Home").await?;
    let base = format!("/api/service-locations/{loc}/features");

    let res = app.post(&base, json!({ "featureType": "Trees", "measurement": 1e40, "unit": "Count" })).await?;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await?;
    assert_eq!(body["errors"]["measurement"][0], "Measurement must be a finite number");

    let listed: Vec<Value> = app.get(&base).await?.json().await?;
    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn e2e_unknown_route_is_a_problem_document() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = app.get("/api/invoices/1").await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    assert_eq!(res.headers()["content-type"], "application/problem+json");
    let body: Value = res.json().await?;
    assert_eq!(body["title"], "Not Found");
    assert_eq!(body["instance"], "/api/invoices/1");
    Ok(())
}
