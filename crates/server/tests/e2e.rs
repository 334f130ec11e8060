use std::net::SocketAddr;

use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::{routes, ServerState};

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState::new();
    let app = routes::build_router(state, tower_http::cors::CorsLayer::very_permissive());
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

#[tokio::test]
async fn e2e_seed_then_edit_over_tcp() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = reqwest::Client::new();

    let res = c.get(format!("{}/seed", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.text().await?, "Seed executed successfully");

    let cars = c.get(format!("{}/cars", app.base_url)).send().await?
        .json::<serde_json::Value>().await?;
    let first = cars[0].clone();
    let id = first["id"].as_str().expect("id").to_string();

    let res = c.patch(format!("{}/cars/{}", app.base_url, id))
        .json(&json!({"model": "Supra"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let updated = res.json::<serde_json::Value>().await?;
    assert_eq!(updated["model"], "Supra");
    assert_eq!(updated["brand"], first["brand"]);
    assert_eq!(updated["year"], first["year"]);

    // order is preserved after an in-place update
    let cars = c.get(format!("{}/cars", app.base_url)).send().await?
        .json::<serde_json::Value>().await?;
    assert_eq!(cars[0], updated);
    assert_eq!(cars.as_array().map(Vec::len), Some(3));

    let res = c.post(format!("{}/brands", app.base_url))
        .json(&json!({"name": "Kia", "country": "KR"}))
        .send().await?;
    assert_eq!(res.status(), HttpStatusCode::BAD_REQUEST);
    Ok(())
}
