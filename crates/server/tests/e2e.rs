use std::net::SocketAddr;

use configs::AppConfig;
use reqwest::{redirect::Policy, StatusCode as HttpStatusCode};
use serde_json::Value;
use tokio::net::TcpListener;

struct TestApp {
    base_url: String,
}

/// Serve the full app on an ephemeral port over a fresh in-memory database.
async fn start_server() -> anyhow::Result<TestApp> {
    let mut cfg = AppConfig::default();
    cfg.database.url = "sqlite::memory:".into();
    cfg.database.auto_migrate = true;

    let app = server::startup::build_app(&cfg).await?;
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await { eprintln!("server error: {}", e); }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .expect("reqwest client")
}

#[tokio::test]
async fn e2e_public_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_country_lifecycle() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();
    let url = |path: &str| format!("{}{}", app.base_url, path);

    let res = c
        .post(url("/Country/Create"))
        .form(&[("CountryCode", "US"), ("Name", "United States"), ("FederalSalesTax", "0.0")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::SEE_OTHER);
    assert_eq!(res.headers()["location"], "/Country/Index");

    let res = c
        .post(url("/Country/Create"))
        .form(&[("CountryCode", "CA"), ("Name", "Canada"), ("FederalSalesTax", "0.05")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::SEE_OTHER);

    let body = c.get(url("/Country/Index")).send().await?.json::<Value>().await?;
    assert_eq!(body["items"].as_array().map(Vec::len), Some(2));

    let body = c.get(url("/Country/Details/CA")).send().await?.json::<Value>().await?;
    assert_eq!(body["record"]["Name"], "Canada");
    assert_eq!(body["record"]["FederalSalesTax"], 0.05);

    // route key and submitted key must agree
    let res = c
        .post(url("/Country/Edit/US"))
        .form(&[("CountryCode", "CA"), ("Name", "Changed"), ("FederalSalesTax", "0.1")])
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    let res = c.post(url("/Country/Delete/US")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::SEE_OTHER);

    let body = c.get(url("/Country")).send().await?.json::<Value>().await?;
    let codes: Vec<&str> = body["items"]
        .as_array()
        .map(|items| items.iter().filter_map(|i| i["CountryCode"].as_str()).collect())
        .unwrap_or_default();
    assert_eq!(codes, vec!["CA"]);

    let res = c.get(url("/Country/Details/US")).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    Ok(())
}
