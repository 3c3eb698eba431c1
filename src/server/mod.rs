// file: src/server/mod.rs
// description: HTTP listener setup and graceful shutdown
// reference: https://docs.rs/axum, https://docs.rs/tokio

pub mod routes;

pub use routes::{AppState, router};

use crate::error::{Result, SearchError};
use crate::search::Corpus;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

pub async fn bind(addr: SocketAddr) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .map_err(|e| SearchError::Server(format!("Failed to bind {}: {}", addr, e)))
}

/// Serves `/search` over `corpus` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, corpus: Corpus, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    info!("Serving {} records on http://{}", corpus.len(), addr);

    axum::serve(listener, router(AppState::new(corpus)))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| SearchError::Server(e.to_string()))?;

    info!("Server stopped");
    Ok(())
}

pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::CorpusLoader;
    use crate::models::Record;
    use pretty_assertions::assert_eq;
    use std::path::Path;
    use tokio::sync::oneshot;

    const SAMPLE: &[u8] = b"neutral,company reports earnings\n\
        positive,stock price up sharply\n\
        negative,company stock price down\n";

    async fn spawn_server(corpus: Corpus) -> (SocketAddr, oneshot::Sender<()>) {
        let listener = bind("127.0.0.1:0".parse().unwrap()).await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            serve(listener, corpus, async {
                rx.await.ok();
            })
            .await
            .unwrap();
        });

        (addr, tx)
    }

    async fn get_json(addr: SocketAddr, path_and_query: &str) -> Vec<String> {
        let response = reqwest::get(format!("http://{}{}", addr, path_and_query))
            .await
            .unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::OK);
        response.json::<Vec<String>>().await.unwrap()
    }

    fn sample_corpus() -> Corpus {
        CorpusLoader::new()
            .load_from_reader(SAMPLE, Path::new("sample.csv"))
            .unwrap()
    }

    #[tokio::test]
    async fn test_search_endpoint_end_to_end() {
        let (addr, stop) = spawn_server(sample_corpus()).await;

        assert_eq!(
            get_json(addr, "/search?q=company").await,
            vec![
                "neutral company reports earnings".to_string(),
                "negative company stock price down".to_string(),
            ]
        );
        assert!(get_json(addr, "/search?q=xyz").await.is_empty());
        assert!(get_json(addr, "/search").await.is_empty());
        assert!(get_json(addr, "/search?q=").await.is_empty());

        stop.send(()).ok();
    }

    #[tokio::test]
    async fn test_search_endpoint_decodes_and_ignores_case() {
        let (addr, stop) = spawn_server(sample_corpus()).await;

        assert_eq!(
            get_json(addr, "/search?q=STOCK%20PRICE").await,
            vec![
                "positive stock price up sharply".to_string(),
                "negative company stock price down".to_string(),
            ]
        );
        assert_eq!(
            get_json(addr, "/search?q=up+sharply").await,
            vec!["positive stock price up sharply".to_string()]
        );

        stop.send(()).ok();
    }

    #[tokio::test]
    async fn test_search_endpoint_caps_results() {
        let corpus: Corpus = (0..30)
            .map(|i| Record::new(format!("row {} shares", i)))
            .collect();
        let (addr, stop) = spawn_server(corpus).await;

        let results = get_json(addr, "/search?q=shares").await;
        assert_eq!(results.len(), 15);
        assert_eq!(results.first().map(String::as_str), Some("row 0 shares"));
        assert_eq!(results.last().map(String::as_str), Some("row 14 shares"));

        stop.send(()).ok();
    }

    #[tokio::test]
    async fn test_repeated_and_unknown_params() {
        let (addr, stop) = spawn_server(sample_corpus()).await;

        assert_eq!(
            get_json(addr, "/search?lang=en&q=earnings&q=stock").await,
            vec!["neutral company reports earnings".to_string()]
        );

        let first = get_json(addr, "/search?q=price").await;
        let second = get_json(addr, "/search?q=price").await;
        assert_eq!(first, second);

        stop.send(()).ok();
    }

    #[tokio::test]
    async fn test_undecodable_query_returns_empty() {
        let corpus = Corpus::new(vec![Record::new("abc \u{FFFD} x"), Record::new("abc plain")]);
        let (addr, stop) = spawn_server(corpus).await;

        assert!(get_json(addr, "/search?q=%FF").await.is_empty());
        assert!(get_json(addr, "/search?q=abc%FF").await.is_empty());
        assert!(get_json(addr, "/search?q=abc%20%FF").await.is_empty());
        assert_eq!(get_json(addr, "/search?q=abc").await.len(), 2);

        stop.send(()).ok();
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let (addr, stop) = spawn_server(sample_corpus()).await;

        let response = reqwest::get(format!("http://{}/", addr)).await.unwrap();
        assert_eq!(response.status(), reqwest::StatusCode::NOT_FOUND);

        stop.send(()).ok();
    }
}
