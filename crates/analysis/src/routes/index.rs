// crates/analysis/src/routes/index.rs
//! Static capability listing at the service root.

use axum::Json;
use serde_json::{json, Value};

/// GET / — welcome endpoint describing the available API.
pub async fn welcome() -> Json<Value> {
    Json(json!({
        "service": "Network Analysis API",
        "status": "running",
        "endpoints": {
            "/health": "GET - Service health check",
            "/files": "GET - List available PCAP files",
            "/analyze": "POST - Analyze PCAP file (requires: filename, optional: filters, limit)",
            "/statistics": "POST - Get network statistics (requires: filename)",
            "/protocols": "POST - Get protocol hierarchy (requires: filename)"
        },
        "documentation": "Send POST requests with JSON body to analysis endpoints"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_welcome_lists_endpoints() {
        let Json(body) = welcome().await;
        assert_eq!(body["status"], "running");
        assert!(body["endpoints"]["/analyze"].is_string());
        assert!(body["endpoints"]["/protocols"].is_string());
    }
}
