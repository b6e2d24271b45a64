//! # Marketing API
//!
//! QR material for table tents and delivery flyers. The image itself comes
//! from a third-party generation service; this endpoint templates the URL
//! with the payload to encode.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::SharedState;

const QR_SERVICE: &str = "https://api.qrserver.com/v1/create-qr-code/";

#[derive(Debug, Default, Deserialize)]
pub struct QrQuery {
    /// Payload to encode; defaults to the configured public menu URL.
    pub data: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QrResponse {
    /// What the code will encode.
    pub payload: String,
    /// Print-ready 400x400 PNG.
    pub image_url: String,
    pub download_name: String,
}

pub fn marketing_routes() -> Router<SharedState> {
    Router::new().route("/qr", get(get_qr))
}

/// Build the QR image URL for the menu (or an explicit payload)
#[utoipa::path(
    get,
    path = "/api/v1/marketing/qr",
    tag = "marketing",
    params(("data" = Option<String>, Query, description = "Payload to encode")),
    responses(
        (status = 200, description = "Templated QR image URL", body = QrResponse)
    )
)]
pub async fn get_qr(
    State(state): State<SharedState>,
    Query(query): Query<QrQuery>,
) -> Json<QrResponse> {
    let payload = query.data.unwrap_or_else(|| state.site_url.clone());
    let image_url = qr_image_url(&payload);
    Json(QrResponse {
        payload,
        image_url,
        download_name: "lucy-blu-qr.png".to_string(),
    })
}

fn qr_image_url(payload: &str) -> String {
    format!(
        "{}?size=400x400&data={}&color=0f172a&bgcolor=ffffff&format=png",
        QR_SERVICE,
        urlencoding::encode(payload)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_is_url_encoded() {
        let url = qr_image_url("https://lucyblu.example/menu?table=4");
        assert!(url.starts_with(QR_SERVICE));
        assert!(url.contains("data=https%3A%2F%2Flucyblu.example%2Fmenu%3Ftable%3D4"));
        assert!(url.ends_with("format=png"));
    }
}
