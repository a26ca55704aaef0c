use dino_museum_kiosk::data;
use dino_museum_kiosk::models::receipt::ReceiptRequest;
use dino_museum_kiosk::ticketing::build_receipt;
use serde_json::{json, Value};
use tracing::warn;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dino_museum_kiosk::init_logging("info");
    run(handler).await
}

fn json_response(status: StatusCode, payload: Value) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}

fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes,
        _ => &[],
    }
}

/// POST /api/receipt — Price a batch of tickets and return the receipt.
///
/// Body: `{"purchases": [{"ticketType": "general", "entrantType": "adult", "extras": ["movie"]}]}`
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({
                "error": "Method not allowed",
                "message": "Use POST to submit ticket purchases"
            }),
        );
    }

    let request: ReceiptRequest = match serde_json::from_slice(body_bytes(req.body())) {
        Ok(request) => request,
        Err(err) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request body", "message": err.to_string() }),
            );
        }
    };

    let museum = data::example_dataset()?;

    match build_receipt(&museum.tickets, &request.purchases) {
        Ok(receipt) => json_response(
            StatusCode::OK,
            json!({
                "receipt": receipt.to_string(),
                "totalInCents": receipt.total_in_cents,
                "lines": receipt.lines,
            }),
        ),
        Err(err) => {
            warn!(error = %err, "receipt_rejected");
            json_response(
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({ "error": "Purchase rejected", "message": err.to_string() }),
            )
        }
    }
}
