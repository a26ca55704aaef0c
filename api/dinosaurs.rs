use dino_museum_kiosk::data;
use dino_museum_kiosk::dinosaurs::{dinosaur_description, dinosaurs_alive_mya, longest_dinosaur_entry};
use dino_museum_kiosk::models::dinosaur::DinosaurQuery;
use serde_json::{json, Value};
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

/// POST /api/dinosaurs — Answer a dinosaur query.
///
/// Body is one of:
/// - `{"query": "longest"}`
/// - `{"query": "description", "id": "U9vuZmgKwUr"}`
/// - `{"query": "aliveMya", "mya": 65, "key": "name"}`
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    if *req.method() != http::Method::POST {
        return json_response(
            StatusCode::METHOD_NOT_ALLOWED,
            json!({
                "error": "Method not allowed",
                "message": "Use POST to submit a dinosaur query"
            }),
        );
    }

    let query: DinosaurQuery = match serde_json::from_slice(body_bytes(req.body())) {
        Ok(query) => query,
        Err(err) => {
            return json_response(
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid request body", "message": err.to_string() }),
            );
        }
    };

    let museum = data::example_dataset()?;

    match query {
        DinosaurQuery::Longest => {
            json_response(StatusCode::OK, json!({ "longest": longest_dinosaur_entry(&museum.dinosaurs) }))
        }
        DinosaurQuery::Description { id } => match dinosaur_description(&museum.dinosaurs, &id) {
            Ok(description) => json_response(StatusCode::OK, json!({ "description": description })),
            Err(err) => json_response(
                StatusCode::NOT_FOUND,
                json!({ "error": "Dinosaur not found", "message": err.to_string() }),
            ),
        },
        DinosaurQuery::AliveMya { mya, key } => {
            let alive = dinosaurs_alive_mya(&museum.dinosaurs, mya, key.as_deref());
            json_response(StatusCode::OK, json!({ "alive": alive }))
        }
    }
}
