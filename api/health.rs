use dino_museum_kiosk::{data, version};
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    dino_museum_kiosk::init_logging("info");
    run(handler).await
}

/// GET /api/health — Service status plus a check that the bundled data loads.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let (status, payload) = match data::example_dataset() {
        Ok(museum) => (
            StatusCode::OK,
            json!({
                "status": "ok",
                "version": version(),
                "dinosaurs": museum.dinosaurs.len(),
                "rooms": museum.rooms.len(),
            }),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({
                "status": "error",
                "version": version(),
                "message": err.to_string(),
            }),
        ),
    };

    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
