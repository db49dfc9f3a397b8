//! Rocket application assembly

use super::cors::{Cors, preflight};
use super::error::{bad_request, internal_error, not_found, unprocessable};
use super::handlers::{ApiState, health, home, recommend, recommend_calculator};
use rocket::{Build, Rocket, catchers, routes};

/// Build the Rocket application over `state`
///
/// With `cors` set, every response carries permissive CORS headers and
/// preflight requests are answered.
pub fn trofes_rocket(state: ApiState, cors: bool) -> Rocket<Build> {
    let mut rocket = rocket::build()
        .manage(state)
        .mount("/", routes![home, health, recommend, recommend_calculator])
        .register(
            "/",
            catchers![bad_request, not_found, unprocessable, internal_error],
        );

    if cors {
        rocket = rocket.mount("/", routes![preflight]).attach(Cors);
    }

    rocket
}
