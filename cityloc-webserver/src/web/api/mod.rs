use std::{fmt::Display, result, sync::Arc};

use cityloc_boundary::{Error as JsonErrorResponse, Location as JsonLocation};
use cityloc_core::{gateways::summary::SummaryGateway, usecases};
use rocket::{
    self, get,
    http::Status,
    response::{self, Responder},
    routes,
    serde::json::Json,
    tokio::task::spawn_blocking,
    Route, State,
};

use super::{guards::*, sqlite, Cfg};

mod error;
mod locations;
mod util;


use self::error::Error;

type Result<T> = result::Result<Json<T>, Error>;

pub fn routes() -> Vec<Route> {
    routes![
        locations::get_location,
        locations::get_history,
        util::get_version,
    ]
}

fn json_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
    status: Status,
) -> response::Result<'o> {
    let message = err.to_string();
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message,
        error: None,
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}

fn server_error_response<'r, 'o: 'r, E: Display>(
    req: &'r rocket::Request<'_>,
    err: &E,
) -> response::Result<'o> {
    let status = Status::InternalServerError;
    let boundary_error = JsonErrorResponse {
        http_status: status.code,
        message: "Server error".to_string(),
        error: Some(err.to_string()),
    };
    Json(boundary_error).respond_to(req).map(|mut res| {
        res.set_status(status);
        res
    })
}
