use super::*;

#[get("/version")]
pub fn get_version(version: &State<Version>) -> Json<&'static str> {
    Json(version.0)
}
