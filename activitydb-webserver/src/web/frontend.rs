use std::path::PathBuf;

use rocket::{fs::NamedFile, get, routes, Route, State};

use super::guards::FrontendDir;

// Client-side routes like `/activities/<id>` have no
// corresponding file and are answered with the app shell.
#[get("/<_path..>", rank = 20)]
pub async fn get_index(_path: PathBuf, dir: &State<FrontendDir>) -> Option<NamedFile> {
    NamedFile::open(dir.0.join("index.html")).await.ok()
}

pub fn routes() -> Vec<Route> {
    routes![get_index]
}
