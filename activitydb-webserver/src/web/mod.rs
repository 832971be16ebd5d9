use std::path::PathBuf;

use rocket::{config::Config as RocketCfg, fs::FileServer, Rocket, Route};

pub mod api;
mod frontend;
mod guards;
mod sqlite;


#[derive(Debug, Clone, Default)]
pub struct Cfg {
    pub enable_cors: bool,
    /// Directory with the compiled frontend
    pub frontend_dir: Option<PathBuf>,
}

pub(crate) struct InstanceOptions {
    mounts: Vec<(&'static str, Vec<Route>)>,
    rocket_cfg: Option<RocketCfg>,
    frontend_dir: Option<PathBuf>,
    version: &'static str,
}

pub(crate) fn rocket_instance(
    options: InstanceOptions,
    db: sqlite::Connections,
) -> Rocket<rocket::Build> {
    let InstanceOptions {
        mounts,
        rocket_cfg,
        frontend_dir,
        version,
    } = options;

    let r = match rocket_cfg {
        Some(cfg) => rocket::custom(cfg),
        None => rocket::build(),
    };

    let mut instance = r.manage(db).manage(guards::Version(version));

    for (m, r) in mounts {
        instance = instance.mount(m, r);
    }
    if let Some(dir) = frontend_dir {
        if !dir.is_dir() {
            warn!("Frontend directory {} not found", dir.display());
            return instance;
        }
        info!("Serving frontend from {}", dir.display());
        instance = instance
            .mount("/", FileServer::from(&dir))
            .mount("/", frontend::routes())
            .manage(guards::FrontendDir(dir));
    }
    instance
}

fn mounts() -> Vec<(&'static str, Vec<Route>)> {
    vec![("/api", api::routes())]
}

pub async fn run(db: sqlite::Connections, cfg: Cfg, version: &'static str) {
    let Cfg {
        enable_cors,
        frontend_dir,
    } = cfg;
    let options = InstanceOptions {
        mounts: mounts(),
        rocket_cfg: None,
        frontend_dir,
        version,
    };
    let instance = rocket_instance(options, db);
    let server_task = if enable_cors {
        match rocket_cors::CorsOptions::default().to_cors() {
            Ok(cors) => instance.attach(cors).launch(),
            Err(err) => {
                log::error!("Invalid CORS configuration: {err}");
                return;
            }
        }
    } else {
        instance.launch()
    };
    if let Err(err) = server_task.await {
        log::error!("Unable to run web server: {err}");
    }
}
