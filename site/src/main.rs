use actix_web::{App, HttpServer, middleware::Logger};

mod config;
mod server;

use config::SiteConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional, real env vars win
    let _ = dotenvy::dotenv();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let site = SiteConfig::from_env()?;
    if !site.dist_dir.join("index.html").is_file() {
        log::warn!("no index.html in {}, run `trunk build` in ui/ first", site.dist_dir.display());
    }

    log::info!("serving {} on http://{}", site.dist_dir.display(), site.addr);

    let addr = site.addr;
    HttpServer::new(move || {
        let site = site.clone();
        App::new()
            .wrap(Logger::default())
            .configure(move |cfg| server::routes(cfg, &site))
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}
