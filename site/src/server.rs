use actix_files::{Files, NamedFile};
use actix_web::dev::{ServiceRequest, ServiceResponse, fn_service};
use actix_web::web;

use crate::config::SiteConfig;

/// `/assets` from the assets dir, the Trunk bundle at `/`, and `index.html`
/// for any other GET so client-side routes survive a reload.
pub fn routes(cfg: &mut web::ServiceConfig, site: &SiteConfig) {
    let index = site.dist_dir.join("index.html");

    cfg.service(Files::new("/assets", &site.assets_dir))
        .service(
            Files::new("/", &site.dist_dir)
                .index_file("index.html")
                .default_handler(fn_service(move |req: ServiceRequest| {
                    let index = index.clone();
                    async move {
                        let (req, _) = req.into_parts();
                        // a missing index.html becomes a 404 instead of a panic
                        let file = NamedFile::open_async(&index).await?;
                        let res = file.into_response(&req);
                        Ok::<ServiceResponse, actix_web::Error>(ServiceResponse::new(req, res))
                    }
                })),
        );
}
