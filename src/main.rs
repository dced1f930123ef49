use actix_files::Files;
use actix_web::middleware::{DefaultHeaders, Logger};
use actix_web::{App, HttpServer, web};
use leptos_actix::{LeptosRoutes, generate_route_list};

use inmobiliaria_mendoza::config::ServerConfig;
use inmobiliaria_mendoza::frontend::{self, shell};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = ServerConfig::load().map_err(|e| {
        log::error!("Failed to load configuration: {}", e);
        std::io::Error::other(e)
    })?;
    let bind_addr = config.bind_addr;
    log::info!("Inmobiliaria Mendoza listening on http://{}", bind_addr);

    HttpServer::new(move || {
        let routes = generate_route_list(frontend::App);
        let leptos_options = config.leptos_options.clone();
        let site_root = leptos_options.site_root.to_string();

        App::new()
            .wrap(Logger::default())
            .wrap(
                DefaultHeaders::new()
                    .add(("X-Frame-Options", "DENY"))
                    .add(("X-Content-Type-Options", "nosniff"))
                    .add(("Referrer-Policy", "strict-origin-when-cross-origin")),
            )
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            .service(Files::new("/images", format!("{site_root}/images")).prefer_utf8(true))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(bind_addr)?
    .run()
    .await
}
