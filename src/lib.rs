#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod error_conversions;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod pagination;
#[cfg(feature = "data")]
pub mod patch;
#[cfg(feature = "data")]
pub mod query;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

#[cfg(feature = "server")]
pub use server::{configure, run};

#[cfg(feature = "server")]
mod server {
    use actix_cors::Cors;
    use actix_web::{App, HttpServer, middleware, web};

    use crate::db::establish_connection_pool;
    use crate::models::config::ServerConfig;
    use crate::repository::DieselRepository;
    use crate::routes::companies::{
        create_company, create_company_collection, delete_company, get_companies, get_company,
        get_company_collection, update_company,
    };
    use crate::routes::employees::{
        create_employee, delete_employee, get_employee, get_employees, partially_update_employee,
        update_employee,
    };
    use crate::services::ServiceError;

    /// Registers the `/api` routes and the extractor error handlers.
    ///
    /// The caller provides `web::Data<DieselRepository>` and
    /// `web::Data<PagingOptions>`.
    pub fn configure(cfg: &mut web::ServiceConfig) {
        cfg.app_data(
            web::JsonConfig::default()
                .error_handler(|err, _req| ServiceError::BadRequest(err.to_string()).into()),
        )
        .app_data(
            web::QueryConfig::default()
                .error_handler(|err, _req| ServiceError::BadRequest(err.to_string()).into()),
        )
        .service(
            web::scope("/api")
                .service(get_companies)
                .service(create_company)
                .service(get_company_collection)
                .service(create_company_collection)
                .service(get_company)
                .service(update_company)
                .service(delete_company)
                .service(get_employees)
                .service(create_employee)
                .service(get_employee)
                .service(update_employee)
                .service(partially_update_employee)
                .service(delete_employee),
        );
    }

    /// Builds and runs the Actix-Web HTTP server using the provided configuration.
    pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
        // Establish Diesel connection pool for the SQLite database.
        let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
            std::io::Error::other(format!("Failed to establish database connection: {e}"))
        })?;

        let repo = DieselRepository::new(pool);
        let paging = server_config.paging();

        let bind_address = (server_config.address.clone(), server_config.port);
        log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

        HttpServer::new(move || {
            App::new()
                .wrap(Cors::permissive())
                .wrap(middleware::Logger::default())
                .app_data(web::Data::new(repo.clone()))
                .app_data(web::Data::new(paging))
                .configure(configure)
        })
        .bind(bind_address)?
        .run()
        .await
    }
}
