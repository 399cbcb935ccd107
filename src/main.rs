use deadpool_postgres::{ManagerConfig, RecyclingMethod};
use rusty_matchplay::args::{self, CleanArgs};
use rusty_matchplay::controller::db_prefill;
use rusty_matchplay::controller::matches::{entry_form, matches, preview_match, save_match};
use rusty_matchplay::model::{PlayerNames, execute_batch_sql};
use sql_middleware::middleware::{ConfigAndPool, DatabaseType};

use actix_files::Files;
use actix_web::web::Data;
use actix_web::{App, HttpResponse, HttpServer, Responder, web};

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = args::args_checks();
    let args_for_web = args.clone();

    let cfg = deadpool_postgres::Config::new();
    let config_and_pool: ConfigAndPool;
    if args.db_type == DatabaseType::Postgres {
        let mut postgres_config = cfg;
        postgres_config.dbname = Some(args.db_name);
        postgres_config.host = args.db_host;
        postgres_config.port = args.db_port;
        postgres_config.user = args.db_user;
        postgres_config.password = args.db_password;
        postgres_config.manager = Some(ManagerConfig {
            recycling_method: RecyclingMethod::Fast,
        });
        config_and_pool = ConfigAndPool::new_postgres(postgres_config).await?;
    } else {
        match ConfigAndPool::new_sqlite(args.db_name).await {
            Ok(a) => {
                config_and_pool = a;
            }
            Err(e) => {
                eprintln!(
                    "Error: {}\nBacktrace: {:?}",
                    e,
                    std::backtrace::Backtrace::capture()
                );
                std::process::exit(1);
            }
        }
    }

    if args.db_startup_script.is_some() {
        execute_batch_sql(&config_and_pool, &args.combined_sql_script).await?;
    }

    if let Some(json) = &args.db_populate_json {
        let names = PlayerNames::new(args_for_web.player_a.clone(), args_for_web.player_b.clone());
        db_prefill::db_prefill(json, &config_and_pool, &names).await?;
    }

    log::info!("Listening on 0.0.0.0:8081");

    HttpServer::new(move || {
        App::new()
            .app_data(Data::new(config_and_pool.clone()))
            .app_data(Data::new(args_for_web.clone()))
            .route("/", web::get().to(index))
            .route("/matches", web::get().to(matches))
            .route("/matches", web::post().to(save_match))
            .route("/matches/preview", web::post().to(preview_match))
            .route("/matches/entry", web::get().to(entry_form))
            .route("/health", web::get().to(HttpResponse::Ok))
            .service(Files::new("/static", "./static").show_files_listing()) // Serve the static files
    })
    .bind("0.0.0.0:8081")?
    .run()
    .await?;
    Ok(())
}

async fn index(args: Data<CleanArgs>) -> impl Responder {
    let title = format!("{} vs {} Golf Match Tracker", args.player_a, args.player_b);
    let markup = rusty_matchplay::view::index::render_index_template(&title);
    HttpResponse::Ok()
        .content_type("text/html")
        .body(markup.into_string())
}
