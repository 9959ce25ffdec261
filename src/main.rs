use sawari::config::Config;
use sawari::engine::Engine;
use sawari::server::serve;

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env().unwrap();
    let engine = Engine::new(&config).unwrap();

    serve(engine, &config).await;
}
