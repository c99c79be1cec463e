#[actix_web::main]
async fn main() -> std::io::Result<()> {
    sahayak_server::run().await
}
