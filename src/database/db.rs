use log::info;
use mongodb::bson::doc;
use mongodb::{Client, options::ClientOptions};

pub async fn connect_to_mongo(mongodb_uri: &str) -> Result<Client, mongodb::error::Error> {
    let mut client_options = ClientOptions::parse(mongodb_uri).await?;
    client_options.app_name = Some("comments_api".to_string());

    let client = Client::with_options(client_options)?;

    // Ping the server to see if you can connect to the cluster
    client
        .database("admin")
        .run_command(doc! { "ping": 1 })
        .await?;

    info!("Connected successfully to MongoDB");

    Ok(client)
}
