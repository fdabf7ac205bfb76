//! Structured output example: extract a typed record from free text.
//!
//! The schema is generated from the Rust type via `schemars`; field doc
//! comments become schema descriptions the model sees.

use openai_client::OpenAIClient;
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
struct Person {
    /// The person's name
    name: String,
    /// The person's age
    age: u32,
    /// The person's job
    occupation: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let api_key = std::env::var("OPENAI_API_KEY")?;
    let client = OpenAIClient::new(api_key);

    let system = "Extract person information from text.";
    let user = "John Smith is a 35 year old software engineer.";

    let person = client.extract::<Person>("gpt-4o-mini", system, user).await?;

    println!("Name: {}", person.name);
    println!("Age: {}", person.age);
    println!("Occupation: {}", person.occupation);

    Ok(())
}
