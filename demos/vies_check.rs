use vies_rest::ViesError;
use vies_rest::vies::{ViesClientBuilder, ViesEndpoint};

#[tokio::main]
async fn main() {
    // The VIES test service answers 100 as valid, 200 as invalid, and other
    // numbers with the documented faults.
    println!("=== VIES Test Service ===\n");

    let client = match ViesClientBuilder::new()
        .endpoint(ViesEndpoint::TestService)
        .user_agent("vies-rest-demo")
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            eprintln!("could not create client: {e}");
            return;
        }
    };

    let numbers = [("DE", "100"), ("DE", "200"), ("DE", "201"), ("DE", "300"), ("DE", "400")];

    for (cc, num) in numbers {
        match client.validate(cc, num).await {
            Ok(result) => println!(
                "  {cc}{num} => valid={}, name={}, date={}",
                result.is_valid,
                result.name.as_deref().unwrap_or("—"),
                result.request_date
            ),
            Err(e @ ViesError::ServiceRequest(_)) => println!("  {cc}{num} => NETWORK: {e}"),
            Err(e) => match e.fault_code() {
                Some(code) if code.is_concurrency_limit() => println!("  {cc}{num} => BUSY, retry later: {e}"),
                _ => println!("  {cc}{num} => FAULT: {e}"),
            },
        }
    }
}
