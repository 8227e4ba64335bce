//! Basic example demonstrating resume token decoding and validation
//!
//! This example walks through the two-step flow:
//! 1. Parse the token mapping (normally the `_id` of a change-stream event)
//! 2. Validate its freshness against an assumed oplog retention window

use retoken::{EncodedToken, Result, TokenValidator};

fn main() -> Result<()> {
    println!("=== retoken - Basic Example ===\n");

    // In a real application this mapping comes from a live change-stream
    // cursor; here we fabricate one two hours in the past
    let token = create_sample_token();
    println!("Token payload: {:?}\n", token.data);

    let result = TokenValidator::new().window_hours(24.0).validate(&token)?;

    println!("Resume Token Details:");
    println!("  raw_hex:       {}", result.token.raw_hex);
    println!("  cluster_time:  {}", result.token.cluster_time);
    println!("  ordinal:       {}", result.token.ordinal);
    println!("  length:        {}", result.token.length);
    println!("  age_hours:     {:.2}", result.age_hours);
    println!("  within_window: {}", result.within_window);

    if result.within_window {
        println!("\n✅ Token is likely still resumable");
    } else {
        println!("\n❌ Token has probably aged out of the oplog");
    }

    Ok(())
}

/// Helper to build a sample token with a cluster time two hours ago
fn create_sample_token() -> EncodedToken {
    use retoken::utils::base64;

    let seconds = (chrono::Utc::now().timestamp() - 2 * 3600) as u64;
    let mut bytes = seconds.to_be_bytes().to_vec();
    bytes.extend_from_slice(&1u32.to_be_bytes());
    // Trailing extension data as real tokens carry past offset 12
    bytes.extend_from_slice(&[0x2b, 0x02, 0x2c, 0x01, 0x00, 0x29, 0x6e, 0x5a, 0x10, 0x04]);

    EncodedToken::new(base64::encode_bytes(&bytes))
}
