//! Render a schema object and a two-section diagnostics report.
//!
//! Run with: cargo run --example simple

use std::error::Error;
use tl_inspect::{describe, to_string, Bytes, DynObject, EncoderOptions, Report, SecretString};

struct Session {
    id: i64,
    device_model: String,
    auth_token: SecretString,
    avatar: Option<Bytes>,
}

describe!(Session => "session" { id, device_model, auth_token, avatar });

fn main() -> Result<(), Box<dyn Error>> {
    let session = Session {
        id: 1,
        device_model: "Pixel \"7\"".to_string(),
        auth_token: SecretString::new("0123456789abcdef"),
        avatar: Some(Bytes(vec![0x89, 0x50, 0x4E, 0x47])),
    };

    let json = to_string(&session)?;
    println!("Session:\n{}\n", json);

    let mut report = Report::new();
    report.add_section("session_manager", json);
    report.add_object(
        "file_manager",
        &DynObject::new("fileManagerStats").with("queued", 2),
        &EncoderOptions::compact(),
    )?;
    println!("Report:\n{}", report.render());

    Ok(())
}
