use crate::cli::args::Int64Action;
use base_pack::base64url;

pub fn handle(action: Int64Action) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        Int64Action::Encode { value } => println!("{}", base64url::encode_i64(value)),
        Int64Action::Decode { text } => println!("{}", base64url::decode_i64(text.trim())?),
    }
    Ok(())
}
