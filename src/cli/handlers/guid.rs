use crate::cli::args::GuidAction;
use base_pack::{Guid, base64url};

pub fn handle(action: GuidAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        GuidAction::Encode { guid } => {
            let guid: Guid = guid.trim().parse()?;
            println!("{}", base64url::encode_guid(&guid));
        }
        GuidAction::Decode { text } => {
            println!("{}", base64url::decode_guid(text.trim())?);
        }
    }
    Ok(())
}
