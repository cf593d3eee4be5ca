use crate::cli::{
    args::EncodeArgs,
    commands::{read_input, write_output},
    config::{create_dictionary, max_size},
    diagnostics::Reporter,
    global::GlobalArgs,
};
use base_pack::DictionaryRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &DictionaryRegistry,
    reporter: &Reporter,
) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = create_dictionary(config, args.dictionary.as_deref())?;

    let input_data = read_input(
        args.file.as_deref(),
        max_size(global, config),
        global.force,
        reporter,
    )?;

    let mut encoded = base_pack::encode(&input_data, &dictionary);
    encoded.push('\n');
    write_output(args.output.as_deref(), encoded.as_bytes())?;

    Ok(())
}
