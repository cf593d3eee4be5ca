use crate::cli::{
    args::DecodeArgs,
    commands::{read_input, write_output},
    config::{create_dictionary, max_size},
    diagnostics::Reporter,
    global::GlobalArgs,
};
use base_pack::DictionaryRegistry;

pub fn handle(
    args: DecodeArgs,
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
    let input_text =
        String::from_utf8(input_data).map_err(|_| "input is not valid UTF-8 text")?;

    let data = base_pack::decode(input_text.trim(), &dictionary)?;
    write_output(args.output.as_deref(), &data)?;

    Ok(())
}
