use crate::cli::args::{ConfigAction, ConfigCategory};
use base_pack::DictionaryRegistry;

pub fn handle(
    action: Option<ConfigAction>,
    config: &DictionaryRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        None => handle_list(None, false, config),
        Some(ConfigAction::List { category, json }) => handle_list(category, json, config),
        Some(ConfigAction::Show { dictionary }) => handle_show(&dictionary, config),
    }
}

fn handle_list(
    category: Option<ConfigCategory>,
    json: bool,
    config: &DictionaryRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let dict_list = config.names();

    if json {
        let output = match category {
            Some(ConfigCategory::Dictionaries) => serde_json::json!({ "dictionaries": dict_list }),
            Some(ConfigCategory::Settings) => serde_json::json!({ "settings": config.settings }),
            None => serde_json::json!({
                "dictionaries": dict_list,
                "settings": config.settings,
            }),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    match category {
        Some(ConfigCategory::Dictionaries) => println!("{}", dict_list.join(",")),
        Some(ConfigCategory::Settings) => print_settings(config),
        None => {
            println!("Dictionaries:");
            for name in &dict_list {
                let dictionary = config.build(name)?;
                println!(
                    "  {:<10} base-{:<3} {} bits/char  {}",
                    name,
                    dictionary.base(),
                    dictionary.bits_per_char(),
                    dictionary.valid_chars()
                );
            }
            println!();
            print_settings(config);
        }
    }

    Ok(())
}

fn print_settings(config: &DictionaryRegistry) {
    println!("Settings:");
    println!("  default_dictionary = {}", config.default_dictionary());
    match config.settings.max_size {
        Some(0) => println!("  max_size = unlimited"),
        Some(limit) => println!("  max_size = {}", limit),
        None => println!("  max_size = (built-in default)"),
    }
}

fn handle_show(
    dict_name: &str,
    config: &DictionaryRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let dictionary = config.build(dict_name)?;

    println!("Dictionary: {}", dict_name);
    println!("  Symbols: {}", dictionary.valid_chars());
    println!("  Size: {} ({} bits per symbol)", dictionary.base(), dictionary.bits_per_char());
    println!(
        "  Block: {} bytes <-> {} symbols",
        dictionary.block_bytes(),
        dictionary.block_chars()
    );
    match dictionary.padding() {
        Some(pad) if dictionary.output_padding().is_some() => {
            println!("  Padding: '{}' (written on encode)", pad)
        }
        Some(pad) => println!("  Padding: '{}' (accepted on decode only)", pad),
        None => println!("  Padding: none"),
    }
    println!(
        "  Case-insensitive: {}",
        if dictionary.is_case_insensitive() { "yes" } else { "no" }
    );
    println!(
        "  URL-safe: {}",
        if dictionary.is_url_safe() { "yes" } else { "no" }
    );

    Ok(())
}
