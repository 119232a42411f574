// SPDX-License-Identifier: MPL-2.0
use face_replacer::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let lang = read_option(&mut args, "--lang");
    let config_dir = read_option(&mut args, "--config-dir");
    let eye_left = read_option(&mut args, "--eye-left");
    let eye_right = read_option(&mut args, "--eye-right");
    let mouth = read_option(&mut args, "--mouth");
    let base_image = args
        .finish()
        .into_iter()
        .next()
        .and_then(|s| s.into_string().ok());

    paths::init_cli_overrides(config_dir.clone());

    app::run(Flags {
        lang,
        config_dir,
        base_image,
        eye_left,
        eye_right,
        mouth,
    })
}

/// Reads an optional `--key value` pair, reporting malformed values.
fn read_option(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    args.opt_value_from_str(key).unwrap_or_else(|err| {
        eprintln!("[cli] Ignoring {key}: {err}");
        None
    })
}
