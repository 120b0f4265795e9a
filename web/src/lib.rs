use clap::Parser;
use wasm_bindgen::prelude::*;

mod board;
mod celebrate;
mod phrases;
mod utils;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::WarnLevel>,

    #[command(flatten)]
    board: board::BoardProps,
}

#[wasm_bindgen(start)]
pub fn run_app() {
    use gloo::utils::{document, window};

    #[cfg(feature = "console_error_panic_hook")]
    {
        console_error_panic_hook::set_once();
    }

    let location_hash = window()
        .location()
        .hash()
        .unwrap_or_else(|_| "".to_string());

    let args = Args::try_parse_from(location_hash.split(['#', '&'])).expect("Could not parse args");
    if let Some(log_level) = args.verbose.log_level() {
        console_log::init_with_level(log_level).expect("Error initializing logger");
    }
    log::debug!("args: {:?}", args.board);

    let root = document()
        .get_element_by_id("bingo")
        .expect("Could not find id=\"bingo\" element");

    log::debug!("App started");
    yew::Renderer::<board::BoardView>::with_root_and_props(root, args.board).render();
}
