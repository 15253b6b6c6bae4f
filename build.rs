use std::{env, error::Error, fs, path::Path};

#[path = "src/constants.rs"]
mod constants;

#[path = "build_support/render.rs"]
mod render;

use render::{CONFIG_FILE, TEMPLATE_FILE};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    // Tell Cargo to rerun if the inputs change
    println!("cargo:rerun-if-changed={CONFIG_FILE}");
    println!("cargo:rerun-if-changed={TEMPLATE_FILE}");
    println!("cargo:rerun-if-changed=src/constants.rs");

    let raw = render::load(Path::new(CONFIG_FILE))?;

    // The template is only used to spot leftover placeholders
    let template = render::load(Path::new(TEMPLATE_FILE)).ok();

    for warning in render::warnings(&raw, template.as_ref()) {
        println!("cargo:warning={warning}");
    }

    let out_dir = env::var("OUT_DIR")?;
    let dest_path = Path::new(&out_dir).join("config.rs");
    fs::write(dest_path, render::render(&raw))?;

    Ok(())
}
