//! Uncontrolled disclosure: prints the markup before and after a click.
//!
//! Run with `DISCLOSURE_LOG=debug` to see dispatch and state logs.

use disclosure::prelude::*;
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

const PANEL_TEXT: &str = "Li Europan lingues es membres del sam familie. Lor separat existentie \
                          es un myth.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("DISCLOSURE_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info);
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)?;

    let props = DisclosureProps::new().on_change(|| log::info!("Disclosure changed"));
    let disclosure = Disclosure::new(props.clone());

    let mut doc = Document::mount(move || {
        let cx = disclosure.provide(&props);
        Element::div()
            .child(Element::new("h2").text("Example: Basic"))
            .child(DisclosureButton::new(&cx).text("Expand me!").build())
            .child(DisclosurePanel::new(&cx).text(PANEL_TEXT).build())
    });

    println!("{}", doc.to_markup());

    if let Some(button) = doc.find_by_text("expand me") {
        doc.click(&button)?;
    }
    println!("{}", doc.to_markup());

    Ok(())
}
