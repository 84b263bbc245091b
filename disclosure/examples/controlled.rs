//! Controlled disclosure driven from stdin.
//!
//! Type `open` or `close` to set the parent's state, `click` to activate the
//! button (which asks the parent to flip it), `quit` to exit.

use std::io::{self, BufRead, Write};

use disclosure::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let level = std::env::var("DISCLOSURE_LOG")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(LevelFilter::Info);
    let log_file = std::fs::File::create("controlled.log")?;
    WriteLogger::init(level, Config::default(), log_file)?;

    let open = State::new(false);

    let props = {
        let open = open.clone();
        move |value: bool| {
            let open = open.clone();
            DisclosureProps::new()
                .open(value)
                .on_change(move || open.update(|v| *v = !*v))
        }
    };

    let disclosure = Disclosure::new(props(open.get()));
    let mut doc = {
        let open = open.clone();
        Document::mount(move || {
            let cx = disclosure.provide(&props(open.get()));
            let hint = if open.get() { "close" } else { "open" };
            Element::div()
                .child(Element::new("h2").text("Example: Controlled"))
                .child(Element::span().text(format!("Type \"{hint}\"")))
                .child(DisclosureButton::new(&cx).text("Expand me!").build())
                .child(DisclosurePanel::new(&cx).text("Li Europan lingues").build())
        })
    };

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    println!("{}", doc.to_markup());
    print!("> ");
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim().to_lowercase().as_str() {
            "open" => {
                open.set(true);
                doc.rerender();
            }
            "close" => {
                open.set(false);
                doc.rerender();
            }
            "click" => {
                if let Some(button) = doc.find_by_text("expand me") {
                    doc.click(&button)?;
                }
            }
            "quit" | "q" => break,
            other => {
                log::debug!("Unknown command {other:?}");
                continue;
            }
        }
        println!("{}", doc.to_markup());
        print!("> ");
        stdout.flush()?;
    }

    Ok(())
}
