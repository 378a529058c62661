use anyhow::Result;
use std::io::{self, BufRead, Write};
use toggle_arbiter::{
    load_settings, ToggleConfig, ToggleCore, ToggleOptions,
};
use tracing::{info, warn};

fn build_config(settings: &toggle_arbiter::DemoSettings) -> ToggleConfig<'static> {
    let mut config = ToggleConfig::new().with_read_only(settings.read_only);
    config.controlled_value = settings.controlled_value;
    if settings.controlled_value.is_some() {
        // Controlled demo: surface the suggestion instead of adopting it
        config = config.with_on_change(Box::new(|suggested, action| {
            println!(
                "suggested: {} (action: {})",
                suggested.on,
                action.kind()
            );
        }));
    }
    config
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    info!("Starting toggle arbitration demo");

    let settings = load_settings()?;
    info!("Demo control: {}", settings.demo.name);

    let initial_config = build_config(&settings.demo);
    let mut core = ToggleCore::new(
        ToggleOptions {
            initial_on: settings.demo.initial_on,
            diagnostics_enabled: settings.demo.diagnostics,
        },
        &initial_config,
    );
    core.update_config(&initial_config);

    let mut config = initial_config;
    println!(
        "{}: {} (commands: toggle, reset, quit)",
        settings.demo.name,
        core.effective_state(&config)
    );

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim() {
            "toggle" | "t" => core.toggle(&mut config)?,
            "reset" | "r" => core.reset(&mut config)?,
            "quit" | "q" => break,
            "" => {}
            other => {
                warn!("Unknown command: '{}'", other);
                continue;
            }
        }
        println!("{}: {}", settings.demo.name, core.effective_state(&config));
        io::stdout().flush()?;
    }

    info!("Demo finished");
    Ok(())
}
