mod app;
mod labels;
mod util;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Path to the labels JSON file exported by the mix scraper.
    #[arg(long, default_value = "labels.json")]
    data: String,
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1280.0, 860.0]),
        ..Default::default()
    };

    eframe::run_native(
        "labelscope",
        options,
        Box::new(move |cc| Ok(Box::new(app::LabelScopeApp::new(cc, args.data.clone())))),
    )
}
