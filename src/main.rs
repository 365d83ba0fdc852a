use std::process::ExitCode;

use easel::app::{WINDOW_SIZE, WINDOW_TITLE};
use easel::{Error, PaintApp};

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size(WINDOW_SIZE)
            .with_resizable(false),
        ..Default::default()
    };
    eframe::run_native(
        "easel",
        options,
        Box::new(|cc| Ok(Box::new(PaintApp::new(cc)))),
    )?;
    Ok(())
}
