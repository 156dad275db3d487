#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_title("unfold"),
        ..Default::default()
    };
    eframe::run_native(
        "unfold",
        options,
        Box::new(|cc| Ok(Box::new(unfold_ui::PortfolioApp::new(cc)))),
    )
}

// The web build enters through `unfold_ui::start` instead.
#[cfg(target_arch = "wasm32")]
fn main() {}
