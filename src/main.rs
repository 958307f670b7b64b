use dohatui::{
    config::Config,
    ui::app::App,
    util::{hook::set_panic_hook, log::initialize_logging},
};

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    setup()?;

    let mut app = App::new(Config::resolve());
    app.run().await
}

fn setup() -> color_eyre::Result<()> {
    color_eyre::install()?;
    set_panic_hook();
    initialize_logging()
}
