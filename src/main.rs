use fltk::{app, enums::Event, prelude::*};
use tracing::info;

use plainpad::app::{AppState, EditorSettings, FileFilter, Message};
use plainpad::ui::main_window::build_main_window;
use plainpad::ui::menu::build_menu;
use plainpad::ui::shell::FltkShell;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let settings = EditorSettings::default();
    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&settings);
    build_menu(&mut widgets.menu, &sender);

    // Route the close button through the exit prompt; Escape must not close.
    widgets.wind.set_callback(move |_| {
        if app::event() == Event::Close {
            sender.send(Message::WindowClose);
        }
    });

    widgets.wind.show();
    widgets.text_editor.take_focus().ok();

    let mut state = AppState::new(FltkShell::new(widgets), FileFilter::text_files());
    info!("editor started");

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            state.dispatch(msg);
        }
    }
}
