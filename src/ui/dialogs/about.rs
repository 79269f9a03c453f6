use fltk::{
    button::Button,
    enums::{Align, Font},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    window::Window,
};

use super::run_dialog;
use crate::app::shell::AboutInfo;

/// Show About dialog
pub fn show_about_dialog(info: &AboutInfo) {
    let mut dialog = Window::default()
        .with_size(320, 180)
        .with_label("About")
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 300, 160, None);
    flex.set_type(FlexType::Column);
    flex.set_spacing(8);

    let mut title = Frame::default();
    title.set_label(info.name);
    title.set_label_size(18);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 32);

    let mut details = Frame::default();
    details.set_label(&format!("Version {}\n{}", info.version, info.author));
    details.set_label_size(13);
    details.set_align(Align::Center | Align::Inside);

    let mut close_btn = Button::default().with_label("OK");
    flex.fixed(&close_btn, 30);

    flex.end();
    dialog.end();

    let mut dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.hide();
    });

    dialog.show();
    run_dialog(&dialog);
}
