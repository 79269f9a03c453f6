use fltk::{
    enums::{Align, Font, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::document::DEFAULT_TITLE;
use crate::app::settings::EditorSettings;

pub const MENU_HEIGHT: i32 = 30;
pub const STATUS_BAR_HEIGHT: i32 = 28;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub text_editor: TextEditor,
    pub buffer: TextBuffer,
    pub status_bar: Frame,
}

pub fn build_main_window(settings: &EditorSettings) -> MainWidgets {
    let (w, h) = (settings.window_width, settings.window_height);
    let mut wind = Window::new(100, 100, w, h, DEFAULT_TITLE);
    wind.set_xclass("plainpad");

    let mut flex = Flex::new(0, 0, w, h, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, MENU_HEIGHT, "");
    flex.fixed(&menu, MENU_HEIGHT);

    let buffer = TextBuffer::default();
    let mut text_editor = TextEditor::new(0, 0, 0, 0, "");
    text_editor.set_buffer(buffer.clone());
    text_editor.set_text_font(Font::Helvetica);
    text_editor.set_text_size(settings.font_size);
    if settings.word_wrap {
        text_editor.wrap_mode(WrapMode::AtBounds, 0);
    }

    // Sunken, left-aligned label along the bottom edge
    let mut status_bar = Frame::default();
    status_bar.set_frame(FrameType::DownBox);
    status_bar.set_align(Align::Left | Align::Inside);
    status_bar.set_label_size(13);
    flex.fixed(&status_bar, STATUS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        text_editor,
        buffer,
        status_bar,
    }
}
